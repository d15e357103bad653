//! Backend endpoint paths.
//!
//! Paths are relative to the API origin. The browser calls them on its own
//! origin (the dashboard server forwards `/api/*`), the CLI prefixes its
//! configured base URL.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const ALERTS_BY_FILTER: &str = "/api/alerts/get-alerts-by-filter";
pub const ALERT_BY_ID: &str = "/api/alerts/get-alert-by-id";
pub const UNLOCK_CONTACT_INFO: &str = "/api/alerts/unlock-contact-info";
pub const GRANTEE_INFO: &str = "/api/alerts/get-grantee-info";

pub const INSERT_USER_STATUS: &str = "/api/userlist/insert-user-status";
pub const UPDATE_USER_STATUS: &str = "/api/userlist/update-user-status";
pub const GET_USER_STATUS: &str = "/api/userlist/get-user-status";

pub const LOGIN: &str = "/api/auth/login";
pub const SIGNUP: &str = "/api/auth/signup";

pub const SUB_CATEGORIES_BY_CATEGORY: &str = "/api/settings/get-sub-categories-by-category";
pub const STATE_LIST: &str = "/api/billing/get-state-list";

/// Join an API base URL and an endpoint path without doubling the slash.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
