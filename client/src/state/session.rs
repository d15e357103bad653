//! Session context for the signed-in dashboard user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the single authority for "who is signed in". The app
//! provides one `RwSignal<SessionState>` via context; route guards, the
//! navigation menu, the visit audit and every authenticated request read from
//! it. Persistence to browser storage is a side effect of this state, never a
//! second source of truth.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use contracts::{LoginResponse, SessionUser};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    /// True until persisted credentials have been read on startup.
    pub loading: bool,
}

impl SessionState {
    /// State before browser storage has been consulted.
    #[must_use]
    pub fn restoring() -> Self {
        Self { user: None, token: None, loading: true }
    }

    /// State rebuilt from persisted credentials (either may be missing).
    #[must_use]
    pub fn restored(user: Option<SessionUser>, token: Option<String>) -> Self {
        Self { user, token: token.filter(|t| !t.is_empty()), loading: false }
    }

    /// State after a successful login response.
    #[must_use]
    pub fn from_login(response: LoginResponse) -> Self {
        Self::restored(response.user, response.access_token)
    }

    /// A session counts as authenticated as soon as a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(SessionUser::full_name)
            .filter(|n| !n.is_empty())
            .or_else(|| self.user.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default()
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
    }
}

/// Whether a guarded route should bounce to the login page.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}
