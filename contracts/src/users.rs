//! Operator account and visit-audit contracts (`/api/userlist/*`).

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ContractError;

/// Role granted to an operator account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Permission {
    Admin,
    Manager,
    Sales,
}

impl Permission {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Manager, Self::Sales];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Sales => "SALES",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ContractError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| ContractError::UnknownPermission(raw.trim().to_owned()))
    }
}

/// Treat `null` and `""` as an absent permission; reject unknown roles.
fn permission_or_none<'de, D>(deserializer: D) -> Result<Option<Permission>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Operator row returned by `GET /api/userlist/get-user-status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorAccount {
    pub id: i64,
    pub email: String,
    pub phone_number: String,
    pub full_name: String,
    pub security_pin: String,
    pub status: String,
    #[serde(deserialize_with = "permission_or_none")]
    pub permission: Option<Permission>,
    pub device: String,
    pub browser: String,
    pub os: String,
    pub city: String,
    pub country: String,
    pub region: String,
    pub ipaddress: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub current_visits: i64,
    pub day_visits: i64,
}

impl OperatorAccount {
    #[must_use]
    pub fn permission_label(&self) -> &'static str {
        self.permission.map_or("No Permission", Permission::as_str)
    }

    #[must_use]
    pub fn status_label(&self) -> &str {
        if self.status.is_empty() { "Active" } else { &self.status }
    }

    #[must_use]
    pub fn phone_label(&self) -> &str {
        if self.phone_number.is_empty() { "-" } else { &self.phone_number }
    }

    #[must_use]
    pub fn location_label(&self) -> String {
        format!("{}, {}, {}", self.city, self.region, self.country)
    }
}

/// Envelope of the operator listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorList {
    #[serde(default)]
    pub data: Vec<OperatorAccount>,
}

/// Create payload for `POST /api/userlist/insert-user-status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOperator {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub security_pin: String,
    pub permission: Permission,
}

/// Update payload for `POST /api/userlist/update-user-status`.
///
/// `security_pin` is omitted entirely when the PIN is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorUpdate {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_pin: Option<String>,
    pub permission: Permission,
}

/// Visit audit record posted to `POST /api/userlist/insert-user-status` when
/// the dashboard shell mounts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub email: String,
    pub full_name: String,
    pub device: String,
    pub browser: String,
    pub os: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipaddress: Option<String>,
    #[serde(rename = "countryCode", default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}
