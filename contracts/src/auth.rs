//! Login, signup and backend error-body contracts.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/auth/login`, tagged with the caller's device fingerprint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub device: String,
    pub browser: String,
    pub os: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipaddress: Option<String>,
}

/// Authenticated dashboard user as returned at login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionUser {
    pub id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl SessionUser {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Response of `POST /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub access_token: Option<String>,
    pub user: Option<SessionUser>,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: String,
}

/// Error body returned by the backend on non-success statuses.
///
/// `message` is either a single string or a list of validation messages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Value,
}

impl ApiErrorBody {
    /// Flatten the backend message into one line, if it carries any text.
    #[must_use]
    pub fn human_message(&self) -> Option<String> {
        let text = match &self.message {
            Value::String(s) => s.trim().to_owned(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            _ => String::new(),
        };
        (!text.is_empty()).then_some(text)
    }
}
