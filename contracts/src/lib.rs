//! Shared request/response contracts for the scanner alert backend.
//!
//! This crate owns the wire representation used by `client`, `server` and
//! `cli`. Every endpoint the dashboard calls has an explicit request and
//! response type here; enums with a closed set of values (category,
//! permission, star rating) are validated while decoding so malformed backend
//! data fails at the network boundary instead of deep inside a view.

pub mod alerts;
pub mod auth;
pub mod dates;
pub mod endpoints;
pub mod export;
pub mod settings;
pub mod users;
pub mod validate;

pub use alerts::{
    AddressCandidate, Alert, AlertCategory, AlertDetail, AlertDetailQuery, AlertObject, AlertsPage, AlertsQuery,
    AudioClip, ContactGroup, ContactGroupKind, ContactInfo, Grantee, GranteesResponse, PaginationInfo,
    ResidentInfo, Scanner, StarRating, UnlockContactRequest,
};
pub use auth::{ApiErrorBody, LoginRequest, LoginResponse, SessionUser, SignupRequest};
pub use settings::{CategorySetting, SubCategoryQuery, UsState};
pub use users::{NewOperator, OperatorAccount, OperatorList, OperatorUpdate, Permission, VisitRecord};

/// Generic `{ status, message }` acknowledgement returned by mutating endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
}

/// Error returned when a value cannot be mapped onto a contract type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// Star ratings are limited to `0..=5`.
    #[error("star rating out of range: {0}")]
    InvalidRating(u8),
    /// The category label is not one of the known alert categories.
    #[error("unknown alert category: {0}")]
    UnknownCategory(String),
    /// The permission string is not one of `ADMIN`, `MANAGER`, `SALES`.
    #[error("unknown permission: {0}")]
    UnknownPermission(String),
    /// A date input did not match `YYYY-MM-DD`.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
