//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod alert_detail;
pub mod alerts;
pub mod dashboard;
pub mod filter;
pub mod login;
pub mod settings;
pub mod signup;
pub mod userlist;
