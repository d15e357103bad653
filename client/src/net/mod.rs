//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every backend endpoint behind typed calls; `geo` performs the
//! optional IP geolocation lookup used for audit records.

pub mod api;
pub mod geo;
