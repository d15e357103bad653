//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hold these plain structs inside `RwSignal`s. Keeping the rules here
//! (page resets, stale-response guards, search application) lets them be
//! tested without a browser.

pub mod address_rows;
pub mod alert_list;
pub mod fetch_seq;
pub mod session;
pub mod settings;
pub mod toast;
pub mod user_list;
