//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, tables and dialogs while reading and
//! writing shared state from Leptos context providers.

pub mod address_table;
pub mod alert_filters;
pub mod alert_table;
pub mod category_table;
pub mod form_input;
pub mod nav_menu;
pub mod operator_table;
pub mod pagination_bar;
pub mod toast_host;
pub mod user_modals;
