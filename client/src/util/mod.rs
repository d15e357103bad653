//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod audit;
pub mod auth;
pub mod device;
pub mod download;
pub mod forms;
pub mod maps;
pub mod pagination;
pub mod session_store;
pub mod storage;
