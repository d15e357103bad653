//! # dashboard
//!
//! Leptos + WASM frontend for the radio-scanner alert admin dashboard.
//!
//! This crate contains pages, components, client state, the typed REST
//! client and browser utilities. It is compiled twice: with `ssr` for the
//! server's HTML shell and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
