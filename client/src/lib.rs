//! # client
//!
//! Leptos + WASM front-end for Rollcall, the event check-in and engagement
//! app. Built with `ssr` for the Axum host and `hydrate` for the browser.
//!
//! Pages fetch their own data from the external REST API on mount; the
//! offline queue, caches and chat feed live in the `roster` crate so they
//! stay testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console_log init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
