//! # boboyii
//!
//! Leptos + WASM landing page for Boboyii, voice AI agents for African call
//! operations.
//!
//! This crate contains the page sections, their local UI state, the static
//! copy, and the browser host for the `wordcycle` engine that drives the
//! rotating headline words. Build with the `csr` feature (Trunk does this via
//! `index.html`); without it everything compiles natively for tests and the
//! browser-only paths no-op.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("boboyii {} starting", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(app::App);
}
