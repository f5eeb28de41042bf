//! # client
//!
//! Leptos + WASM frontend for the market size calculator.
//!
//! This crate contains the root [`app::App`] component, the form/chart/export
//! components, the reactive [`state::session::MarketState`] container, and the
//! clipboard export port. Market math lives in the `market` crate and chart
//! geometry in the `canvas` crate; everything here is presentation and
//! browser plumbing.
//!
//! Browser-only code is gated behind the `csr` feature so the crate (and its
//! tests) also build natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A logger may already be installed on hot reload.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("market size calculator starting");
    leptos::mount::mount_to_body(app::App);
}
