//! # snapit
//!
//! Leptos + WASM frontend for the SnapIt grocery price-comparison app.
//!
//! This crate contains pages, components, application state, network types,
//! and the search orchestration that talks to the per-retailer scrape
//! services. Browser-only glue is gated behind the `csr` feature so the data
//! shaping and orchestration logic builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
