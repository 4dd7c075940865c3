//! # client
//!
//! Leptos + WASM frontend for the product catalog admin.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the catalog backend. Logic that does not need a browser (session
//! store, route guard, list/form state, auth gateway, catalog controller) is
//! plain Rust and tested natively; browser-only transport sits behind the
//! `hydrate` feature.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
