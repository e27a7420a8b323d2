//! # costlens-client
//!
//! Leptos + WASM frontend for the CostLens AWS cost dashboard.
//!
//! This crate contains pages, components, session state, REST helpers, and
//! the pure route-guard decision shared with the `server` crate's middleware.
//! It is compiled with `hydrate` for the browser and with `ssr` for server
//! rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mounts the app over the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
