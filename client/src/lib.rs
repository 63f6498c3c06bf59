//! # client
//!
//! Leptos + WASM frontend for the RBAC dashboard.
//!
//! This crate contains the page, components, and UI state. Entity data,
//! view derivation, and form validation come from the `rbac` crate; the
//! client wraps each panel's `PanelState` in a reactive signal and renders it.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    util::logging::init();
    leptos::mount::hydrate_body(app::App);
}
