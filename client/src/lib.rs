//! # client
//!
//! Leptos + WASM front end for the АвтоПлатформа landing page.
//!
//! The page shell (header, partner strip, feature cards) is static markup.
//! The only interactive piece is the application dialog, whose state machine
//! and submission workflow live in the `leads` crate; this crate binds them
//! to signals, a `gloo-net` transport and the toaster.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
