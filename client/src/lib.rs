//! # client
//!
//! Leptos frontend for the Ritter Digital website. Rendered on the server by
//! `server` and hydrated in the browser from the `hydrate` build.
//!
//! Shared domain rules (validation, blog queries, consent, transitions)
//! come from the `site` crate so both targets agree on them.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
