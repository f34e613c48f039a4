//! # client
//!
//! Leptos + WASM frontend for labdeck: a dashboard of self-contained lab
//! panels. Every panel keeps its own state and calls into the `labs` crate
//! for the actual logic; this crate only owns forms, rendering, and the few
//! browser capabilities (timers, clipboard, `localStorage`, `fetch`).

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
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
