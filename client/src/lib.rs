//! # client
//!
//! Leptos + WASM frontend for the IELTS Pro landing page.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Pure logic (theme and carousel controllers, animation
//! sampling and CSS generation, page copy) is feature-independent and
//! tested natively; browser access is confined to `util`.

pub mod animation;
pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated JS loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    log::debug!("hydrating landing page");
    leptos::mount::hydrate_body(app::App);
}
