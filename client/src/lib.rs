//! # client
//!
//! Leptos + WASM frontend for the team chat application.
//!
//! This crate contains the channel page, the sidebar components, application
//! state, and the REST helpers that load the signed-in user. Sidebar sizing
//! itself lives in the `sidebar` crate; components here only wire DOM events
//! into a `sidebar::panel::ResizablePanel`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
