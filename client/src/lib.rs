//! # identra-client
//!
//! Leptos + WASM console UI for Identra OS: a root shell that picks the
//! launcher or chat view, the chat screen (sidebar, transcript, composer,
//! context panel), and the call gateway used to reach the host.
//!
//! All business logic lives in the host; this crate only holds local UI
//! state and forwards user actions through `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
