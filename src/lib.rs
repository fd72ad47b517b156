//! # courier-client
//!
//! Leptos + WASM frontend for the Courier chat application: login and
//! registration forms, a conversation sidebar, a message thread view, and
//! profile settings, backed by REST calls plus a WebSocket channel for live
//! message delivery.
//!
//! This crate contains pages, components, application state, network types,
//! the REST API helpers, and the realtime message channel.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
