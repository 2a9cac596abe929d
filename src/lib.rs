//! # aibot-client
//!
//! Leptos + WASM page glue for the tutoring site: theme switching, the JSON
//! API wrapper with its session-expiry policy, toast notifications, the
//! loading overlay and token formatting.
//!
//! Every browser touch is gated behind the `hydrate` feature. Native builds
//! keep the same API with no-op browser edges so the logic is testable with
//! plain `cargo test`.

pub mod app;
#[cfg(feature = "hydrate")]
pub mod bindings;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: panic hook, console logging, then page boot.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    bindings::boot();
}
