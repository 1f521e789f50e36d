//! # arabian-odyssey
//!
//! Leptos + WASM client for the Arabian Odyssey travel site: signup and
//! signin with email confirmation, profile/settings management, and
//! browsing of categorized attractions, all backed by the remote HTTP API.
//!
//! The crate compiles in two modes. With the `csr` feature it builds to
//! WASM and mounts the app in the browser; without features it builds
//! natively so the state and parsing logic can run under `cargo test`.
//! Everything that touches the browser is gated on `csr` with native stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: installs panic/console logging hooks and mounts
/// the root [`app::App`] component onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
