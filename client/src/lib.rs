//! # client
//!
//! Leptos + WASM dashboard for the station stream overlay. Hosts the live
//! `Stream` view and the `TemplateEditor` on top of the `canvas` crate.
//!
//! State, network types and pointer mapping build natively so they can be
//! unit tested; the views and the entry point need the `csr` feature.

pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;

/// Browser entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("station dashboard starting");
    }
    leptos::mount::mount_to_body(app::App);
}
