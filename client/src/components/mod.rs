//! Dashboard views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views read shared state from Leptos context and hand drawing off to the
//! `canvas` crate.

pub mod location_menu;
pub mod stream;
pub mod template_editor;
