//! Overlay rendering and interaction engine for the station stream views.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws
//! object templates and task-step regions over a live camera stream, resolves
//! pointer positions on templates into move/resize actions, and drives the
//! per-frame redraw loop. Everything except [`web`] is platform-free and is
//! tested natively against [`record::RecordingSurface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | Points, rectangles and containment predicates |
//! | [`template`] | Template records and their presence status |
//! | [`task`] | Task snapshot and detector types from the backend |
//! | [`surface`] | Drawing surface trait and state guard |
//! | [`draw`] | Template, label, fps and darken drawing |
//! | [`hit`] | Pointer-to-action resolution and drag geometry |
//! | [`engine`] | Frame composer and cancellable render loop |
//! | [`config`] | Stream URL configuration and source selection |
//! | [`record`] | Recording surface for inspection |
//! | [`web`] | Canvas surface, animation-frame scheduler, resize watching |
//! | [`consts`] | Colors, widths, fonts and thresholds |

pub mod config;
pub mod consts;
pub mod draw;
pub mod editor;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod record;
pub mod surface;
pub mod task;
pub mod template;
pub mod web;
