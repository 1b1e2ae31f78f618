//! Small browser-independent helpers used by the views.

pub mod pointer;
