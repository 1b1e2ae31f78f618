//! Shared drawing and hit-testing constants for the canvas crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius of the resize handle drawn at a template's bottom-right corner.
///
/// The same circle is the resize hit zone in [`crate::hit`].
pub const TEMPLATE_CIRCLE_SIZE: f64 = 12.0;

// ── Templates ───────────────────────────────────────────────────

/// Background (contrast) stroke for every template outline.
pub const TEMPLATE_COLOR: &str = "#ff0";

/// Dash color for templates drawn in the editor.
pub const TEMPLATE_DASH_COLOR: &str = "#fff";

/// Stroke color for the selected template in the editor.
pub const SELECTED_TEMPLATE_COLOR: &str = "#0f0";

/// Line width used by the editor.
pub const TEMPLATE_LINE_WIDTH: f64 = 2.0;

/// Line width used on the live stream.
pub const STREAM_TEMPLATE_LINE_WIDTH: f64 = 4.0;

/// Dash color for templates without a presence signal.
pub const UNTRACKED_DASH_COLOR: &str = "#444";

/// Opacity of templates without a presence signal.
pub const UNTRACKED_ALPHA: f64 = 0.5;

/// Dash color for a tracked template whose object is present.
pub const PRESENT_DASH_COLOR: &str = "#0f0";

/// Dash color for a tracked template whose object is missing.
pub const MISSING_DASH_COLOR: &str = "#f00";

/// Fill used to dim the frame outside the focus rectangle.
pub const DARKEN_FILL: &str = "rgba(0, 0, 0, 0.2)";

// ── Labels ──────────────────────────────────────────────────────

pub const LABEL_FONT: &str = "16px sans-serif";
pub const LABEL_BACKGROUND: &str = "#000";
pub const LABEL_FOREGROUND: &str = "#fff";
pub const LABEL_OFFSET_X: f64 = 2.0;
pub const LABEL_OFFSET_Y: f64 = 4.0;

// ── FPS readout ─────────────────────────────────────────────────

pub const FPS_FONT: &str = "bold 32px sans-serif";
pub const FPS_LOW_COLOR: &str = "#ed371d";
pub const FPS_MEDIUM_COLOR: &str = "#f3ba1c";
pub const FPS_HIGH_COLOR: &str = "#5ef31c";
pub const FPS_OUTLINE_COLOR: &str = "#000";

/// Readouts below this are drawn in the low band.
pub const FPS_LOW_THRESHOLD: f64 = 5.0;

/// Readouts below this (and not low) are drawn in the medium band.
pub const FPS_MEDIUM_THRESHOLD: f64 = 15.0;

// ── Task overlay ────────────────────────────────────────────────

pub const REMAINING_STEP_COLOR: &str = "green";
pub const REMAINING_STEP_LINE_WIDTH: f64 = 5.0;
pub const ALL_STEPS_COLOR: &str = "grey";
pub const ALL_STEPS_LINE_WIDTH: f64 = 2.0;
pub const ALL_STEPS_DASH: [f64; 2] = [5.0, 10.0];

// ── Stream container ────────────────────────────────────────────

/// Presentation aspect of the stream container (width : height).
pub const STREAM_ASPECT_WIDTH: f64 = 16.0;
pub const STREAM_ASPECT_HEIGHT: f64 = 9.0;

/// Length of the rolling window used to compute frames per second.
pub const FPS_WINDOW_MS: f64 = 1000.0;
