//! In-memory [`Surface`] that records every draw call.
//!
//! Used as the inspection harness in tests: assertions are made on the
//! sequence of [`Op`]s and on the drawing state captured with each one rather
//! than on pixels. The save/restore stack is simulated the way a canvas
//! context behaves, including the reset on [`Surface::resize`].

use crate::geom::{Point, Rect};
use crate::surface::{Composite, FrameImage, Surface, SurfaceError, TextMetrics};

/// Advance used by [`RecordingSurface::measure_text`] per character.
pub const RECORDED_CHAR_WIDTH: f64 = 8.0;

/// Ascent reported by [`RecordingSurface::measure_text`].
pub const RECORDED_ASCENT: f64 = 12.0;

/// Drawing state in effect when an op was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub composite: Composite,
    pub alpha: f64,
    pub stroke_style: String,
    pub fill_style: String,
    pub line_width: f64,
    pub line_dash: Vec<f64>,
    pub font: String,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            composite: Composite::SourceOver,
            alpha: 1.0,
            stroke_style: "#000000".to_owned(),
            fill_style: "#000000".to_owned(),
            line_width: 1.0,
            line_dash: Vec::new(),
            font: "10px sans-serif".to_owned(),
        }
    }
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Save,
    Restore,
    Resize { width: u32, height: u32 },
    DrawImage { at: Point, width: u32, height: u32 },
    StrokeRect { rect: Rect, state: DrawState },
    FillRect { rect: Rect, state: DrawState },
    StrokeCircle { center: Point, radius: f64, state: DrawState },
    FillText { text: String, at: Point, state: DrawState },
    StrokeText { text: String, at: Point, state: DrawState },
}

/// Image stand-in with fixed native dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedImage {
    pub width: u32,
    pub height: u32,
}

impl RecordedImage {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl FrameImage for RecordedImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// Recording surface. See the module docs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<Op>,
    state: DrawState,
    stack: Vec<DrawState>,
    width: u32,
    height: u32,
    fail_text: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every text call fail, to exercise early-return paths.
    #[must_use]
    pub fn failing_text(mut self) -> Self {
        self.fail_text = true;
        self
    }

    #[must_use]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Drop the recorded ops, keeping state and size.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Current state, i.e. what the next draw would use.
    #[must_use]
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Number of unmatched `save()` calls.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Rectangles stroked, in order, with the state they were stroked in.
    #[must_use]
    pub fn stroked_rects(&self) -> Vec<(Rect, &DrawState)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::StrokeRect { rect, state } => Some((*rect, state)),
                _ => None,
            })
            .collect()
    }

    /// Rectangles filled, in order, with the state they were filled in.
    #[must_use]
    pub fn filled_rects(&self) -> Vec<(Rect, &DrawState)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillRect { rect, state } => Some((*rect, state)),
                _ => None,
            })
            .collect()
    }

    /// Count ops matching `pred`.
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    fn text_result(&self) -> Result<(), SurfaceError> {
        if self.fail_text {
            return Err(SurfaceError::Backend("text disabled".to_owned()));
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    type Image = RecordedImage;

    fn save(&mut self) {
        self.stack.push(self.state.clone());
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
        }
        self.ops.push(Op::Restore);
    }

    fn set_composite(&mut self, op: Composite) -> Result<(), SurfaceError> {
        self.state.composite = op;
        Ok(())
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
    }

    fn set_stroke_style(&mut self, color: &str) {
        color.clone_into(&mut self.state.stroke_style);
    }

    fn set_fill_style(&mut self, color: &str) {
        color.clone_into(&mut self.state.fill_style);
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn line_width(&self) -> f64 {
        self.state.line_width
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), SurfaceError> {
        self.state.line_dash = segments.to_vec();
        Ok(())
    }

    fn set_font(&mut self, font: &str) {
        font.clone_into(&mut self.state.font);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(Op::StrokeRect { rect, state: self.state.clone() });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(Op::FillRect { rect, state: self.state.clone() });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.ops.push(Op::StrokeCircle { center, radius, state: self.state.clone() });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        self.text_result()?;
        self.ops.push(Op::FillText { text: text.to_owned(), at, state: self.state.clone() });
        Ok(())
    }

    fn stroke_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        self.text_result()?;
        self.ops.push(Op::StrokeText { text: text.to_owned(), at, state: self.state.clone() });
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, SurfaceError> {
        self.text_result()?;
        let width = text.chars().count() as f64 * RECORDED_CHAR_WIDTH;
        Ok(TextMetrics { width, ascent: RECORDED_ASCENT, right: width })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.state = DrawState::default();
        self.stack.clear();
        self.ops.push(Op::Resize { width, height });
    }

    fn draw_image(&mut self, image: &RecordedImage, at: Point) -> Result<(), SurfaceError> {
        self.ops.push(Op::DrawImage { at, width: image.width, height: image.height });
        Ok(())
    }
}
