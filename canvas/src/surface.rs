//! Drawing surface abstraction.
//!
//! [`Surface`] is the slice of a 2D canvas context that the drawing module and
//! the frame composer need. The browser implementation lives in
//! [`crate::web`]; [`crate::record::RecordingSurface`] records calls for
//! inspection in tests.
//!
//! Surface state (blend mode, styles, dash, line width, font, alpha) is a
//! stack. Every drawing operation in this crate opens a [`StateGuard`] before
//! touching it, so nothing leaks into the next draw no matter how the
//! operation returns.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::ops::{Deref, DerefMut};

use crate::geom::{Point, Rect};

/// Error raised by a drawing backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The backend rejected a call.
    #[error("surface call failed: {0}")]
    Backend(String),
    /// No 2D context could be obtained for the target element.
    #[error("2d context unavailable")]
    ContextUnavailable,
}

/// Compositing operation applied to subsequent draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composite {
    #[default]
    SourceOver,
    Difference,
    Screen,
    Darken,
}

impl Composite {
    /// Name as understood by `globalCompositeOperation`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::Difference => "difference",
            Self::Screen => "screen",
            Self::Darken => "darken",
        }
    }
}

/// Measured extents of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f64,
    /// Distance from the baseline to the top of the ink.
    pub ascent: f64,
    /// Distance from the anchor to the right edge of the ink.
    pub right: f64,
}

/// A raster image that can be drawn onto a surface.
pub trait FrameImage {
    /// Native width in pixels; zero until the image has loaded.
    fn width(&self) -> u32;
    /// Native height in pixels; zero until the image has loaded.
    fn height(&self) -> u32;
}

/// A stateful 2D drawing target.
pub trait Surface {
    /// Image type accepted by [`Surface::draw_image`].
    type Image: FrameImage;

    /// Push the current drawing state.
    fn save(&mut self);
    /// Pop the drawing state pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    fn set_composite(&mut self, op: Composite) -> Result<(), SurfaceError>;
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn line_width(&self) -> f64;
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), SurfaceError>;
    fn set_font(&mut self, font: &str);

    fn stroke_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
    /// Stroke a full circle as a fresh path.
    fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError>;
    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError>;
    fn stroke_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError>;
    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, SurfaceError>;

    /// Resize the backing store. Clears the contents and resets state.
    fn resize(&mut self, width: u32, height: u32);
    fn draw_image(&mut self, image: &Self::Image, at: Point) -> Result<(), SurfaceError>;
}

/// Scoped drawing state: `save()` on creation, `restore()` on drop.
///
/// Derefs to the wrapped surface so drawing goes through the guard.
pub struct StateGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> StateGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for StateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for StateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for StateGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
