//! Geometry primitives shared by drawing and hit-testing.
//!
//! All coordinates are in surface space, which is the native pixel space of
//! the stream image. Nothing here is normalized.
//!
//! The rectangle test is closed (edges count as inside) while the circle test
//! is open (the rim does not). Callers rely on that split so a point exactly
//! on the resize handle's rim falls through to the move region.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Corner opposite the anchor; the resize handle sits here.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Closed-interval containment, see [`is_in_rectangle`].
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        is_in_rectangle(pt.x, pt.y, self.x, self.y, self.width, self.height)
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x1 - x2).hypot(y1 - y2)
}

/// True iff `x` lies in `[lo, hi]`.
#[must_use]
pub fn is_between(x: f64, lo: f64, hi: f64) -> bool {
    x >= lo && x <= hi
}

/// True iff `(x, y)` lies in `[rx, rx + rw] × [ry, ry + rh]`.
#[must_use]
pub fn is_in_rectangle(x: f64, y: f64, rx: f64, ry: f64, rw: f64, rh: f64) -> bool {
    is_between(x, rx, rx + rw) && is_between(y, ry, ry + rh)
}

/// True iff `(x, y)` is strictly closer than `cr` to `(cx, cy)`.
#[must_use]
pub fn is_in_circle(x: f64, y: f64, cx: f64, cy: f64, cr: f64) -> bool {
    distance(x, y, cx, cy) < cr
}
