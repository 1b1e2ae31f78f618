#![allow(clippy::float_cmp)]

use super::*;
use crate::record::{Op, RecordingSurface};

fn failing_draw(surface: &mut RecordingSurface) -> Result<(), SurfaceError> {
    let mut g = StateGuard::new(surface);
    g.set_line_width(9.0);
    g.set_composite(Composite::Difference)?;
    g.fill_text("boom", Point::new(0.0, 0.0))?;
    g.set_line_width(11.0);
    Ok(())
}

// =============================================================
// StateGuard
// =============================================================

#[test]
fn guard_saves_and_restores() {
    let mut s = RecordingSurface::new();
    {
        let mut g = StateGuard::new(&mut s);
        g.set_stroke_style("#abc");
        assert_eq!(g.depth(), 1);
    }
    assert_eq!(s.depth(), 0);
    assert_eq!(s.state().stroke_style, "#000000");
    assert_eq!(s.ops(), &[Op::Save, Op::Restore]);
}

#[test]
fn guard_restores_on_early_return() {
    let mut s = RecordingSurface::new().failing_text();
    let result = failing_draw(&mut s);
    assert!(result.is_err());
    assert_eq!(s.depth(), 0);
    assert_eq!(s.state().line_width, 1.0);
    assert_eq!(s.state().composite, Composite::SourceOver);
}

#[test]
fn nested_guards_unwind_in_order() {
    let mut s = RecordingSurface::new();
    {
        let mut outer = StateGuard::new(&mut s);
        outer.set_line_width(4.0);
        {
            let mut inner = StateGuard::new(&mut *outer);
            inner.set_line_width(2.0);
            assert_eq!(inner.line_width(), 2.0);
        }
        assert_eq!(outer.line_width(), 4.0);
    }
    assert_eq!(s.line_width(), 1.0);
    assert_eq!(s.depth(), 0);
}

// =============================================================
// Composite
// =============================================================

#[test]
fn composite_names_match_canvas_keywords() {
    assert_eq!(Composite::SourceOver.as_str(), "source-over");
    assert_eq!(Composite::Difference.as_str(), "difference");
    assert_eq!(Composite::Screen.as_str(), "screen");
    assert_eq!(Composite::Darken.as_str(), "darken");
    assert_eq!(Composite::default(), Composite::SourceOver);
}

// =============================================================
// RecordingSurface
// =============================================================

#[test]
fn resize_resets_state_and_stack() {
    let mut s = RecordingSurface::new();
    s.save();
    s.set_fill_style("red");
    s.resize(320, 180);
    assert_eq!(s.size(), (320, 180));
    assert_eq!(s.depth(), 0);
    assert_eq!(s.state().fill_style, "#000000");
}

#[test]
fn unmatched_restore_is_harmless() {
    let mut s = RecordingSurface::new();
    s.restore();
    assert_eq!(s.depth(), 0);
}

#[test]
fn error_display() {
    assert_eq!(SurfaceError::Backend("x".into()).to_string(), "surface call failed: x");
    assert_eq!(SurfaceError::ContextUnavailable.to_string(), "2d context unavailable");
}
