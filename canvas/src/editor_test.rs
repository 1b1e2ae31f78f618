#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Rect;
use crate::record::{Op, RecordedImage, RecordingSurface};
use crate::surface::Composite;

fn tpl(name: &str, x: f64, y: f64, w: f64, h: f64) -> Template {
    Template::untracked(name, Rect::new(x, y, w, h)).unwrap()
}

fn two() -> EditorCore {
    EditorCore::new(vec![tpl("a", 0.0, 0.0, 100.0, 100.0), tpl("b", 200.0, 0.0, 50.0, 50.0)])
}

// =============================================================
// Selection
// =============================================================

#[test]
fn pointer_down_selects_hit_template() {
    let mut ed = two();
    assert!(ed.pointer_down(Point::new(210.0, 10.0)));
    assert_eq!(ed.selected_index(), Some(1));
    assert_eq!(ed.drag(), Some(Drag { index: 1, action: Action::Move { offset_x: 10.0, offset_y: 10.0 } }));
}

#[test]
fn pointer_down_on_empty_space_clears_selection() {
    let mut ed = two();
    ed.pointer_down(Point::new(10.0, 10.0));
    ed.pointer_up();
    assert!(ed.pointer_down(Point::new(500.0, 500.0)));
    assert!(ed.selected().is_none());
    assert!(ed.drag().is_none());
}

#[test]
fn pointer_down_on_empty_space_without_selection_is_unchanged() {
    let mut ed = two();
    assert!(!ed.pointer_down(Point::new(500.0, 500.0)));
}

#[test]
fn reselecting_same_template_reports_no_change() {
    let mut ed = two();
    ed.pointer_down(Point::new(10.0, 10.0));
    ed.pointer_up();
    assert!(!ed.pointer_down(Point::new(20.0, 20.0)));
    assert_eq!(ed.selected_index(), Some(0));
}

#[test]
fn selected_handle_wins_over_template_above() {
    // "top" covers a's resize handle at (100, 100).
    let mut ed = EditorCore::new(vec![tpl("a", 0.0, 0.0, 100.0, 100.0), tpl("top", 90.0, 90.0, 50.0, 50.0)]);
    ed.pointer_down(Point::new(10.0, 10.0));
    ed.pointer_up();
    ed.pointer_down(Point::new(100.0, 100.0));
    assert_eq!(ed.drag(), Some(Drag { index: 0, action: Action::Resize }));
}

// =============================================================
// Dragging
// =============================================================

#[test]
fn move_drag_keeps_grab_offset() {
    let mut ed = two();
    ed.pointer_down(Point::new(20.0, 30.0));
    assert!(ed.pointer_move(Point::new(120.0, 80.0)));
    let edited = ed.pointer_up().unwrap();
    assert_eq!(edited.rect, Rect::new(100.0, 50.0, 100.0, 100.0));
}

#[test]
fn resize_drag_moves_corner() {
    let mut ed = two();
    ed.pointer_down(Point::new(100.0, 100.0));
    ed.pointer_move(Point::new(150.0, 120.0));
    assert_eq!(ed.templates()[0].rect, Rect::new(0.0, 0.0, 150.0, 120.0));
}

#[test]
fn move_without_drag_is_ignored() {
    let mut ed = two();
    assert!(!ed.pointer_move(Point::new(50.0, 50.0)));
    assert_eq!(ed.templates()[0].rect, Rect::new(0.0, 0.0, 100.0, 100.0));
}

#[test]
fn move_to_same_position_reports_no_change() {
    let mut ed = two();
    ed.pointer_down(Point::new(20.0, 30.0));
    assert!(!ed.pointer_move(Point::new(20.0, 30.0)));
}

#[test]
fn pointer_up_ends_drag_but_keeps_selection() {
    let mut ed = two();
    ed.pointer_down(Point::new(20.0, 30.0));
    assert!(ed.pointer_up().is_some());
    assert!(ed.pointer_up().is_none());
    assert_eq!(ed.selected_index(), Some(0));
    assert!(!ed.pointer_move(Point::new(60.0, 60.0)));
}

// =============================================================
// List edits
// =============================================================

#[test]
fn add_selects_new_template() {
    let mut ed = two();
    let idx = ed.add(tpl("c", 0.0, 300.0, 10.0, 10.0));
    assert_eq!(idx, 2);
    assert_eq!(ed.selected().map(|t| t.name.as_str()), Some("c"));
}

#[test]
fn remove_selected_removes_and_clears() {
    let mut ed = two();
    ed.pointer_down(Point::new(210.0, 10.0));
    let removed = ed.remove_selected().unwrap();
    assert_eq!(removed.name, "b");
    assert_eq!(ed.templates().len(), 1);
    assert!(ed.selected().is_none());
    assert!(ed.drag().is_none());
}

#[test]
fn remove_without_selection_is_none() {
    let mut ed = two();
    assert!(ed.remove_selected().is_none());
    assert_eq!(ed.templates().len(), 2);
}

#[test]
fn set_templates_resets_selection() {
    let mut ed = two();
    ed.pointer_down(Point::new(10.0, 10.0));
    ed.set_templates(vec![tpl("x", 0.0, 0.0, 1.0, 1.0)]);
    assert!(ed.selected().is_none());
    assert!(ed.drag().is_none());
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_reflects_hover_action() {
    let ed = two();
    assert_eq!(ed.cursor_at(Point::new(100.0, 100.0)), "nwse-resize");
    assert_eq!(ed.cursor_at(Point::new(50.0, 50.0)), "move");
    assert_eq!(ed.cursor_at(Point::new(500.0, 500.0)), "default");
}

#[test]
fn cursor_sticks_to_active_drag() {
    let mut ed = two();
    ed.pointer_down(Point::new(100.0, 100.0));
    assert_eq!(ed.cursor_at(Point::new(900.0, 900.0)), "nwse-resize");
}

// =============================================================
// compose_editor
// =============================================================

#[test]
fn compose_without_selection_draws_image_and_dashed_templates() {
    let ed = two();
    let mut s = RecordingSurface::new();
    compose_editor(&mut s, &RecordedImage::new(640, 360), &ed).unwrap();

    assert_eq!(s.size(), (640, 360));
    assert!(matches!(s.ops()[1], Op::DrawImage { .. }));
    assert!(s.filled_rects().iter().all(|(_, st)| st.composite != Composite::Darken));
    assert_eq!(s.count(|op| matches!(op, Op::StrokeCircle { .. })), 0);
    assert_eq!(s.depth(), 0);
}

#[test]
fn compose_with_selection_darkens_then_highlights() {
    let mut ed = two();
    ed.pointer_down(Point::new(10.0, 10.0));
    let mut s = RecordingSurface::new();
    compose_editor(&mut s, &RecordedImage::new(640, 360), &ed).unwrap();

    let darken = s.filled_rects().iter().filter(|(_, st)| st.composite == Composite::Darken).count();
    assert_eq!(darken, 4);

    let circles: Vec<&Op> = s.ops().iter().filter(|op| matches!(op, Op::StrokeCircle { .. })).collect();
    assert_eq!(circles.len(), 1);
    if let Op::StrokeCircle { center, .. } = circles[0] {
        assert_eq!(*center, Point::new(100.0, 100.0));
    }

    let last_stroke = s.stroked_rects().last().map(|(r, st)| (*r, st.composite));
    assert_eq!(last_stroke, Some((Rect::new(0.0, 0.0, 100.0, 100.0), Composite::Screen)));
    assert_eq!(s.depth(), 0);
}

#[test]
fn compose_unloaded_image_draws_nothing() {
    let ed = two();
    let mut s = RecordingSurface::new();
    compose_editor(&mut s, &RecordedImage::new(0, 0), &ed).unwrap();
    assert_eq!(s.ops(), &[Op::Resize { width: 0, height: 0 }]);
}

#[test]
fn compose_propagates_label_failure() {
    let ed = two();
    let mut s = RecordingSurface::new().failing_text();
    assert!(compose_editor(&mut s, &RecordedImage::new(10, 10), &ed).is_err());
    assert_eq!(s.depth(), 0);
}
