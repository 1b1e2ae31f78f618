#![allow(clippy::float_cmp)]

use super::*;

fn square() -> Template {
    Template::untracked("t", Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap()
}

fn at(name: &str, x: f64, y: f64, w: f64, h: f64) -> Template {
    Template::untracked(name, Rect::new(x, y, w, h)).unwrap()
}

// =============================================================
// get_action_for_template
// =============================================================

#[test]
fn corner_point_resizes_even_though_inside_rect() {
    assert_eq!(get_action_for_template(100.0, 100.0, &square()), Some(Action::Resize));
}

#[test]
fn handle_overlap_inside_rect_resizes() {
    assert_eq!(get_action_for_template(95.0, 95.0, &square()), Some(Action::Resize));
}

#[test]
fn handle_outside_rect_resizes() {
    assert_eq!(get_action_for_template(105.0, 105.0, &square()), Some(Action::Resize));
}

#[test]
fn interior_point_moves_with_offset() {
    assert_eq!(
        get_action_for_template(20.0, 30.0, &square()),
        Some(Action::Move { offset_x: 20.0, offset_y: 30.0 })
    );
}

#[test]
fn offset_is_relative_to_top_left() {
    let t = at("t", 50.0, 60.0, 100.0, 100.0);
    assert_eq!(
        get_action_for_template(55.0, 70.0, &t),
        Some(Action::Move { offset_x: 5.0, offset_y: 10.0 })
    );
}

#[test]
fn far_outside_is_none() {
    assert_eq!(get_action_for_template(200.0, 200.0, &square()), None);
}

#[test]
fn rect_edge_moves() {
    assert_eq!(
        get_action_for_template(0.0, 50.0, &square()),
        Some(Action::Move { offset_x: 0.0, offset_y: 50.0 })
    );
}

#[test]
fn handle_rim_outside_rect_is_none() {
    // Exactly TEMPLATE_CIRCLE_SIZE right of the corner: not in the open circle
    // and beyond the rectangle.
    assert_eq!(get_action_for_template(112.0, 100.0, &square()), None);
}

#[test]
fn handle_rim_inside_rect_moves() {
    assert_eq!(
        get_action_for_template(88.0, 100.0, &square()),
        Some(Action::Move { offset_x: 88.0, offset_y: 100.0 })
    );
}

#[test]
fn zero_size_template_still_has_handle() {
    let t = at("dot", 10.0, 10.0, 0.0, 0.0);
    assert_eq!(get_action_for_template(15.0, 15.0, &t), Some(Action::Resize));
}

// =============================================================
// action_at
// =============================================================

#[test]
fn action_at_prefers_topmost() {
    let list = vec![at("below", 0.0, 0.0, 100.0, 100.0), at("above", 40.0, 40.0, 100.0, 100.0)];
    let (idx, action) = action_at(Point::new(50.0, 50.0), &list).unwrap();
    assert_eq!(idx, 1);
    assert_eq!(action, Action::Move { offset_x: 10.0, offset_y: 10.0 });
}

#[test]
fn action_at_falls_through_to_lower_template() {
    let list = vec![at("below", 0.0, 0.0, 100.0, 100.0), at("above", 300.0, 300.0, 10.0, 10.0)];
    let (idx, _) = action_at(Point::new(50.0, 50.0), &list).unwrap();
    assert_eq!(idx, 0);
}

#[test]
fn action_at_empty_list() {
    assert!(action_at(Point::new(0.0, 0.0), &[]).is_none());
}

// =============================================================
// apply_drag
// =============================================================

#[test]
fn move_drag_preserves_grab_point() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let action = get_action_for_template(20.0, 30.0, &square()).unwrap();
    let moved = apply_drag(action, Point::new(70.0, 90.0), rect);
    assert_eq!(moved, Rect::new(50.0, 60.0, 100.0, 100.0));
}

#[test]
fn resize_drag_moves_bottom_right() {
    let rect = Rect::new(10.0, 10.0, 100.0, 100.0);
    let resized = apply_drag(Action::Resize, Point::new(60.0, 200.0), rect);
    assert_eq!(resized, Rect::new(10.0, 10.0, 50.0, 190.0));
}

#[test]
fn resize_drag_clamps_at_zero() {
    let rect = Rect::new(10.0, 10.0, 100.0, 100.0);
    let resized = apply_drag(Action::Resize, Point::new(0.0, 5.0), rect);
    assert_eq!(resized, Rect::new(10.0, 10.0, 0.0, 0.0));
}

#[test]
fn action_variants_distinct() {
    assert_ne!(Action::Resize, Action::Move { offset_x: 0.0, offset_y: 0.0 });
}
