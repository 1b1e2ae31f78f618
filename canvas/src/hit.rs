//! Interaction resolution: which action a pointer position implies on a template.
//!
//! Hit zones mirror what [`crate::draw`] paints. The resize handle is the
//! circle drawn by [`crate::draw::editor_draw_selected_template`] and the move
//! zone is the template rectangle itself.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::TEMPLATE_CIRCLE_SIZE;
use crate::geom::{Point, Rect, is_in_circle, is_in_rectangle};
use crate::template::Template;

/// What a pointer-down on a template starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Drag the bottom-right corner.
    Resize,
    /// Drag the whole template, keeping the grab point under the pointer.
    Move {
        /// Pointer x minus template x at the moment of the hit.
        offset_x: f64,
        /// Pointer y minus template y at the moment of the hit.
        offset_y: f64,
    },
}

/// Classify a pointer position against one template.
///
/// The handle is checked before the body because the two overlap near the
/// corner, and resize must win there.
#[must_use]
pub fn get_action_for_template(x: f64, y: f64, template: &Template) -> Option<Action> {
    let r = template.rect;
    let corner = r.bottom_right();

    if is_in_circle(x, y, corner.x, corner.y, TEMPLATE_CIRCLE_SIZE) {
        return Some(Action::Resize);
    }
    if is_in_rectangle(x, y, r.x, r.y, r.width, r.height) {
        return Some(Action::Move { offset_x: x - r.x, offset_y: y - r.y });
    }
    None
}

/// Resolve against a whole list, topmost (last drawn) first.
///
/// Returns the index of the hit template alongside the action.
#[must_use]
pub fn action_at(pt: Point, templates: &[Template]) -> Option<(usize, Action)> {
    templates
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, t)| get_action_for_template(pt.x, pt.y, t).map(|a| (i, a)))
}

/// New geometry for a template being dragged with `action` to `pointer`.
///
/// Move keeps the original grab offset so the template does not snap its
/// corner to the pointer. Resize puts the bottom-right corner under the
/// pointer; width and height never go below zero.
#[must_use]
pub fn apply_drag(action: Action, pointer: Point, rect: Rect) -> Rect {
    match action {
        Action::Move { offset_x, offset_y } => {
            Rect::new(pointer.x - offset_x, pointer.y - offset_y, rect.width, rect.height)
        }
        Action::Resize => Rect::new(rect.x, rect.y, (pointer.x - rect.x).max(0.0), (pointer.y - rect.y).max(0.0)),
    }
}
