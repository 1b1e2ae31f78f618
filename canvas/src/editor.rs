//! Template editor state: selection, drag tracking and frame composition.
//!
//! [`EditorCore`] holds the template list being edited and turns pointer
//! events into geometry changes through [`crate::hit`]. It has no platform
//! dependencies; the client view forwards pointer positions already mapped to
//! image pixels and redraws with [`compose_editor`] whenever a call reports a
//! change.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::draw::{editor_darken_outside_rectangle, editor_draw_selected_template, editor_draw_templates};
use crate::geom::Point;
use crate::hit::{Action, action_at, apply_drag, get_action_for_template};
use crate::surface::{FrameImage, Surface, SurfaceError};
use crate::template::Template;

/// An in-progress drag: which template, and what the pointer-down started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub index: usize,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub struct EditorCore {
    templates: Vec<Template>,
    selected: Option<usize>,
    drag: Option<Drag>,
    pub draw_labels: bool,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl EditorCore {
    #[must_use]
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates, selected: None, drag: None, draw_labels: true }
    }

    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Replace the list. Selection and any drag are dropped.
    pub fn set_templates(&mut self, templates: Vec<Template>) {
        self.templates = templates;
        self.selected = None;
        self.drag = None;
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Template> {
        self.selected.and_then(|i| self.templates.get(i))
    }

    #[must_use]
    pub fn drag(&self) -> Option<Drag> {
        self.drag
    }

    /// Append a template and select it. Returns its index.
    pub fn add(&mut self, template: Template) -> usize {
        self.templates.push(template);
        let index = self.templates.len() - 1;
        self.selected = Some(index);
        index
    }

    /// Remove the selected template, if any.
    pub fn remove_selected(&mut self) -> Option<Template> {
        let index = self.selected.take()?;
        self.drag = None;
        (index < self.templates.len()).then(|| self.templates.remove(index))
    }

    /// Start an interaction at `pt`.
    ///
    /// The selected template is tried first so its handle stays grabbable
    /// where it overlaps other templates; otherwise the topmost hit wins.
    /// Clicking empty space clears the selection. Returns whether anything
    /// visible changed.
    pub fn pointer_down(&mut self, pt: Point) -> bool {
        let hit = self
            .selected
            .and_then(|i| {
                let t = self.templates.get(i)?;
                get_action_for_template(pt.x, pt.y, t).map(|a| (i, a))
            })
            .or_else(|| action_at(pt, &self.templates));

        match hit {
            Some((index, action)) => {
                let changed = self.selected != Some(index);
                self.selected = Some(index);
                self.drag = Some(Drag { index, action });
                changed
            }
            None => {
                self.drag = None;
                self.selected.take().is_some()
            }
        }
    }

    /// Continue a drag to `pt`. Returns whether geometry changed.
    pub fn pointer_move(&mut self, pt: Point) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let Some(t) = self.templates.get_mut(drag.index) else {
            return false;
        };
        let next = apply_drag(drag.action, pt, t.rect);
        if next == t.rect {
            return false;
        }
        t.rect = next;
        true
    }

    /// End the drag. Returns the edited template, if a drag was active.
    pub fn pointer_up(&mut self) -> Option<&Template> {
        let drag = self.drag.take()?;
        self.templates.get(drag.index)
    }

    /// CSS cursor hinting what a pointer-down at `pt` would start.
    #[must_use]
    pub fn cursor_at(&self, pt: Point) -> &'static str {
        if let Some(drag) = self.drag {
            return cursor_for(drag.action);
        }
        let action = self
            .selected()
            .and_then(|t| get_action_for_template(pt.x, pt.y, t))
            .or_else(|| action_at(pt, &self.templates).map(|(_, a)| a));
        action.map_or("default", cursor_for)
    }
}

fn cursor_for(action: Action) -> &'static str {
    match action {
        Action::Resize => "nwse-resize",
        Action::Move { .. } => "move",
    }
}

/// Draw one editor frame: image, dimmed surroundings of the selection, every
/// template dashed, then the selection on top.
///
/// # Errors
///
/// Returns `Err` on the first failing surface call.
pub fn compose_editor<S: Surface + ?Sized>(
    surface: &mut S,
    image: &S::Image,
    editor: &EditorCore,
) -> Result<(), SurfaceError> {
    let (w, h) = (image.width(), image.height());
    surface.resize(w, h);
    if w == 0 || h == 0 {
        return Ok(());
    }
    surface.draw_image(image, Point::new(0.0, 0.0))?;

    let selected = editor.selected();
    if let Some(t) = selected {
        editor_darken_outside_rectangle(surface, t.rect, f64::from(w), f64::from(h))?;
    }
    editor_draw_templates(surface, &editor.templates, editor.draw_labels)?;
    if let Some(t) = selected {
        editor_draw_selected_template(surface, t, editor.draw_labels)?;
    }
    Ok(())
}
