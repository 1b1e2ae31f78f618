//! Template drawing: outlines, labels, selection, focus dimming, fps readout.
//!
//! These functions only read the templates they are given and write pixels.
//! Every public entry point opens a [`StateGuard`] first, so blend mode, dash,
//! alpha and styles set here never reach the caller's next draw.
//!
//! All fallible surface calls propagate via `Result<(), SurfaceError>`.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::consts::{
    DARKEN_FILL, FPS_FONT, FPS_HIGH_COLOR, FPS_LOW_COLOR, FPS_LOW_THRESHOLD, FPS_MEDIUM_COLOR, FPS_MEDIUM_THRESHOLD,
    FPS_OUTLINE_COLOR, LABEL_BACKGROUND, LABEL_FONT, LABEL_FOREGROUND, LABEL_OFFSET_X, LABEL_OFFSET_Y,
    MISSING_DASH_COLOR, PRESENT_DASH_COLOR, SELECTED_TEMPLATE_COLOR, STREAM_TEMPLATE_LINE_WIDTH, TEMPLATE_CIRCLE_SIZE,
    TEMPLATE_COLOR, TEMPLATE_DASH_COLOR, TEMPLATE_LINE_WIDTH, UNTRACKED_ALPHA, UNTRACKED_DASH_COLOR,
};
use crate::geom::{Point, Rect};
use crate::surface::{Composite, StateGuard, Surface, SurfaceError};
use crate::template::{Presence, Template};

// =============================================================
// Primitives
// =============================================================

/// Stroke `rect` twice: a solid contrast pass in `difference` blend, then a
/// dashed pass in `dash_color`.
///
/// The dash length is twice the current line width, on and off, so callers
/// pick the line width before calling.
///
/// # Errors
///
/// Returns `Err` if the surface rejects the blend mode or dash pattern.
pub fn draw_dashed_template<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    background_color: &str,
    dash_color: &str,
) -> Result<(), SurfaceError> {
    let mut g = StateGuard::new(surface);

    g.set_composite(Composite::Difference)?;
    g.set_stroke_style(background_color);
    g.set_line_dash(&[])?;
    g.stroke_rect(rect);

    let dash = 2.0 * g.line_width();
    g.set_composite(Composite::SourceOver)?;
    g.set_line_dash(&[dash, dash])?;
    g.set_stroke_style(dash_color);
    g.stroke_rect(rect);

    Ok(())
}

/// Draw `text` in a filled box just above and right of `at`.
///
/// Blend mode and dash are reset first; labels are always plain.
///
/// # Errors
///
/// Returns `Err` if measuring or drawing the text fails.
pub fn draw_label<S: Surface + ?Sized>(surface: &mut S, at: Point, text: &str) -> Result<(), SurfaceError> {
    let mut g = StateGuard::new(surface);

    g.set_composite(Composite::SourceOver)?;
    g.set_line_dash(&[])?;
    g.set_font(LABEL_FONT);
    g.set_line_width(TEMPLATE_LINE_WIDTH);

    let metrics = g.measure_text(text)?;

    g.set_fill_style(LABEL_BACKGROUND);
    g.fill_rect(label_box(at, metrics.ascent, metrics.right));

    g.set_fill_style(LABEL_FOREGROUND);
    g.fill_text(text, Point::new(at.x + LABEL_OFFSET_X, at.y - LABEL_OFFSET_Y))?;

    Ok(())
}

/// Background box for a label anchored at `at`.
#[must_use]
pub fn label_box(at: Point, ascent: f64, right: f64) -> Rect {
    Rect::new(
        at.x - LABEL_OFFSET_X,
        at.y - 2.0 * LABEL_OFFSET_Y - ascent,
        right + 4.0 * LABEL_OFFSET_X,
        ascent + 2.0 * LABEL_OFFSET_Y - 1.0,
    )
}

// =============================================================
// Stream
// =============================================================

/// Split templates into `(tracked, untracked)`, keeping input order in each.
#[must_use]
pub fn partition_templates(templates: &[Template]) -> (Vec<&Template>, Vec<&Template>) {
    templates.iter().partition(|t| t.presence.is_tracked())
}

/// Dash color for a template on the live stream.
#[must_use]
pub fn stream_dash_color(presence: Presence) -> &'static str {
    match presence {
        Presence::Untracked => UNTRACKED_DASH_COLOR,
        Presence::Tracked { present: true } => PRESENT_DASH_COLOR,
        Presence::Tracked { present: false } => MISSING_DASH_COLOR,
    }
}

/// Draw templates over the live stream.
///
/// Untracked templates go first at half opacity; tracked ones follow at full
/// opacity colored by presence, so they sit on top where regions overlap.
///
/// # Errors
///
/// Returns `Err` on the first failing surface call.
pub fn stream_draw_templates<S: Surface + ?Sized>(
    surface: &mut S,
    templates: &[Template],
    draw_labels: bool,
) -> Result<(), SurfaceError> {
    let (tracked, untracked) = partition_templates(templates);
    let mut g = StateGuard::new(surface);

    g.set_line_width(STREAM_TEMPLATE_LINE_WIDTH);

    g.set_global_alpha(UNTRACKED_ALPHA);
    for t in untracked {
        draw_dashed_template(&mut *g, t.rect, TEMPLATE_COLOR, stream_dash_color(t.presence))?;
        if draw_labels {
            draw_label(&mut *g, t.rect.top_left(), &t.name)?;
        }
    }

    g.set_global_alpha(1.0);
    for t in tracked {
        draw_dashed_template(&mut *g, t.rect, TEMPLATE_COLOR, stream_dash_color(t.presence))?;
        if draw_labels {
            draw_label(&mut *g, t.rect.top_left(), &t.name)?;
        }
    }

    Ok(())
}

/// Color band for an fps readout.
#[must_use]
pub fn fps_color(fps: f64) -> &'static str {
    if fps < FPS_LOW_THRESHOLD {
        FPS_LOW_COLOR
    } else if fps < FPS_MEDIUM_THRESHOLD {
        FPS_MEDIUM_COLOR
    } else {
        FPS_HIGH_COLOR
    }
}

/// Draw the frames-per-second readout in the top-left corner.
///
/// # Errors
///
/// Returns `Err` if drawing the text fails.
pub fn stream_draw_fps<S: Surface + ?Sized>(surface: &mut S, fps: f64) -> Result<(), SurfaceError> {
    let mut g = StateGuard::new(surface);

    g.set_font(FPS_FONT);
    g.set_fill_style(fps_color(fps));
    g.set_stroke_style(FPS_OUTLINE_COLOR);

    let text = format!("{}", fps.round());
    let at = Point::new(4.0, 28.0);
    g.fill_text(&text, at)?;
    g.stroke_text(&text, at)?;

    Ok(())
}

// =============================================================
// Editor
// =============================================================

/// Draw every template with the neutral editor styling.
///
/// # Errors
///
/// Returns `Err` on the first failing surface call.
pub fn editor_draw_templates<S: Surface + ?Sized>(
    surface: &mut S,
    templates: &[Template],
    draw_labels: bool,
) -> Result<(), SurfaceError> {
    let mut g = StateGuard::new(surface);

    g.set_line_width(TEMPLATE_LINE_WIDTH);

    for t in templates {
        draw_dashed_template(&mut *g, t.rect, TEMPLATE_COLOR, TEMPLATE_DASH_COLOR)?;
        if draw_labels {
            draw_label(&mut *g, t.rect.top_left(), &t.name)?;
        }
    }

    Ok(())
}

/// Draw the selected template with its resize handle.
///
/// The handle circle is the resize hit zone used by
/// [`crate::hit::get_action_for_template`].
///
/// # Errors
///
/// Returns `Err` on the first failing surface call.
pub fn editor_draw_selected_template<S: Surface + ?Sized>(
    surface: &mut S,
    template: &Template,
    draw_labels: bool,
) -> Result<(), SurfaceError> {
    let mut g = StateGuard::new(surface);

    g.set_composite(Composite::Screen)?;
    g.set_stroke_style(SELECTED_TEMPLATE_COLOR);
    g.set_line_width(TEMPLATE_LINE_WIDTH);
    g.set_line_dash(&[])?;

    g.stroke_rect(template.rect);
    g.stroke_circle(template.rect.bottom_right(), TEMPLATE_CIRCLE_SIZE)?;

    if draw_labels {
        draw_label(&mut *g, template.rect.top_left(), &template.name)?;
    }

    Ok(())
}

/// The four bands of an image that lie outside `focus`: top, left, right, bottom.
///
/// Top and bottom span the full width; left and right span only the focus
/// height, so the bands never overlap and together cover everything except
/// the focus rectangle. The focus is clipped to the image first, so every band
/// has a non-negative size even when the focus hangs off an edge.
#[must_use]
pub fn darken_bands(focus: Rect, image_width: f64, image_height: f64) -> [Rect; 4] {
    let (iw, ih) = (image_width.max(0.0), image_height.max(0.0));
    let left = focus.x.clamp(0.0, iw);
    let right = (focus.x + focus.width).clamp(left, iw);
    let top = focus.y.clamp(0.0, ih);
    let bottom = (focus.y + focus.height).clamp(top, ih);
    [
        Rect::new(0.0, 0.0, iw, top),
        Rect::new(0.0, top, left, bottom - top),
        Rect::new(right, top, iw - right, bottom - top),
        Rect::new(0.0, bottom, iw, ih - bottom),
    ]
}

/// Dim everything outside `focus`, leaving the focus pixels untouched.
///
/// # Errors
///
/// Returns `Err` if the surface rejects the blend mode.
pub fn editor_darken_outside_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    focus: Rect,
    image_width: f64,
    image_height: f64,
) -> Result<(), SurfaceError> {
    let mut g = StateGuard::new(surface);

    g.set_composite(Composite::Darken)?;
    g.set_fill_style(DARKEN_FILL);

    for band in darken_bands(focus, image_width, image_height) {
        g.fill_rect(band);
    }

    Ok(())
}
