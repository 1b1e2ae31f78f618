//! Pointer coordinate mapping.
//!
//! Canvases are drawn at the image's native size and scaled by CSS, so a
//! pointer position in client pixels must be mapped back to image pixels
//! before it reaches the hit resolver.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use canvas::geom::{Point, Rect};

/// Map a client-space position onto a surface of `surface_w` x `surface_h`
/// shown inside `bounds` (the element's client rect).
///
/// Returns `None` while the element has no layout size.
#[must_use]
pub fn client_to_surface(client: Point, bounds: Rect, surface_w: f64, surface_h: f64) -> Option<Point> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    Some(Point::new(
        (client.x - bounds.x) * surface_w / bounds.width,
        (client.y - bounds.y) * surface_h / bounds.height,
    ))
}

#[cfg(feature = "csr")]
pub fn pointer_on_canvas(ev: &leptos::ev::PointerEvent, canvas: &web_sys::HtmlCanvasElement) -> Option<Point> {
    let r = canvas.get_bounding_client_rect();
    client_to_surface(
        Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())),
        Rect::new(r.x(), r.y(), r.width(), r.height()),
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    )
}
