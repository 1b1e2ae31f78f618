//! Browser bindings: canvas-backed [`Surface`], `requestAnimationFrame`
//! scheduler, container resize watching, and the stream view that ties them
//! together.
//!
//! Everything here needs a DOM and is exercised in the browser. The logic it
//! delegates to ([`crate::engine`], [`crate::draw`]) is tested natively.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlImageElement, ResizeObserver, ResizeObserverEntry};

use crate::engine::{FrameScheduler, LoopError, RenderLoop, fit_height};
use crate::geom::{Point, Rect};
use crate::surface::{Composite, FrameImage, Surface, SurfaceError, TextMetrics};
use crate::task::OngoingTask;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> Result<i32, JsValue>;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

fn js_err(e: JsValue) -> SurfaceError {
    SurfaceError::Backend(format!("{e:?}"))
}

// =============================================================
// WebSurface
// =============================================================

/// [`Surface`] over an `HtmlCanvasElement` and its 2D context.
pub struct WebSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebSurface {
    /// Bind to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ContextUnavailable`] if the element has no 2D
    /// context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }
}

impl FrameImage for HtmlImageElement {
    fn width(&self) -> u32 {
        self.natural_width()
    }

    fn height(&self) -> u32 {
        self.natural_height()
    }
}

impl Surface for WebSurface {
    type Image = HtmlImageElement;

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_composite(&mut self, op: Composite) -> Result<(), SurfaceError> {
        self.ctx.set_global_composite_operation(op.as_str()).map_err(js_err)
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn line_width(&self) -> f64 {
        self.ctx.line_width()
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), SurfaceError> {
        let dash = js_sys::Array::new();
        for s in segments {
            dash.push(&(*s).into());
        }
        self.ctx.set_line_dash(&dash).map_err(js_err)
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU).map_err(js_err)?;
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        self.ctx.fill_text(text, at.x, at.y).map_err(js_err)
    }

    fn stroke_text(&mut self, text: &str, at: Point) -> Result<(), SurfaceError> {
        self.ctx.stroke_text(text, at.x, at.y).map_err(js_err)
    }

    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, SurfaceError> {
        let m = self.ctx.measure_text(text).map_err(js_err)?;
        Ok(TextMetrics { width: m.width(), ascent: m.actual_bounding_box_ascent(), right: m.actual_bounding_box_right() })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, at: Point) -> Result<(), SurfaceError> {
        self.ctx
            .draw_image_with_html_image_element(image, at.x, at.y)
            .map_err(js_err)
    }
}

// =============================================================
// RafScheduler
// =============================================================

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Slot holding the JS callback every frame request points at.
pub type FrameSlot = Rc<RefCell<Option<FrameClosure>>>;

/// [`FrameScheduler`] backed by `requestAnimationFrame`.
///
/// All requests invoke the closure currently installed in the shared slot.
pub struct RafScheduler {
    slot: FrameSlot,
}

impl RafScheduler {
    #[must_use]
    pub fn new(slot: FrameSlot) -> Self {
        Self { slot }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> Result<i32, LoopError> {
        let slot = self.slot.borrow();
        let Some(closure) = slot.as_ref() else {
            return Err(LoopError::Schedule("no frame callback installed".into()));
        };
        request_animation_frame(closure.as_ref().unchecked_ref()).map_err(|e| LoopError::Schedule(format!("{e:?}")))
    }

    fn cancel(&mut self, handle: i32) {
        cancel_animation_frame(handle);
    }
}

// =============================================================
// ResizeWatch
// =============================================================

/// Set `element`'s height so it keeps the stream aspect at `width`.
///
/// # Errors
///
/// Returns `Err` if the style property cannot be written.
pub fn apply_aspect(element: &HtmlElement, width: f64) -> Result<(), SurfaceError> {
    element
        .style()
        .set_property("height", &format!("{}px", fit_height(width)))
        .map_err(js_err)
}

/// Observes an element's content width until dropped.
///
/// The browser delivers one observation as soon as observing starts, so the
/// handler also runs once at startup.
pub struct ResizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    /// Call `on_width` with `target`'s content width on every resize.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the observer cannot be created.
    pub fn new(target: &HtmlElement, mut on_width: impl FnMut(f64) + 'static) -> Result<Self, SurfaceError> {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for value in entries.iter() {
                if let Ok(entry) = value.dyn_into::<ResizeObserverEntry>() {
                    on_width(entry.content_rect().width());
                }
            }
        });
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref()).map_err(js_err)?;
        observer.observe(target);
        Ok(Self { observer, _callback: callback })
    }

    /// Keep `container` at the stream aspect ratio as its width changes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the observer cannot be created.
    pub fn keep_aspect(container: &HtmlElement) -> Result<Self, SurfaceError> {
        let target = container.clone();
        Self::new(container, move |width| {
            if let Err(e) = apply_aspect(&target, width) {
                log::warn!("aspect resize failed: {e}");
            }
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// =============================================================
// StreamView
// =============================================================

struct StreamInner {
    surface: WebSurface,
    image: HtmlImageElement,
    render: RenderLoop<RafScheduler>,
    snapshot: Option<OngoingTask>,
}

/// A live stream canvas: image source, render loop and the latest task
/// snapshot.
///
/// The frame callback holds only a weak reference, so dropping the view ends
/// the loop even if a frame is pending.
pub struct StreamView {
    inner: Rc<RefCell<StreamInner>>,
    slot: FrameSlot,
}

impl StreamView {
    /// Attach to `canvas`, drawing frames from `image`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, image: HtmlImageElement, show_fps: bool) -> Result<Self, SurfaceError> {
        let surface = WebSurface::new(canvas)?;
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let render = RenderLoop::new(RafScheduler::new(Rc::clone(&slot))).with_fps_overlay(show_fps);
        let inner = Rc::new(RefCell::new(StreamInner { surface, image, render, snapshot: None }));

        let weak: Weak<RefCell<StreamInner>> = Rc::downgrade(&inner);
        let closure = FrameClosure::new(move |now_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Ok(mut guard) = inner.try_borrow_mut() else {
                log::warn!("frame skipped: stream view busy");
                return;
            };
            let StreamInner { surface, image, render, snapshot } = &mut *guard;
            render.on_frame(surface, image, snapshot.as_ref(), now_ms);
        });
        *slot.borrow_mut() = Some(closure);

        Ok(Self { inner, slot })
    }

    /// Point the image at a new URL.
    pub fn set_source(&self, url: &str) {
        self.inner.borrow().image.set_src(url);
    }

    /// Start or stop the loop.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the first frame cannot be requested.
    pub fn set_playing(&self, playing: bool) -> Result<(), LoopError> {
        self.inner.borrow_mut().render.set_playing(playing)
    }

    /// Replace the task snapshot; the next frame draws it.
    pub fn set_snapshot(&self, snapshot: Option<OngoingTask>) {
        self.inner.borrow_mut().snapshot = snapshot;
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        self.inner.borrow().render.fps()
    }
}

impl Drop for StreamView {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.render.teardown();
        }
        self.slot.borrow_mut().take();
    }
}
