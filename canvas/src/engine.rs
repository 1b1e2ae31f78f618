//! Frame composer and render loop.
//!
//! [`RenderLoop`] is the testable core of the stream view: a three-state
//! machine (`Idle`, `Playing`, `Stopped`) over a [`FrameScheduler`]. The
//! browser binding in [`crate::web`] supplies a `requestAnimationFrame`
//! scheduler and calls [`RenderLoop::on_frame`] from the frame callback; tests
//! drive the same loop with a manual scheduler.
//!
//! Each tick redraws from scratch: resize the surface to the image (which
//! clears it), draw the image, then overlay the task steps. Nothing from a
//! previous tick survives, so a failed tick is simply replaced by the next.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::VecDeque;
use std::fmt;

use crate::consts::{
    ALL_STEPS_COLOR, ALL_STEPS_DASH, ALL_STEPS_LINE_WIDTH, FPS_WINDOW_MS, REMAINING_STEP_COLOR,
    REMAINING_STEP_LINE_WIDTH, STREAM_ASPECT_HEIGHT, STREAM_ASPECT_WIDTH,
};
use crate::draw::stream_draw_fps;
use crate::geom::Point;
use crate::surface::{FrameImage, StateGuard, Surface, SurfaceError};
use crate::task::OngoingTask;

/// Error raised when a frame cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoopError {
    #[error("frame request failed: {0}")]
    Schedule(String),
}

/// Source of once-per-display-refresh callbacks.
///
/// A request fires at most once. Every handle returned by
/// [`FrameScheduler::request`] must be cancellable until it fires.
pub trait FrameScheduler {
    type Handle: Copy + fmt::Debug;

    /// Ask for one callback on the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::Schedule`] if the platform refuses the request.
    fn request(&mut self) -> Result<Self::Handle, LoopError>;

    /// Cancel a request that has not fired yet.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Lifecycle of a [`RenderLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Never started.
    #[default]
    Idle,
    /// A frame is scheduled (or being drawn) and the loop reschedules itself.
    Playing,
    /// Stopped or torn down; nothing is scheduled.
    Stopped,
}

/// What a single call to [`RenderLoop::on_frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; the callback was stale and nothing was drawn or scheduled.
    Skipped,
    /// Frame composed and the next one scheduled.
    Drawn,
    /// Composition failed; logged, and the next frame scheduled anyway.
    Degraded,
}

/// Rolling frames-per-second counter.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    stamps: VecDeque<f64>,
    window_ms: f64,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(FPS_WINDOW_MS)
    }
}

impl FpsCounter {
    /// Count over a trailing window of `window_ms`. A window that is not a
    /// positive finite duration falls back to [`FPS_WINDOW_MS`].
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        let window_ms = if window_ms.is_finite() && window_ms > 0.0 { window_ms } else { FPS_WINDOW_MS };
        Self { stamps: VecDeque::new(), window_ms }
    }

    /// Record a frame drawn at `now_ms`.
    pub fn record(&mut self, now_ms: f64) {
        self.stamps.push_back(now_ms);
        let cutoff = now_ms - self.window_ms;
        while self.stamps.front().is_some_and(|&t| t <= cutoff) {
            self.stamps.pop_front();
        }
    }

    /// Frames recorded in the last window, scaled to one second.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fps(&self) -> f64 {
        self.stamps.len() as f64 * (1000.0 / self.window_ms)
    }

    pub fn reset(&mut self) {
        self.stamps.clear();
    }
}

/// Container height that keeps the stream at a fixed 16:9 presentation.
///
/// Depends only on the container width, never on the source image.
#[must_use]
pub fn fit_height(container_width: f64) -> f64 {
    container_width * STREAM_ASPECT_HEIGHT / STREAM_ASPECT_WIDTH
}

/// Draw one frame: image at native size, then task overlays on top.
///
/// Remaining steps are stroked solid and heavy first, then every step of the
/// task is stroked dashed. An image that has not loaded (zero size) leaves the
/// surface cleared.
///
/// # Errors
///
/// Returns `Err` if drawing the image or setting the dash fails.
pub fn compose_frame<S: Surface + ?Sized>(
    surface: &mut S,
    image: &S::Image,
    snapshot: Option<&OngoingTask>,
) -> Result<(), SurfaceError> {
    surface.resize(image.width(), image.height());
    if image.width() == 0 || image.height() == 0 {
        return Ok(());
    }
    surface.draw_image(image, Point::new(0.0, 0.0))?;

    let Some(task) = snapshot else {
        return Ok(());
    };

    let mut g = StateGuard::new(surface);

    g.set_stroke_style(REMAINING_STEP_COLOR);
    g.set_line_width(REMAINING_STEP_LINE_WIDTH);
    g.set_line_dash(&[])?;
    for step in task.remaining_steps() {
        g.stroke_rect(step.object.rect());
    }

    g.set_stroke_style(ALL_STEPS_COLOR);
    g.set_line_width(ALL_STEPS_LINE_WIDTH);
    g.set_line_dash(&ALL_STEPS_DASH)?;
    for step in &task.steps {
        g.stroke_rect(step.object.rect());
    }

    Ok(())
}

/// Cancellable per-frame redraw loop.
///
/// Dropping the loop tears it down, so a pending frame never outlives its
/// owner.
pub struct RenderLoop<F: FrameScheduler> {
    scheduler: F,
    state: LoopState,
    pending: Option<F::Handle>,
    fps: FpsCounter,
    show_fps: bool,
}

impl<F: FrameScheduler> RenderLoop<F> {
    #[must_use]
    pub fn new(scheduler: F) -> Self {
        Self { scheduler, state: LoopState::Idle, pending: None, fps: FpsCounter::default(), show_fps: false }
    }

    /// Draw the fps readout on top of each frame.
    #[must_use]
    pub fn with_fps_overlay(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Whether a frame request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Current frames per second.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps.fps()
    }

    #[must_use]
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Follow the externally owned `playing` flag.
    ///
    /// Entering `Playing` requests the first frame; leaving it cancels the
    /// outstanding request. Repeating the current value is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::Schedule`] if the first frame cannot be requested;
    /// the loop then stays where it was.
    pub fn set_playing(&mut self, playing: bool) -> Result<(), LoopError> {
        match (self.state, playing) {
            (LoopState::Playing, true) => Ok(()),
            (LoopState::Idle | LoopState::Stopped, true) => {
                let handle = self.scheduler.request()?;
                self.pending = Some(handle);
                self.state = LoopState::Playing;
                log::debug!("render loop playing");
                Ok(())
            }
            (LoopState::Playing, false) => {
                self.teardown();
                Ok(())
            }
            (LoopState::Idle | LoopState::Stopped, false) => Ok(()),
        }
    }

    /// Stop and cancel any outstanding frame. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if self.state == LoopState::Playing {
            log::debug!("render loop stopped");
        }
        if self.state != LoopState::Idle {
            self.state = LoopState::Stopped;
        }
        self.fps.reset();
    }

    /// Frame callback: compose one frame and schedule the next.
    ///
    /// `snapshot` is whatever task state the owner holds right now; it is
    /// read, never kept. Composition errors are logged and do not stop the
    /// loop.
    pub fn on_frame<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        image: &S::Image,
        snapshot: Option<&OngoingTask>,
        now_ms: f64,
    ) -> TickOutcome {
        if self.state != LoopState::Playing {
            return TickOutcome::Skipped;
        }
        // This callback is the request that was pending.
        self.pending = None;
        self.fps.record(now_ms);

        let drawn = compose_frame(surface, image, snapshot).and_then(|()| {
            if self.show_fps {
                stream_draw_fps(surface, self.fps.fps())
            } else {
                Ok(())
            }
        });
        let outcome = match drawn {
            Ok(()) => TickOutcome::Drawn,
            Err(e) => {
                log::warn!("frame composition failed: {e}");
                TickOutcome::Degraded
            }
        };

        match self.scheduler.request() {
            Ok(handle) => self.pending = Some(handle),
            Err(e) => {
                log::warn!("render loop halted: {e}");
                self.state = LoopState::Stopped;
            }
        }
        outcome
    }
}

impl<F: FrameScheduler> Drop for RenderLoop<F> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<F: FrameScheduler> fmt::Debug for RenderLoop<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderLoop")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("show_fps", &self.show_fps)
            .finish_non_exhaustive()
    }
}
