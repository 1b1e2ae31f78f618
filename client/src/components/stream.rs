//! Live stream canvas for the selected location.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges dashboard state to the imperative `canvas::web::StreamView`. The
//! view owns the render loop; this component only forwards the source URL,
//! the playing flag and the latest task snapshot when they change, and keeps
//! the container at 16:9 through a `ResizeWatch`.
//!
//! All imperative handles live in local stored values owned by this
//! component, so unmounting drops them: the loop is torn down, the observer
//! disconnected and the fps interval cancelled.

use canvas::config::StreamConfig;
use canvas::web::{ResizeWatch, StreamView};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use web_sys::HtmlImageElement;

use crate::state::dashboard::DashboardState;

const FPS_SAMPLE_MS: u32 = 1000;

#[component]
pub fn Stream(config: StreamConfig) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let container_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let stream_view = StoredValue::new_local(None::<StreamView>);
    let resize_watch = StoredValue::new_local(None::<ResizeWatch>);
    let fps_sampler = StoredValue::new_local(None::<Interval>);
    let mounted = RwSignal::new(false);

    // Memos keep the fps sampler's writes from re-triggering the effects below.
    let source = Memo::new(move |_| dashboard.with(|d| d.source(&config).url().to_owned()));
    let playing = Memo::new(move |_| dashboard.with(|d| d.playing));
    let snapshot = Memo::new(move |_| dashboard.with(|d| d.ongoing_task().cloned()));

    Effect::new(move || {
        let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) else {
            return;
        };
        if stream_view.with_value(Option::is_some) {
            return;
        }

        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(e) => {
                log::warn!("stream image unavailable: {e:?}");
                return;
            }
        };
        let show_fps = dashboard.get_untracked().show_fps;
        match StreamView::new(canvas, image, show_fps) {
            Ok(view) => stream_view.set_value(Some(view)),
            Err(e) => {
                log::warn!("stream view unavailable: {e}");
                return;
            }
        }

        match ResizeWatch::keep_aspect(&container) {
            Ok(watch) => resize_watch.set_value(Some(watch)),
            Err(e) => log::warn!("stream resize watch unavailable: {e}"),
        }

        let sampler = Interval::new(FPS_SAMPLE_MS, move || {
            let fps = stream_view.with_value(|v| v.as_ref().map(StreamView::fps));
            let fps = fps.filter(|_| playing.get_untracked());
            dashboard.update(|d| d.stream_fps = fps);
        });
        fps_sampler.set_value(Some(sampler));

        mounted.set(true);
    });

    Effect::new(move || {
        let url = source.get();
        if !mounted.get() {
            return;
        }
        stream_view.with_value(|v| {
            if let Some(v) = v {
                v.set_source(&url);
            }
        });
    });

    Effect::new(move || {
        let task = snapshot.get();
        if !mounted.get() {
            return;
        }
        stream_view.with_value(|v| {
            if let Some(v) = v {
                v.set_snapshot(task);
            }
        });
    });

    Effect::new(move || {
        let playing = playing.get();
        if !mounted.get() {
            return;
        }
        stream_view.with_value(|v| {
            if let Some(v) = v {
                if let Err(e) = v.set_playing(playing) {
                    log::warn!("stream loop did not start: {e}");
                }
            }
        });
    });

    view! {
        <div class="stream" node_ref=container_ref>
            <canvas class="stream__canvas" node_ref=canvas_ref></canvas>
        </div>
    }
}
