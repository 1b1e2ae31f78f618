//! Root application component and context providers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use canvas::config::StreamConfig;
use leptos::prelude::*;

use crate::components::location_menu::LocationMenu;
use crate::components::stream::Stream;
use crate::components::template_editor::TemplateEditor;
use crate::net::api::fetch_station;
use crate::state::dashboard::{DashboardState, station_id_from_query};

const STATION_POLL_SECS: u64 = 2;

/// Stream configuration baked in at build time.
fn stream_config() -> StreamConfig {
    match StreamConfig::from_vars(option_env!("STATION_BACKEND_URL"), option_env!("STATION_PLACEHOLDER_URL")) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using same-origin backend");
            StreamConfig::default()
        }
    }
}

fn station_id() -> Option<i64> {
    let search = web_sys::window()?.location().search().unwrap_or_default();
    station_id_from_query(&search)
}

#[component]
pub fn App() -> impl IntoView {
    let dashboard = RwSignal::new(DashboardState { show_fps: true, ..Default::default() });
    provide_context(dashboard);

    let config = stream_config();

    match station_id() {
        Some(id) => {
            dashboard.update(|d| d.loading = true);
            let alive = Arc::new(AtomicBool::new(true));
            let alive_task = Arc::clone(&alive);
            let poll_config = config.clone();
            leptos::task::spawn_local(async move {
                loop {
                    if !alive_task.load(Ordering::Relaxed) {
                        break;
                    }
                    match fetch_station(&poll_config, id).await {
                        Ok(station) => dashboard.update(|d| d.apply_station(station)),
                        Err(e) => {
                            log::warn!("station {id}: {e}");
                            dashboard.update(|d| d.apply_error(e));
                        }
                    }
                    gloo_timers::future::sleep(Duration::from_secs(STATION_POLL_SECS)).await;
                }
            });
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }
        None => dashboard.update(|d| d.error = Some("no station selected (add ?station=<id>)".to_owned())),
    }

    let on_toggle_play = move |_| dashboard.update(|d| d.playing = !d.playing);

    view! {
        <main class="dashboard">
            <LocationMenu/>
            <section class="dashboard__main">
                <header class="dashboard__bar">
                    <button on:click=on_toggle_play>
                        {move || if dashboard.with(|d| d.playing) { "Pause" } else { "Play" }}
                    </button>
                    <span class="dashboard__status">{move || dashboard.with(DashboardState::detector_status)}</span>
                    <span class="dashboard__fps">{move || dashboard.with(DashboardState::fps_label)}</span>
                    {move || dashboard.with(|d| d.error.clone()).map(|e| view! { <span class="dashboard__error">{e}</span> })}
                </header>
                <Stream config=config.clone()/>
                <TemplateEditor config=config/>
            </section>
        </main>
    }
}
