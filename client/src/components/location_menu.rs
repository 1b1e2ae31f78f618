//! Location picker for the loaded station.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

#[component]
pub fn LocationMenu() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let rows = move || {
        dashboard.with(|d| {
            let selected = d.selected_location;
            d.station
                .as_ref()
                .map(|s| {
                    s.locations
                        .iter()
                        .map(|l| (l.id, l.name.clone(), l.ongoing_task.is_some(), selected == Some(l.id)))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    view! {
        <nav class="location-menu">
            <div class="location-menu__title">
                {move || dashboard.with(|d| d.station.as_ref().map_or_else(String::new, |s| s.name.clone()))}
            </div>
            <ul>
                {move || {
                    rows()
                        .into_iter()
                        .map(|(id, name, busy, is_selected)| {
                            view! {
                                <li>
                                    <button
                                        class="location-menu__item"
                                        class:location-menu__item--active=is_selected
                                        class:location-menu__item--busy=busy
                                        on:click=move |_| {
                                            dashboard.update(|d| {
                                                d.select_location(id);
                                            });
                                        }
                                    >
                                        {name}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
