//! Template editor over a still of the selected location's image.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pointer events are mapped to image pixels and handed to
//! `canvas::editor::EditorCore`, which resolves them into select, move and
//! resize operations. Every reported change triggers one redraw through
//! `compose_editor`; there is no render loop here.

use canvas::config::StreamConfig;
use canvas::editor::{EditorCore, compose_editor};
use canvas::web::WebSurface;
use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::templates::{export_templates, import_templates, next_template};
use crate::util::pointer::pointer_on_canvas;

#[component]
pub fn TemplateEditor(config: StreamConfig) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let image_ref = NodeRef::<leptos::html::Img>::new();

    let editor = RwSignal::new(EditorCore::default());
    let image_loads = RwSignal::new(0_u32);
    let cursor = RwSignal::new("default");
    let json = RwSignal::new(String::new());
    let json_error = RwSignal::new(None::<String>);

    let source = Memo::new(move |_| dashboard.with(|d| d.source(&config).url().to_owned()));

    Effect::new(move || {
        image_loads.track();
        editor.track();
        let (Some(canvas), Some(image)) = (canvas_ref.get(), image_ref.get()) else {
            return;
        };
        let mut surface = match WebSurface::new(canvas) {
            Ok(surface) => surface,
            Err(e) => {
                log::warn!("editor surface unavailable: {e}");
                return;
            }
        };
        editor.with_untracked(|ed| {
            if let Err(e) = compose_editor(&mut surface, &image, ed) {
                log::warn!("editor redraw failed: {e}");
            }
        });
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        if let Some(pt) = pointer_on_canvas(&ev, &canvas) {
            editor.maybe_update(|ed| ed.pointer_down(pt));
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let Some(pt) = pointer_on_canvas(&ev, &canvas) else {
            return;
        };
        editor.maybe_update(|ed| ed.pointer_move(pt));
        cursor.set(editor.with_untracked(|ed| ed.cursor_at(pt)));
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        editor.maybe_update(|ed| {
            if let Some(t) = ed.pointer_up() {
                log::debug!("template '{}' at {:?}", t.name, t.rect);
            }
            false
        });
    };

    let on_add = move |_| {
        editor.maybe_update(|ed| match next_template(ed.templates()) {
            Ok(t) => {
                ed.add(t);
                true
            }
            Err(e) => {
                log::warn!("new template rejected: {e}");
                false
            }
        });
    };

    let on_remove = move |_| {
        editor.maybe_update(|ed| ed.remove_selected().is_some());
    };

    let on_toggle_labels = move |_| {
        editor.update(|ed| ed.draw_labels = !ed.draw_labels);
    };

    let on_export = move |_| match editor.with_untracked(|ed| export_templates(ed.templates())) {
        Ok(text) => {
            json.set(text);
            json_error.set(None);
        }
        Err(e) => json_error.set(Some(e)),
    };

    let on_import = move |_| match import_templates(&json.get_untracked()) {
        Ok(list) => {
            editor.update(|ed| ed.set_templates(list));
            json_error.set(None);
        }
        Err(e) => json_error.set(Some(e)),
    };

    let rows = move || {
        editor.with(|ed| {
            let selected = ed.selected_index();
            ed.templates()
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    let r = t.rect;
                    (t.name.clone(), format!("{:.0}, {:.0}  {:.0}x{:.0}", r.x, r.y, r.width, r.height), selected == Some(i))
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="template-editor">
            <div class="template-editor__toolbar">
                <button on:click=on_add>"Add"</button>
                <button
                    on:click=on_remove
                    disabled=move || editor.with(|ed| ed.selected().is_none())
                >
                    "Remove"
                </button>
                <button on:click=on_toggle_labels>
                    {move || if editor.with(|ed| ed.draw_labels) { "Hide labels" } else { "Show labels" }}
                </button>
            </div>

            <img
                class="template-editor__source"
                node_ref=image_ref
                src=move || source.get()
                style="display:none"
                on:load=move |_| image_loads.update(|n| *n += 1)
            />
            <canvas
                class="template-editor__canvas"
                node_ref=canvas_ref
                style:cursor=move || cursor.get()
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_up
            ></canvas>

            <ul class="template-editor__list">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(name, geometry, is_selected)| {
                            view! {
                                <li class:template-editor__row--selected=is_selected>
                                    <span class="template-editor__name">{name}</span>
                                    <span class="template-editor__geometry">{geometry}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            <div class="template-editor__json">
                <textarea
                    prop:value=move || json.get()
                    on:input=move |ev| json.set(event_target_value(&ev))
                ></textarea>
                <button on:click=on_export>"Export"</button>
                <button on:click=on_import>"Import"</button>
                {move || json_error.get().map(|e| view! { <div class="template-editor__error">{e}</div> })}
            </div>
        </div>
    }
}
