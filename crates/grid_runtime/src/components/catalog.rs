use grid_core::{GestureSource, GridAction};

use super::*;
use crate::host::{capture_pointer, starts_gesture};

#[component]
/// Inexhaustible icon palette. Pressing an icon starts a placement gesture.
pub(super) fn IconCatalog() -> impl IntoView {
    let runtime = use_grid_runtime();
    let icons = runtime.catalog.with_value(|catalog| catalog.icons().to_vec());

    view! {
        <div class="icon-list" role="list" aria-label="Icon catalog" data-ui-kind="icon-catalog">
            {icons
                .into_iter()
                .map(|icon| {
                    let src = icon.as_str().to_string();
                    view! {
                        <div class="icon-item" role="listitem">
                            <img
                                src=src
                                alt=""
                                draggable="false"
                                on:pointerdown=move |ev: web_sys::PointerEvent| {
                                    if !starts_gesture(ev.is_primary(), ev.button()) {
                                        return;
                                    }
                                    ev.prevent_default();
                                    capture_pointer(&ev);
                                    runtime.dispatch_action(GridAction::GestureStart {
                                        source: GestureSource::Catalog(icon.clone()),
                                        pointer: pointer_from_event(&ev),
                                    });
                                }
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
