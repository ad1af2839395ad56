use grid_core::{CellIndex, GestureSource, GridAction};

use super::*;
use crate::host::{capture_pointer, starts_gesture};

#[component]
/// One grid cell: 1-based label, assigned icon, and a remove control for non-default icons.
///
/// Clicking the cell opens the picker unless the click is the tail of a drag.
pub(super) fn GridCell(index: CellIndex) -> impl IntoView {
    let runtime = use_grid_runtime();
    let view_state = create_memo(move |_| {
        runtime
            .state
            .with(|grid| grid.cell(index).map(|cell| cell.view()))
    });
    let label = index.label();
    let cell_label = format!("Cell {label}");
    let remove_label = format!("Remove icon from cell {label}");

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !starts_gesture(ev.is_primary(), ev.button()) {
            return;
        }
        if !view_state.with_untracked(|cell| cell.as_ref().is_some_and(|cell| cell.draggable)) {
            return;
        }
        ev.prevent_default();
        capture_pointer(&ev);
        runtime.dispatch_action(GridAction::GestureStart {
            source: GestureSource::Cell(index),
            pointer: pointer_from_event(&ev),
        });
    };

    view! {
        <div
            class="grid-cell"
            role="gridcell"
            data-cell-index=index.0.to_string()
            data-occupied=move || {
                view_state.with(|cell| cell.as_ref().is_some_and(|cell| cell.removable)).to_string()
            }
            aria-label=cell_label
            on:click=move |_| runtime.dispatch_action(GridAction::CellClick { cell: index })
        >
            <div class="cell-index" aria-hidden="true">{label}</div>
            {move || {
                view_state
                    .get()
                    .map(|cell| {
                        let draggable = cell.draggable;
                        view! {
                            <img
                                src=cell.icon.as_str().to_string()
                                alt=""
                                draggable="false"
                                data-draggable=draggable.to_string()
                                on:pointerdown=on_pointerdown
                            />
                            {cell
                                .removable
                                .then(|| {
                                    view! {
                                        <IconButton
                                            icon=IconName::Remove
                                            size=ButtonSize::Sm
                                            layout_class="remove-btn"
                                            aria_label=remove_label.clone()
                                            on_pointerdown=Callback::new(
                                                move |ev: web_sys::PointerEvent| {
                                                    ev.stop_propagation();
                                                    runtime.dispatch_action(GridAction::PointerDown);
                                                },
                                            )
                                            on_click=Callback::new(move |ev: MouseEvent| {
                                                ev.stop_propagation();
                                                runtime
                                                    .dispatch_action(GridAction::RemoveIcon {
                                                        cell: index,
                                                    });
                                            })
                                        />
                                    }
                                })}
                        }
                    })
            }}
        </div>
    }
}
