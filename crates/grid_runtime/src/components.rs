//! Grid widget UI composition and pointer interaction surfaces.

mod catalog;
mod cell;
mod controls;
mod drag_preview;
mod picker;

use grid_core::{CellLocator, GridAction};
use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::prelude::*;

use self::{
    catalog::IconCatalog, cell::GridCell, controls::GridControls, drag_preview::DragPreview,
    picker::IconPicker,
};
use crate::host::pointer_from_event;

pub use crate::runtime_context::{use_grid_runtime, GridProvider, GridRuntimeContext};

/// Minimum rendered cell width in pixels; columns share any remaining space.
const MIN_CELL_WIDTH_PX: u32 = 80;

fn grid_template_columns(cols: u32) -> String {
    format!("grid-template-columns:repeat({cols}, minmax({MIN_CELL_WIDTH_PX}px, 1fr));")
}

#[component]
fn GridBoard() -> impl IntoView {
    let runtime = use_grid_runtime();
    let state = runtime.state;
    let style = move || state.with(|grid| grid_template_columns(grid.dimensions().cols()));
    let cells = move || {
        state.with(|grid| {
            let generation = grid.generation();
            grid.cells()
                .iter()
                .map(|cell| (generation, cell.index))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            class="grid"
            role="grid"
            aria-label="Icon grid"
            data-ui-kind="icon-grid"
            style=style
        >
            <For each=cells key=|key| *key let:key>
                <GridCell index=key.1 />
            </For>
        </div>
    }
}

#[component]
/// Renders the icon-grid widget and routes window-level pointer events into the reducer.
///
/// Must be mounted inside [`GridProvider`].
pub fn GridShell() -> impl IntoView {
    let runtime = use_grid_runtime();
    let dragging = move || runtime.interaction.with_untracked(|ui| ui.is_dragging());

    // Presses the cell and catalog handlers act on still bubble here.
    let down_listener = window_event_listener(ev::pointerdown, move |_| {
        runtime.dispatch_action(GridAction::PointerDown);
    });
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if !dragging() {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(GridAction::GestureMove {
            pointer: pointer_from_event(&ev),
        });
    });
    let up_listener = window_event_listener(ev::pointerup, move |ev| {
        if !dragging() {
            return;
        }
        let pointer = pointer_from_event(&ev);
        let drop_target = runtime.host.get_value().locator().cell_at(pointer);
        runtime.dispatch_action(GridAction::GestureEnd {
            pointer,
            drop_target,
        });
    });
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        if dragging() {
            runtime.dispatch_action(GridAction::GestureCancel);
        }
    });
    on_cleanup(move || {
        down_listener.remove();
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    });

    view! {
        <div
            class="grid-widget"
            data-ui-kind="grid-widget"
            data-dragging=move || runtime.interaction.with(|ui| ui.is_dragging()).to_string()
        >
            <Stack gap=LayoutGap::Md>
                <GridControls />
                <IconCatalog />
                <GridBoard />
            </Stack>
            <DragPreview />
            <IconPicker />
            <LiveRegion message=Signal::derive(move || runtime.announcement.get()) />
        </div>
    }
}
