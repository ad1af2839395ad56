//! Runtime provider and context wiring for the icon grid.
//!
//! This module owns the long-lived reducer container and the effect queue. UI composition stays in
//! [`crate::components`].

use grid_core::{
    reduce_grid, AssetCatalog, GridAction, GridDimensions, GridEffect, GridState, InteractionState,
};
use leptos::*;

use crate::{effect_executor, host::GridHostContext};

#[derive(Clone, Copy)]
/// Leptos context for reading grid state and dispatching [`GridAction`] values.
pub struct GridRuntimeContext {
    /// Host executor for reducer effects and DOM queries.
    pub host: StoredValue<GridHostContext>,
    /// Icons offered by the catalog strip and the picker.
    pub catalog: StoredValue<AssetCatalog>,
    /// Reactive grid state signal.
    pub state: RwSignal<GridState>,
    /// Reactive gesture/picker interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<GridEffect>>,
    /// Latest status message for the polite live region.
    pub announcement: RwSignal<String>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<GridAction>,
}

impl GridRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: GridAction) {
        self.dispatch.call(action);
    }
}

/// Applies one action to copies of the current state and commits only what changed.
///
/// Rejected actions leave every signal untouched.
fn apply_action(
    state: RwSignal<GridState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<GridEffect>>,
    action: GridAction,
) {
    let mut grid = state.get_untracked();
    let mut ui = interaction.get_untracked();
    let previous_grid = grid.clone();
    let previous_ui = ui.clone();

    match reduce_grid(&mut grid, &mut ui, action) {
        Ok(new_effects) => {
            if grid != previous_grid {
                state.set(grid);
            }
            if ui != previous_ui {
                interaction.set(ui);
            }
            if !new_effects.is_empty() {
                let mut queue = effects.get_untracked();
                queue.extend(new_effects);
                effects.set(queue);
            }
        }
        Err(err) => logging::warn!("grid reducer error: {err}"),
    }
}

#[component]
/// Provides [`GridRuntimeContext`] to descendant components and installs the effect executor.
pub fn GridProvider(
    /// Icons available for placement.
    catalog: AssetCatalog,
    /// Shape of the grid built on mount.
    initial_dimensions: GridDimensions,
    children: Children,
) -> impl IntoView {
    let host = store_value(GridHostContext::default());
    let catalog = store_value(catalog);
    let state = create_rw_signal(GridState::new(initial_dimensions));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<GridEffect>::new());
    let announcement = create_rw_signal(String::new());

    let dispatch = Callback::new(move |action: GridAction| {
        apply_action(state, interaction, effects, action);
    });

    let runtime = GridRuntimeContext {
        host,
        catalog,
        state,
        interaction,
        effects,
        announcement,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`GridRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`GridProvider`].
pub fn use_grid_runtime() -> GridRuntimeContext {
    use_context::<GridRuntimeContext>().expect("GridRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use grid_core::{CellIndex, GestureSource, IconRef, PickerToken, PointerPosition};
    use pretty_assertions::assert_eq;

    use super::*;

    fn with_signals(
        test: impl FnOnce(RwSignal<GridState>, RwSignal<InteractionState>, RwSignal<Vec<GridEffect>>),
    ) {
        let runtime = create_runtime();
        let dimensions = GridDimensions::new(2, 2).expect("dimensions");
        test(
            create_rw_signal(GridState::new(dimensions)),
            create_rw_signal(InteractionState::default()),
            create_rw_signal(Vec::new()),
        );
        runtime.dispose();
    }

    #[test]
    fn dispatch_commits_state_and_queues_effects() {
        with_signals(|state, interaction, effects| {
            apply_action(
                state,
                interaction,
                effects,
                GridAction::GestureStart {
                    source: GestureSource::Catalog(IconRef::new("icons/Icon_02.png")),
                    pointer: PointerPosition::default(),
                },
            );
            apply_action(
                state,
                interaction,
                effects,
                GridAction::GestureEnd {
                    pointer: PointerPosition::default(),
                    drop_target: Some(CellIndex(3)),
                },
            );
            apply_action(
                state,
                interaction,
                effects,
                GridAction::OpenPicker { cell: CellIndex(0) },
            );

            assert_eq!(
                state.with_untracked(|grid| grid.icon_at(CellIndex(3)).cloned()),
                Some(IconRef::new("icons/Icon_02.png"))
            );
            assert_eq!(
                effects.get_untracked(),
                vec![
                    GridEffect::Announce("Placed icon in cell 4".to_string()),
                    GridEffect::InstallPickerCancelKey(PickerToken(1)),
                ]
            );
            assert!(interaction.with_untracked(|ui| ui.picker.is_some()));
        });
    }

    #[test]
    fn rejected_action_leaves_signals_untouched() {
        with_signals(|state, interaction, effects| {
            let before = state.get_untracked();

            apply_action(
                state,
                interaction,
                effects,
                GridAction::ApplyControls {
                    rows_input: "0".to_string(),
                    cols_input: "4".to_string(),
                },
            );
            apply_action(
                state,
                interaction,
                effects,
                GridAction::RemoveIcon { cell: CellIndex(9) },
            );

            assert_eq!(state.get_untracked(), before);
            assert!(effects.get_untracked().is_empty());
        });
    }
}
