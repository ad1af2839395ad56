//! Reducer actions, side-effect intents, and transition logic for grid interactions.

use thiserror::Error;

use crate::{
    dimensions::GridDimensions,
    model::{CellIndex, DragContext, GridState, IconRef, InteractionState, PointerPosition},
    picker::{PickerCloseReason, PickerSession, PickerToken},
};

/// Where a drag gesture picked its icon up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureSource {
    /// A catalog icon; the catalog keeps its copy.
    Catalog(IconRef),
    /// The icon currently assigned to a grid cell.
    Cell(CellIndex),
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_grid`].
pub enum GridAction {
    /// Replace the grid with fresh default cells.
    Rebuild {
        /// New shape.
        dimensions: GridDimensions,
    },
    /// Validate the raw rows/cols control text, then rebuild.
    ApplyControls {
        /// Rows input text.
        rows_input: String,
        /// Columns input text.
        cols_input: String,
    },
    /// Return every cell to the default icon.
    Reset,
    /// Set one cell's icon directly.
    Assign {
        /// Target cell.
        cell: CellIndex,
        /// Icon to assign.
        icon: IconRef,
    },
    /// Per-cell remove control.
    RemoveIcon {
        /// Cell to clear.
        cell: CellIndex,
    },
    /// Pointer-down on a catalog icon or an occupied cell's icon.
    GestureStart {
        /// Drag source.
        source: GestureSource,
        /// Pointer position at press.
        pointer: PointerPosition,
    },
    /// Pointer moved during a gesture.
    GestureMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released.
    GestureEnd {
        /// Pointer position at release.
        pointer: PointerPosition,
        /// Cell under the pointer at the instant of release.
        drop_target: Option<CellIndex>,
    },
    /// Gesture aborted by the platform (for example `pointercancel`).
    GestureCancel,
    /// Any pointer press in the document. Expires a click guard left by an earlier drag.
    PointerDown,
    /// Click on a cell body (not its remove control).
    CellClick {
        /// Clicked cell.
        cell: CellIndex,
    },
    /// Open the picker overlay for a cell.
    OpenPicker {
        /// Cell that receives the selection.
        cell: CellIndex,
    },
    /// Picker entry chosen.
    SelectPickerIcon {
        /// Chosen catalog icon.
        icon: IconRef,
    },
    /// Picker dismissed without a selection.
    ClosePicker {
        /// Dismissal path.
        reason: PickerCloseReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_grid`] for the UI host to execute.
pub enum GridEffect {
    /// Register the Escape-key listener for a freshly opened picker.
    InstallPickerCancelKey(PickerToken),
    /// Deregister the listener registered for a picker that just closed.
    RemovePickerCancelKey(PickerToken),
    /// Publish a status message to an assistive live region.
    Announce(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected actions. State is left untouched whenever one of these is returned.
pub enum ReducerError {
    /// Rows or columns were non-numeric or not positive.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Parsed rows (0 when non-numeric).
        rows: i64,
        /// Parsed columns (0 when non-numeric).
        cols: i64,
    },
    /// A cell index outside the current grid.
    #[error("cell {index} out of range for grid of {len} cells")]
    CellOutOfRange {
        /// Offending index.
        index: CellIndex,
        /// Current cell count.
        len: usize,
    },
}

/// Applies a [`GridAction`] to the grid and interaction state and collects resulting effects.
///
/// Drop resolution always reads the grid as it is when [`GridAction::GestureEnd`] arrives, not as
/// it was at gesture start.
///
/// # Errors
///
/// Returns [`ReducerError`] for invalid dimensions or out-of-range cells. Neither state is
/// modified in that case.
pub fn reduce_grid(
    state: &mut GridState,
    interaction: &mut InteractionState,
    action: GridAction,
) -> Result<Vec<GridEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        GridAction::Rebuild { dimensions } => {
            rebuild(state, interaction, dimensions, &mut effects);
        }
        GridAction::ApplyControls {
            rows_input,
            cols_input,
        } => {
            let dimensions = GridDimensions::from_inputs(&rows_input, &cols_input)
                .map_err(|(rows, cols)| ReducerError::InvalidDimensions { rows, cols })?;
            rebuild(state, interaction, dimensions, &mut effects);
        }
        GridAction::Reset => {
            state.reset();
            effects.push(GridEffect::Announce("All cells cleared".to_string()));
        }
        GridAction::Assign { cell, icon } => {
            state.assign(cell, icon)?;
        }
        GridAction::RemoveIcon { cell } => {
            ensure_in_range(state, cell)?;
            if state.cell(cell).is_some_and(|c| c.is_occupied()) {
                state.assign(cell, IconRef::default_icon())?;
                effects.push(GridEffect::Announce(format!(
                    "Removed icon from cell {}",
                    cell.label()
                )));
            }
        }
        GridAction::GestureStart { source, pointer } => {
            let source_cell = match &source {
                GestureSource::Catalog(_) => None,
                GestureSource::Cell(cell) => {
                    ensure_in_range(state, *cell)?;
                    Some(*cell)
                }
            };
            interaction.click_guard = None;
            interaction.gesture = match source {
                GestureSource::Catalog(icon) => Some(DragContext {
                    source_icon: icon,
                    source_cell: None,
                    pointer,
                }),
                GestureSource::Cell(cell) => state
                    .icon_at(cell)
                    .filter(|icon| !icon.is_default())
                    .map(|icon| DragContext {
                        source_icon: icon.clone(),
                        source_cell,
                        pointer,
                    }),
            };
        }
        GridAction::GestureMove { pointer } => {
            if let Some(gesture) = interaction.gesture.as_mut() {
                gesture.pointer = pointer;
            }
        }
        GridAction::GestureEnd {
            pointer,
            drop_target,
        } => {
            let Some(mut gesture) = interaction.gesture.take() else {
                return Ok(effects);
            };
            gesture.pointer = pointer;
            // Releasing over the source cell is a plain press on its icon; its click opens the picker.
            interaction.click_guard = gesture
                .source_cell
                .filter(|source| drop_target != Some(*source));
            if let Some(target) = drop_target {
                resolve_drop(state, &gesture, target, &mut effects)?;
            }
        }
        GridAction::GestureCancel => {
            interaction.gesture = None;
        }
        GridAction::PointerDown => {
            interaction.click_guard = None;
        }
        GridAction::CellClick { cell } => {
            ensure_in_range(state, cell)?;
            if interaction.is_dragging() {
                return Ok(effects);
            }
            if interaction.click_guard.take() == Some(cell) {
                return Ok(effects);
            }
            open_picker(interaction, cell, &mut effects);
        }
        GridAction::OpenPicker { cell } => {
            ensure_in_range(state, cell)?;
            open_picker(interaction, cell, &mut effects);
        }
        GridAction::SelectPickerIcon { icon } => {
            let Some(session) = interaction.picker else {
                return Ok(effects);
            };
            state.assign(session.cell, icon)?;
            interaction.picker = None;
            effects.push(GridEffect::RemovePickerCancelKey(session.token));
            effects.push(GridEffect::Announce(format!(
                "Placed icon in cell {}",
                session.cell.label()
            )));
        }
        GridAction::ClosePicker { reason: _ } => {
            close_picker(interaction, &mut effects);
        }
    }

    Ok(effects)
}

fn ensure_in_range(state: &GridState, cell: CellIndex) -> Result<(), ReducerError> {
    let len = state.cells().len();
    if cell.0 < len {
        Ok(())
    } else {
        Err(ReducerError::CellOutOfRange { index: cell, len })
    }
}

fn rebuild(
    state: &mut GridState,
    interaction: &mut InteractionState,
    dimensions: GridDimensions,
    effects: &mut Vec<GridEffect>,
) {
    interaction.gesture = None;
    interaction.click_guard = None;
    close_picker(interaction, effects);
    state.rebuild(dimensions);
    effects.push(GridEffect::Announce(format!(
        "Grid rebuilt with {} rows and {} columns",
        dimensions.rows(),
        dimensions.cols()
    )));
}

fn open_picker(interaction: &mut InteractionState, cell: CellIndex, effects: &mut Vec<GridEffect>) {
    close_picker(interaction, effects);
    interaction.next_picker_token = interaction.next_picker_token.wrapping_add(1);
    let token = PickerToken(interaction.next_picker_token);
    interaction.picker = Some(PickerSession { cell, token });
    effects.push(GridEffect::InstallPickerCancelKey(token));
}

fn close_picker(interaction: &mut InteractionState, effects: &mut Vec<GridEffect>) {
    if let Some(session) = interaction.picker.take() {
        effects.push(GridEffect::RemovePickerCancelKey(session.token));
    }
}

fn resolve_drop(
    state: &mut GridState,
    gesture: &DragContext,
    target: CellIndex,
    effects: &mut Vec<GridEffect>,
) -> Result<(), ReducerError> {
    let Some(target_icon) = state.icon_at(target).cloned() else {
        return Ok(());
    };

    let Some(source) = gesture.source_cell else {
        state.assign(target, gesture.source_icon.clone())?;
        effects.push(GridEffect::Announce(format!(
            "Placed icon in cell {}",
            target.label()
        )));
        return Ok(());
    };

    if source == target {
        return Ok(());
    }

    let Some(source_icon) = state.icon_at(source).filter(|i| !i.is_default()).cloned() else {
        return Ok(());
    };

    if target_icon.is_default() {
        state.assign(target, source_icon)?;
        state.assign(source, IconRef::default_icon())?;
        effects.push(GridEffect::Announce(format!(
            "Moved icon from cell {} to cell {}",
            source.label(),
            target.label()
        )));
    } else {
        state.assign(target, source_icon)?;
        state.assign(source, target_icon)?;
        effects.push(GridEffect::Announce(format!(
            "Swapped icons in cells {} and {}",
            source.label(),
            target.label()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ICON_A: &str = "icons/Icon_01.png";
    const ICON_B: &str = "icons/Icon_03.png";

    fn grid(rows: u32, cols: u32) -> (GridState, InteractionState) {
        (
            GridState::new(GridDimensions::new(rows, cols).unwrap()),
            InteractionState::default(),
        )
    }

    fn icons(state: &GridState) -> Vec<String> {
        state
            .cells()
            .iter()
            .map(|cell| cell.assigned_icon.as_str().to_string())
            .collect()
    }

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn drag(
        state: &mut GridState,
        interaction: &mut InteractionState,
        source: GestureSource,
        drop_target: Option<CellIndex>,
    ) -> Vec<GridEffect> {
        reduce_grid(
            state,
            interaction,
            GridAction::GestureStart {
                source,
                pointer: at(0, 0),
            },
        )
        .expect("gesture start");
        reduce_grid(
            state,
            interaction,
            GridAction::GestureMove { pointer: at(5, 5) },
        )
        .expect("gesture move");
        reduce_grid(
            state,
            interaction,
            GridAction::GestureEnd {
                pointer: at(10, 10),
                drop_target,
            },
        )
        .expect("gesture end")
    }

    fn place(state: &mut GridState, cell: usize, icon: &str) {
        state.assign(CellIndex(cell), IconRef::new(icon)).unwrap();
    }

    #[test]
    fn catalog_drop_overwrites_any_cell_and_touches_nothing_else() {
        let (mut state, mut interaction) = grid(2, 2);
        place(&mut state, 1, ICON_B);

        drag(
            &mut state,
            &mut interaction,
            GestureSource::Catalog(IconRef::new(ICON_A)),
            Some(CellIndex(1)),
        );

        let mut expected = vec![crate::DEFAULT_ICON.to_string(); 4];
        expected[1] = ICON_A.to_string();
        assert_eq!(icons(&state), expected);
        assert!(interaction.gesture.is_none());
    }

    #[test]
    fn dragging_occupied_cell_onto_occupied_cell_swaps() {
        let (mut state, mut interaction) = grid(1, 3);
        place(&mut state, 0, ICON_A);
        place(&mut state, 2, ICON_B);

        let effects = drag(
            &mut state,
            &mut interaction,
            GestureSource::Cell(CellIndex(0)),
            Some(CellIndex(2)),
        );

        assert_eq!(
            icons(&state),
            vec![
                ICON_B.to_string(),
                crate::DEFAULT_ICON.to_string(),
                ICON_A.to_string()
            ]
        );
        assert_eq!(
            effects,
            vec![GridEffect::Announce(
                "Swapped icons in cells 1 and 3".to_string()
            )]
        );
    }

    #[test]
    fn dragging_occupied_cell_onto_empty_cell_moves() {
        let (mut state, mut interaction) = grid(1, 3);
        place(&mut state, 0, ICON_A);

        drag(
            &mut state,
            &mut interaction,
            GestureSource::Cell(CellIndex(0)),
            Some(CellIndex(1)),
        );

        assert_eq!(
            icons(&state),
            vec![
                crate::DEFAULT_ICON.to_string(),
                ICON_A.to_string(),
                crate::DEFAULT_ICON.to_string()
            ]
        );
    }

    #[test]
    fn dropping_cell_onto_itself_is_noop() {
        let (mut state, mut interaction) = grid(2, 2);
        place(&mut state, 3, ICON_A);
        let before = state.clone();

        let effects = drag(
            &mut state,
            &mut interaction,
            GestureSource::Cell(CellIndex(3)),
            Some(CellIndex(3)),
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn drop_without_target_abandons_gesture() {
        let (mut state, mut interaction) = grid(2, 2);
        place(&mut state, 0, ICON_A);
        let before = state.clone();

        drag(
            &mut state,
            &mut interaction,
            GestureSource::Cell(CellIndex(0)),
            None,
        );

        assert_eq!(state, before);
        assert!(interaction.gesture.is_none());
    }

    #[test]
    fn drop_target_outside_grid_is_ignored() {
        let (mut state, mut interaction) = grid(1, 2);
        let before = state.clone();

        let effects = drag(
            &mut state,
            &mut interaction,
            GestureSource::Catalog(IconRef::new(ICON_A)),
            Some(CellIndex(9)),
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
        assert!(interaction.gesture.is_none());
    }

    #[test]
    fn default_cells_cannot_start_a_gesture() {
        let (mut state, mut interaction) = grid(1, 2);

        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureStart {
                source: GestureSource::Cell(CellIndex(0)),
                pointer: at(0, 0),
            },
        )
        .unwrap();

        assert!(!interaction.is_dragging());
    }

    #[test]
    fn new_gesture_replaces_stale_context() {
        let (mut state, mut interaction) = grid(1, 2);
        place(&mut state, 0, ICON_A);

        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureStart {
                source: GestureSource::Cell(CellIndex(0)),
                pointer: at(1, 1),
            },
        )
        .unwrap();
        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureStart {
                source: GestureSource::Catalog(IconRef::new(ICON_B)),
                pointer: at(2, 2),
            },
        )
        .unwrap();

        assert_eq!(
            interaction.gesture,
            Some(DragContext {
                source_icon: IconRef::new(ICON_B),
                source_cell: None,
                pointer: at(2, 2),
            })
        );
    }

    #[test]
    fn gesture_move_only_tracks_preview_position() {
        let (mut state, mut interaction) = grid(1, 2);
        let before = state.clone();

        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureStart {
                source: GestureSource::Catalog(IconRef::new(ICON_A)),
                pointer: at(0, 0),
            },
        )
        .unwrap();
        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureMove {
                pointer: at(40, 70),
            },
        )
        .unwrap();

        assert_eq!(state, before);
        assert_eq!(interaction.gesture.as_ref().map(|g| g.pointer), Some(at(40, 70)));
    }

    #[test]
    fn source_emptied_mid_gesture_abandons_drop() {
        let (mut state, mut interaction) = grid(1, 2);
        place(&mut state, 0, ICON_A);

        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureStart {
                source: GestureSource::Cell(CellIndex(0)),
                pointer: at(0, 0),
            },
        )
        .unwrap();
        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::RemoveIcon { cell: CellIndex(0) },
        )
        .unwrap();
        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureEnd {
                pointer: at(90, 0),
                drop_target: Some(CellIndex(1)),
            },
        )
        .unwrap();

        assert_eq!(state.occupied_count(), 0);
    }

    #[test]
    fn cancel_clears_gesture_without_mutation() {
        let (mut state, mut interaction) = grid(1, 2);
        place(&mut state, 0, ICON_A);
        let before = state.clone();

        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureStart {
                source: GestureSource::Cell(CellIndex(0)),
                pointer: at(0, 0),
            },
        )
        .unwrap();
        reduce_grid(&mut state, &mut interaction, GridAction::GestureCancel).unwrap();

        assert_eq!(state, before);
        assert!(!interaction.is_dragging());
    }

    #[test]
    fn click_is_ignored_while_dragging() {
        let (mut state, mut interaction) = grid(1, 2);

        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureStart {
                source: GestureSource::Catalog(IconRef::new(ICON_A)),
                pointer: at(0, 0),
            },
        )
        .unwrap();
        let effects = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::CellClick { cell: CellIndex(1) },
        )
        .unwrap();

        assert!(effects.is_empty());
        assert!(interaction.picker.is_none());
    }

    #[test]
    fn click_on_source_after_drag_to_other_cell_is_swallowed_once() {
        let (mut state, mut interaction) = grid(1, 2);
        place(&mut state, 0, ICON_A);

        drag(
            &mut state,
            &mut interaction,
            GestureSource::Cell(CellIndex(0)),
            Some(CellIndex(1)),
        );
        let swallowed = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::CellClick { cell: CellIndex(0) },
        )
        .unwrap();
        let opened = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::CellClick { cell: CellIndex(0) },
        )
        .unwrap();

        assert!(swallowed.is_empty());
        assert_eq!(opened, vec![GridEffect::InstallPickerCancelKey(PickerToken(1))]);
    }

    #[test]
    fn press_and_release_on_occupied_icon_then_click_opens_picker() {
        let (mut state, mut interaction) = grid(1, 2);
        place(&mut state, 0, ICON_A);

        let released = drag(
            &mut state,
            &mut interaction,
            GestureSource::Cell(CellIndex(0)),
            Some(CellIndex(0)),
        );
        let clicked = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::CellClick { cell: CellIndex(0) },
        )
        .unwrap();

        assert!(released.is_empty());
        assert_eq!(interaction.click_guard, None);
        assert_eq!(clicked, vec![GridEffect::InstallPickerCancelKey(PickerToken(1))]);
        assert_eq!(interaction.picker.map(|p| p.cell), Some(CellIndex(0)));
        assert_eq!(icons(&state)[0], ICON_A);
    }

    #[test]
    fn later_press_expires_guard_when_synthetic_click_never_arrives() {
        let (mut state, mut interaction) = grid(1, 2);
        place(&mut state, 0, ICON_A);

        drag(
            &mut state,
            &mut interaction,
            GestureSource::Cell(CellIndex(0)),
            Some(CellIndex(1)),
        );
        assert_eq!(interaction.click_guard, Some(CellIndex(0)));

        reduce_grid(&mut state, &mut interaction, GridAction::PointerDown).unwrap();
        let clicked = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::CellClick { cell: CellIndex(0) },
        )
        .unwrap();

        assert_eq!(clicked, vec![GridEffect::InstallPickerCancelKey(PickerToken(1))]);
        assert_eq!(interaction.picker.map(|p| p.cell), Some(CellIndex(0)));
    }

    #[test]
    fn click_on_other_cell_disarms_guard_and_opens_picker() {
        let (mut state, mut interaction) = grid(1, 3);
        place(&mut state, 0, ICON_A);

        drag(
            &mut state,
            &mut interaction,
            GestureSource::Cell(CellIndex(0)),
            None,
        );
        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::CellClick { cell: CellIndex(2) },
        )
        .unwrap();

        assert_eq!(interaction.click_guard, None);
        assert_eq!(interaction.picker.map(|p| p.cell), Some(CellIndex(2)));
    }

    #[test]
    fn remove_control_resets_only_that_cell() {
        let (mut state, mut interaction) = grid(1, 3);
        place(&mut state, 0, ICON_A);
        place(&mut state, 2, ICON_B);

        let effects = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::RemoveIcon { cell: CellIndex(2) },
        )
        .unwrap();

        assert_eq!(
            icons(&state),
            vec![
                ICON_A.to_string(),
                crate::DEFAULT_ICON.to_string(),
                crate::DEFAULT_ICON.to_string()
            ]
        );
        assert!(interaction.picker.is_none());
        assert_eq!(
            effects,
            vec![GridEffect::Announce("Removed icon from cell 3".to_string())]
        );
    }

    #[test]
    fn picker_selection_assigns_one_cell_and_releases_listener() {
        let (mut state, mut interaction) = grid(2, 2);
        place(&mut state, 0, ICON_B);

        let opened = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::CellClick { cell: CellIndex(3) },
        )
        .unwrap();
        let selected = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::SelectPickerIcon {
                icon: IconRef::new(ICON_A),
            },
        )
        .unwrap();

        assert_eq!(opened, vec![GridEffect::InstallPickerCancelKey(PickerToken(1))]);
        assert_eq!(
            selected,
            vec![
                GridEffect::RemovePickerCancelKey(PickerToken(1)),
                GridEffect::Announce("Placed icon in cell 4".to_string()),
            ]
        );
        assert_eq!(
            icons(&state),
            vec![
                ICON_B.to_string(),
                crate::DEFAULT_ICON.to_string(),
                crate::DEFAULT_ICON.to_string(),
                ICON_A.to_string()
            ]
        );
        assert!(interaction.picker.is_none());
    }

    #[test]
    fn every_dismissal_path_closes_without_mutation_and_releases_listener() {
        for reason in [
            PickerCloseReason::Backdrop,
            PickerCloseReason::CloseButton,
            PickerCloseReason::CancelKey,
        ] {
            let (mut state, mut interaction) = grid(1, 2);
            let before = state.clone();

            reduce_grid(
                &mut state,
                &mut interaction,
                GridAction::OpenPicker { cell: CellIndex(1) },
            )
            .unwrap();
            let effects = reduce_grid(
                &mut state,
                &mut interaction,
                GridAction::ClosePicker { reason },
            )
            .unwrap();

            assert_eq!(state, before, "{}", reason.as_str());
            assert!(interaction.picker.is_none());
            assert_eq!(
                effects,
                vec![GridEffect::RemovePickerCancelKey(PickerToken(1))]
            );
        }
    }

    #[test]
    fn opening_second_picker_closes_the_first() {
        let (mut state, mut interaction) = grid(1, 3);

        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::OpenPicker { cell: CellIndex(0) },
        )
        .unwrap();
        let effects = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::OpenPicker { cell: CellIndex(2) },
        )
        .unwrap();

        assert_eq!(
            effects,
            vec![
                GridEffect::RemovePickerCancelKey(PickerToken(1)),
                GridEffect::InstallPickerCancelKey(PickerToken(2)),
            ]
        );
        assert_eq!(
            interaction.picker,
            Some(PickerSession {
                cell: CellIndex(2),
                token: PickerToken(2)
            })
        );
    }

    #[test]
    fn close_or_select_without_open_picker_is_noop() {
        let (mut state, mut interaction) = grid(1, 1);
        let before = state.clone();

        let closed = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::ClosePicker {
                reason: PickerCloseReason::CancelKey,
            },
        )
        .unwrap();
        let selected = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::SelectPickerIcon {
                icon: IconRef::new(ICON_A),
            },
        )
        .unwrap();

        assert!(closed.is_empty());
        assert!(selected.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn invalid_controls_leave_grid_untouched() {
        let (mut state, mut interaction) = grid(2, 2);
        place(&mut state, 1, ICON_A);
        let before = state.clone();

        for (rows, cols) in [("0", "3"), ("3", "-1"), ("abc", "2"), ("", "")] {
            let err = reduce_grid(
                &mut state,
                &mut interaction,
                GridAction::ApplyControls {
                    rows_input: rows.to_string(),
                    cols_input: cols.to_string(),
                },
            )
            .unwrap_err();
            assert!(matches!(err, ReducerError::InvalidDimensions { .. }));
        }

        assert_eq!(state, before);
    }

    #[test]
    fn apply_controls_rebuilds_and_closes_open_picker() {
        let (mut state, mut interaction) = grid(2, 2);
        place(&mut state, 1, ICON_A);
        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::OpenPicker { cell: CellIndex(3) },
        )
        .unwrap();

        let effects = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::ApplyControls {
                rows_input: "3".to_string(),
                cols_input: "4".to_string(),
            },
        )
        .unwrap();

        assert_eq!(state.cells().len(), 12);
        assert_eq!(state.occupied_count(), 0);
        assert!(interaction.picker.is_none());
        assert_eq!(
            effects,
            vec![
                GridEffect::RemovePickerCancelKey(PickerToken(1)),
                GridEffect::Announce("Grid rebuilt with 3 rows and 4 columns".to_string()),
            ]
        );
    }

    #[test]
    fn rebuild_abandons_active_gesture() {
        let (mut state, mut interaction) = grid(1, 2);
        place(&mut state, 1, ICON_A);
        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureStart {
                source: GestureSource::Cell(CellIndex(1)),
                pointer: at(0, 0),
            },
        )
        .unwrap();

        reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::Rebuild {
                dimensions: GridDimensions::new(1, 1).unwrap(),
            },
        )
        .unwrap();
        let effects = reduce_grid(
            &mut state,
            &mut interaction,
            GridAction::GestureEnd {
                pointer: at(0, 0),
                drop_target: Some(CellIndex(0)),
            },
        )
        .unwrap();

        assert!(effects.is_empty());
        assert_eq!(state.occupied_count(), 0);
    }

    #[test]
    fn reset_clears_cells_but_keeps_shape() {
        let (mut state, mut interaction) = grid(2, 3);
        place(&mut state, 0, ICON_A);
        place(&mut state, 4, ICON_B);

        reduce_grid(&mut state, &mut interaction, GridAction::Reset).unwrap();

        assert_eq!(state.cells().len(), 6);
        assert_eq!(state.occupied_count(), 0);
    }

    #[test]
    fn out_of_range_cells_are_rejected_without_mutation() {
        let (mut state, mut interaction) = grid(1, 2);
        let before_state = state.clone();
        let before_interaction = interaction.clone();

        for action in [
            GridAction::Assign {
                cell: CellIndex(2),
                icon: IconRef::new(ICON_A),
            },
            GridAction::RemoveIcon { cell: CellIndex(5) },
            GridAction::CellClick { cell: CellIndex(2) },
            GridAction::OpenPicker { cell: CellIndex(2) },
            GridAction::GestureStart {
                source: GestureSource::Cell(CellIndex(7)),
                pointer: at(0, 0),
            },
        ] {
            let err = reduce_grid(&mut state, &mut interaction, action).unwrap_err();
            assert!(matches!(err, ReducerError::CellOutOfRange { len: 2, .. }));
        }

        assert_eq!(state, before_state);
        assert_eq!(interaction, before_interaction);
    }
}
