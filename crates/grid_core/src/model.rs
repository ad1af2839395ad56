//! Grid cells, icon references, and interaction state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{dimensions::GridDimensions, picker::PickerSession, reducer::ReducerError};

/// Icon id rendered by cells that hold no assigned icon.
pub const DEFAULT_ICON: &str = "icons/Icon_Default.png";

/// Opaque identifier of a selectable icon image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    /// Wraps an icon path or id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The empty-cell sentinel.
    pub fn default_icon() -> Self {
        Self(DEFAULT_ICON.to_string())
    }

    /// Returns whether this is the empty-cell sentinel.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_ICON
    }

    /// Borrowed id, suitable for an image `src`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IconRef {
    fn default() -> Self {
        Self::default_icon()
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Zero-based row-major cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellIndex(pub usize);

impl CellIndex {
    /// One-based label shown to users.
    pub fn label(self) -> String {
        (self.0 + 1).to_string()
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One grid slot. Always holds exactly one icon; empty is [`IconRef::default_icon`].
pub struct Cell {
    /// Stable position for the lifetime of the grid.
    pub index: CellIndex,
    /// Current icon.
    pub assigned_icon: IconRef,
}

impl Cell {
    fn fresh(index: usize) -> Self {
        Self {
            index: CellIndex(index),
            assigned_icon: IconRef::default_icon(),
        }
    }

    /// Returns whether the cell holds a non-default icon.
    pub fn is_occupied(&self) -> bool {
        !self.assigned_icon.is_default()
    }

    /// Builds the renderable projection of this cell.
    pub fn view(&self) -> CellView {
        CellView {
            index: self.index,
            label: self.index.label(),
            icon: self.assigned_icon.clone(),
            removable: self.is_occupied(),
            draggable: self.is_occupied(),
        }
    }
}

/// Renderable unit for one cell: index label, icon visual, and optional remove affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Cell position.
    pub index: CellIndex,
    /// One-based label text.
    pub label: String,
    /// Icon to render.
    pub icon: IconRef,
    /// Whether the remove control is shown.
    pub removable: bool,
    /// Whether the icon may start a drag gesture.
    pub draggable: bool,
}

/// Indexed collection of cells in row-major order.
///
/// `cells.len() == rows * cols` holds for every reachable state: the only way to change the
/// shape is [`GridState::rebuild`], which discards all assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
    generation: u64,
}

impl GridState {
    /// Creates a grid with every cell set to the default icon.
    pub fn new(dimensions: GridDimensions) -> Self {
        let mut state = Self {
            dimensions,
            cells: Vec::new(),
            generation: 0,
        };
        state.rebuild(dimensions);
        state
    }

    /// Replaces the whole cell sequence with `rows * cols` fresh default cells.
    pub fn rebuild(&mut self, dimensions: GridDimensions) {
        self.dimensions = dimensions;
        self.cells = (0..dimensions.cell_count()).map(Cell::fresh).collect();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Sets a cell's icon.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::CellOutOfRange`] when `index` is outside the grid.
    pub fn assign(&mut self, index: CellIndex, icon: IconRef) -> Result<(), ReducerError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index.0)
            .ok_or(ReducerError::CellOutOfRange { index, len })?;
        cell.assigned_icon = icon;
        Ok(())
    }

    /// Resets every cell to the default icon without changing the shape.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.assigned_icon = IconRef::default_icon();
        }
    }

    /// Current shape.
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Incremented on every rebuild.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Looks up a cell by index.
    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index.0)
    }

    /// Icon at `index`, if the index is in range.
    pub fn icon_at(&self, index: CellIndex) -> Option<&IconRef> {
        self.cell(index).map(|cell| &cell.assigned_icon)
    }

    /// Renderable projections for every cell.
    pub fn cell_views(&self) -> Vec<CellView> {
        self.cells.iter().map(Cell::view).collect()
    }

    /// Number of cells holding a non-default icon.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }
}

/// Screen-space pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    /// Horizontal client coordinate.
    pub x: i32,
    /// Vertical client coordinate.
    pub y: i32,
}

/// The single active drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragContext {
    /// Icon being dragged.
    pub source_icon: IconRef,
    /// Originating cell; `None` when the icon came from the catalog.
    pub source_cell: Option<CellIndex>,
    /// Latest pointer position, used only for the floating preview.
    pub pointer: PointerPosition,
}

impl DragContext {
    /// Returns whether the gesture started from the catalog.
    pub fn is_from_catalog(&self) -> bool {
        self.source_cell.is_none()
    }
}

/// Ephemeral gesture and overlay state owned by the interaction reducer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Active gesture, if any. At most one exists.
    pub gesture: Option<DragContext>,
    /// Open picker overlay, if any. At most one exists.
    pub picker: Option<PickerSession>,
    /// Drag source whose next click is the synthetic click that follows a drop elsewhere.
    ///
    /// Expires on that click, the next pointer press, or a rebuild.
    pub click_guard: Option<CellIndex>,
    pub(crate) next_picker_token: u64,
}

impl InteractionState {
    /// Returns whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }
}
