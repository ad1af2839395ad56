//! Pointer hit-testing against grid cell bounds.

use crate::{
    dimensions::GridDimensions,
    model::{CellIndex, PointerPosition},
};

/// Resolves which cell, if any, lies under a screen position at the instant of the query.
pub trait CellLocator {
    /// Returns the cell under `pointer`.
    fn cell_at(&self, pointer: PointerPosition) -> Option<CellIndex>;
}

/// Pure row-major layout: uniform cells separated by a fixed gap, anchored at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Top-left corner of cell 0.
    pub origin: PointerPosition,
    /// Cell width in pixels.
    pub cell_width: i32,
    /// Cell height in pixels.
    pub cell_height: i32,
    /// Space between adjacent cells; pointers inside a gap hit nothing.
    pub gap: i32,
    /// Grid shape.
    pub dimensions: GridDimensions,
}

impl GridGeometry {
    /// Bounds of a cell as `(x, y, w, h)`, or `None` when out of range.
    pub fn cell_rect(&self, index: CellIndex) -> Option<(i32, i32, i32, i32)> {
        if index.0 >= self.dimensions.cell_count() {
            return None;
        }
        let cols = self.dimensions.cols() as usize;
        let row = (index.0 / cols) as i32;
        let col = (index.0 % cols) as i32;
        Some((
            self.origin.x + col * (self.cell_width + self.gap),
            self.origin.y + row * (self.cell_height + self.gap),
            self.cell_width,
            self.cell_height,
        ))
    }
}

impl CellLocator for GridGeometry {
    fn cell_at(&self, pointer: PointerPosition) -> Option<CellIndex> {
        if self.cell_width <= 0 || self.cell_height <= 0 {
            return None;
        }
        let dx = pointer.x - self.origin.x;
        let dy = pointer.y - self.origin.y;
        if dx < 0 || dy < 0 {
            return None;
        }
        let stride_x = self.cell_width + self.gap.max(0);
        let stride_y = self.cell_height + self.gap.max(0);
        let col = dx / stride_x;
        let row = dy / stride_y;
        if dx % stride_x >= self.cell_width || dy % stride_y >= self.cell_height {
            return None;
        }
        if col >= self.dimensions.cols() as i32 || row >= self.dimensions.rows() as i32 {
            return None;
        }
        Some(CellIndex(
            row as usize * self.dimensions.cols() as usize + col as usize,
        ))
    }
}

impl<F> CellLocator for F
where
    F: Fn(PointerPosition) -> Option<CellIndex>,
{
    fn cell_at(&self, pointer: PointerPosition) -> Option<CellIndex> {
        self(pointer)
    }
}
