//! Headless icon-grid core: asset catalog, grid model, pointer-gesture interaction reducer, and
//! picker state.
//!
//! The crate has no rendering dependency. UI bindings translate their native events into
//! [`GridAction`] values, feed them through [`reduce_grid`], re-render from [`GridState`], and
//! execute the returned [`GridEffect`] intents.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod dimensions;
pub mod geometry;
pub mod model;
pub mod picker;
pub mod reducer;

pub use catalog::{AssetCatalog, CatalogConfig};
pub use dimensions::{parse_dimension_input, GridDimensions};
pub use geometry::{CellLocator, GridGeometry};
pub use model::{
    Cell, CellIndex, CellView, DragContext, GridState, IconRef, InteractionState, PointerPosition,
    DEFAULT_ICON,
};
pub use picker::{PickerCloseReason, PickerSession, PickerToken};
pub use reducer::{reduce_grid, GestureSource, GridAction, GridEffect, ReducerError};
