//! Layout engine for sticker sheets.
//!
//! This module handles:
//! - Computing how many whole cells fit in the working area
//! - Centering the used grid inside the margins
//! - Mapping slot indices to page coordinates

mod sheet_layout;

pub use sheet_layout::{
    compute_grid, CapacityPreview, CellRect, Grid, SheetLayout, MAX_CELLS_PER_PAGE,
};
