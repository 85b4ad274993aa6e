//! Pre-computed page geometry for a sticker sheet.
//!
//! The grid is computed once per document and every page reuses it, so slot
//! placement is a constant-time lookup.

use serde::Serialize;

use crate::error::{Result, StickerError};
use crate::types::PageSpec;

/// Most cells a single page may hold.
pub const MAX_CELLS_PER_PAGE: usize = 100_000;

/// Whole cells that fit on a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
    pub capacity: usize,
}

impl Grid {
    /// Capacity saturates at `usize::MAX` for degenerate cell sizes.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            capacity: columns.saturating_mul(rows),
        }
    }

    /// Logical (row, column) of a slot, counting rows from the top.
    pub fn slot_position(&self, slot: usize) -> Option<(usize, usize)> {
        if slot >= self.capacity || self.columns == 0 {
            return None;
        }
        Some((slot / self.columns, slot % self.columns))
    }
}

/// Maximum whole rows and columns of `cell_width x cell_height` cells that fit
/// in the working area without overlap.
///
/// Both the capacity preview and document generation go through this
/// function. Non-positive or non-finite inputs give an empty grid.
pub fn compute_grid(
    working_width: f64,
    working_height: f64,
    cell_width: f64,
    cell_height: f64,
) -> Grid {
    Grid::new(
        whole_fits(working_width, cell_width),
        whole_fits(working_height, cell_height),
    )
}

/// Live capacity figures for a page spec, in spec units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityPreview {
    pub working_width: f64,
    pub working_height: f64,
    pub columns: usize,
    pub rows: usize,
    pub capacity: usize,
}

impl CapacityPreview {
    /// Never fails; an unusable spec simply previews as zero capacity.
    pub fn new(spec: &PageSpec) -> Self {
        let working_width = spec.working_width();
        let working_height = spec.working_height();
        let grid = compute_grid(
            working_width,
            working_height,
            spec.cell_width,
            spec.cell_height,
        );
        Self {
            working_width,
            working_height,
            columns: grid.columns,
            rows: grid.rows,
            capacity: grid.capacity,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_fits(extent: f64, cell: f64) -> usize {
    if !extent.is_finite() || !cell.is_finite() || extent <= 0.0 || cell <= 0.0 {
        return 0;
    }
    // floor of a positive finite ratio; `as` saturates on overflow
    (extent / cell).floor().max(0.0) as usize
}

/// Rectangle of one cell in page coordinates (origin bottom-left, points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// Left edge
    pub x: f64,
    /// Bottom edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Pre-computed layout data for every page of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub grid: Grid,
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,
    /// Cell width in points
    pub cell_width: f64,
    /// Cell height in points
    pub cell_height: f64,
    /// Left edge of the used grid (margin plus centering offset), points
    pub origin_x: f64,
    /// Bottom edge of the used grid (margin plus centering offset), points
    pub origin_y: f64,
}

impl SheetLayout {
    /// Validate `spec` and compute the grid and its centered placement.
    ///
    /// # Errors
    /// - [`StickerError::InvalidSpec`] for non-finite or negative lengths
    /// - [`StickerError::MarginsTooLarge`] if no working area remains
    /// - [`StickerError::CellDoesNotFit`] if the grid is empty
    /// - [`StickerError::TooManyCells`] if the grid exceeds [`MAX_CELLS_PER_PAGE`]
    pub fn new(spec: &PageSpec) -> Result<Self> {
        let lengths = [
            ("page width", spec.page_width),
            ("page height", spec.page_height),
            ("margin", spec.margin),
            ("cell width", spec.cell_width),
            ("cell height", spec.cell_height),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(StickerError::InvalidSpec(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let work_w = spec.working_width();
        let work_h = spec.working_height();
        if work_w <= 0.0 || work_h <= 0.0 {
            return Err(StickerError::MarginsTooLarge {
                width: work_w,
                height: work_h,
            });
        }

        let grid = compute_grid(work_w, work_h, spec.cell_width, spec.cell_height);
        if grid.capacity == 0 {
            return Err(StickerError::CellDoesNotFit);
        }
        if grid.capacity > MAX_CELLS_PER_PAGE {
            return Err(StickerError::TooManyCells {
                capacity: grid.capacity,
                max: MAX_CELLS_PER_PAGE,
            });
        }

        let cell_width = spec.to_points(spec.cell_width);
        let cell_height = spec.to_points(spec.cell_height);
        let margin = spec.to_points(spec.margin);
        let used_w = usize_to_f64(grid.columns) * cell_width;
        let used_h = usize_to_f64(grid.rows) * cell_height;
        let offset_x = (spec.to_points(work_w) - used_w) / 2.0;
        let offset_y = (spec.to_points(work_h) - used_h) / 2.0;

        tracing::debug!(
            columns = grid.columns,
            rows = grid.rows,
            capacity = grid.capacity,
            "computed sticker grid"
        );

        Ok(Self {
            grid,
            page_width: spec.to_points(spec.page_width),
            page_height: spec.to_points(spec.page_height),
            cell_width,
            cell_height,
            origin_x: margin + offset_x,
            origin_y: margin + offset_y,
        })
    }

    /// Cells per page.
    pub fn capacity(&self) -> usize {
        self.grid.capacity
    }

    /// Placement of `slot` on the page.
    ///
    /// Slots fill row-major from the visual top-left. Page coordinates grow
    /// upward, so logical row `r` sits `rows - 1 - r` rows above the grid's
    /// bottom edge.
    pub fn slot_rect(&self, slot: usize) -> Option<CellRect> {
        let (row, col) = self.grid.slot_position(slot)?;
        let row_from_bottom = self.grid.rows - 1 - row;
        Some(CellRect {
            x: self.origin_x + usize_to_f64(col) * self.cell_width,
            y: self.origin_y + usize_to_f64(row_from_bottom) * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn usize_to_f64(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_grid_floors() {
        let grid = compute_grid(11.5, 17.5, 1.134, 0.585);
        assert_eq!(grid.columns, 10);
        assert_eq!(grid.rows, 29);
        assert_eq!(grid.capacity, 290);
    }

    #[test]
    fn test_compute_grid_rejects_degenerate_input() {
        assert_eq!(compute_grid(0.0, 10.0, 1.0, 1.0).capacity, 0);
        assert_eq!(compute_grid(10.0, -1.0, 1.0, 1.0).capacity, 0);
        assert_eq!(compute_grid(10.0, 10.0, 0.0, 1.0).capacity, 0);
        assert_eq!(compute_grid(f64::NAN, 10.0, 1.0, 1.0).capacity, 0);
    }

    #[test]
    fn test_preview_matches_layout() {
        let spec = PageSpec::default();
        let preview = CapacityPreview::new(&spec);
        let layout = SheetLayout::new(&spec).unwrap();
        assert_eq!(preview.capacity, layout.capacity());
        assert_eq!(preview.columns, layout.grid.columns);
    }

    #[test]
    fn test_preview_of_unusable_spec() {
        let spec = PageSpec {
            margin: 7.0,
            ..PageSpec::default()
        };
        let preview = CapacityPreview::new(&spec);
        assert_eq!(preview.capacity, 0);
        assert!(preview.working_width < 0.0);
    }

    #[test]
    fn test_slot_position_row_major() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.slot_position(0), Some((0, 0)));
        assert_eq!(grid.slot_position(2), Some((0, 2)));
        assert_eq!(grid.slot_position(3), Some((1, 0)));
        assert_eq!(grid.slot_position(6), None);
    }

    #[test]
    fn test_first_slot_is_top_left() {
        let spec = PageSpec {
            page_width: 4.0,
            page_height: 3.0,
            margin: 0.5,
            cell_width: 1.0,
            cell_height: 1.0,
            ..PageSpec::default()
        };
        let layout = SheetLayout::new(&spec).unwrap();
        assert_eq!(layout.grid, Grid::new(3, 2));
        let first = layout.slot_rect(0).unwrap();
        let last = layout.slot_rect(5).unwrap();
        // top row of a 2-row grid starting at the bottom margin
        assert_eq!(first.x, 36.0);
        assert_eq!(first.y, 36.0 + 72.0);
        assert_eq!(last.x, 36.0 + 144.0);
        assert_eq!(last.y, 36.0);
    }

    #[test]
    fn test_grid_is_centered() {
        let spec = PageSpec {
            page_width: 5.0,
            page_height: 5.0,
            margin: 0.5,
            cell_width: 1.5,
            cell_height: 1.5,
            ..PageSpec::default()
        };
        let layout = SheetLayout::new(&spec).unwrap();
        // 4in working area, 3in used: 1in of slack split evenly
        assert!((layout.origin_x - (36.0 + 36.0)).abs() < 1e-9);
        assert!((layout.origin_y - (36.0 + 36.0)).abs() < 1e-9);
    }
}
