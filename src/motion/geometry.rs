//! Cell-to-physical-rectangle lookups.

use crate::core::{GridCell, Rect};

/// Maps a grid cell to its physical footprint.
///
/// Implemented by whatever owns the rendering or simulation of the map.
/// Cells the geometry does not know about return `None`.
pub trait CellGeometry {
    /// Physical rectangle of `cell`, if it is inside the geometry
    fn cell_rect(&self, cell: GridCell) -> Option<Rect>;
}

/// Evenly spaced cells starting at an origin.
///
/// Column indices grow along x and row indices along y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformGeometry {
    /// X of the left edge of column 0
    pub origin_x: f32,
    /// Y of the top edge of row 0
    pub origin_y: f32,
    /// Cell width
    pub cell_width: f32,
    /// Cell height
    pub cell_height: f32,
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl UniformGeometry {
    /// Square cells of side `cell_size` with the origin at (0, 0)
    pub fn new(rows: usize, cols: usize, cell_size: f32) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            cell_width: cell_size,
            cell_height: cell_size,
            rows,
            cols,
        }
    }

    /// Move the origin
    pub fn with_origin(mut self, origin_x: f32, origin_y: f32) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    #[inline]
    fn contains(&self, cell: GridCell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }
}

impl CellGeometry for UniformGeometry {
    fn cell_rect(&self, cell: GridCell) -> Option<Rect> {
        if !self.contains(cell) {
            return None;
        }
        Some(Rect::new(
            self.origin_x + cell.col as f32 * self.cell_width,
            self.origin_y + cell.row as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        ))
    }
}

/// Row-major rectangle table, as handed over by a simulator.
impl CellGeometry for Vec<Vec<Rect>> {
    fn cell_rect(&self, cell: GridCell) -> Option<Rect> {
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        self.get(row)?.get(col).copied()
    }
}
