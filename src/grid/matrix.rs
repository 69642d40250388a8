//! Pre-computed boolean traversability matrix.

use crate::core::GridCell;

use super::storage::TraversabilityGrid;

/// Binary traversability snapshot of a grid.
///
/// Built once from any [`TraversabilityGrid`] so that repeated path queries
/// on the same map state are a flat `Vec<bool>` lookup. This is also the
/// only grid the planner ever writes to: the preprocessor overrides obstacle
/// cells on its own copy and leaves the source map untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversabilityMatrix {
    /// true = safe to traverse, row-major
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl TraversabilityMatrix {
    /// Create a matrix with every cell free
    pub fn all_free(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![true; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix with every cell blocked
    pub fn all_blocked(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Snapshot the traversability of another grid
    pub fn from_grid<G: TraversabilityGrid + ?Sized>(grid: &G) -> Self {
        let rows = grid.rows();
        let cols = grid.cols();

        let mut cells = vec![false; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                cells[r * cols + c] = grid.is_free(GridCell::new(r as i32, c as i32));
            }
        }

        Self { cells, rows, cols }
    }

    /// Build from nested rows (`true` = free). Rows shorter than the first
    /// are padded with blocked cells.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut cells = vec![false; n_rows * n_cols];
        for (r, row) in rows.iter().enumerate() {
            for (c, &free) in row.iter().take(n_cols).enumerate() {
                cells[r * n_cols + c] = free;
            }
        }

        Self {
            cells,
            rows: n_rows,
            cols: n_cols,
        }
    }

    #[inline]
    fn index(&self, cell: GridCell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row as usize * self.cols + cell.col as usize)
        } else {
            None
        }
    }

    /// Force a cell traversable. Returns true if the cell changed.
    #[inline]
    pub fn set_free(&mut self, cell: GridCell) -> bool {
        match self.index(cell) {
            Some(i) if !self.cells[i] => {
                self.cells[i] = true;
                true
            }
            _ => false,
        }
    }

    /// Force a cell blocked. Returns true if the cell changed.
    #[inline]
    pub fn set_blocked(&mut self, cell: GridCell) -> bool {
        match self.index(cell) {
            Some(i) if self.cells[i] => {
                self.cells[i] = false;
                true
            }
            _ => false,
        }
    }

    /// Number of free cells
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&free| free).count()
    }
}

impl TraversabilityGrid for TraversabilityMatrix {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn is_free(&self, cell: GridCell) -> bool {
        self.index(cell).is_some_and(|i| self.cells[i])
    }
}
