//! Court corridor refinement.
//!
//! On a court-shaped map the raw sensing treats every painted line as solid
//! and a barrier (the net) splits the court in two. This refinement opens the
//! whole court area plus a side passage around both ends of the barrier, so
//! the planner can cross from one half to the other, while the barrier itself
//! stays blocked inside the court.
//!
//! ```text
//!   corridor cols ─┬──────────────────────────────┬─
//!                  │  court rows: all free         │
//!                  │                               │
//!   net band   ────┤   ######################      ├────  free beyond the inset
//!                  │                               │
//!                  │  court rows: all free         │
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::coverage::Region;
use crate::core::GridCell;
use crate::grid::{TraversabilityGrid, TraversabilityMatrix};

/// Court corridor settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtCorridorConfig {
    /// Cells added around the union of all regions to form the court box
    #[serde(default = "defaults::court_margin")]
    pub court_margin: i32,

    /// Extra columns opened beyond the court on each side
    #[serde(default = "defaults::passage_margin")]
    pub passage_margin: i32,

    /// Rows on each side of the barrier row that stay blocked
    #[serde(default = "defaults::net_half_thickness")]
    pub net_half_thickness: i32,

    /// Columns beyond the court edge where the barrier still stays blocked
    #[serde(default = "defaults::net_inset")]
    pub net_inset: i32,
}

impl Default for CourtCorridorConfig {
    fn default() -> Self {
        Self {
            court_margin: defaults::court_margin(),
            passage_margin: defaults::passage_margin(),
            net_half_thickness: defaults::net_half_thickness(),
            net_inset: defaults::net_inset(),
        }
    }
}

/// Computed court geometry for one map and region set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourtLayout {
    /// Court box (union of regions grown by the margin, clamped to the grid)
    pub court: (GridCell, GridCell),
    /// Estimated barrier row
    pub net_row: i32,
    /// First opened column
    pub corridor_left: i32,
    /// Last opened column
    pub corridor_right: i32,
}

impl CourtLayout {
    /// Does this cell keep its raw state because it belongs to the barrier?
    #[inline]
    pub fn is_barrier(&self, cell: GridCell, config: &CourtCorridorConfig) -> bool {
        let (top_left, bottom_right) = self.court;
        (cell.row - self.net_row).abs() <= config.net_half_thickness
            && cell.col >= top_left.col - config.net_inset
            && cell.col <= bottom_right.col + config.net_inset
    }
}

/// Opens a court and a barrier bypass around the declared regions.
#[derive(Clone, Debug, Default)]
pub struct CourtCorridor {
    config: CourtCorridorConfig,
}

impl CourtCorridor {
    /// Create with the given settings
    pub fn new(config: CourtCorridorConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub fn config(&self) -> &CourtCorridorConfig {
        &self.config
    }

    /// Compute the court geometry, or `None` when there are no regions or
    /// the grid is empty
    pub fn layout(&self, rows: usize, cols: usize, regions: &[Region]) -> Option<CourtLayout> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let union = Region::union_of(regions)?;
        let max_row = rows as i32 - 1;
        let max_col = cols as i32 - 1;
        let margin = self.config.court_margin;

        let court_r1 = (union.top() - margin).max(0);
        let court_c1 = (union.left() - margin).max(0);
        let court_r2 = (union.bottom() + margin).min(max_row);
        let court_c2 = (union.right() + margin).min(max_col);

        Some(CourtLayout {
            court: (
                GridCell::new(court_r1, court_c1),
                GridCell::new(court_r2, court_c2),
            ),
            net_row: (court_r1 + court_r2).div_euclid(2),
            corridor_left: (court_c1 - self.config.passage_margin).max(0),
            corridor_right: (court_c2 + self.config.passage_margin).min(max_col),
        })
    }

    /// Open the court on `matrix`. Returns the number of cells changed.
    pub fn apply(&self, matrix: &mut TraversabilityMatrix, regions: &[Region]) -> usize {
        let Some(layout) = self.layout(matrix.rows(), matrix.cols(), regions) else {
            return 0;
        };
        let (top_left, bottom_right) = layout.court;

        let mut changed = 0;
        for r in top_left.row..=bottom_right.row {
            for c in layout.corridor_left..=layout.corridor_right {
                let cell = GridCell::new(r, c);
                if layout.is_barrier(cell, &self.config) {
                    continue;
                }
                if matrix.set_free(cell) {
                    changed += 1;
                }
            }
        }

        debug!(
            "[Court] court=({},{})-({},{}) net_row={} corridor cols {}..={}: {} cells opened",
            top_left.row,
            top_left.col,
            bottom_right.row,
            bottom_right.col,
            layout.net_row,
            layout.corridor_left,
            layout.corridor_right,
            changed
        );
        changed
    }
}
