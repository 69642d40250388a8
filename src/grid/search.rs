//! Nearest free cell search.

use log::{debug, trace};

use crate::core::GridCell;

use super::storage::TraversabilityGrid;

/// Find the nearest free cell to `center` within `max_radius` Manhattan rings.
///
/// Returns `center` itself when it is already free. Otherwise rings of
/// radius 1, 2, .. are scanned (row offset ascending, then column offset
/// ascending) and the first free cell wins. Returns `None` when nothing is
/// free within the radius. The radius is capped at the distance to the
/// farthest grid corner, which already reaches every cell.
pub fn nearest_free<G: TraversabilityGrid + ?Sized>(
    grid: &G,
    center: GridCell,
    max_radius: u32,
) -> Option<GridCell> {
    if grid.is_free(center) {
        return Some(center);
    }

    let max_radius = i64::from(max_radius).min(farthest_corner(grid, center));
    let (row, col) = (i64::from(center.row), i64::from(center.col));
    for r in 1..=max_radius {
        for dr in -r..=r {
            // Two columns per row on the ring, one at the tips
            let rest = r - dr.abs();
            let offsets = if rest == 0 { [0, 0] } else { [-rest, rest] };

            for dc in offsets {
                let (Ok(r_cell), Ok(c_cell)) = (i32::try_from(row + dr), i32::try_from(col + dc))
                else {
                    continue;
                };
                let cell = GridCell::new(r_cell, c_cell);
                if grid.is_free(cell) {
                    debug!(
                        "[Search] ({},{}) blocked, using ({},{}) at radius {}",
                        center.row, center.col, cell.row, cell.col, r
                    );
                    return Some(cell);
                }
            }
        }
        trace!("[Search] radius {} exhausted", r);
    }

    debug!(
        "[Search] no free cell within {} of ({},{})",
        max_radius, center.row, center.col
    );
    None
}

/// Manhattan distance from `center` to the farthest corner of the grid
fn farthest_corner<G: TraversabilityGrid + ?Sized>(grid: &G, center: GridCell) -> i64 {
    let last_row = grid.rows().saturating_sub(1) as i64;
    let last_col = grid.cols().saturating_sub(1) as i64;
    let (row, col) = (i64::from(center.row), i64::from(center.col));
    row.abs().max((last_row - row).abs()) + col.abs().max((last_col - col).abs())
}
