//! Boustrophedon (serpentine) coverage sweeps.

use log::trace;

use crate::core::{GridCell, Route};

use super::region::Region;

/// Sweep every cell of `region` exactly once in serpentine row order.
///
/// The sweep is oriented by the entry point:
/// - entering on the bottom row runs the rows bottom-up, otherwise top-down
/// - entering on the right column runs the first row right-to-left,
///   otherwise left-to-right; each later row flips direction
///
/// When `entry` is one of the region's corners the sweep starts on it.
/// Consecutive cells are always 4-adjacent.
pub fn cover(region: &Region, entry: GridCell) -> Route {
    let mut rows: Vec<i32> = (region.top()..=region.bottom()).collect();
    if entry.row == region.bottom() {
        rows.reverse();
    }

    let starts_right = entry.col == region.right();
    let mut route = Vec::with_capacity(region.area());

    for (i, &r) in rows.iter().enumerate() {
        let right_to_left = (i % 2 == 0) == starts_right;
        if right_to_left {
            route.extend((region.left()..=region.right()).rev().map(|c| GridCell::new(r, c)));
        } else {
            route.extend((region.left()..=region.right()).map(|c| GridCell::new(r, c)));
        }
    }

    trace!(
        "[Coverage] {}x{} region from ({},{}): {} cells",
        region.height(),
        region.width(),
        entry.row,
        entry.col,
        route.len()
    );
    route
}
