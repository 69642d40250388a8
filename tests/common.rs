//! Test utilities for marga integration tests.
//!
//! Builders for fixture maps and checks shared by the scenario tests.

#![allow(dead_code)]

use std::collections::HashSet;

use marga::core::{CellState, GridCell};
use marga::coverage::Region;
use marga::grid::{OccupancyGrid, TraversabilityGrid};
use rand::Rng;
use rand::rngs::StdRng;

/// Install a test logger once. Output shows with `--nocapture`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Shorthand region constructor for fixtures.
pub fn region(r1: i32, c1: i32, r2: i32, c2: i32) -> Region {
    Region::new(GridCell::new(r1, c1), GridCell::new(r2, c2)).unwrap()
}

/// Free map with every region filled with debris.
pub fn debris_map(rows: usize, cols: usize, regions: &[Region]) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(rows, cols);
    for region in regions {
        for cell in region.cells() {
            grid.set(cell, CellState::Debris);
        }
    }
    grid
}

/// Court-shaped map: free floor split by a full-width net row.
pub fn court_map(rows: usize, cols: usize, net_row: i32, regions: &[Region]) -> OccupancyGrid {
    let mut grid = debris_map(rows, cols, regions);
    for col in 0..cols as i32 {
        grid.set(GridCell::new(net_row, col), CellState::Obstacle);
    }
    grid
}

/// Random obstacles with the given density. Region cells are debris.
pub fn random_map(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    density: f64,
    regions: &[Region],
) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(rows, cols);
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            if rng.gen_bool(density) {
                grid.set(GridCell::new(row, col), CellState::Obstacle);
            }
        }
    }
    for region in regions {
        for cell in region.cells() {
            grid.set(cell, CellState::Debris);
        }
    }
    grid
}

/// Random non-overlapping-ish region inside the grid.
pub fn random_region(rng: &mut StdRng, rows: usize, cols: usize, max_side: i32) -> Region {
    let h = rng.gen_range(1..=max_side);
    let w = rng.gen_range(1..=max_side);
    let r = rng.gen_range(0..=rows as i32 - h);
    let c = rng.gen_range(0..=cols as i32 - w);
    region(r, c, r + h - 1, c + w - 1)
}

/// Every consecutive pair of the route is 4-adjacent.
pub fn assert_route_contiguous(route: &[GridCell]) {
    for (i, pair) in route.windows(2).enumerate() {
        assert!(
            pair[0].is_adjacent_4(&pair[1]),
            "step {} not 4-adjacent: {:?} -> {:?}",
            i,
            pair[0],
            pair[1]
        );
    }
}

/// Every route cell is free on `grid`.
pub fn assert_route_free<G: TraversabilityGrid + ?Sized>(grid: &G, route: &[GridCell]) {
    for cell in route {
        assert!(grid.is_free(*cell), "route crosses blocked cell {:?}", cell);
    }
}

/// Every cell of `region` appears in the route.
pub fn assert_region_covered(route: &[GridCell], region: &Region) {
    let visited: HashSet<GridCell> = route.iter().copied().collect();
    for cell in region.cells() {
        assert!(visited.contains(&cell), "{:?} of {:?} not covered", cell, region);
    }
}
