//! Benchmark A* search and greedy tour planning.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marga::core::{CellState, GridCell};
use marga::coverage::Region;
use marga::grid::{OccupancyGrid, TraversabilityGrid};
use marga::pathfinding::{AStarConfig, AStarPlanner};
use marga::preprocess::widen;
use marga::tour::{PlannerSession, TourPlanner};

/// Square room with staggered interior walls.
fn room(size: usize) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(size, size);
    let n = size as i32;
    for (i, col) in (n / 4..n).step_by((n / 4).max(1) as usize).enumerate() {
        for row in 0..n - 2 {
            // Alternate the gap between top and bottom
            let r = if i % 2 == 0 { row } else { row + 2 };
            grid.set(GridCell::new(r, col), CellState::Obstacle);
        }
    }
    grid
}

/// `count` small regions spread over the room, marked as debris.
fn regions(grid: &mut OccupancyGrid, count: usize) -> Vec<Region> {
    let n = grid.rows() as i32;
    let regions: Vec<Region> = (0..count as i32)
        .map(|i| {
            let r = (i * 7 + 3) % (n - 4);
            let c = (i * 11 + 1) % (n - 4);
            Region::spanning(GridCell::new(r, c), GridCell::new(r + 2, c + 2))
        })
        .collect();
    for region in &regions {
        for cell in region.cells() {
            grid.set(cell, CellState::Debris);
        }
    }
    regions
}

fn bench_astar(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar_corner_to_corner");

    for size in [32usize, 64, 128] {
        let grid = room(size);
        let planner = AStarPlanner::new(&grid, AStarConfig::default());
        let goal = GridCell::new(size as i32 - 1, size as i32 - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(planner.find_path(black_box(GridCell::new(0, 0)), goal)))
        });
    }

    group.finish();
}

fn bench_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_regions");

    for count in [2usize, 5, 10] {
        let mut grid = room(64);
        let regions = regions(&mut grid, count);
        let widened = widen(&grid, &regions);
        let planner = TourPlanner::with_defaults(&widened);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(planner.plan(GridCell::new(0, 0), black_box(&regions))))
        });
    }

    group.finish();
}

fn bench_session_cached_query(c: &mut Criterion) {
    let mut grid = room(64);
    let regions = regions(&mut grid, 5);
    let mut session = PlannerSession::new(regions);
    let route = session.query(&grid, GridCell::new(0, 0)).route;
    let mid = route[route.len() / 2];

    c.bench_function("session_cached_suffix", |b| {
        b.iter(|| black_box(session.query(&grid, black_box(mid))))
    });
}

criterion_group!(benches, bench_astar, bench_tour, bench_session_cached_query);
criterion_main!(benches);
