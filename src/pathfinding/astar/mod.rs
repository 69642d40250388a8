//! A* pathfinding algorithm.
//!
//! Implements A* search on a traversability grid with:
//! - 4-connected movement (up, down, left, right)
//! - Unit step cost
//! - Manhattan heuristic (admissible and consistent, so paths are optimal)
//! - First-encountered tie breaking on equal `f`

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, PathFailure, PathResult};

use crate::core::{GridCell, Route};
use crate::grid::TraversabilityGrid;

/// Quick path finding with default configuration.
///
/// Returns an empty route when either endpoint is out of bounds or blocked,
/// or when the goal is unreachable. `start == goal` yields `[start]`.
pub fn find_path<G: TraversabilityGrid + ?Sized>(grid: &G, start: GridCell, goal: GridCell) -> Route {
    AStarPlanner::with_defaults(grid)
        .find_path(start, goal)
        .into_route()
}

/// Check if a path exists
pub fn path_exists<G: TraversabilityGrid + ?Sized>(grid: &G, start: GridCell, goal: GridCell) -> bool {
    AStarPlanner::with_defaults(grid).find_path(start, goal).success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{OccupancyGrid, TraversabilityMatrix};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    fn assert_4_connected(path: &[GridCell]) {
        for pair in path.windows(2) {
            assert!(
                pair[0].is_adjacent_4(&pair[1]),
                "non-adjacent step {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    /// Breadth-first shortest path length in cells (0 if unreachable)
    fn bfs_length(grid: &TraversabilityMatrix, start: GridCell, goal: GridCell) -> usize {
        if !grid.is_free(start) || !grid.is_free(goal) {
            return 0;
        }
        let mut dist = std::collections::HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(start, 1usize);
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            if cell == goal {
                return dist[&cell];
            }
            for n in cell.neighbors_4() {
                if grid.is_free(n) && !dist.contains_key(&n) {
                    dist.insert(n, dist[&cell] + 1);
                    queue.push_back(n);
                }
            }
        }
        0
    }

    #[test]
    fn test_simple_path() {
        let grid = OccupancyGrid::new(10, 10);
        let start = GridCell::new(0, 0);
        let goal = GridCell::new(9, 9);

        let result = AStarPlanner::with_defaults(&grid).find_path(start, goal);

        assert!(result.success);
        assert_eq!(result.path[0], start);
        assert_eq!(*result.path.last().unwrap(), goal);
        assert_eq!(result.cost, 18);
        assert_4_connected(&result.path);
    }

    #[test]
    fn test_open_grid_is_optimal() {
        let grid = OccupancyGrid::new(12, 17);
        let cases = [
            (GridCell::new(0, 0), GridCell::new(11, 16)),
            (GridCell::new(5, 3), GridCell::new(5, 14)),
            (GridCell::new(11, 0), GridCell::new(0, 16)),
            (GridCell::new(7, 7), GridCell::new(2, 7)),
        ];

        for (start, goal) in cases {
            let path = find_path(&grid, start, goal);
            assert_eq!(path.len(), 1 + start.manhattan_distance(&goal) as usize);
            assert_4_connected(&path);
        }
    }

    #[test]
    fn test_same_start_and_goal() {
        let grid = OccupancyGrid::new(3, 3);
        let c = GridCell::new(1, 1);
        assert_eq!(find_path(&grid, c, c), vec![c]);
    }

    #[test]
    fn test_planner_searches_given_grid() {
        let grid = TraversabilityMatrix::all_free(4, 7);
        let planner = AStarPlanner::new(&grid, AStarConfig::with_max_iterations(50));
        assert_eq!(planner.grid().rows(), 4);
        assert_eq!(planner.grid().cols(), 7);
        assert!(planner.find_path(GridCell::new(0, 0), GridCell::new(3, 6)).success);
    }

    #[test]
    fn test_path_around_obstacle() {
        let grid = OccupancyGrid::from_ascii(
            "
            .......
            ...#...
            ...#...
            ...#...
            .......
            ",
        )
        .unwrap();

        let path = find_path(&grid, GridCell::new(2, 0), GridCell::new(2, 6));
        // Detour of two rows around the wall
        assert_eq!(path.len(), 11);
        assert_4_connected(&path);
        assert!(path.iter().all(|c| grid.is_free(*c)));
    }

    #[test]
    fn test_no_path() {
        let grid = OccupancyGrid::from_ascii(
            "
            ..#..
            ..#..
            ..#..
            ",
        )
        .unwrap();

        let result =
            AStarPlanner::with_defaults(&grid).find_path(GridCell::new(1, 0), GridCell::new(1, 4));
        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
        assert!(!path_exists(&grid, GridCell::new(1, 0), GridCell::new(1, 4)));
    }

    #[test]
    fn test_start_blocked() {
        let grid = OccupancyGrid::from_ascii("*....").unwrap();
        let result =
            AStarPlanner::with_defaults(&grid).find_path(GridCell::new(0, 0), GridCell::new(0, 4));
        assert_eq!(result.failure_reason, Some(PathFailure::StartBlocked));
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_goal_blocked() {
        let grid = OccupancyGrid::from_ascii("....#").unwrap();
        let result =
            AStarPlanner::with_defaults(&grid).find_path(GridCell::new(0, 0), GridCell::new(0, 4));
        assert_eq!(result.failure_reason, Some(PathFailure::GoalBlocked));
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = OccupancyGrid::new(4, 4);
        let result =
            AStarPlanner::with_defaults(&grid).find_path(GridCell::new(0, 0), GridCell::new(4, 0));
        assert_eq!(result.failure_reason, Some(PathFailure::OutOfBounds));
        assert!(find_path(&grid, GridCell::new(-1, 0), GridCell::new(0, 0)).is_empty());
    }

    #[test]
    fn test_max_iterations() {
        let grid = OccupancyGrid::new(30, 30);
        let planner = AStarPlanner::new(&grid, AStarConfig::with_max_iterations(5));
        let result = planner.find_path(GridCell::new(0, 0), GridCell::new(29, 29));
        assert!(!result.success);
        assert_eq!(
            result.failure_reason,
            Some(PathFailure::MaxIterationsExceeded)
        );
    }

    #[test]
    fn test_deterministic() {
        let grid = OccupancyGrid::new(8, 8);
        let a = find_path(&grid, GridCell::new(0, 0), GridCell::new(7, 7));
        let b = find_path(&grid, GridCell::new(0, 0), GridCell::new(7, 7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_matches_bfs_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x6d61_7267);

        for _ in 0..40 {
            let rows = rng.gen_range(4..16);
            let cols = rng.gen_range(4..16);
            let cells: Vec<Vec<bool>> = (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_bool(0.7)).collect())
                .collect();
            let grid = TraversabilityMatrix::from_rows(&cells);

            for _ in 0..10 {
                let start = GridCell::new(rng.gen_range(0..rows) as i32, rng.gen_range(0..cols) as i32);
                let goal = GridCell::new(rng.gen_range(0..rows) as i32, rng.gen_range(0..cols) as i32);

                let path = find_path(&grid, start, goal);
                assert_eq!(path.len(), bfs_length(&grid, start, goal));
                if !path.is_empty() {
                    assert_eq!(path[0], start);
                    assert_eq!(*path.last().unwrap(), goal);
                    assert_4_connected(&path);
                }
            }
        }
    }
}
