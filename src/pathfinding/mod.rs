//! Point-to-point path planning.
//!
//! ## A* Pathfinding
//!
//! ```rust
//! use marga::core::GridCell;
//! use marga::grid::OccupancyGrid;
//! use marga::pathfinding::{AStarConfig, AStarPlanner};
//!
//! let grid = OccupancyGrid::new(10, 10);
//! let planner = AStarPlanner::new(&grid, AStarConfig::default());
//!
//! let result = planner.find_path(GridCell::new(0, 0), GridCell::new(4, 4));
//! assert!(result.success);
//! assert_eq!(result.length_cells(), 9);
//! ```

pub mod astar;

pub use astar::{AStarConfig, AStarPlanner, PathFailure, PathResult, find_path, path_exists};
