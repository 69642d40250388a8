//! # Marga: Grid Coverage Tour Planning
//!
//! Plans a route for a grid-confined robot that has to sweep a set of
//! rectangular service regions (debris patches, for example) scattered over
//! a 2D occupancy grid, then turns the route into poses for a motion
//! controller.
//!
//! ## Features
//!
//! - **A\* Search**: 4-connected, unit step cost, Manhattan heuristic
//! - **Greedy Touring**: next region chosen by shortest path to any of its corners
//! - **Boustrophedon Coverage**: every region cell visited exactly once
//! - **Memoized Sessions**: later queries slice the stored route instead of replanning
//! - **Pose Conversion**: cell route to cardinal-heading poses via a cell geometry
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::core::GridCell;
//! use marga::coverage::Region;
//! use marga::grid::OccupancyGrid;
//! use marga::motion::{UniformGeometry, to_poses};
//! use marga::tour::PlannerSession;
//!
//! let grid = OccupancyGrid::new(10, 10);
//! let region = Region::new(GridCell::new(2, 2), GridCell::new(4, 4)).unwrap();
//!
//! let mut session = PlannerSession::new(vec![region]);
//! let output = session.query(&grid, GridCell::new(0, 0));
//! assert_eq!(output.route.len(), 13);
//!
//! let plan = to_poses(&output.route, &UniformGeometry::new(10, 10, 1.0));
//! assert_eq!(plan.poses.len(), 13);
//! ```
//!
//! ## Coordinate Frame
//!
//! Cells are `(row, col)` with row 0 at the top. Rows grow downward, so a
//! step to a larger row faces 3π/2 and a step to a smaller row faces π/2.
//!
//! ## Architecture
//!
//! - [`core`]: Value types (GridCell, Rect, CellState, Pose)
//! - [`grid`]: Traversability grids and nearest-free search
//! - [`pathfinding`]: A* shortest paths
//! - [`preprocess`]: Region widening and court corridor refinement
//! - [`coverage`]: Regions and serpentine sweeps
//! - [`tour`]: Greedy tour planning and per-mission sessions
//! - [`motion`]: Route to pose conversion
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!     ┌────────────────┐     ┌────────────────┐
//!     │ Occupancy Grid │     │  Region List   │
//!     └───────┬────────┘     └───────┬────────┘
//!             │                      │
//!             └──────────┬───────────┘
//!                        ▼
//!               ┌────────────────┐
//!               │ RegionPreproc. │  regions forced free
//!               └───────┬────────┘
//!                       ▼
//!               ┌────────────────┐    nearest corner   ┌──────────┐
//!               │  TourPlanner   │◄───────────────────►│    A*    │
//!               └───────┬────────┘                     └──────────┘
//!                       │ per region
//!                       ▼
//!               ┌────────────────┐
//!               │     cover      │  serpentine sweep
//!               └───────┬────────┘
//!                       ▼
//!               ┌────────────────┐
//!               │ PlannerSession │  memoized, sliced per query
//!               └───────┬────────┘
//!                       ▼
//!               ┌────────────────┐
//!               │MotionConverter │──► initial pose + poses
//!               └────────────────┘
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod coverage;
pub mod grid;
pub mod motion;
pub mod pathfinding;
pub mod preprocess;
pub mod tour;

// Re-export main types at crate root
pub use config::{ConfigLoadError, MargaConfig};
pub use crate::core::{CellState, GridCell, Heading, Pose, Rect, Route};
pub use coverage::{Region, RegionError, cover};
pub use grid::{OccupancyGrid, TraversabilityGrid, TraversabilityMatrix};
pub use motion::{CellGeometry, MotionConverter, MotionPlan, UniformGeometry, to_poses};
pub use pathfinding::{AStarConfig, AStarPlanner, find_path};
pub use preprocess::{RegionPreprocessor, widen};
pub use tour::{
    CacheMissPolicy, PlanOutput, PlannerSession, SessionConfig, TourPlanner, plan_tour,
};
