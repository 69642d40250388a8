//! Grid representations consumed by the planner.
//!
//! - [`TraversabilityGrid`]: the read-only interface every map owner exposes
//! - [`OccupancyGrid`]: raw semantic states (free, debris, lines, ...)
//! - [`TraversabilityMatrix`]: binary snapshot the planner searches and widens
//! - [`nearest_free`]: ring search used to rescue a blocked start cell

mod matrix;
mod search;
mod storage;

pub use matrix::TraversabilityMatrix;
pub use search::nearest_free;
pub use storage::{GridParseError, OccupancyGrid, TraversabilityGrid};
