//! Conversion of cell routes into controller poses.
//!
//! The planner works in cells; the controller drives physical poses. A
//! [`CellGeometry`] supplied by the map owner bridges the two.

mod converter;
mod geometry;

pub use converter::{MotionConverter, MotionPlan, to_poses};
pub use geometry::{CellGeometry, UniformGeometry};
