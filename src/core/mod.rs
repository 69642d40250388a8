//! Core types for the marga coverage planner.
//!
//! This module provides the fundamental value types used throughout the crate:
//! - [`GridCell`] and [`Rect`]: Cell coordinates and their physical footprint
//! - [`CellState`]: Semantic state of a map cell
//! - [`Pose`] and [`Heading`]: Controller-facing poses

mod cell;
mod point;
mod pose;

pub use cell::CellState;
pub use point::{GridCell, Rect};
pub use pose::{Heading, Pose};

/// Ordered sequence of cells the robot should visit.
///
/// Consecutive cells are 4-adjacent in every route the planner produces.
pub type Route = Vec<GridCell>;
