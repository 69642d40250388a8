//! Pose and heading types for the motion controller.
//!
//! Headings use the screen convention of the map owner: rows grow downward,
//! so a step to a larger row index points "down" (3π/2) and a step to a
//! smaller row index points "up" (π/2).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::f32::consts::{FRAC_PI_2, PI};

use super::point::GridCell;

/// One of the four cardinal headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    /// Toward larger column indices (0 rad)
    East,
    /// Toward smaller row indices (π/2 rad). Also the neutral default.
    #[default]
    North,
    /// Toward smaller column indices (π rad)
    West,
    /// Toward larger row indices (3π/2 rad)
    South,
}

impl Heading {
    /// Heading angle in radians, in `[0, 2π)`
    #[inline]
    pub fn radians(self) -> f32 {
        match self {
            Heading::East => 0.0,
            Heading::North => FRAC_PI_2,
            Heading::West => PI,
            Heading::South => 3.0 * FRAC_PI_2,
        }
    }

    /// Heading of the step `prev -> curr`.
    ///
    /// Zero and diagonal steps fall back to the neutral heading.
    pub fn from_step(prev: GridCell, curr: GridCell) -> Self {
        let dr = curr.row.cmp(&prev.row);
        let dc = curr.col.cmp(&prev.col);

        match (dr, dc) {
            (Ordering::Greater, Ordering::Equal) => Heading::South,
            (Ordering::Less, Ordering::Equal) => Heading::North,
            (Ordering::Equal, Ordering::Greater) => Heading::East,
            (Ordering::Equal, Ordering::Less) => Heading::West,
            _ => Heading::default(),
        }
    }
}

/// A physical pose: position plus heading angle.
///
/// Unlike a general SE(2) pose the angle is not normalized, so the four
/// cardinal headings keep their `[0, 2π)` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// X position (controller units)
    pub x: f32,
    /// Y position (controller units)
    pub y: f32,
    /// Heading angle in radians
    pub theta: f32,
}

impl Pose {
    /// Create a new pose
    #[inline]
    pub const fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Create a pose facing a cardinal heading
    #[inline]
    pub fn with_heading(x: f32, y: f32, heading: Heading) -> Self {
        Self::new(x, y, heading.radians())
    }

    /// Euclidean distance between the positions of two poses
    #[inline]
    pub fn distance(&self, other: &Pose) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
