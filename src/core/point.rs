//! Grid cell and rectangle types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid cell coordinates (row, column).
///
/// Signed so that neighbor arithmetic at the grid edge stays representable;
/// bounds are enforced by the grid, not by this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell {
    /// Row index (grows downward)
    pub row: i32,
    /// Column index (grows rightward)
    pub col: i32,
}

impl GridCell {
    /// Create a new grid cell
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Get the 4 cardinal neighbors (up, down, left, right)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCell; 4] {
        [
            GridCell::new(self.row - 1, self.col), // Up
            GridCell::new(self.row + 1, self.col), // Down
            GridCell::new(self.row, self.col - 1), // Left
            GridCell::new(self.row, self.col + 1), // Right
        ]
    }

    /// True if `other` differs by exactly one unit in exactly one axis
    #[inline]
    pub fn is_adjacent_4(&self, other: &GridCell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for GridCell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        GridCell::new(row, col)
    }
}

impl Add for GridCell {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCell::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCell {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCell::new(self.row - other.row, self.col - other.col)
    }
}

/// Axis-aligned physical rectangle of one grid cell.
///
/// Units are whatever the simulator or controller uses (pixels, meters).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point `(x, y)` of the rectangle
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
