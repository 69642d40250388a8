//! Rectangular service regions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GridCell;

/// Errors from constructing a region.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// The top-left corner lies below or right of the bottom-right corner
    #[error(
        "inverted region corners: top_left ({}, {}) is past bottom_right ({}, {})",
        .top_left.row, .top_left.col, .bottom_right.row, .bottom_right.col
    )]
    InvertedCorners {
        /// Declared top-left corner
        top_left: GridCell,
        /// Declared bottom-right corner
        bottom_right: GridCell,
    },
}

/// An axis-aligned bounding box of cells that must be fully traversed.
///
/// Invariant: `top_left.row <= bottom_right.row` and
/// `top_left.col <= bottom_right.col`. Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RegionCorners", into = "RegionCorners")]
pub struct Region {
    top_left: GridCell,
    bottom_right: GridCell,
}

/// Serialized form: the two corners as given by the perception step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RegionCorners {
    top_left: GridCell,
    bottom_right: GridCell,
}

impl TryFrom<RegionCorners> for Region {
    type Error = RegionError;

    fn try_from(c: RegionCorners) -> Result<Self, Self::Error> {
        Region::new(c.top_left, c.bottom_right)
    }
}

impl From<Region> for RegionCorners {
    fn from(r: Region) -> Self {
        Self {
            top_left: r.top_left,
            bottom_right: r.bottom_right,
        }
    }
}

impl TryFrom<(GridCell, GridCell)> for Region {
    type Error = RegionError;

    fn try_from((top_left, bottom_right): (GridCell, GridCell)) -> Result<Self, Self::Error> {
        Region::new(top_left, bottom_right)
    }
}

impl Region {
    /// Create a region, rejecting inverted corners
    pub fn new(top_left: GridCell, bottom_right: GridCell) -> Result<Self, RegionError> {
        if top_left.row > bottom_right.row || top_left.col > bottom_right.col {
            return Err(RegionError::InvertedCorners {
                top_left,
                bottom_right,
            });
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Create the smallest region containing both cells, in any order
    pub fn spanning(a: GridCell, b: GridCell) -> Self {
        Self {
            top_left: GridCell::new(a.row.min(b.row), a.col.min(b.col)),
            bottom_right: GridCell::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Top-left corner (inclusive)
    #[inline]
    pub fn top_left(&self) -> GridCell {
        self.top_left
    }

    /// Bottom-right corner (inclusive)
    #[inline]
    pub fn bottom_right(&self) -> GridCell {
        self.bottom_right
    }

    /// First row
    #[inline]
    pub fn top(&self) -> i32 {
        self.top_left.row
    }

    /// Last row
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bottom_right.row
    }

    /// First column
    #[inline]
    pub fn left(&self) -> i32 {
        self.top_left.col
    }

    /// Last column
    #[inline]
    pub fn right(&self) -> i32 {
        self.bottom_right.col
    }

    /// Width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.right().abs_diff(self.left()) as usize + 1
    }

    /// Height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.bottom().abs_diff(self.top()) as usize + 1
    }

    /// Number of cells in the box (saturating)
    #[inline]
    pub fn area(&self) -> usize {
        self.width().saturating_mul(self.height())
    }

    /// The four corner entry points: top-left, top-right, bottom-left,
    /// bottom-right. Degenerate regions repeat corners.
    pub fn corners(&self) -> [GridCell; 4] {
        [
            self.top_left,
            GridCell::new(self.top(), self.right()),
            GridCell::new(self.bottom(), self.left()),
            self.bottom_right,
        ]
    }

    /// Is the cell one of the four corners?
    pub fn is_corner(&self, cell: GridCell) -> bool {
        self.corners().contains(&cell)
    }

    /// Is the cell inside the box?
    #[inline]
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.row >= self.top()
            && cell.row <= self.bottom()
            && cell.col >= self.left()
            && cell.col <= self.right()
    }

    /// Iterate all cells row by row
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (self.top()..=self.bottom())
            .flat_map(move |r| (self.left()..=self.right()).map(move |c| GridCell::new(r, c)))
    }

    /// Smallest region containing every region in the slice
    pub fn union_of(regions: &[Region]) -> Option<Region> {
        let first = regions.first()?;
        Some(regions.iter().skip(1).fold(*first, |acc, r| Region {
            top_left: GridCell::new(acc.top().min(r.top()), acc.left().min(r.left())),
            bottom_right: GridCell::new(acc.bottom().max(r.bottom()), acc.right().max(r.right())),
        }))
    }
}
