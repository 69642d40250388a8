//! Grid storage for the raw service-area map.

use thiserror::Error;

use crate::core::{CellState, GridCell};

/// Read-only traversability view of a 2D grid.
///
/// Everything the planner consumes goes through this trait, so any map owner
/// (simulator, SLAM grid, test fixture) can be plugged in by exposing its
/// dimensions and a free-cell predicate.
pub trait TraversabilityGrid {
    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn cols(&self) -> usize;

    /// Is the cell free to drive over? Must be `false` out of bounds.
    fn is_free(&self, cell: GridCell) -> bool;

    /// Check if cell coordinates are within bounds
    #[inline]
    fn contains(&self, cell: GridCell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows()
            && (cell.col as usize) < self.cols()
    }
}

/// Errors from parsing an ASCII grid fixture.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// No non-blank lines in the input
    #[error("grid has no rows")]
    Empty,

    /// A row has a different width than the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// Unrecognized state character
    #[error("unknown cell character {ch:?} at ({row}, {col})")]
    UnknownChar {
        /// Row of the character
        row: usize,
        /// Column of the character
        col: usize,
        /// The character
        ch: char,
    },
}

/// Raw grid of semantic cell states, stored row-major as `u8`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    /// CellState as u8, row-major
    states: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl OccupancyGrid {
    /// Create a grid with every cell in the same state
    pub fn filled(rows: usize, cols: usize, state: CellState) -> Self {
        Self {
            states: vec![state as u8; rows * cols],
            rows,
            cols,
        }
    }

    /// Create an all-free grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, CellState::Free)
    }

    /// Parse a fixture where each line is a row and each character a cell.
    ///
    /// Blank lines and surrounding whitespace are ignored. See
    /// [`CellState::as_char`] for the alphabet.
    pub fn from_ascii(text: &str) -> Result<Self, GridParseError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let Some(first) = lines.first() else {
            return Err(GridParseError::Empty);
        };
        let cols = first.chars().count();
        let mut states = Vec::with_capacity(lines.len() * cols);

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let state =
                    CellState::from_char(ch).ok_or(GridParseError::UnknownChar { row, col, ch })?;
                states.push(state as u8);
            }
        }

        Ok(Self {
            states,
            rows: lines.len(),
            cols,
        })
    }

    /// Convert cell coordinates to flat array index
    #[inline]
    pub fn cell_to_index(&self, cell: GridCell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row as usize * self.cols + cell.col as usize)
        } else {
            None
        }
    }

    /// Get the state of a cell
    #[inline]
    pub fn get(&self, cell: GridCell) -> Option<CellState> {
        self.cell_to_index(cell)
            .map(|i| CellState::from_u8(self.states[i]))
    }

    /// Set the state of a cell. Returns false if out of bounds.
    #[inline]
    pub fn set(&mut self, cell: GridCell, state: CellState) -> bool {
        match self.cell_to_index(cell) {
            Some(i) => {
                self.states[i] = state as u8;
                true
            }
            None => false,
        }
    }

    /// Count cells in a given state
    pub fn count(&self, state: CellState) -> usize {
        let code = state as u8;
        self.states.iter().filter(|&&s| s == code).count()
    }

    /// Render the grid back to the fixture alphabet
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.states.chunks(self.cols.max(1)) {
            out.extend(row.iter().map(|&s| CellState::from_u8(s).as_char()));
            out.push('\n');
        }
        out
    }
}

impl TraversabilityGrid for OccupancyGrid {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn is_free(&self, cell: GridCell) -> bool {
        self.get(cell).is_some_and(CellState::is_traversable)
    }
}
