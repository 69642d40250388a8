//! Cell states for the service-area grid.
//!
//! The map collaborator reports richer states than the planner needs.
//! Everything is collapsed to a single traversability predicate before
//! any path search runs.

use serde::{Deserialize, Serialize};

/// Semantic cell state as reported by the map owner.
///
/// - `Free` - Open floor the robot may drive over
/// - `Serviced` - Area that has already been cleared
/// - `Debris` - Target matter (snow, dirt) that still needs clearing
/// - `Line` - Painted marking or boundary the raw map treats as solid
/// - `Obstacle` - Solid obstacle (posts, nets, walls)
/// - `Robot` - Cell currently occupied by the robot marker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Open floor
    #[default]
    Free = 0,

    /// Already cleared floor
    Serviced = 1,

    /// Debris still to be cleared
    /// - Not traversable in the raw map
    /// - Made traversable for declared regions by the preprocessor
    Debris = 2,

    /// Painted line or court boundary
    Line = 3,

    /// Solid obstacle
    Obstacle = 4,

    /// Robot marker
    Robot = 5,
}

impl CellState {
    /// Can the robot traverse this cell in the raw map?
    #[inline]
    pub fn is_traversable(self) -> bool {
        matches!(self, CellState::Free | CellState::Serviced)
    }

    /// Does this cell still need servicing?
    #[inline]
    pub fn needs_service(self) -> bool {
        self == CellState::Debris
    }

    /// Convert from u8 (unknown codes read as `Obstacle`)
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => CellState::Free,
            1 => CellState::Serviced,
            2 => CellState::Debris,
            3 => CellState::Line,
            4 => CellState::Obstacle,
            5 => CellState::Robot,
            _ => CellState::Obstacle,
        }
    }

    /// Single character representation for fixtures and debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Serviced => ',',
            CellState::Debris => '*',
            CellState::Line => '-',
            CellState::Obstacle => '#',
            CellState::Robot => 'R',
        }
    }

    /// Parse the character produced by [`CellState::as_char`]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellState::Free),
            ',' => Some(CellState::Serviced),
            '*' => Some(CellState::Debris),
            '-' => Some(CellState::Line),
            '#' => Some(CellState::Obstacle),
            'R' => Some(CellState::Robot),
            _ => None,
        }
    }
}
