//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Pathfinding settings section
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PathfindingSection {
    /// A* algorithm settings
    #[serde(default)]
    pub astar: AStarSettings,
}

/// A* algorithm settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarSettings {
    /// Maximum nodes to expand per search
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for AStarSettings {
    fn default() -> Self {
        Self {
            max_iterations: defaults::max_iterations(),
        }
    }
}
