//! Planner session configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::tour::CacheMissPolicy;

/// Session-level planner settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Manhattan radius searched when the start cell is blocked
    #[serde(default = "defaults::start_search_radius")]
    pub start_search_radius: u32,

    /// What a query returns when the robot is off the memoized route
    #[serde(default = "defaults::cache_miss")]
    pub cache_miss: CacheMissPolicy,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            start_search_radius: defaults::start_search_radius(),
            cache_miss: defaults::cache_miss(),
        }
    }
}
