//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pathfinding::AStarConfig;
use crate::preprocess::CourtCorridorConfig;
use crate::tour::SessionConfig;

use super::error::ConfigLoadError;
use super::pathfinding::PathfindingSection;
use super::planner::PlannerSection;
use super::preprocess::PreprocessSection;

/// Full marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Planner session settings
    #[serde(default)]
    pub planner: PlannerSection,

    /// Pathfinding settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,

    /// Preprocessing settings
    #[serde(default)]
    pub preprocess: PreprocessSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to AStarConfig
    pub fn astar_config(&self) -> AStarConfig {
        AStarConfig::with_max_iterations(self.pathfinding.astar.max_iterations)
    }

    /// Court corridor settings, if the refinement is enabled
    pub fn court_config(&self) -> Option<CourtCorridorConfig> {
        self.preprocess
            .court
            .enabled
            .then(|| self.preprocess.court.corridor.clone())
    }

    /// Convert to SessionConfig for PlannerSession
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            start_search_radius: self.planner.start_search_radius,
            cache_miss: self.planner.cache_miss,
            astar: self.astar_config(),
            court: self.court_config(),
        }
    }
}
