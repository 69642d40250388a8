//! Preprocessing configuration section.

use serde::{Deserialize, Serialize};

use crate::preprocess::CourtCorridorConfig;

/// Preprocessing settings section
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PreprocessSection {
    /// Court corridor refinement
    #[serde(default)]
    pub court: CourtSettings,
}

/// Court corridor refinement settings
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CourtSettings {
    /// Apply the refinement (off unless the map is court-shaped)
    #[serde(default)]
    pub enabled: bool,

    /// Corridor geometry
    #[serde(flatten)]
    pub corridor: CourtCorridorConfig,
}
