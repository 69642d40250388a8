//! Unified configuration loading for marga.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::config::MargaConfig;
//!
//! // Load from default path (configs/config.yaml), or built-in defaults
//! let config = MargaConfig::load_default()?;
//!
//! // Convert to runtime configs
//! let session_config = config.session_config();
//! # Ok::<(), marga::config::ConfigLoadError>(())
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`PlannerSection`] | Start-cell search radius, cache-miss policy |
//! | [`PathfindingSection`] | A* expansion budget |
//! | [`PreprocessSection`] | Court corridor refinement |
//!
//! ## Example YAML
//!
//! ```yaml
//! planner:
//!   start_search_radius: 20
//!   cache_miss: full_route   # or: replan
//! pathfinding:
//!   astar:
//!     max_iterations: 1000000
//! preprocess:
//!   court:
//!     enabled: true
//!     court_margin: 20
//! ```

pub(crate) mod defaults;
mod error;
mod marga;
mod pathfinding;
mod planner;
mod preprocess;

pub use error::ConfigLoadError;
pub use marga::MargaConfig;

pub use pathfinding::{AStarSettings, PathfindingSection};
pub use planner::PlannerSection;
pub use preprocess::{CourtSettings, PreprocessSection};
