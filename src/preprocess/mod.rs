//! Planning-grid preprocessing.
//!
//! - [`RegionPreprocessor`]: copies the raw map and forces region cells free
//! - [`CourtCorridor`]: optional court-map refinement that opens a bypass
//!   around a central barrier

mod court;
mod widen;

pub use court::{CourtCorridor, CourtCorridorConfig, CourtLayout};
pub use widen::{RegionPreprocessor, widen};
