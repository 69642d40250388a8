//! Region widening: make declared service regions traversable.

use log::debug;

use crate::coverage::Region;
use crate::grid::{TraversabilityGrid, TraversabilityMatrix};

use super::court::{CourtCorridor, CourtCorridorConfig};

/// Builds the planning grid from the raw map and the declared regions.
///
/// Regions hold the matter the robot has to clear, so the raw map reports
/// them as blocked. The preprocessor copies the map into a
/// [`TraversabilityMatrix`] and forces every in-bounds region cell free.
/// An optional [`CourtCorridor`] runs first to open court-shaped maps.
#[derive(Clone, Debug, Default)]
pub struct RegionPreprocessor {
    court: Option<CourtCorridor>,
}

impl RegionPreprocessor {
    /// Preprocessor applying only the base region rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Preprocessor that also opens a court corridor
    pub fn with_court(config: CourtCorridorConfig) -> Self {
        Self {
            court: Some(CourtCorridor::new(config)),
        }
    }

    /// Is the court refinement enabled?
    pub fn has_court(&self) -> bool {
        self.court.is_some()
    }

    /// Produce the widened planning grid. The source grid is not modified.
    pub fn widen<G: TraversabilityGrid + ?Sized>(
        &self,
        grid: &G,
        regions: &[Region],
    ) -> TraversabilityMatrix {
        let mut matrix = TraversabilityMatrix::from_grid(grid);

        let court_changed = self
            .court
            .as_ref()
            .map_or(0, |court| court.apply(&mut matrix, regions));

        let mut region_changed = 0;
        for region in regions {
            for cell in region.cells() {
                if matrix.set_free(cell) {
                    region_changed += 1;
                }
            }
        }

        debug!(
            "[Preprocess] {} regions: {} court cells + {} region cells opened",
            regions.len(),
            court_changed,
            region_changed
        );
        matrix
    }
}

/// Widen with the base rule only
pub fn widen<G: TraversabilityGrid + ?Sized>(grid: &G, regions: &[Region]) -> TraversabilityMatrix {
    RegionPreprocessor::new().widen(grid, regions)
}
