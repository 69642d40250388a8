//! Per-mission planner session with a memoized route.
//!
//! A controller may poll the planner every tick. The first query plans the
//! whole tour; later queries slice the memoized route from the robot's
//! current cell so the remaining work is returned without replanning.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::core::{GridCell, Route};
use crate::coverage::Region;
use crate::grid::{TraversabilityGrid, nearest_free};
use crate::pathfinding::AStarConfig;
use crate::preprocess::{CourtCorridorConfig, RegionPreprocessor};

use super::planner::{TourPlanner, TourStats};

/// What a query does when the queried cell is not on the memoized route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMissPolicy {
    /// Hand back the whole memoized route
    #[default]
    #[serde(rename = "full_route")]
    ReturnFullRoute,
    /// Plan a fresh tour from the queried cell. The memo is kept as is.
    Replan,
}

/// Where a query's route came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteSource {
    /// First query: full tour planned and memoized
    Planned,
    /// Suffix of the memoized route starting at the queried cell
    CachedSuffix,
    /// Queried cell not on the route, full memoized route returned
    CachedFull,
    /// Queried cell not on the route, fresh tour planned
    Replanned,
}

/// Result of one session query
#[derive(Clone, Debug)]
pub struct PlanOutput {
    /// Cells still to visit
    pub route: Route,
    /// Wall-clock time spent in the query
    pub elapsed: Duration,
    /// How the route was obtained
    pub source: RouteSource,
}

/// Session settings
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Manhattan radius searched for a free cell when the start is blocked
    pub start_search_radius: u32,
    /// Behavior when the queried cell is missing from the memoized route
    pub cache_miss: CacheMissPolicy,
    /// A* settings used for every inter-region search
    pub astar: AStarConfig,
    /// Court corridor refinement, if the map is court-shaped
    pub court: Option<CourtCorridorConfig>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_search_radius: defaults::start_search_radius(),
            cache_miss: defaults::cache_miss(),
            astar: AStarConfig::default(),
            court: None,
        }
    }
}

/// Planning state for one mission.
///
/// Holds the region list captured at creation, the memoized route and
/// whether it has been generated. Once generated the memo is never
/// recomputed, even if the grid passed to later queries changes.
///
/// Not synchronized: wrap it in a lock if several threads must query it.
#[derive(Clone, Debug)]
pub struct PlannerSession {
    regions: Vec<Region>,
    config: SessionConfig,
    cached_route: Route,
    generated: bool,
    stats: TourStats,
}

impl PlannerSession {
    /// Start a session over `regions` with default settings
    pub fn new(regions: Vec<Region>) -> Self {
        Self::with_config(regions, SessionConfig::default())
    }

    /// Start a session with custom settings
    pub fn with_config(regions: Vec<Region>, config: SessionConfig) -> Self {
        Self {
            regions,
            config,
            cached_route: Vec::new(),
            generated: false,
            stats: TourStats::default(),
        }
    }

    /// Regions captured for this mission
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Settings in use
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Has the route been planned yet?
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// The memoized route (empty before the first query)
    pub fn cached_route(&self) -> &[GridCell] {
        &self.cached_route
    }

    /// Statistics of the memoized plan
    pub fn stats(&self) -> &TourStats {
        &self.stats
    }

    /// Route the robot should follow from `start`.
    ///
    /// The first call plans and memoizes. Later calls return the memoized
    /// route from the first occurrence of `start`; if `start` is not on it,
    /// the configured [`CacheMissPolicy`] applies.
    pub fn query<G: TraversabilityGrid + ?Sized>(&mut self, grid: &G, start: GridCell) -> PlanOutput {
        let t0 = Instant::now();

        if !self.generated {
            let (route, stats) = self.plan_from(grid, start);
            self.cached_route = route.clone();
            self.stats = stats;
            self.generated = true;
            info!(
                "[Session] planned {} cells over {} regions in {:?}",
                self.cached_route.len(),
                self.regions.len(),
                t0.elapsed()
            );
            return PlanOutput {
                route,
                elapsed: t0.elapsed(),
                source: RouteSource::Planned,
            };
        }

        if let Some(index) = self.cached_route.iter().position(|&c| c == start) {
            debug!(
                "[Session] ({},{}) at index {}, {} cells remaining",
                start.row,
                start.col,
                index,
                self.cached_route.len() - index
            );
            return PlanOutput {
                route: self.cached_route[index..].to_vec(),
                elapsed: t0.elapsed(),
                source: RouteSource::CachedSuffix,
            };
        }

        match self.config.cache_miss {
            CacheMissPolicy::ReturnFullRoute => {
                debug!(
                    "[Session] ({},{}) not on route, returning full route",
                    start.row, start.col
                );
                PlanOutput {
                    route: self.cached_route.clone(),
                    elapsed: t0.elapsed(),
                    source: RouteSource::CachedFull,
                }
            }
            CacheMissPolicy::Replan => {
                debug!(
                    "[Session] ({},{}) not on route, replanning",
                    start.row, start.col
                );
                let (route, _) = self.plan_from(grid, start);
                PlanOutput {
                    route,
                    elapsed: t0.elapsed(),
                    source: RouteSource::Replanned,
                }
            }
        }
    }

    fn plan_from<G: TraversabilityGrid + ?Sized>(&self, grid: &G, start: GridCell) -> (Route, TourStats) {
        let resolved = match nearest_free(grid, start, self.config.start_search_radius) {
            Some(cell) => {
                if cell != start {
                    info!(
                        "[Session] start ({},{}) blocked, using ({},{})",
                        start.row, start.col, cell.row, cell.col
                    );
                }
                cell
            }
            None => {
                warn!(
                    "[Session] no free cell within {} of ({},{}), keeping blocked start",
                    self.config.start_search_radius, start.row, start.col
                );
                start
            }
        };

        let preprocessor = match &self.config.court {
            Some(court) => RegionPreprocessor::with_court(court.clone()),
            None => RegionPreprocessor::new(),
        };
        let widened = preprocessor.widen(grid, &self.regions);

        let plan = TourPlanner::new(&widened, self.config.astar.clone()).plan(resolved, &self.regions);
        (plan.route, plan.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;
    use crate::grid::OccupancyGrid;

    fn region(r1: i32, c1: i32, r2: i32, c2: i32) -> Region {
        Region::new(GridCell::new(r1, c1), GridCell::new(r2, c2)).unwrap()
    }

    fn debris_grid() -> OccupancyGrid {
        OccupancyGrid::from_ascii(
            "
            ..........
            ..........
            ..***.....
            ..***.....
            ..***.....
            ..........
            ",
        )
        .unwrap()
    }

    #[test]
    fn test_first_query_plans_and_memoizes() {
        let grid = debris_grid();
        let mut session = PlannerSession::new(vec![region(2, 2, 4, 4)]);
        assert!(!session.is_generated());

        let out = session.query(&grid, GridCell::new(0, 0));

        assert_eq!(out.source, RouteSource::Planned);
        assert_eq!(out.route.len(), 13);
        assert!(session.is_generated());
        assert_eq!(session.cached_route(), out.route.as_slice());
        assert_eq!(session.stats().regions_covered, 1);
    }

    #[test]
    fn test_later_query_returns_suffix() {
        let grid = debris_grid();
        let mut session = PlannerSession::new(vec![region(2, 2, 4, 4)]);
        let full = session.query(&grid, GridCell::new(0, 0)).route;

        let at = full[6];
        let out = session.query(&grid, at);

        assert_eq!(out.source, RouteSource::CachedSuffix);
        assert_eq!(out.route, full[6..].to_vec());
    }

    #[test]
    fn test_suffix_uses_first_occurrence() {
        let grid = OccupancyGrid::new(8, 8);
        // Second region forces travel back past cells of the first sweep
        let mut session = PlannerSession::new(vec![region(0, 1, 1, 2), region(0, 4, 0, 4)]);
        let full = session.query(&grid, GridCell::new(0, 0)).route;

        for (i, &cell) in full.iter().enumerate() {
            let first = full.iter().position(|&c| c == cell).unwrap();
            let out = session.query(&grid, cell);
            assert_eq!(out.route, full[first..].to_vec(), "at index {i}");
        }
    }

    #[test]
    fn test_cache_miss_returns_full_route_by_default() {
        let grid = debris_grid();
        let mut session = PlannerSession::new(vec![region(2, 2, 4, 4)]);
        let full = session.query(&grid, GridCell::new(0, 0)).route;

        let out = session.query(&grid, GridCell::new(5, 9));
        assert_eq!(out.source, RouteSource::CachedFull);
        assert_eq!(out.route, full);
    }

    #[test]
    fn test_cache_miss_replan() {
        let grid = debris_grid();
        let config = SessionConfig {
            cache_miss: CacheMissPolicy::Replan,
            ..SessionConfig::default()
        };
        let mut session = PlannerSession::with_config(vec![region(2, 2, 4, 4)], config);
        assert_eq!(session.config().cache_miss, CacheMissPolicy::Replan);
        assert_eq!(session.config().start_search_radius, 20);
        let full = session.query(&grid, GridCell::new(0, 0)).route;

        let out = session.query(&grid, GridCell::new(5, 9));
        assert_eq!(out.source, RouteSource::Replanned);
        assert_eq!(out.route[0], GridCell::new(5, 9));
        // Nearest corner from (5,9) is (4,4): 7 travel cells + 9 sweep - 1
        assert_eq!(out.route.len(), 7 + 9 - 1);
        // Memo untouched
        assert_eq!(session.cached_route(), full.as_slice());
    }

    #[test]
    fn test_memo_not_recomputed_when_grid_changes() {
        let grid = debris_grid();
        let mut session = PlannerSession::new(vec![region(2, 2, 4, 4)]);
        let full = session.query(&grid, GridCell::new(0, 0)).route;

        let blocked = OccupancyGrid::filled(6, 10, CellState::Obstacle);
        let out = session.query(&blocked, GridCell::new(0, 0));
        assert_eq!(out.source, RouteSource::CachedSuffix);
        assert_eq!(out.route, full);
    }

    #[test]
    fn test_blocked_start_uses_nearest_free_cell() {
        let grid = OccupancyGrid::from_ascii(
            "
            R.........
            ..........
            ..***.....
            ..***.....
            ..***.....
            ",
        )
        .unwrap();
        let mut session = PlannerSession::new(vec![region(2, 2, 4, 4)]);

        let out = session.query(&grid, GridCell::new(0, 0));
        // Ring radius 1: (0,-1) is off the map, (0,1) is free
        assert_eq!(out.route[0], GridCell::new(0, 1));
        assert_eq!(out.route.len(), 4 + 9 - 1);
    }

    #[test]
    fn test_no_free_cell_keeps_blocked_start() {
        let grid = OccupancyGrid::filled(5, 5, CellState::Obstacle);
        let config = SessionConfig {
            start_search_radius: 2,
            ..SessionConfig::default()
        };
        let mut session = PlannerSession::with_config(vec![region(3, 3, 4, 4)], config);

        let out = session.query(&grid, GridCell::new(0, 0));
        assert!(out.route.is_empty());
        assert_eq!(session.stats().regions_skipped, 1);
    }

    #[test]
    fn test_no_regions() {
        let grid = OccupancyGrid::new(5, 5);
        let mut session = PlannerSession::new(Vec::new());

        let out = session.query(&grid, GridCell::new(0, 0));
        assert_eq!(out.source, RouteSource::Planned);
        assert!(out.route.is_empty());
        assert!(session.is_generated());

        let again = session.query(&grid, GridCell::new(0, 0));
        assert_eq!(again.source, RouteSource::CachedFull);
        assert!(again.route.is_empty());
    }

    #[test]
    fn test_policy_yaml_names() {
        let p: CacheMissPolicy = serde_yaml::from_str("replan").unwrap();
        assert_eq!(p, CacheMissPolicy::Replan);
        let p: CacheMissPolicy = serde_yaml::from_str("full_route").unwrap();
        assert_eq!(p, CacheMissPolicy::ReturnFullRoute);
    }
}
