//! Greedy nearest-region tour planning.

use log::{debug, info, trace};

use crate::core::{GridCell, Route};
use crate::coverage::{Region, cover};
use crate::grid::TraversabilityGrid;
use crate::pathfinding::{AStarConfig, AStarPlanner};

/// The region picked as the next tour stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionChoice {
    /// Index of the region in the slice it was chosen from
    pub index: usize,
    /// The region itself
    pub region: Region,
    /// Corner the robot enters through
    pub entry: GridCell,
    /// Shortest path from the current position to `entry`
    pub path: Route,
}

/// Bookkeeping for one planned tour
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TourStats {
    /// Regions swept
    pub regions_covered: usize,
    /// Regions dropped because no corner was reachable
    pub regions_skipped: usize,
    /// A* searches actually run
    pub astar_queries: usize,
    /// Cells in the final route
    pub route_length: usize,
}

/// A planned tour: the concatenated route plus the visit order.
#[derive(Clone, Debug, Default)]
pub struct TourPlan {
    /// Travel and sweep cells, in order
    pub route: Route,
    /// Regions in the order they are swept
    pub visit_order: Vec<Region>,
    /// Planning statistics
    pub stats: TourStats,
}

/// Orders regions greedily by nearest reachable corner and sweeps each one.
///
/// This is repeated nearest-neighbor selection, not an optimal tour. Each
/// step runs A* from the current position to every corner of every remaining
/// region, so cost grows with regions x corners x grid cells.
pub struct TourPlanner<'a, G: TraversabilityGrid + ?Sized> {
    astar: AStarPlanner<'a, G>,
}

impl<'a, G: TraversabilityGrid + ?Sized> TourPlanner<'a, G> {
    /// Create a tour planner over an already widened grid
    pub fn new(grid: &'a G, config: AStarConfig) -> Self {
        Self {
            astar: AStarPlanner::new(grid, config),
        }
    }

    /// Create with default A* configuration
    pub fn with_defaults(grid: &'a G) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// Pick the (region, corner) pair with the shortest path from `from`.
    ///
    /// Regions are tried in slice order and corners in
    /// [`Region::corners`] order; only a strictly shorter path replaces the
    /// current best. Returns `None` if no corner is reachable.
    pub fn nearest_region(&self, from: GridCell, regions: &[Region]) -> Option<RegionChoice> {
        self.nearest_region_counted(from, regions, &mut 0)
    }

    fn nearest_region_counted(
        &self,
        from: GridCell,
        regions: &[Region],
        queries: &mut usize,
    ) -> Option<RegionChoice> {
        let mut best: Option<RegionChoice> = None;

        for (index, region) in regions.iter().enumerate() {
            for entry in region.corners() {
                if let Some(b) = &best {
                    // A path can never be shorter than its Manhattan bound
                    let lower_bound = from.manhattan_distance(&entry) as usize + 1;
                    if lower_bound >= b.path.len() {
                        continue;
                    }
                }

                *queries += 1;
                let result = self.astar.find_path(from, entry);
                if !result.success {
                    continue;
                }

                let better = best.as_ref().is_none_or(|b| result.path.len() < b.path.len());
                if better {
                    best = Some(RegionChoice {
                        index,
                        region: *region,
                        entry,
                        path: result.path,
                    });
                }
            }
        }

        if let Some(b) = &best {
            trace!(
                "[Tour] nearest from ({},{}): region #{} via ({},{}), {} cells",
                from.row,
                from.col,
                b.index,
                b.entry.row,
                b.entry.col,
                b.path.len()
            );
        }
        best
    }

    /// Plan a tour from `start` over all reachable regions.
    ///
    /// Unreachable regions are dropped. If no region can be reached the
    /// route is empty.
    pub fn plan(&self, start: GridCell, regions: &[Region]) -> TourPlan {
        let mut remaining: Vec<Region> = regions.to_vec();
        let mut route: Route = vec![start];
        let mut visit_order = Vec::with_capacity(regions.len());
        let mut stats = TourStats::default();
        let mut current = start;

        info!(
            "[Tour] planning from ({},{}) over {} regions",
            start.row,
            start.col,
            regions.len()
        );

        while !remaining.is_empty() {
            let Some(choice) =
                self.nearest_region_counted(current, &remaining, &mut stats.astar_queries)
            else {
                break;
            };

            append_segment(&mut route, &choice.path);

            let sweep = cover(&choice.region, choice.entry);
            append_segment(&mut route, &sweep);
            if let Some(&last) = sweep.last() {
                current = last;
            }

            remaining.remove(choice.index);
            visit_order.push(choice.region);
            stats.regions_covered += 1;

            debug!(
                "[Tour] region #{} ({},{})-({},{}) {}x{} swept, {} remaining",
                stats.regions_covered,
                choice.region.top(),
                choice.region.left(),
                choice.region.bottom(),
                choice.region.right(),
                choice.region.height(),
                choice.region.width(),
                remaining.len()
            );
        }

        stats.regions_skipped = remaining.len();
        if stats.regions_skipped > 0 {
            info!(
                "[Tour] {} regions unreachable from ({},{}), skipped",
                stats.regions_skipped, current.row, current.col
            );
        }

        if stats.regions_covered == 0 {
            route.clear();
        }
        stats.route_length = route.len();

        info!(
            "[Tour] route: {} cells, {} regions, {} A* queries",
            stats.route_length, stats.regions_covered, stats.astar_queries
        );

        TourPlan {
            route,
            visit_order,
            stats,
        }
    }
}

/// Append `segment`, dropping its first cell if it repeats the route's last
fn append_segment(route: &mut Route, segment: &[GridCell]) {
    match (route.last(), segment.first()) {
        (Some(last), Some(first)) if last == first => route.extend_from_slice(&segment[1..]),
        _ => route.extend_from_slice(segment),
    }
}

/// Plan a tour with default settings over an already widened grid
pub fn plan_tour<G: TraversabilityGrid + ?Sized>(
    grid: &G,
    start: GridCell,
    regions: &[Region],
) -> Route {
    TourPlanner::with_defaults(grid).plan(start, regions).route
}
