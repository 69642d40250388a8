//! Multi-region tour planning.
//!
//! - [`TourPlanner`]: greedy nearest-corner ordering plus per-region sweeps
//! - [`PlannerSession`]: one mission's memoized route, sliced on later queries

mod planner;
mod session;

pub use planner::{RegionChoice, TourPlan, TourPlanner, TourStats, plan_tour};
pub use session::{CacheMissPolicy, PlanOutput, PlannerSession, RouteSource, SessionConfig};
