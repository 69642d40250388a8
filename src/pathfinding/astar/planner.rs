//! A* planner implementation.

use crate::core::GridCell;
use crate::grid::TraversabilityGrid;
use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::types::{AStarConfig, AStarNode, PathFailure, PathResult};

/// A* pathfinder over a 4-connected, unit-cost grid
pub struct AStarPlanner<'a, G: TraversabilityGrid + ?Sized> {
    grid: &'a G,
    config: AStarConfig,
}

impl<'a, G: TraversabilityGrid + ?Sized> AStarPlanner<'a, G> {
    /// Create a new A* planner
    pub fn new(grid: &'a G, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a G) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// The grid this planner searches
    pub fn grid(&self) -> &'a G {
        self.grid
    }

    /// Find a path from start to goal
    pub fn find_path(&self, start: GridCell, goal: GridCell) -> PathResult {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.row, start.col, goal.row, goal.col
        );

        // Check bounds
        if !self.grid.contains(start) || !self.grid.contains(goal) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }

        if !self.grid.is_free(start) {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.row, start.col);
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if !self.grid.is_free(goal) {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.row, goal.col);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        // A* search
        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<GridCell, GridCell> = HashMap::new();
        let mut g_scores: HashMap<GridCell, u32> = HashMap::new();
        let mut seq: u64 = 0;

        open_set.push(AStarNode {
            cell: start,
            g_cost: 0,
            f_cost: start.manhattan_distance(&goal),
            seq,
        });
        g_scores.insert(start, 0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            if closed_set.contains(&current.cell) {
                continue;
            }

            nodes_expanded += 1;
            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            // Goal reached
            if current.cell == goal {
                return self.reconstruct_path(&came_from, goal, current.g_cost, nodes_expanded);
            }

            closed_set.insert(current.cell);

            for neighbor in current.cell.neighbors_4() {
                if closed_set.contains(&neighbor) || !self.grid.is_free(neighbor) {
                    continue;
                }

                let tentative_g = current.g_cost + 1;
                let neighbor_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
                if tentative_g < neighbor_g {
                    came_from.insert(neighbor, current.cell);
                    g_scores.insert(neighbor, tentative_g);

                    seq += 1;
                    open_set.push(AStarNode {
                        cell: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g + neighbor.manhattan_distance(&goal),
                        seq,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Reconstruct the path from came_from map
    fn reconstruct_path(
        &self,
        came_from: &HashMap<GridCell, GridCell>,
        goal: GridCell,
        cost: u32,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path = Vec::with_capacity(cost as usize + 1);
        let mut current = goal;

        while let Some(&prev) = came_from.get(&current) {
            path.push(current);
            current = prev;
        }
        path.push(current); // Add start
        path.reverse();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={}, nodes_expanded={}",
            path.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            path,
            cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
