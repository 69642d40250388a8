//! Route to pose conversion.

use log::{debug, trace};

use crate::core::{GridCell, Heading, Pose};

use super::geometry::CellGeometry;

/// Poses handed to the motion controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionPlan {
    /// Where the robot starts, facing the neutral heading.
    /// `None` when no route cell could be placed.
    pub initial_pose: Option<Pose>,
    /// One pose per placed route cell, in route order
    pub poses: Vec<Pose>,
}

impl MotionPlan {
    /// Number of poses
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// True when there is nothing to drive
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Straight-line length through all poses
    pub fn path_length(&self) -> f32 {
        self.poses.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

/// Turns a cell route into controller poses using a cell geometry.
///
/// Each pose sits at the center of its cell's rectangle. Its heading comes
/// from the step between the previous route cell and this one; the first
/// emitted pose always faces [`Heading::North`]. Cells outside the geometry
/// are skipped, but still count as the previous cell for the next heading.
pub struct MotionConverter<'a, C: CellGeometry + ?Sized> {
    geometry: &'a C,
}

impl<'a, C: CellGeometry + ?Sized> MotionConverter<'a, C> {
    /// Create a converter over `geometry`
    pub fn new(geometry: &'a C) -> Self {
        Self { geometry }
    }

    /// Convert `route` to poses
    pub fn convert(&self, route: &[GridCell]) -> MotionPlan {
        let mut initial_pose = None;
        let mut poses = Vec::with_capacity(route.len());
        let mut skipped = 0usize;

        for (i, &cell) in route.iter().enumerate() {
            let Some(rect) = self.geometry.cell_rect(cell) else {
                trace!("[Motion] ({},{}) outside geometry, skipped", cell.row, cell.col);
                skipped += 1;
                continue;
            };
            let (x, y) = rect.center();

            let heading = if poses.is_empty() {
                Heading::default()
            } else {
                Heading::from_step(route[i - 1], cell)
            };

            if initial_pose.is_none() {
                initial_pose = Some(Pose::with_heading(x, y, Heading::default()));
            }
            poses.push(Pose::with_heading(x, y, heading));
        }

        debug!(
            "[Motion] {} route cells -> {} poses ({} skipped)",
            route.len(),
            poses.len(),
            skipped
        );

        MotionPlan {
            initial_pose,
            poses,
        }
    }
}

/// Convert `route` to poses with `geometry`
pub fn to_poses<C: CellGeometry + ?Sized>(route: &[GridCell], geometry: &C) -> MotionPlan {
    MotionConverter::new(geometry).convert(route)
}
