use tracing::{debug, trace, warn};

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::angle::ang_dist;

/// Angular gap below which an obstacle edge and a robot edge count as parallel.
const PARALLEL_EPS: f64 = 1e-9;

/// Expands an obstacle into configuration space for a polygonal robot.
///
/// The result is the Minkowski sum of the obstacle with the robot reflected
/// through its reference point: the set of reference-point positions at
/// which the robot overlaps the obstacle.
///
/// # Algorithm
///
/// Both polygons must be convex and clockwise. Their edge sequences are
/// already sorted by direction, so the output boundary is the angular merge
/// of the obstacle's edges with the robot's reversed edges:
///
/// 1. Take the obstacle's edge 0 as the starting direction.
/// 2. Pick the robot edge whose reversed direction is angularly closest to
///    it (going clockwise), and place the robot so that the vertex starting
///    that edge touches obstacle vertex 0. The reference point there is the
///    first output vertex.
/// 3. Repeatedly append the edge (obstacle edge, or reversed robot edge)
///    with the smaller angular distance from the starting direction, then
///    drain whichever list is left.
/// 4. Drop the final vertex, which closes the loop onto the first.
///
/// The output has `N_obstacle + N_robot` vertices unless collinear merging
/// is enabled with [`ExpandCSpace::with_collinear_merge`].
#[derive(Debug)]
pub struct ExpandCSpace<'a> {
    obstacle: &'a Polygon,
    robot: &'a Polygon,
    merge_collinear: bool,
}

impl<'a> ExpandCSpace<'a> {
    /// Creates a new expansion of `obstacle` by `robot`.
    #[must_use]
    pub fn new(obstacle: &'a Polygon, robot: &'a Polygon) -> Self {
        Self {
            obstacle,
            robot,
            merge_collinear: false,
        }
    }

    /// Merges consecutive collinear output edges when set.
    #[must_use]
    pub fn with_collinear_merge(mut self, merge: bool) -> Self {
        self.merge_collinear = merge;
        self
    }

    /// Executes the expansion, returning the C-space obstacle.
    ///
    /// Non-convex inputs are not detected and yield an ill-formed polygon.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if either polygon winds counter-clockwise
    /// - `GeometryError::InvalidPolygon` if collinear merging leaves fewer than
    ///   3 vertices
    pub fn execute(&self) -> Result<Polygon> {
        for (name, poly) in [("obstacle", self.obstacle), ("robot", self.robot)] {
            if poly.signed_area() > 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "{name} polygon must be clockwise"
                ))
                .into());
            }
        }

        let obstacle = self.obstacle;
        let reflected = self.robot.negate();
        let obstacle_size = obstacle.len();
        let robot_size = reflected.len();
        let starting_angle = obstacle.angles()[0];

        let mut robot_start = 0;
        let mut min_dist = f64::INFINITY;
        for (i, &angle) in reflected.angles().iter().enumerate() {
            let dist = ang_dist(angle, starting_angle);
            if dist < min_dist {
                min_dist = dist;
                robot_start = i;
            }
        }

        // The reflected robot's vertex `j` sits at `center - robot[j]`, which is
        // where the reference point lands when robot vertex `j` touches obstacle
        // vertex 0.
        let mut curr = obstacle.seed_point(self.robot, 0, robot_start)?;
        let mut expansion = Vec::with_capacity(obstacle_size + robot_size + 1);
        expansion.push(curr);

        let mut obstacle_idx = 0;
        let mut robot_idx = robot_start;
        let mut robot_num = 0;
        let mut parallel_pairs = 0;

        while obstacle_idx < obstacle_size && robot_num < robot_size {
            let obstacle_diff = ang_dist(obstacle.angles()[obstacle_idx], starting_angle);
            let robot_diff = ang_dist(reflected.angles()[robot_idx], starting_angle);
            if (obstacle_diff - robot_diff).abs() < PARALLEL_EPS {
                parallel_pairs += 1;
            }

            if obstacle_diff < robot_diff {
                curr += obstacle.edge(obstacle_idx);
                trace!(obstacle_idx, x = curr.x, y = curr.y, "merged obstacle edge");
                obstacle_idx += 1;
            } else {
                curr += reflected.edge(robot_idx);
                trace!(robot_idx, x = curr.x, y = curr.y, "merged robot edge");
                robot_num += 1;
                robot_idx = (robot_idx + 1) % robot_size;
            }
            expansion.push(curr);
        }

        while obstacle_idx < obstacle_size {
            curr += obstacle.edge(obstacle_idx);
            expansion.push(curr);
            obstacle_idx += 1;
        }

        while robot_num < robot_size {
            curr += reflected.edge(robot_idx);
            expansion.push(curr);
            robot_num += 1;
            robot_idx = (robot_idx + 1) % robot_size;
        }

        // The walk ends back on the first vertex.
        expansion.pop();

        if parallel_pairs > 0 {
            warn!(
                parallel_pairs,
                "obstacle and robot share edge directions; c-space has collinear edges"
            );
        }

        let cspace = Polygon::new(expansion, None)?;
        let cspace = if self.merge_collinear {
            cspace.merge_collinear()?
        } else {
            cspace
        };
        debug!(
            obstacle = obstacle_size,
            robot = robot_size,
            cspace = cspace.len(),
            "expanded obstacle into c-space"
        );
        Ok(cspace)
    }
}
