use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;

use super::ExpandCSpace;

/// Expands an obstacle for every discretised robot heading.
///
/// Heading `k` rotates the robot about its reference point by
/// `2*pi*k / num_headings` before expanding, matching a lattice planner that
/// keeps one obstacle set per heading.
#[derive(Debug)]
pub struct ExpandAllHeadings<'a> {
    obstacle: &'a Polygon,
    robot: &'a Polygon,
    num_headings: u32,
    merge_collinear: bool,
}

impl<'a> ExpandAllHeadings<'a> {
    /// Creates a new per-heading expansion.
    #[must_use]
    pub fn new(obstacle: &'a Polygon, robot: &'a Polygon, num_headings: u32) -> Self {
        Self {
            obstacle,
            robot,
            num_headings,
            merge_collinear: false,
        }
    }

    /// Merges consecutive collinear output edges when set.
    #[must_use]
    pub fn with_collinear_merge(mut self, merge: bool) -> Self {
        self.merge_collinear = merge;
        self
    }

    /// Executes the expansions; element `k` belongs to heading `k`.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if `num_headings` is zero
    /// - any error from [`ExpandCSpace::execute`]
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        if self.num_headings == 0 {
            return Err(
                OperationError::InvalidInput("at least one heading is required".to_owned()).into(),
            );
        }

        let step = TAU / f64::from(self.num_headings);
        let expansions = (0..self.num_headings)
            .map(|k| {
                let rotated = self.robot.rotate(step * f64::from(k));
                ExpandCSpace::new(self.obstacle, &rotated)
                    .with_collinear_merge(self.merge_collinear)
                    .execute()
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(headings = self.num_headings, "expanded obstacle for all headings");
        Ok(expansions)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn obstacle() -> Polygon {
        Polygon::from_xy(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)], None).unwrap()
    }

    fn robot() -> Polygon {
        Polygon::from_xy(&[(-2.0, 1.0), (2.0, 1.0), (2.0, -1.0), (-2.0, -1.0)], Some((0.0, 0.0)))
            .unwrap()
    }

    #[test]
    fn one_expansion_per_heading() {
        let obstacle = obstacle();
        let robot = robot();
        let all = ExpandAllHeadings::new(&obstacle, &robot, 8).execute().unwrap();
        assert_eq!(all.len(), 8);
        for cspace in &all {
            assert_eq!(cspace.len(), 8);
            assert!(cspace.is_clockwise());
        }
    }

    #[test]
    fn heading_zero_matches_plain_expansion() {
        let obstacle = obstacle();
        let robot = robot();
        let all = ExpandAllHeadings::new(&obstacle, &robot, 4).execute().unwrap();
        let plain = ExpandCSpace::new(&obstacle, &robot).execute().unwrap();
        for (a, b) in all[0].vertices().iter().zip(plain.vertices()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let obstacle = obstacle();
        let robot = robot();
        let all = ExpandAllHeadings::new(&obstacle, &robot, 4)
            .with_collinear_merge(true)
            .execute()
            .unwrap();
        let width = |p: &Polygon| {
            let xs = p.vertices().iter().map(|v| v.x);
            xs.clone().fold(f64::MIN, f64::max) - xs.fold(f64::MAX, f64::min)
        };
        // Robot is 4 wide and 2 tall; rotated by pi/2 it is 2 wide.
        assert_abs_diff_eq!(width(&all[0]), 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(width(&all[1]), 6.0, epsilon = 1e-9);
        assert_eq!(all[1].len(), 4);
    }

    #[test]
    fn zero_headings_is_an_error() {
        let obstacle = obstacle();
        let robot = robot();
        assert!(ExpandAllHeadings::new(&obstacle, &robot, 0).execute().is_err());
    }
}
