use crate::error::{OperationError, Result};
use crate::geometry::{Circle, Polygon};
use crate::math::polygon_2d::inward_normal;

use super::{CentroidCenter, CircleCenter};

/// Computes a circle inside a clockwise polygon.
///
/// The radius is the smallest signed distance from the chosen center to the
/// supporting line of an edge, measured along the inward normal
/// `(d.y, -d.x) / |d|` of each edge direction `d`. Zero-length edges have no
/// supporting line and are skipped.
pub struct InscribingCircle<'a, C = CentroidCenter> {
    polygon: &'a Polygon,
    center: C,
}

impl<'a> InscribingCircle<'a> {
    /// Creates a new `InscribingCircle` query centered on the centroid.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            polygon,
            center: CentroidCenter,
        }
    }
}

impl<'a, C: CircleCenter> InscribingCircle<'a, C> {
    /// Replaces the center policy.
    #[must_use]
    pub fn with_center<D: CircleCenter>(self, center: D) -> InscribingCircle<'a, D> {
        InscribingCircle {
            polygon: self.polygon,
            center,
        }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InscribedCircleUndefined` if the center is on
    /// or outside the polygon boundary (or the polygon has no non-degenerate
    /// edge).
    pub fn execute(&self) -> Result<Circle> {
        let center = self.center.find_center(self.polygon);
        let radius = self
            .polygon
            .vertices()
            .iter()
            .zip(self.polygon.edges())
            .filter_map(|(v, e)| inward_normal(&e).map(|n| n.dot(&(center - v))))
            .fold(f64::INFINITY, f64::min);

        if !radius.is_finite() || radius <= 0.0 {
            return Err(OperationError::InscribedCircleUndefined { radius }.into());
        }
        Circle::new(center, radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyspaceError;
    use crate::math::Point2;
    use crate::operations::bounds::CircumscribingCircle;
    use approx::assert_abs_diff_eq;

    fn square() -> Polygon {
        Polygon::from_xy(&[(-7.0, 2.0), (-7.0, 7.0), (-2.0, 7.0), (-2.0, 2.0)], None).unwrap()
    }

    #[test]
    fn centroid_circle_of_square() {
        let c = InscribingCircle::new(&square()).execute().unwrap();
        assert_abs_diff_eq!(c.center(), Point2::new(-4.5, 4.5), epsilon = 1e-12);
        assert_abs_diff_eq!(c.radius(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn off_center_circle_touches_nearest_edge() {
        let c = InscribingCircle::new(&square())
            .with_center(|_: &Polygon| Point2::new(-6.0, 4.0))
            .execute()
            .unwrap();
        assert_abs_diff_eq!(c.radius(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn center_outside_is_undefined() {
        let result = InscribingCircle::new(&square())
            .with_center(|_: &Polygon| Point2::new(0.0, 0.0))
            .execute();
        assert!(matches!(
            result,
            Err(PolyspaceError::Operation(
                OperationError::InscribedCircleUndefined { .. }
            ))
        ));
    }

    #[test]
    fn center_on_boundary_is_undefined() {
        let result = InscribingCircle::new(&square())
            .with_center(|_: &Polygon| Point2::new(-7.0, 4.0))
            .execute();
        assert!(result.is_err());
    }

    #[test]
    fn never_larger_than_circumscribing() {
        let p = Polygon::from_xy(&[(0.0, 0.0), (1.0, 5.0), (4.0, 4.0), (3.0, -1.0)], None).unwrap();
        let inner = InscribingCircle::new(&p).execute().unwrap();
        let outer = CircumscribingCircle::new(&p).execute().unwrap();
        assert!(outer.radius() >= inner.radius());
    }
}
