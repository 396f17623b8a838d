use crate::error::Result;
use crate::geometry::{Circle, Polygon};

use super::{CentroidCenter, CircleCenter};

/// Computes a circle containing every vertex of a polygon.
///
/// The radius is the largest distance from the chosen center to a vertex.
/// With the default centroid center this is a bound, not the smallest
/// enclosing circle.
pub struct CircumscribingCircle<'a, C = CentroidCenter> {
    polygon: &'a Polygon,
    center: C,
}

impl<'a> CircumscribingCircle<'a> {
    /// Creates a new `CircumscribingCircle` query centered on the centroid.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            polygon,
            center: CentroidCenter,
        }
    }
}

impl<'a, C: CircleCenter> CircumscribingCircle<'a, C> {
    /// Replaces the center policy.
    #[must_use]
    pub fn with_center<D: CircleCenter>(self, center: D) -> CircumscribingCircle<'a, D> {
        CircumscribingCircle {
            polygon: self.polygon,
            center,
        }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidCircle` if the center policy yields a
    /// non-finite point.
    pub fn execute(&self) -> Result<Circle> {
        let center = self.center.find_center(self.polygon);
        let radius = self
            .polygon
            .vertices()
            .iter()
            .map(|v| (v - center).norm())
            .fold(0.0, f64::max);
        Circle::new(center, radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn square() -> Polygon {
        Polygon::from_xy(&[(-7.0, 2.0), (-7.0, 7.0), (-2.0, 7.0), (-2.0, 2.0)], None).unwrap()
    }

    #[test]
    fn centroid_circle_of_square() {
        let c = CircumscribingCircle::new(&square()).execute().unwrap();
        assert_abs_diff_eq!(c.center(), Point2::new(-4.5, 4.5), epsilon = 1e-12);
        assert_abs_diff_eq!(c.radius(), 12.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn every_vertex_inside() {
        let p = Polygon::from_xy(&[(0.0, 0.0), (1.0, 5.0), (4.0, 4.0), (3.0, -1.0)], None).unwrap();
        let c = CircumscribingCircle::new(&p).execute().unwrap();
        for v in p.vertices() {
            assert!((v - c.center()).norm() <= c.radius() + 1e-12);
        }
    }

    #[test]
    fn custom_center_policy() {
        let corner = |p: &Polygon| p.vertices()[0];
        let c = CircumscribingCircle::new(&square())
            .with_center(corner)
            .execute()
            .unwrap();
        assert_abs_diff_eq!(c.center(), Point2::new(-7.0, 2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(c.radius(), 50.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn non_finite_center_is_rejected() {
        let nowhere = |_: &Polygon| Point2::new(f64::NAN, 0.0);
        assert!(CircumscribingCircle::new(&square())
            .with_center(nowhere)
            .execute()
            .is_err());
    }
}
