use tracing::warn;

use crate::error::{OperationError, PolyspaceError, Result};
use crate::geometry::{Circle, Polygon};
use crate::math::Point2;
use crate::operations::bounds::{CentroidCenter, CircleCenter, CircumscribingCircle, InscribingCircle};

use super::{edge_rejects, EdgeOrderParams, SortEdgesForContainment};

/// A convex polygon prepared for repeated containment queries.
///
/// Holds the polygon together with its bounding circles and an edge order
/// from [`SortEdgesForContainment`]. A query is answered by the circles when
/// possible and by the ordered half-plane tests otherwise.
#[derive(Debug, Clone)]
pub struct FastPolygon {
    polygon: Polygon,
    circumscribed: Circle,
    inscribed: Circle,
    edge_order: Vec<usize>,
}

impl FastPolygon {
    /// Prepares `polygon` with centroid-centered circles and default probes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounding circles or the edge order cannot be
    /// computed.
    pub fn new(polygon: Polygon) -> Result<Self> {
        Self::with_options(polygon, CentroidCenter, EdgeOrderParams::default())
    }

    /// Prepares `polygon` with a custom circle center and probe parameters.
    ///
    /// If no inscribing circle exists for the chosen center, a zero-radius
    /// circle is used and the fast-accept step never fires.
    ///
    /// # Errors
    ///
    /// Returns an error if the circumscribing circle or the edge order cannot
    /// be computed.
    pub fn with_options<C>(polygon: Polygon, center: C, params: EdgeOrderParams) -> Result<Self>
    where
        C: CircleCenter + Clone,
    {
        let circumscribed = CircumscribingCircle::new(&polygon)
            .with_center(center.clone())
            .execute()?;
        let inscribed = match InscribingCircle::new(&polygon).with_center(center).execute() {
            Ok(circle) => circle,
            Err(PolyspaceError::Operation(OperationError::InscribedCircleUndefined { radius })) => {
                warn!(radius, "circle center is outside the polygon; no fast accept");
                Circle::new(circumscribed.center(), 0.0)?
            }
            Err(e) => return Err(e),
        };
        let edge_order = SortEdgesForContainment::new(&polygon, inscribed, circumscribed)
            .with_params(params)
            .execute()?;

        Ok(Self {
            polygon,
            circumscribed,
            inscribed,
            edge_order,
        })
    }

    /// Returns the underlying polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Returns the circumscribing circle.
    #[must_use]
    pub fn circumscribed(&self) -> Circle {
        self.circumscribed
    }

    /// Returns the inscribing circle (zero radius if undefined).
    #[must_use]
    pub fn inscribed(&self) -> Circle {
        self.inscribed
    }

    /// Returns the order in which edges are tested.
    #[must_use]
    pub fn edge_order(&self) -> &[usize] {
        &self.edge_order
    }

    /// Returns `true` if `p` is inside the polygon or on its boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        if self.circumscribed.excludes(p) {
            return false;
        }
        if self.inscribed.strictly_contains(p) {
            return true;
        }
        self.rejection_rank(p).is_none()
    }

    /// Position in [`FastPolygon::edge_order`] of the first edge whose
    /// half-plane rejects `p`, or `None` if every edge accepts it.
    ///
    /// Ignores the bounding circles.
    #[must_use]
    pub fn rejection_rank(&self, p: &Point2) -> Option<usize> {
        self.edge_order
            .iter()
            .position(|&i| edge_rejects(&self.polygon, i, p))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use crate::operations::cspace::ExpandCSpace;
    use approx::assert_abs_diff_eq;

    fn square_cspace() -> Polygon {
        let obstacle =
            Polygon::from_xy(&[(-6.0, 3.0), (-6.0, 6.0), (-3.0, 6.0), (-3.0, 3.0)], None).unwrap();
        let robot = Polygon::from_xy(
            &[(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)],
            Some((0.0, 0.0)),
        )
        .unwrap();
        ExpandCSpace::new(&obstacle, &robot).execute().unwrap()
    }

    fn tilted_cspace() -> Polygon {
        let obstacle = Polygon::from_xy(
            &[
                (-162.156_311, 135.594_849),
                (-179.011_23, 177.167_496),
                (-138.097_122, 193.755_432),
                (-121.242_203, 152.182_785),
            ],
            None,
        )
        .unwrap();
        let robot = Polygon::from_xy(
            &[(-55.9, -27.1), (-55.9, 27.1), (22.1, 27.1), (22.1, -27.1)],
            Some((0.0, 0.0)),
        )
        .unwrap();
        ExpandCSpace::new(&obstacle, &robot).execute().unwrap()
    }

    fn brute_force_inside(p: &Polygon, q: &Point2) -> bool {
        (0..p.len()).all(|i| !edge_rejects(p, i, q))
    }

    #[test]
    fn centroid_is_inside_every_edge() {
        let fast = FastPolygon::new(square_cspace()).unwrap();
        let centroid = fast.polygon().centroid();
        assert!(fast.contains(&centroid));
        assert_eq!(fast.rejection_rank(&centroid), None);
    }

    #[test]
    fn far_point_fails_early() {
        let fast = FastPolygon::new(square_cspace()).unwrap();
        let origin = Point2::origin();
        assert!(!fast.contains(&origin));
        // Each side of the square is picked before any collinear twin, so the
        // right or bottom side comes within the first three tests.
        let rank = fast.rejection_rank(&origin).unwrap();
        assert!(rank < 3, "rank={rank}, order={:?}", fast.edge_order());
    }

    #[test]
    fn circles_sandwich_the_polygon() {
        let fast = FastPolygon::new(tilted_cspace()).unwrap();
        let p = fast.polygon();
        let xs = p.vertices().iter().map(|v| v.x);
        let ys = p.vertices().iter().map(|v| v.y);
        let dx = xs.clone().fold(f64::MIN, f64::max) - xs.fold(f64::MAX, f64::min);
        let dy = ys.clone().fold(f64::MIN, f64::max) - ys.fold(f64::MAX, f64::min);
        let eps = 1e-9 * dx.hypot(dy);

        let outer = fast.circumscribed();
        for v in p.vertices() {
            assert!((v - outer.center()).norm() <= outer.radius() + eps);
        }
        let inner = fast.inscribed();
        for (v, e) in p.vertices().iter().zip(p.edges()) {
            let n = Vector2::new(e.y, -e.x) / e.norm();
            assert!(n.dot(&(inner.center() - v)) >= inner.radius() - eps);
        }
        assert!(outer.radius() >= inner.radius());
    }

    #[test]
    fn circle_centers_are_the_vertex_centroid() {
        let fast = FastPolygon::new(tilted_cspace()).unwrap();
        let p = fast.polygon();
        assert_eq!(p.len(), 8);
        let centroid = p.centroid();
        assert_abs_diff_eq!(fast.circumscribed().center(), centroid, epsilon = 1e-9);
        let max = p
            .vertices()
            .iter()
            .map(|v| (v - centroid).norm())
            .fold(0.0, f64::max);
        assert_abs_diff_eq!(fast.circumscribed().radius(), max, epsilon = 1e-9);
    }

    #[test]
    fn contains_matches_brute_force() {
        for poly in [square_cspace(), tilted_cspace()] {
            let fast = FastPolygon::new(poly.clone()).unwrap();
            let c = fast.circumscribed().center();
            let r = fast.circumscribed().radius() * 1.5;
            for i in -20..=20 {
                for j in -20..=20 {
                    let q = Point2::new(
                        c.x + r * f64::from(i) / 20.0,
                        c.y + r * f64::from(j) / 20.0,
                    );
                    assert_eq!(fast.contains(&q), brute_force_inside(&poly, &q), "q={q:?}");
                }
            }
        }
    }

    #[test]
    fn outside_center_falls_back_to_zero_inscribed_radius() {
        let far = |_: &Polygon| Point2::new(100.0, 100.0);
        let fast =
            FastPolygon::with_options(square_cspace(), far, EdgeOrderParams::default()).unwrap();
        assert_abs_diff_eq!(fast.inscribed().radius(), 0.0);
        assert!(fast.contains(&Point2::new(-4.5, 4.5)));
        assert!(!fast.contains(&Point2::new(0.0, 0.0)));
    }
}
