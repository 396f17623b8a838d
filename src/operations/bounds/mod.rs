//! Bounding circles used to accept or reject containment queries early.
//!
//! Both circles share a center chosen by a [`CircleCenter`] policy. The
//! default, [`CentroidCenter`], uses the vertex centroid; a smallest
//! enclosing circle or a Chebyshev center can be plugged in without touching
//! the polygon or containment code.

mod circumscribing;
mod inscribing;

pub use circumscribing::CircumscribingCircle;
pub use inscribing::InscribingCircle;

use crate::geometry::Polygon;
use crate::math::Point2;

/// Chooses the center shared by a polygon's bounding circles.
pub trait CircleCenter {
    /// Returns the center to use for `polygon`.
    fn find_center(&self, polygon: &Polygon) -> Point2;
}

/// Centers both circles on the vertex centroid.
#[derive(Debug, Clone, Copy, Default)]
pub struct CentroidCenter;

impl CircleCenter for CentroidCenter {
    fn find_center(&self, polygon: &Polygon) -> Point2 {
        polygon.centroid()
    }
}

impl<F> CircleCenter for F
where
    F: Fn(&Polygon) -> Point2,
{
    fn find_center(&self, polygon: &Polygon) -> Point2 {
        self(polygon)
    }
}
