//! Half-plane containment for convex clockwise polygons.
//!
//! A point is outside edge `i` iff it lies strictly left of the directed edge
//! (see [`projects_left`]); it is inside the polygon iff no edge rejects it.

mod edge_order;
mod fast_polygon;

pub use edge_order::{EdgeOrderParams, SortEdgesForContainment};
pub use fast_polygon::FastPolygon;

use crate::geometry::Polygon;
use crate::math::polygon_2d::projects_left;
use crate::math::Point2;

/// Returns `true` if edge `i`'s half-plane test puts `p` outside `polygon`.
#[must_use]
pub fn edge_rejects(polygon: &Polygon, i: usize, p: &Point2) -> bool {
    projects_left(&polygon.edge(i), &(p - polygon.vertices()[i]))
}
