use super::{Point2, Vector2, TOLERANCE};

/// Z component of the cross product `a x b`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns `true` iff `target` lies strictly to the left of the directed `edge`.
///
/// For clockwise polygons left of an edge is outside.
#[must_use]
pub fn projects_left(edge: &Vector2, target: &Vector2) -> bool {
    cross_2d(edge, target) > 0.0
}

/// Inward unit normal of an edge of a clockwise polygon: `(d.y, -d.x) / |d|`.
///
/// Returns `None` for a zero-length edge.
#[must_use]
pub fn inward_normal(edge: &Vector2) -> Option<Vector2> {
    let len = edge.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(Vector2::new(edge.y / len, -edge.x / len))
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Arithmetic mean of the vertices. Returns the origin for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex_centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / points.len() as f64)
}
