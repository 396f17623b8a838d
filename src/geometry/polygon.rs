use std::f64::consts::TAU;

use nalgebra::Rotation2;

use crate::error::{GeometryError, Result};
use crate::math::angle::{ang_dist, vector_angle};
use crate::math::polygon_2d::{cross_2d, signed_area_2d, vertex_centroid};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A closed planar polygon with a reference point and cached edge directions.
///
/// Vertices are listed clockwise; the last vertex connects back to the first
/// and no closing duplicate is stored. `angles()[i]` is the direction of the
/// edge from vertex `i` to vertex `i + 1`, wrapped into `(-pi, pi]`.
///
/// A `Polygon` is immutable: every transform returns a new polygon with its
/// angles recomputed from the transformed vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
    center: Point2,
    angles: Vec<f64>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// When `center` is `None` the reference point is the vertex centroid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` if fewer than 3 vertices are
    /// given or any coordinate is not finite.
    pub fn new(vertices: Vec<Point2>, center: Option<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidPolygon(format!(
                "at least 3 vertices are required, got {}",
                vertices.len()
            ))
            .into());
        }
        if let Some(p) = vertices
            .iter()
            .chain(center.iter())
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(
                GeometryError::InvalidPolygon(format!("non-finite point ({}, {})", p.x, p.y)).into(),
            );
        }
        let center = center.unwrap_or_else(|| vertex_centroid(&vertices));
        Ok(Self::from_parts(vertices, center))
    }

    /// Convenience constructor from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::new`].
    pub fn from_xy(points: &[(f64, f64)], center: Option<(f64, f64)>) -> Result<Self> {
        let vertices = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        Self::new(vertices, center.map(|(x, y)| Point2::new(x, y)))
    }

    /// Builds a polygon from already-checked parts, computing the edge angles.
    fn from_parts(vertices: Vec<Point2>, center: Point2) -> Self {
        let n = vertices.len();
        let angles = (0..n)
            .map(|i| vector_angle(&(vertices[(i + 1) % n] - vertices[i])))
            .collect();
        Self {
            vertices,
            center,
            angles,
        }
    }

    /// Returns the vertices in clockwise order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the reference point.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the edge directions, one per vertex.
    #[must_use]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Returns the number of vertices (and edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if there are no vertices, which a constructed polygon never has.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns vertex `i`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::IndexOutOfRange` if `i >= len()`.
    pub fn vertex(&self, i: usize) -> Result<Point2> {
        self.check_index(i)?;
        Ok(self.vertices[i])
    }

    /// Returns `vertex[(i + 1) mod N] - vertex[i]`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::IndexOutOfRange` if `i >= len()`.
    pub fn edge_vector(&self, i: usize) -> Result<Vector2> {
        self.check_index(i)?;
        Ok(self.edge(i))
    }

    /// Returns the direction of edge `i`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::IndexOutOfRange` if `i >= len()`.
    pub fn edge_angle(&self, i: usize) -> Result<f64> {
        self.check_index(i)?;
        Ok(self.angles[i])
    }

    /// Iterates over all edge vectors in order.
    pub fn edges(&self) -> impl Iterator<Item = Vector2> + '_ {
        (0..self.len()).map(|i| self.edge(i))
    }

    /// Edge vector for an index already known to be in range (wraps modulo `N`).
    pub(crate) fn edge(&self, i: usize) -> Vector2 {
        let n = self.vertices.len();
        self.vertices[(i + 1) % n] - self.vertices[i % n]
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.vertices.len() {
            return Err(GeometryError::IndexOutOfRange {
                index: i,
                len: self.vertices.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Arithmetic mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        vertex_centroid(&self.vertices)
    }

    /// Returns a copy shifted by `v`. Edge angles are unchanged.
    #[must_use]
    pub fn translate(&self, v: &Vector2) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| p + v).collect(),
            center: self.center + v,
            angles: self.angles.clone(),
        }
    }

    /// Returns the point reflection of this polygon through the origin.
    ///
    /// Vertices and center are negated. A point reflection is a rotation by
    /// pi, so the winding is kept and every edge angle becomes
    /// `fix_angle(angle + pi)` in the same order.
    #[must_use]
    pub fn negate(&self) -> Self {
        let vertices = self.vertices.iter().map(|p| Point2::from(-p.coords)).collect();
        Self::from_parts(vertices, Point2::from(-self.center.coords))
    }

    /// Returns a copy rotated by `theta` radians about the reference point.
    #[must_use]
    pub fn rotate(&self, theta: f64) -> Self {
        let rot = Rotation2::new(theta);
        let c = self.center;
        let vertices = self.vertices.iter().map(|p| c + rot * (p - c)).collect();
        Self::from_parts(vertices, c)
    }

    /// Returns the position of `other`'s reference point when `other`'s vertex
    /// `other_idx` is placed on this polygon's vertex `self_idx`:
    /// `self.vertex[self_idx] + (other.center - other.vertex[other_idx])`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::IndexOutOfRange` if either index is out of range.
    pub fn seed_point(&self, other: &Polygon, self_idx: usize, other_idx: usize) -> Result<Point2> {
        let anchor = self.vertex(self_idx)?;
        let offset = other.center - other.vertex(other_idx)?;
        Ok(anchor + offset)
    }

    /// Signed area, negative for clockwise polygons.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Returns `true` if the vertices wind clockwise (strictly negative area).
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Returns `true` for a convex clockwise polygon.
    ///
    /// Every turn must be to the right (collinear turns allowed) and the edge
    /// directions must sweep exactly one full turn.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let n = self.len();
        let scale = self.diameter_hint().max(1.0);
        let mut sweep = 0.0;
        for i in 0..n {
            let a = self.edge(i);
            let b = self.edge(i + 1);
            if cross_2d(&a, &b) > TOLERANCE * scale * scale {
                return false;
            }
            sweep += ang_dist(self.angles[(i + 1) % n], self.angles[i]);
        }
        (sweep - TAU).abs() < 1e-6
    }

    /// Checks for duplicate consecutive vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` naming the first zero-length edge.
    pub fn validate(&self) -> Result<()> {
        let tol = TOLERANCE * self.diameter_hint().max(1.0);
        if let Some(i) = self.edges().position(|e| e.norm() < tol) {
            return Err(GeometryError::InvalidPolygon(format!(
                "edge {i} has zero length (duplicate vertex {})",
                (i + 1) % self.len()
            ))
            .into());
        }
        Ok(())
    }

    /// Returns a copy without vertices whose incoming and outgoing edges run
    /// in the same direction, and without zero-length edges.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` if fewer than 3 vertices remain.
    pub fn merge_collinear(&self) -> Result<Self> {
        let n = self.len();
        let scale = self.diameter_hint().max(1.0);
        let tol = TOLERANCE * scale;
        let mut kept = Vec::with_capacity(n);
        for i in 0..n {
            let incoming = self.edge(i + n - 1);
            let outgoing = self.edge(i);
            if outgoing.norm() < tol {
                continue;
            }
            let straight = cross_2d(&incoming, &outgoing).abs() < tol * scale
                && incoming.dot(&outgoing) > 0.0;
            if !straight {
                kept.push(self.vertices[i]);
            }
        }
        Self::new(kept, Some(self.center))
    }

    /// Largest coordinate extent, used to scale tolerances.
    fn diameter_hint(&self) -> f64 {
        let (mut min, mut max) = (self.vertices[0], self.vertices[0]);
        for p in &self.vertices {
            min = Point2::new(min.x.min(p.x), min.y.min(p.y));
            max = Point2::new(max.x.max(p.x), max.y.max(p.y));
        }
        (max - min).norm()
    }
}
