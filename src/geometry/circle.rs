use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

/// A circle in the plane, used as a fast accept/reject bound around a polygon.
///
/// The radius may be zero, which is how a collapsed inscribing circle is
/// represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the center is not finite, or the radius is
    /// negative or not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(GeometryError::InvalidCircle(format!(
                "center ({}, {}) is not finite",
                center.x, center.y
            ))
            .into());
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidCircle(format!(
                "radius must be finite and non-negative, got {radius}"
            ))
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the point on the circle at angle `t` from the +X axis.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.center + Vector2::new(t.cos(), t.sin()) * self.radius
    }

    /// Returns `true` if `p` lies strictly outside the circle.
    #[must_use]
    pub fn excludes(&self, p: &Point2) -> bool {
        (p - self.center).norm_squared() > self.radius * self.radius
    }

    /// Returns `true` if `p` lies strictly inside the circle.
    #[must_use]
    pub fn strictly_contains(&self, p: &Point2) -> bool {
        (p - self.center).norm_squared() < self.radius * self.radius
    }
}
