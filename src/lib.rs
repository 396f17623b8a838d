//! Configuration-space obstacles for planar motion planning.
//!
//! Expands convex clockwise obstacles by a convex robot footprint
//! ([`operations::cspace::ExpandCSpace`]), fits bounding circles around the
//! result ([`operations::bounds`]) and orders its edges so that containment
//! queries reject outside points early ([`operations::containment`]).

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PolyspaceError, Result};
pub use geometry::{Circle, Polygon};
