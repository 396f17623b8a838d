use std::f64::consts::TAU;

use tracing::{debug, trace, warn};

use crate::error::{OperationError, Result};
use crate::geometry::{Circle, Polygon};
use crate::math::Point2;

use super::edge_rejects;

/// Tunables for the probe rings of [`SortEdgesForContainment`].
#[derive(Debug, Clone, Copy)]
pub struct EdgeOrderParams {
    /// Evenly spaced probes per ring.
    pub probe_count: u32,
    /// Weight of the circumscribing radius in the middle ring radius
    /// `w * R_out + (1 - w) * R_in`.
    pub mid_ring_weight: f64,
}

impl Default for EdgeOrderParams {
    fn default() -> Self {
        Self {
            probe_count: 16,
            mid_ring_weight: 0.3,
        }
    }
}

/// Orders a convex polygon's edges so that outside points fail early.
///
/// Probe points are placed on two rings concentric with the circumscribing
/// circle: the circle itself and a ring between it and the inscribing circle.
/// Edges are then picked greedily: each pick is the edge whose outside
/// half-plane holds the most probes no earlier edge has rejected, ties going
/// to the lowest index. Edges that reject nothing new follow in index order.
///
/// The ordering only changes how fast outside points are rejected; an inside
/// point still passes every test.
#[derive(Debug)]
pub struct SortEdgesForContainment<'a> {
    polygon: &'a Polygon,
    inscribed: Circle,
    circumscribed: Circle,
    params: EdgeOrderParams,
}

impl<'a> SortEdgesForContainment<'a> {
    /// Creates a new edge ordering query with default probe parameters.
    #[must_use]
    pub fn new(polygon: &'a Polygon, inscribed: Circle, circumscribed: Circle) -> Self {
        Self {
            polygon,
            inscribed,
            circumscribed,
            params: EdgeOrderParams::default(),
        }
    }

    /// Sets custom probe parameters.
    #[must_use]
    pub fn with_params(mut self, params: EdgeOrderParams) -> Self {
        self.params = params;
        self
    }

    /// Returns the probe points: the outer ring followed by the middle ring.
    #[must_use]
    pub fn probe_points(&self) -> Vec<Point2> {
        let r_out = self.circumscribed.radius();
        let r_in = self.inscribed.radius();
        let w = self.params.mid_ring_weight;
        let mid = Circle::new(self.circumscribed.center(), w * r_out + (1.0 - w) * r_in)
            .unwrap_or(self.circumscribed);

        let m = self.params.probe_count;
        let step = TAU / f64::from(m.max(1));
        [self.circumscribed, mid]
            .iter()
            .flat_map(|ring| (0..m).map(move |k| ring.point_at(step * f64::from(k))))
            .collect()
    }

    /// Executes the ordering, returning a permutation of the edge indices.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `probe_count` is zero or
    /// `mid_ring_weight` is outside `[0, 1]`.
    pub fn execute(&self) -> Result<Vec<usize>> {
        let EdgeOrderParams {
            probe_count,
            mid_ring_weight,
        } = self.params;
        if probe_count == 0 {
            return Err(OperationError::InvalidInput("probe_count must be positive".to_owned()).into());
        }
        if !(0.0..=1.0).contains(&mid_ring_weight) {
            return Err(OperationError::InvalidInput(format!(
                "mid_ring_weight must be in [0, 1], got {mid_ring_weight}"
            ))
            .into());
        }

        let n = self.polygon.len();
        if self.circumscribed.radius() <= self.inscribed.radius() {
            warn!(
                r_out = self.circumscribed.radius(),
                r_in = self.inscribed.radius(),
                "probe rings collapsed; keeping identity edge order"
            );
            return Ok((0..n).collect());
        }

        let probes = self.probe_points();
        let mut rejected = vec![false; probes.len()];
        let mut placed = vec![false; n];
        let mut order = Vec::with_capacity(n);

        loop {
            let mut best: Option<(usize, usize)> = None;
            for edge in (0..n).filter(|&i| !placed[i]) {
                let count = probes
                    .iter()
                    .zip(&rejected)
                    .filter(|&(p, &done)| !done && edge_rejects(self.polygon, edge, p))
                    .count();
                if count > 0 && best.is_none_or(|(_, c)| count > c) {
                    best = Some((edge, count));
                }
            }
            let Some((edge, count)) = best else {
                break;
            };

            for (p, done) in probes.iter().zip(rejected.iter_mut()) {
                if edge_rejects(self.polygon, edge, p) {
                    *done = true;
                }
            }
            placed[edge] = true;
            order.push(edge);
            trace!(edge, count, "placed edge");
        }

        let greedy = order.len();
        order.extend((0..n).filter(|&i| !placed[i]));
        debug!(edges = n, greedy, probes = probes.len(), "sorted edges for containment");
        Ok(order)
    }
}
