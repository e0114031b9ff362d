//! Axis-aligned block SDF (3D)
//!
//! Author: Moroya Sakamoto

use glam::DVec3;

/// Signed distance to the axis-aligned block spanning `(x1, y1, z1)` to
/// `(x2, y2, z2)`, half-plane approximation.
///
/// Negative of the minimum of the six half-plane signed distances: the 3D
/// analogue of [`drectangle`](crate::primitives::drectangle), with the same
/// limitation — the distance seen from outside near an edge or corner is
/// understated relative to the true Euclidean distance.
///
/// Precondition: `x1 < x2`, `y1 < y2`, `z1 < z2`.
pub fn dblock(p: &[DVec3], x1: f64, x2: f64, y1: f64, y2: f64, z1: f64, z2: f64) -> Vec<f64> {
    p.iter()
        .map(|&q| {
            (x1 - q.x)
                .max(q.x - x2)
                .max(y1 - q.y)
                .max(q.y - y2)
                .max(z1 - q.z)
                .max(q.z - z2)
        })
        .collect()
}
