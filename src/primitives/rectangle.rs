//! Axis-aligned rectangle SDFs
//!
//! Two variants: a half-plane-min approximation (`drectangle`) that understates
//! the distance seen from outside a corner, and a corner-exact version
//! (`drectangle0`) that substitutes the true Euclidean corner distance where a
//! point violates two adjacent half-planes at once.
//!
//! Author: Moroya Sakamoto

use glam::DVec2;

/// Signed distance to the rectangle with corners `(x1, y1)` and `(x2, y2)`,
/// half-plane approximation.
///
/// Computed as the negative of the minimum of the four half-plane signed
/// distances. Exact inside and outside the edges' slabs, but for a point
/// outside near a corner the true Euclidean corner distance is understated
/// (e.g. the corner (1,1) seen from (2,2) reads 1.0 instead of sqrt(2)).
/// See [`drectangle0`] for the corner-exact variant.
///
/// Precondition: `x1 < x2`, `y1 < y2`.
pub fn drectangle(p: &[DVec2], x1: f64, x2: f64, y1: f64, y2: f64) -> Vec<f64> {
    p.iter()
        .map(|&q| {
            let d1 = y1 - q.y;
            let d2 = q.y - y2;
            let d3 = x1 - q.x;
            let d4 = q.x - x2;
            d1.max(d2).max(d3).max(d4)
        })
        .collect()
}

/// Signed distance to the rectangle with corners `(x1, y1)` and `(x2, y2)`,
/// corner-exact.
///
/// The four half-plane distances are combined through an explicit decision
/// table: each of the four corner regions (two adjacent half-planes violated
/// simultaneously) yields the Euclidean distance to that corner; everywhere
/// else the half-plane maximum applies. The corner regions are disjoint for a
/// non-degenerate rectangle, so no arm can overwrite another's result.
///
/// Precondition: `x1 < x2`, `y1 < y2`.
pub fn drectangle0(p: &[DVec2], x1: f64, x2: f64, y1: f64, y2: f64) -> Vec<f64> {
    p.iter()
        .map(|&q| {
            // Outward distance past each edge (positive = outside that half-plane)
            let d1 = y1 - q.y; // below
            let d2 = q.y - y2; // above
            let d3 = x1 - q.x; // left
            let d4 = q.x - x2; // right

            match (d1 > 0.0, d2 > 0.0, d3 > 0.0, d4 > 0.0) {
                (true, _, true, _) => (d1 * d1 + d3 * d3).sqrt(), // corner (x1, y1)
                (true, _, _, true) => (d1 * d1 + d4 * d4).sqrt(), // corner (x2, y1)
                (_, true, true, _) => (d2 * d2 + d3 * d3).sqrt(), // corner (x1, y2)
                (_, true, _, true) => (d2 * d2 + d4 * d4).sqrt(), // corner (x2, y2)
                _ => d1.max(d2).max(d3).max(d4),
            }
        })
        .collect()
}
