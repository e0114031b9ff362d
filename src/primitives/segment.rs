//! Point-to-segment distances
//!
//! Unsigned distance from query points to the segments of a polyline. The
//! matrix form feeds [`dpoly`](crate::primitives::dpoly), which reduces it per
//! point over an implicitly closed vertex cycle.
//!
//! Author: Moroya Sakamoto

use glam::DVec2;

/// Unsigned distance from `p` to the segment `a..b`.
///
/// The perpendicular foot is clamped to the segment, so endpoints are honored
/// when the projection parameter falls outside `[0, 1]`. A zero-length segment
/// degenerates to the distance to `a`.
#[inline(always)]
pub fn segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let pa = p - a;
    let ba = b - a;
    let ba_sq = ba.length_squared();
    let t = if ba_sq > 0.0 {
        (pa.dot(ba) / ba_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (pa - ba * t).length()
}

/// Unsigned distances from every point to every segment of the open polyline
/// `pv`.
///
/// Returns a row-major `p.len() x (pv.len() - 1)` matrix flattened into a
/// `Vec`: row `i` holds the distances from `p[i]` to each segment in order.
/// Use [`dsegment_min`] for the per-point nearest-segment reduction.
///
/// Precondition: `pv.len() >= 2`.
pub fn dsegment(p: &[DVec2], pv: &[DVec2]) -> Vec<f64> {
    let segments = pv.len() - 1;
    let mut out = Vec::with_capacity(p.len() * segments);
    for &q in p {
        for w in pv.windows(2) {
            out.push(segment_distance(q, w[0], w[1]));
        }
    }
    out
}

/// Per-point minimum distance to the open polyline `pv` (row minimum of
/// [`dsegment`]).
///
/// Precondition: `pv.len() >= 2`.
pub fn dsegment_min(p: &[DVec2], pv: &[DVec2]) -> Vec<f64> {
    p.iter()
        .map(|&q| {
            pv.windows(2)
                .map(|w| segment_distance(q, w[0], w[1]))
                .fold(f64::INFINITY, f64::min)
        })
        .collect()
}
