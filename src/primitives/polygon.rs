//! Polygon SDF
//!
//! Signed distance to a simple (possibly non-convex) polygon: an inside test
//! provides the sign, the nearest boundary segment provides the magnitude.
//!
//! Author: Moroya Sakamoto

use glam::DVec2;

use super::segment::segment_distance;

/// Even-odd ray-crossing inside test.
///
/// Casts a horizontal ray from `p` and counts boundary crossings over the
/// implicitly closed vertex cycle `pv` (first/last vertex must not repeat).
/// The result for points exactly on the boundary, or for self-intersecting
/// polygons, is undefined input per the crate's precondition policy.
pub fn point_in_polygon(p: DVec2, pv: &[DVec2]) -> bool {
    let n = pv.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = pv[i];
        let vj = pv[j];
        if (vi.y > p.y) != (vj.y > p.y)
            && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Signed distance from each point to the simple polygon with vertices `pv`.
///
/// The boundary is the closed edge cycle through `pv` (closure is implicit;
/// do not repeat the first vertex). Magnitude is the minimum clamped segment
/// distance over all edges; sign is -1 inside, +1 outside, from the even-odd
/// crossing test.
///
/// Precondition: `pv` describes a simple closed boundary with `pv.len() >= 3`.
pub fn dpoly(p: &[DVec2], pv: &[DVec2]) -> Vec<f64> {
    let n = pv.len();
    p.iter()
        .map(|&q| {
            let mut dist = f64::INFINITY;
            for i in 0..n {
                let d = segment_distance(q, pv[i], pv[(i + 1) % n]);
                if d < dist {
                    dist = d;
                }
            }
            if point_in_polygon(q, pv) {
                -dist
            } else {
                dist
            }
        })
        .collect()
}
