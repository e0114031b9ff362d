//! Ellipse and ellipsoid SDFs
//!
//! Exact signed distance to an axis-aligned ellipse (2D) or ellipsoid (3D).
//! Unlike the circle there is no algebraic closed form: the nearest boundary
//! point is found by solving the monotone radial equation
//!
//! ```text
//! F(t) = sum_i (a_i q_i / (t + a_i^2))^2 - 1 = 0
//! ```
//!
//! whose unique root on `(-min(a_i^2), inf)` parameterizes the foot point
//! `x_i = a_i^2 q_i / (t + a_i^2)`. One bisection solver covers both
//! dimensions, generic over the semi-axis count. Like the level-set projector,
//! it runs a fixed iteration budget with no convergence check.
//!
//! Author: Moroya Sakamoto

use glam::{DVec2, DVec3};
use rayon::prelude::*;

/// Bisection steps for the radial root. 128 halvings shrink any practical
/// bracket below f64 resolution.
const BISECTION_STEPS: usize = 128;

/// Relative nudge applied to query components lying exactly on a symmetry
/// axis, so the radial equation keeps a bracketed root there. The induced
/// distance error is below solver resolution.
const AXIS_NUDGE: f64 = 1e-12;

/// Unsigned distance from `q` (relative to the center) to the boundary of the
/// axis-aligned ellipsoid with semi-axes `semi`.
fn boundary_distance<const N: usize>(semi: [f64; N], q: [f64; N]) -> f64 {
    // Fold into the positive orthant; the shape is symmetric, the distance
    // unchanged. Nudge on-axis components to keep F(t) singular at the lower
    // bracket end.
    let mut w = [0.0; N];
    for i in 0..N {
        w[i] = q[i].abs().max(AXIS_NUDGE * semi[i]);
    }

    let min_sq = semi.iter().fold(f64::INFINITY, |m, &a| m.min(a * a));
    let max_semi = semi.iter().fold(0.0_f64, |m, &a| m.max(a));

    let radial = |t: f64| -> f64 {
        let mut s = 0.0;
        for i in 0..N {
            let r = semi[i] * w[i] / (t + semi[i] * semi[i]);
            s += r * r;
        }
        s - 1.0
    };

    // F decreases monotonically from +inf at t -> -min_sq to -1 at t -> inf
    let mut lo = -min_sq + 1e-16 * min_sq;
    let norm_w = w.iter().map(|&x| x * x).sum::<f64>().sqrt();
    let mut hi = max_semi * (norm_w + max_semi);
    while radial(hi) > 0.0 {
        hi *= 2.0;
    }

    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        if radial(mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let t = 0.5 * (lo + hi);
    let mut dist_sq = 0.0;
    for i in 0..N {
        let x = semi[i] * semi[i] * w[i] / (t + semi[i] * semi[i]);
        dist_sq += (x - w[i]) * (x - w[i]);
    }
    dist_sq.sqrt()
}

/// Sign from the algebraic inside test: negative iff `sum (q_i/a_i)^2 < 1`.
#[inline(always)]
fn interior_sign<const N: usize>(semi: [f64; N], q: [f64; N]) -> f64 {
    let mut s = 0.0;
    for i in 0..N {
        let r = q[i] / semi[i];
        s += r * r;
    }
    if s < 1.0 {
        -1.0
    } else {
        1.0
    }
}

/// Signed distance from each point to the ellipse centered at `(xc, yc)` with
/// semi-axes `a` (x) and `b` (y).
///
/// Exact (to solver resolution) everywhere, including inside. Points are
/// projected independently, so the batch runs in parallel.
///
/// Precondition: `a > 0`, `b > 0`.
pub fn dellipse(p: &[DVec2], xc: f64, yc: f64, a: f64, b: f64) -> Vec<f64> {
    let center = DVec2::new(xc, yc);
    p.par_iter()
        .map(|&q| {
            let rel = q - center;
            let semi = [a, b];
            let rq = [rel.x, rel.y];
            interior_sign(semi, rq) * boundary_distance(semi, rq)
        })
        .collect()
}

/// Signed distance from each point to the ellipsoid centered at
/// `(xc, yc, zc)` with semi-axes `a`, `b`, `c`.
///
/// 3D analogue of [`dellipse`], sharing the same radial solver.
///
/// Precondition: `a > 0`, `b > 0`, `c > 0`.
pub fn dellipsoid(p: &[DVec3], xc: f64, yc: f64, zc: f64, a: f64, b: f64, c: f64) -> Vec<f64> {
    let center = DVec3::new(xc, yc, zc);
    p.par_iter()
        .map(|&q| {
            let rel = q - center;
            let semi = [a, b, c];
            let rq = [rel.x, rel.y, rel.z];
            interior_sign(semi, rq) * boundary_distance(semi, rq)
        })
        .collect()
}
