//! Implicit-curve projection
//!
//! Signed distance from query points to the zero level set of an arbitrary
//! twice-differentiable scalar field `f(x, y)`, computed per point by a damped
//! Newton iteration on two residuals:
//!
//! - `F1 = f(x, y)` — the iterate must land on the curve;
//! - `F2 = (x - x0) * fy - (y - y0) * fx` — the displacement from the query
//!   point must be parallel to the field gradient (perpendicular to the
//!   curve).
//!
//! The iteration runs a fixed number of steps with no convergence check; the
//! damping factor trades speed for stability, and convergence near the curve
//! is linear at rate roughly `1 - alpha` per step. Callers chasing tight
//! absolute tolerances on points far from the curve should raise `nit`.
//!
//! The six field evaluations per step (value, both first partials, all three
//! second partials) come from expressions differentiated symbolically once at
//! construction, then evaluated numerically each step.
//!
//! Author: Moroya Sakamoto

use glam::DVec2;
use log::debug;
use rayon::prelude::*;

use crate::field::{FieldExpr, Var};

/// Default Newton iteration count.
pub const DEFAULT_NEWTON_ITERATIONS: usize = 20;

/// Default Newton step damping factor.
pub const DEFAULT_NEWTON_DAMPING: f64 = 0.1;

/// An implicit boundary `f(x, y) = 0` with its precomputed partial
/// derivatives, ready for repeated projection queries.
#[derive(Debug, Clone)]
pub struct LevelSet {
    f: FieldExpr,
    fx: FieldExpr,
    fy: FieldExpr,
    fxx: FieldExpr,
    fyy: FieldExpr,
    fxy: FieldExpr,
}

impl LevelSet {
    /// Differentiate `f` symbolically up to second order and keep the six
    /// evaluators.
    pub fn new(f: FieldExpr) -> Self {
        let fx = f.diff(Var::X);
        let fy = f.diff(Var::Y);
        let fxx = fx.diff(Var::X);
        let fyy = fy.diff(Var::Y);
        let fxy = fx.diff(Var::Y);
        debug!(
            "level set f = {} ({} nodes; derivative trees {}/{}/{}/{}/{} nodes)",
            f,
            f.node_count(),
            fx.node_count(),
            fy.node_count(),
            fxx.node_count(),
            fyy.node_count(),
            fxy.node_count()
        );
        Self {
            f,
            fx,
            fy,
            fxx,
            fyy,
            fxy,
        }
    }

    /// The field expression this level set was built from.
    pub fn field(&self) -> &FieldExpr {
        &self.f
    }

    /// Signed distance from a single point to the zero level set.
    ///
    /// Runs `nit` damped Newton steps from the query point, then returns the
    /// Euclidean length of the displacement, signed by the field value at the
    /// *original* point (not the converged iterate). A singular Jacobian step
    /// (`det J == 0`) is silently neutralized: the determinant is treated as
    /// infinite, so that step moves the iterate nowhere.
    pub fn distance(&self, p: DVec2, nit: usize, alpha: f64) -> f64 {
        let (x0, y0) = (p.x, p.y);
        let (mut x, mut y) = (x0, y0);

        for _ in 0..nit {
            let f = self.f.eval(x, y);
            let fx = self.fx.eval(x, y);
            let fy = self.fy.eval(x, y);
            let fxx = self.fxx.eval(x, y);
            let fyy = self.fyy.eval(x, y);
            let fxy = self.fxy.eval(x, y);

            let f1 = f;
            let f2 = (x - x0) * fy - (y - y0) * fx;

            let j11 = fx;
            let j12 = fy;
            let j21 = fy + (x - x0) * fxy - (y - y0) * fxx;
            let j22 = -fx - (y - y0) * fxy + (x - x0) * fyy;

            let mut det = j11 * j22 - j12 * j21;
            if det == 0.0 {
                det = f64::INFINITY;
            }

            x -= alpha * (j22 * f1 - j21 * f2) / det;
            y -= alpha * (-j12 * f1 + j11 * f2) / det;
        }

        let dist = ((x - x0) * (x - x0) + (y - y0) * (y - y0)).sqrt();
        dist * sign(self.f.eval(x0, y0))
    }

    /// Signed distances for a batch of points.
    pub fn distance_batch(&self, p: &[DVec2], nit: usize, alpha: f64) -> Vec<f64> {
        p.iter().map(|&q| self.distance(q, nit, alpha)).collect()
    }

    /// Signed distances for a batch of points, parallelized over the point
    /// axis. The iteration is entirely per-point, so this matches
    /// [`Self::distance_batch`] exactly.
    pub fn distance_batch_parallel(&self, p: &[DVec2], nit: usize, alpha: f64) -> Vec<f64> {
        p.par_iter().map(|&q| self.distance(q, nit, alpha)).collect()
    }
}

/// Zero maps to zero: a point whose field value is exactly zero is on the
/// boundary and gets distance 0 regardless of where the iterate drifted.
#[inline(always)]
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Signed distance from each point to the zero level set of `field`.
///
/// Builds the derivative evaluators, then projects every point with `nit`
/// damped Newton steps (see [`LevelSet::distance`]).
/// [`DEFAULT_NEWTON_ITERATIONS`] and [`DEFAULT_NEWTON_DAMPING`] hold the
/// conventional parameters.
pub fn dexpr(p: &[DVec2], field: &FieldExpr, nit: usize, alpha: f64) -> Vec<f64> {
    LevelSet::new(field.clone()).distance_batch(p, nit, alpha)
}

/// Parallel variant of [`dexpr`]; identical results, points projected across
/// threads.
pub fn dexpr_parallel(p: &[DVec2], field: &FieldExpr, nit: usize, alpha: f64) -> Vec<f64> {
    LevelSet::new(field.clone()).distance_batch_parallel(p, nit, alpha)
}
