//! Mesh-size functions
//!
//! Sizing fields tell the mesh generator the desired local edge length at
//! each point. Every sizing function returns one strictly positive value per
//! query point; `huniform` is the baseline everything else is measured
//! against.
//!
//! Author: Moroya Sakamoto

use glam::{DVec2, DVec3};

use crate::grid::{interp2_linear, interp3_linear, GridError};

/// Uniform mesh-size function `h = 1`.
///
/// Dimension-agnostic: works on any point batch, 2D or 3D.
pub fn huniform<P>(p: &[P]) -> Vec<f64> {
    vec![1.0; p.len()]
}

/// Mesh-size field tabulated on a 2D Cartesian grid: bilinear interpolation
/// of the sizing samples `hh` at the query points.
///
/// The sizing samples must be strictly positive; interpolation then keeps the
/// field strictly positive on the grid's hull.
pub fn hmatrix(p: &[DVec2], xx: &[f64], yy: &[f64], hh: &[f64]) -> Result<Vec<f64>, GridError> {
    interp2_linear(xx, yy, hh, p)
}

/// Mesh-size field tabulated on a 3D Cartesian grid: trilinear interpolation
/// of the sizing samples `hh` at the query points.
pub fn hmatrix3d(
    p: &[DVec3],
    xx: &[f64],
    yy: &[f64],
    zz: &[f64],
    hh: &[f64],
) -> Result<Vec<f64>, GridError> {
    interp3_linear(xx, yy, zz, hh, p)
}
