//! Grid-interpolated distance fields
//!
//! Bilinear/trilinear interpolation of tabulated values on a rectilinear
//! Cartesian grid, plus the thin distance-field wrappers over it. Axis
//! vectors must be strictly increasing; value arrays are stored row-major
//! with the x index outermost (`values[ix * ny + iy]` in 2D,
//! `values[(ix * ny + iy) * nz + iz]` in 3D).
//!
//! Queries outside the grid extrapolate linearly from the nearest edge cell.
//! The contract leaves extrapolation to the caller's responsibility; this
//! choice merely keeps it deterministic.
//!
//! Author: Moroya Sakamoto

use glam::{DVec2, DVec3};
use log::trace;
use thiserror::Error;

/// Grid validation errors.
#[derive(Debug, Error)]
pub enum GridError {
    /// An axis needs at least two coordinates to span cells.
    #[error("grid axis '{axis}' needs at least 2 coordinates, got {len}")]
    AxisTooShort {
        /// Axis name ("x", "y" or "z").
        axis: &'static str,
        /// Number of coordinates supplied.
        len: usize,
    },

    /// Axis coordinates must be strictly increasing.
    #[error("grid axis '{axis}' is not strictly increasing at index {index}")]
    AxisNotIncreasing {
        /// Axis name ("x", "y" or "z").
        axis: &'static str,
        /// Index of the first offending coordinate pair.
        index: usize,
    },

    /// Value array length must equal the product of the axis lengths.
    #[error("grid holds {got} values but the axes span {expected}")]
    ShapeMismatch {
        /// Expected value count (product of axis lengths).
        expected: usize,
        /// Actual value count.
        got: usize,
    },
}

fn validate_axis(name: &'static str, axis: &[f64]) -> Result<(), GridError> {
    if axis.len() < 2 {
        return Err(GridError::AxisTooShort {
            axis: name,
            len: axis.len(),
        });
    }
    for (i, w) in axis.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(GridError::AxisNotIncreasing {
                axis: name,
                index: i,
            });
        }
    }
    Ok(())
}

/// Cell index and interpolation fraction along one axis. The index is clamped
/// to a valid cell; the fraction is left unclamped so out-of-range queries
/// extrapolate from the edge cell.
#[inline(always)]
fn cell(axis: &[f64], q: f64) -> (usize, f64) {
    let i = axis.partition_point(|&v| v <= q).clamp(1, axis.len() - 1) - 1;
    let t = (q - axis[i]) / (axis[i + 1] - axis[i]);
    (i, t)
}

/// Bilinear interpolation of `values` on the grid `x` × `y` at the query
/// points `q`.
///
/// `values` is row-major with x outermost: `values[ix * y.len() + iy]`.
pub fn interp2_linear(
    x: &[f64],
    y: &[f64],
    values: &[f64],
    q: &[DVec2],
) -> Result<Vec<f64>, GridError> {
    validate_axis("x", x)?;
    validate_axis("y", y)?;
    let (nx, ny) = (x.len(), y.len());
    if values.len() != nx * ny {
        return Err(GridError::ShapeMismatch {
            expected: nx * ny,
            got: values.len(),
        });
    }
    trace!("interp2_linear: {}x{} grid, {} queries", nx, ny, q.len());

    Ok(q.iter()
        .map(|&p| {
            let (ix, tx) = cell(x, p.x);
            let (iy, ty) = cell(y, p.y);

            let v00 = values[ix * ny + iy];
            let v01 = values[ix * ny + iy + 1];
            let v10 = values[(ix + 1) * ny + iy];
            let v11 = values[(ix + 1) * ny + iy + 1];

            let lo = v00 + (v01 - v00) * ty;
            let hi = v10 + (v11 - v10) * ty;
            lo + (hi - lo) * tx
        })
        .collect())
}

/// Trilinear interpolation of `values` on the grid `x` × `y` × `z` at the
/// query points `q`.
///
/// `values` is row-major with x outermost:
/// `values[(ix * y.len() + iy) * z.len() + iz]`.
pub fn interp3_linear(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    values: &[f64],
    q: &[DVec3],
) -> Result<Vec<f64>, GridError> {
    validate_axis("x", x)?;
    validate_axis("y", y)?;
    validate_axis("z", z)?;
    let (nx, ny, nz) = (x.len(), y.len(), z.len());
    if values.len() != nx * ny * nz {
        return Err(GridError::ShapeMismatch {
            expected: nx * ny * nz,
            got: values.len(),
        });
    }
    trace!(
        "interp3_linear: {}x{}x{} grid, {} queries",
        nx,
        ny,
        nz,
        q.len()
    );

    let at = |ix: usize, iy: usize, iz: usize| values[(ix * ny + iy) * nz + iz];

    Ok(q.iter()
        .map(|&p| {
            let (ix, tx) = cell(x, p.x);
            let (iy, ty) = cell(y, p.y);
            let (iz, tz) = cell(z, p.z);

            // Collapse z, then y, then x
            let mut c = [0.0; 4];
            for dx in 0..2 {
                for dy in 0..2 {
                    let lo = at(ix + dx, iy + dy, iz);
                    let hi = at(ix + dx, iy + dy, iz + 1);
                    c[dx * 2 + dy] = lo + (hi - lo) * tz;
                }
            }
            let lo = c[0] + (c[1] - c[0]) * ty;
            let hi = c[2] + (c[3] - c[2]) * ty;
            lo + (hi - lo) * tx
        })
        .collect())
}

/// Signed distance field tabulated on a 2D Cartesian grid: bilinear
/// interpolation of the distance samples `dd` at the query points.
pub fn dmatrix(p: &[DVec2], xx: &[f64], yy: &[f64], dd: &[f64]) -> Result<Vec<f64>, GridError> {
    interp2_linear(xx, yy, dd, p)
}

/// Signed distance field tabulated on a 3D Cartesian grid: trilinear
/// interpolation of the distance samples `dd` at the query points.
pub fn dmatrix3d(
    p: &[DVec3],
    xx: &[f64],
    yy: &[f64],
    zz: &[f64],
    dd: &[f64],
) -> Result<Vec<f64>, GridError> {
    interp3_linear(xx, yy, zz, dd, p)
}
