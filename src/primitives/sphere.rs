//! Sphere SDF
//!
//! Author: Moroya Sakamoto

use glam::DVec3;

/// Signed distance from each point to a sphere centered at `(xc, yc, zc)`
/// with radius `r`.
///
/// Exact everywhere: `|p - c| - r`.
///
/// Precondition: `r > 0`.
pub fn dsphere(p: &[DVec3], xc: f64, yc: f64, zc: f64, r: f64) -> Vec<f64> {
    let center = DVec3::new(xc, yc, zc);
    p.iter().map(|&q| (q - center).length() - r).collect()
}
