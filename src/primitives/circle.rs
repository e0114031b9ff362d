//! Circle SDF
//!
//! Author: Moroya Sakamoto

use glam::DVec2;

/// Signed distance from each point to a circle centered at `(xc, yc)` with
/// radius `r`.
///
/// Exact everywhere: `|p - c| - r`.
///
/// Precondition: `r > 0`.
pub fn dcircle(p: &[DVec2], xc: f64, yc: f64, r: f64) -> Vec<f64> {
    let center = DVec2::new(xc, yc);
    p.iter().map(|&q| (q - center).length() - r).collect()
}
