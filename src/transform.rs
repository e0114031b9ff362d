//! Batch point transforms
//!
//! Affine maps applied to whole point batches before distance evaluation,
//! so a rotated or shifted region reuses an axis-aligned primitive. Inputs
//! are never mutated; transformed copies are returned.
//!
//! Author: Moroya Sakamoto

use glam::{DMat2, DVec2};

/// Rotate all points by the angle `phi` (radians) around the origin.
pub fn protate(p: &[DVec2], phi: f64) -> Vec<DVec2> {
    let rot = DMat2::from_angle(phi);
    p.iter().map(|&q| rot * q).collect()
}

/// Shift all points by `(x0, y0)`.
pub fn pshift(p: &[DVec2], x0: f64, y0: f64) -> Vec<DVec2> {
    let offset = DVec2::new(x0, y0);
    p.iter().map(|&q| q + offset).collect()
}
