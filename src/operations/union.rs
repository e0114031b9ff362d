//! Union combinator
//!
//! Author: Moroya Sakamoto

use super::elementwise::elementwise_min;

/// Signed distance to the set union of two regions given their distance
/// arrays: `min(d1, d2)` elementwise.
///
/// Not the true distance function of the union near boundary intersections;
/// sign and local gradient direction are exact.
///
/// # Panics
///
/// Panics if the arrays differ in length.
pub fn dunion(d1: &[f64], d2: &[f64]) -> Vec<f64> {
    elementwise_min(d1, d2)
}
