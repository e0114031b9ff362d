//! Intersection combinator
//!
//! Author: Moroya Sakamoto

use super::elementwise::elementwise_max;

/// Signed distance to the set intersection of two regions given their
/// distance arrays: `max(d1, d2)` elementwise.
///
/// Not the true distance function of the intersection near boundary
/// intersections; sign and local gradient direction are exact.
///
/// # Panics
///
/// Panics if the arrays differ in length.
pub fn dintersect(d1: &[f64], d2: &[f64]) -> Vec<f64> {
    elementwise_max(d1, d2)
}
