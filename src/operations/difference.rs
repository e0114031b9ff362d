//! Difference combinator
//!
//! Author: Moroya Sakamoto

use super::elementwise::{elementwise_max, elementwise_neg};

/// Signed distance to the set difference `region1 \ region2` given their
/// distance arrays: `max(d1, -d2)` elementwise.
///
/// Not the true distance function of the difference near boundary
/// intersections; sign and local gradient direction are exact.
///
/// # Panics
///
/// Panics if the arrays differ in length.
pub fn ddiff(d1: &[f64], d2: &[f64]) -> Vec<f64> {
    elementwise_max(d1, &elementwise_neg(d2))
}
