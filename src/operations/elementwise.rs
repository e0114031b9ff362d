//! Elementwise array reductions
//!
//! Named elementwise operations over distance arrays. These are deliberately
//! distinct from scalar `f64::min`/`f64::max` so no call site is ambiguous
//! about whether it reduces an array or compares two scalars.
//!
//! Author: Moroya Sakamoto

/// Elementwise minimum of two equal-length arrays.
///
/// # Panics
///
/// Panics if the lengths differ; the whole batch fails uniformly.
pub fn elementwise_min(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(
        a.len(),
        b.len(),
        "elementwise_min: length mismatch ({} vs {})",
        a.len(),
        b.len()
    );
    a.iter().zip(b).map(|(&x, &y)| x.min(y)).collect()
}

/// Elementwise maximum of two equal-length arrays.
///
/// # Panics
///
/// Panics if the lengths differ; the whole batch fails uniformly.
pub fn elementwise_max(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(
        a.len(),
        b.len(),
        "elementwise_max: length mismatch ({} vs {})",
        a.len(),
        b.len()
    );
    a.iter().zip(b).map(|(&x, &y)| x.max(y)).collect()
}

/// Elementwise negation.
pub fn elementwise_neg(a: &[f64]) -> Vec<f64> {
    a.iter().map(|&x| -x).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_identities() {
        let a = [1.0, -2.0, 0.5, f64::INFINITY];
        let b = [0.0, -1.0, 0.5, 3.0];
        assert_eq!(elementwise_min(&a, &b), vec![0.0, -2.0, 0.5, 3.0]);
        assert_eq!(elementwise_max(&a, &b), vec![1.0, -1.0, 0.5, f64::INFINITY]);
    }

    #[test]
    fn neg_roundtrip() {
        let a = [1.0, -2.0, 0.0];
        assert_eq!(elementwise_neg(&elementwise_neg(&a)), a.to_vec());
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn mismatched_lengths_panic() {
        elementwise_min(&[1.0], &[1.0, 2.0]);
    }
}
