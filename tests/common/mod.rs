//! Common test helpers for ALICE-DistMesh integration tests
//!
//! Author: Moroya Sakamoto

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG so property tests are reproducible.
pub fn test_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_d157)
}

/// Unit square polygon, counter-clockwise, first vertex not repeated.
pub fn unit_square() -> Vec<DVec2> {
    vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ]
}

/// `n` random points in the square `[-range, range]^2`.
pub fn random_points(rng: &mut StdRng, n: usize, range: f64) -> Vec<DVec2> {
    (0..n)
        .map(|_| DVec2::new(rng.gen_range(-range..range), rng.gen_range(-range..range)))
        .collect()
}

/// Random distance-like arrays of equal length.
pub fn random_arrays(rng: &mut StdRng, n: usize) -> (Vec<f64>, Vec<f64>) {
    let a = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
    let b = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
    (a, b)
}
