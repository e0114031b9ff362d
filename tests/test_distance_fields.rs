//! Integration tests: primitive SDFs, combinators, grids and transforms
//!
//! Locks in the sign convention, the closed-form exactness of the smooth
//! primitives, and the documented corner behavior of the approximate ones.
//!
//! Author: Moroya Sakamoto

mod common;

use alice_distmesh::prelude::*;
use common::*;
use glam::{DVec2, DVec3};
use rand::Rng;

// ============================================================================
// Closed-form exactness
// ============================================================================

#[test]
fn dcircle_matches_direct_computation() {
    let mut rng = test_rng();
    for _ in 0..20 {
        let xc = rng.gen_range(-5.0..5.0);
        let yc = rng.gen_range(-5.0..5.0);
        let r = rng.gen_range(0.1..4.0);
        let points = random_points(&mut rng, 100, 10.0);
        let d = dcircle(&points, xc, yc, r);
        for (p, di) in points.iter().zip(&d) {
            let expected = ((p.x - xc).powi(2) + (p.y - yc).powi(2)).sqrt() - r;
            assert!(
                (di - expected).abs() < 1e-12,
                "dcircle at {:?}: got {}, want {}",
                p,
                di,
                expected
            );
        }
    }
}

#[test]
fn dsphere_matches_direct_computation() {
    let mut rng = test_rng();
    let points: Vec<DVec3> = (0..100)
        .map(|_| {
            DVec3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            )
        })
        .collect();
    let d = dsphere(&points, 1.0, -2.0, 0.5, 1.5);
    for (p, di) in points.iter().zip(&d) {
        let expected = (*p - DVec3::new(1.0, -2.0, 0.5)).length() - 1.5;
        assert!((di - expected).abs() < 1e-12);
    }
}

#[test]
fn dellipse_reduces_to_dcircle() {
    let mut rng = test_rng();
    let points = random_points(&mut rng, 100, 4.0);
    let circle = dcircle(&points, 0.5, -0.5, 1.25);
    let ellipse = dellipse(&points, 0.5, -0.5, 1.25, 1.25);
    for i in 0..points.len() {
        assert!(
            (circle[i] - ellipse[i]).abs() < 1e-8,
            "at {:?}: circle={}, ellipse={}",
            points[i],
            circle[i],
            ellipse[i]
        );
    }
}

// ============================================================================
// Sign convention
// ============================================================================

#[test]
fn convex_center_is_most_interior() {
    // Sample interior points of a rectangle; its center must be the most
    // negative
    let mut interior = vec![DVec2::new(0.5, 0.5)];
    for i in 1..10 {
        for j in 1..10 {
            interior.push(DVec2::new(i as f64 * 0.1, j as f64 * 0.1));
        }
    }
    let d = drectangle0(&interior, 0.0, 1.0, 0.0, 1.0);
    let center = d[0];
    assert!(center < 0.0);
    for &di in &d {
        assert!(center <= di + 1e-15);
    }
}

#[test]
fn circle_center_is_most_interior() {
    let mut points = vec![DVec2::new(0.3, -0.1)]; // the center
    let mut rng = test_rng();
    for _ in 0..200 {
        let a: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let r: f64 = rng.gen_range(0.0..0.99);
        points.push(DVec2::new(0.3 + r * a.cos(), -0.1 + r * a.sin()));
    }
    let d = dcircle(&points, 0.3, -0.1, 1.0);
    for &di in &d[1..] {
        assert!(d[0] <= di);
    }
}

// ============================================================================
// Combinator identities
// ============================================================================

#[test]
fn combinators_are_elementwise_min_max() {
    let mut rng = test_rng();
    let (d1, d2) = random_arrays(&mut rng, 500);

    let u = dunion(&d1, &d2);
    let i = dintersect(&d1, &d2);
    let s = ddiff(&d1, &d2);

    for k in 0..d1.len() {
        assert_eq!(u[k], d1[k].min(d2[k]));
        assert_eq!(i[k], d1[k].max(d2[k]));
        assert_eq!(s[k], d1[k].max(-d2[k]));
    }
}

#[test]
fn union_intersection_ordering() {
    // For any arrays, union <= each input <= intersection
    let mut rng = test_rng();
    let (d1, d2) = random_arrays(&mut rng, 100);
    let u = dunion(&d1, &d2);
    let i = dintersect(&d1, &d2);
    for k in 0..d1.len() {
        assert!(u[k] <= d1[k] && u[k] <= d2[k]);
        assert!(i[k] >= d1[k] && i[k] >= d2[k]);
    }
}

// ============================================================================
// Polygon and rectangle corner behavior
// ============================================================================

#[test]
fn dpoly_unit_square_reference_values() {
    let square = unit_square();
    let d = dpoly(
        &[DVec2::new(0.5, 0.5), DVec2::new(2.0, 2.0)],
        &square,
    );
    assert!((d[0] + 0.5).abs() < 1e-12, "center: got {}", d[0]);
    assert!(
        (d[1] - 2.0_f64.sqrt()).abs() < 1e-12,
        "outside corner: got {}",
        d[1]
    );
}

#[test]
fn dpoly_agrees_with_drectangle0_on_square() {
    let square = unit_square();
    let mut rng = test_rng();
    let points = random_points(&mut rng, 200, 3.0);
    let from_poly = dpoly(&points, &square);
    let from_rect = drectangle0(&points, 0.0, 1.0, 0.0, 1.0);
    for k in 0..points.len() {
        assert!(
            (from_poly[k] - from_rect[k]).abs() < 1e-9,
            "at {:?}: dpoly={}, drectangle0={}",
            points[k],
            from_poly[k],
            from_rect[k]
        );
    }
}

#[test]
fn rectangle_corner_discrepancy() {
    // Documented approximation: the half-plane variant understates the
    // distance past a corner
    let q = [DVec2::new(2.0, 2.0)];
    let approx = drectangle(&q, 0.0, 1.0, 0.0, 1.0);
    let exact = drectangle0(&q, 0.0, 1.0, 0.0, 1.0);
    assert!((approx[0] - 1.0).abs() < 1e-12);
    assert!((exact[0] - 2.0_f64.sqrt()).abs() < 1e-12);
    assert!(approx[0] < exact[0]);
}

#[test]
fn dsegment_reduction_matches_matrix() {
    let pv = vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ];
    let mut rng = test_rng();
    let points = random_points(&mut rng, 50, 2.0);
    let matrix = dsegment(&points, &pv);
    let mins = dsegment_min(&points, &pv);
    let m = pv.len() - 1;
    assert_eq!(matrix.len(), points.len() * m);
    for i in 0..points.len() {
        let row_min = matrix[i * m..(i + 1) * m]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(mins[i], row_min);
    }
}

// ============================================================================
// Grid fields and sizing
// ============================================================================

#[test]
fn dmatrix_approximates_tabulated_circle() {
    // Tabulate the unit-circle SDF on a fine grid, then compare interpolated
    // values against the closed form away from the cone apex at the center
    let n = 81;
    let axis: Vec<f64> = (0..n).map(|i| -2.0 + 4.0 * i as f64 / (n - 1) as f64).collect();
    let mut dd = Vec::with_capacity(n * n);
    for &xv in &axis {
        for &yv in &axis {
            dd.push((xv * xv + yv * yv).sqrt() - 1.0);
        }
    }

    let mut rng = test_rng();
    let queries: Vec<DVec2> = (0..200)
        .map(|_| DVec2::new(rng.gen_range(-1.8..1.8), rng.gen_range(-1.8..1.8)))
        .filter(|p| p.length() > 0.3)
        .collect();
    let d = dmatrix(&queries, &axis, &axis, &dd).unwrap();
    for (p, di) in queries.iter().zip(&d) {
        let expected = p.length() - 1.0;
        assert!(
            (di - expected).abs() < 5e-3,
            "at {:?}: got {}, want {}",
            p,
            di,
            expected
        );
    }
}

#[test]
fn huniform_is_all_ones() {
    let mut rng = test_rng();
    let points = random_points(&mut rng, 137, 5.0);
    let h = huniform(&points);
    assert_eq!(h.len(), points.len());
    assert!(h.iter().all(|&v| v == 1.0));
}

// ============================================================================
// Transforms compose with primitives
// ============================================================================

#[test]
fn pshift_moves_the_region() {
    // Evaluating a centered circle on shifted points equals evaluating a
    // shifted circle on the original points
    let mut rng = test_rng();
    let points = random_points(&mut rng, 100, 3.0);
    let shifted = pshift(&points, -1.5, 2.0);
    let a = dcircle(&shifted, 0.0, 0.0, 1.0);
    let b = dcircle(&points, 1.5, -2.0, 1.0);
    for k in 0..points.len() {
        assert!((a[k] - b[k]).abs() < 1e-12);
    }
}

#[test]
fn protate_preserves_circle_distance() {
    // A circle centered at the origin is rotation-invariant
    let mut rng = test_rng();
    let points = random_points(&mut rng, 100, 3.0);
    let rotated = protate(&points, 0.7);
    let a = dcircle(&points, 0.0, 0.0, 1.0);
    let b = dcircle(&rotated, 0.0, 0.0, 1.0);
    for k in 0..points.len() {
        assert!((a[k] - b[k]).abs() < 1e-12);
    }
}
