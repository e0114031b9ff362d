//! # ALICE-DistMesh
//!
//! Signed-distance and mesh-sizing functions used as the geometric layer of a
//! 2D/3D unstructured-mesh generator.
//!
//! Every entry point maps a batch of query points to one real value per point:
//! the signed distance to a region boundary (negative inside, zero on the
//! boundary, positive outside) or a local mesh-size target. The mesh-relaxation
//! loop that consumes these fields lives elsewhere; this crate is the pure,
//! stateless geometry underneath it.
//!
//! ## Features
//!
//! - **Primitives**: circle, sphere, rectangle (two corner variants), block,
//!   segment, polygon, ellipse, ellipsoid
//! - **Combinators**: union, intersection, difference over distance arrays
//! - **Level-set projection**: signed distance to the zero set of an arbitrary
//!   twice-differentiable scalar field, via damped Newton iteration
//! - **Grid fields**: bilinear/trilinear interpolation of tabulated distance
//!   and sizing values
//! - **Point transforms**: batch rotation and shift
//!
//! ## Example
//!
//! ```rust
//! use alice_distmesh::prelude::*;
//! use glam::DVec2;
//!
//! // Unit circle with a rectangular notch cut out of the right half.
//! let points = vec![DVec2::new(0.0, 0.0), DVec2::new(0.9, 0.0), DVec2::new(2.0, 0.0)];
//! let d1 = dcircle(&points, 0.0, 0.0, 1.0);
//! let d2 = drectangle(&points, 0.5, 1.5, -0.25, 0.25);
//! let d = ddiff(&d1, &d2);
//!
//! assert!(d[0] < 0.0); // centre stays inside
//! assert!(d[1] > 0.0); // notch carved out
//! assert!(d[2] > 0.0); // outside everything
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod primitives;
pub mod operations;
pub mod field;
pub mod levelset;
pub mod grid;
pub mod sizing;
pub mod transform;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::field::FieldExpr;
    pub use crate::grid::{dmatrix, dmatrix3d, interp2_linear, interp3_linear, GridError};
    pub use crate::levelset::{
        dexpr, dexpr_parallel, LevelSet, DEFAULT_NEWTON_DAMPING, DEFAULT_NEWTON_ITERATIONS,
    };
    pub use crate::operations::{
        ddiff, dintersect, dunion, elementwise_max, elementwise_min, elementwise_neg,
    };
    pub use crate::primitives::{
        dblock, dcircle, dellipse, dellipsoid, dpoly, drectangle, drectangle0, dsegment,
        dsegment_min, dsphere, point_in_polygon, segment_distance,
    };
    pub use crate::sizing::{hmatrix, hmatrix3d, huniform};
    pub use crate::transform::{protate, pshift};
    pub use glam::{DVec2, DVec3};
}

// Re-exports for convenience
pub use field::FieldExpr;
pub use levelset::{dexpr, LevelSet};
pub use operations::{ddiff, dintersect, dunion};
