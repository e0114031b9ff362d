//! Boolean combinators over signed-distance arrays
//!
//! Shape-agnostic, elementwise min/max combinations of two equal-length
//! distance arrays. Near the intersections of the source boundaries the
//! result is not the true Euclidean distance to the combined region's
//! boundary; only the sign and the local gradient direction are preserved,
//! which is all the mesh-relaxation consumer needs.
//!
//! Author: Moroya Sakamoto

mod difference;
mod elementwise;
mod intersection;
mod union;

pub use difference::ddiff;
pub use elementwise::{elementwise_max, elementwise_min, elementwise_neg};
pub use intersection::dintersect;
pub use union::dunion;
