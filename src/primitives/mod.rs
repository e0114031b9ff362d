//! Primitive signed-distance evaluators
//!
//! Closed-form (or numerically projected) distance from a batch of query
//! points to a single geometric shape. Every function returns one value per
//! point: negative inside, zero on the boundary, positive outside.
//!
//! Degenerate shape parameters (zero radius, zero-length segments,
//! self-intersecting polygons) are documented preconditions, not runtime
//! checks; behavior for such inputs is undefined.
//!
//! Author: Moroya Sakamoto

mod block;
mod circle;
mod ellipse;
mod polygon;
mod rectangle;
mod segment;
mod sphere;

pub use block::dblock;
pub use circle::dcircle;
pub use ellipse::{dellipse, dellipsoid};
pub use polygon::{dpoly, point_in_polygon};
pub use rectangle::{drectangle, drectangle0};
pub use segment::{dsegment, dsegment_min, segment_distance};
pub use sphere::dsphere;
