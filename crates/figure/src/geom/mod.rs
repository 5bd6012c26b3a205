//! Geometric value types and epsilon-tolerant oracles.
//!
//! Purpose
//! - Provide the immutable primitives (`Point`, `Segment`, `Angle`,
//!   `Triangle`) the closure pipeline is built from, with equality, ordering,
//!   and intersection semantics that are numerically explicit (eps-aware).
//!
//! Why eps-tolerant equality
//! - Implicit points are computed from intersections and must compare equal
//!   to user points at the same location even when floating-point noise is
//!   present. Equality and hashing therefore bucket coordinates on an
//!   epsilon grid and never look at names or identity.
//!
//! Code cross-refs: `points::PointDatabase`, `closure::Preprocessor`

mod angle;
mod point;
mod segment;
mod triangle;
pub(crate) mod util;

pub use angle::Angle;
pub use point::{Point, GENERATED_PREFIX};
pub use segment::Segment;
pub use triangle::Triangle;
pub use util::EPSILON;
