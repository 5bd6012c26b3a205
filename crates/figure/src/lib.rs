//! Figure closure and angle-structure partitioning.
//!
//! Given a geometric figure (named points plus user-drawn segments), this
//! crate computes the figure's full closure — implicit intersection points,
//! minimal segments, collinear merges — and partitions the figure's angles
//! into classes of structurally equivalent angles. The closure is the
//! substrate a downstream reasoning or tutoring component enumerates figure
//! properties from.
//!
//! Pipeline: `geom` primitives → `closure::Preprocessor` (segment table) →
//! `angles::AngleStructureComparator` → `classes::EquivalenceClasses`.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod angles;
pub mod api;
pub mod classes;
pub mod closure;
pub mod geom;
pub mod identify;
pub mod points;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angles::{angle_classes, AngleClasses, AngleStructureComparator};
    pub use crate::classes::{Comparison, EquivalenceClasses, RepresentativeClass};
    pub use crate::closure::{Preprocessor, SegmentTable};
    pub use crate::geom::{Angle, Point, Segment, Triangle, EPSILON};
    pub use crate::identify::{AngleIdentifier, TriangleIdentifier};
    pub use crate::points::{PointDatabase, PointNamingFactory};
}
