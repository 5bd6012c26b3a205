//! Curated internal API surface (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for
//!   project-internal code. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across consumers.

// Primitives and oracles
pub use crate::geom::{Angle, Point, Segment, Triangle, EPSILON, GENERATED_PREFIX};
// Interning and naming
pub use crate::points::{PointDatabase, PointNamingFactory};
// Figure closure
pub use crate::closure::{discover_implicit_points, Preprocessor, SegmentTable};
// Partition engine and the angle instantiation
pub use crate::angles::{angle_classes, AngleClasses, AngleStructureComparator};
pub use crate::classes::{
    Comparison, EquivalenceClasses, RepresentativeClass, StructuralComparator,
};
// Enumeration
pub use crate::identify::{AngleIdentifier, TriangleIdentifier};
// Random figures
pub use crate::sample::{draw_figure, FigureCfg, ReplayToken};
