//! Structural comparison of angles and the angle partition.
//!
//! "Angle X is structurally contained in angle Y" when both of X's rays are
//! subsegments of Y's rays from the same vertex:
//!
//! ```text
//!    A-------B----C-----------D
//!     \
//!      \
//!       \
//!        E
//!         \
//!          \
//!           F
//! ```
//!
//! Here BAE is the structurally smallest angle at A and DAF the largest:
//! BAE < CAE, BAE < DAF, CAF < DAF. CAE and BAF are related but not ordered
//! (one ray longer, the other shorter): `Inconclusive`. Angles sharing no
//! ray lines, or with different measures, are `Incomparable`.
//!
//! Code cross-refs: `classes::{Comparison, StructuralComparator}`

use crate::classes::{Comparison, EquivalenceClasses, StructuralComparator};
use crate::geom::util::double_eq;
use crate::geom::{Angle, Point, Segment, EPSILON};

/// The comparator driving the angle partition.
#[derive(Clone, Copy, Debug, Default)]
pub struct AngleStructureComparator;

impl StructuralComparator<Angle> for AngleStructureComparator {
    fn compare(&self, left: &Angle, right: &Angle) -> Comparison {
        let measure = left.measure();
        if !double_eq(measure, right.measure()) {
            return Comparison::Incomparable;
        }

        // Each left ray needs a corresponder among the right rays (same
        // carrying line).
        let Some(corr1) = corresponder(left.ray1(), right) else {
            return Comparison::Incomparable;
        };
        let Some(corr2) = corresponder(left.ray2(), right) else {
            return Comparison::Incomparable;
        };

        // Corresponding rays must point the same way from the vertex, or the
        // angles are merely vertical/opposite configurations on the same
        // lines. A straight angle has no sidedness to check.
        if !double_eq(measure, 180.0) {
            let vertex = left.vertex();
            for (end, corr) in [(left.end1(), corr1), (left.end2(), corr2)] {
                let Some(far) = corr.other(vertex) else {
                    return Comparison::Incomparable;
                };
                if !same_side(vertex, end, far) {
                    return Comparison::Incomparable;
                }
            }
        }

        let (l1, l2) = (left.ray1().length(), left.ray2().length());
        let (r1, r2) = (corr1.length(), corr2.length());
        if l1 >= r1 - EPSILON && l2 >= r2 - EPSILON {
            return Comparison::Greater;
        }
        if l1 <= r1 + EPSILON && l2 <= r2 + EPSILON {
            return Comparison::Less;
        }
        Comparison::Inconclusive
    }
}

/// First right ray collinear with `ray`, if any.
fn corresponder<'a>(ray: &Segment, right: &'a Angle) -> Option<&'a Segment> {
    if ray.is_collinear_with(right.ray1()) {
        Some(right.ray1())
    } else if ray.is_collinear_with(right.ray2()) {
        Some(right.ray2())
    } else {
        None
    }
}

/// Far endpoints `a` and `b` lie on the same side of `vertex`: their mutual
/// distance must not exceed both of their distances to the vertex.
fn same_side(vertex: &Point, a: &Point, b: &Point) -> bool {
    let d = Point::distance(a, b);
    d <= Point::distance(a, vertex).max(Point::distance(b, vertex)) + EPSILON
}

/// Partition of a figure's angles into structural-containment classes.
pub type AngleClasses = EquivalenceClasses<Angle, AngleStructureComparator>;

pub fn angle_classes() -> AngleClasses {
    EquivalenceClasses::new(AngleStructureComparator)
}
