use std::fmt;

use super::point::Point;
use super::segment::Segment;
use super::util::{cross, EPSILON};

/// Three segments that pairwise share a vertex, with three distinct,
/// non-collinear vertices.
///
/// As with `Angle`, construction is the validity check and enumeration
/// callers skip `None`.
#[derive(Clone, Debug)]
pub struct Triangle {
    sides: [Segment; 3],
    vertices: [Point; 3],
}

impl Triangle {
    pub fn new(s1: Segment, s2: Segment, s3: Segment) -> Option<Triangle> {
        let v12 = s1.shared_vertex(&s2)?;
        let v13 = s1.shared_vertex(&s3)?;
        let v23 = s2.shared_vertex(&s3)?;
        if v12 == v13 || v12 == v23 || v13 == v23 {
            return None;
        }
        // Zero-area triple (all three vertices on one line).
        let area = cross(v13.coords() - v12.coords(), v23.coords() - v12.coords());
        if area.abs() < EPSILON {
            return None;
        }
        Some(Triangle {
            sides: [s1, s2, s3],
            vertices: [v12, v13, v23],
        })
    }

    #[inline]
    pub fn sides(&self) -> &[Segment; 3] {
        &self.sides
    }
    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    pub fn has_side(&self, s: &Segment) -> bool {
        self.sides.iter().any(|side| side == s)
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sides.iter().all(|s| other.has_side(s))
    }
}
impl Eq for Triangle {}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "triangle({}, {}, {})",
            self.vertices[0], self.vertices[1], self.vertices[2]
        )
    }
}
