use std::fmt;

use super::point::Point;
use super::segment::Segment;

/// Two rays (segments) sharing exactly one endpoint, the vertex.
///
/// Construction is the validity check: brute-force enumeration produces far
/// more invalid candidates than angles, so `new` returns `None` for any pair
/// that does not form an angle and callers simply skip. Straight (180°)
/// angles are valid; a pair of rays that overlay one another (same direction
/// from the vertex) is not.
#[derive(Clone, Debug)]
pub struct Angle {
    ray1: Segment,
    ray2: Segment,
    vertex: Point,
    end1: Point,
    end2: Point,
}

impl Angle {
    pub fn new(ray1: Segment, ray2: Segment) -> Option<Angle> {
        let vertex = ray1.shared_vertex(&ray2)?;
        if Segment::overlays_as_ray(&ray1, &ray2) {
            return None;
        }
        let end1 = ray1.other(&vertex)?.clone();
        let end2 = ray2.other(&vertex)?.clone();
        Some(Angle {
            ray1,
            ray2,
            vertex,
            end1,
            end2,
        })
    }

    #[inline]
    pub fn vertex(&self) -> &Point {
        &self.vertex
    }
    #[inline]
    pub fn ray1(&self) -> &Segment {
        &self.ray1
    }
    #[inline]
    pub fn ray2(&self) -> &Segment {
        &self.ray2
    }
    /// Far endpoint of `ray1`.
    #[inline]
    pub fn end1(&self) -> &Point {
        &self.end1
    }
    /// Far endpoint of `ray2`.
    #[inline]
    pub fn end2(&self) -> &Point {
        &self.end2
    }

    /// Measure in degrees, in [0, 180].
    pub fn measure(&self) -> f64 {
        let u = self.end1.coords() - self.vertex.coords();
        let w = self.end2.coords() - self.vertex.coords();
        let denom = u.norm() * w.norm();
        if denom == 0.0 {
            return 0.0;
        }
        let cos = (u.dot(&w) / denom).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        (self.ray1 == other.ray1 && self.ray2 == other.ray2)
            || (self.ray1 == other.ray2 && self.ray2 == other.ray1)
    }
}
impl Eq for Angle {}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "angle({}, {}; vertex {})", self.ray1, self.ray2, self.vertex)
    }
}
