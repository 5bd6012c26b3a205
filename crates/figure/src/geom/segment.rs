use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::point::Point;
use super::util::{cross, double_eq, EPSILON};

/// An unordered pair of distinct points.
///
/// `Segment(A, B) == Segment(B, A)`; the hash combines the endpoint hashes
/// commutatively so either orientation lands in the same bucket.
#[derive(Clone, Debug)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn point1(&self) -> &Point {
        &self.a
    }
    #[inline]
    pub fn point2(&self) -> &Point {
        &self.b
    }

    pub fn length(&self) -> f64 {
        Point::distance(&self.a, &self.b)
    }

    /// Slope of the carrying line; `f64::INFINITY` for vertical segments.
    pub fn slope(&self) -> f64 {
        let dx = self.b.x() - self.a.x();
        if double_eq(dx, 0.0) {
            return f64::INFINITY;
        }
        (self.b.y() - self.a.y()) / dx
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.a.x() + self.b.x()) / 2.0,
            (self.a.y() + self.b.y()) / 2.0,
        )
    }

    /// True if `p` is one of the endpoints.
    pub fn has(&self, p: &Point) -> bool {
        self.a == *p || self.b == *p
    }

    /// The endpoint opposite `p`, if `p` is an endpoint.
    pub fn other(&self, p: &Point) -> Option<&Point> {
        if self.a == *p {
            Some(&self.b)
        } else if self.b == *p {
            Some(&self.a)
        } else {
            None
        }
    }

    /// The endpoint the two segments share; `None` if the segments are equal
    /// or share nothing.
    pub fn shared_vertex(&self, that: &Segment) -> Option<Point> {
        if self == that {
            return None;
        }
        if that.has(&self.a) {
            return Some(self.a.clone());
        }
        if that.has(&self.b) {
            return Some(self.b.clone());
        }
        None
    }

    /// Do the carrying (infinite) lines coincide?
    pub fn is_collinear_with(&self, that: &Segment) -> bool {
        self.point_on_line(that.point1()) && self.point_on_line(that.point2())
    }

    /// Distance from `p` to the carrying line is below tolerance.
    fn point_on_line(&self, p: &Point) -> bool {
        let d = self.b.coords() - self.a.coords();
        let len = d.norm();
        if len < EPSILON {
            return self.a == *p;
        }
        cross(d, p.coords() - self.a.coords()).abs() / len < EPSILON
    }

    /// Betweenness oracle: `p` lies on the closed segment (endpoints count).
    pub fn point_lies_on(&self, p: &Point) -> bool {
        between(p, &self.a, &self.b)
    }

    /// Strict betweenness: `p` lies on the segment, endpoints excluded.
    pub fn point_lies_between(&self, p: &Point) -> bool {
        self.point_lies_on(p) && !self.has(p)
    }

    /// Both endpoints of `candidate` lie on this segment.
    pub fn has_subsegment(&self, candidate: &Segment) -> bool {
        self.point_lies_on(candidate.point1()) && self.point_lies_on(candidate.point2())
    }

    /// Finite segment-segment intersection.
    ///
    /// Parallel and collinear pairs yield `None`: collinear overlap is a
    /// region, not a point, and is out of scope here. Intersections at an
    /// endpoint are reported; the caller decides whether they are news.
    pub fn intersection(&self, that: &Segment) -> Option<Point> {
        let p = self.a.coords();
        let r = self.b.coords() - p;
        let q = that.a.coords();
        let s = that.b.coords() - q;
        let denom = cross(r, s);
        if denom.abs() < EPSILON {
            return None;
        }
        let t = cross(q - p, s) / denom;
        let u = cross(q - p, r) / denom;
        if !(-EPSILON..=1.0 + EPSILON).contains(&t) || !(-EPSILON..=1.0 + EPSILON).contains(&u) {
            return None;
        }
        Some(Point::new(p.x + t * r.x, p.y + t * r.y))
    }

    /// Do the two segments overlay as rays: same origin, collinear, pointing
    /// in the same direction (one extends over the other)?
    ///
    /// Opposite directions through the shared point do not overlay; that
    /// configuration is a straight angle.
    pub fn overlays_as_ray(left: &Segment, right: &Segment) -> bool {
        if left == right {
            return true;
        }
        let Some(shared) = left.shared_vertex(right) else {
            return false;
        };
        if !left.is_collinear_with(right) {
            return false;
        }
        let (Some(other_l), Some(other_r)) = (left.other(&shared), right.other(&shared)) else {
            return false;
        };
        between(other_l, &shared, other_r) || between(other_r, &shared, other_l)
    }

    fn endpoint_hash(p: &Point) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }
}

/// `p` lies on the closed segment from `a` to `b` (distance-sum test).
pub(crate) fn between(p: &Point, a: &Point, b: &Point) -> bool {
    double_eq(
        Point::distance(a, p) + Point::distance(p, b),
        Point::distance(a, b),
    )
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.has(other.point1()) && self.has(other.point2())
    }
}
impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(
            Self::endpoint_hash(&self.a).wrapping_add(Self::endpoint_hash(&self.b)),
        );
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.a, self.b)
    }
}
