//! Figure closure: implicit points, minimal segments, collinear merges.
//!
//! Purpose
//! - Given the explicit figure (interned points + given segments), compute
//!   everything the figure implies: the points where given segments cross,
//!   the finest ("minimal") subdivision of every segment, and every larger
//!   segment derivable by merging collinear chains.
//! - Publish one interned `SegmentTable` so downstream consumers share a
//!   single canonical instance per distinct segment.
//!
//! Ordering discipline
//! - Results are deterministic given the input order: implicit points follow
//!   segment-pair enumeration order, minimal segments follow given-segment
//!   order with lexicographic splits, and the merge step scans segments in
//!   lexicographic midpoint order with a first-compatible-group rule.
//!
//! Code cross-refs: `geom::Segment` (oracles), `points::PointDatabase`

mod implicit;

use std::collections::HashMap;

use crate::geom::util::slope_eq;
use crate::geom::{Point, Segment};
use crate::points::PointDatabase;

pub use implicit::discover_implicit_points;

/// Content-addressed, insertion-ordered segment interning table.
///
/// Keyed by structural (endpoint-set) equality; each distinct segment is
/// stored exactly once and every lookup observes that single instance.
#[derive(Clone, Debug, Default)]
pub struct SegmentTable {
    order: Vec<Segment>,
    index: HashMap<Segment, usize>,
}

impl SegmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-fetch; returns the canonical instance.
    pub fn intern(&mut self, seg: Segment) -> &Segment {
        if let Some(&i) = self.index.get(&seg) {
            return &self.order[i];
        }
        let i = self.order.len();
        self.index.insert(seg.clone(), i);
        self.order.push(seg);
        &self.order[i]
    }

    pub fn get(&self, seg: &Segment) -> Option<&Segment> {
        self.index.get(seg).map(|&i| &self.order[i])
    }

    pub fn contains(&self, seg: &Segment) -> bool {
        self.index.contains_key(seg)
    }

    /// Canonical segments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// The figure-closure computation, run once at construction.
///
/// Re-reading any accessor is idempotent: all state is computed in `new` and
/// never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Preprocessor {
    points: PointDatabase,
    given: Vec<Segment>,
    implicit_points: Vec<Point>,
    minimal: Vec<Segment>,
    non_minimal: Vec<Segment>,
    table: SegmentTable,
}

impl Preprocessor {
    pub fn new(points: PointDatabase, given: Vec<Segment>) -> Self {
        let mut points = points;
        let implicit_points = discover_implicit_points(&mut points, &given);
        let minimal = minimal_segments(&points, &given);
        let non_minimal = non_minimal_segments(&minimal);
        let mut table = SegmentTable::new();
        for seg in &minimal {
            table.intern(seg.clone());
        }
        for seg in &non_minimal {
            table.intern(seg.clone());
        }
        Self {
            points,
            given,
            implicit_points,
            minimal,
            non_minimal,
            table,
        }
    }

    /// All figure points, the implicit ones included.
    pub fn points(&self) -> &PointDatabase {
        &self.points
    }

    pub fn given_segments(&self) -> &[Segment] {
        &self.given
    }

    /// Points discovered from segment crossings, in discovery order.
    pub fn implicit_points(&self) -> &[Point] {
        &self.implicit_points
    }

    /// Segments containing no known point strictly between their endpoints.
    pub fn minimal_segments(&self) -> &[Segment] {
        &self.minimal
    }

    /// Segments spanning two or more minimal segments.
    pub fn non_minimal_segments(&self) -> &[Segment] {
        &self.non_minimal
    }

    /// The unified, interned table of every segment in the figure.
    pub fn segment_table(&self) -> &SegmentTable {
        &self.table
    }
}

/// Split every given segment at each known point strictly between its
/// endpoints; a segment with no interior point is itself minimal.
///
/// The interior points come from the full database (user points and implicit
/// points alike): a given segment spanning another given point is not
/// minimal either.
fn minimal_segments(points: &PointDatabase, given: &[Segment]) -> Vec<Segment> {
    let mut minimal: Vec<Segment> = Vec::new();
    for seg in given {
        let mut stops: Vec<Point> = points
            .points()
            .filter(|p| seg.point_lies_between(p))
            .cloned()
            .collect();
        if stops.is_empty() {
            push_unique(&mut minimal, seg.clone());
            continue;
        }
        stops.push(seg.point1().clone());
        stops.push(seg.point2().clone());
        stops.sort();
        for pair in stops.windows(2) {
            push_unique(&mut minimal, Segment::new(pair[0].clone(), pair[1].clone()));
        }
    }
    minimal
}

/// Merge collinear chains of minimal segments into every derivable span.
///
/// Segments are scanned in lexicographic midpoint order and greedily
/// partitioned: a segment joins the first group whose representative slope
/// matches and with which it shares an endpoint (directly or through earlier
/// members); otherwise it opens a new group. Within a group, every unordered
/// pair merges into the segment spanning the extreme endpoints, which yields
/// the span of every sub-chain, not merely adjacent pairs.
fn non_minimal_segments(minimal: &[Segment]) -> Vec<Segment> {
    let mut sorted = minimal.to_vec();
    sorted.sort_by(|a, b| a.midpoint().cmp(&b.midpoint()));

    let mut groups: Vec<Vec<Segment>> = Vec::new();
    for seg in sorted {
        let slot = groups.iter_mut().find(|group| {
            slope_eq(group[0].slope(), seg.slope())
                && group.iter().any(|member| seg.shared_vertex(member).is_some())
        });
        match slot {
            Some(group) => group.push(seg),
            None => groups.push(vec![seg]),
        }
    }

    let mut merged: Vec<Segment> = Vec::new();
    for group in &groups {
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                push_unique(&mut merged, merge_pair(&group[i], &group[j]));
            }
        }
    }
    merged
}

/// Span of the lexicographically smallest and largest of the four endpoints.
fn merge_pair(a: &Segment, b: &Segment) -> Segment {
    let mut ends = [
        a.point1().clone(),
        a.point2().clone(),
        b.point1().clone(),
        b.point2().clone(),
    ];
    ends.sort();
    let [first, .., last] = ends;
    Segment::new(first, last)
}

fn push_unique(out: &mut Vec<Segment>, seg: Segment) {
    if !out.contains(&seg) {
        out.push(seg);
    }
}
