//! Brute-force angle and triangle identification over the segment table.
//!
//! Candidate generation is exhaustive (all segment pairs / triples) and
//! filtering happens through construction: an invalid candidate is the
//! common case, not an error, so `Angle::new` / `Triangle::new` returning
//! `None` simply skips it. Results are memoized per identifier.

use std::cell::OnceCell;

use crate::angles::{angle_classes, AngleClasses};
use crate::closure::SegmentTable;
use crate::geom::{Angle, Triangle};

/// Enumerates every angle in the figure, partitioned structurally.
pub struct AngleIdentifier<'a> {
    segments: &'a SegmentTable,
    memo: OnceCell<AngleClasses>,
}

impl<'a> AngleIdentifier<'a> {
    pub fn new(segments: &'a SegmentTable) -> Self {
        Self {
            segments,
            memo: OnceCell::new(),
        }
    }

    /// Compute on first request; subsequent calls return the cached result.
    pub fn angles(&self) -> &AngleClasses {
        self.memo.get_or_init(|| {
            let mut classes = angle_classes();
            let segments: Vec<_> = self.segments.iter().collect();
            for i in 0..segments.len() {
                for j in (i + 1)..segments.len() {
                    if let Some(angle) = Angle::new(segments[i].clone(), segments[j].clone()) {
                        classes.add(angle);
                    }
                }
            }
            classes
        })
    }
}

/// Enumerates every triangle in the figure.
pub struct TriangleIdentifier<'a> {
    segments: &'a SegmentTable,
    memo: OnceCell<Vec<Triangle>>,
}

impl<'a> TriangleIdentifier<'a> {
    pub fn new(segments: &'a SegmentTable) -> Self {
        Self {
            segments,
            memo: OnceCell::new(),
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        self.memo.get_or_init(|| {
            let mut triangles = Vec::new();
            let segments: Vec<_> = self.segments.iter().collect();
            for i in 0..segments.len() {
                for j in (i + 1)..segments.len() {
                    for k in (j + 1)..segments.len() {
                        if let Some(triangle) = Triangle::new(
                            segments[i].clone(),
                            segments[j].clone(),
                            segments[k].clone(),
                        ) {
                            triangles.push(triangle);
                        }
                    }
                }
            }
            triangles
        })
    }
}
