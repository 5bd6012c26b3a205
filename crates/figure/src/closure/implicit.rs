use crate::geom::{Point, Segment};
use crate::points::PointDatabase;

/// Discover the points implied by crossings of the given segments.
///
/// Every unordered pair of given segments is tested, in enumeration order,
/// for a finite intersection. A crossing at a location the database already
/// knows (a user point, a segment endpoint, or an earlier discovery) is not
/// news and is skipped; a genuinely new location is interned into the shared
/// database under the next synthetic name.
///
/// Collinear pairs never produce an implicit point here: their overlap is a
/// region, not a point, and the intersection oracle reports `None` for them.
pub fn discover_implicit_points(points: &mut PointDatabase, given: &[Segment]) -> Vec<Point> {
    let mut found = Vec::new();
    for i in 0..given.len() {
        for j in (i + 1)..given.len() {
            let Some(at) = given[i].intersection(&given[j]) else {
                continue;
            };
            if points.get(&at).is_some() {
                continue;
            }
            found.push(points.intern_generated(at.x(), at.y()));
        }
    }
    found
}
