use nalgebra::Vector2;

/// Coordinate tolerance shared by all equality and containment oracles.
pub const EPSILON: f64 = 1e-6;

#[inline]
pub(crate) fn double_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Slope comparison; two vertical segments (infinite slope) match.
#[inline]
pub(crate) fn slope_eq(a: f64, b: f64) -> bool {
    (a.is_infinite() && b.is_infinite()) || double_eq(a, b)
}

/// Bucket a coordinate on the epsilon grid for hashing.
///
/// Tolerance-equal values land in the same bucket as long as they do not
/// straddle a grid boundary; figures built from lattice points and rational
/// intersections reproduce coordinates bit-identically, so this holds in
/// practice.
#[inline]
pub(crate) fn coord_key(v: f64) -> i64 {
    (v / EPSILON).round() as i64
}

/// z-component of the 2D cross product.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
