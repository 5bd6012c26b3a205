use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::util::{coord_key, double_eq};

/// Marker prepended to every synthetic name so generated points are visually
/// distinguishable from user names and can never collide with them.
pub const GENERATED_PREFIX: &str = "*_";

/// A named 2D point.
///
/// Equality and hashing are epsilon-tolerant on the coordinates only; the
/// name never participates. Ordering is lexicographic on `(x, y)`.
#[derive(Clone, Debug)]
pub struct Point {
    x: f64,
    y: f64,
    name: Option<String>,
}

impl Point {
    /// An unnamed point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, name: None }
    }

    /// A named point; an empty name is treated as unnamed.
    pub fn named(name: impl Into<String>, x: f64, y: f64) -> Self {
        let name = name.into();
        let name = if name.is_empty() { None } else { Some(name) };
        Self { x, y, name }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True if no name has been assigned at all.
    #[inline]
    pub fn is_unnamed(&self) -> bool {
        self.name.is_none()
    }

    /// True if the name was produced by the naming factory rather than a user.
    #[inline]
    pub fn is_generated(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|n| n.starts_with(GENERATED_PREFIX))
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn distance(a: &Point, b: &Point) -> f64 {
        (a.coords() - b.coords()).norm()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        double_eq(self.x, other.x) && double_eq(self.y, other.y)
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(coord_key(self.x));
        state.write_i64(coord_key(self.y));
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(n) => write!(f, "{}({}, {})", n, self.x, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
