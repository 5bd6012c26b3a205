//! Point interning and deterministic synthetic naming.
//!
//! Purpose
//! - `PointNamingFactory` is the single table mapping coordinates to one
//!   canonical `Point` per location, and the generator of synthetic names
//!   for points the user never named (implicit intersection points).
//! - `PointDatabase` decorates the factory with name-based lookup and is the
//!   interface the closure pipeline consumes and extends.
//!
//! Naming rule
//! - First name wins: a stored name is never overwritten, but a real name
//!   may replace "unnamed". Synthetic names run `*_A`..`*_Z`, `*_AA`..,
//!   one letter repeated, strictly monotonic per factory, never reused.

use std::collections::HashMap;

use crate::geom::{Point, GENERATED_PREFIX};

/// Insert-or-fetch table of canonical points plus the synthetic name sequence.
#[derive(Clone, Debug)]
pub struct PointNamingFactory {
    order: Vec<Point>,
    index: HashMap<Point, usize>,
    letter: char,
    width: usize,
}

impl Default for PointNamingFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PointNamingFactory {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
            letter: 'A',
            width: 1,
        }
    }

    pub fn with_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut factory = Self::new();
        for p in points {
            factory.put(p);
        }
        factory
    }

    /// Insert-or-fetch. Returns the canonical point for the coordinates.
    ///
    /// If the point is already stored, the stored name is preserved, except
    /// that a named insert upgrades a stored unnamed point.
    pub fn put(&mut self, pt: Point) -> Point {
        if let Some(&i) = self.index.get(&pt) {
            if self.order[i].is_unnamed() {
                if let Some(name) = pt.name() {
                    self.order[i].set_name(name.to_string());
                }
            }
            return self.order[i].clone();
        }
        let i = self.order.len();
        self.index.insert(pt.clone(), i);
        self.order.push(pt);
        self.order[i].clone()
    }

    /// Insert-or-fetch for a bare coordinate pair; a new point receives the
    /// next synthetic name.
    pub fn put_coords(&mut self, x: f64, y: f64) -> Point {
        let probe = Point::new(x, y);
        if let Some(&i) = self.index.get(&probe) {
            return self.order[i].clone();
        }
        let name = self.next_synthetic_name();
        self.put(Point::named(name, x, y))
    }

    /// Read-only lookup by structural equality.
    pub fn get(&self, pt: &Point) -> Option<&Point> {
        self.index.get(pt).map(|&i| &self.order[i])
    }

    pub fn get_coords(&self, x: f64, y: f64) -> Option<&Point> {
        self.get(&Point::new(x, y))
    }

    pub fn contains(&self, pt: &Point) -> bool {
        self.index.contains_key(pt)
    }

    /// Next name in the synthetic sequence (prefix included); advances the
    /// sequence. Names are consumed exactly once and never revisited.
    pub fn next_synthetic_name(&mut self) -> String {
        let body: String = std::iter::repeat(self.letter).take(self.width).collect();
        if self.letter < 'Z' {
            self.letter = (self.letter as u8 + 1) as char;
        } else {
            self.letter = 'A';
            self.width += 1;
        }
        format!("{GENERATED_PREFIX}{body}")
    }

    /// All canonical points in insertion order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Bi-directional point database: coordinates to name and name to
/// coordinates, deferring all storage to the naming factory.
#[derive(Clone, Debug, Default)]
pub struct PointDatabase {
    factory: PointNamingFactory,
}

impl PointDatabase {
    pub fn new() -> Self {
        Self {
            factory: PointNamingFactory::new(),
        }
    }

    pub fn with_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            factory: PointNamingFactory::with_points(points),
        }
    }

    pub fn put(&mut self, name: impl Into<String>, x: f64, y: f64) -> Point {
        self.factory.put(Point::named(name, x, y))
    }

    pub fn put_point(&mut self, pt: Point) -> Point {
        self.factory.put(pt)
    }

    /// Intern a discovered coordinate pair, generating a synthetic name if
    /// the location is new.
    pub fn intern_generated(&mut self, x: f64, y: f64) -> Point {
        self.factory.put_coords(x, y)
    }

    pub fn get(&self, pt: &Point) -> Option<&Point> {
        self.factory.get(pt)
    }

    pub fn get_coords(&self, x: f64, y: f64) -> Option<&Point> {
        self.factory.get_coords(x, y)
    }

    /// Name of the point at `(x, y)`, if stored and named.
    pub fn name_of(&self, x: f64, y: f64) -> Option<&str> {
        self.get_coords(x, y).and_then(|p| p.name())
    }

    /// Linear lookup by display name.
    pub fn point_named(&self, name: &str) -> Option<&Point> {
        self.factory.points().find(|p| p.name() == Some(name))
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.factory.points()
    }

    pub fn len(&self) -> usize {
        self.factory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factory.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_names_run_a_to_z_then_doubled() {
        let mut factory = PointNamingFactory::new();
        assert_eq!(factory.next_synthetic_name(), "*_A");
        assert_eq!(factory.next_synthetic_name(), "*_B");
        for _ in 0..23 {
            factory.next_synthetic_name();
        }
        assert_eq!(factory.next_synthetic_name(), "*_Z");
        assert_eq!(factory.next_synthetic_name(), "*_AA");
        assert_eq!(factory.next_synthetic_name(), "*_BB");
    }

    #[test]
    fn first_name_wins_and_unnamed_upgrades() {
        let mut factory = PointNamingFactory::new();
        factory.put(Point::new(1.0, 2.0));
        // A real name upgrades the stored unnamed point.
        let named = factory.put(Point::named("P", 1.0, 2.0));
        assert_eq!(named.name(), Some("P"));
        // But a second name never overwrites the first.
        let again = factory.put(Point::named("Q", 1.0, 2.0));
        assert_eq!(again.name(), Some("P"));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn put_coords_interns_and_names_once() {
        let mut factory = PointNamingFactory::new();
        let first = factory.put_coords(3.0, 3.0);
        assert_eq!(first.name(), Some("*_A"));
        assert!(first.is_generated());
        // Same location: same point, no new name consumed.
        let second = factory.put_coords(3.0, 3.0);
        assert_eq!(second.name(), Some("*_A"));
        let other = factory.put_coords(4.0, 4.0);
        assert_eq!(other.name(), Some("*_B"));
    }

    #[test]
    fn tolerance_equal_coordinates_share_one_entry() {
        let mut factory = PointNamingFactory::new();
        factory.put(Point::named("A", 2.0, 0.0));
        let fetched = factory.put(Point::new(2.0 + 1e-9, 0.0 - 1e-9));
        assert_eq!(fetched.name(), Some("A"));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn database_lookups_both_directions() {
        let mut db = PointDatabase::new();
        db.put("A", 0.0, 0.0);
        db.put("B", 4.0, 0.0);
        assert_eq!(db.name_of(4.0, 0.0), Some("B"));
        assert_eq!(db.point_named("A").map(|p| (p.x(), p.y())), Some((0.0, 0.0)));
        assert!(db.get_coords(1.0, 1.0).is_none());
        assert_eq!(db.len(), 2);
    }
}
