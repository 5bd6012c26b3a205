//! Online, comparator-driven equivalence partitioning.
//!
//! Purpose
//! - Group elements under a three-valued structural comparator, keeping one
//!   canonical (most-reduced) representative per group.
//!
//! Why not `Ord` / union-find
//! - The driving comparator is not a total order: ties (`Inconclusive`) and
//!   unrelatedness (`Incomparable`) are first-class outcomes, and membership
//!   ("not incomparable to the canonical") is deliberately not guaranteed
//!   transitive. Merging is asymmetric (driven by the per-class canonical),
//!   so insertion order affects which classes form and which element ends up
//!   canonical. This looseness is intentional domain behavior, preserved
//!   exactly.
//!
//! Code cross-refs: `angles::AngleStructureComparator` (the instantiation)

/// Outcome of a structural comparison.
///
/// `Inconclusive` means structurally related but not ordered (a tie);
/// `Incomparable` means no derivable relationship at all. Only the latter
/// excludes an element from a class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Greater,
    Inconclusive,
    Incomparable,
}

/// A three-valued structural comparator; the contract the engine runs on.
pub trait StructuralComparator<T> {
    fn compare(&self, left: &T, right: &T) -> Comparison;
}

/// One canonical element plus an unordered rest set, all compatible with the
/// canonical under the comparator.
///
/// Invariant: the canonical is the most-reduced ("smallest") representative
/// discovered so far. After a demotion it is never re-validated against the
/// rest, only against future insertions.
#[derive(Clone, Debug)]
pub struct RepresentativeClass<T, C> {
    comparator: C,
    canonical: Option<T>,
    rest: Vec<T>,
}

impl<T, C> RepresentativeClass<T, C>
where
    T: Clone + PartialEq,
    C: StructuralComparator<T>,
{
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            canonical: None,
            rest: Vec::new(),
        }
    }

    pub fn canonical(&self) -> Option<&T> {
        self.canonical.as_ref()
    }

    pub fn rest(&self) -> &[T] {
        &self.rest
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_none() && self.rest.is_empty()
    }

    pub fn size(&self) -> usize {
        self.rest.len() + usize::from(self.canonical.is_some())
    }

    pub fn clear(&mut self) {
        self.canonical = None;
        self.rest.clear();
    }

    pub fn clear_non_canonical(&mut self) {
        self.rest.clear();
    }

    /// Compatibility with this class: true for an empty class, else whenever
    /// the element is not `Incomparable` to the canonical. An `Inconclusive`
    /// relation counts as belonging.
    pub fn belongs(&self, x: &T) -> bool {
        match &self.canonical {
            None => true,
            Some(canonical) => self.comparator.compare(canonical, x) != Comparison::Incomparable,
        }
    }

    /// Insert. The first element becomes canonical; a structurally smaller
    /// element than the canonical replaces it (the old canonical is demoted
    /// into the rest); any other belonging element joins the rest.
    /// Duplicates and incomparable elements are rejected.
    pub fn add(&mut self, x: T) -> bool {
        let Some(canonical) = &self.canonical else {
            self.canonical = Some(x);
            return true;
        };
        if *canonical == x || self.rest.contains(&x) {
            return false;
        }
        match self.comparator.compare(canonical, &x) {
            Comparison::Incomparable => false,
            Comparison::Greater => {
                // x is the more reduced representative.
                if let Some(old) = self.canonical.replace(x) {
                    self.rest.push(old);
                }
                true
            }
            Comparison::Less | Comparison::Inconclusive => {
                self.rest.push(x);
                true
            }
        }
    }

    /// Literal membership: belongs *and* is the canonical or present in the
    /// rest.
    pub fn contains(&self, x: &T) -> bool {
        match &self.canonical {
            None => false,
            Some(canonical) => {
                self.belongs(x) && (canonical == x || self.rest.contains(x))
            }
        }
    }

    /// Remove from the rest only; the canonical is untouched (see
    /// `remove_canonical`).
    pub fn remove(&mut self, x: &T) -> bool {
        if !self.belongs(x) {
            return false;
        }
        match self.rest.iter().position(|e| e == x) {
            Some(i) => {
                self.rest.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drop the canonical by promoting a rest element in its place. Fails on
    /// a class with nothing to promote.
    pub fn remove_canonical(&mut self) -> bool {
        if self.rest.is_empty() {
            return false;
        }
        self.canonical = Some(self.rest.remove(0));
        true
    }

    /// Explicitly install `x` as canonical, demoting the current one into
    /// the rest. `x` may come from the rest or from outside, but must belong.
    pub fn demote_and_set_canonical(&mut self, x: T) -> bool {
        let Some(canonical) = &self.canonical else {
            return false;
        };
        if *canonical == x || !self.belongs(&x) {
            return false;
        }
        self.rest.retain(|e| e != &x);
        if let Some(old) = self.canonical.replace(x) {
            self.rest.push(old);
        }
        true
    }

    /// Canonical first, then the rest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.canonical.iter().chain(self.rest.iter())
    }
}

/// Ordered list of representative classes; the partition container.
#[derive(Clone, Debug)]
pub struct EquivalenceClasses<T, C> {
    comparator: C,
    classes: Vec<RepresentativeClass<T, C>>,
}

impl<T, C> EquivalenceClasses<T, C>
where
    T: Clone + PartialEq,
    C: StructuralComparator<T> + Clone,
{
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            classes: Vec::new(),
        }
    }

    /// Insert into the first class (creation order) that accepts the
    /// element; open a new singleton class when none does. Elements already
    /// contained anywhere are rejected.
    pub fn add(&mut self, x: T) -> bool {
        if self.contains(&x) {
            return false;
        }
        if let Some(i) = self.classes.iter().position(|class| class.belongs(&x)) {
            if self.classes[i].add(x.clone()) {
                return true;
            }
        }
        let mut class = RepresentativeClass::new(self.comparator.clone());
        class.add(x);
        self.classes.push(class);
        true
    }

    /// `belongs` finds the candidate class, but is necessary rather than
    /// sufficient: literal membership in that class is re-checked.
    pub fn contains(&self, x: &T) -> bool {
        self.classes
            .iter()
            .position(|class| class.belongs(x))
            .is_some_and(|i| self.classes[i].contains(x))
    }

    /// Total element count across classes.
    pub fn size(&self) -> usize {
        self.classes.iter().map(|class| class.size()).sum()
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn classes(&self) -> &[RepresentativeClass<T, C>] {
        &self.classes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepresentativeClass<T, C>> {
        self.classes.iter()
    }
}

#[cfg(test)]
mod tests;
