use proptest::prelude::*;

use super::*;

/// Toy comparator with all four outcomes: integers relate only within the
/// same parity, ordered by magnitude, with equal magnitudes a tie.
#[derive(Clone, Copy, Debug)]
struct ParityMagnitude;

impl StructuralComparator<i32> for ParityMagnitude {
    fn compare(&self, left: &i32, right: &i32) -> Comparison {
        if left.rem_euclid(2) != right.rem_euclid(2) {
            return Comparison::Incomparable;
        }
        match left.abs().cmp(&right.abs()) {
            std::cmp::Ordering::Less => Comparison::Less,
            std::cmp::Ordering::Greater => Comparison::Greater,
            std::cmp::Ordering::Equal => Comparison::Inconclusive,
        }
    }
}

fn odd_class() -> RepresentativeClass<i32, ParityMagnitude> {
    RepresentativeClass::new(ParityMagnitude)
}

#[test]
fn first_element_becomes_canonical() {
    let mut class = odd_class();
    assert!(class.is_empty());
    assert!(class.belongs(&7));
    assert!(class.add(7));
    assert_eq!(class.canonical(), Some(&7));
    assert!(class.rest().is_empty());
    assert_eq!(class.size(), 1);
}

#[test]
fn smaller_element_replaces_the_canonical() {
    let mut class = odd_class();
    assert!(class.add(5));
    assert!(class.add(3));
    assert_eq!(class.canonical(), Some(&3));
    assert_eq!(class.rest(), &[5]);
    assert!(class.add(1));
    assert_eq!(class.canonical(), Some(&1));
    assert_eq!(class.rest(), &[5, 3]);
    assert_eq!(class.size(), 3);
}

#[test]
fn ties_and_larger_elements_join_the_rest() {
    let mut class = odd_class();
    assert!(class.add(3));
    assert!(class.add(-3)); // tie in magnitude
    assert!(class.add(9));
    assert_eq!(class.canonical(), Some(&3));
    assert_eq!(class.rest(), &[-3, 9]);
}

#[test]
fn incomparable_and_duplicate_elements_are_rejected() {
    let mut class = odd_class();
    assert!(class.add(3));
    assert!(!class.belongs(&4));
    assert!(!class.add(4));
    assert!(!class.add(3));
    assert!(class.add(5));
    assert!(!class.add(5));
    assert_eq!(class.size(), 2);
}

#[test]
fn contains_is_literal_membership() {
    let mut class = odd_class();
    class.add(3);
    class.add(7);
    assert!(class.contains(&3));
    assert!(class.contains(&7));
    // 9 belongs (same parity) but was never added.
    assert!(class.belongs(&9));
    assert!(!class.contains(&9));
    assert!(!class.contains(&4));
}

#[test]
fn remove_touches_the_rest_only() {
    let mut class = odd_class();
    class.add(3);
    class.add(7);
    class.add(9);
    assert!(!class.remove(&3)); // canonical is off-limits
    assert!(class.remove(&7));
    assert_eq!(class.rest(), &[9]);
    assert!(!class.remove(&7));
    assert!(!class.remove(&4));
}

#[test]
fn remove_canonical_promotes_the_oldest_rest_element() {
    let mut class = odd_class();
    class.add(3);
    assert!(!class.remove_canonical()); // nothing to promote
    class.add(7);
    class.add(9);
    assert!(class.remove_canonical());
    assert_eq!(class.canonical(), Some(&7));
    assert_eq!(class.rest(), &[9]);
}

#[test]
fn demote_and_set_canonical() {
    let mut class = odd_class();
    class.add(3);
    class.add(7);
    class.add(9);

    // From the rest: swaps places with the canonical.
    assert!(class.demote_and_set_canonical(9));
    assert_eq!(class.canonical(), Some(&9));
    assert_eq!(class.rest(), &[7, 3]);

    // From outside: the old canonical is demoted.
    assert!(class.demote_and_set_canonical(11));
    assert_eq!(class.canonical(), Some(&11));
    assert_eq!(class.rest(), &[7, 3, 9]);

    // Incomparable or already-canonical candidates are rejected.
    assert!(!class.demote_and_set_canonical(4));
    assert!(!class.demote_and_set_canonical(11));
}

#[test]
fn clear_variants() {
    let mut class = odd_class();
    class.add(3);
    class.add(7);
    class.clear_non_canonical();
    assert_eq!(class.canonical(), Some(&3));
    assert!(class.rest().is_empty());
    class.clear();
    assert!(class.is_empty());
}

#[test]
fn iter_yields_canonical_first() {
    let mut class = odd_class();
    class.add(5);
    class.add(3);
    class.add(9);
    let items: Vec<i32> = class.iter().copied().collect();
    assert_eq!(items, vec![3, 5, 9]);
}

#[test]
fn partition_routes_by_first_accepting_class() {
    let mut classes = EquivalenceClasses::new(ParityMagnitude);
    assert!(classes.add(3));
    assert!(classes.add(4));
    assert!(classes.add(7));
    assert!(classes.add(10));
    assert_eq!(classes.num_classes(), 2);
    assert_eq!(classes.size(), 4);

    let odd = &classes.classes()[0];
    assert_eq!(odd.canonical(), Some(&3));
    assert_eq!(odd.rest(), &[7]);
    let even = &classes.classes()[1];
    assert_eq!(even.canonical(), Some(&4));
    assert_eq!(even.rest(), &[10]);
}

#[test]
fn partition_demotes_within_the_right_class() {
    let mut classes = EquivalenceClasses::new(ParityMagnitude);
    classes.add(9);
    classes.add(4);
    classes.add(3);
    assert_eq!(classes.classes()[0].canonical(), Some(&3));
    assert_eq!(classes.classes()[0].rest(), &[9]);
    assert_eq!(classes.classes()[1].canonical(), Some(&4));
}

#[test]
fn partition_contains_and_duplicates() {
    let mut classes = EquivalenceClasses::new(ParityMagnitude);
    classes.add(3);
    classes.add(4);
    assert!(classes.contains(&3));
    assert!(classes.contains(&4));
    // Belongs to the odd class but never added.
    assert!(!classes.contains(&5));
    assert!(!classes.add(3));
    assert_eq!(classes.size(), 2);
}

proptest! {
    /// Every added element is found again; untouched elements are not.
    #[test]
    fn partition_membership_is_exact(values in proptest::collection::vec(-40i32..40, 0..24)) {
        let mut classes = EquivalenceClasses::new(ParityMagnitude);
        for &v in &values {
            classes.add(v);
        }
        for &v in &values {
            prop_assert!(classes.contains(&v));
        }
        for v in -50i32..50 {
            if !values.contains(&v) {
                prop_assert!(!classes.contains(&v));
            }
        }
        let distinct = {
            let mut seen = values.clone();
            seen.sort_unstable();
            seen.dedup();
            seen.len()
        };
        prop_assert_eq!(classes.size(), distinct);
    }
}
