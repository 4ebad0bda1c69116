use proptest::prelude::*;

use crimson_tree::RbSet;

#[test]
fn insert_reports_position_and_newness() {
    let mut set = RbSet::new();

    let (cursor, added) = set.insert(5);
    assert!(added);
    assert_eq!(cursor.key().unwrap(), &5);

    let (cursor, added) = set.insert(5);
    assert!(!added);
    assert_eq!(cursor.key().unwrap(), &5);
    assert_eq!(set.size(), 1);
    set.assert_valid().unwrap();
}

#[test]
fn duplicate_insert_changes_nothing() {
    let mut set: RbSet<i32> = [1, 2, 3].into();
    let before: Vec<i32> = set.iter().copied().collect();

    let (_, added) = set.insert(2);
    assert!(!added);
    assert_eq!(set.size(), 3);
    let after: Vec<i32> = set.iter().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn find_round_trip() {
    let mut set = RbSet::new();
    set.insert("carrot".to_string());

    let found = set.find(&"carrot".to_string());
    assert_eq!(found.key().unwrap(), "carrot");

    set.erase(&"carrot".to_string());
    assert!(set.find(&"carrot".to_string()).is_end());
    assert!(!set.has(&"carrot".to_string()));
}

#[test]
fn bound_queries() {
    let set: RbSet<i32> = [2, 20, 17, 12, 3, 6, 13, 10].into();

    assert_eq!(set.lower_bound(&5).key().unwrap(), &6);
    assert_eq!(set.lower_bound(&6).key().unwrap(), &6);
    assert_eq!(set.upper_bound(&6).key().unwrap(), &10);
    assert_eq!(set.upper_bound(&5).key().unwrap(), &6);

    assert_eq!(set.lower_bound(&0).key().unwrap(), &2);
    assert!(set.lower_bound(&21).is_end());
    assert!(set.upper_bound(&20).is_end());
}

#[test]
fn equal_range_on_a_present_key() {
    let set: RbSet<i32> = [2, 3, 6, 10, 12, 13, 17, 20].into();
    let (lo, hi) = set.equal_range(&6);
    assert_eq!(lo.key().unwrap(), &6);
    assert_eq!(hi.key().unwrap(), &10);
    assert!(lo != hi);
}

#[test]
fn equal_range_on_an_absent_key_is_an_identical_pair() {
    let set: RbSet<i32> = [2, 3, 6, 10].into();
    let (lo, hi) = set.equal_range(&5);
    // Not merely equivalent positions: the very same tree, direction,
    // and node.
    assert_eq!(lo, hi);
    assert_eq!(lo.key().unwrap(), &6);
}

#[test]
fn bulk_insert_counts_new_keys_only() {
    let mut set = RbSet::new();
    assert_eq!(set.insert_all([1, 2, 3]), 3);
    assert_eq!(set.insert_all([3, 4, 4, 5]), 2);

    let borrowed = [5, 6, 7];
    assert_eq!(set.insert_cloned(borrowed.iter()), 2);
    assert_eq!(set.size(), 7);
    set.assert_valid().unwrap();
}

#[test]
fn bulk_erase_counts_found_keys_only() {
    let mut set: RbSet<i32> = (0..10).collect();
    assert_eq!(set.erase_all([3, 4, 40].iter()), 2);
    assert_eq!(set.size(), 8);
    set.assert_valid().unwrap();
}

#[test]
fn assign_replaces_contents() {
    let mut set: RbSet<i32> = (0..10).collect();
    set.assign([7, 8, 9]);
    let keys: Vec<i32> = set.iter().copied().collect();
    assert_eq!(keys, vec![7, 8, 9]);
    set.assert_valid().unwrap();
}

#[test]
fn clear_empties() {
    let mut set: RbSet<i32> = (0..10).collect();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.size(), 0);
    assert!(set.iter().next().is_none());

    set.insert(1);
    assert_eq!(set.size(), 1);
    set.assert_valid().unwrap();
}

#[test]
fn construction_surface() {
    let single: RbSet<i32> = 7.into();
    assert_eq!(single.size(), 1);
    assert!(single.has(&7));

    let from_array: RbSet<i32> = [3, 1, 2].into();
    let collected: RbSet<i32> = vec![1, 2, 3].into_iter().collect();
    assert!(from_array == collected);

    let mut extended = RbSet::new();
    extended.extend([1, 2]);
    extended.extend([&2, &3]);
    assert!(extended == collected);
}

#[test]
fn custom_comparator_orders_iteration() {
    let mut set = RbSet::with_comparator(|a: &i32, b: &i32| b - a);
    set.insert_all([1, 2, 3, 4]);
    set.assert_valid().unwrap();

    let keys: Vec<i32> = set.iter().copied().collect();
    assert_eq!(keys, vec![4, 3, 2, 1]);
    assert!(set.has(&3));
    assert!(set.erase(&4).1);
    assert_eq!(set.size(), 3);
}

proptest! {
    #[test]
    fn iteration_is_sorted_and_deduplicated(keys in proptest::collection::vec(-500i32..500, 0..64)) {
        let set: RbSet<i32> = keys.iter().copied().collect();
        set.assert_valid().unwrap();

        let mut expected = keys.clone();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(set.size(), expected.len());
        let got: Vec<i32> = set.iter().copied().collect();
        prop_assert_eq!(got, expected);
    }
}
