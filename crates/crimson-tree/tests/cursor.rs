use crimson_tree::{CursorError, Edge, RbSet};

#[test]
fn forward_traversal() {
    let set: RbSet<i32> = [3, 1, 4, 1, 5, 9, 2, 6].into();
    let mut cursor = set.cursor();

    let mut keys = Vec::new();
    while !cursor.is_end() {
        keys.push(*cursor.key().unwrap());
        cursor.advance().unwrap();
    }
    assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn reverse_traversal() {
    let set: RbSet<i32> = [3, 1, 4, 5, 9, 2, 6].into();
    let mut cursor = set.cursor_rev();
    assert!(cursor.is_reversed());

    let mut keys = Vec::new();
    while !cursor.is_end() {
        keys.push(*cursor.key().unwrap());
        cursor.advance().unwrap();
    }
    assert_eq!(keys, vec![9, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn retreating_an_end_cursor_lands_on_the_extremum() {
    let set: RbSet<i32> = [10, 20, 30].into();

    let mut end = set.end();
    end.retreat().unwrap();
    assert_eq!(end.key().unwrap(), &30);

    let mut rend = set.rend();
    rend.retreat().unwrap();
    assert_eq!(rend.key().unwrap(), &10);
}

#[test]
fn boundary_violations_are_reported() {
    let set: RbSet<i32> = [10, 20].into();

    let mut begin = set.cursor();
    assert_eq!(begin.retreat(), Err(CursorError::PastBegin(Edge::Begin)));
    // The failed retreat leaves the cursor in place.
    assert_eq!(begin.key().unwrap(), &10);

    let mut end = set.end();
    assert_eq!(end.advance(), Err(CursorError::PastEnd(Edge::End)));
    assert_eq!(end.key(), Err(CursorError::Dereference(Edge::End)));

    let mut rbegin = set.cursor_rev();
    assert_eq!(rbegin.retreat(), Err(CursorError::PastBegin(Edge::RBegin)));

    let mut rend = set.rend();
    assert_eq!(rend.advance(), Err(CursorError::PastEnd(Edge::REnd)));
    assert_eq!(rend.key(), Err(CursorError::Dereference(Edge::REnd)));
}

#[test]
fn empty_set_cursors() {
    let set: RbSet<i32> = RbSet::new();

    let mut cursor = set.cursor();
    assert!(cursor.is_end());
    assert_eq!(cursor.advance(), Err(CursorError::Empty));
    assert_eq!(cursor.retreat(), Err(CursorError::Empty));
    assert_eq!(cursor.key(), Err(CursorError::Dereference(Edge::End)));
}

#[test]
fn cursor_equality_requires_set_direction_and_position() {
    let a: RbSet<i32> = [1].into();
    let b: RbSet<i32> = [1].into();

    assert_eq!(a.cursor(), a.cursor());
    assert_eq!(a.end(), a.end());

    // Same node, opposite directions.
    assert_ne!(a.cursor(), a.cursor_rev());
    assert_ne!(a.end(), a.rend());

    // Equal sets are still distinct containers.
    assert_ne!(a.cursor(), b.cursor());

    let mut walked = a.cursor();
    walked.advance().unwrap();
    assert_eq!(walked, a.end());
}

#[test]
fn span_erase_from_second_element_to_end() {
    let mut set: RbSet<i32> = [2, 20, 17, 12, 3, 6, 13, 10].into();

    let mut from = set.cursor();
    from.advance().unwrap();
    let span = from.span_to(&set.end());

    assert_eq!(set.erase_span(span), 7);
    let keys: Vec<i32> = set.iter().copied().collect();
    assert_eq!(keys, vec![2]);
    set.assert_valid().unwrap();
}

#[test]
fn span_erase_of_an_interior_range() {
    let mut set: RbSet<i32> = (0..10).collect();

    let span = set.find(&2).span_to(&set.find(&7));
    assert_eq!(set.erase_span(span), 5);

    let keys: Vec<i32> = set.iter().copied().collect();
    assert_eq!(keys, vec![0, 1, 7, 8, 9]);
    set.assert_valid().unwrap();
}

#[test]
fn empty_span_erases_nothing() {
    let mut set: RbSet<i32> = (0..5).collect();

    let span = set.end().span_to(&set.end());
    assert_eq!(set.erase_span(span), 0);

    let at = set.find(&3);
    let span = at.span_to(&at);
    assert_eq!(set.erase_span(span), 0);
    assert_eq!(set.size(), 5);
}

#[test]
fn double_ended_iteration() {
    let set: RbSet<i32> = (0..6).collect();

    let mut iter = set.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let reversed: Vec<i32> = set.iter().rev().copied().collect();
    assert_eq!(reversed, vec![5, 4, 3, 2, 1, 0]);
}
