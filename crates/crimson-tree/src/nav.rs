//! In-order navigation over the node graph.
//!
//! These walks are the sole mechanism for iteration: amortized O(1) per
//! step over a full traversal, worst-case O(log n), no extra space.

use crate::arena::Arena;

/// Leftmost node under `root`.
pub(crate) fn first<K>(arena: &Arena<K>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena.node(curr).l {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub(crate) fn last<K>(arena: &Arena<K>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena.node(curr).r {
        curr = r;
    }
    Some(curr)
}

/// In-order successor: leftmost of the right subtree, or the first
/// ancestor reached by crossing a left-child edge. `None` from the
/// maximum node.
pub(crate) fn next<K>(arena: &Arena<K>, node: u32) -> Option<u32> {
    if let Some(r) = arena.node(node).r {
        return first(arena, Some(r));
    }
    let mut curr = node;
    while let Some(p) = arena.node(curr).p {
        if arena.node(p).l == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// In-order predecessor. Mirror of [`next`].
pub(crate) fn prev<K>(arena: &Arena<K>, node: u32) -> Option<u32> {
    if let Some(l) = arena.node(node).l {
        return last(arena, Some(l));
    }
    let mut curr = node;
    while let Some(p) = arena.node(curr).p {
        if arena.node(p).r == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// The other child of `node`'s parent, or `None` at the root.
pub(crate) fn sibling<K>(arena: &Arena<K>, node: u32) -> Option<u32> {
    let p = arena.node(node).p?;
    if arena.node(p).l == Some(node) {
        arena.node(p).r
    } else {
        arena.node(p).l
    }
}
