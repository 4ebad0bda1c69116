//! Red-black rebalancing: rotations and the insert/erase fixup loops.
//!
//! Every function operates on arena indices. Rotations reattach the risen
//! node under the old parent and return its index; callers promote it to
//! tree root when it comes back parentless. Both fixups are total over a
//! structurally valid tree: the insert loop performs at most one rotation
//! pass, and the erase loop strictly moves the black-height deficit toward
//! the root.

use crate::arena::Arena;
use crate::nav;

#[inline]
fn is_red<K>(arena: &Arena<K>, node: Option<u32>) -> bool {
    node.map(|i| !arena.node(i).black).unwrap_or(false)
}

/// Rotates `n` with its right child. The child rises into `n`'s position
/// and is returned.
fn rotate_left<K>(arena: &mut Arena<K>, n: u32) -> u32 {
    let r = arena.node(n).r.expect("left rotation pivot has a right child");
    let rl = arena.node(r).l;
    let p = arena.node(n).p;

    arena.node_mut(n).r = rl;
    if let Some(rl) = rl {
        arena.node_mut(rl).p = Some(n);
    }

    arena.node_mut(r).l = Some(n);
    arena.node_mut(n).p = Some(r);

    arena.node_mut(r).p = p;
    if let Some(p) = p {
        if arena.node(p).l == Some(n) {
            arena.node_mut(p).l = Some(r);
        } else {
            arena.node_mut(p).r = Some(r);
        }
    }
    r
}

/// Rotates `n` with its left child. Mirror of [`rotate_left`].
fn rotate_right<K>(arena: &mut Arena<K>, n: u32) -> u32 {
    let l = arena.node(n).l.expect("right rotation pivot has a left child");
    let lr = arena.node(l).r;
    let p = arena.node(n).p;

    arena.node_mut(n).l = lr;
    if let Some(lr) = lr {
        arena.node_mut(lr).p = Some(n);
    }

    arena.node_mut(l).r = Some(n);
    arena.node_mut(n).p = Some(l);

    arena.node_mut(l).p = p;
    if let Some(p) = p {
        if arena.node(p).l == Some(n) {
            arena.node_mut(p).l = Some(l);
        } else {
            arena.node_mut(p).r = Some(l);
        }
    }
    l
}

/// Restores the no-red-child rule after attaching the red leaf `n`.
/// Returns the tree root, which may have changed.
///
/// While the parent is red, a red uncle means recolor and push the
/// conflict two levels up; a black (or absent) uncle is terminal: one
/// rotation pass, shaped by whether `n` sits on a straight line or a bend
/// relative to parent and grandparent, resolves the conflict outright.
pub(crate) fn rebalance_insert<K>(arena: &mut Arena<K>, root: u32, mut n: u32) -> u32 {
    loop {
        let Some(p) = arena.node(n).p else {
            // Climbed to the root; it stays black.
            arena.node_mut(n).black = true;
            return n;
        };
        if arena.node(p).black {
            return root;
        }
        // A red parent is never the root, so the grandparent exists.
        let g = arena.node(p).p.expect("red node below the root has a parent");
        let u = nav::sibling(arena, p);

        if is_red(arena, u) {
            let u = u.expect("red uncle exists");
            arena.node_mut(p).black = true;
            arena.node_mut(u).black = true;
            if arena.node(g).p.is_none() {
                // Grandparent is the root: it keeps its black and we stop.
                return root;
            }
            arena.node_mut(g).black = false;
            n = g;
            continue;
        }

        let p_is_left = arena.node(g).l == Some(p);
        let n_is_left = arena.node(p).l == Some(n);
        let top = match (p_is_left, n_is_left) {
            // Line: the parent rises over the grandparent.
            (true, true) => rotate_right(arena, g),
            (false, false) => rotate_left(arena, g),
            // Angle: surface `n` first, then rise it over the grandparent.
            (true, false) => {
                rotate_left(arena, p);
                rotate_right(arena, g)
            }
            (false, true) => {
                rotate_right(arena, p);
                rotate_left(arena, g)
            }
        };
        arena.node_mut(top).black = true;
        arena.node_mut(g).black = false;

        return if arena.node(top).p.is_some() { root } else { top };
    }
}

/// Restores uniform black-height before physically removing the black,
/// leaf-like node `n`. Returns the tree root, which may have changed.
///
/// The node is still attached while the fixup runs; it carries the
/// pending deficit ("doubly black") up the tree. A red sibling is first
/// rotated away to expose a black one. A red nephew terminates the fixup
/// in one line or angle rotation pass. A black sibling with black
/// children donates its black downward and pushes the deficit to the
/// parent, the only case that loops.
pub(crate) fn rebalance_erase<K>(arena: &mut Arena<K>, mut root: u32, mut n: u32) -> u32 {
    while n != root {
        let p = arena.node(n).p.expect("non-root node has a parent");
        let n_is_left = arena.node(p).l == Some(n);
        let mut s = nav::sibling(arena, n)
            .expect("black node below the root has a sibling");

        if !arena.node(s).black {
            // Red sibling: rotate it up, then rework against the black
            // sibling this exposes, within the same pass.
            arena.node_mut(s).black = true;
            arena.node_mut(p).black = false;
            let top = if n_is_left {
                rotate_left(arena, p)
            } else {
                rotate_right(arena, p)
            };
            if arena.node(top).p.is_none() {
                root = top;
            }
            s = nav::sibling(arena, n)
                .expect("former red sibling left a black child facing the deficit");
        }

        let sl = arena.node(s).l;
        let sr = arena.node(s).r;
        if !is_red(arena, sl) && !is_red(arena, sr) {
            // The sibling donates its black to even out the deficit.
            arena.node_mut(s).black = false;
            if !arena.node(p).black {
                arena.node_mut(p).black = true;
                return root;
            }
            n = p;
            continue;
        }

        if n_is_left {
            let s = if is_red(arena, sr) {
                s
            } else {
                // Inner nephew red: surface it as the new sibling.
                let sl = sl.expect("inner nephew is red");
                arena.node_mut(sl).black = true;
                arena.node_mut(s).black = false;
                rotate_right(arena, s)
            };
            let parent_black = arena.node(p).black;
            arena.node_mut(s).black = parent_black;
            arena.node_mut(p).black = true;
            let outer = arena.node(s).r.expect("outer nephew is red");
            arena.node_mut(outer).black = true;
            let top = rotate_left(arena, p);
            if arena.node(top).p.is_none() {
                root = top;
            }
        } else {
            let s = if is_red(arena, sl) {
                s
            } else {
                let sr = sr.expect("inner nephew is red");
                arena.node_mut(sr).black = true;
                arena.node_mut(s).black = false;
                rotate_left(arena, s)
            };
            let parent_black = arena.node(p).black;
            arena.node_mut(s).black = parent_black;
            arena.node_mut(p).black = true;
            let outer = arena.node(s).l.expect("outer nephew is red");
            arena.node_mut(outer).black = true;
            let top = rotate_right(arena, p);
            if arena.node(top).p.is_none() {
                root = top;
            }
        }
        return root;
    }
    root
}
