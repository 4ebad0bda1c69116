//! The red-black tree core.
//!
//! [`RbTree`] owns the node arena and the root, tracks the entry count,
//! and holds one immutable comparator shared by every operation. Keys are
//! unique: inserting a present key is a no-op reported through the
//! returned flag. All traversal is exposed through stable arena indices,
//! which the cursor layer wraps.

use std::fmt;

use crate::arena::Arena;
use crate::balance;
use crate::nav;

pub(crate) fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Ordered unique-key container backed by a red-black tree.
///
/// The comparator returns negative, zero, or positive for less, equal,
/// greater; key equality is comparator equality.
pub struct RbTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Arena<K>,
    root: Option<u32>,
    len: usize,
    comparator: C,
}

impl<K> RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn arena(&self) -> &Arena<K> {
        &self.arena
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena.node(idx).key
    }

    /// Node holding the least key, by the comparator.
    pub fn min(&self) -> Option<u32> {
        nav::first(&self.arena, self.root)
    }

    /// Node holding the greatest key.
    pub fn max(&self) -> Option<u32> {
        nav::last(&self.arena, self.root)
    }

    /// In-order successor of the node at `idx`.
    pub fn next(&self, idx: u32) -> Option<u32> {
        nav::next(&self.arena, idx)
    }

    /// In-order predecessor of the node at `idx`.
    pub fn prev(&self, idx: u32) -> Option<u32> {
        nav::prev(&self.arena, idx)
    }

    /// Descends from the root and returns the last node visited together
    /// with the final comparison result (zero on an exact match).
    fn locate(&self, key: &K) -> Option<(u32, i32)> {
        let mut curr = self.root?;
        loop {
            let cmp = (self.comparator)(key, &self.arena.node(curr).key);
            if cmp == 0 {
                return Some((curr, 0));
            }
            let child = if cmp < 0 {
                self.arena.node(curr).l
            } else {
                self.arena.node(curr).r
            };
            match child {
                Some(next) => curr = next,
                None => return Some((curr, cmp)),
            }
        }
    }

    /// Finds the node holding `key`. On a miss, returns the closest node
    /// visited when `get_closest` is set (the attachment point an insert
    /// would use, and the neighbor the bound queries start from), else
    /// `None`.
    pub fn find(&self, key: &K, get_closest: bool) -> Option<u32> {
        match self.locate(key) {
            Some((idx, 0)) => Some(idx),
            Some((idx, _)) if get_closest => Some(idx),
            _ => None,
        }
    }

    pub fn has(&self, key: &K) -> bool {
        self.find(key, false).is_some()
    }

    /// Inserts `key`, keeping keys unique. Returns the node holding the
    /// key and whether a new entry was created.
    pub fn insert(&mut self, key: K) -> (u32, bool) {
        let Some((at, cmp)) = self.locate(&key) else {
            // First node: the root is born black.
            let idx = self.arena.alloc(key, true);
            self.root = Some(idx);
            self.len = 1;
            return (idx, true);
        };
        if cmp == 0 {
            return (at, false);
        }

        // Attach a red leaf; only the no-red-child rule can break.
        let idx = self.arena.alloc(key, false);
        self.arena.node_mut(idx).p = Some(at);
        if cmp < 0 {
            self.arena.node_mut(at).l = Some(idx);
        } else {
            self.arena.node_mut(at).r = Some(idx);
        }
        let root = self.root.expect("locate succeeded on a non-empty tree");
        self.root = Some(balance::rebalance_insert(&mut self.arena, root, idx));
        self.len += 1;
        (idx, true)
    }

    /// Inserts every key, returning how many were not already present.
    pub fn insert_all<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        let before = self.len;
        for key in keys {
            self.insert(key);
        }
        self.len - before
    }

    /// Clone-inserting variant for iterators over borrowed keys.
    pub fn insert_cloned<'a, I>(&mut self, keys: I) -> usize
    where
        K: Clone + 'a,
        I: IntoIterator<Item = &'a K>,
    {
        let before = self.len;
        for key in keys {
            self.insert(key.clone());
        }
        self.len - before
    }

    /// Erases `key`. Returns the node now holding the erased key's
    /// in-order successor (`None` when the erased key was the greatest or
    /// the tree emptied) and whether the key was found.
    pub fn erase(&mut self, key: &K) -> (Option<u32>, bool) {
        let Some(target) = self.find(key, false) else {
            return (None, false);
        };

        if self.len == 1 {
            self.arena.release(target);
            self.root = None;
            self.len = 0;
            return (None, true);
        }

        let mut doomed = target;
        let mut successor = nav::next(&self.arena, target);

        if self.arena.node(target).r.is_some() {
            if self.arena.node(target).l.is_some() {
                // Two children: move the doomed key into the successor's
                // position (the successor has no left child by
                // construction) and delete there instead.
                let s = successor.expect("a right subtree has a leftmost node");
                self.arena.swap_keys(target, s);
                doomed = s;
            }
            // The target node ends up holding the successor key.
            successor = Some(target);
        }

        // One child left: trade keys with it so the physical removal
        // always happens at a leaf-like node.
        let lone = match (self.arena.node(doomed).l, self.arena.node(doomed).r) {
            (Some(c), None) | (None, Some(c)) => Some(c),
            _ => None,
        };
        if let Some(child) = lone {
            self.arena.swap_keys(doomed, child);
            doomed = child;
        }

        // Fix the black-height while the doomed node is still attached;
        // removing a red leaf needs no fixup.
        if self.arena.node(doomed).black {
            let root = self.root.expect("tree with more than one node has a root");
            self.root = Some(balance::rebalance_erase(&mut self.arena, root, doomed));
        }

        let p = self
            .arena
            .node(doomed)
            .p
            .expect("the doomed node is never the root here");
        if self.arena.node(p).l == Some(doomed) {
            self.arena.node_mut(p).l = None;
        } else {
            self.arena.node_mut(p).r = None;
        }
        self.arena.release(doomed);
        self.len -= 1;
        (successor, true)
    }

    /// Erases every key, returning how many were found.
    pub fn erase_all<'a, I>(&mut self, keys: I) -> usize
    where
        K: 'a,
        I: IntoIterator<Item = &'a K>,
    {
        let before = self.len;
        for key in keys {
            self.erase(key);
        }
        before - self.len
    }

    /// Erases the keys from `start` (inclusive) to `end` (exclusive),
    /// both given as captured key values rather than live positions:
    /// each step re-finds the current key and captures its successor key
    /// before erasing, so the walk never touches a freed node.
    pub fn erase_span(&mut self, start: Option<K>, end: Option<K>) -> usize
    where
        K: Clone,
    {
        let before = self.len;
        let mut curr = start;
        while let Some(key) = curr {
            if let Some(end) = &end {
                if (self.comparator)(&key, end) == 0 {
                    break;
                }
            }
            let next_key = self
                .find(&key, false)
                .and_then(|idx| nav::next(&self.arena, idx))
                .map(|idx| self.arena.node(idx).key.clone());
            self.erase(&key);
            curr = next_key;
        }
        before - self.len
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Verifies every red-black property plus link integrity and key
    /// ordering. Intended for tests.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            return if self.len == 0 {
                Ok(())
            } else {
                Err(format!("empty tree reports size {}", self.len))
            };
        };

        if self.arena.node(root).p.is_some() {
            return Err("root has a parent".to_string());
        }
        if !self.arena.node(root).black {
            return Err("root is not black".to_string());
        }

        fn black_height<K>(arena: &Arena<K>, node: Option<u32>) -> Result<usize, String> {
            let Some(node) = node else {
                return Ok(0);
            };

            let l = arena.node(node).l;
            let r = arena.node(node).r;

            if let Some(l) = l {
                if arena.node(l).p != Some(node) {
                    return Err("broken parent link on left child".to_string());
                }
            }
            if let Some(r) = r {
                if arena.node(r).p != Some(node) {
                    return Err("broken parent link on right child".to_string());
                }
            }

            if !arena.node(node).black {
                if l.map(|i| !arena.node(i).black).unwrap_or(false) {
                    return Err("red node has a red left child".to_string());
                }
                if r.map(|i| !arena.node(i).black).unwrap_or(false) {
                    return Err("red node has a red right child".to_string());
                }
            }

            let lh = black_height(arena, l)?;
            let rh = black_height(arena, r)?;
            if lh != rh {
                return Err("black height mismatch".to_string());
            }

            Ok(lh + if arena.node(node).black { 1 } else { 0 })
        }

        black_height(&self.arena, Some(root))?;

        let mut count = 0;
        let mut prev: Option<u32> = None;
        let mut curr = nav::first(&self.arena, Some(root));
        while let Some(i) = curr {
            count += 1;
            if let Some(prev) = prev {
                let cmp = (self.comparator)(&self.arena.node(prev).key, &self.arena.node(i).key);
                if cmp >= 0 {
                    return Err("in-order keys are not strictly increasing".to_string());
                }
            }
            prev = Some(i);
            curr = nav::next(&self.arena, i);
        }
        if count != self.len {
            return Err(format!("size is {} but {count} nodes are reachable", self.len));
        }

        Ok(())
    }
}

/// Deep copy: an independent, compacted node graph with the same keys,
/// colors, and shape, built by a preorder walk that defers each right
/// subtree on a stack while descending left.
impl<K, C> Clone for RbTree<K, C>
where
    K: Clone,
    C: Clone + Fn(&K, &K) -> i32,
{
    fn clone(&self) -> Self {
        let mut arena = Arena::with_capacity(self.len);
        let root = self.root.map(|src_root| {
            let src_node = self.arena.node(src_root);
            let dst_root = arena.alloc(src_node.key.clone(), src_node.black);

            let mut stack: Vec<(u32, u32)> = Vec::new();
            let (mut src, mut dst) = (src_root, dst_root);
            loop {
                if let Some(sr) = self.arena.node(src).r {
                    let node = self.arena.node(sr);
                    let copy = arena.alloc(node.key.clone(), node.black);
                    arena.node_mut(copy).p = Some(dst);
                    arena.node_mut(dst).r = Some(copy);
                    stack.push((sr, copy));
                }

                if let Some(sl) = self.arena.node(src).l {
                    let node = self.arena.node(sl);
                    let copy = arena.alloc(node.key.clone(), node.black);
                    arena.node_mut(copy).p = Some(dst);
                    arena.node_mut(dst).l = Some(copy);
                    src = sl;
                    dst = copy;
                } else if let Some((s, d)) = stack.pop() {
                    src = s;
                    dst = d;
                } else {
                    break;
                }
            }
            dst_root
        });

        Self {
            arena,
            root,
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

/// Trees match on key sequences, not on node shape or colors.
impl<K, C> PartialEq for RbTree<K, C>
where
    K: PartialEq,
    C: Fn(&K, &K) -> i32,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut a = nav::first(&self.arena, self.root);
        let mut b = nav::first(&other.arena, other.root);
        while let (Some(x), Some(y)) = (a, b) {
            if self.arena.node(x).key != other.arena.node(y).key {
                return false;
            }
            a = nav::next(&self.arena, x);
            b = nav::next(&other.arena, y);
        }
        true
    }
}

impl<K, C> Eq for RbTree<K, C>
where
    K: Eq,
    C: Fn(&K, &K) -> i32,
{
}

impl<K, C> fmt::Debug for RbTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_set();
        let mut curr = nav::first(&self.arena, self.root);
        while let Some(i) = curr {
            out.entry(&self.arena.node(i).key);
            curr = nav::next(&self.arena, i);
        }
        out.finish()
    }
}
