//! Ordered unique-key set facade over [`RbTree`].
//!
//! The tree already enforces unique keys; the facade adds the
//! conventional set surface: membership and bound queries, cursor-pair
//! results from insert/erase, bulk operations that report how many keys
//! actually changed, and standard iteration.

use std::fmt;

use crate::cursor::{Cursor, Span};
use crate::tree::{default_comparator, RbTree};

pub struct RbSet<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    tree: RbTree<K, C>,
}

impl<K> RbSet<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for RbSet<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbSet<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    pub fn size(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Whether `key` is present.
    pub fn has(&self, key: &K) -> bool {
        self.tree.has(key)
    }

    /// Position of `key`, or the end cursor when absent.
    pub fn find(&self, key: &K) -> Cursor<'_, K, C> {
        Cursor::new(&self.tree, self.tree.find(key, false), true)
    }

    /// First position not preceding `key`: `key`'s own position when
    /// present, else its in-order successor.
    pub fn lower_bound(&self, key: &K) -> Cursor<'_, K, C> {
        let mut at = self.tree.find(key, true);
        if let Some(idx) = at {
            if (self.tree.comparator())(self.tree.key(idx), key) < 0 {
                at = self.tree.next(idx);
            }
        }
        Cursor::new(&self.tree, at, true)
    }

    /// First position strictly following `key`, whether or not `key` is
    /// present.
    pub fn upper_bound(&self, key: &K) -> Cursor<'_, K, C> {
        let mut at = self.tree.find(key, true);
        if let Some(idx) = at {
            if (self.tree.comparator())(self.tree.key(idx), key) <= 0 {
                at = self.tree.next(idx);
            }
        }
        Cursor::new(&self.tree, at, true)
    }

    /// The `(lower_bound, upper_bound)` pair. When `key` is absent both
    /// cursors are equal, sitting on the successor position.
    pub fn equal_range(&self, key: &K) -> (Cursor<'_, K, C>, Cursor<'_, K, C>) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Inserts `key`. Returns the position holding it and whether a new
    /// entry was created (`false` means the key was already present and
    /// nothing changed).
    pub fn insert(&mut self, key: K) -> (Cursor<'_, K, C>, bool) {
        let (idx, added) = self.tree.insert(key);
        (Cursor::new(&self.tree, Some(idx), true), added)
    }

    /// Moves every key in, returning how many were not already present.
    pub fn insert_all<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        self.tree.insert_all(keys)
    }

    /// Clone-inserting variant for borrowed keys.
    pub fn insert_cloned<'a, I>(&mut self, keys: I) -> usize
    where
        K: Clone + 'a,
        I: IntoIterator<Item = &'a K>,
    {
        self.tree.insert_cloned(keys)
    }

    /// Erases `key`. On success the cursor sits on the erased key's
    /// in-order successor (or at the end); on a miss it sits at the end
    /// and the flag is `false`.
    pub fn erase(&mut self, key: &K) -> (Cursor<'_, K, C>, bool) {
        let (successor, found) = self.tree.erase(key);
        (Cursor::new(&self.tree, successor, true), found)
    }

    /// Erases every key, returning how many were found.
    pub fn erase_all<'a, I>(&mut self, keys: I) -> usize
    where
        K: 'a,
        I: IntoIterator<Item = &'a K>,
    {
        self.tree.erase_all(keys)
    }

    /// Erases a captured cursor range (see [`Cursor::span_to`]),
    /// returning how many keys were removed.
    pub fn erase_span(&mut self, span: Span<K>) -> usize
    where
        K: Clone,
    {
        self.tree.erase_span(span.start, span.end)
    }

    /// Replaces the contents with `keys`.
    pub fn assign<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.tree.clear();
        self.tree.insert_all(keys);
    }

    pub fn clear(&mut self) {
        self.tree.clear()
    }

    /// Forward cursor at the smallest key.
    pub fn cursor(&self) -> Cursor<'_, K, C> {
        Cursor::new(&self.tree, self.tree.min(), true)
    }

    /// Forward past-the-end cursor.
    pub fn end(&self) -> Cursor<'_, K, C> {
        Cursor::new(&self.tree, None, true)
    }

    /// Reverse cursor at the greatest key.
    pub fn cursor_rev(&self) -> Cursor<'_, K, C> {
        Cursor::new(&self.tree, self.tree.max(), false)
    }

    /// Reverse past-the-end cursor.
    pub fn rend(&self) -> Cursor<'_, K, C> {
        Cursor::new(&self.tree, None, false)
    }

    pub fn iter(&self) -> Iter<'_, K, C> {
        Iter {
            tree: &self.tree,
            front: self.tree.min(),
            back: self.tree.max(),
            done: false,
        }
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        self.tree.assert_valid()
    }
}

impl<K, C> Clone for RbSet<K, C>
where
    K: Clone,
    C: Clone + Fn(&K, &K) -> i32,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

/// Sets match on key sequences, not on tree shape.
impl<K, C> PartialEq for RbSet<K, C>
where
    K: PartialEq,
    C: Fn(&K, &K) -> i32,
{
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<K, C> Eq for RbSet<K, C>
where
    K: Eq,
    C: Fn(&K, &K) -> i32,
{
}

impl<K, C> fmt::Debug for RbSet<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

impl<K: PartialOrd> From<K> for RbSet<K, fn(&K, &K) -> i32> {
    fn from(key: K) -> Self {
        let mut set = Self::new();
        set.insert(key);
        set
    }
}

impl<K: PartialOrd, const N: usize> From<[K; N]> for RbSet<K, fn(&K, &K) -> i32> {
    fn from(keys: [K; N]) -> Self {
        let mut set = Self::new();
        set.insert_all(keys);
        set
    }
}

impl<K: PartialOrd> FromIterator<K> for RbSet<K, fn(&K, &K) -> i32> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut set = Self::new();
        set.insert_all(keys);
        set
    }
}

impl<K, C> Extend<K> for RbSet<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        self.insert_all(keys);
    }
}

impl<'a, K, C> Extend<&'a K> for RbSet<K, C>
where
    K: Clone + 'a,
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, keys: I) {
        self.insert_cloned(keys);
    }
}

/// Double-ended iterator over the keys in comparator order.
pub struct Iter<'t, K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'t RbTree<K, C>,
    front: Option<u32>,
    back: Option<u32>,
    done: bool,
}

impl<'t, K, C> Iterator for Iter<'t, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'t K;

    fn next(&mut self) -> Option<&'t K> {
        if self.done {
            return None;
        }
        let idx = self.front?;
        if self.front == self.back {
            self.done = true;
        } else {
            self.front = self.tree.next(idx);
        }
        Some(self.tree.key(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.tree.size()))
    }
}

impl<'t, K, C> DoubleEndedIterator for Iter<'t, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn next_back(&mut self) -> Option<&'t K> {
        if self.done {
            return None;
        }
        let idx = self.back?;
        if self.front == self.back {
            self.done = true;
        } else {
            self.back = self.tree.prev(idx);
        }
        Some(self.tree.key(idx))
    }
}

impl<'t, K, C> IntoIterator for &'t RbSet<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'t K;
    type IntoIter = Iter<'t, K, C>;

    fn into_iter(self) -> Iter<'t, K, C> {
        self.iter()
    }
}
