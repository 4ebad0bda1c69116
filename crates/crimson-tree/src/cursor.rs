//! Bidirectional read-only cursors.
//!
//! A cursor is a `(tree, position, direction)` triple. Forward cursors
//! begin at the minimum and end past the maximum; reverse cursors mirror
//! that. Misuse at a boundary is an ordinary error value, reported at the
//! point of the offense and naming the boundary crossed.
//!
//! Cursors hold a shared borrow of their tree, so the tree cannot be
//! mutated while any cursor is live. Erasing while iterating therefore
//! goes through a [`Span`]: a captured key range that owns its endpoints
//! and stays valid across arbitrary mutation.

use std::fmt;

use thiserror::Error;

use crate::tree::RbTree;

/// A traversal boundary, as named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Begin,
    End,
    RBegin,
    REnd,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Edge::Begin => "begin",
            Edge::End => "end",
            Edge::RBegin => "rbegin",
            Edge::REnd => "rend",
        })
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("cannot move a cursor over an empty set")]
    Empty,
    #[error("cannot dereference a cursor at {0}")]
    Dereference(Edge),
    #[error("cannot advance a cursor past {0}")]
    PastEnd(Edge),
    #[error("cannot retreat a cursor past {0}")]
    PastBegin(Edge),
}

/// Read-only position in a tree. `advance` walks in iteration order
/// (in-order for forward cursors, reverse in-order for reverse ones);
/// `retreat` walks the other way.
pub struct Cursor<'t, K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'t RbTree<K, C>,
    node: Option<u32>,
    forward: bool,
}

impl<'t, K, C> Cursor<'t, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) fn new(tree: &'t RbTree<K, C>, node: Option<u32>, forward: bool) -> Self {
        Self {
            tree,
            node,
            forward,
        }
    }

    pub fn is_reversed(&self) -> bool {
        !self.forward
    }

    /// Whether the cursor sits past the last position of its direction.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    fn end_edge(&self) -> Edge {
        if self.forward {
            Edge::End
        } else {
            Edge::REnd
        }
    }

    fn begin_edge(&self) -> Edge {
        if self.forward {
            Edge::Begin
        } else {
            Edge::RBegin
        }
    }

    /// The key at the cursor position.
    pub fn key(&self) -> Result<&'t K, CursorError> {
        match self.node {
            Some(idx) => Ok(self.tree.key(idx)),
            None => Err(CursorError::Dereference(self.end_edge())),
        }
    }

    /// Steps to the next position in iteration order. Stepping from the
    /// last position onto the end is fine; stepping from the end is not.
    pub fn advance(&mut self) -> Result<(), CursorError> {
        if self.tree.is_empty() {
            return Err(CursorError::Empty);
        }
        let Some(idx) = self.node else {
            return Err(CursorError::PastEnd(self.end_edge()));
        };
        self.node = if self.forward {
            self.tree.next(idx)
        } else {
            self.tree.prev(idx)
        };
        Ok(())
    }

    /// Steps back one position. Retreating from the end lands on the
    /// last position of the direction (the maximum for a forward cursor,
    /// the minimum for a reverse one); retreating from the first
    /// position fails and leaves the cursor where it was.
    pub fn retreat(&mut self) -> Result<(), CursorError> {
        if self.tree.is_empty() {
            return Err(CursorError::Empty);
        }
        match self.node {
            Some(idx) => {
                let back = if self.forward {
                    self.tree.prev(idx)
                } else {
                    self.tree.next(idx)
                };
                match back {
                    Some(idx) => {
                        self.node = Some(idx);
                        Ok(())
                    }
                    None => Err(CursorError::PastBegin(self.begin_edge())),
                }
            }
            None => {
                self.node = if self.forward {
                    self.tree.max()
                } else {
                    self.tree.min()
                };
                Ok(())
            }
        }
    }

    /// Captures the key range from this cursor (inclusive) to `until`
    /// (exclusive) as owned values, for erasing while iterating.
    pub fn span_to(&self, until: &Cursor<'t, K, C>) -> Span<K>
    where
        K: Clone,
    {
        debug_assert!(
            std::ptr::eq(self.tree, until.tree),
            "span endpoints must come from the same set"
        );
        Span {
            start: self.node.map(|idx| self.tree.key(idx).clone()),
            end: until.node.map(|idx| self.tree.key(idx).clone()),
        }
    }
}

impl<K, C> Clone for Cursor<'_, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, C> Copy for Cursor<'_, K, C> where C: Fn(&K, &K) -> i32 {}

/// Cursors are equal only when they refer to the same set, walk the same
/// direction, and sit on the same position.
impl<K, C> PartialEq for Cursor<'_, K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree)
            && self.forward == other.forward
            && self.node == other.node
    }
}

impl<K, C> Eq for Cursor<'_, K, C> where C: Fn(&K, &K) -> i32 {}

impl<K, C> fmt::Debug for Cursor<'_, K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Cursor");
        match self.node {
            Some(idx) => s.field("key", self.tree.key(idx)),
            None => s.field("at", &self.end_edge()),
        };
        s.field("reversed", &!self.forward).finish()
    }
}

/// Captured key range: start inclusive, end exclusive, `None` meaning
/// past-the-end. Owns its endpoint keys, so it survives any mutation of
/// the set it was captured from.
#[derive(Debug, Clone)]
pub struct Span<K> {
    pub(crate) start: Option<K>,
    pub(crate) end: Option<K>,
}
