//! Ordered unique-key set backed by an arena-based red-black tree.
//!
//! The tree guarantees O(log n) search, insertion, and deletion and keeps
//! keys in comparator order, walkable in both directions. Instead of raw
//! pointers, all links between nodes are `Option<u32>` indices into a
//! slot arena owned by the tree; erased slots are recycled through a free
//! list.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | `arena` (private) | node slots, free list, key swapping |
//! | `nav` (private) | in-order first / last / next / prev / sibling |
//! | `balance` (private) | rotations, insert and erase fixup loops |
//! | [`tree`] | [`RbTree`]: find / insert / erase, deep copy, equality |
//! | [`cursor`] | [`Cursor`], [`Span`], [`CursorError`] |
//! | [`set`] | [`RbSet`] facade and std iteration |
//!
//! # Example
//!
//! ```
//! use crimson_tree::RbSet;
//!
//! let mut set: RbSet<i32> = [3, 1, 2].into();
//! let (_, added) = set.insert(4);
//! assert!(added);
//! assert!(set.has(&2));
//! let keys: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(keys, vec![1, 2, 3, 4]);
//! ```

mod arena;
mod balance;
mod nav;

pub mod cursor;
pub mod set;
pub mod tree;

pub use cursor::{Cursor, CursorError, Edge, Span};
pub use set::{Iter, RbSet};
pub use tree::RbTree;
