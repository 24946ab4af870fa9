//! An ordered set backed by an AVL tree.
//!
//! ## AVL trees
//!
//! An AVL tree is a Binary Search Tree (BST) that rebalances itself after
//! every insertion and deletion. A BST stores its values in `Node`s, each of
//! which may have a left and a right child. The important invariants are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//! 3. For every `Node`, the heights of its left and right subtrees differ
//!    by at most one.
//!
//! The third invariant is what makes the tree an AVL tree. It bounds the
//! height of the tree to `O(lg N)` where `N` is the number of values stored,
//! which in turn bounds insertion, removal, and lookup to `O(lg N)`. Sorted
//! iteration falls out naturally by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use avl_set::AvlSet;
//!
//! let mut set = AvlSet::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//!
//! set.add(1).unwrap();
//! assert!(set.contains(&1));
//!
//! // Values are unique. A second insert of `1` is refused.
//! assert!(set.add(1).is_err());
//!
//! // Values come back out in ascending order.
//! set.add(3).unwrap();
//! set.add(2).unwrap();
//! let ascending: Vec<_> = set.iter().copied().collect();
//! assert_eq!(ascending, [1, 2, 3]);
//!
//! // Bounded views share the set's storage.
//! let view = set.head_range(3);
//! assert_eq!(view.len(), 2);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod range;
mod set;

pub use error::Error;
pub use iter::{Cursor, Iter};
pub use range::{RangeIter, RangeView};
pub use set::AvlSet;
