//! In-order traversal over a set.
//!
//! [`Iter`] keeps an explicit stack of pending nodes rather than recursing:
//! the root's left spine is pushed eagerly, and popping a node pushes the
//! left spine of its right child. The stack top is always the smallest
//! value not yet yielded.
//!
//! [`Cursor`] is the removal-capable walk. A stack of node references would
//! go stale the moment a removal rotated the tree, so the cursor retains no
//! node identities at all: it remembers only the last value it yielded and
//! asks the live tree for that value's in-order successor on every step.
//! Holding the set mutably also means no other code can touch the tree for
//! the cursor's whole lifetime.

use crate::error::Error;
use crate::node::Node;
use crate::set::AvlSet;

/// An ascending iterator over a set's values.
///
/// Created by [`AvlSet::iter`]. Two iterators over an unmutated set yield
/// identical sequences.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and then every node down its left edge, so the smallest
    /// value of the subtree ends up on top.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

/// An ascending walk over a set that can remove the value it most recently
/// yielded.
///
/// Created by [`AvlSet::cursor`]. The cursor implements [`Iterator`],
/// yielding clones of the stored values; exhaustion is `None`. After a value
/// has been yielded, [`remove`][Cursor::remove] deletes it from the set via
/// the ordinary removal algorithm, and the walk continues from the value
/// after it.
///
/// # Examples
///
/// Draining a set in ascending order:
///
/// ```
/// use avl_set::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.add_all([2, 1, 3]).unwrap();
///
/// let mut drained = Vec::new();
/// let mut cursor = set.cursor();
/// while let Some(value) = cursor.next() {
///     drained.push(value);
///     cursor.remove().unwrap();
/// }
///
/// assert_eq!(drained, [1, 2, 3]);
/// assert!(set.is_empty());
/// ```
pub struct Cursor<'a, T: Ord + Clone> {
    set: &'a mut AvlSet<T>,

    /// The value most recently yielded, if it has not been removed. This is
    /// what [`Cursor::remove`] deletes.
    current: Option<T>,

    /// Exclusive lower bound of the values still to be yielded. `None` before
    /// the first step.
    resume_after: Option<T>,
}

impl<'a, T: Ord + Clone> Cursor<'a, T> {
    pub(crate) fn new(set: &'a mut AvlSet<T>) -> Self {
        Self {
            set,
            current: None,
            resume_after: None,
        }
    }

    /// Removes the most recently yielded value from the set.
    ///
    /// Fails with [`Error::NoCurrentElement`] if nothing has been yielded
    /// yet, or if the yielded value was already removed.
    pub fn remove(&mut self) -> Result<(), Error> {
        let value = self.current.take().ok_or(Error::NoCurrentElement)?;
        self.set.remove(&value);
        Ok(())
    }
}

impl<'a, T: Ord + Clone> Iterator for Cursor<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let next = match &self.resume_after {
            None => self.set.first().ok(),
            Some(prev) => self.set.successor(prev),
        }
        .cloned()?;
        self.resume_after = Some(next.clone());
        self.current = Some(next.clone());
        Some(next)
    }
}
