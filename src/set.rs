//! The ordered set itself.
//!
//! Insertion and deletion are written recursively: each step consumes an
//! owned subtree and returns the node that should occupy its position, with
//! [`rebalance`] applied at every level of the return path. The root slot is
//! reassigned by every structural change since rotations can move a new node
//! to the top.

use std::cmp::Ordering;
use std::fmt;

use crate::error::Error;
use crate::iter::{Cursor, Iter};
use crate::node::{rebalance, Link, Node};
use crate::range::RangeView;

/// An ordered set of unique values, kept balanced as an AVL tree.
///
/// # Examples
///
/// ```
/// use avl_set::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.add(2).unwrap();
/// set.add(1).unwrap();
/// set.add(3).unwrap();
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.first(), Ok(&1));
/// assert_eq!(set.last(), Ok(&3));
///
/// assert!(set.remove(&2));
/// assert!(!set.contains(&2));
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlSet<T> {
    /// Generates a new, empty set.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value in the set.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Whether `value` is in the set.
    ///
    /// The search descends by comparison until the needed child is absent, so
    /// it may stop at a node holding some *other* value; membership is then a
    /// final equality check against that node.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add(1).unwrap();
    ///
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.closest(value).map_or(false, |node| node.value == *value)
    }

    /// The node where a search for `value` bottoms out: either the node
    /// holding `value` or the last node visited before an absent child.
    fn closest(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut node = self.root.as_deref()?;
        loop {
            node = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => match node.left.as_deref() {
                    Some(left) => left,
                    None => return Some(node),
                },
                Ordering::Greater => match node.right.as_deref() {
                    Some(right) => right,
                    None => return Some(node),
                },
            };
        }
    }

    /// Inserts `value` into the set.
    ///
    /// Values are unique: inserting a value that is already present fails
    /// with [`Error::DuplicateValue`] and leaves the set untouched — the
    /// membership check runs before any node is created or moved.
    ///
    /// Returns `Ok(true)` once the set provably contains `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.add(1), Ok(true));
    /// assert_eq!(set.add(1), Err(Error::DuplicateValue));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> Result<bool, Error>
    where
        T: Ord,
    {
        if self.contains(&value) {
            return Err(Error::DuplicateValue);
        }
        self.root = Some(insert(self.root.take(), value));
        self.len += 1;
        Ok(true)
    }

    /// Removes `value` from the set. Returns whether it was present; an
    /// absent value (or an empty set) is a no-op returning `false`.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let (root, removed) = remove_from(self.root.take(), value);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// The smallest value in the set, by iterative leftmost descent.
    ///
    /// Fails with [`Error::Empty`] when the set is empty.
    pub fn first(&self) -> Result<&T, Error> {
        let mut node = self.root.as_deref().ok_or(Error::Empty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// The largest value in the set, by iterative rightmost descent.
    ///
    /// Fails with [`Error::Empty`] when the set is empty.
    pub fn last(&self) -> Result<&T, Error> {
        let mut node = self.root.as_deref().ok_or(Error::Empty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// The smallest value strictly greater than `value`, if any. `value`
    /// itself need not be in the set.
    pub(crate) fn successor(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut candidate = None;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = if *value < n.value {
                candidate = Some(&n.value);
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
        candidate
    }

    /// An iterator over the set's values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// A cursor that walks the set in ascending order and can remove the
    /// value it most recently yielded. See [`Cursor`].
    pub fn cursor(&mut self) -> Cursor<'_, T>
    where
        T: Ord + Clone,
    {
        Cursor::new(self)
    }

    /// A view of the values in the half-open interval `[from, to)`, sharing
    /// this set's storage. Fails with [`Error::InvalidRange`] unless
    /// `from < to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.add_all([5, 10, 13, 14, 15, 16]).unwrap();
    ///
    /// let view = set.sub_range(10, 16).unwrap();
    /// assert!(view.contains(&15));
    /// assert!(!view.contains(&16));
    /// ```
    pub fn sub_range(&mut self, from: T, to: T) -> Result<RangeView<'_, T>, Error>
    where
        T: Ord,
    {
        if from >= to {
            return Err(Error::InvalidRange);
        }
        Ok(RangeView::new(self, Some(from), Some(to)))
    }

    /// A view of the values strictly below `to`, sharing this set's storage.
    pub fn head_range(&mut self, to: T) -> RangeView<'_, T>
    where
        T: Ord,
    {
        RangeView::new(self, None, Some(to))
    }

    /// A view of the values at or above `from`, sharing this set's storage.
    pub fn tail_range(&mut self, from: T) -> RangeView<'_, T>
    where
        T: Ord,
    {
        RangeView::new(self, Some(from), None)
    }

    /// Whether every value in `values` is in the set.
    pub fn contains_all(&self, values: &[T]) -> bool
    where
        T: Ord,
    {
        values.iter().all(|value| self.contains(value))
    }

    /// Inserts every value yielded by `values`, stopping at the first
    /// duplicate with [`Error::DuplicateValue`] (values inserted up to that
    /// point remain).
    pub fn add_all<I>(&mut self, values: I) -> Result<bool, Error>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value)?;
        }
        Ok(true)
    }

    /// Removes every value in `values`, but only if all of them are present;
    /// otherwise returns `false` without removing anything.
    pub fn remove_all(&mut self, values: &[T]) -> bool
    where
        T: Ord,
    {
        if !self.contains_all(values) {
            return false;
        }
        for value in values {
            self.remove(value);
        }
        true
    }

    /// Keeps only the values in `values`, but only if all of them are
    /// present; otherwise returns `false` without removing anything.
    pub fn retain_all(&mut self, values: &[T]) -> bool
    where
        T: Ord + Clone,
    {
        if !self.contains_all(values) {
            return false;
        }
        let evicted: Vec<T> = self
            .iter()
            .filter(|value| !values.contains(value))
            .cloned()
            .collect();
        for value in &evicted {
            self.remove(value);
        }
        true
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for AvlSet<T> {
    /// Sets are equal when they hold the same values; since iteration is
    /// ordered, that is ordered-sequence equality.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AvlSet<T> {}

fn insert<T: Ord>(link: Link<T>, value: T) -> Box<Node<T>> {
    match link {
        None => Node::new(value),
        Some(mut node) => {
            match value.cmp(&node.value) {
                Ordering::Less => node.left = Some(insert(node.left.take(), value)),
                Ordering::Greater => node.right = Some(insert(node.right.take(), value)),
                // `add` refuses duplicates before descending.
                Ordering::Equal => unreachable!("insert reached a node equal to the new value"),
            }
            rebalance(node)
        }
    }
}

fn remove_from<T: Ord>(link: Link<T>, value: &T) -> (Link<T>, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };
    let removed = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove_from(node.left.take(), value);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove_from(node.right.take(), value);
            node.right = right;
            removed
        }
        Ordering::Equal => {
            return match (node.left.take(), node.right.take()) {
                // At most one child: splice the node out, promoting the
                // child (if any) into its position.
                (None, right) => (right, true),
                (left, None) => (left, true),
                // Two children: overwrite with the in-order successor (the
                // minimum of the right subtree) and remove that minimum.
                (left, Some(right)) => {
                    let (right, successor) = take_min(right);
                    node.left = left;
                    node.right = right;
                    node.value = successor;
                    (Some(rebalance(node)), true)
                }
            };
        }
    };
    (Some(rebalance(node)), removed)
}

/// Removes the leftmost node of an owned subtree, returning the rebalanced
/// remainder and the minimum value itself.
fn take_min<T: Ord>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let node = *node;
            (node.right, node.value)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        }
    }
}
