//! Bounded views over a set.
//!
//! A [`RangeView`] is a façade, not a copy: it holds the backing set mutably
//! plus an optional bound on each side, and every query or mutation goes
//! through the backing set with a bound check in front. Changes made through
//! the view are visible through the base set once the view is dropped, and
//! the exclusive borrow keeps the two from being used at the same time.

use std::fmt;

use crate::error::Error;
use crate::node::Node;
use crate::set::AvlSet;

/// A view of the values of an [`AvlSet`] in the half-open interval
/// `[from, to)`, sharing the set's storage.
///
/// Created by [`AvlSet::sub_range`], [`AvlSet::head_range`], or
/// [`AvlSet::tail_range`]; at least one bound is always present.
///
/// Queries ([`len`][RangeView::len], [`contains`][RangeView::contains],
/// [`first`][RangeView::first], [`last`][RangeView::last]) filter a full
/// ascending traversal of the backing set through the bound predicate, so
/// they cost O(n) in the *backing set's* size, not the view's.
///
/// # Examples
///
/// ```
/// use avl_set::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.add_all([13, 10, 15, 14, 5, 16]).unwrap();
///
/// let view = set.sub_range(10, 16).unwrap();
/// assert_eq!(view.len(), 4);
/// assert_eq!(view.first(), Ok(&10));
/// assert_eq!(view.last(), Ok(&15));
/// ```
pub struct RangeView<'a, T: Ord> {
    set: &'a mut AvlSet<T>,
    from: Option<T>,
    to: Option<T>,
}

impl<'a, T: Ord> RangeView<'a, T> {
    pub(crate) fn new(set: &'a mut AvlSet<T>, from: Option<T>, to: Option<T>) -> Self {
        Self { set, from, to }
    }

    /// Whether `value` falls inside `[from, to)`. An absent bound is
    /// always satisfied on its side.
    fn in_bounds(&self, value: &T) -> bool {
        self.from.as_ref().map_or(true, |from| value >= from)
            && self.to.as_ref().map_or(true, |to| value < to)
    }

    /// The number of the backing set's values inside the bounds.
    pub fn len(&self) -> usize {
        self.set.iter().filter(|value| self.in_bounds(value)).count()
    }

    /// Whether no value of the backing set falls inside the bounds.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `value` is inside the bounds and in the backing set.
    pub fn contains(&self, value: &T) -> bool {
        self.in_bounds(value) && self.set.contains(value)
    }

    /// The smallest in-bounds value. Fails with [`Error::Empty`] when the
    /// view holds nothing.
    pub fn first(&self) -> Result<&T, Error> {
        self.set
            .iter()
            .find(|value| self.in_bounds(value))
            .ok_or(Error::Empty)
    }

    /// The largest in-bounds value. Fails with [`Error::Empty`] when the
    /// view holds nothing.
    pub fn last(&self) -> Result<&T, Error> {
        self.set
            .iter()
            .filter(|value| self.in_bounds(value))
            .last()
            .ok_or(Error::Empty)
    }

    /// Inserts `value` into the backing set.
    ///
    /// Fails with [`Error::OutOfBounds`] (without mutating anything) when
    /// `value` lies outside the view's bounds, and with
    /// [`Error::DuplicateValue`] when the backing set already holds it.
    pub fn add(&mut self, value: T) -> Result<bool, Error> {
        if !self.in_bounds(&value) {
            return Err(Error::OutOfBounds);
        }
        self.set.add(value)
    }

    /// Removes `value` from the backing set, returning whether it was
    /// present.
    ///
    /// Fails with [`Error::OutOfBounds`] (without mutating anything) when
    /// `value` lies outside the view's bounds.
    pub fn remove(&mut self, value: &T) -> Result<bool, Error> {
        if !self.in_bounds(value) {
            return Err(Error::OutOfBounds);
        }
        Ok(self.set.remove(value))
    }

    /// An iterator over the view's values in ascending order.
    ///
    /// The traversal prunes at the first out-of-bounds node on each left
    /// spine: such a node is skipped together with its entire left subtree,
    /// and its right subtree never becomes reachable. A descendant that would
    /// itself pass the bounds is *not* looked for past a failing node, so
    /// this iterator can yield fewer values than [`len`][RangeView::len]
    /// counts. That asymmetry is long-standing observable behavior and is
    /// kept as is.
    pub fn iter(&self) -> RangeIter<'_, T> {
        RangeIter::new(self.set.root(), self.from.as_ref(), self.to.as_ref())
    }
}

impl<'a, 'v, T: Ord> IntoIterator for &'v RangeView<'a, T> {
    type Item = &'v T;
    type IntoIter = RangeIter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Ord + fmt::Debug> fmt::Debug for RangeView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An ascending iterator over a [`RangeView`], with the pruning behavior
/// described on [`RangeView::iter`].
pub struct RangeIter<'a, T> {
    stack: Vec<&'a Node<T>>,
    from: Option<&'a T>,
    to: Option<&'a T>,
}

impl<'a, T: Ord> RangeIter<'a, T> {
    fn new(root: Option<&'a Node<T>>, from: Option<&'a T>, to: Option<&'a T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            from,
            to,
        };
        iter.push_left_spine(root);
        iter
    }

    fn in_bounds(&self, value: &T) -> bool {
        self.from.map_or(true, |from| value >= from) && self.to.map_or(true, |to| value < to)
    }

    /// Pushes nodes down the left edge, stopping outright at the first node
    /// whose value fails the bounds.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            if !self.in_bounds(&n.value) {
                break;
            }
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T: Ord> Iterator for RangeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}
