//! The tree node and the balancing engine.
//!
//! Nodes own their children outright; there are no parent links. Every
//! structural change is written as a function that consumes an owned subtree
//! and returns the (possibly different) node that should now occupy that
//! position, so the caller simply reassigns its child slot. Rotations rebuild
//! the top of the subtree this way rather than performing pointer surgery.

/// An owned, possibly-absent subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
            height: self.height,
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Recomputes this node's cached height from its children. Must be called
    /// after either child slot changes.
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

/// Height of a possibly-absent subtree. `0` for an absent one.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Height of the right subtree minus the height of the left subtree.
fn balance_factor<T>(node: &Node<T>) -> isize {
    height(&node.right) as isize - height(&node.left) as isize
}

/// Restores the AVL invariant at the position `node` occupies, assuming both
/// of its children already satisfy it, and returns the node that should now
/// occupy that position.
///
/// Insertion and deletion change a subtree's height by at most one per level,
/// so running this at every node on the return path of a structural change
/// (bottom-up) restores balance for the whole tree.
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let node = match balance_factor(&node) {
        2 => {
            // Right heavy. A taller inner grandchild (`right.left`) needs the
            // double rotation; ties take the single rotation.
            if let Some(right) = node.right.take() {
                node.right = Some(if height(&right.left) > height(&right.right) {
                    rotate_right(right)
                } else {
                    right
                });
            }
            rotate_left(node)
        }
        -2 => {
            if let Some(left) = node.left.take() {
                node.left = Some(if height(&left.right) > height(&left.left) {
                    rotate_left(left)
                } else {
                    left
                });
            }
            rotate_right(node)
        }
        _ => node,
    };

    debug_assert!(balance_factor(&node).abs() <= 1);
    node
}

/// Rotates the subtree left: the right child becomes the new top, the old top
/// becomes its left child, and the right child's former left subtree moves to
/// the old top's right slot. Pure restructuring; no values are compared.
fn rotate_left<T>(mut old_top: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_top = match old_top.right.take() {
        Some(right) => right,
        None => unreachable!("`rebalance` saw a right-heavy subtree without a right child"),
    };
    old_top.right = new_top.left.take();
    old_top.update_height();
    new_top.left = Some(old_top);
    new_top.update_height();
    new_top
}

/// Mirror image of [`rotate_left`].
fn rotate_right<T>(mut old_top: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_top = match old_top.left.take() {
        Some(left) => left,
        None => unreachable!("`rebalance` saw a left-heavy subtree without a left child"),
    };
    old_top.left = new_top.right.take();
    old_top.update_height();
    new_top.right = Some(old_top);
    new_top.update_height();
    new_top
}
