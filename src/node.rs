//! The recursive node at the heart of the crate. Every operation here is
//! defined in terms of the same operation on the node's children, so the
//! code reads as the textbook definitions of each operation.
//!
//! A `TreeNode` is never empty: the empty tree is the absence of a node and
//! is handled by [`Tree`][crate::Tree].
//!
//! # Examples
//!
//! ```
//! use recursive_bst::TreeNode;
//!
//! let mut root = TreeNode::new(5);
//! assert!(root.insert(3));
//! assert!(root.insert(8));
//!
//! // Duplicates are rejected.
//! assert!(!root.insert(3));
//!
//! assert_eq!(root.size(), 3);
//! assert_eq!(root.depth(), 1);
//! assert_eq!(root.render(), "3, 5, 8");
//!
//! // Removal consumes the subtree and hands back whatever replaces it.
//! let root = Box::new(root).remove(&5).expect("two nodes remain");
//! assert_eq!(root.value(), &8);
//! assert_eq!(root.render(), "3, 8");
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An exclusively owned, possibly absent, child subtree.
type Link<T> = Option<Box<TreeNode<T>>>;

/// A node of an unbalanced binary search tree along with the subtree rooted
/// at it. Every value in `left` is strictly less than `value` and every value
/// in `right` is strictly greater.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> TreeNode<T> {
    /// Creates a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value held by this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree of values less than this node's value, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The subtree of values greater than this node's value, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Adds `value` to the subtree rooted at this node. Returns `false`, leaving the tree
    /// untouched, if an equal value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use recursive_bst::TreeNode;
    ///
    /// let mut root = TreeNode::new(2);
    /// assert!(root.insert(1));
    /// assert!(!root.insert(1));
    /// assert_eq!(root.left().map(|n| *n.value()), Some(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        // Checked ahead of `cmp` so an equal value is never attached as a child.
        if value == self.value {
            return false;
        }

        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
            Ordering::Equal => return false,
        };
        match child {
            Some(node) => node.insert(value),
            None => {
                *child = Some(Box::new(Self::new(value)));
                true
            }
        }
    }

    /// Whether an equal value is held anywhere in the subtree rooted at this node.
    ///
    /// # Examples
    ///
    /// ```
    /// use recursive_bst::TreeNode;
    ///
    /// let mut root = TreeNode::new(2);
    /// root.insert(1);
    ///
    /// assert!(root.contains(&1));
    /// assert!(!root.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        if *value == self.value {
            return true;
        }

        match value.cmp(&self.value) {
            Ordering::Less => self.left.as_ref().map_or(false, |left| left.contains(value)),
            Ordering::Equal => true,
            Ordering::Greater => self
                .right
                .as_ref()
                .map_or(false, |right| right.contains(value)),
        }
    }

    /// Removes `value` from the subtree rooted at this node and returns what is left of the
    /// subtree. The returned subtree must be reattached by whoever owned this node: it may be
    /// this same node, one of its children, or nothing at all when a leaf was removed. If
    /// `value` isn't present the subtree is returned unchanged.
    ///
    /// A node with two children keeps its place in the tree and takes over the smallest value
    /// of its right subtree, which is removed from there instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use recursive_bst::TreeNode;
    ///
    /// let mut root = TreeNode::new(1);
    /// root.insert(2);
    ///
    /// // Removing the root hands back its only child.
    /// let root = Box::new(root).remove(&1).unwrap();
    /// assert_eq!(root.value(), &2);
    ///
    /// // Removing the last value leaves nothing.
    /// assert!(root.remove(&2).is_none());
    /// ```
    pub fn remove(self: Box<Self>, value: &T) -> Option<Box<Self>>
    where
        T: Ord,
    {
        self.detach(value).0
    }

    /// Recursive body of [`remove`][Self::remove]. Also reports whether `value` was found so
    /// owners can tell a removal from a no-op without searching twice.
    pub(crate) fn detach(mut self: Box<Self>, value: &T) -> (Link<T>, bool)
    where
        T: Ord,
    {
        if *value == self.value {
            return (self.unlink(), true);
        }

        match value.cmp(&self.value) {
            Ordering::Less => {
                let (new_left, found) = match self.left.take() {
                    Some(left) => left.detach(value),
                    None => (None, false),
                };
                self.left = new_left;
                (Some(self), found)
            }
            Ordering::Greater => {
                let (new_right, found) = match self.right.take() {
                    Some(right) => right.detach(value),
                    None => (None, false),
                };
                self.right = new_right;
                (Some(self), found)
            }
            Ordering::Equal => (self.unlink(), true),
        }
    }

    /// Drops this node's value and returns the subtree that takes its place.
    fn unlink(mut self: Box<Self>) -> Link<T> {
        match (self.left.take(), self.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (successor, new_right) = right.take_min();
                self.value = successor;
                self.left = Some(left);
                self.right = new_right;
                Some(self)
            }
        }
    }

    /// Detaches the leftmost node of this subtree. Returns its value and the subtree without
    /// it. The leftmost node never has a left child so its right child, if any, takes its place.
    fn take_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            None => {
                let Self { value, right, .. } = *self;
                (value, right)
            }
            Some(left) => {
                let (min, new_left) = left.take_min();
                self.left = new_left;
                (min, Some(self))
            }
        }
    }

    /// The number of nodes in the subtree rooted at this node, including this one.
    pub fn size(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |left| left.size())
            + self.right.as_ref().map_or(0, |right| right.size())
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use recursive_bst::TreeNode;
    ///
    /// let mut root = TreeNode::new(1);
    /// assert_eq!(root.depth(), 0);
    ///
    /// root.insert(2);
    /// root.insert(3);
    /// assert_eq!(root.depth(), 2);
    /// ```
    pub fn depth(&self) -> usize {
        match (self.left(), self.right()) {
            (None, None) => 0,
            (Some(child), None) | (None, Some(child)) => 1 + child.depth(),
            (Some(left), Some(right)) => 1 + left.depth().max(right.depth()),
        }
    }

    /// The smallest value in the subtree rooted at this node.
    pub fn min(&self) -> &T {
        match self.left() {
            Some(left) => left.min(),
            None => &self.value,
        }
    }

    /// The largest value in the subtree rooted at this node.
    pub fn max(&self) -> &T {
        match self.right() {
            Some(right) => right.max(),
            None => &self.value,
        }
    }

    /// The values of this subtree in ascending order, separated by `", "`. This is the
    /// [`Display`][fmt::Display] output of the node.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Whether every value in this subtree is strictly ordered with respect to its ancestors.
    pub(crate) fn is_ordered(&self) -> bool
    where
        T: Ord,
    {
        self.is_within(None, None)
    }

    /// Recursive helper for [`is_ordered`][Self::is_ordered]. `lower` and `upper` are exclusive
    /// bounds inherited from the ancestors.
    fn is_within(&self, lower: Option<&T>, upper: Option<&T>) -> bool
    where
        T: Ord,
    {
        lower.map_or(true, |lower| *lower < self.value)
            && upper.map_or(true, |upper| self.value < *upper)
            && self
                .left()
                .map_or(true, |left| left.is_within(lower, Some(&self.value)))
            && self
                .right()
                .map_or(true, |right| right.is_within(Some(&self.value), upper))
    }
}

/// Writes the in-order traversal, so a valid tree renders in ascending order.
impl<T> fmt::Display for TreeNode<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(left) = self.left() {
            write!(f, "{}, ", left)?;
        }
        write!(f, "{}", self.value)?;
        if let Some(right) = self.right() {
            write!(f, ", {}", right)?;
        }
        Ok(())
    }
}
