//! The owning side of a [`TreeNode`]. A `Tree` holds an optional root so it
//! can represent the empty tree, and forwards everything else to the root.
//!
//! # Examples
//!
//! ```
//! use recursive_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.render(), "");
//!
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     assert!(tree.insert(x));
//! }
//! assert_eq!(tree.size(), 7);
//! assert_eq!(tree.depth(), Some(2));
//!
//! // Removing a node with two children promotes the smallest value to its right.
//! assert!(tree.remove(&5));
//! assert_eq!(tree.root().map(|root| *root.value()), Some(7));
//! assert_eq!(tree.to_string(), "1, 3, 4, 7, 8, 9");
//!
//! // Removing it again does nothing.
//! assert!(!tree.remove(&5));
//! ```

use std::fmt;

use crate::TreeNode;

/// An unbalanced, duplicate free Binary Search Tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<Box<TreeNode<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Adds `value` to the tree. Returns `false` if the tree already held an equal value, in
    /// which case nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use recursive_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = match &mut self.root {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(TreeNode::new(value)));
                true
            }
        };

        if cfg!(test) {
            assert!(self.is_ordered());
        }
        inserted
    }

    /// Removes `value` from the tree. Returns whether it was present; removing a value that
    /// isn't in the tree leaves it untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use recursive_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.render(), "1, 3");
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let (root, removed) = match self.root.take() {
            Some(root) => root.detach(value),
            None => (None, false),
        };
        self.root = root;

        if cfg!(test) {
            assert!(self.is_ordered());
        }
        removed
    }

    /// Whether the tree holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root().map_or(false, |root| root.contains(value))
    }

    /// The number of values in the tree.
    pub fn size(&self) -> usize {
        self.root().map_or(0, TreeNode::size)
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of edges from the root to its deepest leaf. An empty tree has no nodes to
    /// measure and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recursive_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.depth(), None);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.depth(), Some(0));
    /// ```
    pub fn depth(&self) -> Option<usize> {
        self.root().map(TreeNode::depth)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(TreeNode::min)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(TreeNode::max)
    }

    /// Drops every node, leaving an empty tree.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// The values of the tree in ascending order, separated by `", "`. An empty tree renders as
    /// an empty string.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    fn is_ordered(&self) -> bool
    where
        T: Ord,
    {
        self.root().map_or(true, TreeNode::is_ordered)
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt::Display::fmt(root, f),
            None => Ok(()),
        }
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
