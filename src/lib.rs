//! This crate exposes a recursive, unbalanced Binary Search Tree (BST)
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a node. A node stores a value and
//! sometimes has child nodes. The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some nodes have no children. These nodes are called "leaf nodes".
//!
//! Together these mean a value can be stored at most once. Searching takes
//! `O(depth)` where `depth` is the longest path from the root to a leaf.
//! Nothing here rebalances, so inserting sorted values produces a chain
//! whose depth is one less than its size. Visiting the left subtree, then
//! the node, then the right subtree yields the values in sorted order, which
//! is how trees are rendered.
//!
//! ## Layout
//!
//! [`TreeNode`] is the recursive core: every operation on it is defined in
//! terms of the same operation on its children. A node always holds a
//! value, so the empty tree is represented by [`Tree`], which owns an
//! optional root node.
//!
//! ```
//! use recursive_bst::Tree;
//!
//! let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
//!
//! assert_eq!(tree.to_string(), "3, 5, 8");
//! assert!(tree.remove(&3));
//! assert_eq!(tree.to_string(), "5, 8");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
pub mod tree;

pub use node::TreeNode;
pub use tree::Tree;
