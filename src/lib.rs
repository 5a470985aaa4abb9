//! This crate is a small, plain Binary Search Tree built for teaching
//! the four classic ways of walking a tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key (and
//! here, an optional payload) and may have child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`, where `height` is the longest path
//! from the root `Node` to a leaf `Node`. This tree never rebalances, so the
//! height depends entirely on insertion order: random keys give `O(lg N)`,
//! ascending keys give `N`.
//!
//! ## Traversals
//!
//! * **Breadth-first** visits all `Node`s at depth `d` before any at depth `d + 1`,
//!   left to right.
//! * **Preorder** visits a `Node` before its subtrees. Replaying these keys
//!   into an empty tree rebuilds the same shape.
//! * **Inorder** visits the left subtree, the `Node`, then the right subtree,
//!   which yields keys in ascending order.
//! * **Postorder** visits both subtrees before the `Node`.
//!
//! ```
//! use bst::{Order, Tree};
//!
//! let mut tree: Tree<i32> = Tree::new();
//! tree.bulk_load([8, 3, 10, 1, 6, 14, 4, 7, 13]);
//!
//! assert_eq!(tree.keys(Order::Preorder), [8, 3, 1, 6, 4, 7, 10, 14, 13]);
//! assert_eq!(tree.keys(Order::Postorder), [1, 4, 7, 6, 3, 13, 14, 10, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod input;
pub mod session;
pub mod traversal;
pub mod tree;

pub use traversal::{Order, ParseOrderError};
pub use tree::{DuplicatePolicy, Tree};
