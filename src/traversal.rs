//! The four ways to walk a [`Tree`]: breadth-first (level order), preorder, inorder and
//! postorder.
//!
//! Every traversal builds its whole result in one pass and returns it as a `Vec` of
//! `(key, payload)` pairs. The depth-first orders keep their own stack instead of recursing, so
//! a degenerate tree doesn't bound how deep they can go. They emit nodes in exactly the order
//! the textbook recursive definitions do.
//!
//! # Examples
//!
//! ```
//! use bst::{Order, Tree};
//!
//! let mut tree: Tree<i32> = Tree::new();
//! tree.bulk_load([5, 2, 9, 1, 3, 7, 12, 6, 8]);
//!
//! assert_eq!(tree.keys(Order::BreadthFirst), [5, 2, 9, 1, 3, 7, 12, 6, 8]);
//! assert_eq!(tree.keys(Order::Preorder), [5, 2, 1, 3, 9, 7, 6, 8, 12]);
//! assert_eq!(tree.keys(Order::Inorder), [1, 2, 3, 5, 6, 7, 8, 9, 12]);
//! assert_eq!(tree.keys(Order::Postorder), [1, 3, 2, 6, 8, 7, 12, 9, 5]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tree::{Node, Tree};

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Level by level from the root, left to right within a level.
    BreadthFirst,
    /// A node, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the node, then the right subtree. Sorted by key.
    Inorder,
    /// The left subtree, then the right subtree, then the node.
    Postorder,
}

impl Order {
    /// All four orders, breadth-first first.
    pub const ALL: [Order; 4] = [
        Order::BreadthFirst,
        Order::Preorder,
        Order::Inorder,
        Order::Postorder,
    ];

    /// The canonical name, as accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Order::BreadthFirst => "breadth-first",
            Order::Preorder => "preorder",
            Order::Inorder => "inorder",
            Order::Postorder => "postorder",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names none of the traversal orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traversal order `{0}` (expected breadth-first, preorder, inorder or postorder)")]
pub struct ParseOrderError(pub String);

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth-first" | "breadthfirst" | "bfs" | "level" => Ok(Order::BreadthFirst),
            "preorder" | "pre-order" | "pre" => Ok(Order::Preorder),
            "inorder" | "in-order" | "in" => Ok(Order::Inorder),
            "postorder" | "post-order" | "post" => Ok(Order::Postorder),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Walks the tree in the given order.
    pub fn traverse(&self, order: Order) -> Vec<(&K, &V)> {
        match order {
            Order::BreadthFirst => self.breadth_first(),
            Order::Preorder => self.preorder(),
            Order::Inorder => self.inorder(),
            Order::Postorder => self.postorder(),
        }
    }

    /// Just the keys, in the given order.
    pub fn keys(&self, order: Order) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(order)
            .into_iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Level-order traversal. A queue is seeded with the root; each dequeued node is emitted and
    /// then its left child, followed by its right child, is queued.
    pub fn breadth_first(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len());
        let mut queue: VecDeque<&Node<K, V>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push((&node.key, &node.value));
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }

    /// Node, left subtree, right subtree. Inserting the keys in this order into an empty tree
    /// rebuilds a tree of the same shape.
    pub fn preorder(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<&Node<K, V>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push((&node.key, &node.value));
            // Right goes on first so left comes off first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Left subtree, node, right subtree. This is ascending key order.
    pub fn inorder(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<&Node<K, V>> = Vec::new();
        let mut next = self.root();
        loop {
            while let Some(node) = next {
                stack.push(node);
                next = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            out.push((&node.key, &node.value));
            next = node.right.as_deref();
        }
        out
    }

    /// Left subtree, right subtree, node. Children always come before their parent.
    pub fn postorder(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len());
        // The flag marks a node whose children have already been pushed.
        let mut stack: Vec<(&Node<K, V>, bool)> =
            self.root().map(|root| (root, false)).into_iter().collect();
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                out.push((&node.key, &node.value));
                continue;
            }
            stack.push((node, true));
            stack.extend(node.right.as_deref().map(|right| (right, false)));
            stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
        out
    }
}
