//! A plain, unbalanced Binary Search Tree. Nodes own their children through `Box`es and never
//! point back at their parents, so the whole tree is owned by the [`Tree`] value and is dropped
//! as a unit.
//!
//! # Examples
//!
//! ```
//! use bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert!(tree.insert(1, "one"));
//! assert_eq!(tree.find(&1), Some(&"one"));
//!
//! // Inserting an existing key is a no-op. The first payload is kept.
//! assert!(!tree.insert(1, "uno"));
//! assert_eq!(tree.find(&1), Some(&"one"));
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

/// What [`Tree::insert`] does with a key that is already in the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Leave the existing node (and its payload) alone and create nothing. Keys are unique and
    /// every traversal is unaffected by repeated inserts.
    #[default]
    Ignore,
    /// Always create a node, routing equal keys into the right subtree. Inorder traversals are
    /// then non-decreasing instead of strictly ascending.
    Right,
}

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single entry of the tree. `left` holds strictly smaller keys and `right` strictly larger
/// ones (or equal ones under [`DuplicatePolicy::Right`]).
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree mapping keys to optional payloads. Use `V = ()` for a tree of bare keys.
///
/// No rebalancing is done: inserting keys in ascending order produces a tree shaped like a
/// linked list. Every operation walks the tree with a loop or an explicit stack, so such trees
/// are fine to build, traverse and drop at any size.
pub struct Tree<K, V = ()> {
    root: Link<K, V>,
    len: usize,
    policy: DuplicatePolicy,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        // Detach every child before its parent is freed so `Box`'s own drop never recurses.
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("policy", &self.policy)
            .field("preorder", &self.preorder())
            .finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree` that ignores duplicate keys.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::Ignore)
    }

    /// Generate a new, empty `Tree` that handles duplicate keys according to `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::{DuplicatePolicy, Tree};
    /// use bst::Order;
    ///
    /// let mut tree: Tree<i32> = Tree::with_policy(DuplicatePolicy::Right);
    /// tree.bulk_load([2, 1, 2]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.keys(Order::Inorder), [1, 2, 2]);
    /// ```
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            root: None,
            len: 0,
            policy,
        }
    }

    /// The duplicate-key policy this tree was created with.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// How many nodes are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels the tree has: 0 when empty, 1 for a lone root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending keys give a tree that's one long right spine.
    /// tree.bulk_load([1, 2, 3, 4]);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<K, V>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left.as_deref().into_iter().chain(n.right.as_deref()))
                .collect();
        }
        height
    }

    /// The smallest key in the tree, if any.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree, if any.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Inserts `key` with its payload `value`, returning whether a node was created.
    ///
    /// The new node is attached where the search for `key` falls off the tree. When `key` is
    /// already present the result depends on the tree's [`DuplicatePolicy`]: by default nothing
    /// changes and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(8, "root"));
    /// assert!(tree.insert(3, "left"));
    /// assert!(!tree.insert(8, "again"));
    ///
    /// assert_eq!(tree.find(&8), Some(&"root"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let policy = self.policy;
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(Node::new_boxed(key, value));
                    self.len += 1;
                    return true;
                }
                Some(node) => {
                    link = match key.cmp(&node.key) {
                        Ordering::Less => &mut node.left,
                        Ordering::Greater => &mut node.right,
                        Ordering::Equal => match policy {
                            DuplicatePolicy::Ignore => {
                                trace!("key already present, insert ignored");
                                return false;
                            }
                            DuplicatePolicy::Right => &mut node.right,
                        },
                    }
                }
            }
        }
    }

    /// Inserts every key in `keys`, in order, each with a default payload. The order matters:
    /// the same keys loaded in a different order can give a differently shaped tree (and so
    /// different preorder, postorder and breadth-first results), although the inorder result is
    /// always the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    /// use bst::Order;
    ///
    /// let mut tree: Tree<i32> = Tree::new();
    /// tree.bulk_load([8, 3, 10, 1, 6, 14, 4, 7, 13]);
    ///
    /// assert_eq!(tree.keys(Order::BreadthFirst), [8, 3, 10, 1, 6, 14, 4, 7, 13]);
    /// assert_eq!(tree.keys(Order::Inorder), [1, 3, 4, 6, 7, 8, 10, 13, 14]);
    /// ```
    pub fn bulk_load<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Ord,
        V: Default,
    {
        let before = self.len;
        let mut seen = 0usize;
        for key in keys {
            seen += 1;
            self.insert(key, V::default());
        }
        let inserted = self.len - before;
        debug!(
            inserted,
            ignored = seen - inserted,
            len = self.len,
            "bulk load finished"
        );
    }

    /// Returns true iff a node with exactly this key is in the tree.
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Same as [`Tree::search`].
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key)
    }

    /// Potentially finds the payload stored with the given key. If no node has the key, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => n.right.as_deref(),
            };
        }
        None
    }

    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }
}

impl<K: Ord, V> Extend<(K, V)> for Tree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
