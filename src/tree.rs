//! An owning, unbalanced Binary Search Tree where values double as keys.
//!
//! Every [`Node`] exclusively owns its children through `Option<Box<Node>>` so there are no parent
//! pointers and no cycles. Nothing here rebalances: inserting an already sorted sequence one value
//! at a time produces a tree shaped like a linked list. Use
//! [`build_balanced`][crate::builder::build_balanced] for a tree of minimal height.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting a value that is already present does nothing.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

/// A Binary Search Tree storing each distinct value once. For every node, all values in its left
/// subtree are strictly smaller and all values in its right subtree are strictly greater.
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

/// A single value of a [`Tree`] along with the (possibly empty) subtrees hanging off of it.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the subtree holding smaller values, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the subtree holding greater values, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns `true` if a new node was attached somewhere below (or at) this node.
    fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(node) => node.insert(value),
            None => {
                *child = Some(Box::new(Node::new(value)));
                true
            }
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value` into the tree, descending recursively from the root. If an equal value is
    /// already stored the tree is left untouched.
    ///
    /// No rebalancing happens, so the shape of the tree depends entirely on insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [1, 2, 3, 4, 5] {
    ///     tree.insert(x);
    /// }
    ///
    /// // Ascending inserts build a chain down the right side.
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let inserted = match &mut self.root {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };
        self.record_insert(inserted);
    }

    /// Same as [`insert`][Tree::insert] but walks down the tree with a cursor instead of
    /// recursing, so it is safe to use on arbitrarily deep (degenerate) trees.
    pub fn insert_iterative(&mut self, value: T)
    where
        T: Ord,
    {
        let inserted = descend_and_attach(&mut self.root, value);
        self.record_insert(inserted);
    }

    fn record_insert(&mut self, inserted: bool) {
        if inserted {
            self.len += 1;
        } else {
            trace!(len = self.len, "duplicate value absorbed");
        }
    }

    /// Returns `true` if the tree stores a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// The number of distinct values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has height
    /// 0 and a tree with a single node has height 1.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        max_depth
    }
}

/// Walks down from `slot` to the empty child where `value` belongs and attaches it there. Returns
/// `false` without attaching anything if an equal value is found on the way.
fn descend_and_attach<T: Ord>(slot: &mut Option<Box<Node<T>>>, value: T) -> bool {
    let mut cursor = slot;
    while let Some(node) = cursor {
        cursor = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut node.right,
        };
    }
    *cursor = Some(Box::new(Node::new(value)));
    true
}

impl<T> Drop for Tree<T> {
    // Children are detached onto a stack before each node is freed so that dropping a deep chain
    // doesn't recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Ord + Clone,
{
    // Re-inserting the values in pre-order reproduces the exact same shape.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            tree.insert_iterative(node.value.clone());
            stack.extend(node.right());
            stack.extend(node.left());
        }

        tree
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_iterative(value);
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
