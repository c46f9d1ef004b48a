//! Construction of minimal-height trees from sorted input.
//!
//! The median of the sorted range is inserted first, then the same is done for the lower and upper
//! halves. Every level halves the span still to be inserted, so a duplicate-free input of `n`
//! values produces a tree of height `⌈log2(n + 1)⌉`.
//!
//! # Precondition
//!
//! The input must already be sorted in ascending order. This is **not** checked. Unsorted input
//! still produces a valid Binary Search Tree (every value goes through [`Tree::insert`]) but its
//! height is no longer guaranteed to be logarithmic. Duplicates are allowed and are dropped by
//! the insertion's dedup rule.
//!
//! With the default [`Strategy::Recursive`] every value goes through the recursive
//! [`Tree::insert`], so badly ordered input can recurse once per value already inserted and
//! exhaust the call stack. [`Strategy::Iterative`] never recurses, whatever the input order, and
//! is the one to use for input that isn't known to be sorted.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::builder::build_balanced;
//!
//! let tree = build_balanced(&[1, 2, 3, 4, 5]);
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(3));
//! ```

use tracing::{debug, instrument};

use crate::tree::Tree;

/// How [`BalancedBuilder`] walks the sorted input.
///
/// Both strategies insert values in exactly the same order, so they build identical trees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Recurse once per half-range. Recursion depth is bounded by the height of the result.
    #[default]
    Recursive,
    /// Keep pending half-ranges on an explicit stack.
    Iterative,
}

/// Builds balanced [`Tree`]s from sorted slices.
///
/// # Examples
///
/// ```
/// use balanced_bst::builder::{BalancedBuilder, Strategy};
///
/// let builder = BalancedBuilder::new().with_strategy(Strategy::Iterative);
/// let tree = builder.build(&[10, 20, 30, 40, 50, 60]);
///
/// assert_eq!(tree.len(), 6);
/// assert_eq!(tree.height(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalancedBuilder {
    strategy: Strategy,
}

impl BalancedBuilder {
    /// A builder using the default [`Strategy::Recursive`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the strategy used by [`build`][BalancedBuilder::build].
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The strategy this builder will use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Builds a tree from `sorted`, which must be in ascending order (see the
    /// [module docs][self]).
    #[instrument(level = "debug", skip(sorted), fields(input_len = sorted.len()))]
    pub fn build<T>(&self, sorted: &[T]) -> Tree<T>
    where
        T: Ord + Clone,
    {
        let mut tree = Tree::new();
        match self.strategy {
            Strategy::Recursive => insert_middle(&mut tree, sorted),
            Strategy::Iterative => insert_middle_iterative(&mut tree, sorted),
        }
        debug!(len = tree.len(), height = tree.height(), "built balanced tree");
        tree
    }
}

/// Builds a balanced tree from an ascending slice with the default [`Strategy`].
///
/// Shorthand for `BalancedBuilder::new().build(sorted)`.
pub fn build_balanced<T>(sorted: &[T]) -> Tree<T>
where
    T: Ord + Clone,
{
    BalancedBuilder::new().build(sorted)
}

/// Index of the lower median of a non-empty range. For the inclusive range `[first, last]` this is
/// `first + (last - first) / 2`, which relative to the start of the range is `(len - 1) / 2`.
fn lower_median(len: usize) -> usize {
    debug_assert!(len > 0);
    (len - 1) / 2
}

/// Inserts the middle of `xs` and then recurses on the halves either side of it.
fn insert_middle<T>(tree: &mut Tree<T>, xs: &[T])
where
    T: Ord + Clone,
{
    if xs.is_empty() {
        return;
    }

    let mid = lower_median(xs.len());
    tree.insert(xs[mid].clone());
    insert_middle(tree, &xs[..mid]);
    insert_middle(tree, &xs[mid + 1..]);
}

/// Same insertion order as [`insert_middle`] with the pending ranges kept on the heap. The upper
/// half is pushed first so the lower half is popped (and inserted) first.
fn insert_middle_iterative<T>(tree: &mut Tree<T>, xs: &[T])
where
    T: Ord + Clone,
{
    let mut stack = vec![xs];
    while let Some(xs) = stack.pop() {
        if xs.is_empty() {
            continue;
        }

        let mid = lower_median(xs.len());
        tree.insert_iterative(xs[mid].clone());
        stack.push(&xs[mid + 1..]);
        stack.push(&xs[..mid]);
    }
}
