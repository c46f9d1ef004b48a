//! This crate exposes a Binary Search Tree (BST) that can be built with minimal height from sorted
//! input, along with sample statistics over the values it stores.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores a
//! value and sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    its own value.
//!
//! > Note that equal values are never stored twice. Inserting a value that is already present
//! > leaves the tree untouched.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the number of
//! `Node`s on the longest path from the root `Node` to a leaf `Node`). The [`tree::Tree`] in this
//! crate never rebalances itself, so inserting values in ascending order gives a tree of height
//! `N`. Building the tree with [`builder::build_balanced`] instead limits the height to
//! `⌈lg(N + 1)⌉` by inserting the median of each sorted range before either of its halves.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree. [`stats`] uses that traversal to compute the sample mean,
//! variance, and standard deviation.
//!
//! ```
//! use balanced_bst::{builder::build_balanced, stats};
//!
//! let tree = build_balanced(&[1, 4, 5, 6, 7, 8, 14]);
//!
//! assert_eq!(tree.height(), 3);
//! assert!((stats::standard_deviation(&tree)? - 4.04).abs() < 0.01);
//! # Ok::<(), balanced_bst::error::Error>(())
//! ```

#![deny(missing_docs)]

pub mod builder;
pub mod error;
pub mod iter;
pub mod stats;
pub mod tree;

pub use builder::{build_balanced, BalancedBuilder, Strategy};
pub use error::{Error, Result};
pub use tree::Tree;
