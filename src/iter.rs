//! In-order traversal of a [`Tree`].
//!
//! The iterator is lazy: it only holds the chain of ancestors whose values haven't been yielded
//! yet, so it never recurses and never allocates more than `height` stack slots. Calling
//! [`Tree::iter`] again starts a fresh traversal.

use std::iter::FusedIterator;

use crate::tree::{Node, Tree};

/// An iterator over the values of a [`Tree`] in ascending order.
///
/// Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtrees have been (or are being) visited but whose own values haven't
    /// been yielded. The top of the stack is the next value.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> Tree<T> {
    /// Returns an iterator visiting every stored value in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree: Tree<i32> = [3, 1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    /// // Each call starts over from the smallest value.
    /// assert_eq!(tree.iter().next(), Some(&1));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
