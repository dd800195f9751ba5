use std::iter::FusedIterator;

use super::{AvlTree, Branch, Node};

impl<'a> IntoIterator for &'a AvlTree {
    type Item = &'a i32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.descend(&self.root);
        iter
    }
}

/// A borrowing iterator over the keys of an [`AvlTree`], in ascending order.
pub struct Iter<'a> {
    /// The nodes still to be yielded along the current path, the next one on top.
    pub(crate) stack: Vec<&'a Node>,
    pub(crate) remaining: usize,
}

impl<'a> Iter<'a> {
    fn descend(&mut self, mut branch: &'a Branch) {
        while let Some(node) = branch.0.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend(&node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
