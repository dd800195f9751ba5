use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter};
use crate::util::fmt::DebugRaw;

/// A binary search tree of unique `i32` keys, which keeps itself balanced by rotating nodes.
///
/// After every insert or remove, the heights of the two subtrees of any node differ by at most
/// one, keeping the height of the tree logarithmic in its length. Inserting a key that is already
/// present does nothing, as does removing one that isn't.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the AvlTree.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `height` | `O(1)` |
/// | `root` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `contains` | `O(log n)` |
/// | `min` | `O(log n)` |
/// | `max` | `O(log n)` |
pub struct AvlTree {
    pub(crate) root: Branch,
    pub(crate) len: usize,
}

impl AvlTree {
    pub const fn new() -> AvlTree {
        AvlTree {
            root: Branch(None),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, which is 0 for an
    /// empty tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns the key currently at the root of the tree.
    pub fn root(&self) -> Option<i32> {
        self.root.key()
    }

    pub fn min(&self) -> Option<i32> {
        self.root.min()
    }

    pub fn max(&self) -> Option<i32> {
        self.root.max()
    }

    /// Inserts `key` into the tree, returning false if it was already present.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::tree::AvlTree;
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(30));
    /// assert!(tree.insert(20));
    /// assert!(tree.insert(10));
    /// assert!(!tree.insert(10));
    /// assert_eq!(tree.root(), Some(20));
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn insert(&mut self, key: i32) -> bool {
        let inserted = self.root.insert(key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `key` from the tree, returning false if it wasn't present.
    pub fn remove(&mut self, key: i32) -> bool {
        let removed = self.root.remove(key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, key: i32) -> bool {
        let mut curr = self.root.0.as_deref();
        while let Some(node) = curr {
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left.0.as_deref(),
                Ordering::Greater => node.right.0.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns an iterator over the keys of the tree in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Checks the ordering, balance and cached heights of every node, returning the number of
    /// nodes.
    #[cfg(test)]
    pub(crate) fn verify_balance(&self) -> usize {
        fn verify(branch: &Branch, lower: Option<i32>, upper: Option<i32>) -> (usize, usize) {
            let Some(node) = &branch.0 else {
                return (0, 0);
            };
            assert!(lower.is_none_or(|lower| node.key > lower), "{} is out of order", node.key);
            assert!(upper.is_none_or(|upper| node.key < upper), "{} is out of order", node.key);

            let (left_height, left_len) = verify(&node.left, lower, Some(node.key));
            let (right_height, right_len) = verify(&node.right, Some(node.key), upper);
            assert!(left_height.abs_diff(right_height) <= 1, "{} is unbalanced", node.key);
            assert_eq!(node.height, 1 + left_height.max(right_height), "{} has a stale height", node.key);

            (node.height, left_len + right_len + 1)
        }

        let (_, len) = verify(&self.root, None, None);
        assert_eq!(len, self.len, "The tree's length doesn't match its nodes.");
        len
    }
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<i32> for AvlTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for AvlTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl Clone for AvlTree {
    fn clone(&self) -> Self {
        AvlTree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl PartialEq for AvlTree {
    /// Trees are equal if they hold the same keys, regardless of their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for AvlTree {}

impl Debug for AvlTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .field("root", &DebugRaw(format!("\n{:?}", self.root)))
            .finish()
    }
}

impl Display for AvlTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
