use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

/// An owned subtree, which is empty when it holds [`None`].
#[derive(Default, Clone)]
pub(crate) struct Branch(pub Option<Box<Node>>);

#[derive(Clone)]
pub(crate) struct Node {
    pub key: i32,
    /// The number of nodes on the longest path down from here, so 1 for a leaf.
    pub height: usize,
    pub left: Branch,
    pub right: Branch,
}

impl Node {
    pub fn leaf(key: i32) -> Box<Node> {
        Box::new(Node {
            key,
            height: 1,
            left: Branch(None),
            right: Branch(None),
        })
    }

    pub fn update_height(&mut self) {
        self.height = 1 + self.left.height().max(self.right.height());
    }

    /// The height of the left subtree minus that of the right.
    pub fn balance(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }
}

impl Branch {
    pub fn height(&self) -> usize {
        self.0.as_ref().map_or(0, |node| node.height)
    }

    pub fn balance(&self) -> isize {
        self.0.as_ref().map_or(0, |node| node.balance())
    }

    pub fn key(&self) -> Option<i32> {
        self.0.as_ref().map(|node| node.key)
    }

    pub fn min(&self) -> Option<i32> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(node.key)
    }

    pub fn max(&self) -> Option<i32> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(node.key)
    }

    /// Inserts `key` below this branch, rebalancing every node on the way back up. Returns false
    /// without changing anything if `key` is already present.
    pub fn insert(&mut self, key: i32) -> bool {
        let Some(node) = &mut self.0 else {
            self.0 = Some(Node::leaf(key));
            return true;
        };

        let inserted = match key.cmp(&node.key) {
            Ordering::Less => node.left.insert(key),
            Ordering::Greater => node.right.insert(key),
            Ordering::Equal => false,
        };

        if inserted {
            self.rebalance_after_insert(key);
        }
        inserted
    }

    /// Removes `key` from below this branch, rebalancing every node on the way back up. A node
    /// with two children takes the key of its in-order successor, which is then removed from the
    /// right subtree instead.
    pub fn remove(&mut self, key: i32) -> bool {
        let Some(node) = &mut self.0 else {
            return false;
        };

        let removed = match key.cmp(&node.key) {
            Ordering::Less => node.left.remove(key),
            Ordering::Greater => node.right.remove(key),
            Ordering::Equal => {
                if node.left.0.is_some()
                    && let Some(successor) = node.right.min()
                {
                    node.key = successor;
                    node.right.remove(successor);
                } else {
                    let child = match node.left.0.is_some() {
                        true => mem::take(&mut node.left),
                        false => mem::take(&mut node.right),
                    };
                    *self = child;
                }
                true
            },
        };

        if removed {
            self.rebalance_after_remove();
        }
        removed
    }

    /// Picks the rotation from where the new key went relative to the heavy child.
    fn rebalance_after_insert(&mut self, key: i32) {
        let Some(node) = &mut self.0 else {
            return;
        };
        node.update_height();
        let balance = node.balance();

        if balance > 1 {
            if node.left.key().is_some_and(|left| key > left) {
                node.left.rotate_left();
            }
            self.rotate_right();
        } else if balance < -1 {
            if node.right.key().is_some_and(|right| key < right) {
                node.right.rotate_right();
            }
            self.rotate_left();
        }
    }

    /// Picks the rotation from the balance of the heavy child, a child of balance 0 needs only a
    /// single rotation.
    fn rebalance_after_remove(&mut self) {
        let Some(node) = &mut self.0 else {
            return;
        };
        node.update_height();
        let balance = node.balance();

        if balance > 1 {
            if node.left.balance() < 0 {
                node.left.rotate_left();
            }
            self.rotate_right();
        } else if balance < -1 {
            if node.right.balance() > 0 {
                node.right.rotate_right();
            }
            self.rotate_left();
        }
    }

    /// Lifts the left child into the place of this node. Only the heights of the two nodes that
    /// move are updated.
    fn rotate_right(&mut self) {
        let Some(mut root) = self.0.take() else {
            return;
        };
        let Some(mut pivot) = root.left.0.take() else {
            self.0 = Some(root);
            return;
        };

        root.left = mem::take(&mut pivot.right);
        root.update_height();
        pivot.right = Branch(Some(root));
        pivot.update_height();
        self.0 = Some(pivot);
    }

    /// Lifts the right child into the place of this node. Only the heights of the two nodes that
    /// move are updated.
    fn rotate_left(&mut self) {
        let Some(mut root) = self.0.take() else {
            return;
        };
        let Some(mut pivot) = root.right.0.take() else {
            self.0 = Some(root);
            return;
        };

        root.right = mem::take(&mut pivot.left);
        root.update_height();
        pivot.left = Branch(Some(root));
        pivot.update_height();
        self.0 = Some(pivot);
    }
}

impl Debug for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.key,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
