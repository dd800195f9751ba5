use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, Node, NodePtr};
use crate::collections::linked::{Length, ONE};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions. Iteration works from either end, see
/// [`iter`](DoublyLinkedList::iter).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert_after` | `O(min(i, n-i))` |
/// | `insert_before` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `remove_value` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct DoublyLinkedList {
    pub(crate) state: ListState,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

pub(crate) struct ListContents {
    pub len: Length,
    pub head: NodePtr,
    pub tail: NodePtr,
}

impl DoublyLinkedList {
    pub const fn new() -> DoublyLinkedList {
        DoublyLinkedList { state: Empty }
    }

    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn front(&self) -> Option<i32> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head.value()),
        }
    }

    pub fn back(&self) -> Option<i32> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(*tail.value()),
        }
    }

    pub fn push_front(&mut self, value: i32) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    pub fn push_back(&mut self, value: i32) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the head of the list and returns its value, or [`None`] if the list is empty.
    pub fn pop_front(&mut self) -> Option<i32> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is unlinked from the list below, in both branches.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unreachable() };
                        new_head.set_prev(None);
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the tail of the list and returns its value, or [`None`] if the list is empty.
    pub fn pop_back(&mut self) -> Option<i32> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                // SAFETY: The tail is unlinked from the list below, in both branches.
                let node = unsafe { tail.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last element is
                        // preceded by at least one more.
                        let new_tail = unsafe { node.prev.unreachable() };
                        new_tail.set_next(None);
                        *tail = new_tail;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Inserts `value` directly after the node at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn insert_after(&mut self, index: usize, value: i32) {
        self.try_insert_after(index, value).throw()
    }

    /// Inserts `value` directly after the node at `index`, returning an [`Err`] if there is no
    /// such node. Inserting after the last node is the same as
    /// [`push_back`](DoublyLinkedList::push_back).
    pub fn try_insert_after(&mut self, index: usize, value: i32) -> Result<(), IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;

        if index == contents.len.get() - 1 {
            contents.push_back(value);
            return Ok(());
        }

        let prev = contents.seek(index);
        // SAFETY: prev isn't the tail, so it has a successor.
        let next = unsafe { prev.next().unreachable() };

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(prev),
            next: Some(next),
        });
        prev.set_next(Some(node));
        next.set_prev(Some(node));

        contents.len = contents.len.saturating_add(1);
        Ok(())
    }

    /// Inserts `value` so that it ends up at `index`. An `index` equal to the length appends.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    pub fn insert_before(&mut self, index: usize, value: i32) {
        self.try_insert_before(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] if `index` is greater
    /// than the length of the list.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList = [1, 3].into_iter().collect();
    /// list.try_insert_before(1, 2).unwrap();
    /// list.try_insert_before(3, 4).unwrap();
    /// assert_eq!(list.to_string(), "[1 <-> 2 <-> 3 <-> 4]");
    /// assert!(list.try_insert_before(5, 0).is_err());
    /// ```
    pub fn try_insert_before(&mut self, index: usize, value: i32) -> Result<(), IndexOutOfBounds> {
        match index {
            val if val > self.len() => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
            0 => {
                self.push_front(value);
                Ok(())
            },
            val => self.try_insert_after(val - 1, value),
        }
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> i32 {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<i32, IndexOutOfBounds> {
        Ok(*self.checked_seek(index)?.value())
    }

    /// Removes the node at `index` and returns its value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> i32 {
        self.try_remove(index).throw()
    }

    /// Removes the node at `index` and returns its value, or an [`Err`] if `index` is out of
    /// bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<i32, IndexOutOfBounds> {
        let target = self.checked_contents_for_index_mut(index)?.seek(index);
        // SAFETY: The index was in bounds, so the list isn't empty.
        Ok(unsafe { self.unlink(target).unreachable() })
    }

    /// Removes the first node holding `value`, returning whether one was found.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList = [1, 2, 1].into_iter().collect();
    /// assert!(list.remove_value(1));
    /// assert!(!list.remove_value(3));
    /// assert_eq!(list.to_string(), "[2 <-> 1]");
    /// ```
    pub fn remove_value(&mut self, value: i32) -> bool {
        let target = match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => {
                let mut curr = Some(*head);
                while let Some(ptr) = curr {
                    if *ptr.value() == value {
                        break;
                    }
                    curr = ptr.next();
                }
                curr
            },
        };

        target.and_then(|ptr| self.unlink(ptr)).is_some()
    }

    /// Returns the index of the first node holding `value`.
    pub fn index_of(&self, value: i32) -> Option<usize> {
        self.iter().position(|item| *item == value)
    }

    pub fn contains(&self, value: i32) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns an iterator over the values of the list from head to tail. The iterator is double
    /// ended, so `iter().rev()` traverses from tail to head.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl DoublyLinkedList {
    /// Unlinks `target`, which must be a node of this list, and returns its value. Returns [`None`]
    /// only if the list is empty.
    pub(crate) fn unlink(&mut self, target: NodePtr) -> Option<i32> {
        let Full(contents) = &mut self.state else {
            return None;
        };

        if target == contents.head {
            return self.pop_front();
        }
        if target == contents.tail {
            return self.pop_back();
        }

        // SAFETY: target is neither the head nor the tail, so it has neighbours in both directions
        // and the length is at least 3.
        let (prev, next, new_len) = unsafe {
            (
                target.prev().unreachable(),
                target.next().unreachable(),
                contents.len.checked_sub(1).unreachable(),
            )
        };
        prev.set_next(Some(next));
        next.set_prev(Some(prev));
        contents.len = new_len;

        // SAFETY: target has just been unlinked from the list.
        Some(unsafe { target.take_node() }.value)
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    pub(crate) fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Checks that `prev` and `next` are mutual inverses at every node, that the ends of the list
    /// have no outward links and that the length matches the number of nodes.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    assert!(next.prev() == Some(curr), "Links should be mutual inverses.");
                    curr = next;
                    count += 1;
                }
                assert!(tail == curr, "The tail should be the last reachable node.");
                assert_eq!(count, len.get(), "The length should match the number of nodes.");
            },
        }
    }
}

impl ListContents {
    /// Walks to the node at `index`, which must be in bounds, starting from whichever end of the
    /// list is nearer.
    pub(crate) fn seek(&self, index: usize) -> NodePtr {
        if index < self.len.get() / 2 {
            self.seek_fwd(index)
        } else {
            self.seek_bwd(index)
        }
    }

    pub(crate) fn seek_fwd(&self, index: usize) -> NodePtr {
        let mut curr = self.head;
        for _ in 0..index {
            // SAFETY: index is in bounds, so there are at least index nodes after the head.
            curr = unsafe { curr.next().unreachable() };
        }
        curr
    }

    pub(crate) fn seek_bwd(&self, index: usize) -> NodePtr {
        let mut curr = self.tail;
        for _ in index + 1..self.len.get() {
            // SAFETY: index is in bounds, so there are at least len - index - 1 nodes before the
            // tail.
            curr = unsafe { curr.prev().unreachable() };
        }
        curr
    }

    pub(crate) fn push_front(&mut self, value: i32) {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        self.head.set_prev(Some(node));
        self.head = node;
        self.len = self.len.saturating_add(1);
    }

    pub(crate) fn push_back(&mut self, value: i32) {
        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        self.tail.set_next(Some(node));
        self.tail = node;
        self.len = self.len.saturating_add(1);
    }

    pub(crate) fn wrap_one(value: i32) -> ListContents {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl ListState {
    pub(crate) fn single(value: i32) -> ListState {
        Full(ListContents::wrap_one(value))
    }
}

impl Index<usize> for DoublyLinkedList {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        self.checked_seek(index).throw().value()
    }
}

impl IndexMut<usize> for DoublyLinkedList {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.checked_seek(index).throw().value_mut()
    }
}

impl Extend<i32> for DoublyLinkedList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl FromIterator<i32> for DoublyLinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl Default for DoublyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DoublyLinkedList {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl PartialEq for DoublyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for DoublyLinkedList {}

impl Drop for DoublyLinkedList {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                // SAFETY: Every node is visited once and the list is never used again.
                curr = unsafe { ptr.take_node() }.next;
            }
        }
    }
}

impl Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for DoublyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
