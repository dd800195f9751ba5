use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, Node, NodePtr};
use crate::collections::linked::{Length, ONE};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in a single direction, tracking both its head and tail.
///
/// Popping from an empty list isn't an error, [`pop_front`](SinglyLinkedList::pop_front) and
/// [`pop_back`](SinglyLinkedList::pop_back) just return [`None`]. Operations taking an index
/// come in pairs, `try_x` returning an [`Err`] and `x` panicking when the index is out of bounds.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
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
/// | `pop_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert_after` | `O(i)` |
/// | `insert_before` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `remove_value` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct SinglyLinkedList {
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

impl SinglyLinkedList {
    pub const fn new() -> SinglyLinkedList {
        SinglyLinkedList { state: Empty }
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

    /// Adds `value` as the new head of the list.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(1));
    /// assert_eq!(list.back(), Some(2));
    /// ```
    pub fn push_front(&mut self, value: i32) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.head = NodePtr::from_node(Node {
                    value,
                    next: Some(contents.head),
                });
                contents.len = contents.len.saturating_add(1);
            },
        }
    }

    /// Adds `value` as the new tail of the list.
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
                        // SAFETY: Previous length is greater than 1, so the head is followed by at
                        // least one more node.
                        *head = unsafe { node.next.unreachable() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the tail of the list and returns its value, or [`None`] if the list is empty.
    /// Without a link to the previous node, this has to walk the whole list to find the new tail.
    pub fn pop_back(&mut self) -> Option<i32> {
        match &mut self.state {
            Empty => None,
            Full(contents) => {
                let old_tail = contents.tail;

                match contents.len.checked_sub(1) {
                    Some(new_len) => {
                        let new_tail = contents.seek(new_len.get() - 1);
                        new_tail.set_next(None);
                        contents.tail = new_tail;
                        contents.len = new_len;
                    },
                    None => self.state = Empty,
                }

                // SAFETY: The old tail is no longer reachable from the list.
                Some(unsafe { old_tail.take_node() }.value)
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
    /// such node.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList = [1, 3].into_iter().collect();
    /// list.try_insert_after(0, 2).unwrap();
    /// list.try_insert_after(2, 4).unwrap();
    /// assert_eq!(list.to_string(), "[1 -> 2 -> 3 -> 4]");
    /// assert!(list.try_insert_after(4, 5).is_err());
    /// ```
    pub fn try_insert_after(&mut self, index: usize, value: i32) -> Result<(), IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        let prev = contents.seek(index);

        let node = NodePtr::from_node(Node {
            value,
            next: prev.next(),
        });
        prev.set_next(Some(node));

        if prev == contents.tail {
            contents.tail = node;
        }
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
    pub fn try_insert_before(&mut self, index: usize, value: i32) -> Result<(), IndexOutOfBounds> {
        match index {
            0 => {
                self.push_front(value);
                Ok(())
            },
            val if val > self.len() => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
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
        let contents = self.checked_contents_for_index_mut(index)?;

        if index == 0 {
            // SAFETY: contents is already checked to be valid for index 0.
            return Ok(unsafe { self.pop_front().unreachable() });
        }

        let prev = contents.seek(index - 1);
        // SAFETY: index is in bounds, so the node before it has a successor.
        let target = unsafe { prev.next().unreachable() };
        prev.set_next(target.next());

        if target == contents.tail {
            contents.tail = prev;
        }
        // SAFETY: index is at least 1 and in bounds, so the length was at least 2.
        contents.len = unsafe { contents.len.checked_sub(1).unreachable() };

        // SAFETY: target has just been unlinked from the list.
        Ok(unsafe { target.take_node() }.value)
    }

    /// Removes the first node holding `value`, returning whether one was found.
    pub fn remove_value(&mut self, value: i32) -> bool {
        match self.index_of(value) {
            Some(index) => self.try_remove(index).is_ok(),
            None => false,
        }
    }

    /// Returns the index of the first node holding `value`.
    pub fn index_of(&self, value: i32) -> Option<usize> {
        self.iter().position(|item| *item == value)
    }

    pub fn contains(&self, value: i32) -> bool {
        self.index_of(value).is_some()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl SinglyLinkedList {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    /// Checks that the tail is the last node reachable from the head, and that the length matches
    /// the number of nodes.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    curr = next;
                    count += 1;
                }
                assert!(curr == tail, "The tail should be the last reachable node.");
                assert_eq!(count, len.get(), "The length should match the number of nodes.");
            },
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
}

impl ListContents {
    /// Walks forward from the head to the node at `index`, which must be in bounds.
    pub(crate) fn seek(&self, index: usize) -> NodePtr {
        let mut curr = self.head;
        for _ in 0..index {
            // SAFETY: index is less than the length, so there are at least index successors.
            curr = unsafe { curr.next().unreachable() };
        }
        curr
    }

    pub(crate) fn push_back(&mut self, value: i32) {
        let node = NodePtr::from_node(Node { value, next: None });
        self.tail.set_next(Some(node));
        self.tail = node;
        self.len = self.len.saturating_add(1);
    }

    pub(crate) fn wrap_one(value: i32) -> ListContents {
        let node = NodePtr::from_node(Node { value, next: None });

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

impl Index<usize> for SinglyLinkedList {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        self.checked_seek(index).throw().value()
    }
}

impl IndexMut<usize> for SinglyLinkedList {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.checked_seek(index).throw().value_mut()
    }
}

impl Extend<i32> for SinglyLinkedList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl FromIterator<i32> for SinglyLinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl Default for SinglyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SinglyLinkedList {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

impl Drop for SinglyLinkedList {
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

impl Debug for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
