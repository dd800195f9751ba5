use std::fmt::{self, Debug, Display, Formatter};

#[doc(inline)]
pub use crate::util::error::EmptyStructure;
use crate::collections::linked::singly::{Iter, SinglyLinkedList};

/// A first-in-first-out queue, stored as a singly linked list with the front of the queue at its
/// head and the rear at its tail.
///
/// Popping an empty queue does nothing, while peeking into one is an error.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Queue {
    pub(crate) inner: SinglyLinkedList,
}

impl Queue {
    pub const fn new() -> Queue {
        Queue {
            inner: SinglyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `value` to the rear of the queue.
    pub fn push(&mut self, value: i32) {
        self.inner.push_back(value)
    }

    /// Removes the front of the queue and returns it, or [`None`] if the queue is empty.
    pub fn pop(&mut self) -> Option<i32> {
        self.inner.pop_front()
    }

    /// Returns the front of the queue without removing it.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::Queue;
    /// let mut queue = Queue::new();
    /// queue.push(1);
    /// queue.push(2);
    /// queue.pop();
    /// queue.push(3);
    /// assert_eq!(queue.peek(), Ok(2));
    /// ```
    pub fn peek(&self) -> Result<i32, EmptyStructure> {
        self.inner.front().ok_or(EmptyStructure { structure: "queue" })
    }

    /// Returns an iterator over the queue from front to rear.
    pub fn iter(&self) -> Iter<'_> {
        self.inner.iter()
    }
}

impl Extend<i32> for Queue {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl FromIterator<i32> for Queue {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Queue {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
