use std::fmt::{self, Debug, Display, Formatter};

#[doc(inline)]
pub use crate::util::error::EmptyStructure;
use crate::collections::linked::singly::{Iter, SinglyLinkedList};

/// A last-in-first-out stack, stored as a singly linked list with the top of the stack at its
/// head.
///
/// Popping an empty stack does nothing, while peeking into one is an error.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stack {
    pub(crate) inner: SinglyLinkedList,
}

impl Stack {
    pub const fn new() -> Stack {
        Stack {
            inner: SinglyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Places `value` on top of the stack.
    pub fn push(&mut self, value: i32) {
        self.inner.push_front(value)
    }

    /// Removes the top of the stack and returns it, or [`None`] if the stack is empty.
    pub fn pop(&mut self) -> Option<i32> {
        self.inner.pop_front()
    }

    /// Returns the top of the stack without removing it.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::linked::Stack;
    /// let mut stack = Stack::new();
    /// assert!(stack.peek().is_err());
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.peek(), Ok(2));
    /// ```
    pub fn peek(&self) -> Result<i32, EmptyStructure> {
        self.inner.front().ok_or(EmptyStructure { structure: "stack" })
    }

    /// Returns an iterator over the stack from top to bottom.
    pub fn iter(&self) -> Iter<'_> {
        self.inner.iter()
    }
}

impl FromIterator<i32> for Stack {
    /// Pushes every item in order, leaving the last one on top.
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut stack = Stack::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

impl Debug for Stack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Stack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
