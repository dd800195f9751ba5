use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, ListContents, ListState, SinglyLinkedList};

impl<'a> IntoIterator for &'a SinglyLinkedList {
    type Item = &'a i32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            curr: match self.state {
                ListState::Empty => None,
                ListState::Full(ListContents { head, .. }) => Some(head),
            },
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over the values of a [`SinglyLinkedList`], from head to tail.
pub struct Iter<'a> {
    pub(crate) curr: Link,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a SinglyLinkedList>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|ptr| {
            self.curr = ptr.next();
            self.remaining -= 1;
            ptr.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
