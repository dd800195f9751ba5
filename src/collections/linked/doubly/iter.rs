use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{DoublyLinkedList, Link, ListContents, ListState};

impl<'a> IntoIterator for &'a DoublyLinkedList {
    type Item = &'a i32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let (front, back) = match self.state {
            ListState::Empty => (None, None),
            ListState::Full(ListContents { head, tail, .. }) => (Some(head), Some(tail)),
        };

        Iter {
            front,
            back,
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over the values of a [`DoublyLinkedList`]. Iterates from head to tail,
/// or from tail to head when reversed.
pub struct Iter<'a> {
    pub(crate) front: Link,
    pub(crate) back: Link,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a DoublyLinkedList>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.front.map(|ptr| {
            self.front = ptr.next();
            self.remaining -= 1;
            ptr.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.back.map(|ptr| {
            self.back = ptr.prev();
            self.remaining -= 1;
            ptr.value()
        })
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
