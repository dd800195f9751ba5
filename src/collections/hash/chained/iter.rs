use std::iter::FusedIterator;
use std::slice;

use super::{Chain, ChainedHashTable, Entry};

impl<'a> IntoIterator for &'a ChainedHashTable {
    type Item = (i32, i32);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            curr: None,
            remaining: self.len,
        }
    }
}

/// An iterator over the entries of a [`ChainedHashTable`] as `(key, value)` pairs.
pub struct Iter<'a> {
    pub(crate) buckets: slice::Iter<'a, Chain>,
    pub(crate) curr: Option<&'a Entry>,
    pub(crate) remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.curr {
                self.curr = entry.next.as_deref();
                self.remaining -= 1;
                return Some((entry.key, entry.value));
            }
            self.curr = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
