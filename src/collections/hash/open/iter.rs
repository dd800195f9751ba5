use std::iter::FusedIterator;
use std::slice;

use super::{OpenHashTable, Slot};

impl<'a> IntoIterator for &'a OpenHashTable {
    type Item = (i32, i32);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }
}

/// An iterator over the live entries of an [`OpenHashTable`] as `(key, value)` pairs. Empty
/// slots and tombstones are skipped.
pub struct Iter<'a> {
    pub(crate) slots: slice::Iter<'a, Slot>,
    pub(crate) remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match *slot {
            Slot::Occupied { key, value } => {
                self.remaining -= 1;
                Some((key, value))
            },
            _ => None,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
