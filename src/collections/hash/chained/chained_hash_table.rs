use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

use super::Iter;
use crate::collections::hash::{DEFAULT_CAP, bucket_index, cap_or_default};
use crate::util::fmt::DebugRaw;

/// A hash table that resolves collisions by chaining entries into a singly linked list per bucket.
///
/// The number of buckets is fixed when the table is created, so chains grow without bound as
/// entries are added. Inserting never checks for an existing key: every insert prepends a new
/// entry and increases the length, so a key inserted twice is counted twice. Reads see the most
/// recent insert for a key, and [`remove`](ChainedHashTable::remove) only removes that one entry,
/// uncovering the older value.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `c`: The length of the chain in the bucket for the key in question.
/// - `b`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains_key` | `O(c)` |
/// | `iter` | `O(b + n)` |
pub struct ChainedHashTable {
    pub(crate) buckets: Box<[Chain]>,
    pub(crate) len: usize,
}

pub(crate) type Chain = Option<Box<Entry>>;

pub(crate) struct Entry {
    pub key: i32,
    pub value: i32,
    pub next: Chain,
}

impl Entry {
    /// Builds a chain holding `pairs` from head to tail.
    pub(crate) fn chain_of<I>(pairs: I) -> Chain
    where
        I: IntoIterator<Item = (i32, i32)>,
        I::IntoIter: DoubleEndedIterator,
    {
        pairs.into_iter().rev().fold(None, |next, (key, value)| {
            Some(Box::new(Entry { key, value, next }))
        })
    }

    /// Returns an iterator over the entries of `chain`, from head to tail.
    pub(crate) fn walk(chain: &Chain) -> impl Iterator<Item = &Entry> {
        iter::successors(chain.as_deref(), |entry| entry.next.as_deref())
    }
}

impl ChainedHashTable {
    /// Creates a new, empty ChainedHashTable with [`DEFAULT_CAP`] buckets.
    pub fn new() -> ChainedHashTable {
        ChainedHashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty ChainedHashTable with `cap` buckets, or [`DEFAULT_CAP`] buckets if
    /// `cap` is 0. The number of buckets never changes afterwards.
    pub fn with_cap(cap: usize) -> ChainedHashTable {
        ChainedHashTable {
            buckets: (0..cap_or_default(cap)).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Returns the number of entries in the table, including every entry for a duplicated key.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Prepends a new entry to the chain of the bucket for `key`, even if the key is already
    /// present.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::hash::ChainedHashTable;
    /// let mut table = ChainedHashTable::new();
    /// table.insert(1, 10);
    /// table.insert(1, 20);
    /// assert_eq!(table.get(1), Some(20));
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn insert(&mut self, key: i32, value: i32) {
        let index = bucket_index(key, self.cap());
        let bucket = &mut self.buckets[index];
        *bucket = Some(Box::new(Entry {
            key,
            value,
            next: bucket.take(),
        }));
        self.len += 1;
    }

    /// Returns the value of the most recently inserted entry for `key`.
    pub fn get(&self, key: i32) -> Option<i32> {
        Entry::walk(&self.buckets[bucket_index(key, self.cap())])
            .find(|entry| entry.key == key)
            .map(|entry| entry.value)
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Removes the most recently inserted entry for `key`, returning its value. Older entries for
    /// the same key are left in place.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::hash::ChainedHashTable;
    /// let mut table = ChainedHashTable::new();
    /// table.insert(1, 10);
    /// table.insert(1, 20);
    /// assert_eq!(table.remove(1), Some(20));
    /// assert_eq!(table.get(1), Some(10));
    /// ```
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let index = bucket_index(key, self.cap());
        let mut curr = &mut self.buckets[index];

        while curr.as_ref().is_some_and(|entry| entry.key != key) {
            // The loop condition just checked that curr is Some.
            curr = &mut curr.as_mut()?.next;
        }

        let entry = curr.take()?;
        *curr = entry.next;
        self.len -= 1;
        Some(entry.value)
    }

    /// Returns an iterator over every entry as a `(key, value)` pair, bucket by bucket and from
    /// the head of each chain to its tail.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(i32, i32)> for ChainedHashTable {
    fn extend<I: IntoIterator<Item = (i32, i32)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(i32, i32)> for ChainedHashTable {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        let mut table = ChainedHashTable::new();
        table.extend(iter);
        table
    }
}

impl Clone for ChainedHashTable {
    fn clone(&self) -> Self {
        let buckets = self
            .buckets
            .iter()
            .map(|chain| {
                let pairs: Vec<_> = Entry::walk(chain).map(|e| (e.key, e.value)).collect();
                Entry::chain_of(pairs)
            })
            .collect();

        ChainedHashTable {
            buckets,
            len: self.len,
        }
    }
}

impl PartialEq for ChainedHashTable {
    /// Tables are equal if they have the same number of buckets with identical chains.
    fn eq(&self, other: &Self) -> bool {
        self.cap() == other.cap() && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for ChainedHashTable {}

impl Drop for ChainedHashTable {
    fn drop(&mut self) {
        // Unlink chains one entry at a time, dropping a long chain recursively could overflow the
        // stack.
        for bucket in self.buckets.iter_mut() {
            let mut curr = bucket.take();
            while let Some(mut entry) = curr {
                curr = entry.next.take();
            }
        }
    }
}

impl Debug for ChainedHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("contents", &DebugRaw(self.to_string()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for ChainedHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
