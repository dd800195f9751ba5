use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use derive_more::IsVariant;

use super::Iter;
use crate::collections::hash::{DEFAULT_CAP, bucket_index, cap_or_default};
use crate::util::fmt::DebugRaw;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 7;
const LOAD_FACTOR_DENOMINATOR: usize = 10;

/// A hash table that resolves collisions with linear probing, wrapping around at the end of the
/// slots.
///
/// Removed entries leave a tombstone behind, so that probes for other keys can continue past
/// them. Inserts reuse tombstones, and growing the table drops them all. The capacity doubles
/// whenever an insert would take the load factor to 7/10 or more, so every insert leaves the load
/// factor below 7/10.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the OpenHashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
///
/// \* Probing takes additional time when keys collide, or when tombstones pile up between the
/// starting slot of a key and the slot that holds it.
///
/// \** If the OpenHashTable would become too full, `insert` rehashes every live entry into a table
/// of twice the capacity first. \* applies as well.
pub struct OpenHashTable {
    pub(crate) slots: Box<[Slot]>,
    pub(crate) len: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum Slot {
    #[default]
    Empty,
    Occupied {
        key: i32,
        value: i32,
    },
    /// A tombstone, keeping the entry that used to be here for the binary format.
    Deleted {
        key: i32,
        value: i32,
    },
}

impl OpenHashTable {
    /// Creates a new, empty OpenHashTable with [`DEFAULT_CAP`] slots.
    pub fn new() -> OpenHashTable {
        OpenHashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty OpenHashTable with `cap` slots, or [`DEFAULT_CAP`] slots if `cap` is
    /// 0.
    pub fn with_cap(cap: usize) -> OpenHashTable {
        OpenHashTable {
            slots: vec![Slot::Empty; cap_or_default(cap)].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the number of live entries in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of slots currently holding a tombstone.
    pub fn tombstones(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_deleted()).count()
    }

    /// Returns the ratio of live entries to slots.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    /// Inserts the `key`-`value` pair, returning the previous value if `key` was already present.
    /// An existing key keeps its slot and only has its value replaced, so the length doesn't
    /// change.
    ///
    /// If probing finds neither the key nor a free slot, the insert is dropped and logged. Because
    /// the table grows before reaching a load factor of 7/10, this doesn't happen in practice.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::hash::OpenHashTable;
    /// let mut table = OpenHashTable::with_cap(4);
    /// assert_eq!(table.insert(1, 10), None);
    /// assert_eq!(table.insert(1, 11), Some(10));
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.get(1), Some(11));
    /// ```
    pub fn insert(&mut self, key: i32, value: i32) -> Option<i32> {
        if let Some(index) = self.find_live(key)
            && let Slot::Occupied { value: existing, .. } = &mut self.slots[index]
        {
            return Some(mem::replace(existing, value));
        }

        while self.should_grow() {
            self.grow();
        }

        match self.find_free(key) {
            Some(index) => {
                self.slots[index] = Slot::Occupied { key, value };
                self.len += 1;
            },
            None => tracing::warn!(key, cap = self.cap(), "no free slot, dropping insert"),
        }
        None
    }

    /// Returns the value associated with `key`.
    pub fn get(&self, key: i32) -> Option<i32> {
        match self.slots[self.find_live(key)?] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.find_live(key).is_some()
    }

    /// Removes the entry for `key`, leaving a tombstone in its slot, and returns its value.
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let index = self.find_live(key)?;

        match self.slots[index] {
            Slot::Occupied { key, value } => {
                self.slots[index] = Slot::Deleted { key, value };
                self.len -= 1;
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns an iterator over the live entries as `(key, value)` pairs, in slot order.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl OpenHashTable {
    /// Determines whether inserting one more entry would take the load factor to 7/10 or more.
    pub(crate) fn should_grow(&self) -> bool {
        self.len.saturating_add(1).saturating_mul(LOAD_FACTOR_DENOMINATOR)
            >= self.cap().saturating_mul(LOAD_FACTOR_NUMERATOR)
    }

    /// Doubles the capacity, rehashing every live entry and dropping every tombstone.
    pub(crate) fn grow(&mut self) {
        let old_cap = self.cap();
        let new_cap = old_cap.saturating_mul(GROWTH_FACTOR);
        let old_slots = mem::replace(&mut self.slots, vec![Slot::Empty; new_cap].into_boxed_slice());

        for slot in old_slots.iter() {
            if let Slot::Occupied { key, value } = *slot
                && let Some(index) = self.find_free(key)
            {
                self.slots[index] = Slot::Occupied { key, value };
            }
        }

        tracing::trace!(old_cap, new_cap, len = self.len, "open hash table grown");
    }

    /// Returns the indices probed for `key`: every slot once, starting from its hash.
    pub(crate) fn probe(&self, key: i32) -> impl Iterator<Item = usize> + use<> {
        let cap = self.cap();
        let start = bucket_index(key, cap);
        (0..cap).map(move |offset| (start + offset) % cap)
    }

    /// Finds the slot holding `key` as a live entry. Probing skips over tombstones, and stops at
    /// the first empty slot or once every slot has been checked.
    pub(crate) fn find_live(&self, key: i32) -> Option<usize> {
        for index in self.probe(key) {
            match self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied { key: existing, .. } if existing == key => return Some(index),
                _ => {},
            }
        }
        None
    }

    /// Finds the first empty slot or tombstone on the probe path of `key`.
    pub(crate) fn find_free(&self, key: i32) -> Option<usize> {
        self.probe(key).find(|index| !self.slots[*index].is_occupied())
    }
}

impl Default for OpenHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(i32, i32)> for OpenHashTable {
    fn extend<I: IntoIterator<Item = (i32, i32)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(i32, i32)> for OpenHashTable {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        let mut table = OpenHashTable::new();
        table.extend(iter);
        table
    }
}

impl Clone for OpenHashTable {
    fn clone(&self) -> Self {
        OpenHashTable {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl PartialEq for OpenHashTable {
    /// Tables are equal if they hold the same entries, regardless of capacity or slot layout.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for OpenHashTable {}

impl Debug for OpenHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenHashTable")
            .field("contents", &DebugRaw(self.to_string()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("tombstones", &self.tombstones())
            .finish()
    }
}

impl Display for OpenHashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
