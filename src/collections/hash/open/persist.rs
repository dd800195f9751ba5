use std::io::{Read, Write};

use super::{OpenHashTable, Slot};
use crate::collections::hash::bucket_index;
use crate::persist::codec::PREALLOC_LIMIT;
use crate::persist::document::{EntriesDocument, EntryDocument};
use crate::persist::{CorruptData, Decoder, Encoder, Persist, PersistError};

/// Binary layout: `u64 len`, `u64 cap`, then a record of `(i32 key, i32 value, bool occupied,
/// bool deleted)` for every slot in order. Tombstones keep the entry they replaced, empty slots
/// are written as `(0, 0, false, false)`.
///
/// Loading rejects a capacity of 0, slots flagged deleted without being occupied, a stored length
/// that disagrees with the live slots and live keys that a probe wouldn't find where they are
/// stored.
impl Persist for OpenHashTable {
    const NAME: &'static str = "open hash table";

    type Document = EntriesDocument;

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), PersistError> {
        encoder.write_len(self.len)?;
        encoder.write_len(self.cap())?;

        for slot in self.slots.iter() {
            let (key, value, occupied, deleted) = match *slot {
                Slot::Empty => (0, 0, false, false),
                Slot::Occupied { key, value } => (key, value, true, false),
                Slot::Deleted { key, value } => (key, value, true, true),
            };
            encoder.write_i32(key)?;
            encoder.write_i32(value)?;
            encoder.write_bool(occupied)?;
            encoder.write_bool(deleted)?;
        }
        Ok(())
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, PersistError> {
        let stored = decoder.read_u64()?;
        let cap = decoder.read_count(None)?;
        if cap == 0 {
            return Err(CorruptData::ZeroCapacity.into());
        }

        let mut slots = Vec::with_capacity(cap.min(PREALLOC_LIMIT));
        let mut len: usize = 0;

        for index in 0..cap {
            let key = decoder.read_i32()?;
            let value = decoder.read_i32()?;
            let occupied = decoder.read_bool()?;
            let deleted = decoder.read_bool()?;

            slots.push(match (occupied, deleted) {
                (false, false) => Slot::Empty,
                (true, false) => {
                    len += 1;
                    Slot::Occupied { key, value }
                },
                (true, true) => Slot::Deleted { key, value },
                (false, true) => return Err(CorruptData::InvalidSlot { slot: index }.into()),
            });
        }

        if len as u64 != stored {
            return Err(CorruptData::SizeMismatch {
                stored,
                actual: len as u64,
            }
            .into());
        }

        let table = OpenHashTable {
            slots: slots.into_boxed_slice(),
            len,
        };

        for (index, slot) in table.slots.iter().enumerate() {
            if let Slot::Occupied { key, .. } = *slot
                && table.find_live(key) != Some(index)
            {
                return Err(CorruptData::MisplacedKey {
                    key,
                    bucket: index,
                    expected: bucket_index(key, cap),
                }
                .into());
            }
        }

        Ok(table)
    }

    fn to_document(&self) -> Self::Document {
        EntriesDocument {
            entries: self
                .iter()
                .map(|(key, value)| EntryDocument { key, value })
                .collect(),
        }
    }

    /// Starts from an empty table with the current capacity and inserts every entry, growing as
    /// needed. A key listed more than once keeps its last value.
    fn load_document(&mut self, document: Self::Document) {
        let mut table = OpenHashTable::with_cap(self.cap());
        for EntryDocument { key, value } in document.entries {
            table.insert(key, value);
        }
        *self = table;
    }
}
