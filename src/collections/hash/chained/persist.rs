use std::io::{Read, Write};

use super::{ChainedHashTable, Entry};
use crate::collections::hash::bucket_index;
use crate::persist::codec::PREALLOC_LIMIT;
use crate::persist::document::{EntriesDocument, EntryDocument};
use crate::persist::{CorruptData, Decoder, Encoder, Persist, PersistError};

/// Binary layout: `u64 len`, `u64 cap`, then for each bucket in order a `u64` chain length
/// followed by that many `(i32 key, i32 value)` pairs from the head of the chain to its tail.
///
/// Loading rejects a capacity of 0, keys stored outside of their hash bucket and a stored length
/// that disagrees with the chains.
impl Persist for ChainedHashTable {
    const NAME: &'static str = "chained hash table";

    type Document = EntriesDocument;

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), PersistError> {
        encoder.write_len(self.len)?;
        encoder.write_len(self.cap())?;

        for chain in self.buckets.iter() {
            encoder.write_len(Entry::walk(chain).count())?;
            for entry in Entry::walk(chain) {
                encoder.write_i32(entry.key)?;
                encoder.write_i32(entry.value)?;
            }
        }
        Ok(())
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, PersistError> {
        let stored = decoder.read_u64()?;
        let cap = decoder.read_count(None)?;
        if cap == 0 {
            return Err(CorruptData::ZeroCapacity.into());
        }

        // Chains are only linked up once the whole file has been validated.
        let mut chains: Vec<Vec<(i32, i32)>> = Vec::with_capacity(cap.min(PREALLOC_LIMIT));
        let mut len: u64 = 0;

        for bucket in 0..cap {
            let chain_len = decoder.read_count(Some(stored.saturating_sub(len)));
            let chain_len = match chain_len {
                Err(PersistError::Corrupt(CorruptData::OversizedCount { count, .. })) => {
                    return Err(CorruptData::SizeMismatch {
                        stored,
                        actual: len.saturating_add(count),
                    }
                    .into());
                },
                other => other?,
            };

            let mut pairs = Vec::with_capacity(chain_len.min(PREALLOC_LIMIT));
            for _ in 0..chain_len {
                let key = decoder.read_i32()?;
                let value = decoder.read_i32()?;

                let expected = bucket_index(key, cap);
                if expected != bucket {
                    return Err(CorruptData::MisplacedKey {
                        key,
                        bucket,
                        expected,
                    }
                    .into());
                }
                pairs.push((key, value));
            }

            len += chain_len as u64;
            chains.push(pairs);
        }

        if len != stored {
            return Err(CorruptData::SizeMismatch {
                stored,
                actual: len,
            }
            .into());
        }

        Ok(ChainedHashTable {
            buckets: chains.into_iter().map(Entry::chain_of).collect(),
            len: len as usize,
        })
    }

    fn to_document(&self) -> Self::Document {
        EntriesDocument {
            entries: self
                .iter()
                .map(|(key, value)| EntryDocument { key, value })
                .collect(),
        }
    }

    /// Keeps the current number of buckets. Entries are inserted in reverse so that each chain
    /// ends up in the order it was written in.
    fn load_document(&mut self, document: Self::Document) {
        let mut table = ChainedHashTable::with_cap(self.cap());
        for EntryDocument { key, value } in document.entries.into_iter().rev() {
            table.insert(key, value);
        }
        *self = table;
    }
}
