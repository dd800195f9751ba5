use std::io::{Read, Write};

use super::DynamicArray;
use crate::persist::document::SequenceDocument;
use crate::persist::{Decoder, Encoder, MAX_SEQUENCE_LEN, Persist, PersistError};

/// Binary layout: `u64 len` followed by `len` × `i32` values in index order.
impl Persist for DynamicArray {
    const NAME: &'static str = "array";

    type Document = SequenceDocument;

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), PersistError> {
        encoder.write_sequence(self.len, self.iter().copied())
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, PersistError> {
        let len = decoder.read_count(Some(MAX_SEQUENCE_LEN))?;

        // Start from the exact stored size, as long as that is at least the minimum capacity.
        let mut arr = DynamicArray::with_cap(len.max(super::dynamic_array::MIN_CAP));
        for _ in 0..len {
            arr.push(decoder.read_i32()?);
        }
        Ok(arr)
    }

    fn to_document(&self) -> Self::Document {
        SequenceDocument {
            data: self.to_vec(),
        }
    }

    fn load_document(&mut self, document: Self::Document) {
        *self = document.data.into_iter().collect();
    }
}
