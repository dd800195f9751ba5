use std::io::{Read, Write};

use super::SinglyLinkedList;
use crate::persist::document::SequenceDocument;
use crate::persist::{Decoder, Encoder, Persist, PersistError};

/// Binary layout: `u64 len` followed by `len` × `i32` values from head to tail.
impl Persist for SinglyLinkedList {
    const NAME: &'static str = "singly linked list";

    type Document = SequenceDocument;

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), PersistError> {
        encoder.write_sequence(self.len(), self.iter().copied())
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, PersistError> {
        let mut list = SinglyLinkedList::new();
        decoder.read_sequence(|value| list.push_back(value))?;
        Ok(list)
    }

    fn to_document(&self) -> Self::Document {
        SequenceDocument {
            data: self.iter().copied().collect(),
        }
    }

    fn load_document(&mut self, document: Self::Document) {
        *self = document.data.into_iter().collect();
    }
}
