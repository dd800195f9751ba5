use std::io::{Read, Write};

use super::Queue;
use crate::collections::linked::SinglyLinkedList;
use crate::persist::document::SequenceDocument;
use crate::persist::{Decoder, Encoder, Persist, PersistError};

/// Binary layout: `u64 len` followed by `len` × `i32` values from front to rear.
impl Persist for Queue {
    const NAME: &'static str = "queue";

    type Document = SequenceDocument;

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), PersistError> {
        self.inner.encode(encoder)
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, PersistError> {
        Ok(Queue {
            inner: SinglyLinkedList::decode(decoder)?,
        })
    }

    fn to_document(&self) -> Self::Document {
        self.inner.to_document()
    }

    fn load_document(&mut self, document: Self::Document) {
        self.inner.load_document(document)
    }
}
