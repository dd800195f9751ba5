use std::io::{Read, Write};

use super::Stack;
use crate::collections::linked::SinglyLinkedList;
use crate::persist::document::SequenceDocument;
use crate::persist::{Decoder, Encoder, Persist, PersistError};

/// Binary layout: `u64 len` followed by `len` × `i32` values from top to bottom.
///
/// Loading rebuilds the stack in the stored order, so the value written first ends up on top
/// again.
impl Persist for Stack {
    const NAME: &'static str = "stack";

    type Document = SequenceDocument;

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), PersistError> {
        encoder.write_sequence(self.len(), self.iter().copied())
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, PersistError> {
        Ok(Stack {
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
