use std::io::{Read, Write};

use super::{AvlTree, Branch, Node};
use crate::persist::document::KeysDocument;
use crate::persist::{CorruptData, Decoder, Encoder, Persist, PersistError, SentinelKey};

/// Marks an absent subtree in the binary format.
const ABSENT: i32 = -1;

/// The deepest tree accepted when loading. A balanced tree this deep would hold far more keys
/// than fit in memory.
const MAX_DEPTH: usize = 64;

/// Binary layout: a pre-order dump, where each node is its `i32` key followed by its left and
/// then its right subtree, and an absent subtree is the key `-1`. A tree containing the key `-1`
/// can't be saved in this form and fails with [`SentinelKey`].
///
/// Loading rebuilds exactly the stored shape, rejecting keys out of search order, unbalanced
/// nodes and trees deeper than 64 levels.
impl Persist for AvlTree {
    const NAME: &'static str = "avl tree";

    type Document = KeysDocument;

    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), PersistError> {
        if self.contains(ABSENT) {
            return Err(SentinelKey.into());
        }
        encode_branch(&self.root, encoder)
    }

    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, PersistError> {
        let mut len = 0;
        let root = decode_branch(decoder, None, None, 0, &mut len)?;
        Ok(AvlTree { root, len })
    }

    fn to_document(&self) -> Self::Document {
        KeysDocument {
            keys: self.iter().copied().collect(),
        }
    }

    /// Inserts every key into an empty tree, so the shape is rebuilt by rotations rather than
    /// restored.
    fn load_document(&mut self, document: Self::Document) {
        *self = document.keys.into_iter().collect();
    }
}

fn encode_branch<W: Write>(branch: &Branch, encoder: &mut Encoder<W>) -> Result<(), PersistError> {
    match &branch.0 {
        Some(node) => {
            encoder.write_i32(node.key)?;
            encode_branch(&node.left, encoder)?;
            encode_branch(&node.right, encoder)
        },
        None => encoder.write_i32(ABSENT),
    }
}

/// Reads the subtree at `depth`, whose keys must all lie strictly between `lower` and `upper`.
fn decode_branch<R: Read>(
    decoder: &mut Decoder<R>,
    lower: Option<i32>,
    upper: Option<i32>,
    depth: usize,
    len: &mut usize,
) -> Result<Branch, PersistError> {
    let key = decoder.read_i32()?;
    if key == ABSENT {
        return Ok(Branch(None));
    }

    if depth >= MAX_DEPTH {
        return Err(CorruptData::TooDeep { limit: MAX_DEPTH }.into());
    }
    if lower.is_some_and(|lower| key <= lower) || upper.is_some_and(|upper| key >= upper) {
        return Err(CorruptData::OutOfOrder { key }.into());
    }

    let left = decode_branch(decoder, lower, Some(key), depth + 1, len)?;
    let right = decode_branch(decoder, Some(key), upper, depth + 1, len)?;

    let mut node = Node {
        key,
        height: 0,
        left,
        right,
    };
    node.update_height();
    if node.balance().abs() > 1 {
        return Err(CorruptData::Unbalanced { key }.into());
    }

    *len += 1;
    Ok(Branch(Some(Box::new(node))))
}
