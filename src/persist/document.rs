//! The shapes of the JSON documents written by [`Persist::save_json`](super::Persist::save_json).

use serde::{Deserialize, Serialize};

/// Values of a sequence in traversal order: `{"data": [..]}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDocument {
    pub data: Vec<i32>,
}

/// A single key-value pair of a hash table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDocument {
    pub key: i32,
    pub value: i32,
}

/// The live entries of a hash table in bucket or slot order: `{"entries": [..]}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntriesDocument {
    pub entries: Vec<EntryDocument>,
}

/// The keys of a tree in ascending order: `{"keys": [..]}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeysDocument {
    pub keys: Vec<i32>,
}
