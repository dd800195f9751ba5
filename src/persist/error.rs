use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

use derive_more::{Display, Error, From, IsVariant};

/// A file could not be opened, created, read or written.
#[derive(Debug)]
pub struct IOFailure {
    pub path: Option<PathBuf>,
    pub error: io::Error,
}

impl Display for IOFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "I/O failure on {}: {}", path.display(), self.error),
            None => write!(f, "I/O failure: {}", self.error),
        }
    }
}

impl std::error::Error for IOFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// The contents of a file are inconsistent with the format expected for the structure being
/// loaded.
#[derive(Debug, Display, Error, IsVariant)]
pub enum CorruptData {
    #[display("file ended before the structure was complete")]
    UnexpectedEof,
    #[display("element count {count} exceeds the limit of {limit}")]
    OversizedCount { count: u64, limit: u64 },
    #[display("byte {byte:#04x} is not a valid boolean flag")]
    InvalidFlag { byte: u8 },
    #[display("slot {slot} is marked deleted without being occupied")]
    InvalidSlot { slot: usize },
    #[display("hash table capacity of 0 cannot hold any entries")]
    ZeroCapacity,
    #[display("stored size {stored} doesn't match the {actual} entries present")]
    SizeMismatch { stored: u64, actual: u64 },
    #[display("key {key} is stored in bucket {bucket} but hashes to bucket {expected}")]
    MisplacedKey { key: i32, bucket: usize, expected: usize },
    #[display("key {key} breaks the ordering of the tree")]
    OutOfOrder { key: i32 },
    #[display("subtree rooted at key {key} is unbalanced")]
    Unbalanced { key: i32 },
    #[display("tree is deeper than {limit} levels")]
    TooDeep { limit: usize },
    #[display("malformed JSON document: {_0}")]
    Json(serde_json::Error),
}

/// An AVL tree containing the key `-1` can't be written in binary form, because that value marks
/// an absent subtree.
#[derive(Debug, Display, Error, Clone, Copy)]
#[display("key -1 collides with the absent subtree marker of the binary tree format")]
pub struct SentinelKey;

/// Every way that saving or loading a structure can fail.
#[derive(Debug, Display, From, Error, IsVariant)]
pub enum PersistError {
    IO(IOFailure),
    Corrupt(CorruptData),
    Sentinel(SentinelKey),
}

impl PersistError {
    /// Attaches the path of the file being processed to I/O failures that don't have one yet.
    pub(crate) fn at(self, path: &Path) -> PersistError {
        match self {
            PersistError::IO(IOFailure { path: None, error }) => IOFailure {
                path: Some(path.to_owned()),
                error,
            }.into(),
            other => other,
        }
    }
}

impl From<io::Error> for PersistError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof => CorruptData::UnexpectedEof.into(),
            _ => IOFailure { path: None, error }.into(),
        }
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(error: serde_json::Error) -> Self {
        match error.classify() {
            serde_json::error::Category::Io => IOFailure {
                path: None,
                error: error.into(),
            }.into(),
            serde_json::error::Category::Eof => CorruptData::UnexpectedEof.into(),
            _ => CorruptData::Json(error).into(),
        }
    }
}
