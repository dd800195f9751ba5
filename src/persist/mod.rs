//! Binary and JSON persistence for every collection in the crate.
//!
//! # Binary Formats
//! All formats are little-endian, with `u64` counts and `i32` values. Each structure documents
//! its own layout on its [`Persist`] implementation, the primitives live in [`codec`].
//!
//! # JSON Formats
//! Each structure is written as an object with a single array field, see [`document`]. Documents
//! are pretty-printed with two space indentation.
//!
//! # Loading
//! Loading is destructive: the existing contents of the target are replaced entirely. The new
//! contents are decoded into a separate value first though, so a failed load leaves the target
//! untouched. File handles only live for the duration of a single call and are closed on every
//! path out of it.

pub mod codec;
pub mod document;
mod error;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[doc(inline)]
pub use codec::{Decoder, Encoder, MAX_SEQUENCE_LEN};
pub use error::*;

/// A structure which can be saved to and loaded from files in both binary and JSON form.
pub trait Persist: Sized {
    /// The name of the structure, used in log output.
    const NAME: &'static str;

    /// The JSON representation of the structure.
    type Document: Serialize + DeserializeOwned;

    /// Writes the binary form of self.
    fn encode<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), PersistError>;

    /// Reads a structure previously written by [`encode`](Persist::encode).
    fn decode<R: Read>(decoder: &mut Decoder<R>) -> Result<Self, PersistError>;

    /// Produces the JSON representation of self.
    fn to_document(&self) -> Self::Document;

    /// Replaces the contents of self with those described by `document`.
    fn load_document(&mut self, document: Self::Document);

    /// Writes self to the file at `path` in binary form, creating or truncating it.
    fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let path = path.as_ref();
        report::<Self, _>("binary save", path, write_binary(self, path))
    }

    /// Replaces the contents of self with the binary form stored at `path`.
    fn load_binary<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let path = path.as_ref();
        let loaded = report::<Self, _>("binary load", path, read_binary(path))?;
        *self = loaded;
        Ok(())
    }

    /// Writes self to the file at `path` as JSON, creating or truncating it.
    fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let path = path.as_ref();
        report::<Self, _>("json save", path, write_json(&self.to_document(), path))
    }

    /// Replaces the contents of self with the JSON document stored at `path`.
    fn load_json<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let path = path.as_ref();
        let document = report::<Self, _>("json load", path, read_json::<Self::Document>(path))?;
        self.load_document(document);
        Ok(())
    }
}

fn write_binary<T: Persist>(value: &T, path: &Path) -> Result<(), PersistError> {
    let mut encoder = Encoder::new(BufWriter::new(File::create(path)?));
    value.encode(&mut encoder)?;
    encoder.flush()
}

fn read_binary<T: Persist>(path: &Path) -> Result<T, PersistError> {
    let mut decoder = Decoder::new(BufReader::new(File::open(path)?));
    T::decode(&mut decoder)
}

fn write_json<D: Serialize>(document: &D, path: &Path) -> Result<(), PersistError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.write_all(b"\n")?;
    Ok(writer.flush()?)
}

fn read_json<D: DeserializeOwned>(path: &Path) -> Result<D, PersistError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn report<T: Persist, V>(
    action: &'static str,
    path: &Path,
    result: Result<V, PersistError>,
) -> Result<V, PersistError> {
    match result {
        Ok(value) => {
            tracing::debug!(structure = T::NAME, path = %path.display(), "{action} complete");
            Ok(value)
        },
        Err(error) => {
            let error = error.at(path);
            tracing::warn!(structure = T::NAME, path = %path.display(), %error, "{action} failed");
            Err(error)
        },
    }
}
