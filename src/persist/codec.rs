//! Little-endian primitives shared by every binary format in the crate.
//!
//! All counts are written as `u64`, all stored values as `i32` and flags as a single byte that is
//! either `0` or `1`.

use std::io::{Read, Write};

use super::{CorruptData, PersistError};

/// Upper bound on the element count accepted when loading a sequence (array, list, stack or
/// queue) from binary form.
pub const MAX_SEQUENCE_LEN: u64 = 1_000_000;

/// Upper bound on the number of slots or buckets allocated ahead of reading them. Larger tables
/// still load, they just grow as their contents are read.
pub(crate) const PREALLOC_LIMIT: usize = 1 << 16;

/// Writes the primitives of the binary formats to an underlying [`Write`]r.
#[derive(Debug)]
pub struct Encoder<W: Write> {
    inner: W,
}

impl<W: Write> Encoder<W> {
    pub const fn new(inner: W) -> Encoder<W> {
        Encoder { inner }
    }

    pub fn write_u64(&mut self, value: u64) -> Result<(), PersistError> {
        Ok(self.inner.write_all(&value.to_le_bytes())?)
    }

    pub fn write_i32(&mut self, value: i32) -> Result<(), PersistError> {
        Ok(self.inner.write_all(&value.to_le_bytes())?)
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), PersistError> {
        Ok(self.inner.write_all(&[value as u8])?)
    }

    /// Writes a count, widening it to the `u64` used on disk.
    pub fn write_len(&mut self, len: usize) -> Result<(), PersistError> {
        self.write_u64(len as u64)
    }

    /// Writes a count followed by every value yielded by `values`.
    pub fn write_sequence<I>(&mut self, len: usize, values: I) -> Result<(), PersistError>
    where
        I: IntoIterator<Item = i32>,
    {
        self.write_len(len)?;
        for value in values {
            self.write_i32(value)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), PersistError> {
        Ok(self.inner.flush()?)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Reads the primitives of the binary formats from an underlying [`Read`]er. Running out of
/// input part way through a value is reported as [`CorruptData::UnexpectedEof`].
#[derive(Debug)]
pub struct Decoder<R: Read> {
    inner: R,
}

impl<R: Read> Decoder<R> {
    pub const fn new(inner: R) -> Decoder<R> {
        Decoder { inner }
    }

    pub fn read_u64(&mut self) -> Result<u64, PersistError> {
        let mut buf = [0_u8; 8];
        self.inner.read_exact(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    pub fn read_i32(&mut self) -> Result<i32, PersistError> {
        let mut buf = [0_u8; 4];
        self.inner.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    pub fn read_bool(&mut self) -> Result<bool, PersistError> {
        let mut buf = [0_u8; 1];
        self.inner.read_exact(&mut buf)?;
        match buf[0] {
            0 => Ok(false),
            1 => Ok(true),
            byte => Err(CorruptData::InvalidFlag { byte }.into()),
        }
    }

    /// Reads a count, rejecting it if it exceeds `limit` or can't be addressed on this platform.
    pub fn read_count(&mut self, limit: Option<u64>) -> Result<usize, PersistError> {
        let count = self.read_u64()?;
        let limit = limit.unwrap_or(usize::MAX as u64);

        if count > limit {
            return Err(CorruptData::OversizedCount { count, limit }.into());
        }
        usize::try_from(count).map_err(|_| CorruptData::OversizedCount { count, limit }.into())
    }

    /// Reads a sequence written by [`Encoder::write_sequence`], passing each value to `push` in
    /// the order it was stored.
    pub fn read_sequence<F>(&mut self, mut push: F) -> Result<usize, PersistError>
    where
        F: FnMut(i32),
    {
        let count = self.read_count(Some(MAX_SEQUENCE_LEN))?;
        for _ in 0..count {
            push(self.read_i32()?);
        }
        Ok(count)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
