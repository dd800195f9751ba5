//! Hash tables from `i32` keys to `i32` values, using two different strategies for collisions:
//! [`ChainedHashTable`] keeps a linked chain of entries per bucket and never resizes, while
//! [`OpenHashTable`] probes linearly for a free slot and doubles its capacity to keep the load
//! factor below 7/10.
//!
//! Both hash a key as `|key| mod capacity`.

pub mod chained;
pub mod open;

#[doc(inline)]
pub use chained::ChainedHashTable;
#[doc(inline)]
pub use open::OpenHashTable;

/// The capacity used by `new`, and in place of a requested capacity of 0.
pub const DEFAULT_CAP: usize = 8;

/// Returns the bucket (or starting slot) for `key` in a table with `cap` buckets. `cap` must be
/// non-zero.
pub(crate) const fn bucket_index(key: i32, cap: usize) -> usize {
    key.unsigned_abs() as usize % cap
}

pub(crate) const fn cap_or_default(cap: usize) -> usize {
    if cap == 0 { DEFAULT_CAP } else { cap }
}
