pub mod error;
#[cfg(any(feature = "hash", feature = "tree"))]
pub mod fmt;
#[cfg(feature = "linked")]
pub mod option;
pub mod panic;
#[cfg(any(feature = "contiguous", feature = "linked"))]
pub mod result;
