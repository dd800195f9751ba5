mod iter;
mod open_hash_table;
#[cfg(feature = "persist")]
mod persist;

pub use iter::*;
pub use open_hash_table::*;
