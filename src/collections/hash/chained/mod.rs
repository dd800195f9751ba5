mod chained_hash_table;
mod iter;
#[cfg(feature = "persist")]
mod persist;
mod tests;

pub use chained_hash_table::*;
pub use iter::*;
