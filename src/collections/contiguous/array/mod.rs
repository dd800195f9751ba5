mod dynamic_array;
#[cfg(feature = "persist")]
mod persist;
mod tests;

pub use dynamic_array::*;
