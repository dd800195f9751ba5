#[cfg(feature = "persist")]
mod persist;
mod stack;
mod tests;

pub use stack::*;
