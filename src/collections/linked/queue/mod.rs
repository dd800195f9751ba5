#[cfg(feature = "persist")]
mod persist;
mod queue;
mod tests;

pub use queue::*;
