use derive_more::{Display, Error};

/// An index argument fell outside of the valid range for the collection it was used with.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A value was requested from a stack or queue that holds nothing.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cannot peek into an empty {structure}")]
pub struct EmptyStructure {
    pub structure: &'static str,
}
