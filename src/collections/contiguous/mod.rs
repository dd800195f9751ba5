//! Contiguous collection types. At the moment that is just [`DynamicArray`].

pub mod array;

#[doc(inline)]
pub use array::DynamicArray;
