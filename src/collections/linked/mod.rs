//! Linked collection types: two general purpose lists and the [`Stack`] and [`Queue`] built on
//! top of [`SinglyLinkedList`].

pub mod doubly;
pub mod queue;
pub mod singly;
pub mod stack;

mod length;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
pub(crate) use length::*;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use singly::SinglyLinkedList;
#[doc(inline)]
pub use stack::Stack;
