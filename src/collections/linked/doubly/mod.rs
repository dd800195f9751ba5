mod doubly_linked_list;
mod iter;
mod node;
#[cfg(feature = "persist")]
mod persist;

pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use node::*;
