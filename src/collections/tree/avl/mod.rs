mod avl_tree;
mod iter;
mod node;
#[cfg(feature = "persist")]
mod persist;
mod tests;

pub use avl_tree::*;
pub use iter::*;
pub(crate) use node::*;
