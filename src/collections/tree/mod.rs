//! Self-balancing search trees over `i32` keys.
//!
//! [`AvlTree`] keeps the heights of the two subtrees of every node within one of each other,
//! restoring the balance with rotations on the way back up from each insert or remove.

pub mod avl;

#[doc(inline)]
pub use avl::AvlTree;
