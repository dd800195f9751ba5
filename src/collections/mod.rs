//! The classic collection types, each fixed to `i32` elements.
//!
//! # Purpose
//! Every type here is a textbook structure written out by hand: a growable array, two linked
//! lists and the stack and queue built on them, two hash tables with different collision
//! strategies and a self-balancing search tree. They exist to be compared with each other, so
//! they deliberately keep the simple policies of their textbook form (no shrinking, no resizing
//! of the chained table, silent no-op pops).
//!
//! # Method
//! Index-taking operations come in pairs: `try_x` returns a [`Result`], while `x` panics with the
//! message of the same error. Operations which can't fail for a well-formed argument, such as
//! popping from an empty list, return an [`Option`] rather than an error.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "tree")]
pub mod tree;
