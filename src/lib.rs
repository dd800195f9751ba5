//! This crate is a collection of the classic data structures, written out by hand over `i32`
//! elements, along with binary and JSON persistence for each of them.
//!
//! # Purpose
//! The structures here are the ones every data structures course covers: a growable array, singly
//! and doubly linked lists, a stack and a queue, a hash table with separate chaining and another
//! with linear probing, and an AVL tree. They are written so that they can be compared with each
//! other, so each one keeps the policies of its textbook form rather than those of the
//! [`std::collections`] equivalent.
//!
//! # Method
//! Linked structures own their nodes through raw pointers, in the same way as [`std`]'s
//! `LinkedList`, with every unsafe block justified by a `SAFETY` comment. The tree and the chained
//! hash table get away with [`Box`]es, as each of their nodes has exactly one parent.
//!
//! # Error Handling
//! Errors are strongly typed, with a struct for each failure that implements
//! [`Error`](std::error::Error) and enums to combine them. Operations which take an index come in
//! pairs: `try_x` returns a [`Result`], while `x` panics with the message of the error, because
//! being forced to handle an error on every `get` is painful. Popping from an empty structure or
//! removing something that isn't there isn't an error at all, these just return [`None`] or
//! `false`.
//!
//! All of the persistence operations return a [`PersistError`](persist::PersistError), and log
//! their outcome through [`tracing`]. This crate never installs a subscriber, that's up to the
//! binary using it.
//!
//! # Features
//! - `contiguous`, `linked`, `hash` and `tree` each enable a module of
//!   [`collections`], `collections-all` enables all of them.
//! - `persist` enables the [`persist`] module, which depends on `serde` and `serde_json`.
//!
//! All of these are enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "persist")]
pub mod persist;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{EmptyStructure, IndexOutOfBounds};
