//! A small growable array of integers, written by hand on top of the global allocator.
//!
//! # Purpose
//! This crate exists as a learning exercise: it implements the part of a `Vec<i32>` that people
//! actually reason about when they learn how dynamic arrays work. That is, a single owned buffer,
//! a logical length that can be smaller than the allocated capacity, and a growth policy that keeps
//! appends amortized `O(1)`.
//!
//! The main type is [`IntVector`](collections::contiguous::IntVector), which is backed by an
//! [`IntBuffer`](collections::contiguous::IntBuffer) owning the raw allocation.
//!
//! # Unchecked Access
//! The element accessors [`at`](collections::contiguous::IntVector::at),
//! [`front`](collections::contiguous::IntVector::front),
//! [`back`](collections::contiguous::IntVector::back) and
//! [`pop_back`](collections::contiguous::IntVector::pop_back) don't perform any bounds checks in
//! release builds, so they are `unsafe`. Each has a checked counterpart (`get`, `try_at`,
//! `try_front`, `try_back`, `try_pop_back`) for code that can't uphold the preconditions. Debug
//! builds check the preconditions anyway and panic with an [`IndexOutOfBounds`](error::IndexOutOfBounds)
//! message when they are violated.
//!
//! # Error Handling
//! Errors are small, strongly typed structs implementing [`Error`](std::error::Error). Methods that
//! can't reasonably make the caller handle an error (such as running out of address space while
//! pushing) panic with the message of that error instead, and provide a `try_` variant where it
//! makes sense.
//!
//! # Logging
//! Reallocations are reported through [`log`] at the `trace` level. No logger is installed here,
//! that's up to the binary using the crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

pub use util::error;
