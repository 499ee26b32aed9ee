//! Collection types.
//!
//! # Method
//! The only collections here are contiguous ones. Rather than implementing
//! [`Deref<Target = [i32]>`](std::ops::Deref), [`IntVector`](contiguous::IntVector) exposes its
//! initialized elements through `as_slice`, so that the unchecked accessors stay the primary
//! element API.

#[cfg(feature = "contiguous")]
pub mod contiguous;
