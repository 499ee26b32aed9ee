//! A module containing [`IntVector`] and the free functions that operate on it.
//!
//! Comparison lives in [`cmp`] and the space separated text output in [`fmt`]. Both are written as
//! free functions over two (or one) vectors, with the usual trait implementations delegating to
//! them.
//!
//! [`IntVector`] is also re-exported under the parent module.

pub mod cmp;
pub mod fmt;
mod tests;
mod vector;

pub use vector::*;
