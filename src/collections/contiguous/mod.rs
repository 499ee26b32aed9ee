//! Contiguous collection types. Namely [`IntBuffer`] for a fixed number of owned slots and
//! [`IntVector`] for a collection that varies in size at runtime.
#![warn(missing_docs)]

pub mod buffer;
pub mod vector;

#[doc(inline)]
pub use buffer::IntBuffer;
#[doc(inline)]
pub use vector::IntVector;
