//! A module containing [`IntBuffer`], the owned allocation underneath
//! [`IntVector`](super::IntVector).
//!
//! [`IntBuffer`] is also re-exported under the parent module.

mod buffer;

pub use buffer::*;
