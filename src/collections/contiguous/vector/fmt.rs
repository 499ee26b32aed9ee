//! Text output for [`IntVector`].
//!
//! [`write_vector`] and [`print_vector`] produce the space separated form used by existing callers,
//! including its odd handling of the last element: it is only written when there are at least two
//! elements, so a vector holding a single value produces no output at all.
//!
//! The [`Debug`] and [`Display`] implementations don't share that behavior and always show every
//! element.

use std::fmt::{self, Debug, Display, Formatter};
use std::io;

use super::IntVector;
use crate::util::result::ResultExtension;

/// Writes the elements of `vec` to `sink`, separated by single spaces.
///
/// The last element is only written if `vec` holds more than one element.
///
/// # Errors
/// Returns an error if writing to `sink` fails.
///
/// # Examples
/// ```
/// # use int_vector::collections::contiguous::IntVector;
/// # use int_vector::collections::contiguous::vector::fmt::write_vector;
/// let mut out = String::new();
/// write_vector(&mut out, &IntVector::from([1, 2, 3])).unwrap();
/// assert_eq!(out, "1 2 3");
///
/// let mut out = String::new();
/// write_vector(&mut out, &IntVector::from([5])).unwrap();
/// assert_eq!(out, "");
/// ```
pub fn write_vector<W: fmt::Write + ?Sized>(sink: &mut W, vec: &IntVector) -> fmt::Result {
    let values = vec.as_slice();

    for value in &values[..values.len().saturating_sub(1)] {
        write!(sink, "{value} ")?;
    }

    if let [_, .., last] = values {
        write!(sink, "{last}")?;
    }

    Ok(())
}

/// Writes the elements of `vec` to a byte sink, with the same output as [`write_vector`].
///
/// # Errors
/// Returns any error produced by `sink`.
pub fn print_vector<W: io::Write + ?Sized>(sink: &mut W, vec: &IntVector) -> io::Result<()> {
    sink.write_all(format_vector(vec).as_bytes())
}

/// Returns the output of [`write_vector`] as a [`String`].
pub fn format_vector(vec: &IntVector) -> String {
    let mut out = String::new();
    // Writing to a String never fails.
    write_vector(&mut out, vec).throw();
    out
}

impl Debug for IntVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntVector")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for IntVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
