//! Comparison of [`IntVector`]s, as free functions.
//!
//! [`eq`] and [`lt`] are the two primitives, everything else is derived from them by negation or
//! by swapping the arguments. The [`PartialEq`], [`Eq`], [`PartialOrd`] and [`Ord`]
//! implementations on IntVector delegate here, so `==` and `<` behave the same as these functions.
//!
//! # Examples
//! ```
//! # use int_vector::collections::contiguous::IntVector;
//! # use int_vector::collections::contiguous::vector::cmp;
//! let short = IntVector::from([1, 2]);
//! let long = IntVector::from([1, 2, 3]);
//! assert!(cmp::lt(&short, &long));
//! assert!(short < long);
//! assert!(IntVector::from([1, 3]) > IntVector::from([1, 2, 5]));
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::IntVector;

/// Returns true if both vectors have the same length and equal elements at every index.
pub fn eq(lhs: &IntVector, rhs: &IntVector) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    lhs.as_slice().iter()
        .zip(rhs.as_slice())
        .all(|(l, r)| l == r)
}

/// Returns true if `lhs` orders lexicographically before `rhs`. The first pair of differing
/// elements decides, and if one vector is a prefix of the other, the shorter one is less.
pub fn lt(lhs: &IntVector, rhs: &IntVector) -> bool {
    for (l, r) in lhs.as_slice().iter().zip(rhs.as_slice()) {
        if l < r {
            return true;
        }
        if r < l {
            return false;
        }
    }

    lhs.len() < rhs.len()
}

/// Negation of [`eq`].
pub fn ne(lhs: &IntVector, rhs: &IntVector) -> bool {
    !eq(lhs, rhs)
}

/// Returns true if `rhs` orders before `lhs`.
pub fn gt(lhs: &IntVector, rhs: &IntVector) -> bool {
    lt(rhs, lhs)
}

/// Negation of [`gt`].
pub fn le(lhs: &IntVector, rhs: &IntVector) -> bool {
    !gt(lhs, rhs)
}

/// Negation of [`lt`].
pub fn ge(lhs: &IntVector, rhs: &IntVector) -> bool {
    !lt(lhs, rhs)
}

impl PartialEq for IntVector {
    fn eq(&self, other: &Self) -> bool {
        eq(self, other)
    }
}

impl Eq for IntVector {}

impl PartialOrd for IntVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IntVector {
    fn cmp(&self, other: &Self) -> Ordering {
        if lt(self, other) {
            Ordering::Less
        } else if lt(other, self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl Hash for IntVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
