use derive_more::{Display, Error};

/// An index was outside of the initialized range of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A requested capacity would produce an allocation larger than [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
