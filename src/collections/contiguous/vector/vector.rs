use std::borrow::Borrow;
use std::cmp;

use log::trace;

use crate::collections::contiguous::IntBuffer;
use crate::collections::contiguous::buffer::MAX_SIZE;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;
const MAX_CAP: usize = MAX_SIZE;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection of integers, based on [`IntBuffer`].
///
/// The IntVector is the only owner of its buffer. Moving it transfers ownership and
/// [`Clone`] makes a deep copy, so two IntVectors never share storage.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the IntVector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `clear` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
///
/// \* If the IntVector doesn't have enough capacity for the new element, `push_back` will take
/// `O(n)`. Because the capacity doubles each time, this is `O(1)` amortized.
///
/// \** If the IntVector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct IntVector {
    pub(crate) buf: IntBuffer,
    pub(crate) len: usize,
}

impl IntVector {
    /// Creates a new IntVector with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let vec = IntVector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> IntVector {
        IntVector {
            buf: IntBuffer::new(),
            len: 0,
        }
    }

    /// Creates a new IntVector holding `len` zeroes, with capacity exactly `len`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let vec = IntVector::zeroed(4);
    /// assert_eq!(vec.len(), 4);
    /// assert_eq!(vec.cap(), 4);
    /// assert_eq!(vec.as_slice(), &[0, 0, 0, 0]);
    /// ```
    pub fn zeroed(len: usize) -> IntVector {
        IntVector {
            buf: IntBuffer::zeroed(len),
            len,
        }
    }

    /// Creates a new IntVector holding a copy of `values`, with capacity exactly `values.len()`.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let vec = IntVector::from_slice(&[7, 8, 9]);
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec.cap(), 3);
    /// assert_eq!(vec.as_slice(), &[7, 8, 9]);
    /// ```
    pub fn from_slice(values: &[i32]) -> IntVector {
        IntVector {
            buf: IntBuffer::from_slice(values),
            len: values.len(),
        }
    }

    /// Creates a new, empty IntVector with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let mut vec = IntVector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> IntVector {
        IntVector {
            buf: IntBuffer::zeroed(cap),
            len: 0,
        }
    }

    /// Returns the length of the IntVector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the IntVector. Unlike [`Vec`], the capacity is guaranteed
    /// to be exactly the value chosen by the growth policy or provided to one of the capacity
    /// manipulation functions.
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Returns true if the IntVector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let mut vec = IntVector::new();
    /// assert!(vec.is_empty());
    /// vec.push_back(1);
    /// assert!(!vec.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push the provided value onto the end of the IntVector, doubling the capacity if it is
    /// already full. An IntVector with no capacity grows to a capacity of 1.
    ///
    /// # Panics
    /// Panics if the memory layout of the IntVector would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let mut vec = IntVector::new();
    /// for i in 0..=5 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push_back(&mut self, value: i32) {
        self.grow(1);

        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { *self.buf.get_unchecked_mut(self.len) = value; }
        self.len += 1;
    }

    /// Removes the last element of the IntVector. The capacity is left unchanged.
    ///
    /// # Safety
    /// The IntVector must not be empty. Popping an empty IntVector is undefined behavior in
    /// release builds and panics in debug builds. See [`IntVector::try_pop_back`] for a checked
    /// version.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let mut vec = IntVector::from_slice(&[1, 2, 3]);
    /// // SAFETY: vec holds three elements.
    /// unsafe { vec.pop_back(); }
    /// assert_eq!(vec.as_slice(), &[1, 2]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub unsafe fn pop_back(&mut self) {
        // SAFETY: The caller guarantees that the IntVector isn't empty.
        unsafe { self.check_index(0).assume_ok() }
        self.len -= 1;
    }

    /// Removes the last element of the IntVector and returns it, or [`None`] if it is empty.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let mut vec = IntVector::from_slice(&[1, 2]);
    /// assert_eq!(vec.try_pop_back(), Some(2));
    /// assert_eq!(vec.try_pop_back(), Some(1));
    /// assert_eq!(vec.try_pop_back(), None);
    /// ```
    pub fn try_pop_back(&mut self) -> Option<i32> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.buf[self.len])
        }
    }

    /// Shrinks the IntVector so that its capacity is equal to its length. An empty IntVector
    /// releases its buffer entirely.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let mut vec = IntVector::with_cap(10);
    /// vec.push_back(1);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 1);
    /// vec.clear();
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        // Shrinking can't overflow.
        self.realloc_with_cap(self.len);
    }

    /// Removes all elements from the IntVector without touching its capacity.
    pub const fn clear(&mut self) {
        self.len = 0;
    }

    /// Ensures that the IntVector has capacity to hold an additional `extra` elements. After
    /// invoking this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the IntVector would have a size that exceeds
    /// [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Ensures that the IntVector has capacity to hold an additional `extra` elements, see
    /// [`IntVector::reserve`].
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the required capacity can't be allocated. The IntVector is
    /// left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let mut vec = IntVector::from_slice(&[1]);
    /// assert!(vec.try_reserve(usize::MAX).is_err());
    /// assert!(vec.try_reserve(3).is_ok());
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if new_cap <= self.cap() { return Ok(()); }

        self.buf.try_realloc(new_cap)
    }

    /// Returns a reference to the element at `index`, without checking bounds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](IntVector::len). Violating this is undefined behavior in
    /// release builds and panics in debug builds. See [`IntVector::get`] or [`IntVector::try_at`]
    /// for checked versions.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let vec = IntVector::from_slice(&[7, 8, 9]);
    /// // SAFETY: 1 < 3.
    /// assert_eq!(unsafe { *vec.at(1) }, 8);
    /// ```
    pub unsafe fn at(&self, index: usize) -> &i32 {
        // SAFETY: The caller guarantees that index < len.
        unsafe { self.try_at(index).assume_ok() }
    }

    /// Returns a mutable reference to the element at `index`, without checking bounds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](IntVector::len), see [`IntVector::at`].
    pub unsafe fn at_mut(&mut self, index: usize) -> &mut i32 {
        // SAFETY: The caller guarantees that index < len.
        unsafe { self.try_at_mut(index).assume_ok() }
    }

    /// Returns a reference to the first element, without checking that there is one.
    ///
    /// # Safety
    /// The IntVector must not be empty, see [`IntVector::at`].
    pub unsafe fn front(&self) -> &i32 {
        // SAFETY: The caller guarantees that the IntVector isn't empty.
        unsafe { self.at(0) }
    }

    /// Returns a mutable reference to the first element, without checking that there is one.
    ///
    /// # Safety
    /// The IntVector must not be empty, see [`IntVector::at`].
    pub unsafe fn front_mut(&mut self) -> &mut i32 {
        // SAFETY: The caller guarantees that the IntVector isn't empty.
        unsafe { self.at_mut(0) }
    }

    /// Returns a reference to the last element, without checking that there is one.
    ///
    /// # Safety
    /// The IntVector must not be empty, see [`IntVector::at`].
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let mut vec = IntVector::from_slice(&[1, 2]);
    /// // SAFETY: vec isn't empty.
    /// unsafe { *vec.back_mut() += 10; }
    /// assert_eq!(unsafe { *vec.back() }, 12);
    /// ```
    pub unsafe fn back(&self) -> &i32 {
        // SAFETY: The caller guarantees that the IntVector isn't empty, so len - 1 doesn't wrap.
        unsafe { self.at(self.len.wrapping_sub(1)) }
    }

    /// Returns a mutable reference to the last element, without checking that there is one.
    ///
    /// # Safety
    /// The IntVector must not be empty, see [`IntVector::at`].
    pub unsafe fn back_mut(&mut self) -> &mut i32 {
        // SAFETY: The caller guarantees that the IntVector isn't empty, so len - 1 doesn't wrap.
        unsafe { self.at_mut(self.len.wrapping_sub(1)) }
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<&i32> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntVector;
    /// let vec = IntVector::from_slice(&[7, 8, 9]);
    /// assert_eq!(vec.try_at(2), Ok(&9));
    /// assert_eq!(vec.try_at(3).unwrap_err().to_string(), "Index 3 out of bounds for collection with 3 elements!");
    /// ```
    pub fn try_at(&self, index: usize) -> Result<&i32, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len <= cap.
        Ok(unsafe { self.buf.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut i32, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len <= cap.
        Ok(unsafe { self.buf.get_unchecked_mut(index) })
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the IntVector is empty.
    pub fn try_front(&self) -> Result<&i32, IndexOutOfBounds> {
        self.try_at(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the IntVector is empty.
    pub fn try_back(&self) -> Result<&i32, IndexOutOfBounds> {
        match self.len.checked_sub(1) {
            Some(last) => self.try_at(last),
            None => Err(IndexOutOfBounds { index: 0, len: 0 }),
        }
    }

    /// Returns the initialized elements of the IntVector as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.buf[..self.len]
    }

    /// Returns the initialized elements of the IntVector as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.buf[..self.len]
    }

    /// Reallocates the internal IntBuffer with the provided capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the IntVector would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        self.buf.realloc(new_cap);
    }

    /// Grows the internal IntBuffer, if required, so that `extra` more elements fit without another
    /// reallocation. The capacity at least doubles on each growth, so repeated small growths stay
    /// amortized `O(1)` per element.
    ///
    /// # Panics
    /// Panics if the required capacity exceeds [`MAX_CAP`].
    pub(crate) fn grow(&mut self, extra: usize) {
        let old_cap = self.cap();
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if required <= old_cap { return; }

        let doubled = old_cap.saturating_mul(GROWTH_FACTOR);
        let mut new_cap = cmp::max(doubled, cmp::max(required, MIN_CAP));

        // If we would grow past maximum capacity, instead use the maximum if it is enough.
        if new_cap > MAX_CAP && required <= MAX_CAP {
            new_cap = MAX_CAP;
        }

        trace!("IntVector grow: cap {} -> {} at len {}", old_cap, new_cap, self.len);
        self.realloc_with_cap(new_cap);
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl Extend<i32> for IntVector {
    fn extend<A: IntoIterator<Item = i32>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.grow(iter.size_hint().0);

        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a> Extend<&'a i32> for IntVector {
    fn extend<A: IntoIterator<Item = &'a i32>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<i32> for IntVector {
    fn from_iter<I: IntoIterator<Item = i32>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = IntVector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push_back(item);
        }

        vec
    }
}

impl From<&[i32]> for IntVector {
    fn from(value: &[i32]) -> Self {
        IntVector::from_slice(value)
    }
}

impl<const N: usize> From<[i32; N]> for IntVector {
    fn from(value: [i32; N]) -> Self {
        IntVector::from_slice(&value)
    }
}

impl From<IntVector> for IntBuffer {
    fn from(mut value: IntVector) -> Self {
        value.shrink_to_fit();
        value.buf
    }
}

impl From<IntBuffer> for IntVector {
    fn from(value: IntBuffer) -> Self {
        let len = value.size();
        IntVector {
            buf: value,
            len,
        }
    }
}

impl Default for IntVector {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[i32]> for IntVector {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl AsMut<[i32]> for IntVector {
    fn as_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl Borrow<[i32]> for IntVector {
    fn borrow(&self) -> &[i32] {
        self.as_slice()
    }
}

impl Clone for IntVector {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());
        vec.buf[..self.len].copy_from_slice(self.as_slice());
        vec.len = self.len;
        vec
    }
}
