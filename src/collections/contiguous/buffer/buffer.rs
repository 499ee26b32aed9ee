use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use log::trace;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The largest number of slots an IntBuffer can hold without its layout exceeding [`isize::MAX`]
/// bytes.
pub const MAX_SIZE: usize = isize::MAX as usize / size_of::<i32>();

/// An owned, heap allocated run of `size` integers. Similar to a [`Box<[i32]>`](Box<T>), except that
/// it can be resized in place through [`IntBuffer::realloc`].
///
/// Every slot is always initialized: new slots are zeroed when they are allocated, so the whole
/// buffer can be viewed as a `[i32]`. A buffer of size 0 holds a dangling pointer and no
/// allocation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots in the IntBuffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `zeroed` | `O(n)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* `realloc` may be able to resize the allocation in place, which is up to the allocator.
pub struct IntBuffer {
    pub(crate) ptr: NonNull<i32>,
    pub(crate) size: usize,
}

impl IntBuffer {
    /// Creates a new IntBuffer with size 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntBuffer;
    /// let buf = IntBuffer::new();
    /// assert_eq!(buf.size(), 0);
    /// assert_eq!(&*buf, &[]);
    /// ```
    pub const fn new() -> IntBuffer {
        IntBuffer {
            ptr: NonNull::dangling(),
            size: 0,
        }
    }

    /// Creates a new IntBuffer with `size` slots, all set to zero.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntBuffer;
    /// let buf = IntBuffer::zeroed(3);
    /// assert_eq!(&*buf, &[0, 0, 0]);
    /// ```
    pub fn zeroed(size: usize) -> IntBuffer {
        IntBuffer::try_zeroed(size).throw()
    }

    /// Creates a new IntBuffer with `size` zeroed slots, returning an error rather than panicking
    /// if the layout would be too large.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if `size` exceeds [`MAX_SIZE`].
    pub fn try_zeroed(size: usize) -> Result<IntBuffer, CapacityOverflow> {
        let layout = IntBuffer::make_layout(size)?;

        Ok(IntBuffer {
            ptr: IntBuffer::make_ptr(layout),
            size,
        })
    }

    /// Creates a new IntBuffer holding a copy of `values`, with a size of exactly `values.len()`.
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntBuffer;
    /// let buf = IntBuffer::from_slice(&[7, 8, 9]);
    /// assert_eq!(buf.size(), 3);
    /// assert_eq!(&*buf, &[7, 8, 9]);
    /// ```
    pub fn from_slice(values: &[i32]) -> IntBuffer {
        // A slice can't be larger than isize::MAX bytes, so this can't overflow.
        let mut buf = IntBuffer::zeroed(values.len());
        buf.copy_from_slice(values);
        buf
    }

    /// Returns the number of slots in the IntBuffer.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Resizes the IntBuffer to hold exactly `new_size` slots. Existing values up to
    /// `min(size, new_size)` are kept and any new slots are zeroed. Resizing to 0 releases the
    /// allocation entirely.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use int_vector::collections::contiguous::IntBuffer;
    /// let mut buf = IntBuffer::from_slice(&[1, 2]);
    /// buf.realloc(4);
    /// assert_eq!(&*buf, &[1, 2, 0, 0]);
    /// buf.realloc(1);
    /// assert_eq!(&*buf, &[1]);
    /// ```
    pub fn realloc(&mut self, new_size: usize) {
        self.try_realloc(new_size).throw()
    }

    /// Resizes the IntBuffer to hold exactly `new_size` slots, see [`IntBuffer::realloc`].
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if `new_size` exceeds [`MAX_SIZE`]. The IntBuffer is left
    /// untouched in that case.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), CapacityOverflow> {
        let new_layout = IntBuffer::make_layout(new_size)?;

        let new_ptr = match (self.size, new_size) {
            (old, new) if old == new => return Ok(()),
            (0, _) => {
                // Nothing is allocated yet, so there is nothing to move.
                IntBuffer::make_ptr(new_layout)
            },
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with the current layout, which
                // has a non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), self.layout()) }
                NonNull::dangling()
            },
            (old, new) => {
                // SAFETY: The same layout and allocator are used as for the original allocation,
                // and the new layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut i32 = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), self.layout(), new_layout.size())
                        .cast()
                };

                let ptr = NonNull::new(raw_ptr).unwrap_or_else(
                    || alloc::handle_alloc_error(new_layout)
                );

                if new > old {
                    // SAFETY: Slots old..new are inside the new allocation, which is properly
                    // aligned for i32. Zero is a valid i32.
                    unsafe { ptr.add(old).write_bytes(0, new - old) }
                }

                ptr
            },
        };

        trace!("IntBuffer realloc: {} -> {} slots", self.size, new_size);

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }

    /// A helper function to create a [`Layout`] for `size` integers.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<i32>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a zeroed allocation for the provided [`Layout`]. Returns a
    /// dangling pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<i32> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc_zeroed(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    /// The layout of the current allocation.
    const fn layout(&self) -> Layout {
        // SAFETY: The size has been validated by Layout::array when it was allocated, so the
        // product can't overflow isize::MAX and the alignment of i32 is a power of two.
        unsafe {
            Layout::from_size_align_unchecked(self.size * size_of::<i32>(), align_of::<i32>())
        }
    }
}

impl Default for IntBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for IntBuffer {
    fn drop(&mut self) {
        if self.size != 0 {
            trace!("IntBuffer release: {} slots", self.size);
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized buffers aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), self.layout()) }
        }
    }
}

impl Deref for IntBuffer {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size integers, all of which are initialized. For size 0 the pointer is
        // dangling but aligned, which is allowed for empty slices.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl DerefMut for IntBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker prevents other access through self for the
        // lifetime of the slice.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

impl AsRef<[i32]> for IntBuffer {
    fn as_ref(&self) -> &[i32] {
        self.deref()
    }
}

impl AsMut<[i32]> for IntBuffer {
    fn as_mut(&mut self) -> &mut [i32] {
        self.deref_mut()
    }
}

impl Borrow<[i32]> for IntBuffer {
    fn borrow(&self) -> &[i32] {
        self.as_ref()
    }
}

impl BorrowMut<[i32]> for IntBuffer {
    fn borrow_mut(&mut self) -> &mut [i32] {
        self.as_mut()
    }
}

// SAFETY: IntBuffer uniquely owns its allocation, so moving it to another thread is fine.
unsafe impl Send for IntBuffer {}
// SAFETY: IntBuffer's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs.
unsafe impl Sync for IntBuffer {}

impl Clone for IntBuffer {
    fn clone(&self) -> Self {
        IntBuffer::from_slice(self)
    }
}

impl PartialEq for IntBuffer {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for IntBuffer {}

impl Debug for IntBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntBuffer")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
