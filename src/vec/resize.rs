// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    array_ptr::ArrayPtr,
    error::{Error, handle_alloc_result},
    vec::SimpleVector,
};

impl<T> SimpleVector<T> {
    /// Sets `len = 0` without touching capacity or the stored values.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.size {
            self.size = new_len;
        }
    }
}

impl<T: Default> SimpleVector<T> {
    /// Resizes to `new_len`.
    ///
    /// - `new_len <= len`: truncates.
    /// - `len < new_len <= capacity`: the exposed slots are reset to
    ///   `T::default()`.
    /// - `new_len > capacity`: reallocates to `max(new_len, 2 * capacity)`,
    ///   moving the existing elements; every new slot is `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts via
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error) if the
    /// allocator fails.
    #[inline]
    pub fn resize(&mut self, new_len: usize) {
        handle_alloc_result(self.try_resize(new_len))
    }

    /// Fallible variant of [`resize`](SimpleVector::resize).
    ///
    /// On error the vector is unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len <= self.size {
            self.size = new_len;
            return Ok(());
        }
        if new_len > self.capacity() {
            // Fresh slots past `size` are already default-constructed.
            self.try_grow_for(new_len)?;
        } else {
            self.items.as_mut_slice()[self.size..new_len].fill_with(T::default);
        }
        self.size = new_len;
        Ok(())
    }

    /// Ensures `capacity >= new_capacity`, allocating exactly `new_capacity`
    /// slots when it has to grow. Never changes `len`.
    ///
    /// # Panics
    ///
    /// Same as [`resize`](SimpleVector::resize).
    #[inline]
    pub fn reserve(&mut self, new_capacity: usize) {
        handle_alloc_result(self.try_reserve(new_capacity))
    }

    /// Fallible variant of [`reserve`](SimpleVector::reserve).
    ///
    /// On error the vector is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity > self.capacity() {
            self.relocate(new_capacity)?;
        }
        Ok(())
    }

    /// Grows with the doubling policy so that at least `required` slots exist.
    pub(crate) fn try_grow_for(&mut self, required: usize) -> Result<(), Error> {
        if required > self.capacity() {
            self.relocate(grown_capacity(self.capacity(), required))?;
        }
        Ok(())
    }

    /// Moves the live elements into a new buffer of `new_capacity` slots.
    ///
    /// Every slot of the new buffer is default-constructed before any element
    /// moves, so an allocation error or a panicking `T::default()` leaves
    /// `self` untouched.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), Error> {
        debug_assert!(new_capacity >= self.size);
        let mut fresh = ArrayPtr::try_new(new_capacity)?;
        let live = self.size;
        fresh.as_mut_slice()[..live].swap_with_slice(&mut self.items.as_mut_slice()[..live]);
        self.items.swap(&mut fresh);
        Ok(())
    }
}

/// Capacity to grow to when `required` slots do not fit in `capacity`.
#[inline]
pub(crate) const fn grown_capacity(capacity: usize, required: usize) -> usize {
    let doubled = capacity.saturating_mul(2);
    if doubled > required { doubled } else { required }
}
