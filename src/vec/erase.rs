// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

// Core imports
use core::mem;

impl<T: Default> SimpleVector<T> {
    /// Removes the element at `index`, shifting `[index + 1, len)` one slot
    /// left.
    ///
    /// Returns the index of the slot that now holds the element that followed
    /// the erased one, which is `len()` if the last element was erased. The
    /// erased value is dropped before returning and its slot past the end is
    /// left holding `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.size;
        assert!(index < len, "erase index (is {index}) should be < len (is {len})");
        let erased = mem::take(&mut self.items[index]);
        self.as_mut_slice()[index..].rotate_left(1);
        self.size = len - 1;
        drop(erased);
        index
    }
}
