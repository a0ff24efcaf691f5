// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

// Core imports
use core::mem;

impl<T: Default> SimpleVector<T> {
    /// Appends `value`, growing with the doubling policy when full.
    ///
    /// Equivalent to `resize(len + 1)` followed by moving `value` into the
    /// new last slot. To push a copy, pass `value.clone()`.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.resize(self.size + 1);
        self.items[self.size - 1] = value;
    }

    /// Removes the last element.
    ///
    /// The removed value is dropped right away; its slot keeps
    /// `T::default()` and stays available as spare capacity.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn pop_back(&mut self) {
        assert!(self.size != 0, "pop_back on an empty SimpleVector");
        let popped = mem::take(&mut self.items[self.size - 1]);
        self.size -= 1;
        drop(popped);
    }
}
