// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Grows like [`push_back`](SimpleVector::push_back) when full (an empty,
    /// unallocated vector grows to capacity 1). Returns the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        let len = self.size;
        assert!(index <= len, "insertion index (is {index}) should be <= len (is {len})");
        self.resize(len + 1);

        // The fresh default slot at the end rotates into `index`.
        let tail = &mut self.items.as_mut_slice()[index..=len];
        tail.rotate_right(1);
        tail[0] = value;
        &mut tail[0]
    }
}
