// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::handle_alloc_result, vec::SimpleVector};

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        handle_alloc_result(self.try_grow_for(self.size.saturating_add(lower)));
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Appends clones of every element of `src`.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.extend(src.iter().cloned());
    }
}
