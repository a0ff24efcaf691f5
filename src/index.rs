// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`SimpleVector`](crate::SimpleVector).
//!
//! `Index` and `IndexMut` forward to the live prefix `[0..len)` as a slice,
//! so every index form a slice accepts works here and:
//! - an index at or past `len` panics, even when it is below capacity;
//! - the check is made in every build profile.
//!
//! Use [`SimpleVector::at`](crate::SimpleVector::at) for a checked access
//! that reports [`Error::OutOfRange`](crate::Error::OutOfRange) instead.

// Crate imports
use crate::vec::SimpleVector;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::SimpleVector;

    #[test]
    fn test_indexing_and_ranges() {
        let mut v = simple_vector![0, 1, 2, 3, 4];

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 4]);
    }

    #[test]
    fn test_index_mut_single_element() {
        let mut v = simple_vector![1, 2, 3, 4];
        v[1] = 10;
        v[3] = 40;
        assert_eq!(v.as_slice(), &[1, 10, 3, 40]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_len_panics_even_within_capacity() {
        let mut v: SimpleVector<i32> = SimpleVector::with_capacity(8);
        v.push_back(1);
        let _ = v[1];
    }

    #[test]
    #[should_panic]
    fn test_index_after_clear_panics() {
        let mut v = simple_vector![1, 2, 3];
        v.clear();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v = simple_vector![1, 2, 3];
        let _ = &v[2..1];
    }

    #[test]
    fn test_empty_ranges_work() {
        let v = simple_vector![1, 2, 3];
        assert_eq!(&v[1..1], &[] as &[i32]);
        assert_eq!(&v[3..3], &[] as &[i32]);
    }
}
