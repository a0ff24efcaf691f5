// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, vec::SimpleVector};

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    /// Moves the array's elements into a buffer of exactly `N` slots.
    fn from(array: [T; N]) -> Self {
        let mut elements = array.into_iter();
        let items = ArrayPtr::from_fn(N, |_| match elements.next() {
            Some(value) => value,
            None => unreachable!("array iterator yields exactly N elements"),
        });
        Self { items, size: N }
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(src: &[T]) -> Self {
        Self {
            items: ArrayPtr::from_fn(src.len(), |i| src[i].clone()),
            size: src.len(),
        }
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for SimpleVector<T> {
    fn from(src: &[T; N]) -> Self {
        src.as_slice().into()
    }
}
