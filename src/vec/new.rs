// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    array_ptr::ArrayPtr,
    reserve::{ReserveHint, reserve_hint},
    vec::SimpleVector,
};

impl<T> SimpleVector<T> {
    /// Constructs an empty vector without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: ArrayPtr::null(),
            size: 0,
        }
    }

    /// Constructs a vector of `len` elements set to `T::default()`.
    ///
    /// Capacity equals `len`.
    #[inline]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            items: ArrayPtr::new(len),
            size: len,
        }
    }

    /// Constructs a vector of `len` clones of `value`.
    #[inline]
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            items: ArrayPtr::from_fn(len, |_| value.clone()),
            size: len,
        }
    }

    /// Constructs an empty vector whose capacity is `hint.capacity()`.
    #[inline]
    pub fn with_reserve(hint: ReserveHint) -> Self
    where
        T: Default,
    {
        Self {
            items: ArrayPtr::new(hint.capacity()),
            size: 0,
        }
    }

    /// Shorthand for `SimpleVector::with_reserve(reserve_hint(capacity))`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default,
    {
        Self::with_reserve(reserve_hint(capacity))
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> From<ReserveHint> for SimpleVector<T> {
    fn from(hint: ReserveHint) -> Self {
        Self::with_reserve(hint)
    }
}
