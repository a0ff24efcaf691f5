// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `ReserveHint` value object.
//!
//! A hint only carries a capacity. Passing it to
//! [`SimpleVector::with_reserve`](crate::SimpleVector::with_reserve) (or
//! converting it with `From`) builds an *empty* vector with that much room,
//! as opposed to [`SimpleVector::with_len`](crate::SimpleVector::with_len),
//! which fills the vector with default values.

/// A request for an empty [`SimpleVector`](crate::SimpleVector) with a given
/// capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {
    /// Creates a hint for `capacity` elements.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    #[inline]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

impl From<usize> for ReserveHint {
    fn from(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

/// Builds a [`ReserveHint`] for `capacity` elements.
///
/// ```rust
/// use simple_vector::{SimpleVector, reserve_hint};
///
/// let v: SimpleVector<i32> = SimpleVector::from(reserve_hint(8));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 8);
/// ```
#[inline]
pub const fn reserve_hint(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{ReserveHint, reserve_hint};

    #[test]
    fn test_reserve_hint_carries_capacity() {
        assert_eq!(reserve_hint(5).capacity(), 5);
        assert_eq!(ReserveHint::from(3), ReserveHint::new(3));
        assert_eq!(ReserveHint::default().capacity(), 0);
    }
}
