// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`SimpleVector`](crate::SimpleVector).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&SimpleVector` and `&mut SimpleVector` iterate as slices.

// Crate imports
use crate::vec::SimpleVector;

// Core imports
use core::{fmt, iter::FusedIterator, mem};

/// Owned iterator returned by `SimpleVector::into_iter()`.
///
/// Owns the vector's buffer and moves elements out of it, leaving
/// `T::default()` behind in each visited slot. Unvisited elements are dropped
/// together with the buffer.
pub struct IntoIter<T> {
    v: SimpleVector<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The elements not yielded yet.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.v.as_slice()[self.front..self.back]
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(mem::take(&mut self.v[i]))
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(mem::take(&mut self.v[self.back]))
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }
}
impl<T: Default> FusedIterator for IntoIter<T> {}
impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T: Default> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len(),
            v: self,
        }
    }
}
