// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `SimpleVector` type and its inherent API.
//!
//! `SimpleVector<T>` is a growable vector whose storage is a single
//! [`ArrayPtr<T>`]. It tracks a logical length (`size`) separately from the
//! buffer length (`capacity`), and owns the growth policy: whenever an
//! operation needs more room than the buffer has, the new capacity is
//! `max(required, 2 * capacity)`.
//!
//! Operations live in one file per group under `vec/`.

mod erase;
mod extend;
mod from;
mod insert;
mod new;
mod push;
mod resize;

// Crate imports
use crate::{array_ptr::ArrayPtr, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, heap-allocated vector built on [`ArrayPtr`].
///
/// # Layout and invariants
///
/// - `items` owns a buffer of `capacity` **initialized** elements. Slots in
///   `[0, size)` are the live contents; slots in `[size, capacity)` hold
///   leftover or default values and are never exposed.
/// - `size <= capacity` always holds.
/// - `capacity > 0` implies a non-null buffer.
///
/// Because every slot is constructed, operations that create slots (growth,
/// [`resize`](SimpleVector::resize), [`with_len`](SimpleVector::with_len),
/// …) require `T: Default`, and vacated slots keep their old values until
/// overwritten or until the vector is dropped.
///
/// # Growth
///
/// Growing past capacity allocates a new buffer of `max(required, 2 * capacity)`
/// elements and *moves* the live elements into it (no `Clone` needed).
/// Starting from an empty vector, repeated [`push_back`](SimpleVector::push_back)
/// goes through capacities `1, 2, 4, 8, …`.
/// [`reserve`](SimpleVector::reserve) allocates exactly what was asked for and
/// never changes the length.
///
/// # Checked vs panicking access
///
/// - [`at`](SimpleVector::at) / [`at_mut`](SimpleVector::at_mut) return
///   [`Error::OutOfRange`] for `index >= len()`.
/// - Indexing (`v[i]`), [`pop_back`](SimpleVector::pop_back) on an empty
///   vector, and [`erase`](SimpleVector::erase) / [`insert`](SimpleVector::insert)
///   past the end are precondition violations and panic.
///
/// # Copy and move
///
/// - `clone` builds an independent buffer; `clone_from` does copy-and-swap,
///   so the destination is untouched if cloning an element panics.
/// - Moving out with [`core::mem::take`] leaves the source empty with zero
///   capacity.
///
/// # Examples
///
/// ```rust
/// use simple_vector::{SimpleVector, simple_vector};
///
/// let mut v: SimpleVector<i32> = SimpleVector::new();
/// v.push_back(2);
/// v.push_back(3);
/// v.insert(0, 1);
/// assert_eq!(v, simple_vector![1, 2, 3]);
/// assert_eq!(v.capacity(), 4);
///
/// assert!(v.at(3).is_err());
/// ```
pub struct SimpleVector<T> {
    pub(crate) items: ArrayPtr<T>,
    pub(crate) size: usize,
}

impl<T> SimpleVector<T> {
    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Views the live elements `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Views the live elements `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// May be null for a vector that never allocated. Emptiness is
    /// `start == end` on the slice's `as_ptr_range()`, never a null check.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// Returns the element at `index`, or [`Error::OutOfRange`] if
    /// `index >= len()`.
    ///
    /// Capacity is irrelevant: slots past `len()` are never reachable.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.size;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Mutable variant of [`at`](SimpleVector::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Exchanges the contents (buffer, length and capacity) of two vectors.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        core::mem::swap(&mut self.size, &mut other.size);
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("len", &self.size)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for SimpleVector<T> {}
impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep-copies the live elements into a buffer of exactly `len()` slots.
    fn clone(&self) -> Self {
        let src = self.as_slice();
        Self {
            items: ArrayPtr::from_fn(src.len(), |i| src[i].clone()),
            size: src.len(),
        }
    }

    /// Copy-and-swap: the full copy is built first, so `self` is left as it
    /// was if any element's `clone` panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
