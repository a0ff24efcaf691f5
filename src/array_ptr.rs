// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `ArrayPtr` owning pointer.
//!
//! `ArrayPtr<T>` exclusively owns a heap buffer of initialized `T` values
//! obtained straight from the global allocator. It is move-only: there is no
//! `Clone` impl, and the only ways to give the buffer away are a Rust move,
//! [`ArrayPtr::swap`], or [`ArrayPtr::release`].
//!
//! The allocator needs the allocation [`Layout`] back on deallocation, so the
//! pointer records the element count it was built with. Higher-level notions
//! such as "how many of these slots are in use" belong to the container.

// Crate imports
use crate::error::{Error, handle_alloc_result};

// Core imports
use core::{
    alloc::Layout,
    fmt,
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut},
    ptr::{self, NonNull},
    slice,
};

// Alloc imports
use alloc::alloc::{alloc, dealloc};

/// An owning pointer to a heap-allocated array of `T`.
///
/// # Invariants
///
/// - `ptr == None` implies `len == 0`.
/// - When `ptr` is `Some`, it addresses `len` initialized elements allocated
///   with `Layout::array::<T>(len)` (or is dangling when that layout has size
///   zero), and no other value owns them.
///
/// # Examples
///
/// ```rust
/// use simple_vector::ArrayPtr;
///
/// let mut p: ArrayPtr<u32> = ArrayPtr::new(3);
/// p[1] = 7;
/// assert_eq!(p.as_slice(), &[0, 7, 0]);
///
/// let empty: ArrayPtr<u32> = ArrayPtr::null();
/// assert!(empty.is_null());
/// assert!(empty.try_deref().is_err());
/// ```
pub struct ArrayPtr<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `ArrayPtr<T>` uniquely owns its elements, so it can cross threads
// whenever `T` can, and shared access only hands out `&T`.
unsafe impl<T: Send> Send for ArrayPtr<T> {}
unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

impl<T> ArrayPtr<T> {
    /// Creates a pointer that owns nothing.
    #[inline]
    pub const fn null() -> Self {
        Self {
            ptr: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates `count` elements, each set to `T::default()`.
    ///
    /// A `count` of zero does not allocate and yields a null pointer; callers
    /// should not read anything into that.
    #[inline]
    pub fn new(count: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(count, |_| T::default())
    }

    /// Fallible variant of [`ArrayPtr::new`].
    #[inline]
    pub fn try_new(count: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        Self::try_from_fn(count, |_| T::default())
    }

    /// Allocates `count` elements, element `i` being `f(i)`.
    #[inline]
    pub fn from_fn<F>(count: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        handle_alloc_result(Self::try_from_fn(count, f))
    }

    /// Fallible variant of [`ArrayPtr::from_fn`].
    ///
    /// The buffer is allocated before `f` is first called, so an error means
    /// `f` never ran. If `f` panics, the elements built so far are dropped
    /// and the buffer is freed.
    pub fn try_from_fn<F>(count: usize, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(usize) -> T,
    {
        if count == 0 {
            return Ok(Self::null());
        }
        let layout = Layout::array::<T>(count).map_err(|_| Error::CapacityOverflow)?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: `layout` has a non-zero size.
            let raw = unsafe { alloc(layout) };
            NonNull::new(raw.cast::<T>()).ok_or(Error::AllocFailed { layout })?
        };

        let mut guard = PartialInit {
            ptr,
            capacity: count,
            initialized: 0,
        };
        while guard.initialized < count {
            let value = f(guard.initialized);
            // SAFETY: `initialized < count`, so the slot is inside the
            // allocation and has not been written yet.
            unsafe { guard.ptr.as_ptr().add(guard.initialized).write(value) };
            guard.initialized += 1;
        }
        mem::forget(guard);

        Ok(Self {
            ptr: Some(ptr),
            len: count,
            _marker: PhantomData,
        })
    }

    /// Takes ownership of a buffer previously handed out by
    /// [`ArrayPtr::release`].
    ///
    /// A null `raw` yields a null pointer.
    ///
    /// # Safety
    ///
    /// Unless null, `raw` must address `raw.len()` initialized elements
    /// allocated by the global allocator with `Layout::array::<T>(raw.len())`
    /// (any well-aligned non-null address when that layout has size zero),
    /// and nothing else may use or free it afterwards.
    pub unsafe fn from_raw(raw: *mut [T]) -> Self {
        let len = raw.len();
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Self {
                ptr: Some(ptr),
                len,
                _marker: PhantomData,
            },
            None => Self::null(),
        }
    }

    /// Gives up ownership of the buffer and leaves `self` null.
    ///
    /// The caller becomes responsible for the elements and the allocation;
    /// the usual way to free them is [`ArrayPtr::from_raw`]. A null pointer
    /// releases a null, zero-length slice.
    #[must_use = "the released buffer leaks unless it is passed back to `ArrayPtr::from_raw`"]
    pub fn release(&mut self) -> *mut [T] {
        let len = mem::take(&mut self.len);
        let data = self.ptr.take().map_or(ptr::null_mut(), NonNull::as_ptr);
        ptr::slice_from_raw_parts_mut(data, len)
    }

    /// Returns `true` if no buffer is owned.
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Number of elements in the owned buffer (`0` when null).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the owned buffer holds no element.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the buffer address, or null.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.map_or(ptr::null(), |p| p.as_ptr().cast_const())
    }

    /// Returns the buffer address, or null.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Views the whole buffer as a slice (empty when null).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self.ptr {
            // SAFETY: by invariant `ptr` addresses `len` initialized elements
            // owned by `self`.
            Some(ptr) => unsafe { slice::from_raw_parts(ptr.as_ptr(), self.len) },
            None => &[],
        }
    }

    /// Views the whole buffer as a mutable slice (empty when null).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.ptr {
            // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
            Some(ptr) => unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), self.len) },
            None => &mut [],
        }
    }

    /// Dereferences the pointer, yielding the first element.
    ///
    /// Returns [`Error::NullDeref`] instead of touching memory when the
    /// pointer owns no element.
    #[inline]
    pub fn try_deref(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or(Error::NullDeref)
    }

    /// Mutable variant of [`ArrayPtr::try_deref`].
    #[inline]
    pub fn try_deref_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().first_mut().ok_or(Error::NullDeref)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::len`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "ArrayPtr::get_unchecked: index {index} out of bounds for length {}",
            self.len
        );
        // SAFETY: the caller guarantees `index < len`, which implies a held
        // buffer with an initialized slot at `index`.
        unsafe { &*self.as_ptr().add(index) }
    }

    /// Returns the element at `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::len`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "ArrayPtr::get_unchecked_mut: index {index} out of bounds for length {}",
            self.len
        );
        // SAFETY: see `get_unchecked`.
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }

    /// Exchanges the owned buffers of `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T> Drop for ArrayPtr<T> {
    fn drop(&mut self) {
        let Some(ptr) = self.ptr.take() else {
            return;
        };
        // By invariant `ptr` was allocated with `Layout::array::<T>(len)`, and
        // `take` above makes this the only release.
        let _buffer = FreeOnDrop {
            ptr,
            count: self.len,
        };
        // SAFETY: `ptr` addresses `len` initialized elements.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), self.len)) };
    }
}

impl<T> Default for ArrayPtr<T> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("ptr", &self.as_ptr())
            .field("len", &self.len)
            .finish()
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

/// A buffer that is still being filled by [`ArrayPtr::try_from_fn`].
///
/// Dropping it (on unwind) drops the first `initialized` elements and frees
/// the allocation.
struct PartialInit<T> {
    ptr: NonNull<T>,
    capacity: usize,
    initialized: usize,
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        // The allocation was made for `capacity` elements.
        let _buffer = FreeOnDrop {
            ptr: self.ptr,
            count: self.capacity,
        };
        // SAFETY: the first `initialized` slots were written by
        // `try_from_fn`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.initialized,
            ));
        }
    }
}

/// Returns a buffer of `count` elements to the global allocator when dropped,
/// including on unwind out of an element destructor.
///
/// Must only be built for a buffer allocated with `Layout::array::<T>(count)`
/// that nothing else will free.
struct FreeOnDrop<T> {
    ptr: NonNull<T>,
    count: usize,
}

impl<T> Drop for FreeOnDrop<T> {
    fn drop(&mut self) {
        // SAFETY: upheld by whoever built the guard.
        unsafe { free_buffer(self.ptr, self.count) };
    }
}

/// Returns a buffer of `count` elements to the global allocator.
///
/// # Safety
///
/// `ptr` must have been allocated with `Layout::array::<T>(count)`. Zero-size
/// layouts were never allocated and are skipped.
unsafe fn free_buffer<T>(ptr: NonNull<T>, count: usize) {
    match Layout::array::<T>(count) {
        // SAFETY: forwarded from the caller.
        Ok(layout) if layout.size() != 0 => unsafe { dealloc(ptr.as_ptr().cast(), layout) },
        _ => {}
    }
}
