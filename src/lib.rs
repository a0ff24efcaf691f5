// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `simple-vector`
//!
//! A `no_std` growable vector, [`SimpleVector<T>`], built on a hand-rolled
//! owning array pointer, [`ArrayPtr<T>`], that talks to the global allocator
//! directly.
//!
//! The two pieces split the work:
//!
//! - [`ArrayPtr<T>`] exclusively owns one heap buffer of initialized
//!   elements. It is move-only, can [`release`](ArrayPtr::release) its buffer
//!   to the caller and adopt one back with [`from_raw`](ArrayPtr::from_raw),
//!   and reports indirection through an empty pointer as
//!   [`Error::NullDeref`] rather than touching memory.
//! - [`SimpleVector<T>`] wraps one `ArrayPtr<T>` plus a logical length and
//!   owns the growth policy, element insertion and removal, and comparisons.
//!
//! ## Growth policy
//!
//! - Capacity only grows when an operation needs more room than it has.
//!   Length-driven growth ([`push_back`](SimpleVector::push_back),
//!   [`insert`](SimpleVector::insert), [`resize`](SimpleVector::resize))
//!   allocates `max(required, 2 * capacity)` slots, so an empty vector goes
//!   `0 → 1 → 2 → 4 → 8 …`.
//! - [`reserve`](SimpleVector::reserve) allocates exactly the requested
//!   capacity and never changes the length.
//! - Existing elements are moved into the new buffer, never cloned.
//! - Every slot of the buffer holds a constructed `T`, so the operations
//!   that create slots require `T: Default`.
//!
//! ## Errors and panics
//!
//! Two classes of failure are kept apart:
//!
//! - **Precondition violations panic**: out-of-range indexing (`v[i]`),
//!   [`pop_back`](SimpleVector::pop_back) on an empty vector,
//!   [`erase`](SimpleVector::erase) at or past the end, and
//!   [`insert`](SimpleVector::insert) past the end.
//! - **Recoverable conditions return [`Error`]**: [`at`](SimpleVector::at)
//!   out of range, [`ArrayPtr::try_deref`] on an empty pointer, and the
//!   `try_*` growth methods on capacity overflow or allocator failure.
//!
//! The infallible growth methods panic on capacity overflow and call
//! [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on allocator
//! failure, like `Vec`.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `SimpleVector<T>`.
//!   - Deserialization requires `T: Deserialize<'de> + Default`.
//!
//! ## Example
//!
//! ```rust
//! use simple_vector::{SimpleVector, reserve_hint, simple_vector};
//!
//! let mut v: SimpleVector<u8> = SimpleVector::from(reserve_hint(2));
//! v.push_back(1);
//! v.push_back(3);
//! v.insert(1, 2);
//! assert_eq!(v, simple_vector![1, 2, 3]);
//! assert_eq!(v.capacity(), 4);
//!
//! let next = v.erase(0);
//! assert_eq!(v[next], 2);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
#[macro_use]
mod macros;
mod array_ptr;
mod error;
mod index;
mod iter;
mod reserve;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use array_ptr::ArrayPtr;
pub use error::Error;
pub use iter::IntoIter;
pub use reserve::{ReserveHint, reserve_hint};
pub use vec::SimpleVector;
