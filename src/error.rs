// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`SimpleVector`](crate::SimpleVector) and [`ArrayPtr`](crate::ArrayPtr).
//!
//! Only *recoverable* conditions are reported through [`Error`]: checked
//! indexing, indirection through an empty pointer, and allocation failures
//! from the `try_*` growth methods. Precondition violations (out-of-range
//! `[]`, `pop_back` on an empty vector, `erase` at the end) panic instead.

// Core imports
use core::{alloc::Layout, error::Error as CoreError, fmt};

/// Errors returned by operations on [`SimpleVector`](crate::SimpleVector) and
/// [`ArrayPtr`](crate::ArrayPtr).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A checked access used an index at or past the logical length.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The logical length at the time of the access.
        len: usize,
    },
    /// Indirection through an [`ArrayPtr`](crate::ArrayPtr) that owns no element.
    NullDeref,
    /// The requested capacity does not fit in `isize::MAX` bytes.
    CapacityOverflow,
    /// The global allocator returned null for `layout`.
    AllocFailed {
        /// The layout that was passed to the allocator.
        layout: Layout,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::NullDeref => f.write_str("dereference of an empty array pointer"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { layout } => {
                write!(f, "memory allocation of {} bytes failed", layout.size())
            }
        }
    }
}

impl CoreError for Error {}

/// Unwraps the result of a fallible growth step for the infallible API.
///
/// Allocator failures go through [`alloc::alloc::handle_alloc_error`], every
/// other error is a panic.
#[inline]
pub(crate) fn handle_alloc_result<R>(result: Result<R, Error>) -> R {
    match result {
        Ok(value) => value,
        Err(Error::AllocFailed { layout }) => alloc::alloc::handle_alloc_error(layout),
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::handle_alloc_result;
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::{alloc::Layout, error::Error as CoreError};

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange { index: 3, len: 3 });
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::OutOfRange { index: 5, len: 2 }.to_string(),
            "index 5 out of range for length 2"
        );
        assert_eq!(
            Error::NullDeref.to_string(),
            "dereference of an empty array pointer"
        );
        assert_eq!(Error::CapacityOverflow.to_string(), "capacity overflow");

        let layout = Layout::array::<u64>(4).unwrap();
        assert_eq!(
            Error::AllocFailed { layout }.to_string(),
            "memory allocation of 32 bytes failed"
        );
    }

    #[test]
    fn test_handle_alloc_result_passes_ok_through() {
        assert_eq!(handle_alloc_result(Ok::<_, Error>(7)), 7);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_handle_alloc_result_panics_on_overflow() {
        handle_alloc_result::<()>(Err(Error::CapacityOverflow));
    }
}
