// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Builds a [`SimpleVector`](crate::SimpleVector) from a literal list.
///
/// - `simple_vector![]`: empty, no allocation.
/// - `simple_vector![a, b, c]`: the listed elements, capacity == len.
/// - `simple_vector![x; n]`: `n` clones of `x`.
///
/// ```rust
/// use simple_vector::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
/// assert_eq!(simple_vector![0u8; 4].as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
