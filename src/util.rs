/// Numeric conversion and integer arithmetic helpers.
///
/// This module provides safe conversions from `i64` to `u32` and `usize`,
/// an exact comparison between `i64` and `f64`, and the floor-rounding
/// integer division, modulo and shift routines used by the binary operators.
///
/// Fallible functions return a `Result`, which is `Ok` if the operation is
/// exact and valid, or a [`RuntimeError`](crate::error::RuntimeError)
/// otherwise.
pub mod num;
