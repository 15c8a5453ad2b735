use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// `2^63` as an `f64`, the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Compares an integer with a float exactly, without rounding the integer.
///
/// A NaN orders above every integer, matching the total order of
/// [`OrderedFloat`](ordered_float::OrderedFloat) used for float pairs.
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use stackma::util::num::compare_i64_f64;
///
/// assert_eq!(compare_i64_f64(3, 3.0), Ordering::Equal);
/// assert_eq!(compare_i64_f64(3, 3.5), Ordering::Less);
/// assert_eq!(compare_i64_f64(-3, -3.5), Ordering::Greater);
///
/// // 2^53 + 1 has no exact f64, so it must not equal 2^53.
/// assert_eq!(compare_i64_f64(9_007_199_254_740_993, 9_007_199_254_740_992.0),
///            Ordering::Greater);
/// assert_eq!(compare_i64_f64(i64::MAX, 1e19), Ordering::Less);
/// assert_eq!(compare_i64_f64(0, f64::NAN), Ordering::Less);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn compare_i64_f64(int: i64, float: f64) -> Ordering {
    if float.is_nan() || float >= I64_BOUND {
        return Ordering::Less;
    }
    if float < -I64_BOUND {
        return Ordering::Greater;
    }

    // In range, so the truncation is exact.
    let whole = float.trunc() as i64;
    int.cmp(&whole)
       .then_with(|| OrderedFloat(0.0).cmp(&OrderedFloat(float.fract())))
}
/// Safely converts an `i64` to a `u32`, as needed for exponents and shift
/// amounts.
///
/// ## Errors
/// - `RuntimeError::InvalidArgument` if the value is negative.
/// - `RuntimeError::LiteralTooLarge` if it exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use stackma::{error::RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45, 5).unwrap(), 45);
///
/// let err = i64_to_u32_checked(i64::MAX, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge { line: 11 }));
/// ```
pub fn i64_to_u32_checked(value: i64, line: usize) -> EvalResult<u32> {
    if value < 0 {
        return Err(RuntimeError::InvalidArgument { details: format!("expected a non-negative integer, found {value}"),
                                                   line });
    }
    u32::try_from(value).map_err(|_| RuntimeError::LiteralTooLarge { line })
}
/// Safely converts an `i64` to a `usize`, as needed for counts such as the
/// argument of `ROLL`.
///
/// ## Errors
/// - `RuntimeError::InvalidArgument` if the value is negative.
/// - `RuntimeError::LiteralTooLarge` if it does not fit a `usize`.
///
/// ## Example
/// ```
/// use stackma::{error::RuntimeError, util::num::i64_to_usize_checked};
///
/// assert_eq!(i64_to_usize_checked(42, 0).unwrap(), 42);
///
/// let err = i64_to_usize_checked(-1, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { line: 5, .. }));
/// ```
pub fn i64_to_usize_checked(value: i64, line: usize) -> EvalResult<usize> {
    if value < 0 {
        return Err(RuntimeError::InvalidArgument { details: format!("expected a non-negative count, found {value}"),
                                                   line });
    }
    usize::try_from(value).map_err(|_| RuntimeError::LiteralTooLarge { line })
}
/// Integer division rounding toward negative infinity.
///
/// ## Errors
/// - `RuntimeError::DivisionByZero` if `rhs` is zero.
/// - `RuntimeError::Overflow` for `i64::MIN / -1`.
///
/// ## Example
/// ```
/// use stackma::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2, 1).unwrap(), 3);
/// assert_eq!(floor_div(-7, 2, 1).unwrap(), -4);
/// assert!(floor_div(1, 0, 1).is_err());
/// ```
pub fn floor_div(lhs: i64, rhs: i64, line: usize) -> EvalResult<i64> {
    if rhs == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let quotient = lhs.checked_div(rhs).ok_or(RuntimeError::Overflow { line })?;
    if lhs % rhs != 0 && ((lhs < 0) != (rhs < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}
/// Integer remainder whose sign follows the divisor, the counterpart of
/// [`floor_div`].
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` if `rhs` is zero.
///
/// ## Example
/// ```
/// use stackma::util::num::floor_mod;
///
/// assert_eq!(floor_mod(7, 3, 1).unwrap(), 1);
/// assert_eq!(floor_mod(-7, 3, 1).unwrap(), 2);
/// assert_eq!(floor_mod(7, -3, 1).unwrap(), -2);
/// ```
pub fn floor_mod(lhs: i64, rhs: i64, line: usize) -> EvalResult<i64> {
    if rhs == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let remainder = lhs.checked_rem(rhs).unwrap_or(0);
    if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
        Ok(remainder + rhs)
    } else {
        Ok(remainder)
    }
}
/// Float remainder whose sign follows the divisor, the float counterpart of
/// [`floor_mod`].
#[must_use]
pub fn floor_mod_f64(lhs: f64, rhs: f64) -> f64 {
    lhs - rhs * (lhs / rhs).floor()
}
/// Shifts `value` left by `amount` bits; a negative amount shifts right.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the result does not fit an `i64`.
///
/// ## Example
/// ```
/// use stackma::util::num::shift_left;
///
/// assert_eq!(shift_left(1, 4, 1).unwrap(), 16);
/// assert_eq!(shift_left(16, -2, 1).unwrap(), 4);
/// assert!(shift_left(1, 70, 1).is_err());
/// ```
pub fn shift_left(value: i64, amount: i64, line: usize) -> EvalResult<i64> {
    if amount < 0 {
        return Ok(shift_right_unbounded(value, amount.unsigned_abs()));
    }
    if value == 0 {
        return Ok(0);
    }
    let amount = u32::try_from(amount).map_err(|_| RuntimeError::Overflow { line })?;
    let shifted = value.checked_shl(amount).ok_or(RuntimeError::Overflow { line })?;
    if shifted >> amount == value {
        Ok(shifted)
    } else {
        Err(RuntimeError::Overflow { line })
    }
}
/// Shifts `value` right by `amount` bits (arithmetic shift); a negative
/// amount shifts left.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if a left shift does not fit an `i64`.
///
/// ## Example
/// ```
/// use stackma::util::num::shift_right;
///
/// assert_eq!(shift_right(16, 2, 1).unwrap(), 4);
/// assert_eq!(shift_right(-1, 100, 1).unwrap(), -1);
/// ```
pub fn shift_right(value: i64, amount: i64, line: usize) -> EvalResult<i64> {
    if amount < 0 {
        return shift_left(value, amount.checked_neg().ok_or(RuntimeError::Overflow { line })?, line);
    }
    Ok(shift_right_unbounded(value, amount.unsigned_abs()))
}

fn shift_right_unbounded(value: i64, amount: u64) -> i64 {
    u32::try_from(amount).ok()
                         .and_then(|amount| value.checked_shr(amount))
                         .unwrap_or(if value < 0 { -1 } else { 0 })
}
