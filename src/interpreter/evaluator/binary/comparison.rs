use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
    util::num::compare_i64_f64,
};

/// Orders two numbers, or returns `None` if either is not a number.
///
/// Integer pairs compare as integers and float pairs by the total order of
/// [`OrderedFloat`], in which NaN sits above every number and equals itself.
/// An integer and a float compare exactly, so an integer beyond `2^53` is
/// never rounded onto a neighbouring float.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use stackma::interpreter::{evaluator::binary::comparison::compare_numbers, value::core::Value};
///
/// let big = Value::Integer(9_007_199_254_740_993);
/// let near = Value::Float(9_007_199_254_740_992.0);
///
/// assert_eq!(compare_numbers(&big, &near), Some(Ordering::Greater));
/// assert_eq!(compare_numbers(&near, &big), Some(Ordering::Less));
/// assert_eq!(compare_numbers(&Value::Integer(1), &Value::Bool(true)), None);
/// ```
#[must_use]
pub fn compare_numbers(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Some(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
        (Value::Integer(a), Value::Float(b)) => Some(compare_i64_f64(*a, *b)),
        (Value::Float(a), Value::Integer(b)) => Some(compare_i64_f64(*b, *a).reverse()),
        _ => None,
    }
}

/// Compares two values structurally.
///
/// Numbers compare by value through [`compare_numbers`], so `1 == 1.0`. All
/// other kinds are equal only to values of the same kind with equal
/// contents.
///
/// # Example
/// ```
/// use stackma::interpreter::{evaluator::binary::comparison::values_equal, value::core::Value};
///
/// assert!(values_equal(&Value::Integer(1), &Value::Float(1.0)));
/// assert!(!values_equal(&Value::Integer(9_007_199_254_740_993),
///                       &Value::Float(9_007_199_254_740_992.0)));
/// assert!(values_equal(&Value::Vector(vec![1, 2]), &Value::Vector(vec![1, 2])));
/// assert!(!values_equal(&Value::Str("1".into()), &Value::Integer(1)));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    compare_numbers(left, right).map_or_else(|| left == right, Ordering::is_eq)
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// For `Equal` and `NotEqual`, values are compared with
    /// [`values_equal`]. For relational operators and `<=>`, numbers are
    /// ordered with [`compare_numbers`] and strings lexicographically. `<=>` yields the
    /// integer `-1`, `0` or `1`; the others yield a boolean.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Example
    /// ```
    /// use stackma::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let a = Value::Float(3.0);
    /// let b = Value::Integer(5);
    ///
    /// let less = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    ///
    /// let order = Context::eval_comparison(BinaryOperator::Compare, &b, &a, 1);
    /// assert_eq!(order.unwrap(), Value::Integer(1));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Compare, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if matches!(op, Equal | NotEqual) {
            let equality = values_equal(left, right);
            return Ok(Value::Bool(if op == Equal { equality } else { !equality }));
        }

        let ordering = order(left, right).ok_or_else(|| {
                                              RuntimeError::TypeMismatch { details: format!("cannot compare {} with {}",
                                                                                            left.kind(),
                                                                                            right.kind()),
                                                                           line }
                                          })?;

        Ok(match op {
               Less => Value::Bool(ordering.is_lt()),
               Greater => Value::Bool(ordering.is_gt()),
               LessEqual => Value::Bool(ordering.is_le()),
               GreaterEqual => Value::Bool(ordering.is_ge()),
               Compare => Value::Integer(i64::from(ordering as i8)),
               _ => unreachable!("eval_comparison used with non comparison operator"),
           })
    }
}

/// Orders two values, or returns `None` if their kinds are not comparable.
fn order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => compare_numbers(left, right),
    }
}
