use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
    util::num::{shift_left, shift_right},
};

impl Context {
    /// Evaluates a bitwise operation.
    ///
    /// On two integers, `&`, `|` and `^` work bit by bit and `<<`, `>>`
    /// shift the left operand by the right one (a negative amount shifts the
    /// other way, left shifts are checked for overflow). On two booleans,
    /// `&`, `|` and `^` are logical and, or and exclusive or.
    ///
    /// # Parameters
    /// - `op`: The bitwise operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use stackma::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let r = Context::eval_bitwise(BinaryOperator::BitXor, &Value::Integer(6), &Value::Integer(3), 1);
    /// assert_eq!(r.unwrap(), Value::Integer(5));
    ///
    /// let r = Context::eval_bitwise(BinaryOperator::BitOr, &Value::Bool(false), &Value::Bool(true), 1);
    /// assert_eq!(r.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_bitwise(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        use BinaryOperator::{BitAnd, BitOr, BitXor, ShiftLeft, ShiftRight};

        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(match op {
                                                                            BitAnd => a & b,
                                                                            BitOr => a | b,
                                                                            BitXor => a ^ b,
                                                                            ShiftLeft => {
                                                                                shift_left(*a, *b, line)?
                                                                            },
                                                                            ShiftRight => {
                                                                                shift_right(*a, *b, line)?
                                                                            },
                                                                            _ => unreachable!(),
                                                                        })),
            (Value::Bool(a), Value::Bool(b)) if matches!(op, BitAnd | BitOr | BitXor) => {
                Ok(Value::Bool(match op {
                                   BitAnd => a & b,
                                   BitOr => a | b,
                                   _ => a ^ b,
                               }))
            },
            _ => Err(RuntimeError::TypeMismatch { details: format!("cannot apply {op} to {} and {}",
                                                                   left.kind(),
                                                                   right.kind()),
                                                  line }),
        }
    }
}
