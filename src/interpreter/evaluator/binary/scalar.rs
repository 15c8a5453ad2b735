use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
    util::num::{floor_div, floor_mod, floor_mod_f64},
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// The function handles integer and float operands. Mixed types are
    /// promoted to floats. Integer arithmetic is checked for overflow, and
    /// `/` and `%` round toward negative infinity. Division by zero is checked
    /// explicitly for both numeric categories. `+` on two strings
    /// concatenates them. The operator must be one of `Add`, `Sub`, `Mul`,
    /// `Div` or `Mod`; other operators are not processed here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
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
    /// let x = Value::Float(1.5);
    /// let y = Value::Integer(2);
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul, &x, &y, 1).unwrap();
    /// assert_eq!(result, Value::Float(3.0));
    ///
    /// let q = Context::eval_scalar_op(BinaryOperator::Div,
    ///                                 &Value::Integer(-7),
    ///                                 &Value::Integer(2),
    ///                                 1).unwrap();
    /// assert_eq!(q, Value::Integer(-4));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Float, Integer, Str};

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let (a, b) = (*a, *b);
                let overflow = RuntimeError::Overflow { line };

                Ok(Integer(match op {
                               Add => a.checked_add(b).ok_or(overflow)?,
                               Sub => a.checked_sub(b).ok_or(overflow)?,
                               Mul => a.checked_mul(b).ok_or(overflow)?,
                               Div => floor_div(a, b, line)?,
                               Mod => floor_mod(a, b, line)?,
                               _ => unreachable!(),
                           }))
            },
            (Integer(_) | Float(_), Integer(_) | Float(_)) => {
                let left = left.as_real(line)?;
                let right = right.as_real(line)?;

                Ok(Float(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div | Mod if right == 0.0 => {
                                 return Err(RuntimeError::DivisionByZero { line });
                             },
                             Div => left / right,
                             Mod => floor_mod_f64(left, right),
                             _ => unreachable!(),
                         }))
            },
            (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),
            _ => Err(RuntimeError::TypeMismatch { details: format!("cannot apply {op} to {} and {}",
                                                                   left.kind(),
                                                                   right.kind()),
                                                  line }),
        }
    }
}
