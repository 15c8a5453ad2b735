use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::UnaryOperator,
};

impl Context {
    /// Pops one value, applies the operator and pushes the result.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` on an empty stack, or any error
    /// from [`Context::eval_unary`].
    pub fn apply_unary(&mut self, op: UnaryOperator, line: usize) -> EvalResult<()> {
        let value = self.stack.pop(line)?;
        let result = Self::eval_unary(op, &value, line)?;
        self.push(result, line)
    }
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Not` (`!`): boolean negation. The operand must be a boolean.
    /// - `Complement` (`~`): bitwise complement. The operand must be an
    ///   integer.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use stackma::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::UnaryOperator,
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Complement, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-6));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Not, &Value::Integer(1), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(line)?)),
            UnaryOperator::Complement => match value {
                Value::Integer(n) => Ok(Value::Integer(!n)),
                _ => Err(RuntimeError::TypeMismatch { details: format!("cannot apply ~ to {}",
                                                                       value.kind()),
                                                      line }),
            },
        }
    }
}
