use crate::{
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl Context {
    /// Pops two operands, applies the operator and pushes the result.
    ///
    /// The first value popped is the right operand, so `10 3 -` computes
    /// `10 - 3`.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` if fewer than two values are
    /// present, or any error from [`Context::eval_binary`].
    pub fn apply_binary(&mut self, op: BinaryOperator, line: usize) -> EvalResult<()> {
        let (left, right) = self.stack.pop_pair(line)?;
        let result = Self::eval_binary(op, &left, &right, line)?;
        self.push(result, line)
    }
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator and operand types. Arithmetic operations choose between
    /// vector/matrix and scalar evaluation. Power calls `eval_pow`, the cross
    /// product `eval_cross`. Equality, ordering and `<=>` use
    /// `eval_comparison`. `& | ^ << >>` use `eval_bitwise`.
    ///
    /// # Parameters
    /// - `op`: The operator.
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
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let dot = Context::eval_binary(BinaryOperator::Mul,
    ///                                &Value::Vector(vec![1, 2, 3]),
    ///                                &Value::Vector(vec![4, 5, 6]),
    ///                                1);
    /// assert_eq!(dot.unwrap(), Value::Integer(32));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, BitAnd, BitOr, BitXor, Compare, Cross, Div, Equal, Greater, GreaterEqual, Less,
            LessEqual, Mod, Mul, NotEqual, Pow, ShiftLeft, ShiftRight, Sub,
        };
        use Value::{Matrix, Vector};

        match op {
            Add | Sub | Mul | Div | Mod => match (left, right) {
                (Vector(_) | Matrix(_), _) | (_, Vector(_) | Matrix(_)) => {
                    Self::eval_linalg(op, left, right, line)
                },
                _ => Self::eval_scalar_op(op, left, right, line),
            },

            Pow => Self::eval_pow(left, right, line),

            Cross => Self::eval_cross(left, right, line),

            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual | Compare => {
                Self::eval_comparison(op, left, right, line)
            },

            BitAnd | BitOr | BitXor | ShiftLeft | ShiftRight => {
                Self::eval_bitwise(op, left, right, line)
            },
        }
    }
}
