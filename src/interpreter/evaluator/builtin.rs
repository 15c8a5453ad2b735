use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::linalg::transpose,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    operator::Command,
};

impl Context {
    /// Executes a control word.
    ///
    /// - `IFELSE`: pops the false branch, then the true branch, then a
    ///   boolean condition, and pushes the branch the condition selects. A
    ///   program therefore reads `cond a b IFELSE`.
    /// - `TRANSP`: pops a matrix and pushes its transpose.
    /// - `EVAL`: pops a value and forces it. A lambda is invoked, a symbol or
    ///   string is evaluated as a single token, and any other value is pushed
    ///   back unchanged.
    ///
    /// # Errors
    /// - `RuntimeError::StackUnderflow` if too few values are present.
    /// - `RuntimeError::ExpectedBoolean` for a non-boolean `IFELSE`
    ///   condition.
    /// - `RuntimeError::TypeMismatch` when `TRANSP` gets anything but a
    ///   matrix.
    /// - Any error raised by the forced value under `EVAL`.
    ///
    /// # Example
    /// ```
    /// use stackma::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::Command,
    /// };
    ///
    /// let mut context = Context::new();
    /// for token in ["true", "5", "10"] {
    ///     context.eval_token(token, 1).unwrap();
    /// }
    /// context.eval_command(Command::IfElse, 1).unwrap();
    /// assert_eq!(context.stack.as_slice(), [Value::Integer(5)]);
    ///
    /// context.eval_token("'DUP", 1).unwrap();
    /// context.eval_command(Command::Eval, 1).unwrap();
    /// assert_eq!(context.stack.as_slice(), [Value::Integer(5), Value::Integer(5)]);
    /// ```
    pub fn eval_command(&mut self, command: Command, line: usize) -> EvalResult<()> {
        match command {
            Command::IfElse => self.eval_if_else(line),
            Command::Transpose => match self.stack.pop(line)? {
                Value::Matrix(rows) => self.push(Value::Matrix(transpose(&rows)), line),
                other => Err(RuntimeError::TypeMismatch { details: format!("cannot transpose {}",
                                                                           other.kind()),
                                                          line }),
            },
            Command::Eval => {
                let value = self.stack.pop(line)?;
                debug!(value = %value, line, "forcing value");

                match value {
                    Value::Lambda(text) => self.eval_lambda(&text, line),
                    Value::Symbol(text) | Value::Str(text) => {
                        self.nested(line, |context| context.eval_token(&text, line))
                    },
                    other => self.push(other, line),
                }
            },
        }
    }

    fn eval_if_else(&mut self, line: usize) -> EvalResult<()> {
        self.stack.require(3, line)?;
        if !matches!(self.stack.as_slice()[self.stack.len() - 3], Value::Bool(_)) {
            return Err(RuntimeError::ExpectedBoolean { line });
        }

        let [when_false, when_true, condition]: [Value; 3] =
            self.stack
                .pop_n(3, line)?
                .try_into()
                .map_err(|popped: Vec<Value>| RuntimeError::StackUnderflow { needed: 3,
                                                                             found: popped.len(),
                                                                             line })?;

        let chosen = if condition.as_bool(line)? { when_true } else { when_false };
        self.push(chosen, line)
    }
}
