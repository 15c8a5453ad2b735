use crate::{
    interpreter::evaluator::core::{Context, EvalResult},
    operator::StackWord,
    util::num::i64_to_usize_checked,
};

impl Context {
    /// Rearranges the top of the stack.
    ///
    /// - `SWAP`: exchanges the top two values.
    /// - `DROP`: discards the top value.
    /// - `DUP`: pushes a copy of the top value.
    /// - `ROT`: brings the third value from the top to the top.
    /// - `ROLL`: pops an integer `n` and brings the `n`-th value from the top
    ///   to the top.
    /// - `ROLLD`: pops an integer `n` and moves the top value down to the
    ///   `n`-th position, undoing `ROLL`.
    ///
    /// # Errors
    /// - `RuntimeError::StackUnderflow` if too few values are present. The
    ///   stack is left as it was, apart from the count popped by `ROLL` and
    ///   `ROLLD`.
    /// - `RuntimeError::ExpectedInteger` if the count is not an integer.
    /// - `RuntimeError::InvalidArgument` if the count is negative.
    ///
    /// # Example
    /// ```
    /// use stackma::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::StackWord,
    /// };
    ///
    /// let mut context = Context::new();
    /// for token in ["1", "2", "3", "4", "4"] {
    ///     context.eval_token(token, 1).unwrap();
    /// }
    ///
    /// context.eval_stack_word(StackWord::Roll, 1).unwrap();
    /// assert_eq!(context.stack.as_slice(), [2, 3, 4, 1].map(Value::Integer).as_slice());
    /// ```
    pub fn eval_stack_word(&mut self, word: StackWord, line: usize) -> EvalResult<()> {
        match word {
            StackWord::Swap => self.stack.rotate_up(2, line),
            StackWord::Drop => self.stack.pop(line).map(drop),
            StackWord::Dup => {
                let top = self.stack.peek(line)?.clone();
                self.push(top, line)
            },
            StackWord::Rot => self.stack.rotate_up(3, line),
            StackWord::Roll => {
                let count = self.pop_count(line)?;
                self.stack.rotate_up(count, line)
            },
            StackWord::RollDown => {
                let count = self.pop_count(line)?;
                self.stack.rotate_down(count, line)
            },
        }
    }

    fn pop_count(&mut self, line: usize) -> EvalResult<usize> {
        let count = self.stack.pop(line)?.as_integer(line)?;
        i64_to_usize_checked(count, line)
    }
}
