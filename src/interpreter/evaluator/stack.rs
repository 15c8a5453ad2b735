use crate::{
    config::MAX_STACK_SIZE,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The value stack a program runs against.
///
/// The bottom of the stack is the start of the underlying vector. Every
/// operation that removes values checks the depth first, so a failing
/// operation never leaves the stack half-modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    values:   Vec<Value>,
    max_size: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(MAX_STACK_SIZE)
    }
}

impl Stack {
    /// Creates an empty stack that holds at most `max_size` values.
    #[must_use]
    pub const fn new(max_size: usize) -> Self {
        Self { values: Vec::new(),
               max_size }
    }
    /// Pushes a value on top.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackOverflow` if the stack is full.
    pub fn push(&mut self, value: Value, line: usize) -> EvalResult<()> {
        if self.values.len() >= self.max_size {
            return Err(RuntimeError::StackOverflow { limit: self.max_size,
                                                     line });
        }
        self.values.push(value);
        Ok(())
    }
    /// Removes and returns the top value.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` if the stack is empty.
    pub fn pop(&mut self, line: usize) -> EvalResult<Value> {
        self.values.pop().ok_or(RuntimeError::StackUnderflow { needed: 1,
                                                               found: 0,
                                                               line })
    }
    /// Removes the top two values and returns them in push order, so the
    /// former top is the second element.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` if fewer than two values are
    /// present.
    ///
    /// # Example
    /// ```
    /// use stackma::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::stack::Stack, value::core::Value},
    /// };
    ///
    /// let mut stack = Stack::default();
    /// stack.push(Value::Integer(10), 1).unwrap();
    /// stack.push(Value::Integer(3), 1).unwrap();
    ///
    /// let (left, right) = stack.pop_pair(1).unwrap();
    /// assert_eq!((left, right), (Value::Integer(10), Value::Integer(3)));
    /// assert!(stack.is_empty());
    ///
    /// stack.push(Value::Integer(1), 2).unwrap();
    /// let err = stack.pop_pair(2).unwrap_err();
    /// assert!(matches!(err, RuntimeError::StackUnderflow { needed: 2, found: 1, line: 2 }));
    /// assert_eq!(stack.len(), 1);
    /// ```
    pub fn pop_pair(&mut self, line: usize) -> EvalResult<(Value, Value)> {
        let [right, left]: [Value; 2] =
            self.pop_n(2, line)?
                .try_into()
                .map_err(|popped: Vec<Value>| RuntimeError::StackUnderflow { needed: 2,
                                                                             found: popped.len(),
                                                                             line })?;
        Ok((left, right))
    }
    /// Removes the top `n` values and returns them in pop order: the former
    /// top first.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` if fewer than `n` values are
    /// present.
    pub fn pop_n(&mut self, n: usize, line: usize) -> EvalResult<Vec<Value>> {
        self.require(n, line)?;
        let mut popped = self.values.split_off(self.values.len() - n);
        popped.reverse();
        Ok(popped)
    }
    /// Returns the top value without removing it.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` if the stack is empty.
    pub fn peek(&self, line: usize) -> EvalResult<&Value> {
        self.values.last().ok_or(RuntimeError::StackUnderflow { needed: 1,
                                                                found: 0,
                                                                line })
    }
    /// Moves the `n`-th value from the top to the top, shifting the values
    /// above it down by one. `n` of 0 or 1 changes nothing.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` if fewer than `n` values are
    /// present.
    ///
    /// # Example
    /// ```
    /// use stackma::interpreter::{evaluator::stack::Stack, value::core::Value};
    ///
    /// let mut stack = Stack::default();
    /// for n in 1..=4 {
    ///     stack.push(Value::Integer(n), 1).unwrap();
    /// }
    ///
    /// stack.rotate_up(3, 1).unwrap();
    /// assert_eq!(stack.as_slice(),
    ///            [1, 3, 4, 2].map(Value::Integer).as_slice());
    ///
    /// stack.rotate_down(3, 1).unwrap();
    /// assert_eq!(stack.as_slice(),
    ///            [1, 2, 3, 4].map(Value::Integer).as_slice());
    /// ```
    pub fn rotate_up(&mut self, n: usize, line: usize) -> EvalResult<()> {
        self.require(n, line)?;
        let start = self.values.len() - n;
        if n > 1 {
            self.values[start..].rotate_left(1);
        }
        Ok(())
    }
    /// Moves the top value down to the `n`-th position from the top; the
    /// inverse of [`Stack::rotate_up`].
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` if fewer than `n` values are
    /// present.
    pub fn rotate_down(&mut self, n: usize, line: usize) -> EvalResult<()> {
        self.require(n, line)?;
        let start = self.values.len() - n;
        if n > 1 {
            self.values[start..].rotate_right(1);
        }
        Ok(())
    }
    /// Checks that at least `n` values are present.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` otherwise.
    pub fn require(&self, n: usize, line: usize) -> EvalResult<()> {
        if self.values.len() < n {
            return Err(RuntimeError::StackUnderflow { needed: n,
                                                      found: self.values.len(),
                                                      line });
        }
        Ok(())
    }
    /// Returns the number of values on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
    /// Returns `true` if the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Returns the values from bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }
    /// Consumes the stack, returning its values from bottom to top.
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}
