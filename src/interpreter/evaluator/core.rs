use tracing::trace;

use crate::{
    config::Config,
    error::RuntimeError,
    interpreter::{
        evaluator::stack::Stack,
        lexer::{Word, classify, is_integer_literal},
        tokenizer::Token,
        value::{core::Value, literal::parse_array_literal},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state of one run: the value stack, the
/// configured limits, and the current nesting depth of lambda invocations
/// and `EVAL`s.
///
/// ## Usage
///
/// A `Context` is created for each program. Tokens are fed to it through
/// [`Context::eval_program`] or [`Context::eval_token`], and the final stack
/// is taken out with [`Context::into_values`].
///
/// ```
/// use stackma::interpreter::{
///     evaluator::core::Context, tokenizer::tokenize, value::core::Value,
/// };
///
/// let tokens = tokenize("3 4 + 2 **").unwrap();
/// let mut context = Context::new();
/// context.eval_program(&tokens).unwrap();
///
/// assert_eq!(context.into_values(), vec![Value::Integer(49)]);
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    /// The value stack the program runs against.
    pub stack: Stack,
    config:    Config,
    depth:     usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context with an empty stack and the default
    /// limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }
    /// Creates a new evaluation context with the given limits.
    #[must_use]
    pub const fn with_config(config: Config) -> Self {
        Self { stack: Stack::new(config.max_stack_size),
               config,
               depth: 0 }
    }
    /// Returns the limits this context enforces.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
    /// Evaluates every token in order.
    ///
    /// # Errors
    /// Stops at the first failing token and returns its error.
    pub fn eval_program(&mut self, tokens: &[Token]) -> EvalResult<()> {
        for token in tokens {
            self.eval_token(&token.text, token.line)?;
        }
        Ok(())
    }
    /// Evaluates a single token against the stack.
    ///
    /// This is the one entry point for classifying token text. It serves the
    /// top-level loop, lambda bodies and `EVAL`. The first matching rule wins:
    /// - `[...]`: vector or matrix literal, pushed.
    /// - `{...}`: lambda literal, invoked immediately.
    /// - `'...`: quoted token; an integer remainder is pushed as an integer,
    ///   anything else as a symbol.
    /// - integer, float and boolean literals, pushed.
    /// - binary and unary operators, stack words and control words, applied.
    /// - `"..."`: string literal, pushed without its quotes.
    /// - anything else is pushed verbatim as a string.
    ///
    /// # Errors
    /// Returns the `RuntimeError` raised by the literal or operation.
    ///
    /// # Example
    /// ```
    /// use stackma::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.eval_token("'DUP", 1).unwrap();
    /// context.eval_token("\"hi\"", 1).unwrap();
    /// context.eval_token("hello", 1).unwrap();
    ///
    /// assert_eq!(context.stack.as_slice(),
    ///            [Value::Symbol("DUP".into()),
    ///             Value::Str("hi".into()),
    ///             Value::Str("hello".into())]);
    /// ```
    pub fn eval_token(&mut self, text: &str, line: usize) -> EvalResult<()> {
        trace!(token = text, line, depth = self.depth, "evaluating token");

        if text.starts_with('[') {
            let value = parse_array_literal(text, line)?;
            return self.push(value, line);
        }
        if text.starts_with('{') {
            return self.eval_lambda(text, line);
        }
        if let Some(quoted) = text.strip_prefix('\'') {
            let value = if is_integer_literal(quoted) {
                Value::Integer(parse_integer(quoted, line)?)
            } else {
                Value::Symbol(quoted.to_string())
            };
            return self.push(value, line);
        }

        match classify(text) {
            Some(Word::Integer) => {
                let value = parse_integer(text, line)?;
                self.push(Value::Integer(value), line)
            },
            Some(Word::Float) => {
                let value = text.parse().map_err(|_| RuntimeError::LiteralTooLarge { line })?;
                self.push(Value::Float(value), line)
            },
            Some(Word::Bool(b)) => self.push(Value::Bool(b), line),
            Some(Word::Binary(op)) => self.apply_binary(op, line),
            Some(Word::Unary(op)) => self.apply_unary(op, line),
            Some(Word::Stack(word)) => self.eval_stack_word(word, line),
            Some(Word::Command(command)) => self.eval_command(command, line),
            None => {
                let value = text.strip_prefix('"')
                                .and_then(|rest| rest.strip_suffix('"'))
                                .unwrap_or(text);
                self.push(Value::Str(value.to_string()), line)
            },
        }
    }
    /// Pushes a value, enforcing the stack size limit.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackOverflow` if the stack is full.
    pub fn push(&mut self, value: Value, line: usize) -> EvalResult<()> {
        self.stack.push(value, line)
    }
    /// Runs `f` one nesting level deeper, failing once the configured depth
    /// is exceeded.
    ///
    /// # Errors
    /// Returns `RuntimeError::RecursionLimit`, or whatever `f` returns.
    pub fn nested<T, F>(&mut self, line: usize, f: F) -> EvalResult<T>
        where F: FnOnce(&mut Self) -> EvalResult<T>
    {
        if self.depth >= self.config.max_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.config.max_depth,
                                                      line });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        result
    }
    /// Consumes the context, returning the final stack from bottom to top.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.stack.into_vec()
    }
}

/// Parses an integer literal, reporting values outside the `i64` range.
///
/// # Errors
/// Returns `RuntimeError::LiteralTooLarge` if the text does not fit an
/// `i64`.
pub fn parse_integer(text: &str, line: usize) -> EvalResult<i64> {
    text.parse().map_err(|_| RuntimeError::LiteralTooLarge { line })
}
