use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        tokenizer::tokenize_line,
        value::core::Value,
    },
};

/// The word a lambda body uses to push its own literal.
pub const SELF_WORD: &str = "SELF";

/// The parts of a lambda literal `{ n | body }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lambda<'a> {
    /// How many values the lambda pops and binds.
    pub arity: usize,
    /// The body text, trimmed.
    pub body:  &'a str,
}

/// Splits a lambda literal into its parameter count and body.
///
/// The literal is `{`, an unsigned integer, `|`, the body and `}`, with
/// optional whitespace between the parts.
///
/// # Errors
/// - `RuntimeError::MalformedLiteral` if the text does not follow this
///   grammar.
/// - `RuntimeError::LiteralTooLarge` if the parameter count does not fit a
///   `usize`.
///
/// # Example
/// ```
/// use stackma::interpreter::evaluator::lambda::{Lambda, parse_lambda};
///
/// assert_eq!(parse_lambda("{ 2 | x0 x1 + }", 1).unwrap(),
///            Lambda { arity: 2,
///                     body:  "x0 x1 +", });
/// assert_eq!(parse_lambda("{0|}", 1).unwrap().body, "");
///
/// assert!(parse_lambda("{ x | x0 }", 1).is_err());
/// assert!(parse_lambda("{ 2 x0 x1 + }", 1).is_err());
/// ```
pub fn parse_lambda(text: &str, line: usize) -> EvalResult<Lambda<'_>> {
    let malformed = |details: &str| RuntimeError::MalformedLiteral { literal: text.to_string(),
                                                                     details: details.to_string(),
                                                                     line };

    let inner = text.trim()
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                    .ok_or_else(|| malformed("expected surrounding braces"))?;
    let (arity, body) = inner.split_once('|')
                             .ok_or_else(|| malformed("expected '|' after the parameter count"))?;

    let arity = arity.trim();
    if arity.is_empty() || !arity.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("the parameter count must be an unsigned integer"));
    }

    Ok(Lambda { arity: arity.parse()
                            .map_err(|_| RuntimeError::LiteralTooLarge { line })?,
                body:  body.trim(), })
}

/// Returns `k` if the word is a parameter reference `x<k>`.
///
/// # Example
/// ```
/// use stackma::interpreter::evaluator::lambda::parameter_index;
///
/// assert_eq!(parameter_index("x0"), Some(0));
/// assert_eq!(parameter_index("x12"), Some(12));
/// assert_eq!(parameter_index("x"), None);
/// assert_eq!(parameter_index("xy"), None);
/// ```
#[must_use]
pub fn parameter_index(word: &str) -> Option<usize> {
    let digits = word.strip_prefix('x')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl Context {
    /// Invokes a lambda literal against the stack.
    ///
    /// Pops `n` values; the first popped (the former top) is bound to `x0`,
    /// the next to `x1`, and so on. The body is then tokenized and each word
    /// evaluated in order against the same stack:
    /// - `x<k>` evaluates bound argument `k` again: a symbol or lambda is
    ///   forced as if its text appeared here, any other value is pushed as a
    ///   copy;
    /// - `SELF` pushes the lambda's own literal, ready for a later `EVAL`;
    /// - anything else goes through [`Context::eval_token`].
    ///
    /// Bindings are visible only to the body's own words, not to tokens that
    /// a nested `EVAL` or lambda evaluates.
    ///
    /// # Errors
    /// - `RuntimeError::MalformedLiteral` for a malformed literal or body.
    /// - `RuntimeError::StackUnderflow` if fewer than `n` values are present.
    /// - `RuntimeError::UnboundParameter` for `x<k>` with `k >= n`.
    /// - `RuntimeError::RecursionLimit` when nested too deeply.
    ///
    /// # Example
    /// ```
    /// use stackma::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.eval_token("10", 1).unwrap();
    /// context.eval_token("3", 1).unwrap();
    /// context.eval_lambda("{2 | x1 x0 -}", 1).unwrap();
    /// assert_eq!(context.stack.as_slice(), [Value::Integer(7)]);
    ///
    /// context.eval_token("'DUP", 1).unwrap();
    /// context.eval_lambda("{1 | x0}", 1).unwrap();
    /// assert_eq!(context.into_values(), vec![Value::Integer(7), Value::Integer(7)]);
    /// ```
    pub fn eval_lambda(&mut self, text: &str, line: usize) -> EvalResult<()> {
        let lambda = parse_lambda(text, line)?;
        let body =
            tokenize_line(lambda.body, line).map_err(|e| {
                                                RuntimeError::MalformedLiteral { literal:
                                                                                     text.to_string(),
                                                                                 details:
                                                                                     format!("unreadable body: {e}"),
                                                                                 line }
                                            })?;

        self.nested(line, |context| {
                let arguments = context.stack.pop_n(lambda.arity, line)?;
                debug!(arity = lambda.arity, body = lambda.body, line, "invoking lambda");

                for word in &body {
                    context.eval_lambda_word(&word.text, text, &arguments, line)?;
                }
                Ok(())
            })
    }

    fn eval_lambda_word(&mut self,
                        word: &str,
                        literal: &str,
                        arguments: &[Value],
                        line: usize)
                        -> EvalResult<()> {
        if word == SELF_WORD {
            return self.push(Value::Lambda(literal.to_string()), line);
        }

        if let Some(index) = parameter_index(word) {
            let value =
                arguments.get(index)
                         .ok_or(RuntimeError::UnboundParameter { index,
                                                                 arity: arguments.len(),
                                                                 line })?;

            return match value {
                Value::Symbol(text) | Value::Lambda(text) => {
                    self.nested(line, |context| context.eval_token(text, line))
                },
                other => self.push(other.clone(), line),
            };
        }

        self.eval_token(word, line)
    }
}
