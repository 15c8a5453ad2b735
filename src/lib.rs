//! # stackma
//!
//! stackma is an interpreter for a small stack-based language written in
//! Rust. A program is a whitespace separated sequence of tokens evaluated
//! left to right against one value stack. Values include integers, floats,
//! booleans, strings, integer vectors and matrices, quoted symbols and
//! lambdas.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Context, tokenizer::tokenize, value::core::Value};

/// Limits applied while a program runs.
///
/// This module declares the `Config` struct: the maximum nesting depth of
/// lambdas and `EVAL`s and the maximum number of values on the stack.
pub mod config;
/// Provides unified error types for tokenizing, evaluation and file runs.
///
/// This module defines all errors that can be raised while splitting source
/// text into tokens, while evaluating those tokens, or while reading and
/// writing program files. Every language error carries the line number of
/// the token that caused it.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line numbers and detailed messages for context.
/// - Implements `std::error::Error` so errors compose with `?` and `Box`.
pub mod error;
/// Orchestrates the execution of programs.
///
/// This module ties together tokenizing, word classification, evaluation and
/// value representations to provide a complete runtime for source text.
///
/// # Responsibilities
/// - Coordinates all core components: tokenizer, lexer, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The operator vocabulary shared by the lexer and the evaluator.
pub mod operator;
/// Runs program files and writes their output files.
///
/// An input named `input-NNN.txt` produces `output-NNN.txt` in the chosen
/// output directory, one value per line.
pub mod runner;
/// General utilities for safe numeric conversion and integer arithmetic.
///
/// This module provides checked integer conversions and an exact
/// integer-float comparison, together with the floored division, modulo and
/// shift helpers the operators rely on.
///
/// # Responsibilities
/// - Safely convert between numeric types without silent data loss.
/// - Provide integer arithmetic with the language's rounding rules.
pub mod util;

pub use config::Config;

/// Runs a program and returns the final stack, bottom first.
///
/// The source is tokenized as a whole before anything runs, so a tokenizing
/// error means no token is evaluated. Evaluation stops at the first runtime
/// error.
///
/// # Errors
/// Returns a `TokenizeError` or a `RuntimeError`, boxed.
///
/// # Examples
/// ```
/// use stackma::{Config, get_result, interpreter::value::core::Value};
///
/// let stack = get_result("10 3 - 2 *", &Config::default()).unwrap();
/// assert_eq!(stack, vec![Value::Integer(14)]);
///
/// // Only one value for a binary operator.
/// assert!(get_result("1 +", &Config::default()).is_err());
/// ```
pub fn get_result(source: &str, config: &Config) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let mut context = Context::with_config(*config);
    context.eval_program(&tokens)?;

    Ok(context.into_values())
}

/// Runs a program and renders the final stack as output lines, bottom first.
///
/// # Errors
/// Returns any error from [`get_result`].
///
/// # Examples
/// ```
/// use stackma::{Config, get_output};
///
/// let lines = get_output("1.5 2 * [1, 2] \"hi\" 'DUP", &Config::default()).unwrap();
/// assert_eq!(lines, ["3.0", "[1, 2]", "\"hi\"", "DUP"]);
/// ```
pub fn get_output(source: &str, config: &Config) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    Ok(get_result(source, config)?.iter().map(ToString::to_string).collect())
}
