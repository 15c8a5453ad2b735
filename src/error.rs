/// Tokenizer errors.
///
/// Defines the errors raised while splitting source text into tokens. These
/// are all unterminated literals: a quoted string, bracket literal or lambda
/// block that opens on a line but never closes on it.
pub mod tokenize_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating tokens
/// against the stack: underflow, type mismatches, malformed literals,
/// arithmetic faults and exceeded limits.
pub mod runtime_error;
/// Runner errors.
///
/// Errors from the file-driven runner that wraps the interpreter: input
/// names that do not follow the `input-NNN.txt` convention and I/O failures.
pub mod run_error;

pub use run_error::RunError;
pub use runtime_error::RuntimeError;
pub use tokenize_error::TokenizeError;
