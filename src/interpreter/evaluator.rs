/// Binary operator evaluation logic.
///
/// Handles arithmetic on scalars, vectors and matrices, comparisons, powers,
/// the cross product and bitwise operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and bitwise complement.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the token dispatcher, the runtime context with its limits, and
/// the nesting guard shared by lambdas and `EVAL`.
pub mod core;

/// The value stack.
pub mod stack;

/// Lambda literals: parsing, argument binding and body evaluation.
pub mod lambda;

/// Stack shuffle words such as `SWAP`, `ROT` and `ROLL`.
pub mod shuffle;

/// Control words: `IFELSE`, `TRANSP` and `EVAL`.
pub mod builtin;
