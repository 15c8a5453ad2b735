/// The evaluator module runs tokens against the value stack.
///
/// Each token is classified and then either pushed as a value or applied as
/// an operation to the values on top of the stack. Lambdas and `EVAL` feed
/// further tokens back through the same dispatcher.
///
/// # Responsibilities
/// - Holds the stack and the configured limits for one run.
/// - Implements every operator, stack word and control word.
/// - Reports runtime errors such as stack underflow or type mismatches.
pub mod evaluator;
/// The lexer module classifies single words.
///
/// Given the text of one bare token, the lexer decides whether it is a
/// numeric or boolean literal, an operator, a stack word or a control word.
pub mod lexer;
/// The tokenizer module splits source text into tokens.
///
/// Tokens are separated by whitespace, except that string literals, bracket
/// literals and lambda literals are kept whole. Every token remembers the
/// line it started on.
pub mod tokenizer;
/// The value module defines the runtime data types.
///
/// # Responsibilities
/// - Defines the `Value` enum and its output format.
/// - Parses vector and matrix literals.
/// - Provides checked accessors used by the operators.
pub mod value;
