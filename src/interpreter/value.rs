/// Core value types.
///
/// Defines the `Value` enum stored on the stack, its conversions and its
/// output formatting.
pub mod core;
/// Vector and matrix literals.
///
/// Parses the text of a bracket literal such as `[1, 2]` or
/// `[[1, 2], [3, 4]]` into a vector or matrix value, reporting malformed
/// literals.
pub mod literal;
