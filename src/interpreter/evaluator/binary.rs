/// Binary operator dispatch.
///
/// Pops the operands and routes each operator to the handler for its
/// operand kinds.
pub mod core;
/// Scalar arithmetic.
///
/// Integer and float `+ - * / %`, with checked integer arithmetic and floor
/// division.
pub mod scalar;
/// Vector and matrix arithmetic.
///
/// Elementwise sums, scaling, dot and cross products, matrix products and
/// transposition.
pub mod linalg;
/// Exponentiation.
///
/// Integer, float and square-matrix powers.
pub mod power;
/// Comparisons.
///
/// Structural equality, ordering and three-way comparison.
pub mod comparison;
/// Bitwise operators.
///
/// `& | ^` on integers and booleans, and integer shifts.
pub mod bitwise;
