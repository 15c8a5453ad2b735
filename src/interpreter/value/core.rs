use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value on the stack.
///
/// This enum models every kind of value a program can push: numbers,
/// booleans, strings, integer vectors and matrices, and the two deferred
/// kinds, symbols and lambdas, which keep their source text until `EVAL`
/// forces them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and consumed by `IFELSE` and `!`.
    Bool(bool),
    /// A string, stored without its surrounding quotes. Unknown bare tokens
    /// are pushed as strings too.
    Str(String),
    /// An ordered sequence of integers.
    Vector(Vec<i64>),
    /// Rows of integers, all of the same length.
    Matrix(Vec<Vec<i64>>),
    /// A quoted token, stored without its `'` marker and evaluated only by
    /// `EVAL`.
    Symbol(String),
    /// The raw text of a lambda literal, `{ n | body }`.
    Lambda(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Self::Vector(v)
    }
}

impl From<Vec<Vec<i64>>> for Value {
    fn from(rows: Vec<Vec<i64>>) -> Self {
        Self::Matrix(rows)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Float` and `Value::Integer`. Integers beyond `2^53`
    /// round to the nearest float, as any integer to float promotion does.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use stackma::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real(42).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_real(42).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a number, found {}",
                                                                   self.kind()),
                                                  line }),
        }
    }
    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub const fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedInteger { line }),
        }
    }
    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Conditions of `IFELSE` and the operand of `!` must be booleans.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }
    /// Returns `true` for integers and floats.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }
    /// Returns the name of the value's kind, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use stackma::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Vector(vec![1, 2]).kind(), "vector of length 2");
    /// assert_eq!(Value::Matrix(vec![vec![1, 2], vec![3, 4]]).kind(), "2x2 matrix");
    /// ```
    #[must_use]
    pub fn kind(&self) -> String {
        match self {
            Self::Integer(_) => "integer".to_string(),
            Self::Float(_) => "float".to_string(),
            Self::Bool(_) => "boolean".to_string(),
            Self::Str(_) => "string".to_string(),
            Self::Vector(v) => format!("vector of length {}", v.len()),
            Self::Matrix(rows) => {
                format!("{}x{} matrix", rows.len(), rows.first().map_or(0, Vec::len))
            },
            Self::Symbol(_) => "symbol".to_string(),
            Self::Lambda(_) => "lambda".to_string(),
        }
    }
}

fn write_row(f: &mut std::fmt::Formatter<'_>, row: &[i64]) -> std::fmt::Result {
    write!(f, "[")?;

    for (index, value) in row.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }

        write!(f, "{value}")?;
    }

    write!(f, "]")
}

fn write_float(f: &mut std::fmt::Formatter<'_>, r: f64) -> std::fmt::Result {
    if r.is_nan() {
        return write!(f, "NaN");
    }
    if r.is_infinite() {
        return write!(f, "{}Infinity", if r.is_sign_negative() { "-" } else { "" });
    }

    let magnitude = r.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{r:e}");
        let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        let point = if mantissa.contains('.') { "" } else { ".0" };
        let (sign, digits) = exponent.strip_prefix('-').map_or(("+", exponent), |d| ("-", d));

        return write!(f, "{mantissa}{point}e{sign}{digits:0>2}");
    }

    if r.fract() == 0.0 { write!(f, "{r:.1}") } else { write!(f, "{r}") }
}

/// Formats a value the way it appears in the program output.
///
/// Floats always show a decimal point and switch to exponent form below
/// `1e-4` and from `1e16` on, with a signed exponent of at least two
/// digits. Strings are re-quoted, symbols lose
/// their quote marker, vectors and matrices use bracketed list syntax.
///
/// # Example
/// ```
/// use stackma::interpreter::value::core::Value;
///
/// assert_eq!(Value::Float(2.0).to_string(), "2.0");
/// assert_eq!(Value::Float(1e20).to_string(), "1.0e+20");
/// assert_eq!(Value::Float(-1.5e-7).to_string(), "-1.5e-07");
/// assert_eq!(Value::Float(0.0001).to_string(), "0.0001");
/// assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
/// assert_eq!(Value::Str("hi".into()).to_string(), "\"hi\"");
/// assert_eq!(Value::Symbol("foo".into()).to_string(), "foo");
/// assert_eq!(Value::Matrix(vec![vec![1, 2], vec![3, 4]]).to_string(), "[[1, 2], [3, 4]]");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write_float(f, *r),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Vector(v) => write_row(f, v),
            Self::Matrix(rows) => {
                write!(f, "[")?;

                for (index, row) in rows.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write_row(f, row)?;
                }

                write!(f, "]")
            },
            Self::Symbol(s) | Self::Lambda(s) => write!(f, "{s}"),
        }
    }
}
