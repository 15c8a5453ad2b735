use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    operator::BinaryOperator,
    util::num::floor_div,
};

type Rows = Vec<Vec<i64>>;

fn mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply {op} to {} and {}",
                                                  left.kind(),
                                                  right.kind()),
                                 line }
}

impl Context {
    /// Evaluates arithmetic where at least one operand is a vector or matrix.
    ///
    /// # Supported combinations
    /// - vector `+`/`-` vector of the same length: elementwise.
    /// - vector `*` vector of the same length: dot product (an integer).
    /// - vector `*` integer, integer `*` vector, vector `/` integer: scaling,
    ///   with floor division.
    /// - matrix `+`/`-` matrix of the same shape: elementwise.
    /// - matrix `*` matrix: matrix product, inner dimensions must agree.
    /// - matrix `*` vector: matrix-vector product (a vector).
    /// - matrix `*` integer, integer `*` matrix, matrix `/` integer: scaling.
    ///
    /// Everything else, including `%` and float scalars, is a type mismatch.
    ///
    /// # Example
    /// ```
    /// use stackma::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let a = Value::Matrix(vec![vec![1, 2], vec![3, 4]]);
    /// let v = Value::Vector(vec![1, 1]);
    ///
    /// let r = Context::eval_linalg(BinaryOperator::Mul, &a, &v, 1).unwrap();
    /// assert_eq!(r, Value::Vector(vec![3, 7]));
    ///
    /// let bad = Context::eval_linalg(BinaryOperator::Add,
    ///                                &Value::Vector(vec![1, 2]),
    ///                                &Value::Vector(vec![1, 2, 3]),
    ///                                1);
    /// assert!(bad.is_err());
    /// ```
    pub fn eval_linalg(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Matrix, Vector};

        match (op, left, right) {
            (Add | Sub, Vector(a), Vector(b)) => {
                if a.len() != b.len() {
                    return Err(mismatch(op, left, right, line));
                }
                Ok(Vector(zip_with(op, a, b, line)?))
            },
            (Mul, Vector(a), Vector(b)) => {
                if a.len() != b.len() {
                    return Err(mismatch(op, left, right, line));
                }
                Ok(Integer(dot(a, b, line)?))
            },
            (Mul, Vector(a), Integer(k)) | (Mul, Integer(k), Vector(a)) => {
                Ok(Vector(scale(a, *k, line)?))
            },
            (Div, Vector(a), Integer(k)) => Ok(Vector(divide(a, *k, line)?)),

            (Add | Sub, Matrix(a), Matrix(b)) => {
                if shape(a) != shape(b) {
                    return Err(mismatch(op, left, right, line));
                }
                let rows = a.iter()
                            .zip(b)
                            .map(|(x, y)| zip_with(op, x, y, line))
                            .collect::<EvalResult<Vec<_>>>()?;
                Ok(Matrix(rows))
            },
            (Mul, Matrix(a), Matrix(b)) => {
                if shape(a).1 != shape(b).0 {
                    return Err(mismatch(op, left, right, line));
                }
                Ok(Matrix(matmul(a, b, line)?))
            },
            (Mul, Matrix(a), Vector(v)) => {
                if shape(a).1 != v.len() {
                    return Err(mismatch(op, left, right, line));
                }
                let product = a.iter()
                               .map(|row| dot(row, v, line))
                               .collect::<EvalResult<Vec<_>>>()?;
                Ok(Vector(product))
            },
            (Mul, Matrix(a), Integer(k)) | (Mul, Integer(k), Matrix(a)) => {
                let rows = a.iter()
                            .map(|row| scale(row, *k, line))
                            .collect::<EvalResult<Vec<_>>>()?;
                Ok(Matrix(rows))
            },
            (Div, Matrix(a), Integer(k)) => {
                let rows = a.iter()
                            .map(|row| divide(row, *k, line))
                            .collect::<EvalResult<Vec<_>>>()?;
                Ok(Matrix(rows))
            },

            _ => Err(mismatch(op, left, right, line)),
        }
    }
    /// Evaluates the cross product of two 3-element vectors.
    ///
    /// # Example
    /// ```
    /// use stackma::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let x = Value::Vector(vec![1, 0, 0]);
    /// let y = Value::Vector(vec![0, 1, 0]);
    /// assert_eq!(Context::eval_cross(&x, &y, 1).unwrap(), Value::Vector(vec![0, 0, 1]));
    ///
    /// let short = Value::Vector(vec![1, 2]);
    /// assert!(Context::eval_cross(&short, &short, 1).is_err());
    /// ```
    pub fn eval_cross(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Vector(a), Value::Vector(b)) if a.len() == 3 && b.len() == 3 => {
                let term = |i: usize, j: usize| -> EvalResult<i64> {
                    let lhs = a[i].checked_mul(b[j]).ok_or(RuntimeError::Overflow { line })?;
                    let rhs = a[j].checked_mul(b[i]).ok_or(RuntimeError::Overflow { line })?;
                    lhs.checked_sub(rhs).ok_or(RuntimeError::Overflow { line })
                };
                Ok(Value::Vector(vec![term(1, 2)?, term(2, 0)?, term(0, 1)?]))
            },
            _ => Err(RuntimeError::TypeMismatch { details: format!("the cross product needs two vectors of length 3, found {} and {}",
                                                                   left.kind(),
                                                                   right.kind()),
                                                  line }),
        }
    }
}

/// Returns `(rows, columns)` of a matrix.
#[must_use]
pub fn shape(matrix: &[Vec<i64>]) -> (usize, usize) {
    (matrix.len(), matrix.first().map_or(0, Vec::len))
}

/// Computes the dot product of two equally long rows.
///
/// # Errors
/// Returns `RuntimeError::Overflow` if the sum does not fit an `i64`.
pub fn dot(a: &[i64], b: &[i64], line: usize) -> EvalResult<i64> {
    a.iter().zip(b).try_fold(0i64, |sum, (x, y)| {
                       x.checked_mul(*y)
                        .and_then(|product| sum.checked_add(product))
                        .ok_or(RuntimeError::Overflow { line })
                   })
}

/// Multiplies two matrices whose inner dimensions agree.
///
/// # Errors
/// Returns `RuntimeError::Overflow` if an entry does not fit an `i64`.
///
/// # Example
/// ```
/// use stackma::interpreter::evaluator::binary::linalg::matmul;
///
/// let a = vec![vec![1, 2], vec![3, 4]];
/// let b = vec![vec![5, 6], vec![7, 8]];
/// assert_eq!(matmul(&a, &b, 1).unwrap(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn matmul(a: &[Vec<i64>], b: &[Vec<i64>], line: usize) -> EvalResult<Rows> {
    let columns = transpose(b);

    a.iter()
     .map(|row| {
         columns.iter()
                .map(|column| dot(row, column, line))
                .collect::<EvalResult<Vec<_>>>()
     })
     .collect()
}

/// Transposes a matrix, swapping rows and columns.
///
/// # Example
/// ```
/// use stackma::interpreter::evaluator::binary::linalg::transpose;
///
/// let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// assert_eq!(transpose(&m), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
#[must_use]
pub fn transpose(matrix: &[Vec<i64>]) -> Rows {
    let (rows, columns) = shape(matrix);
    let mut column_values: Rows = (0..columns).map(|_| Vec::with_capacity(rows)).collect();

    for row in matrix {
        for (column, element) in column_values.iter_mut().zip(row) {
            column.push(*element);
        }
    }

    column_values
}

fn zip_with(op: BinaryOperator, a: &[i64], b: &[i64], line: usize) -> EvalResult<Vec<i64>> {
    a.iter()
     .zip(b)
     .map(|(x, y)| {
         let result = match op {
             BinaryOperator::Add => x.checked_add(*y),
             BinaryOperator::Sub => x.checked_sub(*y),
             _ => unreachable!("zip_with used with a non additive operator"),
         };
         result.ok_or(RuntimeError::Overflow { line })
     })
     .collect()
}

fn scale(a: &[i64], k: i64, line: usize) -> EvalResult<Vec<i64>> {
    a.iter()
     .map(|x| x.checked_mul(k).ok_or(RuntimeError::Overflow { line }))
     .collect()
}

fn divide(a: &[i64], k: i64, line: usize) -> EvalResult<Vec<i64>> {
    a.iter().map(|x| floor_div(*x, k, line)).collect()
}
