use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::linalg::{matmul, shape},
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation uses checked arithmetic. Negative integer
    /// exponents are computed in floating-point form, as is any power with a
    /// float operand. A square matrix raised to a non-negative integer is the
    /// repeated matrix product, with the identity for exponent zero.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use stackma::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(10), 1).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(-1), 1).unwrap();
    /// assert_eq!(result, Value::Float(0.5));
    ///
    /// let m = Value::Matrix(vec![vec![1, 1], vec![1, 0]]);
    /// let result = Context::eval_pow(&m, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(result, Value::Matrix(vec![vec![8, 5], vec![5, 3]]));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        use Value::{Float, Integer, Matrix};

        match (base, exponent) {
            (Integer(b), Integer(e)) if *e >= 0 => {
                b.checked_pow(i64_to_u32_checked(*e, line)?)
                 .map(Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (Integer(_) | Float(_), Integer(_) | Float(_)) => {
                Ok(Float(base.as_real(line)?.powf(exponent.as_real(line)?)))
            },
            (Matrix(rows), Integer(e)) => {
                let (height, width) = shape(rows);
                if height != width {
                    return Err(RuntimeError::TypeMismatch { details: format!("cannot raise a non-square {} to a power",
                                                                             base.kind()),
                                                            line });
                }
                Ok(Matrix(matrix_power(rows, *e, line)?))
            },
            _ => Err(RuntimeError::TypeMismatch { details: format!("cannot apply ** to {} and {}",
                                                                   base.kind(),
                                                                   exponent.kind()),
                                                  line }),
        }
    }
}

fn matrix_power(rows: &[Vec<i64>], exponent: i64, line: usize) -> EvalResult<Vec<Vec<i64>>> {
    let mut remaining = i64_to_u32_checked(exponent, line)?;
    let size = rows.len();

    let mut result: Vec<Vec<i64>> =
        (0..size).map(|i| (0..size).map(|j| i64::from(i == j)).collect())
                 .collect();
    let mut square = rows.to_vec();

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = matmul(&result, &square, line)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = matmul(&square, &square, line)?;
        }
    }

    Ok(result)
}
