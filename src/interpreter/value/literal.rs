use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::is_integer_literal, value::core::Value},
};

/// Parses a vector or matrix literal.
///
/// A vector literal is `[` followed by at least two comma-separated signed
/// integers and `]`. A matrix literal wraps comma-separated vector literals
/// (its rows) in one more pair of brackets; all rows must have the same
/// length. A matrix literal with a single row yields a vector. Whitespace
/// between the parts is ignored.
///
/// # Errors
/// - `RuntimeError::MalformedLiteral` if the text does not follow this
///   grammar or the rows are ragged.
/// - `RuntimeError::LiteralTooLarge` if an entry does not fit an `i64`.
///
/// # Example
/// ```
/// use stackma::interpreter::value::{core::Value, literal::parse_array_literal};
///
/// assert_eq!(parse_array_literal("[1, -2, 3]", 1).unwrap(),
///            Value::Vector(vec![1, -2, 3]));
/// assert_eq!(parse_array_literal("[[1, 2], [3, 4]]", 1).unwrap(),
///            Value::Matrix(vec![vec![1, 2], vec![3, 4]]));
/// assert_eq!(parse_array_literal("[[5, 6]]", 1).unwrap(), Value::Vector(vec![5, 6]));
///
/// assert!(parse_array_literal("[[1, 2], [3]]", 1).is_err());
/// assert!(parse_array_literal("[1]", 1).is_err());
/// ```
pub fn parse_array_literal(text: &str, line: usize) -> EvalResult<Value> {
    let malformed = |details: &str| RuntimeError::MalformedLiteral { literal: text.to_string(),
                                                                     details: details.to_string(),
                                                                     line };

    let inner = text.trim()
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .ok_or_else(|| malformed("expected surrounding brackets"))?
                    .trim();

    if !inner.starts_with('[') {
        return parse_row(inner, text, line).map(Value::Vector);
    }

    let mut rows: Vec<Vec<i64>> = Vec::new();
    let mut rest = inner;

    loop {
        let body = rest.strip_prefix('[')
                       .ok_or_else(|| malformed("expected '[' to open a row"))?;
        let close = body.find(']')
                        .ok_or_else(|| malformed("expected ']' to close a row"))?;

        let row = parse_row(&body[..close], text, line)?;
        if let Some(first) = rows.first()
           && first.len() != row.len()
        {
            return Err(malformed("matrix rows must all have the same length"));
        }
        rows.push(row);

        rest = body[close + 1..].trim_start();
        if rest.is_empty() {
            break;
        }
        rest = rest.strip_prefix(',')
                   .ok_or_else(|| malformed("expected ',' between rows"))?
                   .trim_start();
    }

    if rows.len() == 1 {
        Ok(Value::Vector(rows.remove(0)))
    } else {
        Ok(Value::Matrix(rows))
    }
}

fn parse_row(row: &str, literal: &str, line: usize) -> EvalResult<Vec<i64>> {
    let entries = row.split(',')
                     .map(|entry| parse_entry(entry.trim(), literal, line))
                     .collect::<EvalResult<Vec<i64>>>()?;

    if entries.len() < 2 {
        return Err(RuntimeError::MalformedLiteral { literal: literal.to_string(),
                                                    details: "a vector needs at least two \
                                                              integers"
                                                                       .to_string(),
                                                    line });
    }

    Ok(entries)
}

fn parse_entry(entry: &str, literal: &str, line: usize) -> EvalResult<i64> {
    if !is_integer_literal(entry) {
        return Err(RuntimeError::MalformedLiteral { literal: literal.to_string(),
                                                    details: format!("'{entry}' is not an \
                                                                      integer"),
                                                    line });
    }

    entry.parse().map_err(|_| RuntimeError::LiteralTooLarge { line })
}
