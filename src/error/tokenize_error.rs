#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum TokenizeError {
    /// A `"` opened a string that is not closed on the same line.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `[` opened a vector or matrix literal that is not balanced on the
    /// same line.
    UnterminatedBracket {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `{` opened a lambda literal with no closing `}` on the same line.
    UnterminatedLambda {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl TokenizeError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line }
            | Self::UnterminatedBracket { line }
            | Self::UnterminatedLambda { line } => *line,
        }
    }
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line } => write!(f,
                                                        "Error on line {line}: Unterminated string literal, expected a closing '\"'."),
            Self::UnterminatedBracket { line } => write!(f,
                                                         "Error on line {line}: Unterminated vector literal, expected a closing ']'."),
            Self::UnterminatedLambda { line } => write!(f,
                                                        "Error on line {line}: Unterminated lambda literal, expected a closing '}}'."),
        }
    }
}

impl std::error::Error for TokenizeError {}
