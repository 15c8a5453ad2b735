#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operation needed more values than the stack holds.
    StackUnderflow {
        /// How many values the operation needed.
        needed: usize,
        /// How many values were on the stack.
        found:  usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A push would grow the stack past its configured limit.
    StackOverflow {
        /// The configured maximum stack size.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operator received operands of incompatible kinds.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A vector, matrix or lambda literal does not follow its grammar.
    MalformedLiteral {
        /// The literal text as written.
        literal: String,
        /// What is wrong with it.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer value was expected, but not found.
    ExpectedInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A lambda body referenced `x<k>` with `k` not below the lambda's arity.
    UnboundParameter {
        /// The requested parameter index.
        index: usize,
        /// The number of parameters the lambda binds.
        arity: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Lambda invocation or `EVAL` nested deeper than the configured limit.
    RecursionLimit {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::StackUnderflow { line, .. }
            | Self::StackOverflow { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::MalformedLiteral { line, .. }
            | Self::ExpectedBoolean { line }
            | Self::ExpectedInteger { line }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::LiteralTooLarge { line }
            | Self::InvalidArgument { line, .. }
            | Self::UnboundParameter { line, .. }
            | Self::RecursionLimit { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { needed, found, line } => write!(f,
                                                                   "Error on line {line}: Stack underflow. Needed {needed} values, but found {found}."),
            Self::StackOverflow { limit, line } => write!(f,
                                                          "Error on line {line}: Stack overflow. The stack may hold at most {limit} values."),
            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },
            Self::MalformedLiteral { literal,
                                     details,
                                     line, } => {
                write!(f, "Error on line {line}: Malformed literal '{literal}': {details}.")
            },
            Self::ExpectedBoolean { line } => write!(f, "Error on line {line}: Expected boolean."),
            Self::ExpectedInteger { line } => write!(f, "Error on line {line}: Expected integer."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::UnboundParameter { index, arity, line } => write!(f,
                                                                    "Error on line {line}: Parameter x{index} is not bound by a lambda taking {arity} arguments."),
            Self::RecursionLimit { limit, line } => write!(f,
                                                           "Error on line {line}: Recursion limit of {limit} nested evaluations exceeded."),
        }
    }
}

impl std::error::Error for RuntimeError {}
