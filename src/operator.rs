/// Represents a binary operator.
///
/// Every binary operator pops two values, the right operand first, and pushes
/// one result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication, dot product or matrix product (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
    /// Floor modulo (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Three-way comparison (`<=>`)
    Compare,
    /// Bitwise or logical and (`&`)
    BitAnd,
    /// Bitwise or logical or (`|`)
    BitOr,
    /// Bitwise or logical exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// Cross product of two 3-vectors (`x`)
    Cross,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!`).
    Not,
    /// Bitwise complement (`~`).
    Complement,
}

/// Words that only rearrange the stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StackWord {
    /// `SWAP`
    Swap,
    /// `DROP`
    Drop,
    /// `DUP`
    Dup,
    /// `ROT`
    Rot,
    /// `ROLL`
    Roll,
    /// `ROLLD`
    RollDown,
}

/// Words with control or structural effects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// `IFELSE`: picks one of two values by a boolean.
    IfElse,
    /// `TRANSP`: matrix transpose.
    Transpose,
    /// `EVAL`: forces a quoted symbol or lambda.
    Eval,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, BitAnd, BitOr, BitXor, Compare, Cross, Div, Equal, Greater, GreaterEqual, Less,
            LessEqual, Mod, Mul, NotEqual, Pow, ShiftLeft, ShiftRight, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "**",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            Less => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
            Compare => "<=>",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Cross => "x",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Complement => write!(f, "~"),
        }
    }
}

impl std::fmt::Display for StackWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Self::Swap => "SWAP",
            Self::Drop => "DROP",
            Self::Dup => "DUP",
            Self::Rot => "ROT",
            Self::Roll => "ROLL",
            Self::RollDown => "ROLLD",
        };
        write!(f, "{word}")
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Self::IfElse => "IFELSE",
            Self::Transpose => "TRANSP",
            Self::Eval => "EVAL",
        };
        write!(f, "{word}")
    }
}
