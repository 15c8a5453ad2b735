use logos::Logos;

use crate::operator::{BinaryOperator, Command, StackWord, UnaryOperator};

/// Represents a word of the fixed vocabulary.
///
/// A word is a whole token that the evaluator recognises without further
/// context: a number, a boolean, an operator or one of the upper-case stack
/// and control words. Tokens that are not a single word of this vocabulary
/// (unknown names, `x0` outside a lambda, `SWAPS`) are not words; the
/// evaluator pushes them as plain strings.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    /// Float literal tokens, such as `3.14` or `-0.5`.
    #[regex(r"-?[0-9]+\.[0-9]+")]
    Float,
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+")]
    Integer,
    /// Boolean literal tokens: `true` and `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Operators taking two operands.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("**", |_| BinaryOperator::Pow)]
    #[token("%", |_| BinaryOperator::Mod)]
    #[token("==", |_| BinaryOperator::Equal)]
    #[token("!=", |_| BinaryOperator::NotEqual)]
    #[token(">", |_| BinaryOperator::Greater)]
    #[token("<", |_| BinaryOperator::Less)]
    #[token(">=", |_| BinaryOperator::GreaterEqual)]
    #[token("<=", |_| BinaryOperator::LessEqual)]
    #[token("<=>", |_| BinaryOperator::Compare)]
    #[token("&", |_| BinaryOperator::BitAnd)]
    #[token("|", |_| BinaryOperator::BitOr)]
    #[token("^", |_| BinaryOperator::BitXor)]
    #[token("<<", |_| BinaryOperator::ShiftLeft)]
    #[token(">>", |_| BinaryOperator::ShiftRight)]
    #[token("x", |_| BinaryOperator::Cross)]
    Binary(BinaryOperator),
    /// Operators taking one operand.
    #[token("!", |_| UnaryOperator::Not)]
    #[token("~", |_| UnaryOperator::Complement)]
    Unary(UnaryOperator),
    /// Stack shuffling words.
    #[token("SWAP", |_| StackWord::Swap)]
    #[token("DROP", |_| StackWord::Drop)]
    #[token("DUP", |_| StackWord::Dup)]
    #[token("ROT", |_| StackWord::Rot)]
    #[token("ROLL", |_| StackWord::Roll)]
    #[token("ROLLD", |_| StackWord::RollDown)]
    Stack(StackWord),
    /// Control words.
    #[token("IFELSE", |_| Command::IfElse)]
    #[token("TRANSP", |_| Command::Transpose)]
    #[token("EVAL", |_| Command::Eval)]
    Command(Command),
}

/// Classifies a whole token as a [`Word`].
///
/// Returns `None` unless the token is exactly one word: `"+"` is a word,
/// `"+1"` and `"EVALS"` are not.
///
/// # Example
/// ```
/// use stackma::{
///     interpreter::lexer::{Word, classify},
///     operator::BinaryOperator,
/// };
///
/// assert_eq!(classify("<=>"), Some(Word::Binary(BinaryOperator::Compare)));
/// assert_eq!(classify("-12"), Some(Word::Integer));
/// assert_eq!(classify("x"), Some(Word::Binary(BinaryOperator::Cross)));
/// assert_eq!(classify("x0"), None);
/// assert_eq!(classify("hello"), None);
/// ```
#[must_use]
pub fn classify(text: &str) -> Option<Word> {
    let mut lexer = Word::lexer(text);
    let word = lexer.next()?.ok()?;

    (lexer.span().end == text.len()).then_some(word)
}
/// Returns `true` if the text is a signed integer literal.
///
/// # Example
/// ```
/// use stackma::interpreter::lexer::is_integer_literal;
///
/// assert!(is_integer_literal("-3"));
/// assert!(!is_integer_literal("3.0"));
/// ```
#[must_use]
pub fn is_integer_literal(text: &str) -> bool {
    classify(text) == Some(Word::Integer)
}
