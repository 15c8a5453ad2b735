use crate::error::TokenizeError;

/// A token produced by the tokenizer.
///
/// Tokens are plain text; what a token means is decided when it is evaluated.
/// The line is kept for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, never empty and never padded with whitespace.
    pub text: String,
    /// The 1-based source line the token was read from.
    pub line: usize,
}

impl Token {
    /// Creates a token from its text and line.
    #[must_use]
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self { text: text.into(),
               line }
    }
}

/// Outcome of one scanning rule at the current position.
///
/// `None` means the rule does not apply here. `Some(Ok(len))` means it
/// matched the first `len` bytes. `Some(Err(_))` means the rule applies but
/// its literal never closes.
type RuleResult = Option<Result<usize, TokenizeError>>;

/// The literal rules, in priority order. A position no rule claims starts a
/// bare token.
const RULES: [fn(&str, usize) -> RuleResult; 3] = [scan_string, scan_bracket, scan_lambda];

/// Splits source text into tokens.
///
/// Each line is scanned on its own and the tokens of all lines are
/// concatenated in order. At every position, after skipping whitespace, the
/// rules are tried in this order:
/// 1. a quoted string `"..."`, kept with its quotes;
/// 2. a vector or matrix literal from `[` to its balancing `]`, kept with any
///    whitespace inside it;
/// 3. a lambda literal from `{` to the next `}`;
/// 4. any run of non-whitespace characters.
///
/// # Errors
/// Returns a [`TokenizeError`] if a string, bracket or lambda literal opens
/// but does not close on the same line.
///
/// # Example
/// ```
/// use stackma::interpreter::tokenizer::tokenize;
///
/// let tokens = tokenize("\"hello world\" [1, 2] {1 | x0 DUP *}\n3 +").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
///
/// assert_eq!(texts,
///            ["\"hello world\"", "[1, 2]", "{1 | x0 DUP *}", "3", "+"]);
/// assert_eq!(tokens[3].line, 2);
///
/// assert!(tokenize("[1, 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();

    for (index, text) in source.lines().enumerate() {
        tokens.extend(tokenize_line(text, index + 1)?);
    }

    Ok(tokens)
}
/// Splits a single line into tokens, tagging each with `line`.
///
/// Used for whole source lines and for lambda bodies, which are re-scanned
/// every time the lambda runs.
///
/// # Errors
/// Returns a [`TokenizeError`] for an unterminated literal.
pub fn tokenize_line(text: &str, line: usize) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        let length = RULES.iter()
                          .find_map(|rule| rule(rest, line))
                          .unwrap_or_else(|| Ok(bare_length(rest)))?;

        let (token, tail) = rest.split_at(length);
        tokens.push(Token::new(token, line));
        rest = tail.trim_start();
    }

    Ok(tokens)
}

fn scan_string(rest: &str, line: usize) -> RuleResult {
    let body = rest.strip_prefix('"')?;

    Some(body.find('"')
             .map(|close| close + 2)
             .ok_or(TokenizeError::UnterminatedString { line }))
}

fn scan_bracket(rest: &str, line: usize) -> RuleResult {
    if !rest.starts_with('[') {
        return None;
    }

    let mut depth = 0usize;
    for (index, c) in rest.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(Ok(index + 1));
                }
            },
            _ => {},
        }
    }

    Some(Err(TokenizeError::UnterminatedBracket { line }))
}

fn scan_lambda(rest: &str, line: usize) -> RuleResult {
    if !rest.starts_with('{') {
        return None;
    }

    Some(rest.find('}')
             .map(|close| close + 1)
             .ok_or(TokenizeError::UnterminatedLambda { line }))
}

fn bare_length(rest: &str) -> usize {
    rest.find(char::is_whitespace).unwrap_or(rest.len())
}
