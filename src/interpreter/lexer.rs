use std::fmt;

use logos::Logos;

/// Raw lexical unit recognised by the scanner.
///
/// The scanner only distinguishes runs of letters and digits from single
/// symbols; [`tokenize`] classifies each lexeme into a [`Token`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme<'src> {
    /// A run of ASCII letters and digits, such as `42`, `x` or `rate2`.
    #[regex(r"[A-Za-z0-9]+", |lex| lex.slice())]
    Word(&'src str),
    /// Any other single non-whitespace character.
    #[regex(r"[^\sA-Za-z0-9]", |lex| lex.slice().chars().next())]
    Symbol(char),
    /// Unicode whitespace, including vertical tabs and wide spaces.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Represents a classified token of an infix expression.
///
/// Tokens are produced once by [`tokenize`] and consumed unchanged by both
/// converters and the evaluators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Number(i64),
    /// Variable names, such as `x` or `total2`.
    Ident(String),
    /// Any single symbol other than a parenthesis. Only `+ - * / ^` are
    /// evaluated; the rest are rejected by the evaluator.
    Op(char),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// An alphanumeric run that is neither a literal nor an identifier, such as
    /// `3x`, or digits that overflow an `i64`.
    Invalid(String),
}

impl Token {
    /// Classifies one alphanumeric run.
    fn from_word(word: &str) -> Self {
        if word.bytes().all(|b| b.is_ascii_digit()) {
            return word.parse()
                       .map_or_else(|_| Self::Invalid(word.to_string()), Self::Number);
        }
        if word.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Self::Ident(word.to_string());
        }
        Self::Invalid(word.to_string())
    }

    const fn from_symbol(symbol: char) -> Self {
        match symbol {
            '(' => Self::LParen,
            ')' => Self::RParen,
            c => Self::Op(c),
        }
    }

    /// Returns the binding priority of an operator token.
    ///
    /// `^` binds tightest (3), then `*` and `/` (2), then `+` and `-` (1).
    /// Everything else, including unknown symbols, has priority 0.
    ///
    /// # Example
    /// ```
    /// use notatio::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Op('^').priority(), 3);
    /// assert_eq!(Token::Op('/').priority(), 2);
    /// assert_eq!(Token::Op('-').priority(), 1);
    /// assert_eq!(Token::Op('%').priority(), 0);
    /// ```
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Op('^') => 3,
            Self::Op('*' | '/') => 2,
            Self::Op('+' | '-') => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Ident(name) | Self::Invalid(name) => write!(f, "{name}"),
            Self::Op(c) => write!(f, "{c}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Splits one input line into its assignment target and expression tokens.
///
/// The line is split on the first `=` only. The trimmed text on its left
/// becomes the assignment target; without an `=` there is no target and the
/// whole line is the expression. Whitespace is skipped, runs of letters and
/// digits become a single token, and every other character is a token of its
/// own.
///
/// This never fails: malformed input yields a token sequence that the
/// evaluator later rejects.
///
/// # Example
/// ```
/// use notatio::interpreter::lexer::{Token, tokenize};
///
/// let (target, tokens) = tokenize("x = (y+12) * 3");
/// assert_eq!(target.as_deref(), Some("x"));
/// assert_eq!(tokens,
///            vec![Token::LParen,
///                 Token::Ident("y".to_string()),
///                 Token::Op('+'),
///                 Token::Number(12),
///                 Token::RParen,
///                 Token::Op('*'),
///                 Token::Number(3)]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> (Option<String>, Vec<Token>) {
    let (target, expression) = match line.split_once('=') {
        Some((left, right)) => (Some(left.trim().to_string()), right),
        None => (None, line),
    };

    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(expression);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(Lexeme::Word(word)) => tokens.push(Token::from_word(word)),
            Ok(Lexeme::Symbol(symbol)) => tokens.push(Token::from_symbol(symbol)),
            Ok(Lexeme::Ignored) => {},
            // Only reachable for input the symbol rule cannot see, keep it verbatim.
            Err(()) => tokens.extend(lexer.slice().chars().map(Token::from_symbol)),
        }
    }

    log::trace!("tokenized {line:?} into {}", format_tokens(&tokens));
    (target, tokens)
}

/// Renders a token sequence as a bracketed, comma separated list.
///
/// # Example
/// ```
/// use notatio::interpreter::lexer::{Token, format_tokens};
///
/// let tokens = [Token::Op('+'), Token::Number(2), Token::Ident("x".to_string())];
/// assert_eq!(format_tokens(&tokens), "[+, 2, x]");
/// assert_eq!(format_tokens(&[]), "[]");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let parts: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}
