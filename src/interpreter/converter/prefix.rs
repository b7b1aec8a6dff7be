use crate::interpreter::{
    converter::core::{PopRule, shunting_yard},
    lexer::Token,
};

/// Swaps `(` and `)`, leaving every other token as is.
fn mirror(token: Token) -> Token {
    match token {
        Token::LParen => Token::RParen,
        Token::RParen => Token::LParen,
        other => other,
    }
}

/// Converts an infix token sequence to prefix order.
///
/// The tokens are reversed and their parentheses mirrored, the result goes
/// through the shunting-yard pass with a strict popping rule, and the output is
/// reversed again. The strict rule keeps the operands of `-` and `/` in their
/// written order once the output is reversed.
///
/// Works on a private copy; the caller's sequence is not modified.
///
/// # Example
/// ```
/// use notatio::interpreter::{
///     converter::to_prefix,
///     lexer::{format_tokens, tokenize},
/// };
///
/// let (_, tokens) = tokenize("2 + 3 * 4");
/// assert_eq!(format_tokens(&to_prefix(&tokens)), "[+, 2, *, 3, 4]");
///
/// let (_, tokens) = tokenize("a - b - c");
/// assert_eq!(format_tokens(&to_prefix(&tokens)), "[-, -, a, b, c]");
/// ```
#[must_use]
pub fn to_prefix(tokens: &[Token]) -> Vec<Token> {
    let mirrored = tokens.iter().rev().cloned().map(mirror);

    let mut prefix = shunting_yard(mirrored, PopRule::Strict);
    prefix.reverse();

    log::trace!("prefix: {prefix:?}");
    prefix
}
