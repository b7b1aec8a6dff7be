use crate::interpreter::{
    converter::core::{PopRule, shunting_yard},
    lexer::Token,
};

/// Converts an infix token sequence to postfix order.
///
/// Pure: the input is borrowed and left untouched, and equal inputs always
/// give equal outputs. Operators of equal priority are popped, so every
/// operator, `^` included, associates to the left.
///
/// # Example
/// ```
/// use notatio::interpreter::{
///     converter::to_postfix,
///     lexer::{format_tokens, tokenize},
/// };
///
/// let (_, tokens) = tokenize("2 + 3 * 4");
/// assert_eq!(format_tokens(&to_postfix(&tokens)), "[2, 3, 4, *, +]");
///
/// let (_, tokens) = tokenize("(2 + 3) * 4");
/// assert_eq!(format_tokens(&to_postfix(&tokens)), "[2, 3, +, 4, *]");
/// ```
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let postfix = shunting_yard(tokens.iter().cloned(), PopRule::Inclusive);
    log::trace!("postfix: {postfix:?}");
    postfix
}
