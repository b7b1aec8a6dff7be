use crate::interpreter::lexer::Token;

/// Decides whether an operator already on the stack leaves it before a new
/// operator is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopRule {
    /// Pop while the stacked priority is greater than or equal to the incoming
    /// one. Makes every operator left-associative.
    Inclusive,
    /// Pop only while the stacked priority is strictly greater.
    Strict,
}

impl PopRule {
    /// Returns `true` if an operator of priority `stacked` must be popped
    /// before pushing one of priority `incoming`.
    #[must_use]
    pub const fn should_pop(self, stacked: u8, incoming: u8) -> bool {
        match self {
            Self::Inclusive => stacked >= incoming,
            Self::Strict => stacked > incoming,
        }
    }
}

/// Runs one shunting-yard pass over `tokens`.
///
/// - Integer literals, identifiers and invalid words go straight to the
///   output.
/// - `(` is pushed.
/// - `)` pops operators to the output until a `(` is found, which is
///   discarded. A missing `(` is not an error; the pop simply stops.
/// - Any other token is treated as an operator: stacked operators are popped
///   while `rule` says so, then the token is pushed. A `(` on the stack always
///   stops popping.
/// - At the end every remaining stack entry is popped to the output,
///   including an unmatched `(`.
///
/// # Example
/// ```
/// use notatio::interpreter::{
///     converter::core::{PopRule, shunting_yard},
///     lexer::{Token, tokenize},
/// };
///
/// let (_, tokens) = tokenize("1 - 2 + 3");
/// let out = shunting_yard(tokens, PopRule::Inclusive);
/// assert_eq!(out,
///            vec![Token::Number(1),
///                 Token::Number(2),
///                 Token::Op('-'),
///                 Token::Number(3),
///                 Token::Op('+')]);
/// ```
pub fn shunting_yard<I>(tokens: I, rule: PopRule) -> Vec<Token>
    where I: IntoIterator<Item = Token>
{
    let mut output = Vec::new();
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Ident(_) | Token::Invalid(_) => output.push(token),
            Token::LParen => stack.push(token),
            Token::RParen => {
                while let Some(top) = stack.pop() {
                    if top == Token::LParen {
                        break;
                    }
                    output.push(top);
                }
            },
            Token::Op(_) => {
                while let Some(top) = stack.last()
                      && *top != Token::LParen
                      && rule.should_pop(top.priority(), token.priority())
                {
                    output.extend(stack.pop());
                }
                stack.push(token);
            },
        }
    }

    output.extend(stack.into_iter().rev());
    output
}
