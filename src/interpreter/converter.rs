/// Shared shunting-yard pass.
///
/// Moves operands to the output and holds operators on a stack until an
/// operator of lower priority, a closing parenthesis or the end of input
/// releases them. The popping rule decides what happens on equal priority.
pub mod core;

/// Infix to postfix conversion.
///
/// Classic shunting-yard over the tokens as written, popping operators of
/// greater or equal priority.
pub mod postfix;

/// Infix to prefix conversion.
///
/// Runs the shunting-yard pass over a reversed, parenthesis-mirrored copy of
/// the tokens with a strict popping rule, then reverses the result.
pub mod prefix;

pub use self::postfix::to_postfix;
pub use self::prefix::to_prefix;
