use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, apply_step, lookup, operator_of, single_value},
        lexer::Token,
        variables::VariableStore,
    },
};

/// Evaluates a postfix sequence against a read-only variable store.
///
/// Tokens are processed left to right. Each operator pops its right operand
/// first, then its left one. The operator semantics and error conditions are
/// the same as for [`evaluate_observed`](super::evaluate_observed), but no
/// assignment takes place.
///
/// # Errors
/// Returns the same errors as the prefix evaluator, except
/// `InvalidAssignmentTarget`.
///
/// # Example
/// ```
/// use notatio::interpreter::{
///     converter::{to_postfix, to_prefix},
///     evaluator::{evaluate, evaluate_postfix},
///     lexer::tokenize,
///     variables::VariableStore,
/// };
///
/// let mut vars = VariableStore::new();
/// vars.assign("n", 5);
///
/// let (_, tokens) = tokenize("(n - 1) * n / 2");
/// let from_postfix = evaluate_postfix(&to_postfix(&tokens), &vars);
/// let from_prefix = evaluate(&to_prefix(&tokens), None, &mut vars);
///
/// assert_eq!(from_postfix, Ok(10));
/// assert_eq!(from_postfix, from_prefix);
/// ```
pub fn evaluate_postfix(postfix: &[Token], vars: &VariableStore) -> EvalResult<i64> {
    let mut stack: Vec<i64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Ident(name) => stack.push(lookup(vars, name)?),
            Token::Invalid(text) => {
                return Err(EvalError::InvalidOperand { token: text.clone() });
            },
            Token::LParen | Token::RParen => return Err(EvalError::MalformedExpression),
            Token::Op(symbol) => {
                let op = operator_of(*symbol)?;
                let right = stack.pop().ok_or(EvalError::MalformedExpression)?;
                let left = stack.pop().ok_or(EvalError::MalformedExpression)?;
                stack.push(apply_step(op, left, right)?.result);
            },
        }
    }

    single_value(stack)
}
