use std::fmt;

use crate::{
    error::EvalError,
    interpreter::{evaluator::binary::BinaryOperator, lexer::Token, variables::VariableStore},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// One binary operation performed during evaluation.
///
/// Displays as `left op right = result`, e.g. `2 + 3 = 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalStep {
    pub left:   i64,
    pub op:     BinaryOperator,
    pub right:  i64,
    pub result: i64,
}

impl fmt::Display for EvalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.left, self.op, self.right, self.result)
    }
}

/// Evaluates a prefix sequence and commits the result to `target`.
///
/// Equivalent to [`evaluate_observed`] with an observer that ignores each
/// step; steps are still logged at `debug` level.
///
/// # Errors
/// See [`evaluate_observed`].
///
/// # Example
/// ```
/// use notatio::interpreter::{
///     converter::to_prefix,
///     evaluator::evaluate,
///     lexer::tokenize,
///     variables::VariableStore,
/// };
///
/// let mut vars = VariableStore::new();
///
/// let (target, tokens) = tokenize("x = 3 + 4");
/// assert_eq!(evaluate(&to_prefix(&tokens), target.as_deref(), &mut vars), Ok(7));
/// assert_eq!(vars.get("x"), Some(7));
///
/// let (target, tokens) = tokenize("x + 1");
/// assert_eq!(evaluate(&to_prefix(&tokens), target.as_deref(), &mut vars), Ok(8));
/// ```
pub fn evaluate(prefix: &[Token],
                target: Option<&str>,
                vars: &mut VariableStore)
                -> EvalResult<i64> {
    evaluate_observed(prefix, target, vars, |_| {})
}

/// Evaluates a prefix sequence, reporting every binary step to `on_step`.
///
/// Tokens are processed right to left with an operand stack. Literals are
/// pushed, identifiers are resolved in `vars`, and each operator pops two
/// values: the first popped is the left operand, the second the right one.
/// Once the whole sequence is consumed exactly one value must remain.
///
/// When `target` is given, the result is written to `vars` under that name,
/// and only after everything else succeeded. On error `vars` is unchanged.
///
/// # Errors
/// - [`EvalError::InvalidAssignmentTarget`] if `target` is not an identifier.
/// - [`EvalError::UndefinedVariable`] for an identifier missing from `vars`.
/// - [`EvalError::InvalidOperand`] for a token such as `3x`.
/// - [`EvalError::UnknownOperator`] for any symbol other than `+ - * / ^`.
/// - [`EvalError::MalformedExpression`] if an operator lacks operands, the
///   stack does not end with exactly one value, or an unbalanced parenthesis
///   was left in the sequence by the converter.
/// - [`EvalError::DivisionByZero`] and [`EvalError::Overflow`] from the
///   arithmetic itself.
///
/// # Example
/// ```
/// use notatio::interpreter::{
///     converter::to_prefix,
///     evaluator::evaluate_observed,
///     lexer::tokenize,
///     variables::VariableStore,
/// };
///
/// let (_, tokens) = tokenize("10 - 2 * 3");
/// let mut steps = Vec::new();
/// let value = evaluate_observed(&to_prefix(&tokens), None, &mut VariableStore::new(), |step| {
///                 steps.push(step.to_string());
///             });
///
/// assert_eq!(value, Ok(4));
/// assert_eq!(steps, ["2 * 3 = 6", "10 - 6 = 4"]);
/// ```
pub fn evaluate_observed<F>(prefix: &[Token],
                            target: Option<&str>,
                            vars: &mut VariableStore,
                            mut on_step: F)
                            -> EvalResult<i64>
    where F: FnMut(&EvalStep)
{
    if let Some(name) = target
       && !is_identifier(name)
    {
        return Err(EvalError::InvalidAssignmentTarget { name: name.to_string() });
    }

    let mut stack: Vec<i64> = Vec::with_capacity(prefix.len());

    for token in prefix.iter().rev() {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Ident(name) => stack.push(lookup(vars, name)?),
            Token::Invalid(text) => {
                return Err(EvalError::InvalidOperand { token: text.clone() });
            },
            Token::LParen | Token::RParen => return Err(EvalError::MalformedExpression),
            Token::Op(symbol) => {
                let op = operator_of(*symbol)?;
                let left = stack.pop().ok_or(EvalError::MalformedExpression)?;
                let right = stack.pop().ok_or(EvalError::MalformedExpression)?;
                let step = apply_step(op, left, right)?;
                on_step(&step);
                stack.push(step.result);
            },
        }
    }

    let result = single_value(stack)?;

    if let Some(name) = target {
        vars.assign(name, result);
        log::debug!("assigned {name} = {result}");
    }

    Ok(result)
}

/// Resolves `name` in `vars`.
pub(in crate::interpreter::evaluator) fn lookup(vars: &VariableStore,
                                                name: &str)
                                                -> EvalResult<i64> {
    vars.get(name)
        .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
}

/// Maps an operator symbol to the operator it denotes.
pub(in crate::interpreter::evaluator) fn operator_of(symbol: char) -> EvalResult<BinaryOperator> {
    BinaryOperator::from_symbol(symbol)
        .ok_or_else(|| EvalError::UnknownOperator { token: symbol.to_string() })
}

/// Applies `op` and logs the step.
pub(in crate::interpreter::evaluator) fn apply_step(op: BinaryOperator,
                                                    left: i64,
                                                    right: i64)
                                                    -> EvalResult<EvalStep> {
    let result = op.apply(left, right)?;
    let step = EvalStep { left,
                          op,
                          right,
                          result };
    log::debug!("{step}");
    Ok(step)
}

/// Returns the only value left on an operand stack.
pub(in crate::interpreter::evaluator) fn single_value(mut stack: Vec<i64>) -> EvalResult<i64> {
    match (stack.pop(), stack.is_empty()) {
        (Some(value), true) => Ok(value),
        _ => Err(EvalError::MalformedExpression),
    }
}

/// Returns `true` if `name` would tokenize as a single identifier.
fn is_identifier(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic())
    && name.chars().all(|c| c.is_ascii_alphanumeric())
}
