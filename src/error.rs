/// Evaluation errors.
///
/// Defines every failure the evaluator can report for a single line: unknown
/// variables and operators, division by zero, overflow and expressions whose
/// operands and operators do not reduce to a single value.
pub mod eval_error;

pub use eval_error::EvalError;
