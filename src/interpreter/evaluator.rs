/// Binary operator evaluation logic.
///
/// Maps operator symbols to [`binary::BinaryOperator`] and applies them with
/// checked integer arithmetic.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the prefix evaluator, the per-step trace type and the result alias
/// shared by every evaluation routine.
pub mod core;

/// Postfix evaluation.
///
/// Evaluates a postfix sequence left to right against a read-only variable
/// store. Used to cross-check the two converters.
pub mod postfix;

pub use self::core::{EvalResult, EvalStep, evaluate, evaluate_observed};
pub use self::postfix::evaluate_postfix;
