use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Safely converts an `i64` to a `u32` if and only if it can be represented
/// exactly.
///
/// ## Errors
/// Returns `EvalError::Overflow` if the value is negative or exceeds
/// `u32::MAX`.
///
/// ## Example
/// ```
/// use notatio::{error::EvalError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45), Ok(45));
/// assert_eq!(i64_to_u32_checked(-1), Err(EvalError::Overflow));
/// assert_eq!(i64_to_u32_checked(i64::MAX), Err(EvalError::Overflow));
/// ```
pub fn i64_to_u32_checked(value: i64) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| EvalError::Overflow)
}
