use std::fmt;

use crate::{
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_u32_checked,
};

/// Represents the arithmetic operators the evaluator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, integer division truncating toward zero.
    Div,
    /// `^`, integer power truncated toward zero.
    Pow,
}

impl BinaryOperator {
    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use notatio::interpreter::evaluator::binary::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('^'), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Computes `left op right`.
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] for `/` with a zero `right`, and for a
    ///   zero `left` raised to a negative power.
    /// - [`EvalError::Overflow`] when the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use notatio::{error::EvalError, interpreter::evaluator::binary::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Div.apply(-7, 2), Ok(-3));
    /// assert_eq!(BinaryOperator::Pow.apply(2, 10), Ok(1024));
    /// assert_eq!(BinaryOperator::Div.apply(6, 0), Err(EvalError::DivisionByZero));
    /// ```
    pub fn apply(self, left: i64, right: i64) -> EvalResult<i64> {
        match self {
            Self::Add => left.checked_add(right).ok_or(EvalError::Overflow),
            Self::Sub => left.checked_sub(right).ok_or(EvalError::Overflow),
            Self::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
            Self::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                left.checked_div(right).ok_or(EvalError::Overflow)
            },
            Self::Pow => eval_pow(left, right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluates `base ^ exponent`, truncating the real result toward zero.
///
/// Non-negative exponents use checked integer exponentiation. A negative
/// exponent gives a magnitude below one unless the base is `1` or `-1`, so
/// every other base truncates to `0`; a zero base has no finite result.
fn eval_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    if exponent < 0 {
        return match base {
            0 => Err(EvalError::DivisionByZero),
            1 => Ok(1),
            -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => Ok(0),
        };
    }

    match base {
        0 | 1 => Ok(if exponent == 0 { 1 } else { base }),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => {
            let exponent = i64_to_u32_checked(exponent)?;
            base.checked_pow(exponent).ok_or(EvalError::Overflow)
        },
    }
}
