#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a converted line.
///
/// Every variant is recoverable at the line level: the session that raised it
/// keeps its variables exactly as they were before the line started.
pub enum EvalError {
    /// An identifier was referenced before any line assigned it.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// `/` with a zero right-hand operand, or a zero base raised to a negative
    /// power.
    DivisionByZero,
    /// A symbol reached the evaluator that is not one of `+ - * / ^`.
    UnknownOperator {
        /// The offending token, as written.
        token: String,
    },
    /// The token sequence did not reduce to exactly one value.
    MalformedExpression,
    /// An intermediate result does not fit in a 64-bit signed integer.
    Overflow,
    /// An alphanumeric run that is neither an integer literal nor an
    /// identifier, such as `3x` or a literal too large for `i64`.
    InvalidOperand {
        /// The offending token, as written.
        token: String,
    },
    /// The text left of `=` is not a valid variable name.
    InvalidAssignmentTarget {
        /// The target as written, trimmed.
        name: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::UnknownOperator { token } => write!(f, "Unknown operator '{token}'."),
            Self::MalformedExpression => {
                write!(f, "Malformed expression: operands and operators do not match up.")
            },
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::InvalidOperand { token } => {
                write!(f, "'{token}' is neither an integer literal nor a variable name.")
            },
            Self::InvalidAssignmentTarget { name } => {
                write!(f, "Cannot assign to '{name}': not a variable name.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
