//! # notatio
//!
//! notatio converts one line of integer arithmetic with variables into prefix
//! and postfix notation and evaluates it against the variables assigned by
//! earlier lines.
//!
//! ```
//! use notatio::{Session, format_tokens};
//!
//! let mut session = Session::new();
//! let report = session.process_line("x = (2 + 3) * 4").unwrap();
//!
//! assert_eq!(report.value, 20);
//! assert_eq!(format_tokens(&report.prefix), "[*, +, 2, 3, 4]");
//! assert_eq!(format_tokens(&report.postfix), "[2, 3, +, 4, *]");
//! assert_eq!(session.variables().get("x"), Some(20));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for evaluation.
///
/// This module defines every error that can be raised while evaluating a line.
/// Tokenizing and converting never fail; malformed input surfaces here.
///
/// # Responsibilities
/// - Defines one variant per failure mode of the evaluator.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the conversion and evaluation pipeline.
///
/// This module ties together the lexer, both converters, the evaluators and
/// the variable store, and exposes the per-line session used by the binary.
///
/// # Responsibilities
/// - Splits lines into an assignment target and tokens.
/// - Converts tokens to prefix and postfix order.
/// - Evaluates prefix sequences and records assignments.
pub mod interpreter;
/// General numeric helpers.
///
/// Safe integer conversions used by the evaluator.
pub mod util;

pub use crate::{
    error::EvalError,
    interpreter::{
        converter::{to_postfix, to_prefix},
        evaluator::{evaluate, evaluate_postfix},
        lexer::{Token, format_tokens, tokenize},
        session::{LineReport, Session},
        variables::VariableStore,
    },
};
