use crate::{
    error::EvalError,
    interpreter::{
        converter::{to_postfix, to_prefix},
        evaluator::{EvalResult, EvalStep, evaluate_observed},
        lexer::{Token, tokenize},
        variables::VariableStore,
    },
};

/// Everything produced by one successfully processed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// The variable assigned by the line, if it had an `=`.
    pub target:  Option<String>,
    /// The expression in prefix order.
    pub prefix:  Vec<Token>,
    /// The expression in postfix order.
    pub postfix: Vec<Token>,
    /// The value the expression evaluated to.
    pub value:   i64,
    /// Every binary operation performed, in evaluation order.
    pub steps:   Vec<EvalStep>,
}

/// Stores the state shared by the lines of one session.
///
/// A session is created once and fed one line at a time. Its only state is the
/// variable store, which assignments update and later lines read.
///
/// ## Usage
///
/// ```
/// use notatio::{error::EvalError, interpreter::session::Session};
///
/// let mut session = Session::new();
///
/// let report = session.process_line("x = 3 + 4").unwrap();
/// assert_eq!(report.value, 7);
/// assert_eq!(report.target.as_deref(), Some("x"));
///
/// assert_eq!(session.process_line("x + 1").unwrap().value, 8);
/// assert_eq!(session.process_line("y + 1").unwrap_err(),
///            EvalError::UndefinedVariable { name: "y".to_string() });
/// assert_eq!(session.variables().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    variables: VariableStore,
}

impl Session {
    /// Creates a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Tokenizes, converts and evaluates one line.
    ///
    /// Both converters work from the same token sequence, independently of
    /// each other. Only the prefix sequence is evaluated.
    ///
    /// # Errors
    /// Returns the evaluator's error if the line cannot be evaluated. The
    /// variables are then left exactly as they were.
    pub fn process_line(&mut self, line: &str) -> EvalResult<LineReport> {
        let (target, tokens) = tokenize(line);
        let prefix = to_prefix(&tokens);
        let postfix = to_postfix(&tokens);

        let mut steps = Vec::new();
        let value = evaluate_observed(&prefix, target.as_deref(), &mut self.variables, |step| {
                        steps.push(*step);
                    })?;

        Ok(LineReport { target,
                        prefix,
                        postfix,
                        value,
                        steps })
    }

    /// Processes every non-blank line of `source`, stopping at the first
    /// failure.
    ///
    /// # Errors
    /// Returns the 1-based line number and error of the first line that could
    /// not be evaluated. Lines before it keep their effect on the variables.
    ///
    /// # Example
    /// ```
    /// use notatio::interpreter::session::Session;
    ///
    /// let mut session = Session::new();
    /// let reports = session.run_script("a = 2\n\nb = a ^ 3\nb - a").unwrap();
    ///
    /// assert_eq!(reports.last().map(|r| r.value), Some(6));
    /// assert!(session.run_script("a\nb / 0").is_err_and(|(line, _)| line == 2));
    /// ```
    pub fn run_script(&mut self,
                      source: &str)
                      -> Result<Vec<LineReport>, (usize, EvalError)> {
        let mut reports = Vec::new();
        for (index, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            reports.push(self.process_line(line).map_err(|e| (index + 1, e))?);
        }
        Ok(reports)
    }
}
