/// The converter module reorders infix tokens into prefix and postfix order.
///
/// Both conversions share one shunting-yard pass that differs only in how
/// operators of equal priority are treated. Neither conversion modifies the
/// token sequence it is given.
///
/// # Responsibilities
/// - Applies the operator priority table (`^` > `*` `/` > `+` `-`).
/// - Resolves parentheses.
/// - Produces prefix order through a reversed, mirrored pass.
pub mod converter;
/// The evaluator module computes the value of a converted expression.
///
/// The evaluator walks a prefix (or postfix) sequence with an operand stack,
/// resolving variables through a [`variables::VariableStore`] and applying
/// checked integer arithmetic.
///
/// # Responsibilities
/// - Evaluates the five binary operators `+ - * / ^`.
/// - Reports undefined variables, unknown operators, division by zero and
///   malformed expressions.
/// - Commits assignments only after a fully successful evaluation.
pub mod evaluator;
/// The lexer module tokenizes one input line.
///
/// The lexer splits off the assignment target, then reads the expression into
/// classified tokens: integer literals, identifiers, operator symbols and
/// parentheses.
///
/// # Responsibilities
/// - Separates `target = expression` on the first `=`.
/// - Groups letters and digits into single tokens.
/// - Never fails; malformed input is left for the evaluator to reject.
pub mod lexer;
/// The session module runs the per-line pipeline.
///
/// A session owns the variables of one run and feeds each line through the
/// lexer, both converters and the prefix evaluator.
pub mod session;
/// The variables module stores values assigned by earlier lines.
pub mod variables;
