use std::fmt;

use crate::ast::{Expr, LiteralValue, Statement};

// Strings are quoted so `"1"` and `1` print differently.
fn write_literal(f: &mut fmt::Formatter<'_>, value: &LiteralValue) -> fmt::Result {
    match value {
        LiteralValue::Str(s) => write!(f, "\"{s}\""),
        other => write!(f, "{other}"),
    }
}

/// Renders an expression as a fully parenthesized prefix form.
///
/// # Example
/// ```
/// use tinylox::parse;
///
/// let program = parse("print -1 + (2 * 3);").unwrap();
/// assert_eq!(program[0].to_string(), "(print (+ (- 1) (group (* 2 3))))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write_literal(f, value),
            Self::Grouping { expr, .. } => write!(f, "(group {expr})"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression { expr, .. } => write!(f, "(; {expr})"),
            Self::Print { expr, .. } => write!(f, "(print {expr})"),
        }
    }
}
