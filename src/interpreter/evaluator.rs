/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and statement execution.
///
/// Contains the expression evaluator, the interpreter that executes statements
/// against an output sink, and error propagation.
pub mod core;
