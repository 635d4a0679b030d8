/// Core parsing logic and expression entry points.
///
/// Contains the parse result type, the program and expression entry points,
/// and the token-expectation helper shared by the other rules.
pub mod core;

/// Prefix operator and primary expression parsing.
///
/// Handles `!` and `-`, literals and parenthesized groupings.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the equality, comparison, term and factor precedence levels.
pub mod binary;

/// Statement parsing.
///
/// Implements `print` statements and expression statements.
pub mod statement;
