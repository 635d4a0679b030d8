/// Dispatch of binary operators to their handlers.
pub mod core;

/// Relational and equality operators.
pub mod comparison;

/// Arithmetic on numbers and string concatenation.
pub mod scalar;
