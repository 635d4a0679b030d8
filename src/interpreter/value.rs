/// Runtime value representation.
///
/// Defines the `Value` enum produced by evaluation, its truthiness rule, its
/// textual form used by `print`, and conversions from AST literals.
pub mod core;
