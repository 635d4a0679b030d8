use crate::ast::BinaryOperator;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The operand of a unary `-` was not a number.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic or comparison operator received a non-number.
    ExpectedNumbers {
        /// The operator that was applied.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` received neither two numbers nor at least one string.
    InvalidAddition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing printed output to the sink failed.
    Output {
        /// The underlying I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// The source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedNumber { line }
            | Self::ExpectedNumbers { line, .. }
            | Self::InvalidAddition { line }
            | Self::Output { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumber { line } => {
                write!(f, "[line {line}] Runtime error: Operand must be a number.")
            },
            Self::ExpectedNumbers { line, .. } => {
                write!(f, "[line {line}] Runtime error: Operands must be numbers.")
            },
            Self::InvalidAddition { line } => write!(f,
                                                     "[line {line}] Runtime error: Operands must be two numbers or at least one string."),
            Self::Output { details, line } => {
                write!(f, "[line {line}] Runtime error: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
