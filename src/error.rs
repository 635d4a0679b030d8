/// Lexical errors.
///
/// Raised by the scanner for characters that cannot start a token and for
/// string literals left open at the end of the input.
pub mod lexical_error;
/// Runtime errors.
///
/// Raised during evaluation when an operator receives operands of the wrong
/// type, or when printed output cannot be written.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised by the parser when a required token is missing or no expression
/// starts at the current token.
pub mod syntax_error;

pub use lexical_error::LexicalError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Exit status for lexical and syntax errors (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: i32 = 65;
/// Exit status for runtime errors (`EX_SOFTWARE`).
pub const EXIT_RUNTIME_ERROR: i32 = 70;

#[derive(Debug)]
/// Any failure of a pipeline run, tagged by the phase that produced it.
pub enum LoxError {
    /// The scanner rejected the source text.
    Lexical(LexicalError),
    /// The parser rejected the token stream.
    Syntax(SyntaxError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl LoxError {
    /// The process exit status an embedding binary should use for this error.
    ///
    /// # Example
    /// ```
    /// use tinylox::{error::EXIT_DATA_ERROR, scan};
    ///
    /// let err = scan("\"hello").unwrap_err();
    /// assert_eq!(err.exit_code(), EXIT_DATA_ERROR);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Lexical(_) | Self::Syntax(_) => EXIT_DATA_ERROR,
            Self::Runtime(_) => EXIT_RUNTIME_ERROR,
        }
    }

    /// The source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lexical(e) => e.line(),
            Self::Syntax(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<LexicalError> for LoxError {
    fn from(e: LexicalError) -> Self {
        Self::Lexical(e)
    }
}

impl From<SyntaxError> for LoxError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for LoxError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for LoxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
