#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexicalError {
    /// A character that cannot begin any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal was still open at the end of the input.
    UnterminatedString {
        /// The line of the opening quote.
        line: usize,
    },
}

impl LexicalError {
    /// The source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { line, .. } => {
                write!(f, "[line {line}] Error : Unexpected character.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "[line {line}] Error : Unterminated string.")
            },
        }
    }
}

impl std::error::Error for LexicalError {}
