use crate::interpreter::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// `found` holds the lexeme of the offending token, or `None` when the parser
/// ran into the end of the input.
pub enum SyntaxError {
    /// A specific token was required but another one was found.
    ExpectedToken {
        /// What the parser expected, e.g. `Expect ';' after value.`
        message: String,
        /// The lexeme that was found instead.
        found:   Option<String>,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// No primary expression starts with the current token.
    ExpectedExpression {
        /// The lexeme that was found instead.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
}

/// Lexeme and line of the token an error is reported at.
fn locate(token: Option<&Token>) -> (Option<String>, usize) {
    match token {
        Some(token) if token.kind == TokenKind::Eof => (None, token.line),
        Some(token) => (Some(token.lexeme.clone()), token.line),
        None => (None, 0),
    }
}

impl SyntaxError {
    /// Builds a [`SyntaxError::ExpectedToken`] located at `token`.
    #[must_use]
    pub fn expected_token(message: &str, token: Option<&Token>) -> Self {
        let (found, line) = locate(token);
        Self::ExpectedToken { message: message.to_string(),
                              found,
                              line }
    }

    /// Builds a [`SyntaxError::ExpectedExpression`] located at `token`.
    #[must_use]
    pub fn expected_expression(token: Option<&Token>) -> Self {
        let (found, line) = locate(token);
        Self::ExpectedExpression { found, line }
    }

    /// The source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedToken { line, .. } | Self::ExpectedExpression { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (found, line, message) = match self {
            Self::ExpectedToken { message,
                                  found,
                                  line, } => (found, line, message.as_str()),
            Self::ExpectedExpression { found, line } => (found, line, "Expect expression."),
        };

        match found {
            Some(lexeme) => write!(f, "[line {line}] Error at '{lexeme}': {message}"),
            None => write!(f, "[line {line}] Error at end: {message}"),
        }
    }
}

impl std::error::Error for SyntaxError {}
