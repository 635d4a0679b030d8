use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_equality, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole program.
///
/// Statements are parsed until the `Eof` token. Parsing stops at the first
/// syntax error; no recovery is attempted.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: The scanned token list, ending in `Eof`.
///
/// # Returns
/// The statements in source order.
///
/// # Example
/// ```
/// use tinylox::interpreter::{lexer::scan_tokens, parser::core::parse_program};
///
/// let tokens = scan_tokens("print 1; 2 + 3;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while let Some(token) = iter.peek()
          && token.kind != TokenKind::Eof
    {
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, equality, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := equality`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_equality(tokens)
}

/// Consumes the next token if it has the expected kind.
///
/// # Errors
/// Returns [`SyntaxError::ExpectedToken`] carrying `message`, located at the
/// token that was found instead. The token is not consumed.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: TokenKind,
                                                     message: &str)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.next_if(|token| token.kind == kind) {
        return Ok(token);
    }

    Err(SyntaxError::expected_token(message, tokens.peek().copied()))
}
