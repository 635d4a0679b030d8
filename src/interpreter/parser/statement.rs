use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, consume, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either a `print` statement or an expression statement; both
/// are terminated by `;`.
///
/// Grammar:
/// ```text
///     statement := "print" expression ";"
///                | expression ";"
/// ```
/// The statement's source line is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if let Some(print) = tokens.next_if(|token| token.kind == TokenKind::Print) {
        let expr = parse_expression(tokens)?;
        consume(tokens, TokenKind::Semicolon, "Expect ';' after value.")?;

        return Ok(Statement::Print { expr,
                                     line: print.line });
    }

    let line = tokens.peek().map_or(0, |token| token.line);
    let expr = parse_expression(tokens)?;
    consume(tokens, TokenKind::Semicolon, "Expect ';' after expression.")?;

    Ok(Statement::Expression { expr, line })
}
