use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, consume, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next_if(|token| matches!(token.kind, TokenKind::Minus | TokenKind::Bang))
    else {
        return parse_primary(tokens);
    };

    let op = if token.kind == TokenKind::Minus {
        UnaryOperator::Negate
    } else {
        UnaryOperator::Not
    };
    let expr = parse_unary(tokens)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line: token.line })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := "false" | "true" | "nil"
///              | NUMBER | STRING
///              | "(" expression ")"
/// ```
/// # Errors
/// Returns [`SyntaxError::ExpectedExpression`] when the current token starts
/// none of the alternatives, and [`SyntaxError::ExpectedToken`] when a
/// grouping is not closed.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.peek()
                      .copied()
                      .ok_or_else(|| SyntaxError::expected_expression(None))?;

    let value = match token.kind {
        TokenKind::False => LiteralValue::Bool(false),
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::Nil => LiteralValue::Nil,
        TokenKind::Number | TokenKind::String => match &token.literal {
            Some(value) => value.clone(),
            None => return Err(SyntaxError::expected_expression(Some(token))),
        },
        TokenKind::LeftParen => return parse_grouping(tokens),
        _ => return Err(SyntaxError::expected_expression(Some(token))),
    };

    tokens.next();
    Ok(Expr::Literal { value,
                       line: token.line })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let open = consume(tokens, TokenKind::LeftParen, "Expect '('.")?;
    let expr = parse_expression(tokens)?;
    consume(tokens, TokenKind::RightParen, "Expect ')' after expression.")?;

    Ok(Expr::Grouping { expr: Box::new(expr),
                        line: open.line })
}
