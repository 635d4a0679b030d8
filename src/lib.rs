//! # tinylox
//!
//! tinylox is a front end for a tiny C-like expression language written in
//! Rust. Source text is scanned into tokens, parsed by recursive descent into
//! statements, and executed by a tree-walking evaluator that prints values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Statement,
    error::LoxError,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, scan_tokens},
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator and the printer.
///
/// # Responsibilities
/// - Defines the closed set of expression and statement variants.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides error types for scanning, parsing, and evaluation.
///
/// Every phase returns its failures as values; nothing in the library prints
/// diagnostics or terminates the process.
///
/// # Responsibilities
/// - Defines one error enum per phase and `LoxError` wrapping them.
/// - Attaches line numbers and renders the `[line N] Error ...` format.
/// - Maps failures to conventional process exit codes.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and value
/// representations.
pub mod interpreter;

/// Scans source text into tokens.
///
/// # Errors
/// Returns `LoxError::Lexical` on the first lexical error.
///
/// # Examples
/// ```
/// use tinylox::scan;
///
/// let tokens = scan("print \"hi\";").unwrap();
/// assert_eq!(tokens.len(), 4); // print, "hi", ;, EOF
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LoxError> {
    Ok(scan_tokens(source)?)
}

/// Scans and parses source text into a program.
///
/// # Errors
/// Returns `LoxError::Lexical` or `LoxError::Syntax` on the first error.
///
/// # Examples
/// ```
/// use tinylox::parse;
///
/// assert!(parse("print (1 + 2);").is_ok());
/// assert!(parse("print (1 + 2;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Vec<Statement>, LoxError> {
    let tokens = scan_tokens(source)?;
    Ok(parse_program(&tokens)?)
}

/// Runs a program, writing printed values to `out`.
///
/// The whole source is scanned and parsed before anything executes, so a
/// lexical or syntax error produces no output at all. A runtime error stops
/// execution; output of earlier statements has already been written.
///
/// # Errors
/// Returns the first lexical, syntax, or runtime error.
///
/// # Examples
/// ```
/// use tinylox::run;
///
/// let mut out = Vec::new();
/// run("print 1 + 1 + (3 + 3) / 3;", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "4\n");
///
/// // Arithmetic on a string is a runtime error.
/// assert!(run("print \"a\" - 1;", &mut Vec::new()).is_err());
/// ```
pub fn run<W: Write>(source: &str, out: W) -> Result<(), LoxError> {
    let program = parse(source)?;

    let mut interpreter = Interpreter::new(out);
    interpreter.interpret(&program)?;
    Ok(())
}
