/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST with one exhaustive `match` per node
/// kind, applies operators to runtime values, and executes statements against
/// an output sink.
///
/// # Responsibilities
/// - Evaluates literals, groupings, unary and binary operations.
/// - Executes expression and print statements in order.
/// - Reports runtime errors for operands of the wrong type.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a list of
/// tokens, each corresponding to a punctuation mark, operator, literal,
/// identifier or keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with lexeme, literal
///   value and source line.
/// - Skips whitespace and `//` comments while counting lines.
/// - Reports lexical errors for unexpected characters and unterminated
///   strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token list produced by the lexer with recursive
/// descent, one function per precedence level, and constructs the statement
/// list of a program.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Enforces operator precedence and associativity.
/// - Reports syntax errors with the offending token and line.
pub mod parser;
/// Renders AST nodes as parenthesized prefix text.
///
/// Used by the `--ast` command-line mode and in tests to check the shape of a
/// parse.
pub mod printer;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: nil, booleans, numbers and strings.
/// - Implements truthiness and the textual form used by `print`.
pub mod value;
