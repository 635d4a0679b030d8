use tinylox::{
    ast::{BinaryOperator, Expr, Statement},
    error::{EXIT_DATA_ERROR, LexicalError, LoxError, SyntaxError},
    parse,
};

fn tree(src: &str) -> String {
    parse(src).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"))
              .iter()
              .map(ToString::to_string)
              .collect::<Vec<_>>()
              .join("\n")
}

fn syntax_error(src: &str) -> SyntaxError {
    match parse(src) {
        Err(LoxError::Syntax(e)) => e,
        other => panic!("Expected a syntax error for {src:?}, got {other:?}"),
    }
}

#[test]
fn statements() {
    assert_eq!(tree("print 1; 2;"), "(print 1)\n(; 2)");
    assert_eq!(tree("print \"hi\";"), "(print \"hi\")");
    assert_eq!(tree("true; false; nil;"), "(; true)\n(; false)\n(; nil)");
}

#[test]
fn empty_program() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("// nothing here\n").unwrap().is_empty());
}

#[test]
fn precedence_levels() {
    assert_eq!(tree("1 + 2 * 3;"), "(; (+ 1 (* 2 3)))");
    assert_eq!(tree("1 < 2 == true;"), "(; (== (< 1 2) true))");
    assert_eq!(tree("1 - 2 >= 3 / 4;"), "(; (>= (- 1 2) (/ 3 4)))");
    assert_eq!(tree("(1 + 2) * 3;"), "(; (* (group (+ 1 2)) 3))");
}

#[test]
fn grouped_division_binds_tighter_than_addition() {
    assert_eq!(tree("print 1 + 1 + (3+3) / 3;"),
               "(print (+ (+ 1 1) (/ (group (+ 3 3)) 3)))");
}

// The factor rule loops over both `*` and `/` and folds to the left, instead
// of admitting a single trailing division.
#[test]
fn factor_chains_fold_left() {
    assert_eq!(tree("2 * 3 * 4;"), "(; (* (* 2 3) 4))");
    assert_eq!(tree("8 / 2 / 2;"), "(; (/ (/ 8 2) 2))");
    assert_eq!(tree("8 / 2 * 2;"), "(; (* (/ 8 2) 2))");
}

#[test]
fn other_binary_levels_fold_left() {
    assert_eq!(tree("1 - 2 - 3;"), "(; (- (- 1 2) 3))");
    assert_eq!(tree("1 == 2 != 3;"), "(; (!= (== 1 2) 3))");
}

// Prefix operators guard entry into primary, so `-1` and `!!x` parse and
// `1 - -2` is a subtraction of a negation.
#[test]
fn unary_operators_are_prefix() {
    assert_eq!(tree("-1;"), "(; (- 1))");
    assert_eq!(tree("!!true;"), "(; (! (! true)))");
    assert_eq!(tree("1 - -2;"), "(; (- 1 (- 2)))");
    assert_eq!(tree("-2 * 3;"), "(; (* (- 2) 3))");
}

#[test]
fn nodes_carry_operator_lines() {
    let program = parse("print\n1\n+\n2;").unwrap();

    let Statement::Print { expr, line } = &program[0] else {
        panic!("Expected a print statement");
    };
    assert_eq!(*line, 1);
    assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, line: 3, .. }));
    assert_eq!(expr.line_number(), 3);
}

#[test]
fn missing_semicolon() {
    let err = syntax_error("print 1");

    assert_eq!(err,
               SyntaxError::ExpectedToken { message: "Expect ';' after value.".to_string(),
                                            found:   None,
                                            line:    1, });
    assert_eq!(err.to_string(), "[line 1] Error at end: Expect ';' after value.");

    let err = syntax_error("1 + 2 3;");
    assert_eq!(err.to_string(), "[line 1] Error at '3': Expect ';' after expression.");
}

#[test]
fn unclosed_grouping() {
    let err = syntax_error("print (1 + 2;");

    assert_eq!(err.to_string(), "[line 1] Error at ';': Expect ')' after expression.");
}

#[test]
fn missing_operand_is_reported_not_panicked() {
    assert_eq!(syntax_error("+ 1;"),
               SyntaxError::ExpectedExpression { found: Some("+".to_string()),
                                                 line:  1, });
    assert_eq!(syntax_error("x;").to_string(), "[line 1] Error at 'x': Expect expression.");
    assert_eq!(syntax_error("print\n\n1 *;").to_string(),
               "[line 3] Error at ';': Expect expression.");
    assert_eq!(syntax_error("print").to_string(), "[line 1] Error at end: Expect expression.");
}

#[test]
fn first_error_aborts_the_parse() {
    let err = parse("print ; print ;").unwrap_err();

    assert_eq!(err.exit_code(), EXIT_DATA_ERROR);
    assert_eq!(err.line(), 1);
}

#[test]
fn lexical_errors_surface_before_parsing() {
    assert!(matches!(parse("print 1 # 2;"),
                     Err(LoxError::Lexical(LexicalError::UnexpectedCharacter { character: '#',
                                                                              line:      1, }))));
}
