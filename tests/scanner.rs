use tinylox::{
    ast::LiteralValue,
    error::{EXIT_DATA_ERROR, LexicalError, LoxError},
    interpreter::lexer::{KEYWORDS, Token, TokenKind, scan_tokens},
    scan,
};

fn kinds(src: &str) -> Vec<TokenKind> {
    scan_tokens(src).unwrap_or_else(|e| panic!("Scanning {src:?} failed: {e}"))
                    .iter()
                    .map(|t| t.kind)
                    .collect()
}

#[test]
fn single_character_tokens() {
    use TokenKind::{
        Bang, Comma, Dot, Equal, Greater, LeftBrace, LeftParen, Less, Minus, Plus, RightBrace,
        RightParen, Semicolon, Slash, Star,
    };
    let cases = [("(", LeftParen),
                 (")", RightParen),
                 ("{", LeftBrace),
                 ("}", RightBrace),
                 (",", Comma),
                 (".", Dot),
                 ("-", Minus),
                 ("+", Plus),
                 (";", Semicolon),
                 ("*", Star),
                 ("/", Slash),
                 ("!", Bang),
                 ("=", Equal),
                 ("<", Less),
                 (">", Greater)];

    for (src, kind) in cases {
        assert_eq!(kinds(src), [kind, TokenKind::Eof], "scanning {src:?}");
    }
}

#[test]
fn two_character_operators() {
    use TokenKind::{BangEqual, Eof, EqualEqual, GreaterEqual, LessEqual};

    assert_eq!(kinds("!= == <= >="),
               [BangEqual, EqualEqual, LessEqual, GreaterEqual, Eof]);
    assert_eq!(kinds("!!="), [TokenKind::Bang, BangEqual, Eof]);
}

#[test]
fn equality_of_numbers() {
    let tokens = scan("1 == 2").unwrap();

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Number, TokenKind::EqualEqual, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(tokens[0].literal, Some(LiteralValue::Number(1.0)));
    assert_eq!(tokens[1].literal, None);
    assert_eq!(tokens[2].literal, Some(LiteralValue::Number(2.0)));
    assert_eq!(tokens[2].lexeme, "2");
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let tokens = scan_tokens("// a comment (( ))\n\t+ \r// trailing").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn skipped_kinds_never_reach_the_stream() {
    let src = "print 1; // one\n\n  \"two\r\nlines\" \t== nil; // end";

    for kind in kinds(src) {
        assert!(!matches!(kind, TokenKind::Comment | TokenKind::NewLine | TokenKind::Ignored),
                "{kind} in the scanned stream");
    }
}

#[test]
fn lone_slash_is_division() {
    assert_eq!(kinds("4 / 2"),
               [TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn numbers() {
    let tokens = scan_tokens("12 3.25").unwrap();
    assert_eq!(tokens[0].literal, Some(LiteralValue::Number(12.0)));
    assert_eq!(tokens[1].literal, Some(LiteralValue::Number(3.25)));

    // A dot is only part of a number when a digit follows it.
    assert_eq!(kinds("1."), [TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
    assert_eq!(kinds(".5"), [TokenKind::Dot, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(kinds("1.2.3"),
               [TokenKind::Number, TokenKind::Dot, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn strings() {
    let tokens = scan_tokens("\"hello world\" \"\"").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hello world\"");
    assert_eq!(tokens[0].literal, Some(LiteralValue::Str("hello world".to_string())));
    assert_eq!(tokens[1].literal, Some(LiteralValue::Str(String::new())));
}

#[test]
fn multi_line_string_advances_the_line_counter() {
    let tokens = scan_tokens("\"one\ntwo\nthree\" ;").unwrap();

    assert_eq!(tokens[0].literal, Some(LiteralValue::Str("one\ntwo\nthree".to_string())));
    assert_eq!(tokens[0].line, 3);
    assert_eq!(tokens[1].line, 3);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
    assert_eq!(tokens[2].line, 3);
}

#[test]
fn every_keyword_is_recognized() {
    assert_eq!(KEYWORDS.len(), 16);

    for (name, kind) in KEYWORDS.iter() {
        let tokens = scan_tokens(name).unwrap();
        assert_eq!(tokens[0].kind, *kind, "scanning {name:?}");
        assert_eq!(tokens[0].lexeme, *name);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }
}

#[test]
fn identifiers() {
    let tokens = scan_tokens("foo _bar baz9 printer").unwrap();

    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[3].lexeme, "printer");
    assert_eq!(tokens[0].literal, None);
}

// `or` goes through the same identifier path as every other keyword: names
// that merely start with `o` or `or` are identifiers, not errors.
#[test]
fn or_is_scanned_like_any_keyword() {
    assert_eq!(kinds("or"), [TokenKind::Or, TokenKind::Eof]);
    assert_eq!(kinds("o"), [TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("orbit"), [TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("true or false"),
               [TokenKind::True, TokenKind::Or, TokenKind::False, TokenKind::Eof]);
}

#[test]
fn unterminated_string_is_one_error_on_the_opening_line() {
    let err = scan("\"hello").unwrap_err();

    assert!(matches!(err, LoxError::Lexical(LexicalError::UnterminatedString { line: 1 })));
    assert_eq!(err.exit_code(), EXIT_DATA_ERROR);
    assert_eq!(err.to_string(), "[line 1] Error : Unterminated string.");

    let err = scan_tokens("1;\n\"abc\ndef").unwrap_err();
    assert_eq!(err, LexicalError::UnterminatedString { line: 2 });
}

#[test]
fn unexpected_character() {
    let err = scan_tokens("1 +\n @").unwrap_err();

    assert_eq!(err,
               LexicalError::UnexpectedCharacter { character: '@',
                                                   line:      2, });
    assert_eq!(err.to_string(), "[line 2] Error : Unexpected character.");
}

#[test]
fn stream_ends_in_exactly_one_eof_with_non_decreasing_lines() {
    let src = "print 1;\n// note\nprint \"a\nb\" + 2;\n\n(3 >= 4);\n";
    let tokens = scan_tokens(src).unwrap();

    let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
    assert_eq!(eofs, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(tokens.last().map(|t| t.line), Some(7));
    assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
}

#[test]
fn rescanning_gives_identical_tokens() {
    let src = "print (1 + 2.5) * \"x\" != nil; // done";

    assert_eq!(scan_tokens(src).unwrap(), scan_tokens(src).unwrap());
}

#[test]
fn token_display() {
    assert_eq!(Token::new(TokenKind::Number, "1.5", 1).to_string(),
               "type: NUMBER lexeme: 1.5 literal: 1.5");
    assert_eq!(Token::new(TokenKind::String, "\"hi\"", 1).to_string(),
               "type: STRING lexeme: \"hi\" literal: hi");
    assert_eq!(Token::new(TokenKind::LeftParen, "(", 1).to_string(),
               "type: LEFT_PAREN lexeme: ( literal: null");
}
