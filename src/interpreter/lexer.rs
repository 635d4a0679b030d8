use std::{collections::HashMap, sync::LazyLock};

use logos::Logos;

use crate::{ast::LiteralValue, error::LexicalError};

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keyword kinds carry no pattern of their own: they are produced by looking
/// identifiers up in [`KEYWORDS`]. `Eof` is appended by [`scan_tokens`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Names that are not keywords, such as `x` or `_tmp1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", keyword_or_identifier)]
    Identifier,
    /// Double-quoted string literals. They may span lines.
    #[regex(r#""[^"]*""#, string_literal, allow_greedy = true)]
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    String,
    /// Numeric literals such as `42` or `3.14`. A dot not followed by a digit
    /// is left for a separate `Dot` token.
    #[regex(r"[0-9]+")]
    #[regex(r"[0-9]+\.[0-9]+")]
    Number,
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,
    /// End of input.
    Eof,
    /// `// Comments.` Never emitted.
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line feeds. Never emitted; they only advance the line counter.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs and carriage returns. Never emitted.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// Failures raised from inside the lexer. [`scan_tokens`] attaches the line
/// and turns them into a [`LexicalError`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexFault {
    /// No pattern matches the current character.
    #[default]
    UnexpectedCharacter,
    /// A `"` was never closed.
    UnterminatedString,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for tokens and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The reserved words of the language, built once and never mutated.
pub static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    use TokenKind::{
        And, Class, Else, False, For, Fun, If, Nil, Or, Print, Return, Super, This, True, Var,
        While,
    };
    HashMap::from([("and", And),
                   ("class", Class),
                   ("else", Else),
                   ("false", False),
                   ("fun", Fun),
                   ("for", For),
                   ("if", If),
                   ("nil", Nil),
                   ("or", Or),
                   ("print", Print),
                   ("return", Return),
                   ("super", Super),
                   ("this", This),
                   ("true", True),
                   ("var", Var),
                   ("while", While)])
});

/// Looks a name up in the keyword table.
///
/// # Example
/// ```
/// use tinylox::interpreter::lexer::{TokenKind, keyword};
///
/// assert_eq!(keyword("while"), Some(TokenKind::While));
/// assert_eq!(keyword("whilst"), None);
/// ```
#[must_use]
pub fn keyword(name: &str) -> Option<TokenKind> {
    KEYWORDS.get(name).copied()
}

fn keyword_or_identifier(lex: &logos::Lexer<TokenKind>) -> TokenKind {
    keyword(lex.slice()).unwrap_or(TokenKind::Identifier)
}

fn string_literal(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

// Leaves the line counter on the opening quote so the error points there.
const fn unterminated_string(_: &logos::Lexer<TokenKind>) -> Result<(), LexFault> {
    Err(LexFault::UnterminatedString)
}

fn newline(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    lex.extras.line += 1;
    logos::Skip
}

impl TokenKind {
    /// The conventional upper-case name of the kind, e.g. `LEFT_PAREN`.
    ///
    /// `Comment`, `NewLine` and `Ignored` are skipped by the lexer and never
    /// appear in a stream returned by [`scan_tokens`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEW_LINE",
            Self::Ignored => "IGNORED",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A scanned token: its kind, the raw lexeme, the literal value for strings
/// and numbers, and the line the token ended on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The source text the token was matched from.
    pub lexeme:  String,
    /// The value of a `String` or `Number` token.
    pub literal: Option<LiteralValue>,
    /// 1-based source line.
    pub line:    usize,
}

impl Token {
    /// Creates a token, deriving the literal value from the lexeme.
    ///
    /// # Example
    /// ```
    /// use tinylox::{
    ///     ast::LiteralValue,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let token = Token::new(TokenKind::String, "\"hi\"", 1);
    /// assert_eq!(token.literal, Some(LiteralValue::Str("hi".to_string())));
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::Number => lexeme.parse().ok().map(LiteralValue::Number),
            TokenKind::String => lexeme.strip_prefix('"')
                                       .and_then(|s| s.strip_suffix('"'))
                                       .map(LiteralValue::from),
            _ => None,
        };

        Self { kind,
               lexeme: lexeme.to_string(),
               literal,
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "type: {} lexeme: {} literal: ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => write!(f, "null"),
        }
    }
}

/// Scans source text into tokens.
///
/// The returned list always ends with exactly one `Eof` token. Scanning stops
/// at the first lexical error.
///
/// # Errors
/// Returns [`LexicalError::UnexpectedCharacter`] for a character that cannot
/// start a token and [`LexicalError::UnterminatedString`] for a string still
/// open at the end of input.
///
/// # Example
/// ```
/// use tinylox::interpreter::lexer::{TokenKind, scan_tokens};
///
/// let kinds: Vec<TokenKind> = scan_tokens("1 == 2").unwrap()
///                                                  .iter()
///                                                  .map(|t| t.kind)
///                                                  .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::EqualEqual, TokenKind::Number, TokenKind::Eof]);
/// ```
pub fn scan_tokens(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(LexFault::UnterminatedString) => {
                return Err(LexicalError::UnterminatedString { line });
            },
            Err(LexFault::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexicalError::UnexpectedCharacter { character, line });
            },
        }
    }

    tokens.push(Token { kind:    TokenKind::Eof,
                        lexeme:  String::new(),
                        literal: None,
                        line:    lexer.extras.line, });
    Ok(tokens)
}
