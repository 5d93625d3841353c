/// A lexical token together with its source position.
///
/// Line and column are 1-based and point at the first character of the
/// lexeme. Tokens are produced once by the lexer and consumed immediately
/// by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Token { kind, line, column }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 314
    /// ```
    Integer(i64),

    /// Floating-point literal (contains a decimal point)
    ///
    /// The numeric kind is decided here, at lex time; the evaluator never
    /// re-parses the lexeme.
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// 0.5
    /// ```
    Float(f64),

    /// String literal, single- or double-quoted
    ///
    /// Escapes `\n \t \r \\ \" \'` are resolved by the lexer.
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'item #1'
    /// ```
    Str(String),

    /// Boolean literal (`true` / `false`)
    Boolean(bool),

    // Names
    /// Variable reference (`$name`), stored without the sigil
    ///
    /// # Examples
    /// ```text
    /// $x
    /// $file_count
    /// ```
    Variable(String),

    /// Bare identifier: a function name segment or a bare reference
    ///
    /// # Examples
    /// ```text
    /// length
    /// math
    /// ```
    Identifier(String),

    // Keywords
    /// Universal quantifier keyword
    Forall,

    /// Existential quantifier keyword
    Exists,

    /// Quantifier domain separator
    In,

    /// Conditional keyword form: `if c then a else b`
    If,

    Then,

    Else,

    // Operators
    /// Logical AND (`&&`)
    AndAnd,

    /// Logical OR (`||`)
    OrOr,

    /// Logical NOT (`!`)
    Not,

    /// Equality (`==`)
    EqEq,

    /// Inequality (`!=`)
    NotEq,

    /// Greater than or equal (`>=`)
    GtEq,

    /// Less than or equal (`<=`)
    LtEq,

    /// Greater than (`>`)
    Gt,

    /// Less than (`<`)
    Lt,

    /// Bare `=`: recognized by the lexer, rejected by the parser
    Assign,

    /// Implication (`->`)
    Arrow,

    /// Biconditional (`<->`)
    Iff,

    Plus,

    Minus,

    Star,

    Slash,

    Percent,

    /// Exponentiation (`**`)
    StarStar,

    // Punctuation
    LParen,

    RParen,

    LBrace,

    RBrace,

    LBracket,

    RBracket,

    Dot,

    Comma,

    Semicolon,

    Colon,

    /// Ternary conditional (`c ? a : b`)
    Question,

    // Layout
    /// Explicit newline: a potential statement separator, otherwise
    /// skippable
    Newline,

    /// End of input
    Eof,
}
