// tests/lexer_tests.rs

use quanta_lang::ast::TokenKind;
use quanta_lang::lexer::Lexer;

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
        (".", TokenKind::Dot),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),
        (":", TokenKind::Colon),
        ("?", TokenKind::Question),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("%", TokenKind::Percent),
        ("<", TokenKind::Lt),
        (">", TokenKind::Gt),
        ("!", TokenKind::Not),
        ("=", TokenKind::Assign),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            kinds(input),
            vec![expected, TokenKind::Eof],
            "Failed for input: {}",
            input
        );
    }
}

// ============================================================================
// Multi Character Operators
// ============================================================================

#[test]
fn test_multi_char_tokens() {
    let test_cases = vec![
        ("==", TokenKind::EqEq),
        ("!=", TokenKind::NotEq),
        ("<=", TokenKind::LtEq),
        (">=", TokenKind::GtEq),
        ("&&", TokenKind::AndAnd),
        ("||", TokenKind::OrOr),
        ("->", TokenKind::Arrow),
        ("<->", TokenKind::Iff),
        ("**", TokenKind::StarStar),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            kinds(input),
            vec![expected, TokenKind::Eof],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_multi_char_vs_single_char() {
    assert_eq!(
        kinds("< ="),
        vec![TokenKind::Lt, TokenKind::Assign, TokenKind::Eof]
    );
    assert_eq!(kinds("<="), vec![TokenKind::LtEq, TokenKind::Eof]);
    assert_eq!(
        kinds("< <="),
        vec![TokenKind::Lt, TokenKind::LtEq, TokenKind::Eof]
    );
    // '<-' without the closing '>' is less-than followed by minus
    assert_eq!(
        kinds("<- 1"),
        vec![
            TokenKind::Lt,
            TokenKind::Minus,
            TokenKind::Integer(1),
            TokenKind::Eof
        ]
    );
    assert_eq!(
        kinds("* **"),
        vec![TokenKind::Star, TokenKind::StarStar, TokenKind::Eof]
    );
}

#[test]
fn test_bare_ampersand_is_invalid() {
    let result = Lexer::tokenize("true & false");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("'&&'"));
}

#[test]
fn test_bare_pipe_is_invalid() {
    let result = Lexer::tokenize("true | false");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("'||'"));
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keywords() {
    let test_cases = vec![
        ("forall", TokenKind::Forall),
        ("exists", TokenKind::Exists),
        ("in", TokenKind::In),
        ("if", TokenKind::If),
        ("then", TokenKind::Then),
        ("else", TokenKind::Else),
        ("true", TokenKind::Boolean(true)),
        ("false", TokenKind::Boolean(false)),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            kinds(input),
            vec![expected, TokenKind::Eof],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_keywords_vs_identifiers() {
    assert_eq!(
        kinds("forall_x"),
        vec![TokenKind::Identifier("forall_x".to_string()), TokenKind::Eof]
    );
    assert_eq!(
        kinds("existsy"),
        vec![TokenKind::Identifier("existsy".to_string()), TokenKind::Eof]
    );
    // Keywords are case-sensitive
    assert_eq!(
        kinds("Forall"),
        vec![TokenKind::Identifier("Forall".to_string()), TokenKind::Eof]
    );
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_variables() {
    assert_eq!(
        kinds("$x $file_name $_tmp"),
        vec![
            TokenKind::Variable("x".to_string()),
            TokenKind::Variable("file_name".to_string()),
            TokenKind::Variable("_tmp".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_invalid_variable() {
    let result = Lexer::tokenize("$1");
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.message.contains("'$'"));
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 1);

    assert!(Lexer::tokenize("$ x").is_err());
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_integers_and_floats_split_at_lex_time() {
    assert_eq!(kinds("42"), vec![TokenKind::Integer(42), TokenKind::Eof]);
    assert_eq!(kinds("0"), vec![TokenKind::Integer(0), TokenKind::Eof]);
    assert_eq!(kinds("3.14"), vec![TokenKind::Float(3.14), TokenKind::Eof]);
    assert_eq!(kinds("10.0"), vec![TokenKind::Float(10.0), TokenKind::Eof]);
}

#[test]
fn test_trailing_dot_is_not_a_float() {
    // A dot with no following digit stays a separate token
    assert_eq!(
        kinds("5."),
        vec![TokenKind::Integer(5), TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(
        kinds("1.2.3"),
        vec![
            TokenKind::Float(1.2),
            TokenKind::Dot,
            TokenKind::Integer(3),
            TokenKind::Eof
        ]
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_strings() {
    assert_eq!(
        kinds("\"hello\""),
        vec![TokenKind::Str("hello".to_string()), TokenKind::Eof]
    );
    assert_eq!(
        kinds("'world'"),
        vec![TokenKind::Str("world".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        kinds("\"a\\nb\\tc\\rd\""),
        vec![TokenKind::Str("a\nb\tc\rd".to_string()), TokenKind::Eof]
    );
    assert_eq!(
        kinds("\"quote: \\\"\""),
        vec![TokenKind::Str("quote: \"".to_string()), TokenKind::Eof]
    );
    assert_eq!(
        kinds("'it\\'s'"),
        vec![TokenKind::Str("it's".to_string()), TokenKind::Eof]
    );
    assert_eq!(
        kinds("\"back\\\\slash\""),
        vec![TokenKind::Str("back\\slash".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_unterminated_string() {
    let err = Lexer::tokenize("\"abc").unwrap_err();
    assert!(err.message.contains("Unterminated string"));
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 1);
}

#[test]
fn test_invalid_escape() {
    let err = Lexer::tokenize("\"a\\zb\"").unwrap_err();
    assert!(err.message.contains("Invalid escape"));
}

// ============================================================================
// Comments and Newlines
// ============================================================================

#[test]
fn test_line_comments() {
    assert_eq!(
        kinds("1 # a comment\n2"),
        vec![
            TokenKind::Integer(1),
            TokenKind::Newline,
            TokenKind::Integer(2),
            TokenKind::Eof
        ]
    );
    // Comment running to end of input
    assert_eq!(
        kinds("1 # done"),
        vec![TokenKind::Integer(1), TokenKind::Eof]
    );
}

#[test]
fn test_newline_tokens() {
    assert_eq!(
        kinds("1\n\n2"),
        vec![
            TokenKind::Integer(1),
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Integer(2),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_positions() {
    let tokens = Lexer::tokenize("1\n  2").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Integer(1));
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[2].kind, TokenKind::Integer(2));
    assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
}

// ============================================================================
// Whole Expressions
// ============================================================================

#[test]
fn test_range_check_expression() {
    assert_eq!(
        kinds("$x >= 1 && $x <= 10"),
        vec![
            TokenKind::Variable("x".to_string()),
            TokenKind::GtEq,
            TokenKind::Integer(1),
            TokenKind::AndAnd,
            TokenKind::Variable("x".to_string()),
            TokenKind::LtEq,
            TokenKind::Integer(10),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_implication_expression() {
    assert_eq!(
        kinds("true -> false <-> true"),
        vec![
            TokenKind::Boolean(true),
            TokenKind::Arrow,
            TokenKind::Boolean(false),
            TokenKind::Iff,
            TokenKind::Boolean(true),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_unexpected_character() {
    let err = Lexer::tokenize("1 ^ 2").unwrap_err();
    assert!(err.message.contains("Unexpected character '^'"));
    assert_eq!(err.column, 3);
}

#[test]
fn test_qualified_call_tokens() {
    assert_eq!(
        kinds("string.length(\"ab\")"),
        vec![
            TokenKind::Identifier("string".to_string()),
            TokenKind::Dot,
            TokenKind::Identifier("length".to_string()),
            TokenKind::LParen,
            TokenKind::Str("ab".to_string()),
            TokenKind::RParen,
            TokenKind::Eof
        ]
    );
}
