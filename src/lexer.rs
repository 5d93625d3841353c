use crate::ast::{Token, TokenKind};

/// Error raised on malformed input at the token level.
#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lex error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Materialize the whole token stream, terminating `Eof` included.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        if self.current_char() == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    fn error_at(&self, line: usize, column: usize, message: impl Into<String>) -> LexError {
        LexError {
            message: message.into(),
            line,
            column,
        }
    }

    /// Skip spaces, tabs, carriage returns and `#` line comments. Newlines
    /// are significant and stay in the stream.
    fn skip_whitespace(&mut self) {
        loop {
            match self.current_char() {
                Some(ch) if ch.is_whitespace() && ch != '\n' => self.advance(),
                Some('#') => {
                    while let Some(ch) = self.current_char() {
                        if ch == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char, line: usize, column: usize) -> Result<String, LexError> {
        let mut result = String::new();
        self.advance(); // consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance(); // consume backslash
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\'') => result.push('\''),
                        Some('\\') => result.push('\\'),
                        Some(other) => {
                            return Err(self.error_at(
                                self.line,
                                self.column,
                                format!("Invalid escape sequence: \\{}", other),
                            ));
                        }
                        None => {
                            return Err(self.error_at(
                                line,
                                column,
                                "Unterminated string: unexpected end of input after backslash",
                            ));
                        }
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(self.error_at(line, column, "Unterminated string: missing closing quote"))
    }

    fn read_number(&mut self) -> TokenKind {
        let mut number = String::new();
        let mut is_float = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_float
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_float = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if is_float {
            TokenKind::Float(number.parse::<f64>().unwrap_or(f64::MAX))
        } else {
            // Digit runs longer than i64 fall back to a float token
            match number.parse::<i64>() {
                Ok(n) => TokenKind::Integer(n),
                Err(_) => TokenKind::Float(number.parse::<f64>().unwrap_or(f64::MAX)),
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);

        let kind = match self.current_char() {
            None => TokenKind::Eof,
            Some('\n') => {
                self.advance();
                TokenKind::Newline
            }
            Some('$') => {
                if self
                    .peek_char(1)
                    .is_some_and(|c| c.is_alphabetic() || c == '_')
                {
                    self.advance();
                    TokenKind::Variable(self.read_identifier())
                } else {
                    return Err(self.error_at(
                        line,
                        column,
                        "Invalid variable: '$' must be followed by a name",
                    ));
                }
            }
            Some('&') => {
                if self.peek_char(1) == Some('&') {
                    self.advance();
                    self.advance();
                    TokenKind::AndAnd
                } else {
                    return Err(self.error_at(
                        line,
                        column,
                        "Unexpected '&' (did you mean '&&'?)",
                    ));
                }
            }
            Some('|') => {
                if self.peek_char(1) == Some('|') {
                    self.advance();
                    self.advance();
                    TokenKind::OrOr
                } else {
                    return Err(self.error_at(
                        line,
                        column,
                        "Unexpected '|' (did you mean '||'?)",
                    ));
                }
            }
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    TokenKind::EqEq
                } else {
                    self.advance();
                    TokenKind::Assign
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    TokenKind::NotEq
                } else {
                    self.advance();
                    TokenKind::Not
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    TokenKind::GtEq
                } else {
                    self.advance();
                    TokenKind::Gt
                }
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    TokenKind::LtEq
                } else if self.peek_char(1) == Some('-') && self.peek_char(2) == Some('>') {
                    self.advance();
                    self.advance();
                    self.advance();
                    TokenKind::Iff
                } else {
                    self.advance();
                    TokenKind::Lt
                }
            }
            Some('-') => {
                if self.peek_char(1) == Some('>') {
                    self.advance();
                    self.advance();
                    TokenKind::Arrow
                } else {
                    self.advance();
                    TokenKind::Minus
                }
            }
            Some('+') => {
                self.advance();
                TokenKind::Plus
            }
            Some('*') => {
                if self.peek_char(1) == Some('*') {
                    self.advance();
                    self.advance();
                    TokenKind::StarStar
                } else {
                    self.advance();
                    TokenKind::Star
                }
            }
            Some('/') => {
                self.advance();
                TokenKind::Slash
            }
            Some('%') => {
                self.advance();
                TokenKind::Percent
            }
            Some('(') => {
                self.advance();
                TokenKind::LParen
            }
            Some(')') => {
                self.advance();
                TokenKind::RParen
            }
            Some('{') => {
                self.advance();
                TokenKind::LBrace
            }
            Some('}') => {
                self.advance();
                TokenKind::RBrace
            }
            Some('[') => {
                self.advance();
                TokenKind::LBracket
            }
            Some(']') => {
                self.advance();
                TokenKind::RBracket
            }
            Some('.') => {
                self.advance();
                TokenKind::Dot
            }
            Some(',') => {
                self.advance();
                TokenKind::Comma
            }
            Some(';') => {
                self.advance();
                TokenKind::Semicolon
            }
            Some(':') => {
                self.advance();
                TokenKind::Colon
            }
            Some('?') => {
                self.advance();
                TokenKind::Question
            }
            Some('"') => TokenKind::Str(self.read_string('"', line, column)?),
            Some('\'') => TokenKind::Str(self.read_string('\'', line, column)?),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();

                match ident.as_str() {
                    "forall" => TokenKind::Forall,
                    "exists" => TokenKind::Exists,
                    "in" => TokenKind::In,
                    "if" => TokenKind::If,
                    "then" => TokenKind::Then,
                    "else" => TokenKind::Else,
                    "true" => TokenKind::Boolean(true),
                    "false" => TokenKind::Boolean(false),
                    _ => TokenKind::Identifier(ident),
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some(ch) => {
                return Err(self.error_at(line, column, format!("Unexpected character '{}'", ch)));
            }
        };

        Ok(Token::new(kind, line, column))
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("forall exists in if then else true false");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Forall);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Exists);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::In);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::If);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Then);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Else);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Boolean(true));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Boolean(false));
}

#[test]
fn test_quantifier_tokens() {
    let mut lexer = Lexer::new("forall $x in [1, 2]: $x > 0");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Forall);
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Variable("x".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::In);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LBracket);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(1));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Comma);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(2));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::RBracket);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Colon);
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Variable("x".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Gt);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(0));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}
