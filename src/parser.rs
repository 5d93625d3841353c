use crate::ast::{BinOp, Expr, Program, QuantifierKind, Token, TokenKind, UnaryOp};

/// Error raised on a grammar violation.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser over a materialized token stream.
///
/// Precedence, lowest to highest binding: quantifier, conditional,
/// implication, `||`, `&&`, equality, comparison, additive,
/// multiplicative, power, unary, primary.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            let (line, column) = tokens
                .last()
                .map(|t| (t.line, t.column))
                .unwrap_or((1, 1));
            tokens.push(Token::new(TokenKind::Eof, line, column));
        }
        Parser { tokens, pos: 0 }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.kind()) == std::mem::discriminant(kind)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        let token = self.current();
        ParseError {
            message: message.into(),
            line: token.line,
            column: token.column,
        }
    }

    fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.check(&expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("Expected {:?}, got {:?}", expected, self.kind())))
        }
    }

    fn skip_newlines(&mut self) {
        while matches!(self.kind(), TokenKind::Newline) {
            self.advance();
        }
    }

    fn skip_separators(&mut self) {
        while matches!(self.kind(), TokenKind::Newline | TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Parse a complete program: a separator-delimited statement list.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        loop {
            self.skip_separators();
            if matches!(self.kind(), TokenKind::Eof) {
                break;
            }

            statements.push(self.parse_expression()?);

            match self.kind() {
                TokenKind::Newline | TokenKind::Semicolon | TokenKind::Eof => {}
                other => {
                    return Err(self.error(format!(
                        "Expected end of statement, got {:?}",
                        other
                    )));
                }
            }
        }

        Ok(Program { statements })
    }

    /// Parse a single expression and require that it consumes all input.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        self.skip_newlines();
        let expr = self.parse_expression()?;
        self.skip_separators();
        self.expect(TokenKind::Eof)?;
        Ok(expr)
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_quantifier()
    }

    /// `('forall' | 'exists') $var 'in' <domain> ':' <condition>`
    ///
    /// The domain parses at conditional precedence; the condition recurses
    /// into the full expression rule so quantifiers nest.
    fn parse_quantifier(&mut self) -> Result<Expr, ParseError> {
        let kind = match self.kind() {
            TokenKind::Forall => QuantifierKind::Forall,
            TokenKind::Exists => QuantifierKind::Exists,
            _ => return self.parse_conditional(),
        };
        let keyword = if kind == QuantifierKind::Forall {
            "forall"
        } else {
            "exists"
        };
        self.advance();
        self.skip_newlines();

        let var = match self.kind() {
            TokenKind::Variable(name) => name.clone(),
            other => {
                return Err(self.error(format!(
                    "Expected variable after '{}', got {:?}",
                    keyword, other
                )));
            }
        };
        self.advance();

        if !matches!(self.kind(), TokenKind::In) {
            return Err(self.error(format!(
                "Expected 'in' after quantifier variable, got {:?}",
                self.kind()
            )));
        }
        self.advance();
        self.skip_newlines();

        let domain = self.parse_conditional()?;

        if !matches!(self.kind(), TokenKind::Colon) {
            return Err(self.error(format!(
                "Expected ':' after quantifier domain, got {:?}",
                self.kind()
            )));
        }
        self.advance();
        self.skip_newlines();

        let condition = self.parse_expression()?;

        Ok(Expr::Quantifier {
            kind,
            var,
            domain: Box::new(domain),
            condition: Box::new(condition),
        })
    }

    /// Ternary `c ? a : b` or keyword form `if c then a else b`.
    fn parse_conditional(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.kind(), TokenKind::If) {
            self.advance();
            self.skip_newlines();
            let condition = self.parse_expression()?;

            if !matches!(self.kind(), TokenKind::Then) {
                return Err(self.error(format!(
                    "Expected 'then' in conditional, got {:?}",
                    self.kind()
                )));
            }
            self.advance();
            self.skip_newlines();
            let then_branch = self.parse_expression()?;
            self.skip_newlines();

            if !matches!(self.kind(), TokenKind::Else) {
                return Err(self.error(format!(
                    "Expected 'else' in conditional, got {:?}",
                    self.kind()
                )));
            }
            self.advance();
            self.skip_newlines();
            let else_branch = self.parse_expression()?;

            return Ok(Expr::Conditional {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            });
        }

        let condition = self.parse_implication()?;

        if matches!(self.kind(), TokenKind::Question) {
            self.advance();
            self.skip_newlines();
            let then_branch = self.parse_expression()?;
            self.skip_newlines();

            if !matches!(self.kind(), TokenKind::Colon) {
                return Err(self.error(format!(
                    "Expected ':' in conditional expression, got {:?}",
                    self.kind()
                )));
            }
            self.advance();
            self.skip_newlines();
            let else_branch = self.parse_expression()?;

            return Ok(Expr::Conditional {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            });
        }

        Ok(condition)
    }

    fn parse_implication(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_or()?;

        loop {
            let op = match self.kind() {
                TokenKind::Arrow => BinOp::Implies,
                TokenKind::Iff => BinOp::Iff,
                _ => break,
            };

            self.advance();
            let right = self.parse_or()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;

        while matches!(self.kind(), TokenKind::OrOr) {
            self.advance();
            let right = self.parse_and()?;

            left = Expr::Binary {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while matches!(self.kind(), TokenKind::AndAnd) {
            self.advance();
            let right = self.parse_equality()?;

            left = Expr::Binary {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        if let Some(op) = match self.kind() {
            TokenKind::EqEq => Some(BinOp::Equal),
            TokenKind::NotEq => Some(BinOp::NotEqual),
            _ => None,
        } {
            self.advance();
            let right = self.parse_comparison()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        if let Some(op) = match self.kind() {
            TokenKind::Lt => Some(BinOp::LessThan),
            TokenKind::Gt => Some(BinOp::GreaterThan),
            TokenKind::LtEq => Some(BinOp::LessEqual),
            TokenKind::GtEq => Some(BinOp::GreaterEqual),
            _ => None,
        } {
            self.advance();
            let right = self.parse_additive()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Subtract,
                _ => break,
            };

            self.advance();
            let right = self.parse_multiplicative()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_power()?;

        loop {
            let op = match self.kind() {
                TokenKind::Star => BinOp::Multiply,
                TokenKind::Slash => BinOp::Divide,
                TokenKind::Percent => BinOp::Modulo,
                _ => break,
            };

            self.advance();
            let right = self.parse_power()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// `**` is right-associative: `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_unary()?;

        if matches!(self.kind(), TokenKind::StarStar) {
            self.advance();
            self.skip_newlines();
            let right = self.parse_power()?;

            return Ok(Expr::Binary {
                op: BinOp::Power,
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        // Operand position: a newline here never separates statements
        self.skip_newlines();

        let op = match self.kind() {
            TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Negate),
            TokenKind::Plus => Some(UnaryOp::Plus),
            // A quantifier may sit unparenthesized on either side of a
            // logical operator
            TokenKind::Forall | TokenKind::Exists => return self.parse_quantifier(),
            _ => None,
        };

        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    /// Parse primary expressions: literals, `$variable`, `[...]`
    /// collections, `(...)` grouping, and identifiers (a call only when
    /// immediately followed by `(`).
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Integer(n) => {
                self.advance();
                Ok(Expr::Integer(n))
            }
            TokenKind::Float(n) => {
                self.advance();
                Ok(Expr::Float(n))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(Expr::Str(s))
            }
            TokenKind::Boolean(b) => {
                self.advance();
                Ok(Expr::Boolean(b))
            }
            TokenKind::Variable(name) => {
                self.advance();
                Ok(Expr::Variable(name))
            }
            TokenKind::LParen => {
                self.advance();
                self.skip_newlines();
                let expr = self.parse_expression()?;
                self.skip_newlines();
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::LBracket => {
                self.advance();
                self.parse_collection()
            }
            TokenKind::LBrace => Err(self.error(
                "Object literals are not supported; use a collection or a registered function",
            )),
            TokenKind::Identifier(name) => {
                self.advance();
                self.parse_name_or_call(name)
            }
            TokenKind::Eof => Err(self.error("Unexpected end of input while parsing expression")),
            other => Err(self.error(format!("Unexpected token in expression: {:?}", other))),
        }
    }

    fn parse_collection(&mut self) -> Result<Expr, ParseError> {
        let mut elements = Vec::new();

        self.skip_newlines();
        while !self.check(&TokenKind::RBracket) {
            elements.push(self.parse_expression()?);
            self.skip_newlines();

            if !self.check(&TokenKind::RBracket) {
                self.expect(TokenKind::Comma)?;
                self.skip_newlines();
            }
        }

        self.expect(TokenKind::RBracket)?;
        Ok(Expr::Collection(elements))
    }

    /// An identifier, possibly dot-qualified (`math.add`), becomes a call
    /// only when `(` follows; otherwise it is a bare reference resolved at
    /// evaluation time.
    fn parse_name_or_call(&mut self, first: String) -> Result<Expr, ParseError> {
        let mut name = first;

        while self.check(&TokenKind::Dot) {
            self.advance();
            let segment = match self.kind() {
                TokenKind::Identifier(s) => s.clone(),
                other => {
                    return Err(self.error(format!(
                        "Expected identifier after '.', got {:?}",
                        other
                    )));
                }
            };
            self.advance();
            name.push('.');
            name.push_str(&segment);
        }

        if self.check(&TokenKind::LParen) {
            self.advance();
            let args = self.parse_call_args()?;
            Ok(Expr::Call { name, args })
        } else {
            Ok(Expr::Variable(name))
        }
    }

    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        self.skip_newlines();
        while !self.check(&TokenKind::RParen) {
            args.push(self.parse_expression()?);
            self.skip_newlines();

            if !self.check(&TokenKind::RParen) {
                self.expect(TokenKind::Comma)?;
                self.skip_newlines();
            }
        }

        self.expect(TokenKind::RParen)?;
        Ok(args)
    }
}
