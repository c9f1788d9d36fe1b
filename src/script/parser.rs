//! Recursive descent parser for workspace scripts
//!
//! ```text
//! program    := { statement (NEWLINE | ';') }
//! statement  := 'class' IDENT [ '(' fields ')' ] [ ':' IDENT { ',' IDENT } ]
//!             | 'del' IDENT
//!             | expression [ '=' expression ]
//! expression := additive [ ('==' | '!=' | '<' | '<=' | '>' | '>=') additive ]
//! additive   := term { ('+' | '-') term }
//! term       := unary { ('*' | '/' | '//' | '%') unary }
//! unary      := '-' unary | postfix
//! postfix    := primary { call | '.' IDENT | '[' expression ']' }
//! ```

use super::ast::*;
use super::lexer::{Keyword, LexError, Lexer, Symbol, Token, TokenKind};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Parse error at {location}: {message}")]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Binary operators by precedence level, loosest first
static BINARY_LEVELS: [&[(Symbol, BinaryOp)]; 3] = [
    &[
        (Symbol::EqEq, BinaryOp::Eq),
        (Symbol::NotEq, BinaryOp::Ne),
        (Symbol::Lt, BinaryOp::Lt),
        (Symbol::Le, BinaryOp::Le),
        (Symbol::Gt, BinaryOp::Gt),
        (Symbol::Ge, BinaryOp::Ge),
    ],
    &[(Symbol::Plus, BinaryOp::Add), (Symbol::Minus, BinaryOp::Sub)],
    &[
        (Symbol::Star, BinaryOp::Mul),
        (Symbol::Slash, BinaryOp::Div),
        (Symbol::SlashSlash, BinaryOp::FloorDiv),
        (Symbol::Percent, BinaryOp::Mod),
    ],
];

/// Parse a whole script
pub fn parse(source: &str) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(source)?.parse_program()
}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        loop {
            while self.kind().ends_statement() && !self.is_at_end() {
                self.advance();
            }
            if self.is_at_end() {
                break;
            }
            statements.push(self.parse_statement()?);
            if !self.kind().ends_statement() {
                return Err(self.error_here("Expected end of statement"));
            }
        }

        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let location = self.current_location();

        if self.eat_keyword(Keyword::Class) {
            return self.parse_class_definition(location);
        }
        if self.eat_keyword(Keyword::Del) {
            let name = self.expect_name()?;
            return Ok(Stmt::Delete { name, location });
        }

        let expr = self.parse_expression()?;
        if !self.eat(Symbol::Assign) {
            return Ok(Stmt::Expr(expr));
        }
        let target = Self::assignment_target(expr).ok_or_else(|| ParseError {
            message: "Cannot assign to expression".to_string(),
            location,
        })?;
        let value = self.parse_expression()?;
        Ok(Stmt::Assign {
            target,
            value,
            location,
        })
    }

    fn assignment_target(expr: Expr) -> Option<Target> {
        match expr {
            Expr::Name(name, _) => Some(Target::Name(name)),
            Expr::Attribute { object, name, .. } => Some(Target::Attribute {
                object: *object,
                name,
            }),
            Expr::Index { object, index, .. } => Some(Target::Index {
                object: *object,
                index: *index,
            }),
            _ => None,
        }
    }

    /// Parse the rest of `class Name(field, field=default): method, method`
    fn parse_class_definition(&mut self, location: SourceLocation) -> Result<Stmt, ParseError> {
        let name = self.expect_name()?;

        let mut fields = Vec::new();
        if self.eat(Symbol::LParen) {
            while !self.at(Symbol::RParen) {
                let field = self.expect_name()?;
                let default = if self.eat(Symbol::Assign) {
                    Some(self.parse_expression()?)
                } else {
                    None
                };
                fields.push(FieldDecl {
                    name: field,
                    default,
                });
                if !self.eat(Symbol::Comma) {
                    break;
                }
            }
            self.expect(Symbol::RParen, "Expected ')' after class fields")?;
        }

        let mut methods = Vec::new();
        if self.eat(Symbol::Colon) {
            loop {
                methods.push(self.expect_name()?);
                if !self.eat(Symbol::Comma) {
                    break;
                }
            }
        }

        Ok(Stmt::ClassDef {
            name,
            fields,
            methods,
            location,
        })
    }

    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(0)
    }

    /// Left-associative chain of the operators at `level`
    fn parse_binary_level(&mut self, level: usize) -> Result<Expr, ParseError> {
        let Some(operators) = BINARY_LEVELS.get(level) else {
            return self.parse_unary();
        };
        let mut left = self.parse_binary_level(level + 1)?;

        while let Some(op) = operators
            .iter()
            .find(|(symbol, _)| self.at(*symbol))
            .map(|(_, op)| *op)
        {
            self.advance();
            let right = self.parse_binary_level(level + 1)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(Symbol::Minus) {
            let operand = self.parse_unary()?;
            return Ok(match operand {
                Expr::Int(n) => Expr::Int(n.wrapping_neg()),
                Expr::Float(x) => Expr::Float(-x),
                other => Expr::Negate(Box::new(other)),
            });
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            let location = self.current_location();
            if self.eat(Symbol::LParen) {
                let (args, kwargs) = self.parse_argument_list()?;
                expr = Expr::Call {
                    callee: Box::new(expr),
                    args,
                    kwargs,
                    location,
                };
            } else if self.eat(Symbol::Dot) {
                let name = self.expect_name()?;
                expr = Expr::Attribute {
                    object: Box::new(expr),
                    name,
                    location,
                };
            } else if self.eat(Symbol::LBracket) {
                let index = self.parse_expression()?;
                self.expect(Symbol::RBracket, "Expected ']' after index")?;
                expr = Expr::Index {
                    object: Box::new(expr),
                    index: Box::new(index),
                    location,
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Arguments after an opening `(`, through the closing `)`
    #[allow(clippy::type_complexity)]
    fn parse_argument_list(&mut self) -> Result<(Vec<Expr>, Vec<(String, Expr)>), ParseError> {
        let mut args = Vec::new();
        let mut kwargs = Vec::new();

        while !self.at(Symbol::RParen) {
            let is_keyword = matches!(self.kind(), TokenKind::Name(_))
                && self.tokens.get(self.position + 1).map(|t| &t.kind)
                    == Some(&TokenKind::Symbol(Symbol::Assign));
            if is_keyword {
                let name = self.expect_name()?;
                self.advance(); // '='
                kwargs.push((name, self.parse_expression()?));
            } else if !kwargs.is_empty() {
                return Err(self.error_here("Positional argument follows keyword argument"));
            } else {
                args.push(self.parse_expression()?);
            }
            if !self.eat(Symbol::Comma) {
                break;
            }
        }

        self.expect(Symbol::RParen, "Expected ')' after arguments")?;
        Ok((args, kwargs))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let location = self.current_location();
        let expr = match self.kind().clone() {
            TokenKind::Int(n) => Expr::Int(n),
            TokenKind::Float(x) => Expr::Float(x),
            TokenKind::Str(s) => Expr::Str(s),
            TokenKind::Name(name) => Expr::Name(name, location),
            TokenKind::Keyword(Keyword::None) => Expr::None,
            TokenKind::Keyword(Keyword::True) => Expr::Bool(true),
            TokenKind::Keyword(Keyword::False) => Expr::Bool(false),
            TokenKind::Symbol(Symbol::LParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(Symbol::RParen, "Expected ')' after expression")?;
                return Ok(inner);
            }
            TokenKind::Symbol(Symbol::LBracket) => {
                self.advance();
                return self.parse_list_literal();
            }
            TokenKind::Symbol(Symbol::LBrace) => {
                self.advance();
                return self.parse_dict_literal();
            }
            _ => return Err(self.error_here("Expected expression")),
        };
        self.advance();
        Ok(expr)
    }

    fn parse_list_literal(&mut self) -> Result<Expr, ParseError> {
        let mut items = Vec::new();
        while !self.at(Symbol::RBracket) {
            items.push(self.parse_expression()?);
            if !self.eat(Symbol::Comma) {
                break;
            }
        }
        self.expect(Symbol::RBracket, "Expected ']' after list items")?;
        Ok(Expr::List(items))
    }

    fn parse_dict_literal(&mut self) -> Result<Expr, ParseError> {
        let mut entries = Vec::new();
        while !self.at(Symbol::RBrace) {
            let key = self.parse_expression()?;
            self.expect(Symbol::Colon, "Expected ':' after dictionary key")?;
            let value = self.parse_expression()?;
            entries.push((key, value));
            if !self.eat(Symbol::Comma) {
                break;
            }
        }
        self.expect(Symbol::RBrace, "Expected '}' after dictionary entries")?;
        Ok(Expr::Dict(entries))
    }

    fn kind(&self) -> &TokenKind {
        &self.tokens[self.position].kind
    }

    fn at(&self, symbol: Symbol) -> bool {
        *self.kind() == TokenKind::Symbol(symbol)
    }

    fn eat(&mut self, symbol: Symbol) -> bool {
        let found = self.at(symbol);
        if found {
            self.advance();
        }
        found
    }

    fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        let found = *self.kind() == TokenKind::Keyword(keyword);
        if found {
            self.advance();
        }
        found
    }

    fn expect(&mut self, symbol: Symbol, message: &str) -> Result<(), ParseError> {
        if self.eat(symbol) {
            Ok(())
        } else {
            Err(self.error_here(message))
        }
    }

    fn expect_name(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Name(name) = self.kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.error_here("Expected identifier"))
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        *self.kind() == TokenKind::Eof
    }

    fn current_location(&self) -> SourceLocation {
        self.tokens[self.position].location
    }

    fn error_here(&self, message: &str) -> ParseError {
        ParseError {
            message: format!("{}, found {}", message, self.kind()),
            location: self.current_location(),
        }
    }
}
