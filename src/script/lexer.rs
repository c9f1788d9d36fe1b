//! Lexer (tokenizer) for workspace scripts
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Line breaks are significant and become [`TokenKind::Newline`],
//! except inside brackets and after a `\` line continuation. `#` starts a
//! comment that runs to the end of the line.
//!
//! Operators and punctuation are read from the [`SYMBOLS`] table, longest
//! spelling first.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// Operators and punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash,
    Percent,
    EqEq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    Assign,
    Dot,
    Colon,
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Spelling of every [`Symbol`]; two-character spellings come first
pub const SYMBOLS: [(&str, Symbol); 23] = [
    ("//", Symbol::SlashSlash),
    ("==", Symbol::EqEq),
    ("!=", Symbol::NotEq),
    ("<=", Symbol::Le),
    (">=", Symbol::Ge),
    ("+", Symbol::Plus),
    ("-", Symbol::Minus),
    ("*", Symbol::Star),
    ("/", Symbol::Slash),
    ("%", Symbol::Percent),
    ("<", Symbol::Lt),
    (">", Symbol::Gt),
    ("=", Symbol::Assign),
    (".", Symbol::Dot),
    (":", Symbol::Colon),
    (",", Symbol::Comma),
    (";", Symbol::Semicolon),
    ("(", Symbol::LParen),
    (")", Symbol::RParen),
    ("[", Symbol::LBracket),
    ("]", Symbol::RBracket),
    ("{", Symbol::LBrace),
    ("}", Symbol::RBrace),
];

impl Symbol {
    pub fn text(self) -> &'static str {
        SYMBOLS
            .iter()
            .find(|(_, symbol)| *symbol == self)
            .map_or("?", |(text, _)| *text)
    }

    /// Opening bracket a closing bracket pairs with
    fn opener(self) -> Option<Symbol> {
        match self {
            Symbol::RParen => Some(Symbol::LParen),
            Symbol::RBracket => Some(Symbol::LBracket),
            Symbol::RBrace => Some(Symbol::LBrace),
            _ => None,
        }
    }

    fn is_opener(self) -> bool {
        matches!(self, Symbol::LParen | Symbol::LBracket | Symbol::LBrace)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    None,
    True,
    False,
    Class,
    Del,
}

const KEYWORDS: [(&str, Keyword); 5] = [
    ("None", Keyword::None),
    ("True", Keyword::True),
    ("False", Keyword::False),
    ("class", Keyword::Class),
    ("del", Keyword::Del),
];

impl Keyword {
    fn from_word(word: &str) -> Option<Keyword> {
        KEYWORDS
            .iter()
            .find(|(text, _)| *text == word)
            .map(|(_, keyword)| *keyword)
    }

    pub fn text(self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, keyword)| *keyword == self)
            .map_or("?", |(text, _)| *text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Float(f64),
    Str(String),
    Name(String),
    Keyword(Keyword),
    Symbol(Symbol),
    Newline,
    Eof,
}

impl TokenKind {
    /// Statement separators
    pub fn ends_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Eof | TokenKind::Symbol(Symbol::Semicolon)
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "int literal {}", n),
            TokenKind::Float(x) => write!(f, "float literal {}", x),
            TokenKind::Str(s) => write!(f, "string literal {:?}", s),
            TokenKind::Name(name) => write!(f, "identifier '{}'", name),
            TokenKind::Keyword(keyword) => write!(f, "'{}'", keyword.text()),
            TokenKind::Symbol(symbol) => write!(f, "'{}'", symbol.text()),
            TokenKind::Newline => write!(f, "end of line"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token and the position of its first character
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Lexer error at {location}: {message}")]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl LexError {
    fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        LexError {
            message: message.into(),
            location,
        }
    }
}

pub struct Lexer {
    chars: Vec<char>,
    offset: usize,
    line: usize,
    column: usize,
    /// Opening brackets not yet closed
    open_brackets: Vec<Symbol>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            chars: input.chars().collect(),
            offset: 0,
            line: 1,
            column: 1,
            open_brackets: Vec::new(),
        }
    }

    /// Every token of the input, the last one being [`TokenKind::Eof`]
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_blanks()?;
            let location = self.location();
            let Some(ch) = self.char_at(0) else {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    location,
                });
                return Ok(tokens);
            };
            let kind = match ch {
                '\n' => {
                    self.bump();
                    TokenKind::Newline
                }
                '"' | '\'' => self.string(location)?,
                _ if ch.is_ascii_digit() => self.number(location)?,
                _ if ch.is_ascii_alphabetic() || ch == '_' => self.word(),
                _ => TokenKind::Symbol(self.symbol(location)?),
            };
            tokens.push(Token { kind, location });
        }
    }

    /// Brackets still open at the point the lexer stopped
    pub fn unclosed_brackets(&self) -> usize {
        self.open_brackets.len()
    }

    fn symbol(&mut self, location: SourceLocation) -> Result<Symbol, LexError> {
        let Some(&(text, symbol)) = SYMBOLS.iter().find(|(text, _)| self.looking_at(text)) else {
            let ch = self.char_at(0).unwrap_or(' ');
            return Err(LexError::new(format!("Unexpected character: '{}'", ch), location));
        };
        for _ in text.chars() {
            self.bump();
        }

        if symbol.is_opener() {
            self.open_brackets.push(symbol);
        } else if let Some(opener) = symbol.opener() {
            match self.open_brackets.pop() {
                Some(open) if open == opener => {}
                Some(open) => {
                    let message =
                        format!("Closing '{}' does not match '{}'", text, open.text());
                    return Err(LexError::new(message, location));
                }
                None => return Err(LexError::new(format!("Unmatched '{}'", text), location)),
            }
        }
        Ok(symbol)
    }

    /// Quoted string with `\n \t \r \0 \\ \' \"` escapes, on one line
    fn string(&mut self, location: SourceLocation) -> Result<TokenKind, LexError> {
        let quote = self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => {
                    return Err(LexError::new("Unterminated string literal", location))
                }
                Some(ch) if Some(ch) == quote => return Ok(TokenKind::Str(text)),
                Some('\\') => {
                    let escape_at = self.location();
                    let escaped = match self.bump() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('0') => '\0',
                        Some(ch @ ('\\' | '\'' | '"')) => ch,
                        Some(other) => {
                            let message = format!("Unknown escape sequence: \\{}", other);
                            return Err(LexError::new(message, escape_at));
                        }
                        None => return Err(LexError::new("Unterminated string literal", location)),
                    };
                    text.push(escaped);
                }
                Some(ch) => text.push(ch),
            }
        }
    }

    /// Integer, or a float when a `.` is followed by a digit
    fn number(&mut self, location: SourceLocation) -> Result<TokenKind, LexError> {
        let mut digits = self.take_while(|ch| ch.is_ascii_digit());
        let fraction = self.char_at(0) == Some('.')
            && self.char_at(1).is_some_and(|ch| ch.is_ascii_digit());
        if !fraction {
            return digits.parse().map(TokenKind::Int).map_err(|_| {
                LexError::new(format!("Integer literal out of range: {}", digits), location)
            });
        }
        self.bump();
        digits.push('.');
        digits.push_str(&self.take_while(|ch| ch.is_ascii_digit()));
        digits
            .parse()
            .map(TokenKind::Float)
            .map_err(|_| LexError::new(format!("Invalid float literal: {}", digits), location))
    }

    fn word(&mut self) -> TokenKind {
        let word = self.take_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        match Keyword::from_word(&word) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Name(word),
        }
    }

    /// Skip spaces, comments, line continuations and newlines inside brackets
    fn skip_blanks(&mut self) -> Result<(), LexError> {
        loop {
            match self.char_at(0) {
                Some(' ' | '\t' | '\r') => {
                    self.bump();
                }
                Some('\n') if !self.open_brackets.is_empty() => {
                    self.bump();
                }
                Some('#') => {
                    self.take_while(|ch| ch != '\n');
                }
                Some('\\') => {
                    let location = self.location();
                    self.bump();
                    if self.looking_at("\r\n") {
                        self.bump();
                    }
                    if self.bump() != Some('\n') {
                        return Err(LexError::new(
                            "Unexpected character after line continuation",
                            location,
                        ));
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(ch) = self.char_at(0).filter(|ch| keep(*ch)) {
            taken.push(ch);
            self.bump();
        }
        taken
    }

    fn looking_at(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(offset, ch)| self.char_at(offset) == Some(ch))
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.offset + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.char_at(0)?;
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn sym(symbol: Symbol) -> TokenKind {
        TokenKind::Symbol(symbol)
    }

    #[test]
    fn test_list_assignment() {
        assert_eq!(
            kinds("arr = [1, 2.5, 'x']"),
            [
                TokenKind::Name("arr".into()),
                sym(Symbol::Assign),
                sym(Symbol::LBracket),
                TokenKind::Int(1),
                sym(Symbol::Comma),
                TokenKind::Float(2.5),
                sym(Symbol::Comma),
                TokenKind::Str("x".into()),
                sym(Symbol::RBracket),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_longest_symbol_wins() {
        assert_eq!(
            kinds("// / == != <= >= < > ="),
            [
                sym(Symbol::SlashSlash),
                sym(Symbol::Slash),
                sym(Symbol::EqEq),
                sym(Symbol::NotEq),
                sym(Symbol::Le),
                sym(Symbol::Ge),
                sym(Symbol::Lt),
                sym(Symbol::Gt),
                sym(Symbol::Assign),
                TokenKind::Eof,
            ]
        );
        let err = Lexer::new("a ! b").tokenize().unwrap_err();
        assert_eq!(err.message, "Unexpected character: '!'");
    }

    #[test]
    fn test_newlines_inside_brackets_are_skipped() {
        let tokens = Lexer::new("x = [1,\n 2]\ny = 3 # note\n").tokenize().unwrap();
        let newlines = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Newline)
            .count();
        assert_eq!(newlines, 2);
        assert_eq!(tokens[8].location, SourceLocation::new(3, 1));
    }

    #[test]
    fn test_line_continuation() {
        assert!(!kinds("x = 1 + \\\n 2").contains(&TokenKind::Newline));
        assert!(Lexer::new("x = 1 \\ 2").tokenize().is_err());
    }

    #[test]
    fn test_unbalanced_brackets() {
        let mut lexer = Lexer::new("f(1, [2");
        lexer.tokenize().unwrap();
        assert_eq!(lexer.unclosed_brackets(), 2);

        let err = Lexer::new("x)").tokenize().unwrap_err();
        assert_eq!(err.to_string(), "Lexer error at line 1, column 2: Unmatched ')'");
        let err = Lexer::new("(]").tokenize().unwrap_err();
        assert_eq!(err.message, "Closing ']' does not match '('");
    }

    #[test]
    fn test_strings_and_keywords() {
        assert_eq!(
            kinds(r#"del "a\"b" None True"#),
            [
                TokenKind::Keyword(Keyword::Del),
                TokenKind::Str("a\"b".into()),
                TokenKind::Keyword(Keyword::None),
                TokenKind::Keyword(Keyword::True),
                TokenKind::Eof,
            ]
        );
        let err = Lexer::new("s = 'open").tokenize().unwrap_err();
        assert_eq!(err.message, "Unterminated string literal");
        assert_eq!(err.location, SourceLocation::new(1, 5));
    }
}
