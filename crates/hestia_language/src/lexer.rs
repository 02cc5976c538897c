//! Lexer for the grouped condition grammar.
//!
//! The lexer converts condition text into a stream of tokens. A name is any
//! run of characters that is not whitespace, a parenthesis, or an operator.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for condition text.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '&' => {
                self.advance();
                TokenKind::And
            }
            '|' => {
                self.advance();
                TokenKind::Or
            }
            '!' => {
                self.advance();
                TokenKind::Not
            }
            _ => self.scan_name(),
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source, ending with an `Eof` token.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn scan_name(&mut self) -> TokenKind {
        let mut name = String::new();
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || is_delimiter(c) {
                break;
            }
            name.push(c);
            self.advance();
        }
        TokenKind::Name(name)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | '&' | '|' | '!')
}
