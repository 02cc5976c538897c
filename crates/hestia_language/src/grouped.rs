//! Recursive-descent parser for grouped conditions.
//!
//! This grammar is opt-in. It accepts parentheses and arbitrary nesting:
//!
//! ```text
//! expr    := and ('|' and)*
//! and     := unary ('&' unary)*
//! unary   := '!' unary | primary
//! primary := name | '(' expr ')'
//! ```
//!
//! Unlike the flat grammar it rejects malformed input with a positioned
//! parse error. `!` runs negate by parity, and parentheses nested deeper
//! than [`MAX_NESTING`] are rejected.

use hestia_foundation::{Error, Result};

use crate::condition::Condition;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Deepest parenthesis nesting accepted.
pub const MAX_NESTING: usize = 128;

/// Parser for the grouped condition grammar.
pub struct GroupedParser {
    tokens: Vec<Token>,
    pos: usize,
    nesting: usize,
}

impl GroupedParser {
    /// Creates a parser over the given condition text.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            tokens: Lexer::tokenize_all(source),
            pos: 0,
            nesting: 0,
        }
    }

    /// Parses the whole input as one condition.
    ///
    /// # Errors
    /// Returns a parse error on unbalanced parentheses, dangling operators,
    /// empty input, or trailing tokens.
    pub fn parse(mut self) -> Result<Condition> {
        let condition = self.parse_or()?;
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            return Err(Self::unexpected(token));
        }
        Ok(condition)
    }

    fn parse_or(&mut self) -> Result<Condition> {
        let mut operands = vec![self.parse_and()?];
        while self.peek().kind == TokenKind::Or {
            self.advance();
            operands.push(self.parse_and()?);
        }
        Ok(collapse(operands, Condition::Or))
    }

    fn parse_and(&mut self) -> Result<Condition> {
        let mut operands = vec![self.parse_unary()?];
        while self.peek().kind == TokenKind::And {
            self.advance();
            operands.push(self.parse_unary()?);
        }
        Ok(collapse(operands, Condition::And))
    }

    fn parse_unary(&mut self) -> Result<Condition> {
        let mut negated = false;
        while self.peek().kind == TokenKind::Not {
            self.advance();
            negated = !negated;
        }
        let operand = self.parse_primary()?;
        Ok(if negated { Condition::not(operand) } else { operand })
    }

    fn parse_primary(&mut self) -> Result<Condition> {
        let token = self.advance();
        match token.kind {
            TokenKind::Name(name) => Ok(Condition::atom(name)),
            TokenKind::LParen => {
                if self.nesting == MAX_NESTING {
                    return Err(Error::parse(
                        format!("parentheses nested deeper than {MAX_NESTING}"),
                        token.span.line,
                        token.span.column,
                    ));
                }
                self.nesting += 1;
                let inner = self.parse_or()?;
                self.nesting -= 1;
                let close = self.advance();
                if close.kind == TokenKind::RParen {
                    Ok(inner)
                } else {
                    Err(Error::parse(
                        format!("expected ')', found {}", close.kind.describe()),
                        close.span.line,
                        close.span.column,
                    ))
                }
            }
            _ => Err(Self::unexpected(&token)),
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn unexpected(token: &Token) -> Error {
        Error::parse(
            format!("unexpected {}", token.kind.describe()),
            token.span.line,
            token.span.column,
        )
    }
}

fn collapse(mut operands: Vec<Condition>, wrap: fn(Vec<Condition>) -> Condition) -> Condition {
    if operands.len() == 1 {
        operands.remove(0)
    } else {
        wrap(operands)
    }
}
