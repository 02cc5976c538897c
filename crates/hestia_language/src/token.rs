//! Token types for the grouped condition grammar.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token types for condition text.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `&`
    And,
    /// `|`
    Or,
    /// `!`
    Not,
    /// A fact name.
    Name(String),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Short description used in parse errors.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
            Self::And => "'&'".to_string(),
            Self::Or => "'|'".to_string(),
            Self::Not => "'!'".to_string(),
            Self::Name(name) => format!("name '{name}'"),
            Self::Eof => "end of input".to_string(),
        }
    }
}
