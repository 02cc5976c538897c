//! Error types for the Hestia system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout Hestia.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Hestia operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid rule syntax error for the given rule text.
    #[must_use]
    pub fn invalid_rule(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRuleSyntax { text: text.into() })
    }

    /// Creates a condition parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates a semantic limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Creates an I/O error with a description of what failed.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this error reports an inference overflow.
    #[must_use]
    pub fn is_inference_overflow(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::LimitExceeded(SemanticLimit::InferenceDepth { .. })
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Rule text is missing the `condition -> action` shape.
    #[error("invalid rule syntax (expected 'condition -> action'): {text}")]
    InvalidRuleSyntax {
        /// The rejected rule text.
        text: String,
    },

    /// Condition text could not be parsed (grouped syntax only).
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// Semantic limit exceeded (kill switch triggered).
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),

    /// Reading a rule file or the terminal failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Semantic limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticLimit {
    /// Re-entrant inference went deeper than the configured bound.
    InferenceDepth {
        /// The configured limit.
        limit: usize,
        /// The fact whose assertion crossed the limit.
        fact: Option<String>,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InferenceDepth { limit, fact } => {
                write!(f, "inference overflow: depth {limit} exceeded")?;
                if let Some(fact) = fact {
                    write!(f, " while asserting {fact}")?;
                }
                Ok(())
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
