//! Condition expressions, condition parsers, and rule text for Hestia.
//!
//! This crate provides:
//! - [`Condition`] - Boolean expression tree over facts
//! - [`parse_condition`] - The flat two-level condition grammar
//! - [`GroupedParser`] - Optional grammar with parentheses
//! - [`parse_rule`] - `condition -> action` rule text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod condition;
pub mod grouped;
pub mod lexer;
pub mod parser;
pub mod rule;
pub mod span;
pub mod token;


pub use condition::Condition;
pub use grouped::GroupedParser;
pub use lexer::Lexer;
pub use parser::{ConditionSyntax, parse_condition, parse_with};
pub use rule::{RuleDecl, parse_rule};
pub use span::Span;
pub use token::{Token, TokenKind};
