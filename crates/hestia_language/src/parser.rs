//! The flat condition grammar.
//!
//! Rule conditions are parsed with a deliberately restricted two-level
//! grammar:
//!
//! ```text
//! condition := or-operand ('|' or-operand)*
//! or-operand := and-operand ('&' and-operand)*
//! and-operand := '!'* name
//! ```
//!
//! The text is split on every `|` first, each piece on every `&`, and a
//! run of leading `!` negates the rest of the operand when it is odd. There is no grouping:
//! parentheses are ordinary name characters. [`ConditionSyntax::Grouped`]
//! selects the richer grammar in [`crate::grouped`] instead.

use hestia_foundation::Result;

use crate::condition::Condition;
use crate::grouped::GroupedParser;

/// OR separator.
pub const OR: char = '|';
/// AND separator.
pub const AND: char = '&';
/// NOT prefix.
pub const NOT: char = '!';

/// Which condition grammar to parse rule text with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConditionSyntax {
    /// Split on `|`, then `&`, then `!` prefixes. Never fails.
    #[default]
    Flat,
    /// Recursive descent with parentheses.
    Grouped,
}

/// Parses condition text with the flat grammar.
///
/// Any input is accepted; every bare token becomes an atom. Operands left
/// empty by stray separators are dropped, so `"&"` is `And([])` and `"|"`
/// is `Or([])`.
#[must_use]
pub fn parse_condition(text: &str) -> Condition {
    let text = text.trim();
    if !text.contains(OR) {
        return parse_and(text);
    }

    let mut operands: Vec<Condition> = text
        .split(OR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_and)
        .collect();

    if operands.len() == 1 {
        operands.remove(0)
    } else {
        Condition::Or(operands)
    }
}

/// Parses condition text with the selected grammar.
///
/// # Errors
/// Returns a parse error if the grouped grammar rejects the text. The flat
/// grammar never fails.
pub fn parse_with(text: &str, syntax: ConditionSyntax) -> Result<Condition> {
    match syntax {
        ConditionSyntax::Flat => Ok(parse_condition(text)),
        ConditionSyntax::Grouped => GroupedParser::new(text).parse(),
    }
}

fn parse_and(text: &str) -> Condition {
    if !text.contains(AND) {
        return parse_operand(text);
    }

    let mut operands: Vec<Condition> = text
        .split(AND)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_operand)
        .collect();

    if operands.len() == 1 {
        operands.remove(0)
    } else {
        Condition::And(operands)
    }
}

/// A run of `!` prefixes negates by parity, so `!!a` is `a` and the
/// result is never more than one `Not` deep.
fn parse_operand(text: &str) -> Condition {
    let mut rest = text.trim();
    let mut negated = false;
    while let Some(inner) = rest.strip_prefix(NOT) {
        rest = inner.trim_start();
        negated = !negated;
    }

    let atom = Condition::atom(rest);
    if negated { Condition::not(atom) } else { atom }
}
