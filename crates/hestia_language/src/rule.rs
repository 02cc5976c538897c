//! Rule text: `condition -> action`.

use hestia_foundation::{Error, Result};

/// Separator between a rule's condition and its action.
pub const ARROW: &str = "->";

/// A rule as written, before its condition is parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleDecl {
    /// Trimmed condition text; the rule table is keyed by this.
    pub condition_text: String,
    /// Trimmed action identifier.
    pub action_id: String,
}

/// Splits rule text on the first `->`.
///
/// # Errors
/// Returns [`hestia_foundation::ErrorKind::InvalidRuleSyntax`] if the
/// arrow is missing or either side is empty.
pub fn parse_rule(text: &str) -> Result<RuleDecl> {
    let Some((condition, action)) = text.split_once(ARROW) else {
        return Err(Error::invalid_rule(text.trim()));
    };

    let condition = condition.trim();
    let action = action.trim();
    if condition.is_empty() || action.is_empty() {
        return Err(Error::invalid_rule(text.trim()));
    }

    Ok(RuleDecl {
        condition_text: condition.to_string(),
        action_id: action.to_string(),
    })
}
