//! The rule table.
//!
//! Rules are keyed by their unparsed condition text and kept in insertion
//! order, which is also evaluation order. Re-adding a condition replaces
//! its action in place, so the rule keeps its original position.

use std::collections::HashMap;

use hestia_language::Condition;

use crate::action::Action;

/// A parsed rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    /// Condition text as written; the table key.
    pub condition_text: String,
    /// Parsed condition.
    pub condition: Condition,
    /// Action to fire when the condition holds.
    pub action: Action,
}

impl Rule {
    /// Creates a new rule.
    #[must_use]
    pub fn new(condition_text: impl Into<String>, condition: Condition, action: Action) -> Self {
        Self {
            condition_text: condition_text.into(),
            condition,
            action,
        }
    }
}

/// Insertion-ordered rules keyed by condition text.
///
/// Backed by `im::Vector`, so the inference engine can take an O(1)
/// snapshot before a pass and keep iterating it while actions re-enter
/// the agent.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: im::Vector<Rule>,
    index: HashMap<String, usize>,
}

impl RuleTable {
    /// Creates an empty rule table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule, or replaces the existing rule with the same
    /// condition text. Returns true if an existing rule was replaced.
    pub fn insert(&mut self, rule: Rule) -> bool {
        if let Some(&position) = self.index.get(&rule.condition_text) {
            self.rules.set(position, rule);
            true
        } else {
            self.index
                .insert(rule.condition_text.clone(), self.rules.len());
            self.rules.push_back(rule);
            false
        }
    }

    /// Looks a rule up by its condition text.
    #[must_use]
    pub fn get(&self, condition_text: &str) -> Option<&Rule> {
        self.index
            .get(condition_text)
            .and_then(|&position| self.rules.get(position))
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Returns a cheap snapshot of the rules in insertion order.
    #[must_use]
    pub fn all_rules(&self) -> im::Vector<Rule> {
        self.rules.clone()
    }

    /// Returns `(condition_text, action_id)` pairs in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.rules
            .iter()
            .map(|r| (r.condition_text.clone(), r.action.to_string()))
            .collect()
    }
}
