//! Condition expression trees.
//!
//! A [`Condition`] is evaluated against a [`FactSet`] under the closed-world
//! assumption: an atom is true iff its name is a member of the set.

use std::fmt;

use hestia_foundation::{Fact, FactSet};

/// A parsed boolean condition over facts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// True iff the fact is present.
    Atom(Fact),
    /// True iff every child is true. Empty is vacuously true.
    And(Vec<Condition>),
    /// True iff any child is true. Empty is vacuously false.
    Or(Vec<Condition>),
    /// True iff the child is false.
    Not(Box<Condition>),
}

impl Condition {
    /// Creates an atom condition.
    #[must_use]
    pub fn atom(name: impl AsRef<str>) -> Self {
        Self::Atom(Fact::new(name))
    }

    /// Negates a condition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Condition) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Evaluates this condition against a fact set.
    #[must_use]
    pub fn evaluate(&self, facts: &FactSet) -> bool {
        match self {
            Self::Atom(fact) => facts.contains(fact.as_str()),
            Self::And(children) => children.iter().all(|c| c.evaluate(facts)),
            Self::Or(children) => children.iter().any(|c| c.evaluate(facts)),
            Self::Not(inner) => !inner.evaluate(facts),
        }
    }

    /// Returns the distinct atom names referenced, in first-seen order.
    #[must_use]
    pub fn atoms(&self) -> Vec<&Fact> {
        let mut out = Vec::new();
        self.collect_atoms(&mut out);
        out
    }

    fn collect_atoms<'a>(&'a self, out: &mut Vec<&'a Fact>) {
        match self {
            Self::Atom(fact) => {
                if !out.contains(&fact) {
                    out.push(fact);
                }
            }
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.collect_atoms(out);
                }
            }
            Self::Not(inner) => inner.collect_atoms(out),
        }
    }

    /// Nesting depth of the tree (an atom has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Atom(_) => 1,
            Self::And(children) | Self::Or(children) => {
                1 + children.iter().map(Condition::depth).max().unwrap_or(0)
            }
            Self::Not(inner) => 1 + inner.depth(),
        }
    }
}

/// Renders condition text.
///
/// Parentheses are written only where precedence needs them: an `Or`
/// inside an `And`, or a compound condition under `!`. The output always
/// reparses to an equivalent condition under the grouped grammar. Text
/// without parentheses also reparses under the flat grammar, which reads
/// `(` and `)` as name characters.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(fact) => write!(f, "{fact}"),
            Self::And(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    match child {
                        Self::Or(_) => write!(f, "({child})")?,
                        _ => write!(f, "{child}")?,
                    }
                }
                Ok(())
            }
            Self::Or(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{child}")?;
                }
                Ok(())
            }
            Self::Not(inner) => match inner.as_ref() {
                Self::And(_) | Self::Or(_) => write!(f, "!({inner})"),
                _ => write!(f, "!{inner}"),
            },
        }
    }
}
