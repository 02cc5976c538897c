//! Facts and fact sets.
//!
//! A fact is an opaque, case-sensitive name. Membership in a [`FactSet`]
//! means the proposition is true; absence means false (closed world).
//!
//! [`FactSet`] wraps `im::OrdSet`, so clones are O(1) and iteration is
//! always in sorted order.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

/// A named boolean proposition.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fact(Arc<str>);

impl Fact {
    /// Creates a fact from its name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the fact name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fact({})", self.0)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fact {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Fact {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl Borrow<str> for Fact {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fact {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Persistent ordered set of facts.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FactSet(im::OrdSet<Fact>);

impl FactSet {
    /// Creates an empty fact set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Returns the number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no facts are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the named fact is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Adds a fact. Returns true if it was not already present.
    pub fn insert(&mut self, fact: Fact) -> bool {
        self.0.insert(fact).is_none()
    }

    /// Removes a fact. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.0.remove(name).is_some()
    }

    /// Iterates facts in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.0.iter()
    }

    /// Returns the fact names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|f| f.as_str().to_string()).collect()
    }

    /// Returns the facts in `self` that are not in `before`.
    #[must_use]
    pub fn added_since(&self, before: &FactSet) -> Vec<Fact> {
        self.0
            .iter()
            .filter(|f| !before.0.contains(f.as_str()))
            .cloned()
            .collect()
    }
}

impl fmt::Debug for FactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl FromIterator<Fact> for FactSet {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for FactSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(Fact::new).collect())
    }
}
