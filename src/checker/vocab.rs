use indexmap::{IndexMap, IndexSet};

use crate::rules::matchers;

/// Allowed-POS subset attached to a vocabulary entry.
///
/// Empty means "membership only, no cross-check declared for this key".
/// Entries may carry the trailing-`*` prefix wildcard.
pub type PosRestriction = IndexSet<String>;

/// A closed vocabulary with optional per-entry allowed-POS restrictions.
///
/// Entries ending in `*` are prefix patterns; the rest are exact. An empty
/// vocabulary means the category is not checked at all.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    exact: IndexMap<String, PosRestriction>,
    prefixes: Vec<(String, PosRestriction)>,
}

impl Vocabulary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: &str, restriction: PosRestriction) {
        match entry.strip_suffix('*') {
            Some(prefix) => self.prefixes.push((prefix.to_string(), restriction)),
            None => {
                self.exact.insert(entry.to_string(), restriction);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefixes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len() + self.prefixes.len()
    }

    /// Find the restriction of the entry matching `value`, exact entries
    /// first, then prefix entries in insertion order.
    #[must_use]
    pub fn lookup(&self, value: &str) -> Option<&PosRestriction> {
        if let Some(restriction) = self.exact.get(value) {
            return Some(restriction);
        }
        self.prefixes
            .iter()
            .find(|(prefix, _)| value.starts_with(prefix.as_str()))
            .map(|(_, restriction)| restriction)
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.lookup(value).is_some()
    }

    /// True if any entry declares a non-empty allowed-POS restriction.
    /// Computed once at load time to gate the cross-field check.
    #[must_use]
    pub fn has_restrictions(&self) -> bool {
        self.exact.values().any(|r| !r.is_empty())
            || self.prefixes.iter().any(|(_, r)| !r.is_empty())
    }
}

/// Check a POS value against a restriction set, honoring the trailing-`*`
/// wildcard on individual restriction entries.
#[must_use]
pub fn restriction_allows(restriction: &PosRestriction, pos: &str) -> bool {
    matchers::matches_any(pos, restriction.iter().map(String::as_str))
}

#[cfg(test)]
#[path = "vocab_tests.rs"]
mod tests;
