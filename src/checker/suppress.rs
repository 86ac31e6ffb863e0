use std::collections::HashMap;

/// Built-in vocabulary check categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lemma,
    Pos,
    Morph,
}

impl Category {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lemma => "lemma",
            Self::Pos => "POS",
            Self::Morph => "morph",
        }
    }
}

/// What a suppression entry applies to.
///
/// Built-in categories and rule identifiers are distinct variants, so a rule
/// that happens to be named like a category cannot collide with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SuppressionScope {
    Category(Category),
    Rule(String),
}

#[derive(Debug, Clone, Default)]
struct ScopeEntries {
    by_line: HashMap<usize, String>,
    by_value: HashMap<String, String>,
}

/// The ignore table: configured exceptions that silence otherwise-failing
/// checks, each carrying a human-readable justification.
///
/// A line-keyed entry silences any failure of its scope on that exact line;
/// a value-keyed entry silences every occurrence of that value, corpus-wide.
/// Built once at load time, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct IgnoreTable {
    scopes: HashMap<SuppressionScope, ScopeEntries>,
}

impl IgnoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_line(&mut self, scope: SuppressionScope, line: usize, comment: String) {
        self.scopes
            .entry(scope)
            .or_default()
            .by_line
            .insert(line, comment);
    }

    pub fn insert_value(&mut self, scope: SuppressionScope, value: String, comment: String) {
        self.scopes
            .entry(scope)
            .or_default()
            .by_value
            .insert(value, comment);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Resolve a would-be failure against the table.
    ///
    /// The line-number key always takes priority over the value key when
    /// both could apply. Returns the justification comment on a hit.
    #[must_use]
    pub fn resolve(
        &self,
        scope: &SuppressionScope,
        line: usize,
        value: Option<&str>,
    ) -> Option<&str> {
        let entries = self.scopes.get(scope)?;
        if let Some(comment) = entries.by_line.get(&line) {
            return Some(comment);
        }
        value
            .and_then(|v| entries.by_value.get(v))
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "suppress_tests.rs"]
mod tests;
