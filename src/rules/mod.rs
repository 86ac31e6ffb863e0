mod fro;
pub mod matchers;

use crate::corpus::Row;
use crate::error::{CorpusGuardError, Result};

/// How seriously a contextual-rule violation is reported.
///
/// Contextual rules are advisory either way: neither severity contributes to
/// the hard error count that decides the overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

/// A built-in, code-defined constraint that may inspect neighboring rows.
///
/// `check` returning `false` means the rule's expectation was violated.
/// Implementations are stateless; context is passed explicitly.
pub trait ContextRule: std::fmt::Debug {
    /// Stable identifier, usable as a suppression scope.
    fn id(&self) -> &'static str;

    fn severity(&self) -> Severity;

    /// Message template; `{field}` placeholders are filled from the row.
    fn template(&self) -> &'static str;

    /// Whether this rule has anything to say about the given row.
    fn applies_to(&self, row: &Row) -> bool;

    /// Verify the expectation. `previous` and `following` hold up to five
    /// normalized rows on each side, both in file order (so the nearest
    /// preceding row is last in `previous`, the immediately following row is
    /// first in `following`).
    fn check(&self, row: &Row, previous: &[Row], following: &[Row]) -> bool;

    fn message(&self, row: &Row) -> String {
        interpolate(self.template(), row)
    }
}

/// Fill `{field}` placeholders in a template from the row's fields.
/// Unknown placeholders are left as-is.
#[must_use]
pub fn interpolate(template: &str, row: &Row) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        match rest.find('}') {
            Some(end) => {
                let name = &rest[1..end];
                match row.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[..=end]),
                }
                rest = &rest[end + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Ruleset identifiers known to this build.
pub const AVAILABLE_RULESETS: &[&str] = &["fro"];

/// Look up a contextual ruleset by identifier.
///
/// Rulesets are a static registry: each identifier maps to a fixed sequence
/// of rule implementations, evaluated in registration order.
///
/// # Errors
/// Returns a `Config` error if the identifier is unknown.
pub fn ruleset(id: &str) -> Result<Vec<Box<dyn ContextRule>>> {
    match id {
        "fro" => Ok(fro::rules()),
        other => Err(CorpusGuardError::Config(format!(
            "unknown ruleset '{other}' (available: {})",
            AVAILABLE_RULESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
