use std::str::FromStr;

use regex::Regex;

use crate::corpus::Row;
use crate::error::{CorpusGuardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// The out-field must match the out-pattern when the rule applies.
    AllowedOnly,
    /// The out-field must not match the out-pattern when the rule applies.
    Forbidden,
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "allowed_only" => Ok(Self::AllowedOnly),
            "forbidden" => Ok(Self::Forbidden),
            other => Err(format!(
                "unknown rule type '{other}' (expected allowed_only or forbidden)"
            )),
        }
    }
}

/// A user-authored conditional constraint linking two fields: when the
/// in-field matches the in-pattern, the out-pattern is required (or banned,
/// per [`RuleKind`]) on the out-field.
///
/// Patterns are compiled once here; rows never pay for recompilation.
#[derive(Debug, Clone)]
pub struct ManualRule {
    pub id: String,
    pub kind: RuleKind,
    pub cat_in: String,
    pub cat_out: String,
    pattern_in: Regex,
    pattern_out: Regex,
}

impl ManualRule {
    /// Build a rule, compiling both patterns.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if either regex does not compile.
    pub fn new(
        id: &str,
        kind: RuleKind,
        cat_in: &str,
        cat_out: &str,
        pattern_in: &str,
        pattern_out: &str,
    ) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|source| CorpusGuardError::InvalidPattern {
                rule: id.to_string(),
                pattern: pattern.to_string(),
                source,
            })
        };
        Ok(Self {
            id: id.to_string(),
            kind,
            cat_in: cat_in.to_string(),
            cat_out: cat_out.to_string(),
            pattern_in: compile(pattern_in)?,
            pattern_out: compile(pattern_out)?,
        })
    }

    /// Whether the gating condition holds for this row. A row without the
    /// in-field is never gated in.
    #[must_use]
    pub fn applies_to(&self, row: &Row) -> bool {
        row.get(&self.cat_in)
            .is_some_and(|value| self.pattern_in.is_match(value))
    }

    /// Whether the row violates this rule, assuming it applies.
    #[must_use]
    pub fn violated_by(&self, row: &Row) -> bool {
        let out_value = row.get(&self.cat_out).unwrap_or_default();
        let matched = self.pattern_out.is_match(out_value);
        match self.kind {
            RuleKind::AllowedOnly => !matched,
            RuleKind::Forbidden => matched,
        }
    }
}

/// Parse a manual-rule table: tab-separated, one header line, then one rule
/// per line as `id, type, cat_in, cat_out, pattern_in, pattern_out`.
///
/// # Errors
/// Returns a `Config` error on a short line or an unknown rule type, and
/// `InvalidPattern` on a bad regex.
pub fn parse_rules(content: &str) -> Result<Vec<ManualRule>> {
    let mut rules = Vec::new();
    for (line_no, line) in content.lines().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < 6 {
            return Err(CorpusGuardError::Config(format!(
                "manual rules line {}: found {} columns, expected 6",
                line_no + 1,
                cols.len()
            )));
        }
        let kind = RuleKind::from_str(cols[1]).map_err(|e| {
            CorpusGuardError::Config(format!("manual rules line {}: {e}", line_no + 1))
        })?;
        rules.push(ManualRule::new(
            cols[0], kind, cols[2], cols[3], cols[4], cols[5],
        )?);
    }
    Ok(rules)
}

#[cfg(test)]
#[path = "manual_tests.rs"]
mod tests;
