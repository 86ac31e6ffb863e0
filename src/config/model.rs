use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level configuration file model (`corpus-guard.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,

    #[serde(default)]
    pub vocabulary: VocabularyConfig,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub mapping: MappingConfig,

    /// Suppression entries [[ignore]].
    #[serde(default)]
    pub ignore: Vec<IgnoreEntry>,
}

/// Shape of the control file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    /// Columns every row must provide. A row with fewer fields is fatal.
    #[serde(default = "default_expected_columns")]
    pub expected_columns: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            expected_columns: default_expected_columns(),
        }
    }
}

fn default_expected_columns() -> Vec<String> {
    vec![
        "token".to_string(),
        "lemma".to_string(),
        "POS".to_string(),
        "morph".to_string(),
    ]
}

/// Paths to the allowed-value lists, relative to the config file.
/// A category without a path is simply not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VocabularyConfig {
    /// One lemma per line, optionally `lemma<TAB>POS1,POS2` to restrict
    /// which POS tags the lemma may carry.
    pub lemma: Option<PathBuf>,

    /// Plain text, values separated by commas or newlines.
    pub pos: Option<PathBuf>,

    /// TSV with a header; the `label` column holds the morph values, an
    /// optional `POS` column a comma-separated restriction.
    pub morph: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Manual-rule table: TSV with a header and the columns
    /// id, type, cat_in, cat_out, pattern_in, pattern_out.
    pub manual: Option<PathBuf>,

    /// Identifier of a built-in contextual ruleset (e.g. "fro").
    pub ruleset: Option<String>,
}

/// Recognized engine options. The option set is small and fixed, so each
/// key is spelled out with its own default rather than deep-merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OptionsConfig {
    /// Skip the lemma check when the lemma is all digits.
    #[serde(default)]
    pub allow_numeric_lemma: bool,

    /// Skip the lemma check when the lemma is all punctuation.
    #[serde(default)]
    pub allow_punctuation_lemma: bool,

    /// POS tags whose rows skip the lemma check entirely.
    #[serde(default)]
    pub ignore_lemma_check_for_pos: Vec<String>,
}

/// Inline value-aliasing tables, applied before any check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    #[serde(default)]
    pub lemma: IndexMap<String, String>,

    #[serde(default)]
    pub pos: IndexMap<String, String>,

    #[serde(default)]
    pub morph: IndexMap<String, String>,
}

/// One suppression entry.
///
/// `scope` is either a built-in category (`lemma`, `POS`, `morph`) or a rule
/// identifier; the category names are reserved and never resolve to a rule.
/// Exactly one of `line` and `value` must be set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IgnoreEntry {
    pub scope: String,

    #[serde(default)]
    pub line: Option<usize>,

    #[serde(default)]
    pub value: Option<String>,

    /// Human-readable justification, echoed in the ignored diagnostic.
    pub comment: String,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
