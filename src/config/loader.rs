use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::checker::{
    Category, CheckOptions, IgnoreTable, MappingTables, SuppressionScope, ValidatorConfig,
    Vocabulary, parse_rules,
};
use crate::error::{CorpusGuardError, Result};
use crate::rules;

use super::{Config, IgnoreEntry};

pub const CONFIG_FILE_NAME: &str = "corpus-guard.toml";

/// A parsed config plus the directory its relative paths resolve against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

/// Load the configuration from an explicit path, or from
/// `corpus-guard.toml` in the current directory.
///
/// # Errors
/// Returns an error if no config file is found, or it cannot be read or
/// parsed.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = PathBuf::from(CONFIG_FILE_NAME);
            if !candidate.exists() {
                return Err(CorpusGuardError::Config(format!(
                    "no {CONFIG_FILE_NAME} found in the current directory (use --config)"
                )));
            }
            candidate
        }
    };
    let content = read_file(&path)?;
    let config: Config = toml::from_str(&content)?;
    let base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Ok(LoadedConfig { config, base_dir })
}

/// Turn a parsed config into the immutable tables the engine runs on.
///
/// All referenced files are read here, all patterns compiled, the ruleset
/// resolved; anything wrong surfaces as a load-time error before the first
/// row is processed.
///
/// # Errors
/// Returns a `Config` error on unreadable or malformed side files, an
/// unknown ruleset, or an invalid ignore entry.
pub fn build_validator_config(loaded: &LoadedConfig) -> Result<ValidatorConfig> {
    let config = &loaded.config;

    let lemma = match &config.vocabulary.lemma {
        Some(path) => parse_lemma_list(&read_file(&resolve(&loaded.base_dir, path))?),
        None => Vocabulary::new(),
    };
    let pos = match &config.vocabulary.pos {
        Some(path) => parse_pos_list(&read_file(&resolve(&loaded.base_dir, path))?),
        None => Vocabulary::new(),
    };
    let morph = match &config.vocabulary.morph {
        Some(path) => parse_morph_table(&read_file(&resolve(&loaded.base_dir, path))?)?,
        None => Vocabulary::new(),
    };

    let manual_rules = match &config.rules.manual {
        Some(path) => parse_rules(&read_file(&resolve(&loaded.base_dir, path))?)?,
        None => Vec::new(),
    };
    let context_rules = match &config.rules.ruleset {
        Some(id) => rules::ruleset(id)?,
        None => Vec::new(),
    };

    Ok(ValidatorConfig {
        expected_columns: config.corpus.expected_columns.clone(),
        lemma,
        pos,
        morph,
        mapping: MappingTables {
            lemma: config.mapping.lemma.clone(),
            pos: config.mapping.pos.clone(),
            morph: config.mapping.morph.clone(),
        },
        ignore: build_ignore_table(&config.ignore)?,
        options: CheckOptions {
            allow_numeric_lemma: config.options.allow_numeric_lemma,
            allow_punctuation_lemma: config.options.allow_punctuation_lemma,
            ignore_lemma_check_for_pos: config
                .options
                .ignore_lemma_check_for_pos
                .iter()
                .cloned()
                .collect(),
        },
        manual_rules,
        context_rules,
    })
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CorpusGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Plain text POS list: values separated by commas or newlines.
fn parse_pos_list(content: &str) -> Vocabulary {
    let mut vocab = Vocabulary::new();
    for value in content.split(['\n', ',']) {
        let value = value.trim();
        if !value.is_empty() {
            vocab.insert(value, IndexSet::new());
        }
    }
    vocab
}

/// Lemma list: one entry per line, optionally followed by a tab and a
/// comma-separated allowed-POS list.
fn parse_lemma_list(content: &str) -> Vocabulary {
    let mut vocab = Vocabulary::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (entry, restriction) = match line.split_once('\t') {
            Some((entry, tags)) => (entry, parse_tag_list(tags)),
            None => (line, IndexSet::new()),
        };
        vocab.insert(entry.trim(), restriction);
    }
    vocab
}

/// Morph table: TSV with a header; the `label` column holds the values, an
/// optional `POS` column a comma-separated restriction.
fn parse_morph_table(content: &str) -> Result<Vocabulary> {
    let mut lines = content.lines();
    let header: Vec<&str> = lines
        .next()
        .ok_or_else(|| CorpusGuardError::Config("morph file is empty".to_string()))?
        .split('\t')
        .collect();
    let label_idx = header.iter().position(|h| *h == "label").ok_or_else(|| {
        CorpusGuardError::Config("morph file header has no 'label' column".to_string())
    })?;
    let pos_idx = header.iter().position(|h| *h == "POS");

    let mut vocab = Vocabulary::new();
    for (line_no, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        let label = cols.get(label_idx).map(|l| l.trim()).ok_or_else(|| {
            CorpusGuardError::Config(format!(
                "morph file line {}: missing 'label' column",
                line_no + 2
            ))
        })?;
        let restriction = pos_idx
            .and_then(|idx| cols.get(idx))
            .map_or_else(IndexSet::new, |tags| parse_tag_list(tags));
        vocab.insert(label, restriction);
    }
    Ok(vocab)
}

fn parse_tag_list(tags: &str) -> IndexSet<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn build_ignore_table(entries: &[IgnoreEntry]) -> Result<IgnoreTable> {
    let mut table = IgnoreTable::new();
    for entry in entries {
        let scope = parse_scope(&entry.scope);
        match (&entry.line, &entry.value) {
            (Some(line), None) => table.insert_line(scope, *line, entry.comment.clone()),
            (None, Some(value)) => table.insert_value(scope, value.clone(), entry.comment.clone()),
            _ => {
                return Err(CorpusGuardError::Config(format!(
                    "ignore entry for '{}' must set exactly one of 'line' and 'value'",
                    entry.scope
                )));
            }
        }
    }
    Ok(table)
}

/// The category names are reserved; anything else is a rule identifier.
fn parse_scope(scope: &str) -> SuppressionScope {
    match scope {
        "lemma" => SuppressionScope::Category(Category::Lemma),
        "POS" | "pos" => SuppressionScope::Category(Category::Pos),
        "morph" => SuppressionScope::Category(Category::Morph),
        rule_id => SuppressionScope::Rule(rule_id.to_string()),
    }
}

/// Starter configuration written by `corpus-guard init`.
pub const STARTER_CONFIG: &str = r#"# corpus-guard configuration

[corpus]
# Columns every row must provide; a shorter row aborts the run.
expected_columns = ["token", "lemma", "POS", "morph"]

[vocabulary]
# Allowed-value lists, relative to this file. Remove a line to skip that
# category entirely.
# lemma = "lemma.txt"
# pos = "pos.txt"
# morph = "morph.tsv"

[rules]
# Manual rule table (TSV: id, type, cat_in, cat_out, pattern_in, pattern_out).
# manual = "rules.tsv"
# Built-in contextual ruleset.
# ruleset = "fro"

[options]
allow_numeric_lemma = false
allow_punctuation_lemma = false
ignore_lemma_check_for_pos = []

# Value aliasing applied before any check:
# [mapping.lemma]
# "vieil" = "vieux"

# Suppressions:
# [[ignore]]
# scope = "lemma"        # lemma | POS | morph | a rule id
# line = 12              # or: value = "someform"
# comment = "reviewed by hand"
"#;

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
