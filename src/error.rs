use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern '{pattern}' in rule '{rule}'")]
    InvalidPattern {
        rule: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Malformed corpus at line {line}: found {found} fields, expected {expected}")]
    MalformedRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CorpusGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
