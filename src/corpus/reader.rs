use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{CorpusGuardError, Result};

use super::{Row, TOKEN};

/// A fully materialized annotation corpus.
///
/// The whole file is buffered so contextual rules can look at neighboring
/// rows; corpora this tool targets are small enough that streaming would buy
/// nothing.
#[derive(Debug, Clone)]
pub struct Corpus {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Corpus {
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse a tab-separated corpus.
///
/// The first line is the header and defines the field names; each following
/// line is zipped with it. Lines shorter than the header produce rows with
/// fewer fields (the checker decides whether that is fatal). Row line numbers
/// start at 1 on the first data line.
///
/// # Errors
/// Returns a `Config` error if the corpus is empty or the header has no
/// `token` column.
pub fn parse_str(content: &str) -> Result<Corpus> {
    let mut lines = content.lines();
    let header: Vec<String> = lines
        .next()
        .ok_or_else(|| CorpusGuardError::Config("corpus file is empty".to_string()))?
        .split('\t')
        .map(str::to_string)
        .collect();

    if !header.iter().any(|h| h == TOKEN) {
        return Err(CorpusGuardError::Config(format!(
            "corpus header has no '{TOKEN}' column: {}",
            header.join(", ")
        )));
    }

    let rows = lines
        .enumerate()
        .map(|(idx, line)| {
            let fields: IndexMap<String, String> = header
                .iter()
                .cloned()
                .zip(line.split('\t').map(str::to_string))
                .collect();
            Row::new(idx + 1, fields)
        })
        .collect();

    Ok(Corpus { header, rows })
}

/// Read and parse a corpus file from disk.
///
/// # Errors
/// Returns a `FileRead` error if the file cannot be read, or any error from
/// [`parse_str`].
pub fn read_path(path: &Path) -> Result<Corpus> {
    let content = fs::read_to_string(path).map_err(|source| CorpusGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content)
}
