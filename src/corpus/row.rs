use indexmap::IndexMap;

use super::{LEMMA, MORPH, POS, TOKEN};

/// One annotated corpus line: a token with its lemma/POS/morph fields plus
/// whatever extra columns the corpus carries.
///
/// Rows are immutable after construction; normalization builds a new `Row`
/// rather than editing in place. The line number is 1-based and excludes the
/// header row, so it matches what an annotator sees in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    line: usize,
    fields: IndexMap<String, String>,
}

impl Row {
    #[must_use]
    pub const fn new(line: usize, fields: IndexMap<String, String>) -> Self {
        Self { line, fields }
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Number of fields actually present on this line.
    ///
    /// A short line yields fewer fields than the header declares; the
    /// orchestrator compares this against the expected-column count.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn token(&self) -> &str {
        self.get(TOKEN).unwrap_or_default()
    }

    #[must_use]
    pub fn lemma(&self) -> Option<&str> {
        self.get(LEMMA)
    }

    #[must_use]
    pub fn pos(&self) -> Option<&str> {
        self.get(POS)
    }

    #[must_use]
    pub fn morph(&self) -> Option<&str> {
        self.get(MORPH)
    }

    #[must_use]
    pub const fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    /// Build a copy of this row with one field replaced.
    #[must_use]
    pub fn with_field(&self, field: &str, value: String) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(field.to_string(), value);
        Self {
            line: self.line,
            fields,
        }
    }
}
