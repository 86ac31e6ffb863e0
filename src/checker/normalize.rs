use indexmap::IndexMap;

use crate::corpus::{LEMMA, MORPH, POS, Row};

/// Raw-to-normalized value maps, one per mapped category.
#[derive(Debug, Clone, Default)]
pub struct MappingTables {
    pub lemma: IndexMap<String, String>,
    pub pos: IndexMap<String, String>,
    pub morph: IndexMap<String, String>,
}

impl MappingTables {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lemma.is_empty() && self.pos.is_empty() && self.morph.is_empty()
    }
}

/// Applies value aliasing before any check runs.
///
/// Each mapped category is remapped through its own table; a value absent
/// from its table passes through unchanged. Pure: produces a new row, exactly
/// once per field. Tables contain no cycles by contract, so normalizing an
/// already-normalized row is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    tables: MappingTables,
}

impl Normalizer {
    #[must_use]
    pub const fn new(tables: MappingTables) -> Self {
        Self { tables }
    }

    #[must_use]
    pub fn normalize(&self, row: &Row) -> Row {
        if self.tables.is_empty() {
            return row.clone();
        }
        let mut fields = row.fields().clone();
        Self::remap(&mut fields, LEMMA, &self.tables.lemma);
        Self::remap(&mut fields, POS, &self.tables.pos);
        Self::remap(&mut fields, MORPH, &self.tables.morph);
        Row::new(row.line(), fields)
    }

    fn remap(fields: &mut IndexMap<String, String>, field: &str, table: &IndexMap<String, String>) {
        let mapped = fields.get(field).and_then(|value| table.get(value)).cloned();
        if let Some(mapped) = mapped {
            fields.insert(field.to_string(), mapped);
        }
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
