mod manual;
mod normalize;
mod outcome;
mod suppress;
mod vocab;

pub use manual::{ManualRule, RuleKind, parse_rules};
pub use normalize::{MappingTables, Normalizer};
pub use outcome::CheckOutcome;
pub use suppress::{Category, IgnoreTable, SuppressionScope};
pub use vocab::{PosRestriction, Vocabulary, restriction_allows};

use indexmap::IndexSet;

use crate::corpus::{Corpus, Row};
use crate::error::{CorpusGuardError, Result};
use crate::output::{Level, Reporter};
use crate::rules::ContextRule;

/// Rows of context handed to contextual rules on each side of the current
/// row.
pub const CONTEXT_WINDOW: usize = 5;

/// Recognized check options, merged field by field over these defaults.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Skip the lemma check when the lemma is all digits.
    pub allow_numeric_lemma: bool,
    /// Skip the lemma check when the lemma is all punctuation.
    pub allow_punctuation_lemma: bool,
    /// Skip the lemma check for rows tagged with one of these POS.
    pub ignore_lemma_check_for_pos: IndexSet<String>,
}

/// Inclusive 0-based row-index window restricting which rows are checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowBounds {
    pub from: Option<usize>,
    pub to: Option<usize>,
}

impl RowBounds {
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.from.is_none_or(|from| index >= from) && self.to.is_none_or(|to| index <= to)
    }
}

/// Outcome of a full run over one corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub errors: usize,
}

/// Everything the validator needs, assembled once at configuration time.
#[derive(Debug)]
pub struct ValidatorConfig {
    pub expected_columns: Vec<String>,
    pub lemma: Vocabulary,
    pub pos: Vocabulary,
    pub morph: Vocabulary,
    pub mapping: MappingTables,
    pub ignore: IgnoreTable,
    pub options: CheckOptions,
    pub manual_rules: Vec<ManualRule>,
    pub context_rules: Vec<Box<dyn ContextRule>>,
}

/// The rule evaluation engine: one pass over all rows, normalization first,
/// then vocabulary, cross-field, manual and contextual checks in that order.
pub struct Validator {
    expected_columns: Vec<String>,
    lemma: Vocabulary,
    pos: Vocabulary,
    morph: Vocabulary,
    normalizer: Normalizer,
    ignore: IgnoreTable,
    options: CheckOptions,
    manual_rules: Vec<ManualRule>,
    context_rules: Vec<Box<dyn ContextRule>>,
    cross_check_lemma: bool,
    cross_check_morph: bool,
}

impl Validator {
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        // computed once so unused cross-checks cost nothing per row
        let cross_check_lemma = config.lemma.has_restrictions();
        let cross_check_morph = config.morph.has_restrictions();
        Self {
            expected_columns: config.expected_columns,
            lemma: config.lemma,
            pos: config.pos,
            morph: config.morph,
            normalizer: Normalizer::new(config.mapping),
            ignore: config.ignore,
            options: config.options,
            manual_rules: config.manual_rules,
            context_rules: config.context_rules,
            cross_check_lemma,
            cross_check_morph,
        }
    }

    /// Run the full check pass.
    ///
    /// Returns the verdict, or an error on the one fatal condition: a row
    /// inside the bounds with fewer fields than the expected-column count.
    /// The abort happens mid-stream; earlier diagnostics have already been
    /// emitted and no summary follows them.
    ///
    /// # Errors
    /// `MalformedRow` on a short row.
    pub fn check(
        &self,
        corpus: &Corpus,
        bounds: RowBounds,
        reporter: &mut dyn Reporter,
    ) -> Result<Verdict> {
        let rows: Vec<Row> = corpus
            .rows()
            .iter()
            .map(|row| self.normalizer.normalize(row))
            .collect();

        let mut errors = 0;
        for (index, raw) in corpus.rows().iter().enumerate() {
            if !bounds.contains(index) {
                continue;
            }
            if raw.field_count() < self.expected_columns.len() {
                return Err(CorpusGuardError::MalformedRow {
                    line: raw.line(),
                    found: raw.field_count(),
                    expected: self.expected_columns.len(),
                });
            }
            let row = &rows[index];

            let lemma_ret = self.check_lemma(row, reporter);
            let pos_ret = self.check_pos(row, reporter);
            let morph_ret = self.check_morph(row, reporter);
            errors += lemma_ret.errors + pos_ret.errors + morph_ret.errors;

            if self.cross_check_lemma && lemma_ret.is_valid_value() && pos_ret.is_valid_value() {
                errors += self.check_lemma_pos(row, reporter);
            }
            if self.cross_check_morph && morph_ret.is_valid_value() && pos_ret.is_valid_value() {
                errors += self.check_morph_pos(row, reporter);
            }

            errors += self.run_manual_rules(row, reporter);

            let previous = &rows[index.saturating_sub(CONTEXT_WINDOW)..index];
            let following = &rows[(index + 1).min(rows.len())..(index + 1 + CONTEXT_WINDOW).min(rows.len())];
            self.run_context_rules(row, previous, following, reporter);
        }

        let verdict = Verdict {
            passed: errors == 0,
            errors,
        };
        reporter.summary(&verdict);
        Ok(verdict)
    }

    fn check_lemma(&self, row: &Row, reporter: &mut dyn Reporter) -> CheckOutcome {
        if self.lemma.is_empty() {
            return CheckOutcome::not_checked();
        }
        let value = row.lemma().unwrap_or_default();
        if self.lemma.contains(value) {
            return CheckOutcome::passed();
        }
        if let Some(outcome) = self.suppressed(Category::Lemma, row.line(), value, reporter) {
            return outcome;
        }
        if self.lemma_skipped_by_options(value, row) {
            return CheckOutcome::skipped();
        }
        reporter.emit(
            Level::Fail,
            Some(row.line()),
            &format!("lemma '{value}' is not in the allowed lemma list"),
        );
        CheckOutcome::failure()
    }

    fn check_pos(&self, row: &Row, reporter: &mut dyn Reporter) -> CheckOutcome {
        self.check_category(Category::Pos, &self.pos, row.pos(), row, reporter)
    }

    fn check_morph(&self, row: &Row, reporter: &mut dyn Reporter) -> CheckOutcome {
        self.check_category(Category::Morph, &self.morph, row.morph(), row, reporter)
    }

    fn check_category(
        &self,
        category: Category,
        vocabulary: &Vocabulary,
        value: Option<&str>,
        row: &Row,
        reporter: &mut dyn Reporter,
    ) -> CheckOutcome {
        if vocabulary.is_empty() {
            return CheckOutcome::not_checked();
        }
        let value = value.unwrap_or_default();
        if vocabulary.contains(value) {
            return CheckOutcome::passed();
        }
        if let Some(outcome) = self.suppressed(category, row.line(), value, reporter) {
            return outcome;
        }
        reporter.emit(
            Level::Fail,
            Some(row.line()),
            &format!(
                "{} '{value}' is not in the allowed {} list",
                category.label(),
                category.label()
            ),
        );
        CheckOutcome::failure()
    }

    /// Consult the ignore table for a vocabulary miss; emits the ignored
    /// diagnostic on a hit.
    fn suppressed(
        &self,
        category: Category,
        line: usize,
        value: &str,
        reporter: &mut dyn Reporter,
    ) -> Option<CheckOutcome> {
        let scope = SuppressionScope::Category(category);
        let comment = self.ignore.resolve(&scope, line, Some(value))?;
        reporter.emit(
            Level::Ignored,
            Some(line),
            &format!("{} '{value}' ignored: {comment}", category.label()),
        );
        Some(CheckOutcome::skipped())
    }

    fn lemma_skipped_by_options(&self, value: &str, row: &Row) -> bool {
        if self.options.allow_numeric_lemma && is_all_numeric(value) {
            return true;
        }
        if self.options.allow_punctuation_lemma && is_all_punctuation(value) {
            return true;
        }
        row.pos()
            .is_some_and(|pos| self.options.ignore_lemma_check_for_pos.contains(pos))
    }

    fn check_lemma_pos(&self, row: &Row, reporter: &mut dyn Reporter) -> usize {
        let lemma = row.lemma().unwrap_or_default();
        let pos = row.pos().unwrap_or_default();
        let Some(restriction) = self.lemma.lookup(lemma) else {
            return 0;
        };
        if restriction.is_empty() || restriction_allows(restriction, pos) {
            return 0;
        }
        let allowed: Vec<&str> = restriction.iter().map(String::as_str).collect();
        reporter.emit(
            Level::Fail,
            Some(row.line()),
            &format!(
                "POS '{pos}' is not allowed for lemma '{lemma}' (token '{}', allowed: {})",
                row.token(),
                allowed.join(", ")
            ),
        );
        1
    }

    fn check_morph_pos(&self, row: &Row, reporter: &mut dyn Reporter) -> usize {
        let morph = row.morph().unwrap_or_default();
        let pos = row.pos().unwrap_or_default();
        let Some(restriction) = self.morph.lookup(morph) else {
            return 0;
        };
        if restriction.is_empty() || restriction_allows(restriction, pos) {
            return 0;
        }
        reporter.emit(
            Level::Fail,
            Some(row.line()),
            &format!(
                "POS '{pos}' is not allowed for morph '{morph}' (token '{}')",
                row.token()
            ),
        );
        1
    }

    fn run_manual_rules(&self, row: &Row, reporter: &mut dyn Reporter) -> usize {
        let mut errors = 0;
        for rule in &self.manual_rules {
            let scope = SuppressionScope::Rule(rule.id.clone());
            if let Some(comment) = self.ignore.resolve(&scope, row.line(), None) {
                reporter.emit(
                    Level::Ignored,
                    Some(row.line()),
                    &format!("rule {} ignored: {comment}", rule.id),
                );
                continue;
            }
            if !rule.applies_to(row) {
                continue;
            }
            if rule.violated_by(row) {
                reporter.emit(
                    Level::Fail,
                    Some(row.line()),
                    &format!(
                        "rule {}: {} '{}' is not acceptable with {} '{}'",
                        rule.id,
                        rule.cat_out,
                        row.get(&rule.cat_out).unwrap_or_default(),
                        rule.cat_in,
                        row.get(&rule.cat_in).unwrap_or_default()
                    ),
                );
                errors += 1;
            }
        }
        errors
    }

    /// Contextual-rule violations are advisory: reported at the rule's own
    /// severity, never counted toward the hard verdict.
    fn run_context_rules(
        &self,
        row: &Row,
        previous: &[Row],
        following: &[Row],
        reporter: &mut dyn Reporter,
    ) {
        for rule in &self.context_rules {
            if !rule.applies_to(row) {
                continue;
            }
            if rule.check(row, previous, following) {
                continue;
            }
            let scope = SuppressionScope::Rule(rule.id().to_string());
            if let Some(comment) = self.ignore.resolve(&scope, row.line(), Some(row.token())) {
                reporter.emit(
                    Level::Ignored,
                    Some(row.line()),
                    &format!("rule {} ignored: {comment}", rule.id()),
                );
                continue;
            }
            let level = match rule.severity() {
                crate::rules::Severity::Warn => Level::Warning,
                crate::rules::Severity::Error => Level::Fail,
            };
            reporter.emit(level, Some(row.line()), &rule.message(row));
        }
    }
}

fn is_all_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn is_all_punctuation(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| !c.is_alphanumeric() && c != '_')
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
