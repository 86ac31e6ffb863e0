//! Contextual ruleset for Old French (tagset of the Cattex conventions).
//!
//! All rules here are advisory style checks over the annotator's choices;
//! none of them affect the hard verdict.

use crate::corpus::Row;

use super::{ContextRule, Severity};

const ARTICLE_FORMS: [&str; 5] = ["le", "la", "les", "l'", "l"];

const VERBAL_POS: [&str; 4] = ["VERcjg", "VERinf", "VERppe", "VERppa"];

const ADJ_POS: [&str; 5] = ["ADJqua", "ADJind", "ADJcar", "ADJord", "ADJpos"];

const DET_POS: [&str; 9] = [
    "DETdef", "DETndf", "DETdem", "DETpos", "DETind", "DETcar", "DETrel", "DETint", "DETcom",
];

fn pos_of(row: &Row) -> &str {
    row.pos().unwrap_or_default()
}

/// Lemma shape of an Old French infinitive: -er, -ir, -oir or -re, with an
/// optional homograph index digit (chanter, partir, veoir, metre2).
fn has_infinitive_ending(form: &str) -> bool {
    let stem = form.strip_suffix(|c: char| c.is_ascii_digit()).unwrap_or(form);
    ["er", "ir", "oir", "re"].iter().any(|s| stem.ends_with(s))
}

/// `le`/`la`/`les` directly before a verb is usually the clitic pronoun.
#[derive(Debug)]
struct CliticBeforeVerb;

impl ContextRule for CliticBeforeVerb {
    fn id(&self) -> &'static str {
        "clitic-article-pronoun"
    }

    fn severity(&self) -> Severity {
        Severity::Warn
    }

    fn template(&self) -> &'static str {
        "'{token}' before a verb is usually PROper"
    }

    fn applies_to(&self, row: &Row) -> bool {
        ARTICLE_FORMS.contains(&row.token())
            && (row.lemma() != Some("il") || row.pos() != Some("PROper"))
    }

    fn check(&self, _row: &Row, _previous: &[Row], following: &[Row]) -> bool {
        match following.first() {
            Some(next) => !["VERcjg", "VERinf", "PROper"].contains(&pos_of(next)),
            None => true,
        }
    }
}

/// `le`/`la`/`les` directly before a nominal form is usually the definite
/// article.
#[derive(Debug)]
struct ArticleBeforeNominal;

impl ArticleBeforeNominal {
    fn is_nominal(pos: &str) -> bool {
        ADJ_POS.contains(&pos)
            || [
                "NOMcom", "NOMpro", "PROind", "PROcar", "PROpos", "PROord", "VERppe", "VERppa",
            ]
            .contains(&pos)
    }
}

impl ContextRule for ArticleBeforeNominal {
    fn id(&self) -> &'static str {
        "article-determiner"
    }

    fn severity(&self) -> Severity {
        Severity::Warn
    }

    fn template(&self) -> &'static str {
        "'{token}' before a nominal form is usually DETdef"
    }

    fn applies_to(&self, row: &Row) -> bool {
        ARTICLE_FORMS.contains(&row.token())
            && (row.lemma() != Some("le") || row.pos() != Some("DETdef"))
    }

    fn check(&self, _row: &Row, _previous: &[Row], following: &[Row]) -> bool {
        match following.first() {
            // "la plus bele" reads as an adverbial superlative, not article+noun
            Some(next) => {
                !(Self::is_nominal(pos_of(next)) && next.lemma() != Some("plus"))
            }
            None => true,
        }
    }
}

/// `tot`/`trestot` directly before a determiner is usually the
/// predeterminer reading, tagged DETind.
#[derive(Debug)]
struct PredeterminerTot;

impl ContextRule for PredeterminerTot {
    fn id(&self) -> &'static str {
        "tot-predeterminer"
    }

    fn severity(&self) -> Severity {
        Severity::Warn
    }

    fn template(&self) -> &'static str {
        "'{token}' before a determiner is usually a predeterminer (DETind)"
    }

    fn applies_to(&self, row: &Row) -> bool {
        matches!(row.lemma(), Some("tot" | "trestot")) && row.pos() != Some("DETind")
    }

    fn check(&self, _row: &Row, _previous: &[Row], following: &[Row]) -> bool {
        match following.first() {
            Some(next) => !DET_POS.contains(&pos_of(next)),
            None => true,
        }
    }
}

/// The lemma of any verbal POS must be an infinitive.
#[derive(Debug)]
struct VerbalLemma;

impl ContextRule for VerbalLemma {
    fn id(&self) -> &'static str {
        "verbal-lemma"
    }

    fn severity(&self) -> Severity {
        Severity::Warn
    }

    fn template(&self) -> &'static str {
        "odd verbal lemma '{lemma}': the lemma of a VER* tag is an infinitive"
    }

    fn applies_to(&self, row: &Row) -> bool {
        VERBAL_POS.contains(&pos_of(row))
    }

    fn check(&self, row: &Row, _previous: &[Row], _following: &[Row]) -> bool {
        has_infinitive_ending(row.lemma().unwrap_or_default())
    }
}

/// Tokens tagged VERinf should themselves look like infinitives.
#[derive(Debug)]
struct InfinitiveForm;

impl ContextRule for InfinitiveForm {
    fn id(&self) -> &'static str {
        "infinitive-form"
    }

    fn severity(&self) -> Severity {
        Severity::Warn
    }

    fn template(&self) -> &'static str {
        "odd VERinf form '{token}'"
    }

    fn applies_to(&self, row: &Row) -> bool {
        row.pos() == Some("VERinf")
    }

    fn check(&self, row: &Row, _previous: &[Row], _following: &[Row]) -> bool {
        has_infinitive_ending(row.token())
    }
}

pub(super) fn rules() -> Vec<Box<dyn ContextRule>> {
    vec![
        Box::new(CliticBeforeVerb),
        Box::new(ArticleBeforeNominal),
        Box::new(PredeterminerTot),
        Box::new(VerbalLemma),
        Box::new(InfinitiveForm),
    ]
}

#[cfg(test)]
#[path = "fro_tests.rs"]
mod tests;
