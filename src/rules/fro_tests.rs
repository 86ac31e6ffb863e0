use indexmap::IndexMap;

use super::*;
use crate::rules::ContextRule;

fn row(token: &str, lemma: &str, pos: &str) -> Row {
    let mut fields = IndexMap::new();
    fields.insert("token".to_string(), token.to_string());
    fields.insert("lemma".to_string(), lemma.to_string());
    fields.insert("POS".to_string(), pos.to_string());
    Row::new(1, fields)
}

fn find<'a>(rules: &'a [Box<dyn ContextRule>], id: &str) -> &'a dyn ContextRule {
    rules
        .iter()
        .find(|r| r.id() == id)
        .unwrap_or_else(|| panic!("no rule {id}"))
        .as_ref()
}

#[test]
fn clitic_rule_applies_to_untagged_articles() {
    let rules = rules();
    let rule = find(&rules, "clitic-article-pronoun");

    assert!(rule.applies_to(&row("la", "le", "PROper")));
    assert!(!rule.applies_to(&row("la", "il", "PROper")));
    assert!(!rule.applies_to(&row("chantoit", "chanter", "VERcjg")));
}

#[test]
fn clitic_rule_fails_before_a_verb() {
    let rules = rules();
    let rule = find(&rules, "clitic-article-pronoun");
    let current = row("la", "le", "DETdef");

    assert!(!rule.check(&current, &[], &[row("voit", "veoir", "VERcjg")]));
    assert!(rule.check(&current, &[], &[row("meson", "meson", "NOMcom")]));
    assert!(rule.check(&current, &[], &[]));
}

#[test]
fn article_rule_fails_before_a_nominal_form() {
    let rules = rules();
    let rule = find(&rules, "article-determiner");
    let current = row("la", "le", "PROper");

    assert!(rule.applies_to(&current));
    assert!(!rule.check(&current, &[], &[row("meson", "meson", "NOMcom")]));
    assert!(rule.check(&current, &[], &[row("voit", "veoir", "VERcjg")]));
}

#[test]
fn article_rule_excludes_superlative_plus() {
    let rules = rules();
    let rule = find(&rules, "article-determiner");
    let current = row("la", "le", "PROper");

    assert!(rule.check(&current, &[], &[row("plus", "plus", "ADJqua")]));
}

#[test]
fn article_rule_skips_correctly_tagged_determiner() {
    let rules = rules();
    let rule = find(&rules, "article-determiner");

    assert!(!rule.applies_to(&row("la", "le", "DETdef")));
}

#[test]
fn tot_rule_fires_before_determiner_only() {
    let rules = rules();
    let rule = find(&rules, "tot-predeterminer");
    let current = row("trestot", "trestot", "ADVgen");

    assert!(rule.applies_to(&current));
    assert!(!rule.applies_to(&row("tuit", "tot", "DETind")));
    assert!(!rule.check(&current, &[], &[row("les", "le", "DETdef")]));
    assert!(rule.check(&current, &[], &[row("chanter", "chanter", "VERinf")]));
}

#[test]
fn verbal_lemma_must_look_like_infinitive() {
    let rules = rules();
    let rule = find(&rules, "verbal-lemma");

    assert!(rule.applies_to(&row("chantant", "chantant", "VERppa")));
    assert!(!rule.check(&row("chantant", "chantant", "VERppa"), &[], &[]));
    assert!(rule.check(&row("chantoit", "chanter", "VERcjg"), &[], &[]));
    assert!(rule.check(&row("vit", "veoir", "VERcjg"), &[], &[]));
    assert!(rule.check(&row("mist", "metre2", "VERcjg"), &[], &[]));
    assert!(!rule.applies_to(&row("meson", "meson", "NOMcom")));
}

#[test]
fn infinitive_form_checks_the_token_itself() {
    let rules = rules();
    let rule = find(&rules, "infinitive-form");

    assert!(rule.applies_to(&row("chanter", "chanter", "VERinf")));
    assert!(!rule.applies_to(&row("chantoit", "chanter", "VERcjg")));
    assert!(rule.check(&row("chanter", "chanter", "VERinf"), &[], &[]));
    assert!(!rule.check(&row("chantant", "chanter", "VERinf"), &[], &[]));
}

#[test]
fn messages_interpolate_row_fields() {
    let rules = rules();
    let rule = find(&rules, "clitic-article-pronoun");
    let msg = rule.message(&row("la", "le", "DETdef"));

    assert!(msg.contains("'la'"));
    assert!(msg.contains("PROper"));
}
