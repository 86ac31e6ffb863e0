use super::*;

fn lemma_scope() -> SuppressionScope {
    SuppressionScope::Category(Category::Lemma)
}

#[test]
fn empty_table_resolves_nothing() {
    let table = IgnoreTable::new();
    assert!(table.is_empty());
    assert_eq!(table.resolve(&lemma_scope(), 1, Some("x")), None);
}

#[test]
fn line_key_silences_that_line_only() {
    let mut table = IgnoreTable::new();
    table.insert_line(lemma_scope(), 12, "archaic form, reviewed".to_string());

    assert_eq!(
        table.resolve(&lemma_scope(), 12, Some("whatever")),
        Some("archaic form, reviewed")
    );
    assert_eq!(table.resolve(&lemma_scope(), 13, Some("whatever")), None);
}

#[test]
fn value_key_silences_corpus_wide() {
    let mut table = IgnoreTable::new();
    table.insert_value(lemma_scope(), "nostredame".to_string(), "proper noun".to_string());

    assert_eq!(
        table.resolve(&lemma_scope(), 1, Some("nostredame")),
        Some("proper noun")
    );
    assert_eq!(
        table.resolve(&lemma_scope(), 999, Some("nostredame")),
        Some("proper noun")
    );
    assert_eq!(table.resolve(&lemma_scope(), 1, Some("autre")), None);
}

#[test]
fn line_key_takes_priority_over_value_key() {
    let mut table = IgnoreTable::new();
    table.insert_line(lemma_scope(), 5, "line comment".to_string());
    table.insert_value(lemma_scope(), "forme".to_string(), "value comment".to_string());

    assert_eq!(
        table.resolve(&lemma_scope(), 5, Some("forme")),
        Some("line comment")
    );
    assert_eq!(
        table.resolve(&lemma_scope(), 6, Some("forme")),
        Some("value comment")
    );
}

#[test]
fn scopes_do_not_leak_into_each_other() {
    let mut table = IgnoreTable::new();
    table.insert_line(lemma_scope(), 3, "lemma only".to_string());

    assert_eq!(
        table.resolve(&SuppressionScope::Category(Category::Pos), 3, None),
        None
    );
    assert_eq!(
        table.resolve(&SuppressionScope::Rule("lemma".to_string()), 3, None),
        None
    );
}

#[test]
fn rule_scope_is_keyed_by_identifier() {
    let mut table = IgnoreTable::new();
    table.insert_line(
        SuppressionScope::Rule("R1".to_string()),
        4,
        "known exception".to_string(),
    );

    assert_eq!(
        table.resolve(&SuppressionScope::Rule("R1".to_string()), 4, None),
        Some("known exception")
    );
    assert_eq!(
        table.resolve(&SuppressionScope::Rule("R2".to_string()), 4, None),
        None
    );
}
