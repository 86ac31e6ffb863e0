use super::*;

fn sample() -> Corpus {
    parse_str("token\tlemma\tPOS\tmorph\nchantoit\tchanter\tVERcjg\tMODE=ind|TEMPS=impf\nla\tle\tDETdef\tNOMB.=s\n")
        .unwrap()
}

#[test]
fn parse_header_defines_fields() {
    let corpus = sample();
    assert_eq!(corpus.header(), ["token", "lemma", "POS", "morph"]);
    assert_eq!(corpus.len(), 2);
}

#[test]
fn rows_are_numbered_from_one_excluding_header() {
    let corpus = sample();
    assert_eq!(corpus.rows()[0].line(), 1);
    assert_eq!(corpus.rows()[1].line(), 2);
}

#[test]
fn row_field_access() {
    let corpus = sample();
    let row = &corpus.rows()[0];
    assert_eq!(row.token(), "chantoit");
    assert_eq!(row.lemma(), Some("chanter"));
    assert_eq!(row.pos(), Some("VERcjg"));
    assert_eq!(row.morph(), Some("MODE=ind|TEMPS=impf"));
    assert_eq!(row.get("nonexistent"), None);
}

#[test]
fn short_line_yields_fewer_fields() {
    let corpus = parse_str("token\tlemma\tPOS\tmorph\nchantoit\tchanter\n").unwrap();
    assert_eq!(corpus.rows()[0].field_count(), 2);
    assert_eq!(corpus.rows()[0].pos(), None);
}

#[test]
fn extra_columns_are_preserved() {
    let corpus = parse_str("token\tlemma\tPOS\tmorph\tspeaker\ndit\tdire\tVERcjg\t_\tnarrator\n")
        .unwrap();
    assert_eq!(corpus.rows()[0].get("speaker"), Some("narrator"));
}

#[test]
fn missing_token_column_is_rejected() {
    let err = parse_str("form\tlemma\nchantoit\tchanter\n").unwrap_err();
    assert!(err.to_string().contains("token"));
}

#[test]
fn empty_file_is_rejected() {
    assert!(parse_str("").is_err());
}

#[test]
fn with_field_replaces_without_mutating_original() {
    let corpus = sample();
    let row = &corpus.rows()[0];
    let remapped = row.with_field(LEMMA, "canter".to_string());
    assert_eq!(remapped.lemma(), Some("canter"));
    assert_eq!(remapped.line(), row.line());
    assert_eq!(row.lemma(), Some("chanter"));
}
