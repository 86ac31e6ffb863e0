use super::*;

fn render<F>(quiet: bool, f: F) -> String
where
    F: FnOnce(&mut TextReporter<&mut Vec<u8>>),
{
    let mut buf = Vec::new();
    let mut reporter = TextReporter::new(&mut buf, ColorMode::Never).with_quiet(quiet);
    f(&mut reporter);
    String::from_utf8(buf).unwrap()
}

#[test]
fn diagnostic_line_includes_tag_and_line_number() {
    let out = render(false, |r| {
        r.emit(Level::Fail, Some(12), "lemma 'x' is not in the allowed lemma list");
    });
    assert_eq!(
        out,
        "[fail] line 12: lemma 'x' is not in the allowed lemma list\n"
    );
}

#[test]
fn diagnostic_without_line_number() {
    let out = render(false, |r| {
        r.emit(Level::Info, None, "checking corpus");
    });
    assert_eq!(out, "[info] checking corpus\n");
}

#[test]
fn quiet_mode_keeps_warnings_and_failures() {
    let out = render(true, |r| {
        r.emit(Level::Info, None, "noise");
        r.emit(Level::Ignored, Some(1), "noise");
        r.emit(Level::Warning, Some(2), "kept");
        r.emit(Level::Fail, Some(3), "kept too");
    });
    assert_eq!(out, "[warning] line 2: kept\n[fail] line 3: kept too\n");
}

#[test]
fn summary_states_status_and_error_count() {
    let passed = render(false, |r| {
        r.summary(&Verdict {
            passed: true,
            errors: 0,
        });
    });
    assert_eq!(passed, "Status: Passed (0 errors)\n");

    let failed = render(false, |r| {
        r.summary(&Verdict {
            passed: false,
            errors: 1,
        });
    });
    assert_eq!(failed, "Status: Failed (1 error)\n");
}

#[test]
fn always_mode_emits_ansi_colors() {
    let mut buf = Vec::new();
    let mut reporter = TextReporter::new(&mut buf, ColorMode::Always);
    reporter.emit(Level::Fail, Some(1), "boom");
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("\x1b[31m"));
    assert!(out.contains("\x1b[0m"));
}
