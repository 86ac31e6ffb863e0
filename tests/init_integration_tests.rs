mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_writes_the_starter_config() {
    let fixture = TestFixture::new();

    corpus_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("corpus-guard.toml"));

    let written = std::fs::read_to_string(fixture.path().join("corpus-guard.toml")).unwrap();
    assert!(written.contains("expected_columns"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing\n");

    corpus_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    corpus_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn init_honors_a_custom_output_path() {
    let fixture = TestFixture::new();

    corpus_guard!()
        .current_dir(fixture.path())
        .args(["init", "--output", "custom.toml"])
        .assert()
        .success();

    assert!(fixture.path().join("custom.toml").exists());
}

#[test]
fn generated_config_is_immediately_usable() {
    let fixture = TestFixture::new();

    corpus_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success();

    fixture.create_corpus("corpus.tsv", &["chantoit\tchanter\tVERcjg\t_"]);

    corpus_guard!()
        .current_dir(fixture.path())
        .args(["check", "corpus.tsv", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Passed"));
}
