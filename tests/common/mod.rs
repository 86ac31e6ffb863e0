#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the corpus-guard binary.
#[macro_export]
macro_rules! corpus_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("corpus-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a corpus-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file("corpus-guard.toml", content);
    }

    /// Creates a corpus file with the standard four-column header.
    pub fn create_corpus(&self, relative_path: &str, rows: &[&str]) {
        let mut content = String::from("token\tlemma\tPOS\tmorph\n");
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        self.create_file(relative_path, &content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config with a POS vocabulary only.
pub const POS_ONLY_CONFIG: &str = r#"
[vocabulary]
pos = "pos.txt"
"#;

/// Config exercising vocabularies, a manual rule and suppressions.
pub const FULL_CONFIG: &str = r#"
[vocabulary]
lemma = "lemma.txt"
pos = "pos.txt"
morph = "morph.tsv"

[rules]
manual = "rules.tsv"

[options]
allow_numeric_lemma = true

[[ignore]]
scope = "lemma"
value = "nostredame"
comment = "proper noun, reviewed"
"#;
