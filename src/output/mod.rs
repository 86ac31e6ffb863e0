mod json;
mod text;

pub use json::JsonReporter;
pub use text::{ColorMode, TextReporter};

use serde::Serialize;

use crate::checker::Verdict;

/// Severity of a single diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Ok,
    Warning,
    Fail,
    Ignored,
}

/// Sink for the engine's diagnostic stream.
///
/// The engine emits zero or more diagnostics per row, in row order, and
/// exactly one summary at the end of a completed run (an aborted run emits
/// no summary).
pub trait Reporter {
    fn emit(&mut self, level: Level, line: Option<usize>, message: &str);

    fn summary(&mut self, verdict: &Verdict);
}

/// Output format selector for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
