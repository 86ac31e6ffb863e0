use std::io::Write;

use serde::Serialize;

use crate::checker::Verdict;

use super::{Level, Reporter};

#[derive(Debug, Clone, Serialize)]
struct JsonDiagnostic {
    level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    message: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    status: &'static str,
    errors: usize,
    diagnostics: &'a [JsonDiagnostic],
}

/// Collects the diagnostic stream and writes one JSON document at summary
/// time, for CI consumption.
pub struct JsonReporter<W: Write> {
    writer: W,
    diagnostics: Vec<JsonDiagnostic>,
}

impl<W: Write> JsonReporter<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            diagnostics: Vec::new(),
        }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn emit(&mut self, level: Level, line: Option<usize>, message: &str) {
        self.diagnostics.push(JsonDiagnostic {
            level,
            line,
            message: message.to_string(),
        });
    }

    fn summary(&mut self, verdict: &Verdict) {
        let report = JsonReport {
            status: if verdict.passed { "passed" } else { "failed" },
            errors: verdict.errors,
            diagnostics: &self.diagnostics,
        };
        if let Ok(rendered) = serde_json::to_string_pretty(&report) {
            writeln!(self.writer, "{rendered}").ok();
        }
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
