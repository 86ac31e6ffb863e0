use std::io::Write;

use crate::checker::Verdict;

use super::{Level, Reporter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Streams diagnostics to a writer as the engine produces them, one line
/// per event, with a colored severity tag.
pub struct TextReporter<W: Write> {
    writer: W,
    use_colors: bool,
    quiet: bool,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub fn new(writer: W, mode: ColorMode) -> Self {
        Self {
            writer,
            use_colors: should_use_colors(mode),
            quiet: false,
        }
    }

    /// In quiet mode only warnings, failures and the summary are printed.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    const fn level_tag(level: Level) -> &'static str {
        match level {
            Level::Info => "info",
            Level::Ok => "ok",
            Level::Warning => "warning",
            Level::Fail => "fail",
            Level::Ignored => "ignored",
        }
    }

    fn colorize(&self, text: &str, level: Level) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let color = match level {
            Level::Info | Level::Ignored => ansi::CYAN,
            Level::Ok => ansi::GREEN,
            Level::Warning => ansi::YELLOW,
            Level::Fail => ansi::RED,
        };
        format!("{color}{text}{}", ansi::RESET)
    }
}

fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable
            if std::env::var("NO_COLOR").is_ok() {
                return false;
            }
            std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn emit(&mut self, level: Level, line: Option<usize>, message: &str) {
        if self.quiet && matches!(level, Level::Info | Level::Ok | Level::Ignored) {
            return;
        }
        let tag = self.colorize(Self::level_tag(level), level);
        match line {
            Some(line) => writeln!(self.writer, "[{tag}] line {line}: {message}").ok(),
            None => writeln!(self.writer, "[{tag}] {message}").ok(),
        };
    }

    fn summary(&mut self, verdict: &Verdict) {
        let (level, status) = if verdict.passed {
            (Level::Ok, "Passed")
        } else {
            (Level::Fail, "Failed")
        };
        let status = self.colorize(status, level);
        writeln!(
            self.writer,
            "Status: {status} ({} error{})",
            verdict.errors,
            if verdict.errors == 1 { "" } else { "s" }
        )
        .ok();
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
