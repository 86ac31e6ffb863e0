use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "corpus-guard")]
#[command(author, version, about = "Annotation corpus guard - validate lemma/POS/morph annotations")]
#[command(long_about = "A tool to validate annotated corpora against configurable \
    vocabularies and rule sets.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Annotation errors found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check an annotated corpus against the configured rule set
    Check(CheckArgs),

    /// Generate a starter configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Corpus file to check (tab-separated, with a header row)
    pub corpus: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First row to check (0-based index, inclusive)
    #[arg(long)]
    pub from: Option<usize>,

    /// Last row to check (0-based index, inclusive)
    #[arg(long)]
    pub to: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the configuration (default: corpus-guard.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
