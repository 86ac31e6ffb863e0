use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;

use corpus_guard::checker::{RowBounds, Validator};
use corpus_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use corpus_guard::config::{self, CONFIG_FILE_NAME, STARTER_CONFIG};
use corpus_guard::corpus;
use corpus_guard::output::{ColorMode, JsonReporter, OutputFormat, Reporter, TextReporter};
use corpus_guard::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> corpus_guard::Result<i32> {
    // 1. Load configuration and build the engine tables
    let loaded = config::load_config(args.config.as_deref())?;
    let validator = Validator::new(config::build_validator_config(&loaded)?);

    // 2. Read the corpus
    let corpus = corpus::read_path(&args.corpus)?;

    // 3. Run the check pass into the selected reporter
    let writer = open_output(args.output.as_deref())?;
    let mut reporter = make_reporter(args.format, writer, cli);
    let verdict = validator.check(
        &corpus,
        RowBounds {
            from: args.from,
            to: args.to,
        },
        reporter.as_mut(),
    )?;

    Ok(if verdict.passed {
        EXIT_SUCCESS
    } else {
        EXIT_CHECK_FAILED
    })
}

fn open_output(path: Option<&Path>) -> corpus_guard::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    })
}

fn make_reporter(format: OutputFormat, writer: Box<dyn Write>, cli: &Cli) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(
            TextReporter::new(writer, color_choice_to_mode(cli.color)).with_quiet(cli.quiet),
        ),
        OutputFormat::Json => Box::new(JsonReporter::new(writer)),
    }
}

fn run_init(args: &InitArgs) -> i32 {
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| CONFIG_FILE_NAME.into());
    if path.exists() && !args.force {
        eprintln!(
            "Error: {} already exists (use --force to overwrite)",
            path.display()
        );
        return EXIT_CONFIG_ERROR;
    }
    match std::fs::write(&path, STARTER_CONFIG) {
        Ok(()) => {
            println!("Wrote {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to write {}: {e}", path.display());
            EXIT_CONFIG_ERROR
        }
    }
}
