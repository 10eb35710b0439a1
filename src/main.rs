// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod level_document;
mod reconcile;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report audio filenames referenced more than once across the level documents
    #[command(alias = "dup")]
    Duplicates(ScanArgs),

    /// Filter a candidate audio list against already-referenced filenames
    Filter(FilterArgs),

    /// Generate shell completions for audioref
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ScanArgs {
    /// Directory containing the content files
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Level document to scan, in order (repeatable; defaults to the standard set)
    #[arg(long = "document", value_name = "FILE")]
    documents: Vec<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct FilterArgs {
    #[command(flatten)]
    scan: ScanArgs,

    /// Candidate list file, one audio path per line
    #[arg(short, long)]
    input: Option<String>,

    /// Output file for the kept lines
    #[arg(short, long)]
    output: Option<String>,

    /// Basename to always exclude (repeatable; replaces the built-in list)
    #[arg(short = 'x', long = "exclude", value_name = "BASENAME")]
    excludes: Vec<String>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,
}

/// audioref - Audio reference reconciliation for word-game level content
///
/// Maintenance tools for the static audio/JSON content pipeline: find
/// duplicate audio filename references across level documents, and filter a
/// candidate audio list down to the files not yet referenced.
#[derive(Parser, Debug)]
#[command(name = "audioref")]
#[command(version = "1.0.0")]
#[command(about = "Audio reference maintenance for word-game level content")]
#[command(long_about = "audioref scans level-definition JSON documents for the audio filenames they
reference, reports exact duplicates, and filters candidate audio lists
against the already-referenced set.

EXAMPLES:
    audioref duplicates                          # Scan the default documents in .
    audioref duplicates -d public/data/en        # Scan in a content directory
    audioref filter                              # Filter input.txt into output.txt
    audioref filter -i wavs.txt -o needed.txt    # Explicit candidate/output files
    audioref filter -x ceri -x bianche           # Replace the manual exclusion list
    audioref filter -f                           # Overwrite an existing output file
    audioref duplicates --log-level debug        # Verbose scanning
    audioref completions bash > audioref.bash    # Generate bash completions

DOCUMENTS:
    By default both commands scan levels1-12.json, levels13-24.json and
    levels25-36.json inside the data directory. Pass --document one or more
    times to scan a different set, in the given order.

MATCHING:
    Filename comparison is exact and case-sensitive; 'Bianca.wav' and
    'bianca.wav' are different files. Candidate lines match on their
    basename only (directory and extension stripped), never on substrings.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and marker for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("31", "!!"),
            Level::Warn => ("33", " !"),
            Level::Info => ("32", "  "),
            Level::Debug => ("36", "->"),
            Level::Trace => ("35", ".."),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, marker) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[1;{}m{} {} {}\x1B[0m",
                color,
                now,
                marker,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level from the CLI options if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "audioref", &mut std::io::stdout());
            Ok(())
        }
        Commands::Duplicates(args) => run_duplicates(args),
        Commands::Filter(args) => run_filter(args),
    }
}

/// Build the run configuration from defaults plus scan options
fn build_config(args: &ScanArgs) -> Result<Config> {
    let mut config = Config::default();
    config.data_dir = args.data_dir.clone();

    if !args.documents.is_empty() {
        config.documents = args.documents.clone();
    }

    if let Some(log_level) = &args.log_level {
        config.log_level = log_level.clone().into();
        log::set_max_level(level_filter(&config.log_level));
    }

    // Validate the configuration after applying overrides
    config.validate()?;
    Ok(config)
}

fn run_duplicates(args: ScanArgs) -> Result<()> {
    let config = build_config(&args)?;
    let controller = Controller::with_config(config)?;
    controller.run_duplicates()
}

fn run_filter(args: FilterArgs) -> Result<()> {
    let mut config = build_config(&args.scan)?;

    if let Some(input) = &args.input {
        config.candidate_input = input.clone();
    }
    if let Some(output) = &args.output {
        config.filtered_output = output.clone();
    }
    if !args.excludes.is_empty() {
        config.manual_exclusions = args.excludes.clone();
    }
    config.validate()?;

    let controller = Controller::with_config(config)?;
    controller.run_filter(args.force_overwrite)
}
