//! fsa2regex CLI
//!
//! Reads an automaton description, converts it and writes the expression.
//!
//! Exit codes:
//! - 0: Success
//! - 1: The automaton is malformed or invalid
//! - 2: The input or output file could not be accessed

use clap::Parser;
use fsa2regex::{convert, parse_automaton, validate_all, Automaton, ConversionError};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stillwater::validation::Validation;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

const RESET: &str = "\x1b[0m";
const BOLD_RED: &str = "\x1b[1m\x1b[31m";
const BOLD_GREEN: &str = "\x1b[1m\x1b[32m";

/// Convert a finite state automaton into an equivalent regular expression
#[derive(Parser, Debug)]
#[command(name = "fsa2regex")]
#[command(version)]
#[command(about = "Convert a finite state automaton into an equivalent regular expression")]
struct Cli {
    /// Automaton description to read
    input: PathBuf,

    /// File to write the expression to
    output: PathBuf,

    /// Read the description as JSON instead of the five-record text format
    #[arg(long)]
    json: bool,

    /// Report every violated check instead of stopping at the first one
    #[arg(long)]
    all_errors: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Failures of one CLI run.
#[derive(Debug, Error)]
enum CliError {
    #[error("Cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Input file is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("{} checks failed", .0.len())]
    Violations(Vec<ConversionError>),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Read { .. } | Self::Write { .. } => 2,
            Self::Json(_) | Self::Conversion(_) | Self::Violations(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => {
            let color = io::stdout().is_terminal();
            println!(
                "{}OK: {}FSA was successfully converted to Regex",
                paint(BOLD_GREEN, color),
                paint(RESET, color)
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            report(&error);
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let automaton = load(&cli.input, cli.json)?;
    info!(
        path = %cli.input.display(),
        states = automaton.len(),
        transitions = automaton.transitions().len(),
        "loaded automaton"
    );

    if cli.all_errors {
        if let Validation::Failure(errors) = validate_all(&automaton) {
            return Err(CliError::Violations(errors.iter().cloned().collect()));
        }
    }

    let regex = convert(&automaton)?;
    std::fs::write(&cli.output, &regex).map_err(|source| CliError::Write {
        path: cli.output.clone(),
        source,
    })?;
    info!(path = %cli.output.display(), length = regex.len(), "wrote expression");
    Ok(())
}

fn load(path: &Path, json: bool) -> Result<Automaton, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if json {
        debug!("reading JSON description");
        Ok(serde_json::from_str(&text)?)
    } else {
        parse_automaton(&text).map_err(|e| CliError::Conversion(e.into()))
    }
}

fn report(error: &CliError) {
    let color = io::stderr().is_terminal();
    let prefix = format!("{}ERROR: {}", paint(BOLD_RED, color), paint(RESET, color));
    match error {
        CliError::Violations(errors) => {
            for violation in errors {
                eprintln!("{prefix}{violation}");
            }
        }
        other => eprintln!("{prefix}{other}"),
    }
}

fn paint(code: &'static str, enabled: bool) -> &'static str {
    if enabled {
        code
    } else {
        ""
    }
}
