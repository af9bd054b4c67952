// cardcheck/src/cli.rs
//! This file defines the command-line interface (CLI) for the cardcheck
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cardcheck",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate payment card numbers with composite checks",
    long_about = "Cardcheck is a command-line utility for validating candidate payment-card numbers. Each candidate is normalized to digits, length-gated, classified by issuer, and run through a composite of checksum, entropy, and repetition checks. Results are printed as a stage-by-stage trace with a final verdict and elapsed time, or as machine-readable JSON.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'cardcheck' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cardcheck` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates a candidate card number, or a stream of candidates.
    #[command(about = "Validates a candidate card number, or a stream of candidates from a file or stdin.")]
    Check(CheckCommand),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// The candidate number to validate.
    #[arg(value_name = "NUMBER", help = "The candidate number to validate. When omitted, candidates are read from stdin, one per line.")]
    pub number: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "number", help = "Read candidate numbers from a file, one per line, instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom validation configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom validation configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Print each report as JSON to stdout (conflicts with --no-trace).
    #[arg(long = "json-stdout", conflicts_with = "no_trace", help = "Print each report as a JSON object on stdout instead of the human-readable trace.")]
    pub json_stdout: bool,

    /// Suppress the per-stage trace lines.
    #[arg(long = "no-trace", help = "Suppress the per-stage trace lines; print only the verdict.")]
    pub no_trace: bool,

    /// Suppress the elapsed-time line.
    #[arg(long = "no-timing", help = "Suppress the elapsed-time line (useful for deterministic output in scripts).")]
    pub no_timing: bool,

    /// Exit with a non-zero code if any candidate fails validation.
    #[arg(long = "fail-on-invalid", help = "Exit with code 2 if any candidate fails validation.")]
    pub fail_on_invalid: bool,
}
