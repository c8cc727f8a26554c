// dataguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the dataguard application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "dataguard",
    author = "DataGuard Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and sanitize user input",
    long_about = "DataGuard checks values against a catalog of validation rules (email, phone, HTML and SQL pattern rejection, length, range and currency checks) and escapes strings for safe embedding in SQL literals and HTML text.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG to DEBUG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `dataguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates a value against a chain of catalog rules.
    #[command(about = "Validates a value against a chain of catalog rules.")]
    Validate(ValidateCommand),

    /// Escapes a string for safe embedding.
    #[command(about = "Escapes a string for safe embedding in SQL literals and HTML text.")]
    Sanitize(SanitizeCommand),

    /// Lists the rule catalog.
    #[command(about = "Lists the rules available to `validate`.")]
    Rules {
        /// Print the catalog as JSON.
        #[arg(long = "json", help = "Print the catalog as JSON.")]
        json: bool,
    },

    /// Runs the bundled regression suite.
    #[command(name = "self-test", about = "Runs the bundled regression suite against the rule catalog and the sanitizer.")]
    SelfTest,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct ValidateCommand {
    /// The value to validate (reads the input file or stdin if omitted).
    #[arg(value_name = "VALUE", conflicts_with = "input_file", help = "The value to validate. Reads --input-file or stdin when omitted.")]
    pub value: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the value from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Rule specs applied in order.
    #[arg(
        long = "rule",
        short = 'r',
        value_name = "SPEC",
        required_unless_present = "profile",
        help = "Rule to apply, e.g. 'email', 'min_length=3', 'range=1:10', 'regex=^[a-z]+$'. Repeat for a chain."
    )]
    pub rules: Vec<String>,

    /// Path to a YAML rule profile.
    #[arg(long = "profile", short = 'p', value_name = "FILE", env = "DATAGUARD_PROFILE", help = "Load the rule chain from a YAML profile. --rule specs are appended after its rules.")]
    pub profile: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long = "json", help = "Print the validation result as JSON.")]
    pub json: bool,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// The string to sanitize (reads the input file or stdin if omitted).
    #[arg(value_name = "VALUE", conflicts_with = "input_file", help = "The string to sanitize. Reads --input-file or stdin when omitted.")]
    pub value: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Sanitize each line on its own instead of the whole input at once.
    #[arg(long = "line-buffered", help = "Sanitize each input line separately, keeping line breaks.")]
    pub line_buffered: bool,
}
