// rut/src/cli.rs
//! This file defines the command-line interface (CLI) for the rut application,
//! including all available commands and their arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use rut_core::OutputFormat;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rut",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clean, format and validate Chilean RUT numbers",
    long_about = "rut normalizes Chilean national identification numbers (RUT). It strips punctuation and noise, renders the canonical 12.345.678-5 form, verifies the modulo-11 check character, and finds RUTs inside free text.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration file.
    #[arg(long = "config", value_name = "FILE", global = true, env = "RUT_CONFIG", help = "Path to a YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `rut` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Strips everything but the body digits and the check character.
    #[command(about = "Strip everything but the body digits and the check character.")]
    Clean(InputArgs),

    /// Renders values as 12.345.678-5.
    #[command(about = "Render values as 12.345.678-5.")]
    Format(InputArgs),

    /// Prints `true` or `false` for each value.
    #[command(about = "Verify the check character of each value.")]
    Validate(ValidateCommand),

    /// Dispatches to clean, format or validate by name.
    #[command(about = "Apply an action by name (clean, format or validate; anything else formats).")]
    Filter(FilterCommand),

    /// Reports cleaned, formatted and validity for each value, plus totals.
    #[command(about = "Report cleaned form, formatted form and validity for each value.")]
    Check(CheckCommand),

    /// Finds RUTs in free text.
    #[command(about = "Find RUTs in free text and verify each one.")]
    Scan(ScanCommand),
}

/// Where the values come from: positional arguments, a file, or stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Values to process. When omitted, values are read one per line.
    #[arg(value_name = "VALUE", help = "Values to process (reads lines from --input-file or stdin if omitted).")]
    pub values: Vec<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read values from a file, one per line.")]
    pub input_file: Option<PathBuf>,

    /// Process blank lines instead of skipping them.
    #[arg(long = "keep-blank", help = "Process blank input lines instead of skipping them.")]
    pub keep_blank: bool,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Exit with status 1 when any value is invalid.
    #[arg(long = "fail-on-invalid", help = "Exit with status 1 if any value is invalid.")]
    pub fail_on_invalid: bool,
}

/// Arguments for the `filter` command.
#[derive(Args, Debug)]
pub struct FilterCommand {
    /// The action to apply.
    #[arg(long, short = 'a', value_name = "ACTION", help = "Action to apply: clean, format or validate.")]
    pub action: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// How to render the results.
    #[arg(long, short = 'o', value_enum, value_name = "FORMAT", help = "Output format: plain, json or table.")]
    pub output: Option<OutputChoice>,

    /// Exit with status 1 when any value is invalid.
    #[arg(long = "fail-on-invalid", help = "Exit with status 1 if any value is invalid.")]
    pub fail_on_invalid: bool,

    /// Suppress the totals block.
    #[arg(long = "no-summary", help = "Suppress the summary printed after plain output.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read text from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Only report RUTs whose check character is correct.
    #[arg(long = "only-valid", help = "Only report RUTs whose check character is correct.")]
    pub only_valid: bool,

    /// How to render the results.
    #[arg(long, short = 'o', value_enum, value_name = "FORMAT", help = "Output format: plain, json or table.")]
    pub output: Option<OutputChoice>,

    /// Exit with status 1 when any RUT found is invalid.
    #[arg(long = "fail-on-invalid", help = "Exit with status 1 if any RUT found is invalid.")]
    pub fail_on_invalid: bool,
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputChoice {
    /// One line per value.
    Plain,
    /// A JSON array.
    Json,
    /// A bordered table.
    Table,
}

impl From<OutputChoice> for OutputFormat {
    fn from(choice: OutputChoice) -> Self {
        match choice {
            OutputChoice::Plain => OutputFormat::Plain,
            OutputChoice::Json => OutputFormat::Json,
            OutputChoice::Table => OutputFormat::Table,
        }
    }
}
