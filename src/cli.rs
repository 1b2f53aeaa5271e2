//! Defines the command-line interface for the application.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "addend",
    version,
    about = "Find two entries in a sequence of integers that sum to a target."
)]
pub struct Cli {
    /// Whitespace-separated sequence of integers to scan.
    #[arg(
        short,
        long,
        value_name = "INTEGERS",
        conflicts_with = "file",
        allow_hyphen_values = true
    )]
    pub nums: Option<String>,

    /// A file holding the sequence on its first non-blank line and,
    /// optionally, the target on the second. Use '-' to read the same layout
    /// from stdin without prompts.
    #[arg(short, long, value_name = "FILE_PATH")]
    pub file: Option<PathBuf>,

    /// The target sum. Required when the input source carries no target line;
    /// overrides the target line when both are present.
    #[arg(short, long, value_name = "INTEGER", allow_hyphen_values = true)]
    pub target: Option<i64>,

    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How the resulting pair (or empty result) is rendered on stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bracketed index pair, e.g. `[0, 1]`, or `[]` when no pair exists.
    Text,
    /// JSON object with `first` and `second` fields, or `null`.
    Json,
}
