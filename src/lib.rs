//! Core library for addend, the two-sum index lookup tool.
//!
//! The crate scans a sequence of integers for two distinct positions whose
//! values sum to a target and reports their indices. [`finder::find_pair`] is
//! the single-pass core; [`run`] wraps it in the command-line driver.
//!
//! # Example
//!
//! ```rust
//! use addend::finder::{find_pair, Pair};
//!
//! let pair = find_pair(&[2, 7, 11, 15], 9);
//! assert_eq!(pair, Some(Pair { first: 0, second: 1 }));
//! ```

pub mod cli;
pub mod error;
pub mod finder;
pub mod input;

use crate::cli::{Cli, OutputFormat};
use crate::error::InputError;
use crate::finder::{find_pair, Pair};
use crate::input::{parse_document, parse_numbers, parse_target};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let Cli {
        nums,
        file,
        target,
        format,
    } = Cli::parse();

    let (nums, input_target) = resolve_input(nums, file.as_ref())?;

    let target = target.or(input_target).ok_or_else(|| {
        anyhow!("No target number was provided. Pass --target or include a target line in the input.")
    })?;

    log::debug!(
        "scanning {} numbers for a pair summing to {}",
        nums.len(),
        target
    );

    let pair = find_pair(&nums, target);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render_pair(pair, format)?)?;
    stdout.flush()?;

    Ok(())
}

/// Resolves the number sequence and, when the source carries one, the target.
fn resolve_input(
    nums: Option<String>,
    file: Option<&PathBuf>,
) -> anyhow::Result<(Vec<i64>, Option<i64>)> {
    match (nums, file) {
        (Some(inline), None) => Ok((parse_numbers(&inline)?, None)),
        (None, Some(path)) => {
            let content = if path.to_string_lossy() == "-" {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file: {}", path.display()))?
            };
            Ok(parse_document(&content)?)
        }
        (None, None) => {
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();

            let numbers_line = prompt_line(&mut lines, "Enter a list of numbers: ")?
                .ok_or(InputError::MissingNumbers)?;
            let nums = parse_numbers(&numbers_line)?;

            let target_line = prompt_line(&mut lines, "Enter a target number: ")?
                .ok_or(InputError::MissingTarget)?;
            let target = parse_target(&target_line)?;

            Ok((nums, Some(target)))
        }
        (Some(_), Some(_)) => unreachable!("clap's conflicts_with should prevent this"),
    }
}

/// Writes a prompt to stderr and reads the next line, so stdout carries
/// nothing but the result.
fn prompt_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> anyhow::Result<Option<String>> {
    let mut stderr = io::stderr().lock();
    stderr.write_all(prompt.as_bytes())?;
    stderr.flush()?;

    Ok(lines.next().transpose()?)
}

fn render_pair(pair: Option<Pair>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(match pair {
            Some(Pair { first, second }) => format!("[{first}, {second}]"),
            None => "[]".to_string(),
        }),
        OutputFormat::Json => {
            serde_json::to_string(&pair).with_context(|| "Failed to serialize the result as JSON")
        }
    }
}
