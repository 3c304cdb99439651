//! `nid batch`: check every number in a file.

use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{format_json, print_output, print_summary, OutputFormat};
use crate::report::CheckRow;

use super::check::check_all;
use super::CommandContext;

/// Check every number in a file, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Args)]
pub struct BatchCommand {
    /// Input file, or `-` for stdin.
    file: PathBuf,

    /// Only print invalid numbers.
    #[arg(long)]
    invalid_only: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    valid: usize,
    invalid: usize,
}

#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    results: &'a [CheckRow],
    summary: Summary,
}

impl BatchCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<bool> {
        let inputs = read_inputs(&self.file)?;
        tracing::debug!(count = inputs.len(), file = %self.file.display(), "read inputs");

        let rows = check_all(ctx, &inputs);
        let invalid = rows.iter().filter(|r| !r.valid).count();
        let summary = Summary {
            valid: rows.len() - invalid,
            invalid,
        };

        let shown: Vec<CheckRow> = if self.invalid_only {
            rows.into_iter().filter(|r| !r.valid).collect()
        } else {
            rows
        };

        match ctx.format {
            OutputFormat::Table => {
                print_output(&shown, &shown, ctx.format);
                print_summary(summary.valid, summary.invalid);
            }
            OutputFormat::Json => println!(
                "{}",
                format_json(&BatchReport {
                    results: &shown,
                    summary,
                })
            ),
        }

        Ok(invalid == 0)
    }
}

fn read_inputs(path: &Path) -> Result<Vec<String>, CliError> {
    let read_err = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };

    let reader: Box<dyn Read> = if path == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        Box::new(std::fs::File::open(path).map_err(read_err)?)
    };

    parse_lines(BufReader::new(reader)).map_err(read_err)
}

/// Collect the inputs from `reader`, trimmed, skipping blanks and comments.
fn parse_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        inputs.push(line.to_string());
    }
    Ok(inputs)
}
