//! `nid format`: canonical short or long form.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{format_json, OutputFormat};

use super::CommandContext;

/// Print the canonical short or long form of a number.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Number to format.
    number: String,

    /// Use the long form (four-digit year, no separator).
    #[arg(long)]
    long: bool,
}

#[derive(Debug, Serialize)]
struct Formatted<'a> {
    input: &'a str,
    formatted: String,
}

impl FormatCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<bool> {
        let formatted = ctx
            .parse(&self.number)
            .map_err(|e| CliError::invalid(&self.number, e))?
            .format(self.long);

        match ctx.format {
            OutputFormat::Table => println!("{formatted}"),
            OutputFormat::Json => println!(
                "{}",
                format_json(&Formatted {
                    input: &self.number,
                    formatted,
                })
            ),
        }

        Ok(true)
    }
}
