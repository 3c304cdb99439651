//! `nid check`: validate numbers given on the command line.

use anyhow::Result;
use clap::Args;

use crate::output::{print_output, print_summary, OutputFormat};
use crate::report::CheckRow;

use super::CommandContext;

/// Check whether numbers are valid.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Numbers to check.
    #[arg(required = true)]
    numbers: Vec<String>,
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<bool> {
        let rows = check_all(ctx, &self.numbers);
        let invalid = rows.iter().filter(|r| !r.valid).count();

        print_output(&rows, &rows, ctx.format);
        if ctx.format == OutputFormat::Table {
            print_summary(rows.len() - invalid, invalid);
        }

        Ok(invalid == 0)
    }
}

pub(super) fn check_all(ctx: &CommandContext, inputs: &[String]) -> Vec<CheckRow> {
    inputs
        .iter()
        .map(|input| {
            let result = ctx.parse(input);
            if let Err(err) = &result {
                tracing::debug!(input = %input, error = %err, "rejected");
            }
            CheckRow::new(input, &result)
        })
        .collect()
}
