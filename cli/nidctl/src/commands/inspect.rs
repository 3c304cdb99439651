//! `nid inspect`: everything derivable from one number.

use anyhow::Result;
use clap::Args;

use crate::error::CliError;
use crate::output::{format_json, print_output, OutputFormat};
use crate::report::Inspection;

use super::CommandContext;

/// Show everything derivable from one number.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Number to inspect.
    number: String,
}

impl InspectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<bool> {
        let number = ctx
            .parse(&self.number)
            .map_err(|e| CliError::invalid(&self.number, e))?;
        let inspection = Inspection::new(&self.number, &number, &ctx.clock);

        match ctx.format {
            OutputFormat::Table => print_output(&inspection.facts(), &inspection, ctx.format),
            OutputFormat::Json => println!("{}", format_json(&inspection)),
        }

        Ok(true)
    }
}
