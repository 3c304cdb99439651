//! nidctl (nid) - check and format Nordic personal identification numbers
//!
//! Validates Swedish personal identity, coordination and reserve numbers,
//! Norwegian birth numbers and Danish CPR numbers from the command line or
//! from files.

use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;
mod report;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(true) => {}
        // Some input was not a valid number; the report says which.
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error::print_error(&e);
            std::process::exit(2);
        }
    }
}
