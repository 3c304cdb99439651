//! Error handling and display for the CLI.

use std::path::PathBuf;

use colored::Colorize;
use nordid_id::ParseError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}' is not a valid identification number: {source}")]
    Invalid {
        input: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl CliError {
    pub fn invalid(input: impl Into<String>, source: ParseError) -> Self {
        Self::Invalid {
            input: input.into(),
            source,
        }
    }
}

/// Hint printed under an error, if one applies.
fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Invalid { source, .. } => match source {
            ParseError::SchemeDisabled { .. } => {
                Some("Hint: Enable the scheme with `--allow <scheme>` or in the config file.")
            }
            ParseError::ChecksumMismatch { .. } => {
                Some("Hint: A digit may be mistyped or two digits swapped.")
            }
            ParseError::MalformedInput { .. } => Some(
                "Hint: Expected forms are YYMMDD-NNNC, CCYYMMDDNNNC, DDMMYYNNNCC or DDMMYY-NNNN.",
            ),
            ParseError::DateInvalid { .. } | ParseError::TypeMismatch { .. } => None,
        },
        CliError::Config(_) => {
            Some("Hint: Check the file passed with --config and any NID_* environment variables.")
        }
        CliError::Read { .. } | CliError::Logging(_) => None,
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(hint) {
        eprintln!("\n{}", hint.yellow());
    }
}
