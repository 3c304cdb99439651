//! CLI commands.

mod batch;
mod check;
mod format;
mod inspect;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use nordid_id::{Clock, FixedClock, IdentificationNumber, Options, ParseError, SystemClock};

use crate::config::{LogFormat, Settings};
use crate::logging;
use crate::output::OutputFormat;

/// nid - check and format Nordic personal identification numbers.
#[derive(Debug, Parser)]
#[command(name = "nid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (TOML). Defaults to nid.toml in the platform config dir.
    #[arg(long, global = true, env = "NID_CONFIG")]
    config: Option<PathBuf>,

    /// Output format; overrides the config file.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Evaluate as if today were this date (YYYY-MM-DD).
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Accept a scheme or variant. May be repeated.
    #[arg(long, global = true, value_enum)]
    allow: Vec<SchemeArg>,

    /// Reject a scheme or variant. May be repeated; wins over --allow.
    #[arg(long, global = true, value_enum)]
    deny: Vec<SchemeArg>,

    /// Log level filter (e.g. warn, debug). RUST_LOG takes precedence.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log line format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether numbers are valid.
    Check(check::CheckCommand),

    /// Show everything derivable from one number.
    Inspect(inspect::InspectCommand),

    /// Print the canonical short or long form of a number.
    Format(format::FormatCommand),

    /// Check every number in a file, one per line.
    Batch(batch::BatchCommand),

    /// Show CLI version.
    Version,
}

/// A toggle name accepted by `--allow` and `--deny`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    /// Swedish personal identity numbers.
    Personal,
    /// Swedish coordination numbers.
    Coordination,
    /// T-numbers.
    TNumber,
    /// VGR reserve numbers.
    Vgr,
    /// SLL reserve numbers.
    Sll,
    /// RVB reserve numbers.
    Rvb,
    /// Norwegian birth numbers.
    Norwegian,
    /// Danish CPR numbers.
    Danish,
    /// Interim numbers (a letter in the serial).
    Interim,
}

impl SchemeArg {
    /// The option key this argument toggles.
    pub const fn option_key(self) -> &'static str {
        match self {
            Self::Personal => "allowPersonalIdentityNumber",
            Self::Coordination => "allowCoordinationNumber",
            Self::TNumber => "allowTNumber",
            Self::Vgr => "allowVgrReserveNumber",
            Self::Sll => "allowSllReserveNumber",
            Self::Rvb => "allowRvbReserveNumber",
            Self::Norwegian => "allowNorwegianBirthNumber",
            Self::Danish => "allowDanishCprNumber",
            Self::Interim => "allowInterimNumber",
        }
    }
}

/// Apply `--allow` then `--deny` on top of `options`.
fn apply_toggles(mut options: Options, allow: &[SchemeArg], deny: &[SchemeArg]) -> Options {
    for arg in allow {
        options.set(arg.option_key(), true);
    }
    for arg in deny {
        options.set(arg.option_key(), false);
    }
    options
}

impl Cli {
    /// Run the CLI command. Returns false if any input was invalid.
    pub fn run(self) -> Result<bool> {
        if matches!(self.command, Commands::Version) {
            println!("nid {}", env!("CARGO_PKG_VERSION"));
            return Ok(true);
        }

        let settings = Settings::load(self.config.as_deref())?;

        logging::init(
            self.log_level.as_deref().unwrap_or(&settings.log_level),
            self.log_format.unwrap_or(settings.log_format),
        )?;

        let options = apply_toggles(settings.options, &self.allow, &self.deny);
        let today = self.today.unwrap_or_else(|| SystemClock.today());
        tracing::debug!(?options, %today, "settings resolved");

        let ctx = CommandContext {
            format: self.format.unwrap_or(settings.output),
            options,
            clock: FixedClock::on(today),
        };

        match self.command {
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Inspect(cmd) => cmd.run(&ctx),
            Commands::Format(cmd) => cmd.run(&ctx),
            Commands::Batch(cmd) => cmd.run(&ctx),
            Commands::Version => Ok(true),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub options: Options,
    /// Frozen for the whole run so every input sees the same "today".
    pub clock: FixedClock,
}

impl CommandContext {
    /// Parse one input with the resolved options and clock.
    pub fn parse(&self, input: &str) -> Result<IdentificationNumber, ParseError> {
        IdentificationNumber::parse_with_clock(input, &self.options, &self.clock)
    }
}

#[cfg(test)]
pub(crate) fn test_context(format: OutputFormat) -> CommandContext {
    CommandContext {
        format,
        options: Options::default(),
        clock: FixedClock::from_ymd(2024, 6, 15).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SchemeArg::Personal, "allowPersonalIdentityNumber")]
    #[case(SchemeArg::Coordination, "allowCoordinationNumber")]
    #[case(SchemeArg::TNumber, "allowTNumber")]
    #[case(SchemeArg::Vgr, "allowVgrReserveNumber")]
    #[case(SchemeArg::Sll, "allowSllReserveNumber")]
    #[case(SchemeArg::Rvb, "allowRvbReserveNumber")]
    #[case(SchemeArg::Norwegian, "allowNorwegianBirthNumber")]
    #[case(SchemeArg::Danish, "allowDanishCprNumber")]
    #[case(SchemeArg::Interim, "allowInterimNumber")]
    fn test_scheme_arg_names_a_known_option(#[case] arg: SchemeArg, #[case] key: &str) {
        assert_eq!(arg.option_key(), key);
        assert!(Options::is_known_key(arg.option_key()));
    }

    #[test]
    fn test_deny_wins_over_allow() {
        let options = apply_toggles(
            Options::default(),
            &[SchemeArg::Interim, SchemeArg::Danish],
            &[SchemeArg::Danish],
        );
        assert!(options.allow_interim_number);
        assert!(!options.allow_danish_cpr_number);
        assert!(options.allow_norwegian_birth_number);
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "nid",
            "check",
            "--today",
            "2024-06-15",
            "--deny",
            "norwegian",
            "--format",
            "json",
            "6403273813",
        ])
        .unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(cli.deny, vec![SchemeArg::Norwegian]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Check(_)));
    }
}
