//! Output formatting for CLI commands.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

const CLI_SCHEMA_VERSION: &str = "nid.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Print rows as a table, or `json` as JSON.
///
/// JSON output carries the full data, which may hold more than the table
/// columns.
pub fn print_output<T: Tabled, J: Serialize + ?Sized>(rows: &[T], json: &J, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("{}", "No numbers found.".dimmed());
            } else {
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => println!("{}", format_json(json)),
    }
}

/// Print a summary line.
pub fn print_summary(valid: usize, invalid: usize) {
    let valid = format!("{valid} valid").green();
    let invalid = if invalid == 0 {
        format!("{invalid} invalid").normal()
    } else {
        format!("{invalid} invalid").red()
    };
    println!("{valid}, {invalid}");
}

pub fn format_json<T: Serialize + ?Sized>(data: &T) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    serde_json::to_string_pretty(&wrap_with_schema(value)).unwrap_or_else(|_| "{}".to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}
