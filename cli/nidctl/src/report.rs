//! Report shapes shared by the commands.

use chrono::NaiveDate;
use nordid_id::{Clock, IdentificationNumber, ParseError, Scheme, Sex};
use serde::Serialize;
use tabled::Tabled;

/// Outcome of checking one input.
#[derive(Debug, Clone, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct CheckRow {
    #[tabled(rename = "Input")]
    pub input: String,

    #[tabled(rename = "Valid")]
    pub valid: bool,

    #[tabled(rename = "Scheme", display = "display_scheme")]
    pub scheme: Option<Scheme>,

    #[tabled(rename = "Canonical", display = "display_option")]
    pub canonical: Option<String>,

    #[tabled(rename = "Error", display = "display_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

fn display_scheme(opt: &Option<Scheme>) -> String {
    opt.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

impl CheckRow {
    pub fn new(input: &str, result: &Result<IdentificationNumber, ParseError>) -> Self {
        match result {
            Ok(number) => Self {
                input: input.to_string(),
                valid: true,
                scheme: Some(number.scheme()),
                canonical: Some(number.format_short()),
                error: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                valid: false,
                scheme: None,
                canonical: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Everything known about one valid number.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub input: String,
    pub scheme: Scheme,
    pub short: String,
    pub long: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
    pub sex: Option<Sex>,
    pub coordination_number: bool,
    pub interim_number: bool,
    pub reserve_number: bool,
    pub reserve_character: Option<char>,
}

impl Inspection {
    pub fn new<C: Clock + ?Sized>(input: &str, number: &IdentificationNumber, clock: &C) -> Self {
        let birth_date = number.birth_date();
        Self {
            input: input.to_string(),
            scheme: number.scheme(),
            short: number.format_short(),
            long: number.format_long(),
            birth_date,
            // SLL numbers carry no birth date, so no age either
            age: birth_date.map(|_| number.age(clock)),
            sex: number.sex(),
            coordination_number: number.is_coordination_number(),
            interim_number: number.is_interim_number(),
            reserve_number: number.is_reserve_number(),
            reserve_character: number.reserve_character().map(|r| r.letter()),
        }
    }

    /// Field/value pairs for table output.
    pub fn facts(&self) -> Vec<Fact> {
        let yes_no = |b: bool| (if b { "yes" } else { "no" }).to_string();
        let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
        vec![
            Fact::new("Scheme", self.scheme.to_string()),
            Fact::new("Short", self.short.clone()),
            Fact::new("Long", self.long.clone()),
            Fact::new("Birth date", or_dash(self.birth_date.map(|d| d.to_string()))),
            Fact::new("Age", or_dash(self.age.map(|a| a.to_string()))),
            Fact::new("Sex", or_dash(self.sex.map(|s| s.to_string()))),
            Fact::new("Coordination number", yes_no(self.coordination_number)),
            Fact::new("Interim number", yes_no(self.interim_number)),
            Fact::new("Reserve number", yes_no(self.reserve_number)),
            Fact::new(
                "Reserve character",
                or_dash(self.reserve_character.map(String::from)),
            ),
        ]
    }
}

/// One row of `inspect` table output.
#[derive(Debug, Clone, Tabled)]
pub struct Fact {
    #[tabled(rename = "Field")]
    pub field: &'static str,

    #[tabled(rename = "Value")]
    pub value: String,
}

impl Fact {
    fn new(field: &'static str, value: String) -> Self {
        Self { field, value }
    }
}
