//! # nordid-id
//!
//! Parsing, validation and formatting of Nordic personal identification
//! numbers.
//!
//! ## Supported schemes
//!
//! - Swedish personal identity numbers, including coordination numbers
//!   (day + 60) and, when enabled, interim numbers
//! - Swedish T-numbers and the VGR, SLL and RVB regional reserve numbers
//! - Norwegian birth numbers
//! - Danish CPR numbers
//!
//! ## Resolution
//!
//! A raw string is classified by shape, parsed by the matching scheme
//! grammar, then checked in a fixed order: checksum, date, options. Every
//! accepted number carries exactly one [`Scheme`]. The library never reads
//! the system time on its own when a [`Clock`] is passed; the `*_with_clock`
//! entry points make results deterministic.
//!
//! ```
//! use nordid_id::{FixedClock, IdentificationNumber, Options};
//!
//! let clock = FixedClock::from_ymd(2024, 6, 15).unwrap();
//! let options = Options::default();
//!
//! let number = IdentificationNumber::parse_with_clock("701063-2391", &options, &clock).unwrap();
//! assert!(number.is_coordination_number());
//! assert_eq!(number.format_long(), "197010632391");
//!
//! assert!(!IdentificationNumber::is_valid_with_clock("990919-3776", &options, &clock));
//! ```

pub mod calendar;
pub mod century;
pub mod checksum;
pub mod classify;
mod clock;
mod error;
mod fields;
mod macros;
mod number;
mod options;
mod parsers;
mod scheme;
mod validate;

pub use classify::Candidate;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ParseError;
pub use fields::{ParsedFields, ReserveCharacter, Separator};
pub use number::{IdentificationNumber, Sex};
pub use options::{Options, OPTION_KEYS};
pub use scheme::Scheme;
