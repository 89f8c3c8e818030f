//! Output format writers.
//!
//! - [`write_json`] / [`to_json`] - the full report as pretty JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - the message table, semicolon delimited - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatdigest::Result<()> {
//! use chatdigest::core::output::{write_csv, write_json};
//! use chatdigest::parser::TranscriptParser;
//!
//! let report = TranscriptParser::new().analyze("chat.txt".as_ref())?;
//!
//! write_json(&report, "chat_parsed.json")?;
//! write_csv(&report.messages, "chat_messages.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
