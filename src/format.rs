//! Output format selection.
//!
//! These types don't depend on the CLI, so a library caller can pick a
//! writer from a name or a file extension.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatdigest::Result<()> {
//! use chatdigest::format::{OutputFormat, write_to_format};
//! use chatdigest::parser::TranscriptParser;
//!
//! let report = TranscriptParser::new().analyze("chat.txt".as_ref())?;
//!
//! let format = OutputFormat::from_path("chat_parsed.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//! write_to_format(&report, "chat_parsed.csv", format)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::ChatReport;
use crate::error::ChatdigestError;

/// Output format for a chat report.
///
/// - [`Json`](OutputFormat::Json) - the full report: metadata, summary, action items, messages
/// - [`Csv`](OutputFormat::Csv) - the message table only, one row per message
///
/// # Example
///
/// ```rust
/// use chatdigest::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("csv").unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed JSON report (default)
    #[default]
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Csv]
    }

    /// Returns the MIME type for this format.
    ///
    /// ```rust
    /// use chatdigest::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.mime_type(), "application/json");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// ```rust
    /// use chatdigest::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("out/chat_parsed.JSON").unwrap();
    /// assert_eq!(format, OutputFormat::Json);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatdigestError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatdigestError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: {}",
                    ext,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Json => "json-output",
            OutputFormat::Csv => "csv-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the specified format.
///
/// CSV carries only the message table; use JSON to keep the summary and
/// action items.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    report: &ChatReport,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatdigestError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(&report.messages, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders a report to a string in the specified format.
///
/// ```rust
/// # #[cfg(feature = "csv-output")]
/// # fn example() -> chatdigest::Result<()> {
/// use chatdigest::format::{OutputFormat, to_format_string};
/// use chatdigest::parser::TranscriptParser;
///
/// let report = TranscriptParser::new()
///     .analyze_str("[01/02/2024, 09:00:00] Alice: Hello", "inline");
/// let csv = to_format_string(&report, OutputFormat::Csv)?;
/// assert!(csv.contains("Alice;Hello"));
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    report: &ChatReport,
    format: OutputFormat,
) -> Result<String, ChatdigestError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(&report.messages),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> ChatdigestError {
    ChatdigestError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TranscriptParser;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        let err = OutputFormat::from_str("jsonl").unwrap_err();
        assert!(err.contains("json, csv"));
    }

    #[test]
    fn test_format_display_and_extension() {
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Csv.extension(), "csv");
        assert_eq!(OutputFormat::Csv.mime_type(), "text/csv");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("chat_parsed.json").unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path("/tmp/out/chat.CSV").unwrap(),
            OutputFormat::Csv
        );
        let err = OutputFormat::from_path("chat.txt").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(OutputFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_format_all_and_default() {
        assert_eq!(OutputFormat::all().len(), 2);
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Csv).unwrap();
        assert_eq!(json, "\"csv\"");
        let parsed: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(parsed, OutputFormat::Json);
    }

    #[test]
    fn test_to_format_string_dispatch() {
        let report =
            TranscriptParser::new().analyze_str("[01/02/2024, 09:00:00] Alice: Hello", "inline");

        let json = to_format_string(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"most_active\""));

        let csv = to_format_string(&report, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("Date;Time;Sender;Content;Media"));
    }
}
