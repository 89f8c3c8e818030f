//! JSON report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::ChatReport;
use crate::error::Result;

/// Writes the full report to a pretty-printed JSON file.
///
/// # Format
/// ```json
/// {
///   "metadata": { "participants": ["Alice"], "message_count": 1, ... },
///   "summary": { "participant_stats": { "Alice": 1 }, ... },
///   "action_items": [],
///   "messages": [ { "date": "01/02/2024", ... } ]
/// }
/// ```
pub fn write_json(report: &ChatReport, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
