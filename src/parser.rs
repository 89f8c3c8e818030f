//! Single entry point for turning a transcript into a report.
//!
//! [`TranscriptParser`] wires the line classifier, the assembler, the
//! action-item extractor and the summary together. The library stays
//! side-effect free apart from reading the input file; writing output is the
//! caller's job (see [`crate::format`]).
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatdigest::Result<()> {
//! use chatdigest::parser::TranscriptParser;
//! use std::path::Path;
//!
//! let parser = TranscriptParser::new();
//! let report = parser.analyze(Path::new("chat.txt"))?;
//!
//! for item in &report.action_items {
//!     println!("[{}] {}: {}", item.kind, item.assignee, item.task);
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use crate::config::ParserConfig;
use crate::core::actions::extract_action_items;
use crate::core::models::{ChatReport, ParsedChat};
use crate::core::summary::summarize;
use crate::error::{ChatdigestError, Result};
use crate::parsing::{assemble, detect_layout};

/// Number of leading lines sampled for layout diagnostics.
const LAYOUT_SAMPLE_LINES: usize = 20;

/// Parser and analyzer for exported chat transcripts.
///
/// # Example
///
/// ```rust
/// use chatdigest::parser::TranscriptParser;
///
/// let text = "[01/02/2024, 09:00:00] Alice: TODO: send report\n\
///             [01/02/2024, 09:01:00] Bob: Sounds good";
/// let report = TranscriptParser::new().analyze_str(text, "inline");
///
/// assert_eq!(report.metadata.message_count, 2);
/// assert_eq!(report.action_items[0].task, "send report");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Assembles messages from transcript text.
    ///
    /// `source` is recorded as `metadata.file_path`. Never fails: text with
    /// no header lines yields an empty chat.
    pub fn parse_str(&self, text: &str, source: &str) -> ParsedChat {
        if log::log_enabled!(log::Level::Debug) {
            let sample: Vec<&str> = text.lines().take(LAYOUT_SAMPLE_LINES).collect();
            match detect_layout(&sample) {
                Some(layout) => log::debug!("{source}: detected {} headers", layout.label()),
                None => log::debug!("{source}: no header in the first {LAYOUT_SAMPLE_LINES} lines"),
            }
        }

        let messages = assemble(text, self.config.blank_lines);
        if messages.is_empty() && !text.trim().is_empty() {
            log::warn!("{source}: no message headers recognized");
        }

        ParsedChat::new(messages, source)
    }

    /// Reads and assembles a transcript file.
    ///
    /// # Errors
    ///
    /// - [`ChatdigestError::NotFound`] if `path` does not exist
    /// - [`ChatdigestError::Utf8`] if the file is not valid UTF-8
    /// - [`ChatdigestError::Io`] for any other read failure
    pub fn parse(&self, path: &Path) -> Result<ParsedChat> {
        let text = read_transcript(path)?;
        Ok(self.parse_str(&text, &path.display().to_string()))
    }

    /// Builds the derived views over an already parsed chat.
    pub fn report(&self, parsed: ParsedChat) -> ChatReport {
        let ParsedChat { metadata, messages } = parsed;
        let summary = summarize(&messages, &metadata);
        let action_items = extract_action_items(&messages, &self.config.extractor);

        log::info!(
            "{}: {} messages, {} action items",
            metadata.file_path,
            metadata.message_count,
            action_items.len()
        );

        ChatReport {
            metadata,
            summary,
            action_items,
            messages,
        }
    }

    /// Parses and analyzes transcript text in one call.
    pub fn analyze_str(&self, text: &str, source: &str) -> ChatReport {
        self.report(self.parse_str(text, source))
    }

    /// Reads, parses and analyzes a transcript file.
    ///
    /// # Errors
    ///
    /// Same as [`TranscriptParser::parse`].
    pub fn analyze(&self, path: &Path) -> Result<ChatReport> {
        Ok(self.report(self.parse(path)?))
    }
}

fn read_transcript(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ChatdigestError::not_found(path));
    }

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| ChatdigestError::utf8(path, e))
}
