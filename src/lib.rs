//! # chatdigest
//!
//! A Rust library for turning exported chat transcripts into structured
//! messages, a participant summary, and heuristic action items.
//!
//! ## Overview
//!
//! A transcript is plain UTF-8 text. Each message starts with a header line
//! carrying date, time and sender; anything that is not a header continues
//! the previous message. Three header layouts are recognized, in priority
//! order:
//!
//! - `[DD/MM/YYYY, HH:MM:SS] Sender: body`
//! - `[DD/MM/YY, H:MM:SS AM] Sender: body`
//! - `DD/MM/YYYY, HH:MM - Sender: body`
//!
//! Layouts may be mixed freely inside one file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatdigest::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let report = TranscriptParser::new().analyze("chat.txt".as_ref())?;
//!
//!     if let Some(summary) = &report.summary {
//!         println!("Most active: {}", summary.most_active.name);
//!     }
//!     for item in &report.action_items {
//!         println!("[{}] {} ({})", item.kind, item.task, item.assignee);
//!     }
//!
//!     write_json(&report, "chat_parsed.json")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Line classification and message assembly
//!   - [`classify_line`](parsing::classify_line), [`assemble`](parsing::assemble)
//! - [`core`] - Derived views over the messages
//!   - [`core::actions`] - [`extract_action_items`](core::extract_action_items)
//!   - [`core::summary`] - [`summarize`](core::summarize)
//!   - [`core::models`] - [`Metadata`](core::Metadata), [`ChatReport`](core::ChatReport)
//!   - [`core::output`] - JSON and CSV writers
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the one-call entry point
//! - [`config`] - Parser and extractor configuration
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - [`ChatdigestError`] and [`Result`]
//! - `cli` - clap argument types (requires the `cli` feature)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatdigestError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatdigest::prelude::*;
///
/// let report = TranscriptParser::new().analyze_str("", "empty.txt");
/// assert!(report.summary.is_none());
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::error::{ChatdigestError, Result};

    pub use crate::config::{BlankLinePolicy, ExtractorConfig, ParserConfig};
    pub use crate::parser::TranscriptParser;

    pub use crate::core::models::{
        ActionItem, ActionType, ChatReport, DateRange, Metadata, ParsedChat, SummaryView,
    };
    pub use crate::core::{extract_action_items, summarize};
    pub use crate::parsing::assemble;

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
}
