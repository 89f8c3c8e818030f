//! Derived views over assembled messages.
//!
//! This module contains:
//! - [`models`] - Result records (metadata, summary, action items, report)
//! - [`actions`] - Heuristic action-item extraction
//! - [`summary`] - Participant counts and most-active participant
//! - [`output`] - Format writers (JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatdigest::config::ExtractorConfig;
//! use chatdigest::core::{Metadata, extract_action_items, summarize};
//! use chatdigest::parsing::assemble;
//!
//! let messages = assemble("[01/02/2024, 09:00:00] Alice: I'll book it", Default::default());
//! let metadata = Metadata::from_messages(&messages, "inline");
//! let items = extract_action_items(&messages, &ExtractorConfig::default());
//! let summary = summarize(&messages, &metadata);
//!
//! assert_eq!(items[0].task, "book it");
//! assert_eq!(summary.unwrap().most_active.name, "Alice");
//! ```

pub mod actions;
pub mod models;
pub mod output;
pub mod summary;

pub use actions::{classify_action, extract_action_items, find_deadline};
pub use models::{
    ActionItem, ActionType, ChatReport, DateRange, Metadata, MostActive, ParsedChat,
    ParticipantStats, SummaryView,
};
pub use summary::{count_by_sender, summarize};

// Re-export Message from the crate root
pub use crate::Message;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
