//! Configuration types for parsing and action-item extraction.
//!
//! Defaults are conservative: blank continuation
//! lines are dropped, and only explicit markers and commitments become
//! action items.
//!
//! # Example
//!
//! ```rust
//! use chatdigest::config::{BlankLinePolicy, ExtractorConfig, ParserConfig};
//! use chatdigest::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_config(
//!     ParserConfig::new()
//!         .with_blank_lines(BlankLinePolicy::Keep)
//!         .with_extractor(ExtractorConfig::new().with_requests(true)),
//! );
//! ```

use serde::{Deserialize, Serialize};

/// What to do with a continuation line that is empty after trimming.
///
/// Lines before the first header are dropped under either policy, since
/// there is no message to attach them to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankLinePolicy {
    /// Discard blank lines; a message body never contains empty lines.
    #[default]
    Drop,
    /// Keep blank lines as paragraph breaks inside the open message.
    Keep,
}

/// Configuration for the action-item extractor.
///
/// Explicit markers (`TODO:` and friends) and commitments (`I'll ...`) are
/// always on. Requests and deadlines sit below them in the priority chain
/// and only produce items when enabled.
///
/// # Example
///
/// ```rust
/// use chatdigest::config::ExtractorConfig;
///
/// let config = ExtractorConfig::new()
///     .with_requests(true)
///     .with_deadline_hints(true);
/// assert!(!config.deadlines);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Materialize `can/could you ...` requests as items (default: false)
    pub requests: bool,

    /// Materialize `by EOD/tomorrow/<weekday>` phrases as items (default: false)
    pub deadlines: bool,

    /// Attach the first deadline phrase of the source message to every
    /// item as a `deadline` field (default: false)
    pub deadline_hints: bool,
}

impl ExtractorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables request items.
    #[must_use]
    pub fn with_requests(mut self, enabled: bool) -> Self {
        self.requests = enabled;
        self
    }

    /// Enables or disables deadline items.
    #[must_use]
    pub fn with_deadlines(mut self, enabled: bool) -> Self {
        self.deadlines = enabled;
        self
    }

    /// Enables or disables deadline hints on every item.
    #[must_use]
    pub fn with_deadline_hints(mut self, enabled: bool) -> Self {
        self.deadline_hints = enabled;
        self
    }
}

/// Configuration for [`TranscriptParser`](crate::parser::TranscriptParser).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Blank continuation line handling (default: drop)
    pub blank_lines: BlankLinePolicy,

    /// Action-item extraction settings
    pub extractor: ExtractorConfig,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the blank-line policy.
    #[must_use]
    pub fn with_blank_lines(mut self, policy: BlankLinePolicy) -> Self {
        self.blank_lines = policy;
        self
    }

    /// Sets the extractor configuration.
    #[must_use]
    pub fn with_extractor(mut self, extractor: ExtractorConfig) -> Self {
        self.extractor = extractor;
        self
    }
}
