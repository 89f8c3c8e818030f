//! The message type produced by the transcript assembler.
//!
//! A [`Message`] keeps the date and time exactly as they were written in the
//! export. Transcripts mix several notations (24-hour with seconds, 12-hour
//! with a meridiem, minute precision), so the textual fields are never
//! normalized. [`Message::parsed_timestamp`] offers a best-effort typed view
//! on top of them.
//!
//! # Examples
//!
//! ```
//! use chatdigest::Message;
//!
//! let msg = Message::new("01/02/2024", "09:00:00", "Alice", "Morning!");
//! assert_eq!(msg.timestamp(), "01/02/2024 09:00:00");
//! assert!(!msg.is_media());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatdigest::Message;
//!
//! let msg = Message::new("05/03/2023", "14:30", "Carol", "<Media omitted>");
//! let json = serde_json::to_string(&msg)?;
//! assert!(json.contains(r#""is_media":true"#));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::header::{HeaderLayout, contains_media_marker};

/// One utterance in a chat transcript.
///
/// | Field | Description |
/// |-------|-------------|
/// | `date` | Date as written in the export |
/// | `time` | Time of day as written in the export |
/// | `timestamp` | `"{date} {time}"`, the ordering key |
/// | `sender` | Display name, trimmed |
/// | `content` | Body text, continuation lines joined with `\n` |
/// | `is_media` | The opening line carried a media placeholder |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Calendar date in source notation.
    pub date: String,

    /// Time of day in source notation.
    pub time: String,

    /// Concatenation of date and time.
    pub timestamp: String,

    /// Display name of the author.
    pub sender: String,

    /// Body text. May contain newlines for multiline messages.
    pub content: String,

    /// Whether the opening line contained an attachment placeholder
    /// such as `<Media omitted>`.
    pub is_media: bool,
}

impl Message {
    /// Creates a message from its four textual parts.
    ///
    /// Surrounding whitespace is trimmed from every part. `is_media` is
    /// derived from `content`.
    ///
    /// ```rust
    /// use chatdigest::Message;
    ///
    /// let msg = Message::new("05/03/2023", "14:30", " Carol ", "<IMAGE omitted>");
    /// assert_eq!(msg.sender(), "Carol");
    /// assert!(msg.is_media());
    /// ```
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let date = date.into().trim().to_string();
        let time = time.into().trim().to_string();
        let content = content.into().trim().to_string();
        let is_media = contains_media_marker(&content);

        Self {
            timestamp: format!("{date} {time}"),
            date,
            time,
            sender: sender.into().trim().to_string(),
            content,
            is_media,
        }
    }

    /// Builder method to override the media flag.
    #[must_use]
    pub fn with_media(mut self, is_media: bool) -> Self {
        self.is_media = is_media;
        self
    }

    /// Appends a continuation line to the body, separated by a newline.
    ///
    /// The media flag is not re-evaluated; it only reflects the opening line.
    pub fn push_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the date as written in the export.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the time as written in the export.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the combined date and time.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if the opening line carried a media placeholder.
    pub fn is_media(&self) -> bool {
        self.is_media
    }

    /// Number of physical lines the body spans.
    pub fn line_count(&self) -> usize {
        self.content.lines().count().max(1)
    }

    /// Best-effort typed timestamp.
    ///
    /// Tries the chrono formats of every recognized header layout against
    /// `"{date} {time}"`. Returns `None` for dates that don't exist in the
    /// calendar or notations outside the recognized layouts.
    ///
    /// ```rust
    /// use chatdigest::Message;
    /// use chrono::Timelike;
    ///
    /// let msg = Message::new("15/01/24", "9:05:00 PM", "Bob", "hi");
    /// assert_eq!(msg.parsed_timestamp().unwrap().hour(), 21);
    /// ```
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        HeaderLayout::all()
            .iter()
            .flat_map(|layout| layout.date_parse_formats())
            .find_map(|format| NaiveDateTime::parse_from_str(&self.timestamp, format).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_message_new_trims_and_joins() {
        let msg = Message::new(" 01/02/2024", "09:00:00 ", "  Alice ", " Hello ");
        assert_eq!(msg.date(), "01/02/2024");
        assert_eq!(msg.time(), "09:00:00");
        assert_eq!(msg.timestamp(), "01/02/2024 09:00:00");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.content(), "Hello");
    }

    #[test]
    fn test_media_flag_is_containment() {
        assert!(Message::new("d", "t", "A", "<Media omitted>").is_media());
        assert!(Message::new("d", "t", "A", "look <video OMITTED> here").is_media());
        assert!(!Message::new("d", "t", "A", "media omitted").is_media());
    }

    #[test]
    fn test_push_line_keeps_media_flag() {
        let mut msg = Message::new("05/03/2023", "14:30", "Carol", "Plain text");
        msg.push_line("<Media omitted>");
        assert_eq!(msg.content(), "Plain text\n<Media omitted>");
        assert!(!msg.is_media());
        assert_eq!(msg.line_count(), 2);
    }

    #[test]
    fn test_with_media_override() {
        let msg = Message::new("d", "t", "A", "text").with_media(true);
        assert!(msg.is_media());
    }

    #[test]
    fn test_parsed_timestamp_each_layout() {
        let full = Message::new("01/02/2024", "09:00:30", "A", "x");
        let ts = full.parsed_timestamp().unwrap();
        assert_eq!((ts.day(), ts.month(), ts.year()), (1, 2, 2024));
        assert_eq!(ts.second(), 30);

        let meridiem = Message::new("15/01/24", "1:05:00 AM", "A", "x");
        let ts = meridiem.parsed_timestamp().unwrap();
        assert_eq!((ts.year(), ts.hour(), ts.minute()), (2024, 1, 5));

        let minute = Message::new("05/03/2023", "14:30", "A", "x");
        let ts = minute.parsed_timestamp().unwrap();
        assert_eq!((ts.hour(), ts.minute()), (14, 30));
    }

    #[test]
    fn test_parsed_timestamp_invalid_calendar_date() {
        let msg = Message::new("31/02/2024", "10:00:00", "A", "x");
        assert!(msg.parsed_timestamp().is_none());
    }

    #[test]
    fn test_serialization_field_names() {
        let msg = Message::new("01/02/2024", "09:00:00", "Alice", "Hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""date":"01/02/2024""#));
        assert!(json.contains(r#""time":"09:00:00""#));
        assert!(json.contains(r#""timestamp":"01/02/2024 09:00:00""#));
        assert!(json.contains(r#""sender":"Alice""#));
        assert!(json.contains(r#""content":"Hi""#));
        assert!(json.contains(r#""is_media":false"#));

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
