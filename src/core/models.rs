//! Result records handed to downstream consumers.
//!
//! [`ChatReport`] is the complete record: metadata, summary, action items and
//! messages. Its serialized shape is the contract with any exporter.

use std::collections::BTreeSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Message;

/// First and last message date, in source notation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    /// Builds the range from the first and last message.
    pub fn from_messages(messages: &[Message]) -> Self {
        Self {
            start: messages.first().map(|m| m.date.clone()),
            end: messages.last().map(|m| m.date.clone()),
        }
    }

    /// Returns `true` when there were no messages to take dates from.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.as_deref().unwrap_or("N/A"),
            self.end.as_deref().unwrap_or("N/A")
        )
    }
}

/// Facts derived from the assembled messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Distinct senders, sorted.
    pub participants: Vec<String>,
    pub message_count: usize,
    pub media_count: usize,
    pub date_range: DateRange,
    /// Where the transcript came from.
    pub file_path: String,
}

impl Metadata {
    /// Derives metadata from messages and a source identifier.
    pub fn from_messages(messages: &[Message], file_path: impl Into<String>) -> Self {
        let participants: BTreeSet<&str> = messages.iter().map(|m| m.sender.as_str()).collect();

        Self {
            participants: participants.into_iter().map(String::from).collect(),
            message_count: messages.len(),
            media_count: messages.iter().filter(|m| m.is_media).count(),
            date_range: DateRange::from_messages(messages),
            file_path: file_path.into(),
        }
    }

    /// Messages that aren't media placeholders.
    pub fn text_count(&self) -> usize {
        self.message_count - self.media_count
    }
}

/// Per-sender message counts in first-seen order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantStats {
    entries: Vec<(String, usize)>,
}

impl ParticipantStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one message for `sender`, inserting it at the end if unseen.
    pub fn increment(&mut self, sender: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == sender) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((sender.to_string(), 1)),
        }
    }

    /// Count for a sender, or `None` if they never spoke.
    pub fn get(&self, sender: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == sender)
            .map(|(_, count)| *count)
    }

    /// Iterates `(sender, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sender with the highest count; ties go to whoever was seen first.
    pub fn most_active(&self) -> Option<MostActive> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.entries {
            if best.is_none_or(|(_, top)| entry.1 > *top) {
                best = Some(entry);
            }
        }
        best.map(|(name, count)| MostActive {
            name: name.clone(),
            message_count: *count,
        })
    }
}

impl Serialize for ParticipantStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParticipantStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatsVisitor;

        impl<'de> Visitor<'de> for StatsVisitor {
            type Value = ParticipantStats;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of sender names to message counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, count)) = access.next_entry::<String, usize>()? {
                    entries.push((name, count));
                }
                Ok(ParticipantStats { entries })
            }
        }

        deserializer.deserialize_map(StatsVisitor)
    }
}

/// The participant with the most messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostActive {
    pub name: String,
    pub message_count: usize,
}

/// Participant and volume overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    pub participant_stats: ParticipantStats,
    pub most_active: MostActive,
    pub total_messages: usize,
    pub media_messages: usize,
    pub text_messages: usize,
    pub date_range: DateRange,
}

/// Kind of heuristic that produced an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// `TODO:`, `ACTION:`, `TASK:` or `REMINDER:` marker
    ExplicitTodo,
    /// `I'll ...` / `I will ...`
    Commitment,
    /// `can you ...` / `could you ...` (opt-in)
    Request,
    /// `by EOD`, `by tomorrow`, `by friday`... (opt-in)
    Deadline,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::ExplicitTodo => "explicit_todo",
            ActionType::Commitment => "commitment",
            ActionType::Request => "request",
            ActionType::Deadline => "deadline",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task detected in one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Sequential, starting at 1.
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: ActionType,
    pub task: String,
    /// Sender of the source message.
    pub assignee: String,
    pub timestamp: String,
    /// Full content of the source message.
    pub source_message: String,
    /// Deadline phrase found in the source message, when hints are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Messages plus their metadata, before any derived views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChat {
    pub metadata: Metadata,
    pub messages: Vec<Message>,
}

impl ParsedChat {
    pub fn new(messages: Vec<Message>, file_path: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::from_messages(&messages, file_path),
            messages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The complete analysis record.
///
/// `summary` is `null` for a transcript without any messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReport {
    pub metadata: Metadata,
    pub summary: Option<SummaryView>,
    pub action_items: Vec<ActionItem>,
    pub messages: Vec<Message>,
}
