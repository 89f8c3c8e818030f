//! Heuristic action-item extraction.
//!
//! Each message is tested against a fixed priority chain and produces at
//! most one [`ActionItem`]:
//!
//! | Priority | Type | Pattern | Enabled |
//! |----------|------|---------|---------|
//! | 1 | `explicit_todo` | `TODO:` / `ACTION:` / `TASK:` / `REMINDER:` | always |
//! | 2 | `commitment` | `I'll ...` / `I will ...` | always |
//! | 3 | `request` | `can you ...` / `could you ...` | opt-in |
//! | 4 | `deadline` | `by EOD` / `by tomorrow` / `by <weekday>` | opt-in |
//!
//! Matching is case-insensitive and pattern based; there is no language
//! understanding. A task is captured up to the end of its physical line.
//!
//! # Example
//!
//! ```rust
//! use chatdigest::Message;
//! use chatdigest::config::ExtractorConfig;
//! use chatdigest::core::actions::extract_action_items;
//!
//! let messages = vec![
//!     Message::new("01/02/2024", "09:00:00", "Alice", "TODO: send report"),
//!     Message::new("01/02/2024", "09:01:00", "Bob", "Sounds good"),
//! ];
//!
//! let items = extract_action_items(&messages, &ExtractorConfig::default());
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].task, "send report");
//! assert_eq!(items[0].assignee, "Alice");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::Message;
use crate::config::ExtractorConfig;
use crate::core::models::{ActionItem, ActionType};

static EXPLICIT_TODO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(TODO|ACTION|TASK|REMINDER):\s*(.+)").unwrap());

static COMMITMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)i('ll| will)\s+(.+)").unwrap());

static REQUEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(can|could) you\s+(please\s+)?(.+)").unwrap());

static DEADLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)by\s+(EOD|end of day|tomorrow|monday|tuesday|wednesday|thursday|friday)")
        .unwrap()
});

/// One link of the priority chain: the pattern and the group holding the task.
struct ActionPattern {
    kind: ActionType,
    regex: &'static LazyLock<Regex>,
    task_group: usize,
}

static CHAIN: [ActionPattern; 4] = [
    ActionPattern {
        kind: ActionType::ExplicitTodo,
        regex: &EXPLICIT_TODO,
        task_group: 2,
    },
    ActionPattern {
        kind: ActionType::Commitment,
        regex: &COMMITMENT,
        task_group: 2,
    },
    ActionPattern {
        kind: ActionType::Request,
        regex: &REQUEST,
        task_group: 3,
    },
    ActionPattern {
        kind: ActionType::Deadline,
        regex: &DEADLINE,
        task_group: 0,
    },
];

impl ActionPattern {
    fn enabled(&self, config: &ExtractorConfig) -> bool {
        match self.kind {
            ActionType::ExplicitTodo | ActionType::Commitment => true,
            ActionType::Request => config.requests,
            ActionType::Deadline => config.deadlines,
        }
    }

    fn capture(&self, content: &str) -> Option<String> {
        let caps = self.regex.captures(content)?;
        let task = caps.get(self.task_group)?.as_str().trim();
        Some(task.to_string())
    }
}

/// Finds the highest-priority enabled pattern matching `content`.
///
/// Returns the item type and the trimmed task text.
pub fn classify_action(content: &str, config: &ExtractorConfig) -> Option<(ActionType, String)> {
    CHAIN
        .iter()
        .filter(|pattern| pattern.enabled(config))
        .find_map(|pattern| pattern.capture(content).map(|task| (pattern.kind, task)))
}

/// Returns the first deadline phrase in `content`, such as `"by EOD"`.
pub fn find_deadline(content: &str) -> Option<String> {
    DEADLINE.find(content).map(|m| m.as_str().to_string())
}

/// Extracts action items from messages in order.
///
/// IDs start at 1 and increase by one per item with no gaps.
pub fn extract_action_items(messages: &[Message], config: &ExtractorConfig) -> Vec<ActionItem> {
    let items: Vec<ActionItem> = messages
        .iter()
        .filter_map(|msg| {
            let (kind, task) = classify_action(&msg.content, config)?;
            Some((msg, kind, task))
        })
        .enumerate()
        .map(|(idx, (msg, kind, task))| ActionItem {
            id: idx + 1,
            kind,
            task,
            assignee: msg.sender.clone(),
            timestamp: msg.timestamp.clone(),
            source_message: msg.content.clone(),
            deadline: if config.deadline_hints {
                find_deadline(&msg.content)
            } else {
                None
            },
        })
        .collect();

    log::debug!(
        "Extracted {} action item(s) from {} message(s)",
        items.len(),
        messages.len()
    );

    items
}
