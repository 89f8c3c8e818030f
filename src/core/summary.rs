//! Participant and volume summary.

use crate::Message;
use crate::core::models::{Metadata, ParticipantStats, SummaryView};

/// Counts messages per sender in a single pass, in first-seen order.
pub fn count_by_sender(messages: &[Message]) -> ParticipantStats {
    messages
        .iter()
        .fold(ParticipantStats::new(), |mut stats, msg| {
            stats.increment(&msg.sender);
            stats
        })
}

/// Builds the summary view.
///
/// Totals and the date range are taken from `metadata` unchanged. Returns
/// `None` when there are no messages, since there is no most-active
/// participant to report.
///
/// ```rust
/// use chatdigest::Message;
/// use chatdigest::core::models::Metadata;
/// use chatdigest::core::summary::summarize;
///
/// let messages = vec![
///     Message::new("01/02/2024", "09:00:00", "Alice", "Hi"),
///     Message::new("01/02/2024", "09:01:00", "Bob", "Hey"),
/// ];
/// let metadata = Metadata::from_messages(&messages, "chat.txt");
///
/// let summary = summarize(&messages, &metadata).unwrap();
/// assert_eq!(summary.most_active.name, "Alice");
/// assert_eq!(summary.text_messages, 2);
/// ```
pub fn summarize(messages: &[Message], metadata: &Metadata) -> Option<SummaryView> {
    let participant_stats = count_by_sender(messages);
    let most_active = participant_stats.most_active()?;

    Some(SummaryView {
        participant_stats,
        most_active,
        total_messages: metadata.message_count,
        media_messages: metadata.media_count,
        text_messages: metadata.text_count(),
        date_range: metadata.date_range.clone(),
    })
}
