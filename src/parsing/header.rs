//! Header line classification.
//!
//! A header line opens a new message. Three layouts are recognized and tried
//! in a fixed priority order, first match wins:
//!
//! 1. `[DD/MM/YYYY, HH:MM:SS] Sender: Body`
//! 2. `[DD/MM/YY, H:MM:SS AM|PM] Sender: Body`
//! 3. `DD/MM/YYYY, HH:MM - Sender: Body`
//!
//! Anything else is "not a header". That is an ordinary outcome and the
//! assembler decides what to do with such lines.

use std::sync::LazyLock;

use regex::Regex;

/// Attachment placeholders written by the exporter instead of the file.
///
/// Compared against the lower-cased body.
pub const MEDIA_MARKERS: [&str; 6] = [
    "<media omitted>",
    "<image omitted>",
    "<video omitted>",
    "<audio omitted>",
    "<document omitted>",
    "<sticker omitted>",
];

/// Recognized header layouts, in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderLayout {
    /// Bracketed, 24-hour clock with seconds, four-digit year.
    /// Example: `[15/01/2024, 10:30:45] Alice: Hello`
    BracketedFullYear,
    /// Bracketed, 12-hour clock with meridiem, two-digit year.
    /// Example: `[15/01/24, 9:30:45 PM] Alice: Hello`
    BracketedMeridiem,
    /// Unbracketed, minute precision, dash before the sender.
    /// Example: `15/01/2024, 10:30 - Alice: Hello`
    DashedMinute,
}

impl HeaderLayout {
    /// Returns the regex pattern for this layout.
    ///
    /// Groups: date, time, sender, body. Anchored at the start of the line
    /// only; the body runs to the end.
    pub fn pattern(self) -> &'static str {
        match self {
            HeaderLayout::BracketedFullYear => {
                r"^\[(\d{2}/\d{2}/\d{4}),\s*(\d{2}:\d{2}:\d{2})\]\s*([^:]+):\s*(.*)"
            }
            HeaderLayout::BracketedMeridiem => {
                r"^\[(\d{2}/\d{2}/\d{2}),\s*(\d{1,2}:\d{2}:\d{2}\s*[AP]M)\]\s*([^:]+):\s*(.*)"
            }
            HeaderLayout::DashedMinute => {
                r"^(\d{2}/\d{2}/\d{4}),\s*(\d{2}:\d{2})\s*-\s*([^:]+):\s*(.*)"
            }
        }
    }

    /// Returns chrono format strings for `"{date} {time}"` in this layout.
    pub fn date_parse_formats(self) -> &'static [&'static str] {
        match self {
            HeaderLayout::BracketedFullYear => &["%d/%m/%Y %H:%M:%S"],
            HeaderLayout::BracketedMeridiem => &["%d/%m/%y %I:%M:%S %p"],
            HeaderLayout::DashedMinute => &["%d/%m/%Y %H:%M"],
        }
    }

    /// Returns all layouts in matching priority.
    pub fn all() -> &'static [HeaderLayout] {
        &[
            HeaderLayout::BracketedFullYear,
            HeaderLayout::BracketedMeridiem,
            HeaderLayout::DashedMinute,
        ]
    }

    /// Short human-readable label, used in logs.
    pub fn label(self) -> &'static str {
        match self {
            HeaderLayout::BracketedFullYear => "[DD/MM/YYYY, HH:MM:SS]",
            HeaderLayout::BracketedMeridiem => "[DD/MM/YY, H:MM:SS AM/PM]",
            HeaderLayout::DashedMinute => "DD/MM/YYYY, HH:MM -",
        }
    }
}

/// Compiled `(layout, regex)` table in priority order.
static HEADER_PATTERNS: LazyLock<Vec<(HeaderLayout, Regex)>> = LazyLock::new(|| {
    HeaderLayout::all()
        .iter()
        .map(|&layout| (layout, Regex::new(layout.pattern()).unwrap()))
        .collect()
});

/// The fields of a matched header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    /// Which layout matched.
    pub layout: HeaderLayout,
    /// Date, trimmed.
    pub date: &'a str,
    /// Time, trimmed.
    pub time: &'a str,
    /// Sender, trimmed.
    pub sender: &'a str,
    /// Body, trimmed.
    pub body: &'a str,
    /// Whether the body carries a media placeholder.
    pub is_media: bool,
}

/// Classifies a single line.
///
/// Returns `None` if the line doesn't open a message.
///
/// ```rust
/// use chatdigest::parsing::header::{HeaderLayout, classify_line};
///
/// let m = classify_line("05/03/2023, 14:30 - Carol: <Media omitted>").unwrap();
/// assert_eq!(m.layout, HeaderLayout::DashedMinute);
/// assert_eq!(m.sender, "Carol");
/// assert!(m.is_media);
///
/// assert!(classify_line("just a continuation").is_none());
/// ```
pub fn classify_line(line: &str) -> Option<HeaderMatch<'_>> {
    HEADER_PATTERNS.iter().find_map(|(layout, regex)| {
        let caps = regex.captures(line)?;
        let field = |i| caps.get(i).map_or("", |m| m.as_str().trim());
        let body = field(4);

        Some(HeaderMatch {
            layout: *layout,
            date: field(1),
            time: field(2),
            sender: field(3),
            body,
            is_media: contains_media_marker(body),
        })
    })
}

/// Case-insensitive containment check against [`MEDIA_MARKERS`].
pub fn contains_media_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    MEDIA_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Picks the layout matching the most lines of a sample.
///
/// Ties go to the higher-priority layout. Returns `None` if no line in the
/// sample is a header. Only used for diagnostics; every line is still
/// classified against all layouts.
pub fn detect_layout(lines: &[&str]) -> Option<HeaderLayout> {
    let mut scores = [0usize; 3];

    for line in lines {
        if let Some(m) = classify_line(line) {
            let idx = HeaderLayout::all()
                .iter()
                .position(|&l| l == m.layout)
                .unwrap_or_default();
            scores[idx] += 1;
        }
    }

    let max_score = *scores.iter().max()?;
    if max_score == 0 {
        return None;
    }

    let winner_idx = scores.iter().position(|&s| s == max_score)?;
    Some(HeaderLayout::all()[winner_idx])
}
