//! Edge case tests for chatdigest
//!
//! Boundary conditions of the line classifier and the assembler that the
//! unit tests don't reach through the public API.

use chatdigest::config::{BlankLinePolicy, ExtractorConfig};
use chatdigest::core::{ActionType, classify_action, extract_action_items};
use chatdigest::Message;
use chatdigest::parsing::{assemble, classify_line};

fn parse(text: &str) -> Vec<Message> {
    assemble(text, BlankLinePolicy::Drop)
}

// =========================================================================
// Unicode and special characters
// =========================================================================

#[test]
fn test_unicode_senders_and_content() {
    let text = "[01/02/2024, 09:00:00] Иван Петров: Привет мир!\n\
                [01/02/2024, 09:00:05] 田中太郎: こんにちは世界！\n\
                [01/02/2024, 09:00:10] محمد: مرحبا بالعالم 🎉";
    let messages = parse(text);

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].sender, "Иван Петров");
    assert_eq!(messages[0].content, "Привет мир!");
    assert_eq!(messages[1].sender, "田中太郎");
    assert_eq!(messages[2].content, "مرحبا بالعالم 🎉");
}

#[test]
fn test_sender_stops_at_first_colon() {
    let m = classify_line("[01/02/2024, 09:00:00] Alice: Meeting: 10:30 room B").unwrap();
    assert_eq!(m.sender, "Alice");
    assert_eq!(m.body, "Meeting: 10:30 room B");
}

#[test]
fn test_empty_body_header() {
    let messages = parse("[01/02/2024, 09:00:00] Alice: \nfirst real line");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "\nfirst real line");
}

// =========================================================================
// Line endings and whitespace
// =========================================================================

#[test]
fn test_crlf_line_endings() {
    let text = "[01/02/2024, 09:00:00] Alice: one\r\nmore\r\n[01/02/2024, 09:01:00] Bob: two\r\n";
    let messages = parse(text);

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "one\nmore");
    assert_eq!(messages[1].content, "two");
}

#[test]
fn test_whitespace_only_lines_are_blank() {
    let text = "[01/02/2024, 09:00:00] Alice: one\n   \n\t\ntwo";
    assert_eq!(parse(text)[0].content, "one\ntwo");

    let kept = assemble(text, BlankLinePolicy::Keep);
    assert_eq!(kept[0].content, "one\n   \n\t\ntwo");
}

#[test]
fn test_continuation_keeps_leading_whitespace() {
    let messages = parse("[01/02/2024, 09:00:00] Alice: list\n    - indented");
    assert_eq!(messages[0].content, "list\n    - indented");
}

#[test]
fn test_indented_header_is_continuation() {
    let text = "[01/02/2024, 09:00:00] Alice: quoting\n [01/02/2024, 08:00:00] Bob: old";
    let messages = parse(text);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].content.ends_with("Bob: old"));
}

#[test]
fn test_only_preamble() {
    assert!(parse("no headers here\nat all\n").is_empty());
    assert!(parse("\n\n\n").is_empty());
}

// =========================================================================
// Near-miss headers
// =========================================================================

#[test]
fn test_near_miss_headers_are_not_headers() {
    let near_misses = [
        "[1/02/2024, 09:00:00] Alice: single digit day",
        "[01/02/2024 09:00:00] Alice: missing comma",
        "[01/02/2024, 09:00] Alice: missing seconds",
        "[01/02/24, 9:00:00 am] Alice: lowercase meridiem",
        "01/02/2024, 09:00 Alice: missing dash",
        "01/02/2024, 09:00 - no colon sender",
    ];
    for line in near_misses {
        assert!(classify_line(line).is_none(), "should not match: {line}");
    }
}

#[test]
fn test_near_miss_lines_attach_to_previous() {
    let text = "[01/02/2024, 09:00:00] Alice: start\n[01/02/2024 09:00:00] Bob: broken";
    let messages = parse(text);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "start\n[01/02/2024 09:00:00] Bob: broken");
}

// =========================================================================
// Media markers
// =========================================================================

#[test]
fn test_media_marker_in_continuation_does_not_flag() {
    let messages = parse("[01/02/2024, 09:00:00] Alice: look\n<Media omitted>");
    assert!(!messages[0].is_media);
}

#[test]
fn test_media_marker_case_and_position() {
    let messages = parse(
        "[01/02/2024, 09:00:00] Alice: sent <IMAGE OMITTED> here\n\
         [01/02/2024, 09:01:00] Bob: <Sticker omitted>\n\
         [01/02/2024, 09:02:00] Carol: the image omitted was blurry",
    );
    assert!(messages[0].is_media);
    assert!(messages[1].is_media);
    assert!(!messages[2].is_media);
}

// =========================================================================
// Action extraction corners
// =========================================================================

#[test]
fn test_todo_beats_commitment() {
    let defaults = ExtractorConfig::default();
    let (kind, task) = classify_action("TODO: I'll fix the build", &defaults).unwrap();
    assert_eq!(kind, ActionType::ExplicitTodo);
    assert_eq!(task, "I'll fix the build");
}

#[test]
fn test_task_capture_stops_at_line_end() {
    let mut msg = Message::new("01/02/2024", "09:00:00", "Alice", "TODO: first line");
    msg.push_line("second line");
    let items = extract_action_items(&[msg], &ExtractorConfig::default());
    assert_eq!(items[0].task, "first line");
    assert_eq!(items[0].source_message, "TODO: first line\nsecond line");
}

#[test]
fn test_marker_without_task_is_not_an_item() {
    let defaults = ExtractorConfig::default();
    assert!(classify_action("TODO:", &defaults).is_none());
    assert!(classify_action("ACTION:", &defaults).is_none());
}

#[test]
fn test_commitment_without_word_boundary() {
    // "Hi will" contains "i will"; the heuristic is purely lexical
    let (kind, task) = classify_action("Hi will you join?", &ExtractorConfig::default()).unwrap();
    assert_eq!(kind, ActionType::Commitment);
    assert_eq!(task, "you join?");
}

#[test]
fn test_request_and_deadline_off_by_default() {
    let defaults = ExtractorConfig::default();
    assert!(classify_action("Could you send it by EOD", &defaults).is_none());

    let requests = ExtractorConfig::new().with_requests(true);
    let (kind, task) = classify_action("Could you please send it by EOD", &requests).unwrap();
    assert_eq!(kind, ActionType::Request);
    assert_eq!(task, "send it by EOD");

    let deadlines = ExtractorConfig::new().with_deadlines(true);
    let (kind, task) = classify_action("Could you send it by EOD", &deadlines).unwrap();
    assert_eq!(kind, ActionType::Deadline);
    assert_eq!(task, "by EOD");
}
