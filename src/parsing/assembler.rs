//! Transcript assembly.
//!
//! Lines are folded left to right into an [`Assembly`] accumulator. A header
//! line closes the open message and opens a new one; any other line is either
//! appended to the open message or dropped. There is no lookahead: each step
//! is a function of the accumulator and a single line.

use crate::Message;
use crate::config::BlankLinePolicy;

use super::header::classify_line;

/// Accumulator threaded through the fold.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Assembly {
    finished: Vec<Message>,
    current: Option<Message>,
    dropped_preamble: usize,
}

impl Assembly {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one line and returns the next accumulator state.
    #[must_use]
    pub fn step(mut self, line: &str, policy: BlankLinePolicy) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(header) = classify_line(line) {
            if let Some(done) = self.current.take() {
                self.finished.push(done);
            }
            self.current = Some(Message::new(
                header.date,
                header.time,
                header.sender,
                header.body,
            ));
            return self;
        }

        match self.current.as_mut() {
            Some(open) => {
                if accepts_continuation(line, policy) {
                    open.push_line(line);
                }
            }
            None => self.dropped_preamble += 1,
        }

        self
    }

    /// Closes the open message, if any, and returns every message in order.
    pub fn finish(mut self) -> Vec<Message> {
        if let Some(done) = self.current.take() {
            self.finished.push(done);
        }
        self.finished
    }

    /// Number of lines seen before the first header.
    pub fn dropped_preamble(&self) -> usize {
        self.dropped_preamble
    }

    /// Messages finalized so far (not counting the open one).
    pub fn finished_len(&self) -> usize {
        self.finished.len()
    }
}

/// Decides whether a non-header line joins the open message.
///
/// With [`BlankLinePolicy::Drop`] lines that are empty after trimming are
/// discarded, so blank lines never become paragraph breaks.
pub fn accepts_continuation(line: &str, policy: BlankLinePolicy) -> bool {
    match policy {
        BlankLinePolicy::Drop => !line.trim().is_empty(),
        BlankLinePolicy::Keep => true,
    }
}

/// Assembles a transcript into messages using the given blank-line policy.
///
/// ```rust
/// use chatdigest::config::BlankLinePolicy;
/// use chatdigest::parsing::assembler::assemble;
///
/// let text = "05/03/2023, 14:30 - Carol: <Media omitted>\nnice pic";
/// let messages = assemble(text, BlankLinePolicy::Drop);
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].content, "<Media omitted>\nnice pic");
/// ```
pub fn assemble(text: &str, policy: BlankLinePolicy) -> Vec<Message> {
    // A trailing newline ends the last line, it doesn't start a new one.
    let text = text.strip_suffix('\n').unwrap_or(text);
    let assembly = text
        .split('\n')
        .fold(Assembly::new(), |acc, line| acc.step(line, policy));

    if assembly.dropped_preamble() > 0 {
        log::debug!(
            "Dropped {} line(s) before the first header",
            assembly.dropped_preamble()
        );
    }

    assembly.finish()
}
