//! Line classification and transcript assembly.
//!
//! - [`header`] decides whether a single line opens a message.
//! - [`assembler`] folds a whole transcript into ordered messages.

pub mod assembler;
pub mod header;

pub use assembler::{Assembly, assemble};
pub use header::{HeaderLayout, HeaderMatch, classify_line, contains_media_marker, detect_layout};
