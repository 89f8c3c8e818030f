//! Unified error types for chatdigest.
//!
//! Every failure in this crate happens at a boundary: reading the transcript
//! from disk, decoding it, or serializing a report. Line classification,
//! action-item extraction and summary aggregation never fail; an unrecognized
//! line is a normal outcome, not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatdigest operations.
///
/// # Example
///
/// ```rust
/// use chatdigest::error::Result;
/// use chatdigest::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatdigestError>;

/// The error type for all chatdigest operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatdigestError {
    /// An I/O error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound {
        /// The path that was requested
        path: PathBuf,
    },

    /// The transcript is not valid UTF-8.
    #[error("UTF-8 decoding error{}: {source}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Utf8 {
        /// The file being decoded, if known
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An output format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<std::string::FromUtf8Error> for ChatdigestError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatdigestError::Utf8 {
            path: None,
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatdigestError {
    /// Creates a not-found error for a transcript path.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ChatdigestError::NotFound { path: path.into() }
    }

    /// Creates a decoding error tied to the file it came from.
    pub fn utf8(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        ChatdigestError::Utf8 {
            path: Some(path.into()),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatdigestError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatdigestError::Io(_))
    }

    /// Returns `true` if the input file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChatdigestError::NotFound { .. })
    }

    /// Returns `true` if the input could not be decoded.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatdigestError::Utf8 { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatdigestError::InvalidFormat { .. })
    }
}
