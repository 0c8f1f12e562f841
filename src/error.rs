//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the library can report: reading a transcript, a malformed header
//! timestamp, bad hour windows, source selection and export writers.
//!
//! An empty transcript is **not** an error. A file that parses to zero
//! messages is reported through [`ReportOutcome::Empty`](crate::core::report::ReportOutcome)
//! so callers can branch on it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::RecordSet;
///
/// fn my_function() -> Result<RecordSet> {
///     Ok(RecordSet::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// The transcript (or data directory) could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred while writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A header line matched the message shape but its date/time did not
    /// parse as `DD/MM/YYYY, HH:MM`.
    ///
    /// The whole parse is aborted; no partial record set is returned.
    #[error(
        "Invalid timestamp '{input}' on line {line}{}: expected DD/MM/YYYY, HH:MM ({source})",
        path.as_ref().map(|p| format!(" of {}", p.display())).unwrap_or_default()
    )]
    Timestamp {
        /// 1-based line number in the transcript
        line: usize,
        /// The date/time text as found in the header
        input: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
        /// The file path, if known
        path: Option<PathBuf>,
    },

    /// The header pattern failed to compile.
    #[error("Invalid header pattern: {0}")]
    InvalidPattern(String),

    /// An hour-of-day window outside `0..=23` or with `start > end`.
    #[error("Invalid hour window {start}-{end}: hours must satisfy start <= end <= 23")]
    InvalidHourWindow {
        /// First hour of the window
        start: u32,
        /// Last hour of the window (inclusive)
        end: u32,
    },

    /// The data directory contains no transcript files.
    #[error("No files found in {}", dir.display())]
    NoTranscripts {
        /// The directory that was searched
        dir: PathBuf,
    },

    /// The requested transcript is not in the data directory.
    #[error("Transcript '{name}' not found in {}", dir.display())]
    UnknownTranscript {
        /// The requested file name
        name: String,
        /// The directory that was searched
        dir: PathBuf,
    },

    /// Unknown or unsupported export format.
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error while converting writer output to a string.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatsError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a timestamp error without file context.
    pub fn timestamp(line: usize, input: impl Into<String>, source: chrono::ParseError) -> Self {
        ChatstatsError::Timestamp {
            line,
            input: input.into(),
            source,
            path: None,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Attaches a file path to errors that carry one; other variants pass through.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatstatsError::Timestamp {
                line,
                input,
                source,
                path: None,
            } => ChatstatsError::Timestamp {
                line,
                input,
                source,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if the transcript could not be read.
    pub fn is_read(&self) -> bool {
        matches!(self, ChatstatsError::Read { .. })
    }

    /// Returns `true` if a header timestamp failed to parse.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, ChatstatsError::Timestamp { .. })
    }

    /// Returns `true` if this is a write-side IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }
}
