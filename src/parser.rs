//! Parser trait for chat transcripts.
//!
//! This module provides the single entry point for turning a transcript into a
//! [`RecordSet`]: from a file path, an in-memory string, or raw bytes.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::parser::{Parser, TranscriptParser};
//! use std::path::Path;
//!
//! let parser = TranscriptParser::new();
//! let records = parser.parse(Path::new("data/chat.txt"))?;
//! println!("{} messages", records.len());
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::path::Path;

use crate::RecordSet;
use crate::error::Result;

pub use crate::parsers::TranscriptParser;

/// Trait for parsing chat transcripts into record sets.
///
/// Implementors must provide [`name`](Parser::name), [`parse`](Parser::parse)
/// and [`parse_str`](Parser::parse_str); the byte and `&str`-path variants
/// have default implementations.
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl Parser for MyParser {
///     fn name(&self) -> &'static str { "MyParser" }
///
///     fn parse(&self, path: &Path) -> Result<RecordSet> {
///         let bytes = std::fs::read(path)?;
///         self.parse_bytes(&bytes)
///     }
///
///     fn parse_str(&self, content: &str) -> Result<RecordSet> {
///         Ok(RecordSet::new())
///     }
/// }
/// ```
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Reads and parses a transcript file.
    ///
    /// The whole file is read before any record is produced.
    ///
    /// # Errors
    ///
    /// - [`ChatstatsError::Read`](crate::ChatstatsError::Read) if the file cannot be read
    /// - [`ChatstatsError::Timestamp`](crate::ChatstatsError::Timestamp) if a header
    ///   line carries an invalid date or time
    fn parse(&self, path: &Path) -> Result<RecordSet>;

    /// Parses transcript content already in memory.
    fn parse_str(&self, content: &str) -> Result<RecordSet>;

    /// Parses raw bytes, replacing invalid UTF-8 sequences instead of failing.
    fn parse_bytes(&self, bytes: &[u8]) -> Result<RecordSet> {
        self.parse_str(&String::from_utf8_lossy(bytes))
    }

    /// Parses a transcript file (convenience method accepting &str path).
    fn parse_file(&self, path: &str) -> Result<RecordSet> {
        self.parse(Path::new(path))
    }
}

/// Parses a transcript file with the default configuration.
///
/// # Example
///
/// ```rust,no_run
/// let records = chatstats::parser::parse_transcript("data/chat.txt")?;
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub fn parse_transcript(path: impl AsRef<Path>) -> Result<RecordSet> {
    TranscriptParser::new().parse(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_object_safe() {
        let parser: Box<dyn Parser> = Box::new(TranscriptParser::new());
        assert_eq!(parser.name(), "Transcript");
        let records = parser.parse_str("a\nb\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_bytes_tolerates_invalid_utf8() {
        let mut bytes = b"PRE1\nPRE2\n01/01/2024, 09:15 - Alice: caf".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"!\n");

        let records = TranscriptParser::new().parse_bytes(&bytes).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender(), "Alice");
        assert!(records[0].body().starts_with("caf"));
        assert!(records[0].body().ends_with("!\n"));
    }

    #[test]
    fn test_parse_transcript_missing_file() {
        let err = parse_transcript("definitely/not/here.txt").unwrap_err();
        assert!(err.is_read());
    }
}
