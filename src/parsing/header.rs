//! Header line recognition and timestamp parsing.
//!
//! A header line starts a new message:
//!
//! ```text
//! 15/01/2024, 10:30 - Alice: Hello there
//! ```
//!
//! Anything else is a continuation of the previous message.

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{ChatstatsError, Result};

/// Header shape: date, time, sender up to the first `": "`, then the message.
///
/// The hour and minute slots accept any two word characters so that a
/// header with garbage in its time (e.g. `ab:15`) is reported as a bad
/// timestamp instead of silently becoming a continuation line.
pub const HEADER_PATTERN: &str = r"^(\d{2}/\d{2}/\d{4}, \w{2}:\w{2}) - (.*?): (.*)$";

/// chrono format of the header timestamp: day first, four-digit year, 24-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// The three parts of a recognized header line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// `DD/MM/YYYY, HH:MM` as written
    pub timestamp: &'a str,
    /// Sender display name
    pub sender: &'a str,
    /// Message text after `": "`, without the line terminator
    pub message: &'a str,
}

/// Compiled header pattern.
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
    regex: Regex,
}

impl HeaderMatcher {
    /// Compiles [`HEADER_PATTERN`].
    pub fn new() -> Result<Self> {
        let regex =
            Regex::new(HEADER_PATTERN).map_err(|e| ChatstatsError::InvalidPattern(e.to_string()))?;
        Ok(Self { regex })
    }

    /// Matches a single line with its terminator already removed.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<Header<'a>> {
        let caps = self.regex.captures(line)?;
        Some(Header {
            timestamp: caps.get(1)?.as_str(),
            sender: caps.get(2)?.as_str(),
            message: caps.get(3)?.as_str(),
        })
    }

    /// Returns `true` if the line has the header shape.
    pub fn is_header(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Parses a header timestamp such as `15/01/2024, 10:30`.
pub fn parse_header_timestamp(input: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
}

/// Splits a line produced by `split_inclusive('\n')` into content and terminator.
pub fn split_line_terminator(line: &str) -> (&str, &str) {
    match line.strip_suffix('\n') {
        Some(content) => (content, "\n"),
        None => (line, ""),
    }
}
