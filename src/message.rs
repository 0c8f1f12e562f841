//! Parsed transcript messages.
//!
//! This module provides [`Message`], one parsed unit of communication, and
//! [`RecordSet`], the ordered sequence of messages produced by a parse.
//!
//! A message always carries a sender and a timestamp: the parser only creates
//! one when it sees a header line establishing both. Once built, a message is
//! read-only. Transformations such as
//! [`combine_senders`](crate::core::processor::combine_senders) return new
//! values instead of mutating.
//!
//! # Examples
//!
//! ```
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 15, 0).unwrap();
//! let msg = Message::new("Alice", ts, "hello\n");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.hour(), 9);
//! assert_eq!(msg.text(), "hello");
//! ```

use std::collections::HashSet;
use std::ops::Deref;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single message reconstructed from a transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name exactly as written in the transcript |
/// | `timestamp` | `NaiveDateTime` | Minute resolution, no timezone |
/// | `body` | `String` | Message text including continuation lines and their line breaks |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: String,
    timestamp: NaiveDateTime,
    body: String,
}

impl Message {
    /// Creates a message from its parts.
    pub fn new(
        sender: impl Into<String>,
        timestamp: NaiveDateTime,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            timestamp,
            body: body.into(),
        }
    }

    /// Returns a copy of this message attributed to `sender`.
    #[must_use]
    pub fn with_sender(&self, sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            timestamp: self.timestamp,
            body: self.body.clone(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the raw body, line breaks included.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the body without its trailing line break.
    ///
    /// Only the final terminator is removed; blank continuation lines stay.
    pub fn text(&self) -> &str {
        let text = self.body.strip_suffix('\n').unwrap_or(&self.body);
        text.strip_suffix('\r').unwrap_or(text)
    }

    /// Calendar date the message was sent on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Hour of day (0-23) the message was sent in.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Number of lines in the body.
    pub fn line_count(&self) -> usize {
        self.body.lines().count().max(1)
    }
}

/// Ordered sequence of messages, in transcript order.
///
/// Dereferences to `[Message]`, so every aggregation in [`crate::core`]
/// accepts a `&RecordSet` directly.
///
/// ```
/// use chatstats::parser::{Parser, TranscriptParser};
///
/// let records = TranscriptParser::new().parse_str("PRE1\nPRE2\n")?;
/// assert!(records.is_empty());
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    messages: Vec<Message>,
}

impl RecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages as a slice.
    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the record set and returns the underlying vector.
    pub fn into_vec(self) -> Vec<Message> {
        self.messages
    }

    /// Distinct senders in order of first appearance.
    pub fn senders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.messages
            .iter()
            .map(Message::sender)
            .filter(|sender| seen.insert(*sender))
            .collect()
    }

    /// Timestamps of the first and last message in transcript order.
    pub fn span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.messages.first()?;
        let last = self.messages.last()?;
        Some((first.timestamp(), last.timestamp()))
    }
}

impl Deref for RecordSet {
    type Target = [Message];

    fn deref(&self) -> &[Message] {
        &self.messages
    }
}

impl From<Vec<Message>> for RecordSet {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl FromIterator<Message> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
