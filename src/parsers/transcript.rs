//! Transcript parser.
//!
//! Exports look like this:
//!
//! ```text
//! Chat with Alice
//! Messages and calls are end-to-end encrypted.
//! 15/01/2024, 10:30 - Alice: Hello
//! this line continues Alice's message
//! 15/01/2024, 10:31 - Bob: Hi
//! ```
//!
//! The first lines are a fixed preamble and are skipped. Each header line
//! starts a new message; every other line is appended verbatim (terminator
//! included) to the message before it, or dropped if no message has started.
//! A header whose timestamp does not parse aborts the whole parse.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::config::TranscriptConfig;
use crate::error::{ChatstatsError, Result};
use crate::parser::Parser;
use crate::parsing::{HeaderMatcher, parse_header_timestamp, split_line_terminator};
use crate::{Message, RecordSet};

/// Parser for line-oriented chat transcripts.
///
/// # Example
///
/// ```rust
/// use chatstats::parser::{Parser, TranscriptParser};
///
/// let input = "PRE1\nPRE2\n01/01/2024, 09:15 - Alice: hello\nworld\n01/01/2024, 09:16 - Bob: hi\n";
/// let records = TranscriptParser::new().parse_str(input)?;
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].body(), "hello\nworld\n");
/// assert_eq!(records[1].body(), "hi\n");
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    fn parse_content(&self, content: &str) -> Result<RecordSet> {
        let matcher = HeaderMatcher::new()?;

        let content = if self.config.normalize_line_endings {
            normalize_line_endings(content)
        } else {
            Cow::Borrowed(content)
        };

        let state = content
            .split_inclusive('\n')
            .enumerate()
            .skip(self.config.preamble_lines)
            .try_fold(ParseState::default(), |state, (index, line)| {
                state.feed(index + 1, line, &matcher)
            })?;

        let discarded = state.discarded;
        let records = state.finish();
        debug!(records = records.len(), discarded, "parsed transcript");
        Ok(records)
    }
}

/// Translates `\r\n` and lone `\r` to `\n`.
fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Message under construction. Only the parser can append to it.
#[derive(Debug)]
struct PendingMessage {
    sender: String,
    timestamp: NaiveDateTime,
    body: String,
}

impl PendingMessage {
    fn append(&mut self, line: &str) {
        self.body.push_str(line);
    }

    fn finish(self) -> Message {
        Message::new(self.sender, self.timestamp, self.body)
    }
}

/// Accumulator threaded through the fold over transcript lines.
///
/// `pending` doubles as the current-sender context: continuation lines
/// attach to it, and without it they are discarded.
#[derive(Debug, Default)]
struct ParseState {
    messages: Vec<Message>,
    pending: Option<PendingMessage>,
    discarded: usize,
}

impl ParseState {
    fn feed(mut self, line_no: usize, line: &str, matcher: &HeaderMatcher) -> Result<Self> {
        let (content, terminator) = split_line_terminator(line);

        match matcher.match_line(content) {
            Some(header) => {
                let timestamp = parse_header_timestamp(header.timestamp)
                    .map_err(|e| ChatstatsError::timestamp(line_no, header.timestamp, e))?;

                if let Some(done) = self.pending.take() {
                    self.messages.push(done.finish());
                }

                let mut body = String::with_capacity(header.message.len() + terminator.len());
                body.push_str(header.message);
                body.push_str(terminator);

                self.pending = Some(PendingMessage {
                    sender: header.sender.to_string(),
                    timestamp,
                    body,
                });
            }
            None => match self.pending.as_mut() {
                Some(pending) => pending.append(line),
                None => {
                    trace!(line = line_no, "dropping continuation line before first header");
                    self.discarded += 1;
                }
            },
        }

        Ok(self)
    }

    fn finish(mut self) -> RecordSet {
        if let Some(done) = self.pending.take() {
            self.messages.push(done.finish());
        }
        RecordSet::from(self.messages)
    }
}

impl Parser for TranscriptParser {
    fn name(&self) -> &'static str {
        "Transcript"
    }

    fn parse(&self, path: &Path) -> Result<RecordSet> {
        let bytes = fs::read(path).map_err(|e| ChatstatsError::read(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read transcript");
        self.parse_bytes(&bytes).map_err(|e| e.with_path(path))
    }

    fn parse_str(&self, content: &str) -> Result<RecordSet> {
        self.parse_content(content)
    }
}
