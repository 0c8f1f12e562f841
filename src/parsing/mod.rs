//! Shared parsing utilities.
//!
//! Line-level helpers used by [`TranscriptParser`](crate::parsers::TranscriptParser)
//! and by anything that needs to recognize transcript headers on its own.

pub mod header;

pub use header::{
    HEADER_PATTERN, Header, HeaderMatcher, TIMESTAMP_FORMAT, parse_header_timestamp,
    split_line_terminator,
};
