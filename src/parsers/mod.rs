//! Transcript parsers.
//!
//! - [`TranscriptParser`] - Parses `DD/MM/YYYY, HH:MM - Sender: message` transcripts
//!
//! Parsers implement the [`Parser`](crate::parser::Parser) trait.

mod transcript;

pub use transcript::TranscriptParser;
