//! # Chatstats
//!
//! A Rust library for parsing exported chat transcripts and computing who
//! talks, when, and how much.
//!
//! ## Overview
//!
//! A transcript is a plain-text export: two preamble lines, then messages of
//! the form
//!
//! ```text
//! DD/MM/YYYY, HH:MM - Sender: message text
//! continuation lines without a header
//! ```
//!
//! Chatstats turns it into an ordered [`RecordSet`] of [`Message`]s and derives:
//! - messages per sender, per date and per hour of day
//! - a dense sender x hour activity matrix
//! - the top early birds (06:00-09:59) and night owls (00:00-05:59)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = parse_transcript("data/chat.txt")?;
//!
//!     match ChatReport::build(&records) {
//!         ReportOutcome::Empty => println!("No messages."),
//!         ReportOutcome::Ready(report) => {
//!             for entry in &report.senders {
//!                 println!("{}: {}", entry.sender, entry.count);
//!             }
//!             for entry in &report.night_owls {
//!                 println!("night owl {}: {}", entry.sender, entry.count);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`Parser`](parser::Parser) trait, [`parse_transcript`](parser::parse_transcript)
//! - [`parsers`] - [`TranscriptParser`](parsers::TranscriptParser)
//! - [`parsing`] - Header pattern and timestamp helpers
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig)
//! - [`message`] - [`Message`], [`RecordSet`]
//! - [`core`] - Aggregations, reports, exports
//! - [`source`] - Finding transcripts in a data directory
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`cli`] - CLI arguments (`cli` feature)
//! - [`error`] - [`ChatstatsError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;
pub mod source;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::{Message, RecordSet};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, RecordSet};

    pub use crate::error::{ChatstatsError, Result};

    pub use crate::config::TranscriptConfig;
    pub use crate::parser::{Parser, TranscriptParser, parse_transcript};

    pub use crate::core::activity::{
        ActivityMatrix, HourWindow, early_birds, night_owls, top_n_in_window,
    };
    pub use crate::core::models::OutputConfig;
    pub use crate::core::processor::combine_senders;
    pub use crate::core::report::{ChatReport, ReportOptions, ReportOutcome};
    pub use crate::core::stats::{SenderCount, count_by_date, count_by_hour, count_by_sender};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, write_to_format};
    pub use crate::source::{list_transcripts, select_transcript};
}
