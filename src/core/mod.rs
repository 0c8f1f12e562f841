//! Aggregations over parsed transcripts.
//!
//! This module contains:
//! - [`stats`] - Message counts per sender, date and hour
//! - [`activity`] - Sender x hour matrix, hour windows, early birds and night owls
//! - [`processor`] - Record-set transformations ([`combine_senders`])
//! - [`report`] - Everything above bundled into a [`ChatReport`]
//! - [`models`] - Export configuration
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{ChatReport, ReportOutcome, count_by_sender};
//! use chatstats::parser::{Parser, TranscriptParser};
//!
//! let records = TranscriptParser::new().parse_str(
//!     "PRE1\nPRE2\n01/01/2024, 09:15 - Alice: hello\n01/01/2024, 09:16 - Bob: hi\n",
//! )?;
//!
//! match ChatReport::build(&records) {
//!     ReportOutcome::Empty => println!("nothing to show"),
//!     ReportOutcome::Ready(report) => println!("{} senders", report.sender_count()),
//! }
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod activity;
pub mod models;
pub mod output;
pub mod processor;
pub mod report;
pub mod stats;

// Re-export main types for convenience
pub use activity::{
    ActivityMatrix, ActivityRow, DEFAULT_TOP_N, HOURS_PER_DAY, HourWindow, IntensityRow,
    early_birds, night_owls, top_n_in_window,
};
pub use models::OutputConfig;
pub use processor::combine_senders;
pub use report::{ChatReport, ReportOptions, ReportOutcome, WindowRanking};
pub use stats::{SenderCount, count_by_date, count_by_hour, count_by_sender};

// Re-export Message from the crate root
pub use crate::Message;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{report_to_json, to_json, to_jsonl, write_json, write_jsonl, write_report_json};
