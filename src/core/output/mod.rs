//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one JSON per line) - requires `json-output` feature
//! - [`write_report_json`] / [`report_to_json`] - full statistics report - requires `json-output` feature
//!
//! Timestamps, when enabled, are written as `YYYY-MM-DDTHH:MM`.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::output::{write_csv, write_jsonl, to_csv};
//! use chatstats::core::models::OutputConfig;
//! use chatstats::parser::parse_transcript;
//!
//! let records = parse_transcript("data/chat.txt")?;
//! let config = OutputConfig::new().with_timestamps();
//!
//! write_csv(&records, "output.csv", &config)?;
//! write_jsonl(&records, "output.jsonl", &config)?;
//!
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, to_json, write_json, write_report_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// `chrono` format string for exported timestamps.
#[cfg_attr(
    not(any(feature = "csv-output", feature = "json-output")),
    allow(dead_code)
)]
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";
