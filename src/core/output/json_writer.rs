//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::Message;
use crate::core::models::OutputConfig;
use crate::core::report::ChatReport;
use crate::error::Result;

use super::TIMESTAMP_FORMAT;

/// Message shape used by the JSON and JSONL writers.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonMessage<'a> {
    sender: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl<'a> JsonMessage<'a> {
    pub(super) fn from_message(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            sender: msg.sender(),
            body: config.body(msg),
            timestamp: config
                .include_timestamps
                .then(|| msg.timestamp().format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

/// Writes messages to JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"sender": "Alice", "body": "Hello\n"},
///   {"sender": "Bob", "body": "Hi\n"}
/// ]
/// ```
pub fn write_json(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to JSON string as an array.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let json_messages: Vec<JsonMessage<'_>> = messages
        .iter()
        .map(|m| JsonMessage::from_message(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_messages)?)
}

/// Writes a full report as pretty-printed JSON.
pub fn write_report_json(report: &ChatReport, output_path: &str) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
pub fn report_to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
