//! JSON Lines (JSONL) output writer.
//!
//! One message per line, which suits line-oriented tools (`jq -c`, `grep`,
//! `split`) and loading into dataframes.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

use super::json_writer::JsonMessage;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"sender":"Alice","body":"Hello\n"}
/// {"sender":"Bob","body":"Hi\n"}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, messages, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(&mut buffer, messages, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(writer: &mut W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    for msg in messages {
        let line = serde_json::to_string(&JsonMessage::from_message(msg, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
