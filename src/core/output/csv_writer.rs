//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

use super::TIMESTAMP_FORMAT;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Sender`, `Body`
///   - With timestamps: `Timestamp`, `Sender`, `Body`
/// - Encoding: UTF-8
///
/// Multi-line bodies are quoted, so every record stays one CSV row.
pub fn write_csv(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, messages, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, messages, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(out: W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(3);
    if config.include_timestamps {
        header.push("Timestamp");
    }
    header.push("Sender");
    header.push("Body");
    header
}

fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::with_capacity(3);
    if config.include_timestamps {
        record.push(msg.timestamp().format(TIMESTAMP_FORMAT).to_string());
    }
    record.push(msg.sender().to_string());
    record.push(config.body(msg).to_string());
    record
}
