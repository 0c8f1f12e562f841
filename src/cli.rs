//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ExportFormat`] - Export format options, convertible to [`crate::format::OutputFormat`]

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use tracing::warn;

use crate::config::{DEFAULT_PREAMBLE_LINES, TranscriptConfig};
use crate::core::activity::{DEFAULT_TOP_N, HourWindow};
use crate::core::models::OutputConfig;
use crate::core::report::ReportOptions;
use crate::format::OutputFormat;
use crate::source::DEFAULT_DATA_DIR;

/// Message statistics for chat transcripts: who talks most, on which days,
/// at which hours, and who the early birds and night owls are.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats
    chatstats ./data --list
    chatstats ./data --file family.txt --top 5
    chatstats chat.txt --combine \"+44 7700 900123\",Mum --into Mum
    chatstats chat.txt --json > report.json
    chatstats chat.txt --export messages.jsonl -t")]
pub struct Args {
    /// Transcript file, or a directory of transcripts
    #[arg(default_value = DEFAULT_DATA_DIR)]
    pub input: PathBuf,

    /// File to analyze when INPUT is a directory (default: first by name)
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    /// List the transcripts in INPUT and exit
    #[arg(long)]
    pub list: bool,

    /// Number of senders in the early-bird and night-owl rankings
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Extra hour window to rank, e.g. 22-23
    #[arg(long, value_name = "START-END", value_parser = parse_window)]
    pub window: Option<HourWindow>,

    /// Senders to merge into one participant (comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',', requires = "into")]
    pub combine: Vec<String>,

    /// Name for the merged participant
    #[arg(long, value_name = "NAME", requires = "combine")]
    pub into: Option<String>,

    /// Leading lines to skip before the first message
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PREAMBLE_LINES)]
    pub preamble_lines: usize,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Also write the parsed messages to this file
    #[arg(long, value_name = "PATH")]
    pub export: Option<String>,

    /// Export format (default: from the export file extension, else csv)
    #[arg(short, long, value_enum, requires = "export")]
    pub format: Option<ExportFormat>,

    /// Include timestamps in the export
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Strip the trailing line break from exported bodies
    #[arg(long)]
    pub trim: bool,

    /// Write the JSON report to this file
    #[arg(long, value_name = "PATH")]
    pub report: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_window(s: &str) -> Result<HourWindow, String> {
    s.parse().map_err(|e: crate::ChatstatsError| e.to_string())
}

impl Args {
    /// Log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn transcript_config(&self) -> TranscriptConfig {
        TranscriptConfig::new().with_preamble_lines(self.preamble_lines)
    }

    pub fn report_options(&self) -> ReportOptions {
        let options = ReportOptions::new().with_top_n(self.top);
        match self.window {
            Some(window) => options.with_window(window),
            None => options,
        }
    }

    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.timestamps {
            config = config.with_timestamps();
        }
        if self.trim {
            config = config.with_trimmed_body();
        }
        config
    }

    /// Alias merge requested with `--combine ... --into ...`.
    pub fn combine_target(&self) -> Option<(&[String], &str)> {
        match (&self.into, self.combine.is_empty()) {
            (Some(into), false) => Some((self.combine.as_slice(), into.as_str())),
            _ => None,
        }
    }

    /// Export format: explicit `--format`, else the export extension, else CSV.
    ///
    /// Falling back to CSV for an unrecognized extension logs a warning.
    pub fn export_format(&self) -> OutputFormat {
        match (self.format, &self.export) {
            (Some(format), _) => format.into(),
            (None, Some(path)) => OutputFormat::from_path(Path::new(path)).unwrap_or_else(|e| {
                let fallback = OutputFormat::default();
                warn!("{e}; writing {fallback}");
                fallback
            }),
            (None, None) => OutputFormat::default(),
        }
    }
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExportFormat {
    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> OutputFormat {
        match format {
            ExportFormat::Csv => OutputFormat::Csv,
            ExportFormat::Json => OutputFormat::Json,
            ExportFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}
