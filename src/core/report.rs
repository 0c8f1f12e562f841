//! Combined statistics for one transcript.
//!
//! [`ChatReport::build`] runs every aggregation over a record set and bundles
//! the results. An empty record set does not produce an empty report: it
//! produces [`ReportOutcome::Empty`], which callers match on before rendering.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::info;

use super::activity::{ActivityMatrix, DEFAULT_TOP_N, HourWindow, top_n_in_window};
use super::stats::{
    SenderCount, busiest_date, busiest_hour, count_by_date, count_by_hour, count_by_sender,
};
use crate::Message;

/// Knobs for [`ChatReport::build_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Size of the windowed rankings
    pub top_n: usize,
    /// Extra window to rank besides the early-bird and night-owl ones
    pub custom_window: Option<HourWindow>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            custom_window: None,
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_window(mut self, window: HourWindow) -> Self {
        self.custom_window = Some(window);
        self
    }
}

/// Ranking over a caller-chosen hour window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowRanking {
    pub window: HourWindow,
    pub top: Vec<SenderCount>,
}

/// Every statistic for a non-empty transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    pub total_messages: usize,
    pub first_message: NaiveDateTime,
    pub last_message: NaiveDateTime,
    pub senders: Vec<SenderCount>,
    pub dates: BTreeMap<NaiveDate, usize>,
    pub hours: BTreeMap<u32, usize>,
    pub activity: ActivityMatrix,
    pub early_birds: Vec<SenderCount>,
    pub night_owls: Vec<SenderCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowRanking>,
}

/// Result of building a report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// The transcript held no messages.
    Empty,
    Ready(Box<ChatReport>),
}

impl ReportOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, ReportOutcome::Empty)
    }

    /// Returns the report, or `None` for an empty transcript.
    pub fn into_report(self) -> Option<ChatReport> {
        match self {
            ReportOutcome::Empty => None,
            ReportOutcome::Ready(report) => Some(*report),
        }
    }
}

impl ChatReport {
    /// Builds a report with default options.
    ///
    /// # Example
    ///
    /// ```
    /// use chatstats::core::report::{ChatReport, ReportOutcome};
    /// use chatstats::parser::{Parser, TranscriptParser};
    ///
    /// let parser = TranscriptParser::new();
    ///
    /// let empty = parser.parse_str("PRE1\nPRE2\n")?;
    /// assert!(matches!(ChatReport::build(&empty), ReportOutcome::Empty));
    ///
    /// let records = parser.parse_str("PRE1\nPRE2\n01/01/2024, 07:00 - Alice: hi\n")?;
    /// let report = ChatReport::build(&records).into_report().unwrap();
    /// assert_eq!(report.total_messages, 1);
    /// # Ok::<(), chatstats::ChatstatsError>(())
    /// ```
    pub fn build(messages: &[Message]) -> ReportOutcome {
        Self::build_with(messages, ReportOptions::default())
    }

    /// Builds a report with explicit options.
    pub fn build_with(messages: &[Message], options: ReportOptions) -> ReportOutcome {
        let Some(first) = messages.iter().map(Message::timestamp).min() else {
            return ReportOutcome::Empty;
        };
        let last = messages
            .iter()
            .map(Message::timestamp)
            .max()
            .unwrap_or(first);

        let activity = ActivityMatrix::from_records(messages);
        let early_birds = top_n_in_window(&activity, HourWindow::EARLY_BIRDS, options.top_n);
        let night_owls = top_n_in_window(&activity, HourWindow::NIGHT_OWLS, options.top_n);
        let window = options.custom_window.map(|window| WindowRanking {
            window,
            top: top_n_in_window(&activity, window, options.top_n),
        });

        let report = ChatReport {
            total_messages: messages.len(),
            first_message: first,
            last_message: last,
            senders: count_by_sender(messages),
            dates: count_by_date(messages),
            hours: count_by_hour(messages),
            activity,
            early_birds,
            night_owls,
            window,
        };

        info!(
            messages = report.total_messages,
            senders = report.senders.len(),
            days = report.dates.len(),
            "built report"
        );
        ReportOutcome::Ready(Box::new(report))
    }

    /// Number of distinct senders.
    pub fn sender_count(&self) -> usize {
        self.senders.len()
    }

    pub fn busiest_date(&self) -> Option<(NaiveDate, usize)> {
        busiest_date(&self.dates)
    }

    pub fn busiest_hour(&self) -> Option<(u32, usize)> {
        busiest_hour(&self.hours)
    }
}
