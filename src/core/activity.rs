//! Sender-by-hour activity matrix and windowed rankings.
//!
//! [`ActivityMatrix`] is a dense grid: one row per sender, exactly
//! [`HOURS_PER_DAY`] columns, zero where nothing was sent. Rankings such as
//! [`early_birds`] and [`night_owls`] sum a contiguous [`HourWindow`] of
//! columns per sender.
//!
//! # Example
//!
//! ```
//! use chatstats::core::activity::{ActivityMatrix, HourWindow, top_n_in_window};
//! use chatstats::parser::{Parser, TranscriptParser};
//!
//! let records = TranscriptParser::new().parse_str(
//!     "PRE1\nPRE2\n01/01/2024, 07:00 - Alice: morning\n01/01/2024, 23:30 - Bob: night\n",
//! )?;
//!
//! let matrix = ActivityMatrix::from_records(&records);
//! assert_eq!(matrix.get("Alice", 7), 1);
//! assert_eq!(matrix.get("Alice", 8), 0);
//!
//! let top = top_n_in_window(&matrix, HourWindow::EARLY_BIRDS, 3);
//! assert_eq!(top[0].sender, "Alice");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::stats::{SenderCount, rank_descending};
use crate::Message;
use crate::error::{ChatstatsError, Result};

/// Number of hour columns in every matrix row.
pub const HOURS_PER_DAY: usize = 24;

/// Default size of windowed rankings.
pub const DEFAULT_TOP_N: usize = 3;

/// Message counts for one sender, indexed by hour of day.
pub type HourCounts = [usize; HOURS_PER_DAY];

/// One row of the activity matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub sender: String,
    pub hours: HourCounts,
}

impl ActivityRow {
    /// Total messages across all 24 hours.
    pub fn total(&self) -> usize {
        self.hours.iter().sum()
    }

    /// Total messages inside `window`.
    pub fn window_total(&self, window: HourWindow) -> usize {
        self.hours[window.columns()].iter().sum()
    }
}

/// Dense sender x hour-of-day message counts.
///
/// Rows are ordered by sender name. Every observed sender has a row and every
/// row has all 24 hour columns. Deserialized rows are re-sorted, and a sender
/// appearing twice is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ActivityRow>", into = "Vec<ActivityRow>")]
pub struct ActivityMatrix {
    rows: Vec<ActivityRow>,
}

impl TryFrom<Vec<ActivityRow>> for ActivityMatrix {
    type Error = ChatstatsError;

    fn try_from(mut rows: Vec<ActivityRow>) -> Result<Self> {
        rows.sort_by(|a, b| a.sender.cmp(&b.sender));
        if let Some(pair) = rows.windows(2).find(|pair| pair[0].sender == pair[1].sender) {
            return Err(ChatstatsError::invalid_format(format!(
                "Duplicate activity row for sender '{}'",
                pair[0].sender
            )));
        }
        Ok(Self { rows })
    }
}

impl From<ActivityMatrix> for Vec<ActivityRow> {
    fn from(matrix: ActivityMatrix) -> Self {
        matrix.rows
    }
}

impl ActivityMatrix {
    /// Builds the matrix from messages.
    pub fn from_records(messages: &[Message]) -> Self {
        let mut grid: BTreeMap<&str, HourCounts> = BTreeMap::new();
        for msg in messages {
            // hour() is always < 24
            grid.entry(msg.sender()).or_insert([0; HOURS_PER_DAY])[msg.hour() as usize] += 1;
        }

        let rows = grid
            .into_iter()
            .map(|(sender, hours)| ActivityRow {
                sender: sender.to_string(),
                hours,
            })
            .collect();

        Self { rows }
    }

    /// Number of sender rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, ordered by sender name.
    pub fn rows(&self) -> &[ActivityRow] {
        &self.rows
    }

    /// Sender names in row order.
    pub fn senders(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.sender.as_str())
    }

    /// Hour counts for `sender`, if present.
    pub fn row(&self, sender: &str) -> Option<&HourCounts> {
        self.rows
            .binary_search_by(|row| row.sender.as_str().cmp(sender))
            .ok()
            .map(|i| &self.rows[i].hours)
    }

    /// Count for one cell; zero for unknown senders or hours past 23.
    pub fn get(&self, sender: &str, hour: u32) -> usize {
        self.row(sender)
            .and_then(|hours| hours.get(hour as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Total messages sent by `sender`.
    pub fn row_total(&self, sender: &str) -> usize {
        self.row(sender).map_or(0, |hours| hours.iter().sum())
    }

    /// Per-hour totals across all senders.
    pub fn column_totals(&self) -> HourCounts {
        let mut totals = [0; HOURS_PER_DAY];
        for row in &self.rows {
            for (total, count) in totals.iter_mut().zip(row.hours.iter()) {
                *total += count;
            }
        }
        totals
    }

    /// Each row scaled by its own maximum, so the busiest hour of every
    /// sender is `1.0`. Rows without messages stay at zero.
    pub fn relative_intensity(&self) -> Vec<IntensityRow> {
        self.rows
            .iter()
            .map(|row| {
                let max = row.hours.iter().copied().max().unwrap_or(0);
                let mut hours = [0.0; HOURS_PER_DAY];
                if max > 0 {
                    for (scaled, &count) in hours.iter_mut().zip(row.hours.iter()) {
                        *scaled = count as f64 / max as f64;
                    }
                }
                IntensityRow {
                    sender: row.sender.clone(),
                    hours,
                }
            })
            .collect()
    }
}

/// A row of [`ActivityMatrix::relative_intensity`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntensityRow {
    pub sender: String,
    pub hours: [f64; HOURS_PER_DAY],
}

/// Inclusive range of hours of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HourWindow {
    start: u32,
    end: u32,
}

impl HourWindow {
    /// 06:00 to 09:59.
    pub const EARLY_BIRDS: HourWindow = HourWindow { start: 6, end: 9 };

    /// 00:00 to 05:59.
    pub const NIGHT_OWLS: HourWindow = HourWindow { start: 0, end: 5 };

    /// The whole day.
    pub const FULL_DAY: HourWindow = HourWindow { start: 0, end: 23 };

    /// Creates a window covering hours `start..=end`.
    ///
    /// Windows do not wrap around midnight.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end || end as usize >= HOURS_PER_DAY {
            return Err(ChatstatsError::InvalidHourWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns `true` if `hour` falls inside the window.
    pub fn contains(&self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }

    /// Number of hours covered.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    fn columns(self) -> RangeInclusive<usize> {
        self.start as usize..=self.end as usize
    }
}

impl fmt::Display for HourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:59", self.start, self.end)
    }
}

impl FromStr for HourWindow {
    type Err = ChatstatsError;

    /// Parses `START-END`, e.g. `22-23`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ChatstatsError::invalid_format(format!("Hour window '{s}' is not START-END"));
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start = start.trim().parse().map_err(|_| invalid())?;
        let end = end.trim().parse().map_err(|_| invalid())?;
        HourWindow::new(start, end)
    }
}

/// Ranks senders by their message total inside `window`, keeping the top `n`.
///
/// Highest total first; equal totals keep matrix row order (sender name).
/// Returns every sender when `n` exceeds the row count.
pub fn top_n_in_window(matrix: &ActivityMatrix, window: HourWindow, n: usize) -> Vec<SenderCount> {
    let mut totals: Vec<SenderCount> = matrix
        .rows()
        .iter()
        .map(|row| SenderCount::new(row.sender.clone(), row.window_total(window)))
        .collect();

    rank_descending(&mut totals);
    totals.truncate(n);
    totals
}

/// Top [`DEFAULT_TOP_N`] senders between 06:00 and 09:59.
pub fn early_birds(matrix: &ActivityMatrix) -> Vec<SenderCount> {
    top_n_in_window(matrix, HourWindow::EARLY_BIRDS, DEFAULT_TOP_N)
}

/// Top [`DEFAULT_TOP_N`] senders between midnight and 05:59.
pub fn night_owls(matrix: &ActivityMatrix) -> Vec<SenderCount> {
    top_n_in_window(matrix, HourWindow::NIGHT_OWLS, DEFAULT_TOP_N)
}
