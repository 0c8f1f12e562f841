//! Message counts per participant, per date and per hour of day.
//!
//! Every function here is a pure projection over a slice of messages: nothing
//! is cached and the input is never modified, so the views can be computed in
//! any order, or concurrently, from the same [`RecordSet`](crate::RecordSet).
//!
//! # Example
//!
//! ```
//! use chatstats::core::stats::{count_by_hour, count_by_sender};
//! use chatstats::parser::{Parser, TranscriptParser};
//!
//! let records = TranscriptParser::new().parse_str(
//!     "PRE1\nPRE2\n01/01/2024, 09:15 - Alice: hello\nworld\n01/01/2024, 09:16 - Bob: hi\n",
//! )?;
//!
//! let senders = count_by_sender(&records);
//! assert_eq!(senders[0].sender, "Alice");
//! assert_eq!(senders[0].count, 1);
//!
//! let hours = count_by_hour(&records);
//! assert_eq!(hours.get(&9), Some(&2));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;

/// A sender paired with a message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    /// Sender display name
    pub sender: String,
    /// Number of messages
    pub count: usize,
}

impl SenderCount {
    pub fn new(sender: impl Into<String>, count: usize) -> Self {
        Self {
            sender: sender.into(),
            count,
        }
    }
}

/// Counts messages per sender, highest count first.
///
/// Senders with equal counts keep the order in which they first appear in
/// `messages`.
pub fn count_by_sender(messages: &[Message]) -> Vec<SenderCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<SenderCount> = Vec::new();

    for msg in messages {
        if let Some(&i) = index.get(msg.sender()) {
            counts[i].count += 1;
        } else {
            index.insert(msg.sender(), counts.len());
            counts.push(SenderCount::new(msg.sender(), 1));
        }
    }

    rank_descending(&mut counts);
    counts
}

/// Counts messages per calendar date, in chronological order.
pub fn count_by_date(messages: &[Message]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for msg in messages {
        *counts.entry(msg.date()).or_insert(0) += 1;
    }
    counts
}

/// Counts messages per hour of day (0-23), across all dates.
///
/// Only hours with at least one message are present.
pub fn count_by_hour(messages: &[Message]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for msg in messages {
        *counts.entry(msg.hour()).or_insert(0) += 1;
    }
    counts
}

/// Busiest date, earliest on ties.
pub fn busiest_date(counts: &BTreeMap<NaiveDate, usize>) -> Option<(NaiveDate, usize)> {
    busiest(counts)
}

/// Busiest hour of day, earliest on ties.
pub fn busiest_hour(counts: &BTreeMap<u32, usize>) -> Option<(u32, usize)> {
    busiest(counts)
}

fn busiest<K: Copy + Ord>(counts: &BTreeMap<K, usize>) -> Option<(K, usize)> {
    counts
        .iter()
        .fold(None, |best: Option<(K, usize)>, (&key, &count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((key, count)),
        })
}

/// Stable sort by descending count.
pub(crate) fn rank_descending(counts: &mut [SenderCount]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
}
