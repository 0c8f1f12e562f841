//! Property-based tests for chatstats.
//!
//! These tests generate random transcripts and record sets to find edge cases.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use chatstats::core::activity::{ActivityMatrix, HOURS_PER_DAY, HourWindow, top_n_in_window};
use chatstats::core::processor::combine_senders;
use chatstats::core::report::{ChatReport, ReportOutcome};
use chatstats::core::stats::{count_by_date, count_by_hour, count_by_sender};
use chatstats::parser::{Parser, TranscriptParser};
use chatstats::{Message, RecordSet};

/// Generate a random Message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = Message> {
    (
        // Fast: select from predefined senders
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Charlie".to_string(),
            "+44 7700 900123".to_string(),
            "Иван".to_string(),
            "a:b".to_string(),
        ]),
        1u32..=28,
        0u32..24,
        0u32..60,
        // Fast: select from predefined bodies
        prop::sample::select(vec![
            "Hello\n".to_string(),
            "Hi there!\n".to_string(),
            "two\nlines\n".to_string(),
            "Привет мир\n".to_string(),
            "\n".to_string(),
            "Special;chars\"here\n".to_string(),
            "🎉🔥 emoji".to_string(),
        ]),
    )
        .prop_map(|(sender, day, hour, minute, body)| {
            Message::new(sender, timestamp(day, hour, minute), body)
        })
}

fn timestamp(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Generate a vector of random messages
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

/// Continuation line that can never be mistaken for a header.
fn arb_continuation() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        String::new(),
        "plain text".to_string(),
        "   indented".to_string(),
        "has: colon".to_string(),
        "1/1/2024, 09:00 - X: not a header".to_string(),
        "юникод ✓".to_string(),
    ])
}

fn render(messages: &[(Message, Vec<String>)]) -> String {
    let mut out = String::from("PRE1\nPRE2\n");
    for (msg, extra) in messages {
        out.push_str(&format!(
            "{} - {}: {}\n",
            msg.timestamp().format("%d/%m/%Y, %H:%M"),
            msg.sender(),
            msg.text()
        ));
        for line in extra {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn arb_transcript() -> impl Strategy<Value = Vec<(Message, Vec<String>)>> {
    prop::collection::vec(
        (arb_message(), prop::collection::vec(arb_continuation(), 0..3)),
        0..15,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// One record per header line, with sender and timestamp as written
    #[test]
    fn parse_recovers_headers(transcript in arb_transcript()) {
        // bodies with embedded newlines are rendered as extra continuation lines
        let records = TranscriptParser::new().parse_str(&render(&transcript)).unwrap();
        prop_assert_eq!(records.len(), transcript.len());
        for (record, (msg, _)) in records.iter().zip(&transcript) {
            prop_assert_eq!(record.sender(), msg.sender());
            prop_assert_eq!(record.timestamp(), msg.timestamp());
        }
    }

    /// Continuation lines are appended verbatim, in order, with their breaks
    #[test]
    fn parse_appends_continuations(transcript in arb_transcript()) {
        let records = TranscriptParser::new().parse_str(&render(&transcript)).unwrap();
        for (record, (msg, extra)) in records.iter().zip(&transcript) {
            let mut expected = format!("{}\n", msg.text());
            for line in extra {
                expected.push_str(line);
                expected.push('\n');
            }
            prop_assert_eq!(record.body(), expected.as_str());
        }
    }

    /// Preamble lines never produce records, whatever they contain
    #[test]
    fn preamble_is_ignored(first in "[^\r\n]{0,40}", second in "[^\r\n]{0,40}") {
        let input = format!("{first}\n{second}\n");
        let records = TranscriptParser::new().parse_str(&input).unwrap();
        prop_assert!(records.is_empty());
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Every view accounts for every message exactly once
    #[test]
    fn counts_are_conserved(messages in arb_messages(40)) {
        let total = messages.len();
        prop_assert_eq!(count_by_sender(&messages).iter().map(|c| c.count).sum::<usize>(), total);
        prop_assert_eq!(count_by_date(&messages).values().sum::<usize>(), total);
        prop_assert_eq!(count_by_hour(&messages).values().sum::<usize>(), total);

        let matrix = ActivityMatrix::from_records(&messages);
        prop_assert_eq!(matrix.column_totals().iter().sum::<usize>(), total);
    }

    /// Sender counts are sorted descending
    #[test]
    fn sender_counts_descending(messages in arb_messages(40)) {
        let counts = count_by_sender(&messages);
        for pair in counts.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    /// One row per distinct sender, 24 columns each, row totals match sender counts
    #[test]
    fn matrix_is_complete(messages in arb_messages(40)) {
        let matrix = ActivityMatrix::from_records(&messages);
        let counts = count_by_sender(&messages);
        prop_assert_eq!(matrix.len(), counts.len());
        for row in matrix.rows() {
            prop_assert_eq!(row.hours.len(), HOURS_PER_DAY);
        }
        for entry in &counts {
            prop_assert_eq!(matrix.row_total(&entry.sender), entry.count);
        }
    }

    /// Windowed top-N is bounded by n and by each sender's row total
    #[test]
    fn top_n_is_bounded(
        messages in arb_messages(40),
        start in 0u32..24,
        len in 0u32..24,
        n in 0usize..8,
    ) {
        let window = HourWindow::new(start, (start + len).min(23)).unwrap();
        let matrix = ActivityMatrix::from_records(&messages);
        let top = top_n_in_window(&matrix, window, n);

        prop_assert!(top.len() <= n.min(matrix.len()));
        prop_assert_eq!(top.len(), n.min(matrix.len()));
        for entry in &top {
            prop_assert!(entry.count <= matrix.row_total(&entry.sender));
        }
        for pair in top.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    /// Relative intensity stays within [0, 1]
    #[test]
    fn intensity_is_normalized(messages in arb_messages(40)) {
        for row in ActivityMatrix::from_records(&messages).relative_intensity() {
            for value in row.hours {
                prop_assert!((0.0..=1.0).contains(&value));
            }
            prop_assert!(row.hours.iter().any(|v| (*v - 1.0).abs() < f64::EPSILON));
        }
    }

    // ============================================
    // COMBINE PROPERTIES
    // ============================================

    /// Combining never changes the number of messages nor the input
    #[test]
    fn combine_preserves_length_and_input(messages in arb_messages(30)) {
        let snapshot = messages.clone();
        let combined = combine_senders(&messages, &["Alice", "Bob"], "AB");

        prop_assert_eq!(&messages, &snapshot);
        prop_assert_eq!(combined.len(), messages.len());
        prop_assert!(combined.iter().all(|m| m.sender() != "Alice" && m.sender() != "Bob"));

        let before = messages.iter().filter(|m| m.sender() == "Alice" || m.sender() == "Bob").count();
        let after = combined.iter().filter(|m| m.sender() == "AB").count();
        prop_assert_eq!(before, after);
    }

    // ============================================
    // REPORT PROPERTIES
    // ============================================

    /// A report is empty exactly when the record set is
    #[test]
    fn report_empty_iff_no_records(messages in arb_messages(10)) {
        let records = RecordSet::from(messages);
        let outcome = ChatReport::build(&records);
        prop_assert_eq!(outcome.is_empty(), records.is_empty());
        if let ReportOutcome::Ready(report) = outcome {
            prop_assert_eq!(report.total_messages, records.len());
            prop_assert!(report.first_message <= report.last_message);
        }
    }
}
