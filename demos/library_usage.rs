//! Example: Using chatstats as a library
//!
//! This example demonstrates how to use chatstats in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatstats::prelude::*;

const TRANSCRIPT: &str = "\
Family
Messages and calls are end-to-end encrypted.
14/02/2024, 06:45 - Mum: Morning all
14/02/2024, 07:10 - Dad: Coffee?
anyone?
14/02/2024, 07:11 - Mum: Yes please
14/02/2024, 23:40 - Sam: can't sleep
15/02/2024, 02:05 - Sam: still awake
15/02/2024, 08:31 - +44 7700 900123: hi it's Gran
15/02/2024, 09:59 - Gran: found my old phone
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatstats Library Usage Examples ===\n");

    // Example 1: Parse a transcript held in memory
    println!("1. Parsing a transcript:");
    let records = TranscriptParser::new().parse_str(TRANSCRIPT)?;
    for msg in &records {
        println!(
            "   [{}] {}: {}",
            msg.timestamp(),
            msg.sender(),
            msg.text().replace('\n', " | ")
        );
    }

    // Example 2: Individual aggregations
    println!("\n2. Messages per sender:");
    for entry in count_by_sender(&records) {
        println!("   {}: {}", entry.sender, entry.count);
    }

    println!("\n   Messages per date:");
    for (date, count) in count_by_date(&records) {
        println!("   {date}: {count}");
    }

    // Example 3: Merge aliases of one person
    println!("\n3. Combining '+44 7700 900123' into 'Gran':");
    let combined = combine_senders(&records, &["+44 7700 900123", "Gran"], "Gran");
    for entry in count_by_sender(&combined) {
        println!("   {}: {}", entry.sender, entry.count);
    }

    // Example 4: Activity matrix and hour windows
    println!("\n4. Activity windows:");
    let matrix = ActivityMatrix::from_records(&combined);
    for entry in early_birds(&matrix) {
        println!("   early bird {}: {}", entry.sender, entry.count);
    }
    for entry in night_owls(&matrix) {
        println!("   night owl {}: {}", entry.sender, entry.count);
    }
    let evening: HourWindow = "20-23".parse()?;
    for entry in top_n_in_window(&matrix, evening, 1) {
        println!("   {evening} {}: {}", entry.sender, entry.count);
    }

    // Example 5: Full report
    println!("\n5. Building a report:");
    let options = ReportOptions::new().with_top_n(2).with_window(evening);
    match ChatReport::build_with(&combined, options) {
        ReportOutcome::Empty => println!("   No messages."),
        ReportOutcome::Ready(report) => {
            println!("   {} messages from {} senders", report.total_messages, report.sender_count());
            if let Some((hour, count)) = report.busiest_hour() {
                println!("   Busiest hour: {hour:02}:00 ({count} messages)");
            }
            println!("\n   As JSON:");
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    // Example 6: Export records
    println!("\n6. CSV export with timestamps:");
    let csv = to_csv(&combined, &OutputConfig::new().with_timestamps().with_trimmed_body())?;
    print!("{csv}");

    println!("\n=== Examples complete! ===");
    Ok(())
}
