//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatstats::cli::Args;
use chatstats::core::activity::{ActivityMatrix, HOURS_PER_DAY};
use chatstats::core::output::{report_to_json, write_report_json};
use chatstats::core::{ChatReport, ReportOutcome, SenderCount, combine_senders};
use chatstats::format::write_to_format;
use chatstats::parser::{Parser, TranscriptParser};
use chatstats::source::{list_transcripts, select_transcript};
use chatstats::{ChatstatsError, RecordSet};

const BAR_WIDTH: usize = 30;
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the global subscriber on stderr. `RUST_LOG` wins over `-v`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let total_start = Instant::now();

    if args.list {
        for path in candidates(&args.input)? {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let path = resolve_input(&args.input, args.file.as_deref())?;
    info!(path = %path.display(), "selected transcript");

    let parser = TranscriptParser::with_config(args.transcript_config());
    let parse_start = Instant::now();
    let mut records = parser.parse(&path)?;
    debug!(elapsed_ms = parse_start.elapsed().as_millis(), "parse finished");

    if let Some((senders, into)) = args.combine_target() {
        records = combine_senders(&records, senders, into);
    }

    let report = match ChatReport::build_with(&records, args.report_options()) {
        ReportOutcome::Empty => {
            println!("No messages found in {}.", path.display());
            return Ok(());
        }
        ReportOutcome::Ready(report) => report,
    };

    if let Some(export) = &args.export {
        export_records(&records, export, args)?;
    }

    if let Some(report_path) = &args.report {
        write_report_json(&report, report_path)?;
        info!(path = %report_path, "wrote report");
    }

    if args.json {
        println!("{}", report_to_json(&report)?);
    } else {
        print_report(&path, &report);
        println!();
        println!("⚡ Done in {:.2}s", total_start.elapsed().as_secs_f64());
    }

    Ok(())
}

/// Transcripts `--list` shows: the directory listing, or the file itself.
fn candidates(input: &Path) -> Result<Vec<PathBuf>, ChatstatsError> {
    if input.is_dir() {
        list_transcripts(input)
    } else {
        Ok(vec![input.to_path_buf()])
    }
}

fn resolve_input(input: &Path, file: Option<&str>) -> Result<PathBuf, ChatstatsError> {
    if input.is_dir() {
        select_transcript(input, file)
    } else {
        Ok(input.to_path_buf())
    }
}

fn export_records(records: &RecordSet, path: &str, args: &Args) -> Result<(), ChatstatsError> {
    let format = args.export_format();
    write_to_format(records, path, format, &args.output_config())?;
    info!(path, %format, records = records.len(), "exported records");
    Ok(())
}

fn print_report(path: &Path, report: &ChatReport) {
    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", path.display());
    println!(
        "📅 Period:   {} → {}",
        report.first_message.format("%d/%m/%Y %H:%M"),
        report.last_message.format("%d/%m/%Y %H:%M")
    );
    println!("💬 Messages: {}", report.total_messages);
    println!("👥 Senders:  {}", report.sender_count());
    println!("📆 Days:     {}", report.dates.len());
    if let Some((date, count)) = report.busiest_date() {
        println!("🔥 Busiest:  {} ({count} messages)", date.format("%d/%m/%Y"));
    }

    println!();
    println!("👤 Messages per sender");
    print_ranking(&report.senders);

    println!();
    println!("🕐 Messages per hour");
    let max = report.hours.values().copied().max().unwrap_or(0);
    for hour in 0..HOURS_PER_DAY as u32 {
        let count = report.hours.get(&hour).copied().unwrap_or(0);
        println!("   {hour:02}:00 {:>6}  {}", count, bar(count, max));
    }

    println!();
    println!("🗺️  Activity by hour (relative to each sender's busiest hour)");
    print_heatmap(&report.activity);

    println!();
    println!("🐦 Early birds (06:00-09:59)");
    print_ranking(&report.early_birds);

    println!();
    println!("🦉 Night owls (00:00-05:59)");
    print_ranking(&report.night_owls);

    if let Some(ranking) = &report.window {
        println!();
        println!("⏱️  Most active {}", ranking.window);
        print_ranking(&ranking.top);
    }
}

fn print_ranking(entries: &[SenderCount]) {
    let width = name_width(entries.iter().map(|e| e.sender.as_str()));
    let max = entries.first().map_or(0, |e| e.count);
    for entry in entries {
        println!(
            "   {:<width$} {:>6}  {}",
            entry.sender,
            entry.count,
            bar(entry.count, max)
        );
    }
}

fn print_heatmap(matrix: &ActivityMatrix) {
    let width = name_width(matrix.senders());
    let hours: String = (0..HOURS_PER_DAY)
        .map(|h| if h % 6 == 0 { char::from(b'0' + (h / 10) as u8) } else { ' ' })
        .collect();
    let units: String = (0..HOURS_PER_DAY)
        .map(|h| if h % 6 == 0 { char::from(b'0' + (h % 10) as u8) } else { ' ' })
        .collect();
    println!("   {:<width$} {hours}", "");
    println!("   {:<width$} {units}", "");

    for row in matrix.relative_intensity() {
        let cells: String = row.hours.iter().map(|&v| shade(v)).collect();
        println!("   {:<width$} {cells}", row.sender);
    }
}

fn shade(intensity: f64) -> char {
    if intensity <= 0.0 {
        return SHADES[0];
    }
    let steps = (SHADES.len() - 1) as f64;
    let index = (intensity * steps).ceil().clamp(1.0, steps) as usize;
    SHADES[index]
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "█".repeat(count * BAR_WIDTH / max)
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).min(32)
}
