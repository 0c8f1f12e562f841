//! Benchmarks for chatstats parsing and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- transcript_parsing`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstats::core::activity::{ActivityMatrix, HourWindow, top_n_in_window};
use chatstats::core::output::{to_csv, to_json, to_jsonl};
use chatstats::core::processor::combine_senders;
use chatstats::core::report::ChatReport;
use chatstats::core::OutputConfig;
use chatstats::parser::{Parser, TranscriptParser};
use chatstats::RecordSet;

// =============================================================================
// Test Data Generators
// =============================================================================

const SENDERS: [&str; 5] = ["Alice", "Bob", "Charlie", "+44 7700 900123", "Иван"];

fn generate_transcript(count: usize) -> String {
    let mut out = String::from("Family\nMessages and calls are end-to-end encrypted.\n");
    for i in 0..count {
        let day = i / 1440 % 28 + 1;
        let hour = i / 60 % 24;
        let minute = i % 60;
        out.push_str(&format!(
            "{:02}/02/2024, {:02}:{:02} - {}: Message number {}\n",
            day,
            hour,
            minute,
            SENDERS[i % SENDERS.len()],
            i
        ));
        if i % 10 == 0 {
            out.push_str("second line\n\n");
        }
    }
    out
}

fn generate_records(count: usize) -> RecordSet {
    TranscriptParser::new()
        .parse_str(&generate_transcript(count))
        .unwrap()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_transcript_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript_parsing");
    let parser = TranscriptParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let records = parser.parse_str(black_box(txt)).unwrap();
                black_box(records)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_activity_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("activity_matrix");

    for size in [1_000_usize, 10_000, 100_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let matrix = ActivityMatrix::from_records(black_box(records));
                black_box(top_n_in_window(&matrix, HourWindow::NIGHT_OWLS, 3))
            });
        });
    }
    group.finish();
}

fn bench_combine_senders(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine_senders");

    for size in [1_000_usize, 10_000, 100_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(combine_senders(black_box(records), &["Alice", "Bob"], "A&B")));
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    for size in [1_000_usize, 10_000, 100_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(ChatReport::build(black_box(records))));
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_exports(c: &mut Criterion) {
    let mut group = c.benchmark_group("exports");
    let config = OutputConfig::new().with_timestamps();

    for size in [100_usize, 1_000, 10_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("csv", size), &records, |b, records| {
            b.iter(|| black_box(to_csv(black_box(records), &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("json", size), &records, |b, records| {
            b.iter(|| black_box(to_json(black_box(records), &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("jsonl", size), &records, |b, records| {
            b.iter(|| black_box(to_jsonl(black_box(records), &config).unwrap()));
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = TranscriptParser::new();

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // parse -> report
                let records = parser.parse_str(black_box(txt)).unwrap();
                black_box(ChatReport::build(&records))
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_transcript_parsing,
    bench_activity_matrix,
    bench_combine_senders,
    bench_report,
    bench_exports,
    bench_full_pipeline,
);

criterion_main!(benches);
