//! Synthetic transcript generator for stress testing chatstats.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [seed]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 data/heavy_test.txt

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🤯", "🔥", "👍", "❤️", "🎉", "🌈",
    "🤷‍♀️", "👨‍👩‍👧‍👦",
];

// Names never contain ": " or a line break, otherwise the header split would move.
const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "+44 7700 900123",
    "Dad 🔥",
    "User;With;Semicolons",
    "User \"Quoted\"",
];

const NOTICES: &[&str] = &[
    "Alice added Bob",
    "Carol left",
    "Messages and calls are end-to-end encrypted.",
    "You changed the group description",
    "<Media omitted>",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_test.txt", String::as_str);
    let seed: Option<u64> = args.get(3).and_then(|s| s.parse().ok());

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    if let Some(seed) = seed {
        println!("   Seed:     {seed}");
    }
    println!();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let start = Instant::now();
    let bytes_written = generate_transcript(&mut writer, &mut rng, count)?;
    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size:  {mb:.2} MB");
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    println!("   Speed: {:.0} msg/s", count as f64 / elapsed.as_secs_f64());
    Ok(())
}

fn generate_transcript<W: Write>(
    out: &mut W,
    rng: &mut impl Rng,
    count: usize,
) -> io::Result<usize> {
    let mut bytes_written = 0;
    let mut emit = |line: &str| -> io::Result<()> {
        bytes_written += line.len();
        out.write_all(line.as_bytes())
    };

    emit("Chat export\n")?;
    emit("Messages and calls are end-to-end encrypted.\n")?;

    let mut clock = start_time();
    let start = Instant::now();

    for i in 0..count {
        clock += Duration::minutes(rng.gen_range(0..=180));
        let sender = SENDERS.choose(rng).copied().unwrap_or("Alice");

        let line = format!(
            "{} - {}: {}\n",
            clock.format("%d/%m/%Y, %H:%M"),
            sender,
            generate_body(rng, i)
        );
        emit(&line)?;

        // System notices have no "sender: " part and land in the previous body.
        if i % 500 == 250 {
            let notice = NOTICES.choose(rng).copied().unwrap_or("<Media omitted>");
            emit(&format!("{} - {notice}\n", clock.format("%d/%m/%Y, %H:%M")))?;
        }

        if (i + 1) % 10_000 == 0 {
            let mps = (i + 1) as f64 / start.elapsed().as_secs_f64();
            eprint!("\r   Generated {}/{count} ({mps:.0} msg/s)", i + 1);
        }
    }

    Ok(bytes_written)
}

fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Message text; may span several lines, none of which look like a header.
fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=4 => format!("Normal message #{index} with some text"),
        5 => format!("Message with semicolons; here; and; there; index={index}"),
        6 => format!("Message with \"quotes\" and 'apostrophes' #{index}"),
        7 => {
            let lines = rng.gen_range(2..=5);
            (0..lines)
                .map(|n| format!("line {n} of multi-line message #{index}"))
                .collect::<Vec<_>>()
                .join("\n")
        }
        8 => {
            let emojis: String = (0..20)
                .map(|_| EMOJIS.choose(rng).copied().unwrap_or("🙂"))
                .collect();
            format!("Emoji spam: {emojis} #{index}")
        }
        9 => format!("Кириллица: Привет мир! #{index}"),
        10 => format!("Mixed: Hello Привет 你好 🌍 #{index}"),
        _ => format!("Note to self: remember #{index}\n\n(blank line above)"),
    }
}
