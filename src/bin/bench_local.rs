//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of `all_scorable_words` on a handful of boards.
//! - Loads the lexicon once, then runs each board several times and reports the median.
//! - Optionally prints how many words each board yields, as a sanity check.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 9`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Boards live in `cases()` below.
//! - I/O (printing) is kept outside the timed section.
//! - One warm-up run per board is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::{Duration, Instant};
use wordtrail::engine::WordSearchEngine;
use wordtrail::lexicon::Lexicon;

/// Simple local benchmark runner: load the lexicon once, time several boards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (whitespace-delimited words)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    lexicon: String,

    /// Number of repeats per board (use >1 to reduce noise; median is reported)
    #[arg(short, long, default_value_t = 5)]
    repeats: usize,

    /// Minimum scorable word length passed to the enumerator
    #[arg(short = 'm', long, default_value_t = 3)]
    min_length: usize,
}

/// Named boards to time. Sizes are chosen so the smallest case is nearly
/// free and the largest one dominates the run.
fn cases() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "3x3 dense",
            vec!["C", "A", "T", "D", "O", "G", "S", "E", "N"],
        ),
        (
            "4x4 rodent",
            vec![
                "C", "A", "T", "S", "O", "D", "O", "G", "R", "E", "N", "T", "N", "E", "S", "T",
            ],
        ),
        (
            "5x5 vowel-heavy",
            vec![
                "S", "T", "O", "N", "E", "E", "A", "R", "I", "D", "L", "E", "N", "T", "O", "P",
                "A", "D", "E", "S", "R", "I", "S", "E", "N",
            ],
        ),
    ]
}

fn median(samples: &mut [Duration]) -> Duration {
    samples.sort_unstable();
    samples[samples.len() / 2]
}

fn main() {
    let cli = Cli::parse();
    let repeats = cli.repeats.max(1);

    let lexicon = match Lexicon::load_from_path(&cli.lexicon) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            std::process::exit(1);
        }
    };
    println!(
        "lexicon: {} words (longest {}), min length {}, {} repeats\n",
        lexicon.len(),
        lexicon.largest_word_length(),
        cli.min_length,
        repeats
    );

    let mut engine = WordSearchEngine::new();
    engine.load_lexicon(lexicon);

    for (name, tiles) in cases() {
        engine.set_board(&tiles).expect("benchmark boards are square");

        // Warm-up run, not timed.
        let words = engine
            .all_scorable_words(cli.min_length)
            .expect("benchmark preconditions hold");

        let mut samples = Vec::with_capacity(repeats);
        for _ in 0..repeats {
            let t = Instant::now();
            let found = engine
                .all_scorable_words(cli.min_length)
                .expect("benchmark preconditions hold");
            samples.push(t.elapsed());
            black_box(found);
        }

        println!(
            "{:<16} {:>4} words   median {:>10.3?}",
            name,
            words.len(),
            median(&mut samples)
        );
    }
}
