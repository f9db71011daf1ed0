use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use wordtrail::engine::WordSearchEngine;
use wordtrail::errors::EngineError;
use wordtrail::lexicon::Lexicon;

/// Wordtrail word-search puzzle solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Row-major board tiles, whitespace- or comma-separated
    /// (e.g. "C A T D O G X X X" for a 3x3 board)
    tiles: String,

    /// Path to the word list file (whitespace-delimited words)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    lexicon: String,

    /// Minimum scorable word length
    #[arg(short = 'm', long, default_value_t = 3)]
    min_length: usize,

    /// Trace this word on the board and print its path instead of enumerating
    #[arg(short, long)]
    trace: Option<String>,
}

/// Entry point of the wordtrail CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDTRAIL_DEBUG").is_ok();
    wordtrail::log::init_logger(debug_enabled);

    log::info!("Starting wordtrail solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's an EngineError
        if let Some(engine_err) = e.downcast_ref::<EngineError>() {
            eprintln!("Error: {}", engine_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordtrail CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the lexicon from disk.
/// 3. Build the board from the tile argument.
/// 4. Either trace one word (`--trace`) or enumerate and score every
///    scorable word.
/// 5. Print results on stdout, diagnostics (timings, counts) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the lexicon from disk
    let t_load = Instant::now();
    let lexicon = Lexicon::load_from_path(&cli.lexicon)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    let word_count = lexicon.len();

    // 2. Build the engine: dictionary first, then the board
    let mut engine = WordSearchEngine::new();
    engine.load_lexicon(lexicon);

    let tiles: Vec<&str> = cli
        .tiles
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    engine.set_board(&tiles)?;

    log::info!("board ({0}x{0}):\n{1}", engine.board().size(), engine.board());

    // 3. Run the requested query
    let t_query = Instant::now();
    if let Some(word) = &cli.trace {
        let path = engine.is_on_board(word)?;
        if path.is_empty() {
            println!("{} is not on the board", word.to_uppercase());
        } else {
            let positions: Vec<String> = path.iter().map(usize::to_string).collect();
            println!("{} {}", word.to_uppercase(), positions.join(" "));
        }
    } else {
        let words = engine.all_scorable_words(cli.min_length)?;
        for word in &words {
            // Same rule the scorer applies: one point for reaching the
            // minimum, one per character beyond it.
            let points = 1 + word.chars().count().saturating_sub(cli.min_length);
            println!("{word} {points}");
        }
        let total = engine.score_words(words.iter().map(String::as_str), cli.min_length)?;
        eprintln!("{} scorable words, {} points total.", words.len(), total);
    }
    let query_secs = t_query.elapsed().as_secs_f64();

    // 4. Print diagnostics (lexicon size, timings) to stderr
    eprintln!("Loaded {word_count} words in {load_secs:.3}s; query ran in {query_secs:.3}s.");

    Ok(())
}
