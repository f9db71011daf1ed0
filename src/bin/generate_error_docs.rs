//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, kinds, descriptions, details, and help
//! text directly from the `EngineError` implementation via its `code()`,
//! `kind()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;

use wordtrail::errors::{EngineError, ErrorKind};

/// Helper to create all `EngineError` variants for documentation
fn all_engine_error_variants() -> Vec<EngineError> {
    vec![
        EngineError::LexiconNotLoaded,
        EngineError::LexiconSource {
            path: "data/words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        EngineError::EmptyBoard,
        EngineError::NonSquareBoard { count: 7 },
        EngineError::InvalidMinimumLength { given: 0 },
        EngineError::EmptyWord,
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Engine Errors\n");
    println!(
        "Each error is classified as an **input** error (fix the arguments) \
         or a **state** error (reorder the setup calls).\n"
    );

    for error in all_engine_error_variants() {
        let kind = match error.kind() {
            ErrorKind::Input => "input",
            ErrorKind::State => "state",
        };

        println!("### {}: {} ({kind})\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{error}");
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }

    println!("## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: minimum word length must be at least 1 (got 0) (W005)");
    println!("Use a minimum length of 1 or more");
    println!("```\n");
    println!("1. Note the error code (e.g., `W005`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps");
}
