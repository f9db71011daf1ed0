//! Error types for the word-search engine, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W006) for documentation lookup:
//!
//! - W001: `LexiconNotLoaded` (Query issued before a lexicon was installed)
//! - W002: `LexiconSource` (Word-list source could not be read)
//! - W003: `EmptyBoard` (Empty tile array)
//! - W004: `NonSquareBoard` (Tile count is not a perfect square)
//! - W005: `InvalidMinimumLength` (Minimum word length below 1)
//! - W006: `EmptyWord` (Empty target word or prefix)
//!
//! Every error is also classified by [`ErrorKind`]: **input** errors mean the
//! caller passed malformed arguments and should fix them; the **state** error
//! means the caller queried the engine before loading a lexicon and should
//! reorder its setup calls. No error is retryable — all operations are
//! deterministic, so the same call with the same inputs fails the same way.
//!
//! # Examples
//!
//! ```
//! use wordtrail::engine::WordSearchEngine;
//! use wordtrail::errors::{EngineError, ErrorKind};
//!
//! let engine = WordSearchEngine::new();
//! match engine.all_scorable_words(3) {
//!     Err(e) => {
//!         assert!(matches!(e, EngineError::LexiconNotLoaded));
//!         assert_eq!(e.kind(), ErrorKind::State);
//!         assert_eq!(e.code(), "W001");
//!     }
//!     Ok(_) => unreachable!("no lexicon was loaded"),
//! }
//! ```

use std::io;

/// Whether an error reflects the shape of the arguments or the order of calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed arguments: fix the input and call again.
    Input,
    /// Required setup has not happened yet: reorder the calls.
    State,
}

/// Custom error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no lexicon loaded (call load_lexicon before querying)")]
    LexiconNotLoaded,

    #[error("failed to read word list from '{path}': {source}")]
    LexiconSource {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("board tile array is empty")]
    EmptyBoard,

    #[error("board tile count {count} is not a perfect square")]
    NonSquareBoard { count: usize },

    #[error("minimum word length must be at least 1 (got {given})")]
    InvalidMinimumLength { given: usize },

    #[error("target word is empty")]
    EmptyWord,
}

impl EngineError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::LexiconNotLoaded => "W001",
            EngineError::LexiconSource { .. } => "W002",
            EngineError::EmptyBoard => "W003",
            EngineError::NonSquareBoard { .. } => "W004",
            EngineError::InvalidMinimumLength { .. } => "W005",
            EngineError::EmptyWord => "W006",
        }
    }

    /// Classifies the error as an input error or a state error, so callers
    /// can decide whether to fix arguments or reorder setup calls.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::LexiconNotLoaded => ErrorKind::State,
            _ => ErrorKind::Input,
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            EngineError::LexiconNotLoaded => "Query issued before a lexicon was installed",
            EngineError::LexiconSource { .. } => "Word-list source could not be read",
            EngineError::EmptyBoard => "Empty tile array",
            EngineError::NonSquareBoard { .. } => "Tile count is not a perfect square",
            EngineError::InvalidMinimumLength { .. } => "Minimum word length below 1",
            EngineError::EmptyWord => "Empty target word or prefix",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            EngineError::LexiconNotLoaded => "Every query (enumeration, tracing, scoring, membership) needs the dictionary as its oracle. Install one with load_lexicon before querying.",
            EngineError::LexiconSource { .. } => "The external word-list supplier failed: the file is missing, unreadable, or not valid UTF-8. The underlying I/O error is attached as the source.",
            EngineError::EmptyBoard => "A board needs at least one tile. The tile slice passed to set_board/from_tiles was empty.",
            EngineError::NonSquareBoard { .. } => "Boards are square: the flat row-major tile array must have a perfect-square length (1, 4, 9, 16, ...).",
            EngineError::InvalidMinimumLength { .. } => "The minimum scorable word length is 1; zero would make every tile a word.",
            EngineError::EmptyWord => "There is no path of length zero: tracing and membership queries need a non-empty word.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            EngineError::LexiconNotLoaded => Some("Call load_lexicon(...) before any query"),
            EngineError::LexiconSource { .. } => Some("Check that the word-list path exists and is readable"),
            EngineError::EmptyBoard => Some("Pass at least one tile, e.g. [\"C\", \"A\", \"T\", \"S\"] for a 2x2 board"),
            EngineError::NonSquareBoard { .. } => Some("Pad or trim the tile list to a perfect-square length"),
            EngineError::InvalidMinimumLength { .. } => Some("Use a minimum length of 1 or more"),
            EngineError::EmptyWord => Some("Pass a non-empty word to trace or validate"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
