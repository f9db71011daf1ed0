//! The word-search engine: enumerate, trace, and score words on the board.
//!
//! A [`WordSearchEngine`] owns one [`Board`] (a default 4×4 layout until
//! `set_board` replaces it) and, once installed, one [`Lexicon`]. All queries
//! take `&self`: the board and lexicon are read-only after setup, and every
//! query owns its own transient search state (visited mask, memo cache), so
//! nothing is shared between calls.
//!
//! # Error Handling
//!
//! Queries return [`EngineError`]; see `errors.rs` for the code table. Two
//! rules hold everywhere:
//!
//! - The lexicon-loaded **state** check runs before any argument-shape
//!   **input** check, so misuse of an unconfigured engine always reports the
//!   call-order problem.
//! - No query partially mutates engine state before failing — the engine is
//!   exactly as it was on `Err`.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordtrail::engine::WordSearchEngine;
//! use wordtrail::lexicon::Lexicon;
//!
//! let mut engine = WordSearchEngine::new();
//! engine.load_lexicon(Lexicon::parse_from_str("cat cad dog catty"));
//! engine.set_board(&["C", "A", "T", "D", "O", "G", "X", "X", "X"])?;
//!
//! let words = engine.all_scorable_words(3)?;
//! assert!(words.contains("CAT"));
//! assert!(words.contains("DOG"));
//! assert!(!words.contains("CATTY")); // not traceable on this board
//! # Ok::<(), wordtrail::errors::EngineError>(())
//! ```
//!
//! ## Tracing a Word
//!
//! ```
//! use wordtrail::engine::WordSearchEngine;
//! use wordtrail::lexicon::Lexicon;
//!
//! let mut engine = WordSearchEngine::new();
//! engine.load_lexicon(Lexicon::parse_from_str("cat"));
//! engine.set_board(&["C", "A", "T", "D", "O", "G", "X", "X", "X"])?;
//!
//! // One linear index per character; empty means "not on the board".
//! let path = engine.is_on_board("cat")?;
//! assert_eq!(path.len(), 3);
//! assert!(engine.is_on_board("AXE")?.is_empty());
//! # Ok::<(), wordtrail::errors::EngineError>(())
//! ```

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::board::Board;
use crate::errors::EngineError;
use crate::lexicon::Lexicon;

/// The engine: one board, one optional lexicon, pure queries.
#[derive(Debug, Default)]
pub struct WordSearchEngine {
    board: Board,
    lexicon: Option<Lexicon>,
}

impl WordSearchEngine {
    /// A fresh engine with the default board and no lexicon.
    #[must_use]
    pub fn new() -> WordSearchEngine {
        WordSearchEngine::default()
    }

    /// Install the dictionary. Building the `Lexicon` from its external
    /// source (file, stream, in-memory list) is the caller's concern; the
    /// engine only requires the resulting ordered set.
    pub fn load_lexicon(&mut self, lexicon: Lexicon) {
        debug!(
            "lexicon installed: {} words, longest {}",
            lexicon.len(),
            lexicon.largest_word_length()
        );
        self.lexicon = Some(lexicon);
    }

    /// Replace the board with a new row-major tile list.
    ///
    /// # Errors
    ///
    /// Input errors from [`Board::from_tiles`] (`EmptyBoard`,
    /// `NonSquareBoard`); on error the previous board is kept.
    pub fn set_board<S: AsRef<str>>(&mut self, tiles: &[S]) -> Result<(), EngineError> {
        self.board = Board::from_tiles(tiles)?;
        Ok(())
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The state precondition shared by every query: a non-empty lexicon.
    fn lexicon(&self) -> Result<&Lexicon, EngineError> {
        self.lexicon
            .as_ref()
            .filter(|lexicon| !lexicon.is_empty())
            .ok_or(EngineError::LexiconNotLoaded)
    }

    /// Exact lexicon membership of `word` (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`EngineError::LexiconNotLoaded`] (state), then
    /// [`EngineError::EmptyWord`] (input).
    pub fn is_valid_word(&self, word: &str) -> Result<bool, EngineError> {
        let lexicon = self.lexicon()?;
        if word.is_empty() {
            return Err(EngineError::EmptyWord);
        }
        Ok(lexicon.contains(word))
    }

    /// Whether at least one lexicon word starts with `prefix`.
    ///
    /// # Errors
    ///
    /// [`EngineError::LexiconNotLoaded`] (state), then
    /// [`EngineError::EmptyWord`] (input).
    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool, EngineError> {
        let lexicon = self.lexicon()?;
        if prefix.is_empty() {
            return Err(EngineError::EmptyWord);
        }
        Ok(lexicon.has_prefix(prefix))
    }

    /// All distinct lexicon words of at least `min_len` characters that can
    /// be traced on the board, in lexicographic order.
    ///
    /// From every cell, a depth-first backtracking traversal extends a
    /// running prefix tile by tile. A branch is abandoned as soon as the
    /// prefix is not a viable start of any lexicon word — this pruning is
    /// what keeps the search tractable. Cells may not repeat within one
    /// traversal; the visited mask is restored on every exit path, so
    /// sibling branches and later roots see a clean board.
    ///
    /// The result depends only on the board, the lexicon, and `min_len`:
    /// calling this twice yields the same set.
    ///
    /// # Errors
    ///
    /// [`EngineError::LexiconNotLoaded`] (state), then
    /// [`EngineError::InvalidMinimumLength`] if `min_len < 1` (input).
    pub fn all_scorable_words(&self, min_len: usize) -> Result<BTreeSet<String>, EngineError> {
        let lexicon = self.lexicon()?;
        if min_len < 1 {
            return Err(EngineError::InvalidMinimumLength { given: min_len });
        }

        // No lexicon word can qualify: skip the board walk entirely.
        if min_len > lexicon.largest_word_length() {
            debug!(
                "minimum length {} exceeds longest lexicon word ({}); returning empty set",
                min_len,
                lexicon.largest_word_length()
            );
            return Ok(BTreeSet::new());
        }

        let found = Enumeration {
            board: &self.board,
            lexicon,
            min_len,
            visited: vec![false; self.board.cell_count()],
            memo: HashMap::new(),
            found: BTreeSet::new(),
        }
        .run();

        debug!(
            "enumerated {} scorable words at minimum length {}",
            found.len(),
            min_len
        );
        Ok(found)
    }

    /// Trace `word` on the board and return its path as linear cell
    /// indices, one per character, or an empty vector if the word cannot be
    /// traced. The word need not be in the lexicon — this is a pure board
    /// query, and the only pruning is "does the next character match".
    ///
    /// Roots are scanned in row-major order and neighbors in the board's
    /// fixed direction order, so the first path found is deterministic.
    ///
    /// # Errors
    ///
    /// [`EngineError::LexiconNotLoaded`] (state), then
    /// [`EngineError::EmptyWord`] (input).
    pub fn is_on_board(&self, word: &str) -> Result<Vec<usize>, EngineError> {
        self.lexicon()?;
        if word.is_empty() {
            return Err(EngineError::EmptyWord);
        }

        let target: Vec<char> = word.to_uppercase().chars().collect();
        let path = Trace {
            board: &self.board,
            target,
            visited: vec![false; self.board.cell_count()],
            path: Vec::new(),
        }
        .run();

        debug!(
            "trace of '{}': {}",
            word,
            if path.is_empty() { "not on board" } else { "found" }
        );
        Ok(path)
    }

    /// Cumulative score of the caller's words at `min_len`.
    ///
    /// The ground truth is [`Self::all_scorable_words`]: each word in
    /// `words` that is a member of that set contributes
    /// `1 + max(0, length - min_len)` points; everything else contributes
    /// zero. The iteration is over the caller's sequence, so a word supplied
    /// twice is counted twice — callers wanting set semantics must
    /// deduplicate before calling.
    ///
    /// # Errors
    ///
    /// [`EngineError::LexiconNotLoaded`] (state), then
    /// [`EngineError::InvalidMinimumLength`] if `min_len < 1` (input).
    pub fn score_words<'a, I>(&self, words: I, min_len: usize) -> Result<u32, EngineError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let scorable = self.all_scorable_words(min_len)?;

        let mut total = 0u32;
        for word in words {
            let word = word.to_uppercase();
            if scorable.contains(&word) {
                total += 1 + word.chars().count().saturating_sub(min_len) as u32;
            }
        }
        Ok(total)
    }
}

/// Transient state for one `all_scorable_words` call.
///
/// The visited mask and memo cache live exactly as long as the call; the
/// cache must not outlive it because the set of prefixes reached depends on
/// `min_len`.
struct Enumeration<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    min_len: usize,
    visited: Vec<bool>,
    /// Fully-built prefix -> lexicon membership, filled on first reach.
    memo: HashMap<String, bool>,
    found: BTreeSet<String>,
}

impl Enumeration<'_> {
    fn run(mut self) -> BTreeSet<String> {
        for row in 0..self.board.size() {
            for col in 0..self.board.size() {
                self.extend(row, col, "", 0);
            }
        }
        self.found
    }

    /// Enter (row, col), extending `prefix` with its tile. `prefix_chars`
    /// carries the character count so multi-character tiles are measured
    /// once. Invariant: the visited bit set on entry is cleared on every
    /// way out.
    fn extend(&mut self, row: usize, col: usize, prefix: &str, prefix_chars: usize) {
        let board = self.board;
        let idx = board.linear_index(row, col);
        if self.visited[idx] {
            return;
        }
        self.visited[idx] = true;

        let tile = board.tile_at(row, col);
        let mut word = String::with_capacity(prefix.len() + tile.len());
        word.push_str(prefix);
        word.push_str(tile);
        let word_chars = prefix_chars + tile.chars().count();

        if word_chars >= self.min_len && self.recall_membership(&word) {
            self.found.insert(word.clone());
        }

        if self.lexicon.has_prefix(&word) {
            for (nr, nc) in board.neighbors(row, col) {
                self.extend(nr, nc, &word, word_chars);
            }
        }

        self.visited[idx] = false;
    }

    /// One containment lookup per distinct qualifying prefix per call;
    /// a string reached again through a different path hits the cache.
    fn recall_membership(&mut self, word: &str) -> bool {
        match self.memo.get(word) {
            Some(&cached) => cached,
            None => {
                let fresh = self.lexicon.contains(word);
                self.memo.insert(word.to_string(), fresh);
                fresh
            }
        }
    }
}

/// Transient state for one `is_on_board` call.
struct Trace<'a> {
    board: &'a Board,
    target: Vec<char>,
    visited: Vec<bool>,
    path: Vec<usize>,
}

impl Trace<'_> {
    fn run(mut self) -> Vec<usize> {
        let board = self.board;
        for row in 0..board.size() {
            for col in 0..board.size() {
                if self.step(row, col, 0) {
                    return self.path;
                }
            }
        }
        Vec::new()
    }

    /// Try to consume `target[pos]` at (row, col). On failure the cell is
    /// unmarked and popped from the path before returning, so the caller
    /// can try the next neighbor.
    fn step(&mut self, row: usize, col: usize, pos: usize) -> bool {
        let board = self.board;
        let idx = board.linear_index(row, col);
        if self.visited[idx] {
            return false;
        }
        if !tile_matches(board.tile_at(row, col), self.target[pos]) {
            return false;
        }

        self.visited[idx] = true;
        self.path.push(idx);

        if pos + 1 == self.target.len() {
            return true;
        }
        for (nr, nc) in board.neighbors(row, col) {
            if self.step(nr, nc, pos + 1) {
                return true;
            }
        }

        self.visited[idx] = false;
        self.path.pop();
        false
    }
}

/// A tile consumes exactly one character of the target, so only
/// single-character tiles can match.
fn tile_matches(tile: &str, ch: char) -> bool {
    let mut chars = tile.chars();
    chars.next() == Some(ch) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    /// 3×3 scenario board:
    /// ```text
    /// C A T
    /// D O G
    /// X X X
    /// ```
    fn scenario_engine() -> WordSearchEngine {
        let mut engine = WordSearchEngine::new();
        engine.load_lexicon(Lexicon::parse_from_str("CAT CAD DOG CATTY"));
        engine
            .set_board(&["C", "A", "T", "D", "O", "G", "X", "X", "X"])
            .unwrap();
        engine
    }

    #[test]
    fn test_scorable_words_on_scenario_board() {
        let engine = scenario_engine();
        let words = engine.all_scorable_words(3).unwrap();

        let expected: Vec<&str> = vec!["CAD", "CAT", "DOG"];
        let found: Vec<&String> = words.iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_enumeration_is_idempotent() {
        let engine = scenario_engine();

        let first = engine.all_scorable_words(3).unwrap();
        let second = engine.all_scorable_words(3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_min_length_filters_short_words() {
        let engine = scenario_engine();
        let words = engine.all_scorable_words(4).unwrap();

        // Nothing of length >= 4 is traceable (CATTY needs two Ts).
        assert!(words.is_empty());
    }

    #[test]
    fn test_fast_path_when_min_exceeds_longest_word() {
        let engine = scenario_engine();

        // Longest lexicon word is CATTY (5).
        assert!(engine.all_scorable_words(6).unwrap().is_empty());
    }

    #[test]
    fn test_trace_returns_a_valid_cat_path() {
        let engine = scenario_engine();
        let path = engine.is_on_board("CAT").unwrap();

        // Any valid path is acceptable; C has one cell, A has one cell,
        // T has one cell, so here the path is fully determined.
        assert_eq!(path, vec![0, 1, 2]);
    }

    #[test]
    fn test_trace_is_case_insensitive() {
        let engine = scenario_engine();

        assert_eq!(engine.is_on_board("cat").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_trace_word_outside_lexicon() {
        let engine = scenario_engine();

        // GOD is not a lexicon word but is traceable; tracing does not
        // consult the lexicon beyond the loaded-state precondition.
        assert_eq!(engine.is_on_board("GOD").unwrap(), vec![5, 4, 3]);
    }

    #[test]
    fn test_trace_miss_returns_empty_path() {
        let engine = scenario_engine();

        assert!(engine.is_on_board("CATTY").unwrap().is_empty());
        assert!(engine.is_on_board("ZZZ").unwrap().is_empty());
    }

    #[test]
    fn test_trace_does_not_revisit_cells() {
        let mut engine = WordSearchEngine::new();
        engine.load_lexicon(Lexicon::parse_from_str("PIP"));
        engine.set_board(&["P", "I", "X", "X"]).unwrap();

        // Only one P on the board: PIP would need it twice.
        assert!(engine.is_on_board("PIP").unwrap().is_empty());
    }

    #[test]
    fn test_multichar_tile_enumeration_and_trace() {
        let mut engine = WordSearchEngine::new();
        engine.load_lexicon(Lexicon::parse_from_str("QUIT"));
        engine.set_board(&["QU", "I", "T", "E"]).unwrap();

        // The QU tile contributes two characters to the running prefix...
        let words = engine.all_scorable_words(4).unwrap();
        assert!(words.contains("QUIT"));

        // ...but tracing consumes one character per cell, so a
        // multi-character tile can never match.
        assert!(engine.is_on_board("QUIT").unwrap().is_empty());
    }

    #[test]
    fn test_score_words_scenario() {
        let engine = scenario_engine();

        let score = engine.score_words(["CAT", "DOG", "ZZZ"], 3).unwrap();
        assert_eq!(score, 2);
    }

    #[test]
    fn test_score_counts_each_occurrence() {
        let engine = scenario_engine();

        // The caller's sequence is not deduplicated.
        let score = engine.score_words(["CAT", "CAT", "DOG"], 3).unwrap();
        assert_eq!(score, 3);
    }

    #[test]
    fn test_queries_before_lexicon_are_state_errors() {
        let engine = WordSearchEngine::new();

        for err in [
            engine.all_scorable_words(3).unwrap_err(),
            engine.is_on_board("CAT").unwrap_err(),
            engine.score_words(["CAT"], 3).unwrap_err(),
            engine.is_valid_word("CAT").unwrap_err(),
            engine.is_valid_prefix("CA").unwrap_err(),
        ] {
            assert!(matches!(err, EngineError::LexiconNotLoaded));
            assert_eq!(err.kind(), ErrorKind::State);
        }
    }

    #[test]
    fn test_state_error_wins_over_input_error() {
        let engine = WordSearchEngine::new();

        // Both preconditions violated: the call-order problem is reported.
        let err = engine.all_scorable_words(0).unwrap_err();
        assert!(matches!(err, EngineError::LexiconNotLoaded));

        let err = engine.is_on_board("").unwrap_err();
        assert!(matches!(err, EngineError::LexiconNotLoaded));
    }

    #[test]
    fn test_input_errors() {
        let engine = scenario_engine();

        let err = engine.all_scorable_words(0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidMinimumLength { given: 0 }));
        assert_eq!(err.kind(), ErrorKind::Input);

        let err = engine.is_on_board("").unwrap_err();
        assert!(matches!(err, EngineError::EmptyWord));

        let err = engine.score_words(["CAT"], 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidMinimumLength { given: 0 }));
    }

    #[test]
    fn test_empty_lexicon_counts_as_not_loaded() {
        let mut engine = WordSearchEngine::new();
        engine.load_lexicon(Lexicon::parse_from_str(""));

        let err = engine.all_scorable_words(3).unwrap_err();
        assert!(matches!(err, EngineError::LexiconNotLoaded));
    }

    #[test]
    fn test_validity_queries() {
        let engine = scenario_engine();

        assert!(engine.is_valid_word("cat").unwrap());
        assert!(!engine.is_valid_word("CA").unwrap());
        assert!(engine.is_valid_prefix("CATT").unwrap());
        assert!(!engine.is_valid_prefix("Q").unwrap());
    }

    #[test]
    fn test_set_board_failure_keeps_previous_board() {
        let mut engine = scenario_engine();

        let err = engine.set_board(&["A", "B", "C"]).unwrap_err();
        assert!(matches!(err, EngineError::NonSquareBoard { count: 3 }));
        // still the 3×3 scenario board
        assert_eq!(engine.board().size(), 3);
        assert_eq!(engine.board().tile_at(0, 0), "C");
    }

    #[test]
    fn test_default_board_is_always_renderable() {
        let engine = WordSearchEngine::new();

        assert_eq!(engine.board().size(), 4);
        assert!(!engine.board().render().is_empty());
    }
}
