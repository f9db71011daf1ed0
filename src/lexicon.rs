//! `lexicon` — Module to load and preprocess the dictionary for the word-search engine
//!
//! This module is responsible for turning a raw word source (a file, or an
//! in-memory string) into a `Lexicon`: an ordered collection of distinct
//! uppercase words.
//!
//! The parsing logic:
//! - The input is split on whitespace, one token per word.
//! - Every token is normalized to uppercase.
//! - Duplicates collapse (set semantics).
//!
//! The ordered representation matters: membership and prefix-viability
//! queries are answered with `BTreeSet` range lookups in O(log n), never by
//! re-scanning the whole collection. The maximum word length is tracked as a
//! derived maximum at insertion time — the lexicographically last word is
//! not necessarily the longest, so `largest_word_length` must not rely on
//! sort order.
//!
//! The public API provides:
//! - `parse_from_str(...)` / `from_words(...)` — work on any in-memory source.
//! - `load_from_path(...)` — convenience method to read from a file path;
//!   read failures surface as [`EngineError::LexiconSource`] rather than
//!   being swallowed.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::ops::Bound::{Included, Unbounded};

use crate::errors::EngineError;

/// Struct representing a processed, ready-to-query dictionary.
///
/// Once built, a `Lexicon` is read-only: every engine query borrows it
/// immutably, so it can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Distinct uppercase words in lexicographic order.
    /// Example: `{"CAD", "CAT", "DOG"}`
    words: BTreeSet<String>,
    /// Length (in characters) of the longest word ever inserted.
    max_word_len: usize,
}

impl Lexicon {
    /// Build a lexicon from any sequence of words.
    ///
    /// Each word is uppercased before insertion; duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::default();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Parse a raw word list from an in-memory string.
    ///
    /// The input is split on whitespace (spaces, tabs, newlines), so both
    /// one-word-per-line files and space-separated lists are accepted.
    ///
    /// # Example
    /// ```
    /// use wordtrail::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::parse_from_str("cat dog\nCAT mouse");
    /// assert_eq!(lexicon.len(), 3);
    /// assert!(lexicon.contains("Cat"));
    /// ```
    pub fn parse_from_str(contents: &str) -> Lexicon {
        Self::from_words(contents.split_whitespace())
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::LexiconSource`] if the file at `path` cannot
    /// be read. The path and the underlying I/O error are both preserved so
    /// the caller can tell a missing file from a permissions problem.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Lexicon, EngineError> {
        let path_ref = path.as_ref();

        let data =
            std::fs::read_to_string(path_ref).map_err(|e| EngineError::LexiconSource {
                path: path_ref.display().to_string(),
                source: e,
            })?;

        Ok(Self::parse_from_str(&data))
    }

    fn insert(&mut self, word: &str) {
        let word = word.to_uppercase();
        self.max_word_len = self.max_word_len.max(word.chars().count());
        self.words.insert(word);
    }

    /// Exact membership test, case-insensitive: `word` is uppercased before
    /// the O(log n) lookup.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Prefix-viability test: true iff some word starts with exactly
    /// `prefix` (a word is a prefix of itself).
    ///
    /// This is the pruning oracle for the enumerator, so it must stay
    /// O(log n): we look up the ordered successor of `prefix` and check
    /// whether it starts with the prefix, instead of scanning.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_uppercase();
        self.words
            .range::<str, _>((Included(prefix.as_str()), Unbounded))
            .next()
            .is_some_and(|word| word.starts_with(&prefix))
    }

    /// Length (in characters) of the longest word in the lexicon.
    ///
    /// Tracked at insertion time; 0 for an empty lexicon. Used by the
    /// enumerator to skip the board search entirely when the requested
    /// minimum length exceeds every word.
    #[must_use]
    pub fn largest_word_length(&self) -> usize {
        self.max_word_len
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words have been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in lexicographic order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
