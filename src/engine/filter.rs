//! Filter state and vocabulary filtering
//!
//! Maintains:
//! - Allowed starting-letter set (subset of a-z)
//! - Word length range (min/max, clamped to configured bounds)
//! - The single match predicate shared by filtering and re-validation

use crate::vocab::{VocabularyEntry, VocabularyStore};
use std::collections::HashSet;

/// Smallest selectable word length
pub const MIN_WORD_LENGTH: usize = 4;

/// Largest selectable word length
pub const MAX_WORD_LENGTH: usize = 8;

/// Letters active when a session starts (common Spanish starter set)
const DEFAULT_LETTERS: &str = "aeiouscl";

/// Current letter/length selection criteria
#[derive(Clone, Debug)]
pub struct FilterState {
    /// Letters a word may consist of (lowercase a-z)
    allowed_letters: HashSet<char>,
    /// Minimum word length (inclusive)
    min_length: usize,
    /// Maximum word length (inclusive)
    max_length: usize,
}

impl FilterState {
    /// Create filter state with the default letter set and full length range
    pub fn new() -> Self {
        FilterState {
            allowed_letters: DEFAULT_LETTERS.chars().collect(),
            min_length: MIN_WORD_LENGTH,
            max_length: MAX_WORD_LENGTH,
        }
    }

    /// Flip membership of a letter in the allowed set
    ///
    /// Only lowercase a-z participate; anything else is ignored. An empty
    /// resulting set is legal here and handled by `filter`.
    pub fn toggle_letter(&mut self, c: char) {
        if !c.is_ascii_lowercase() {
            return;
        }
        if !self.allowed_letters.remove(&c) {
            self.allowed_letters.insert(c);
        }
    }

    /// Check whether a letter is currently allowed
    pub fn is_letter_allowed(&self, c: char) -> bool {
        self.allowed_letters.contains(&c)
    }

    /// Set the minimum length, clamped to the configured bounds
    ///
    /// Does not force `min <= max`; a crossed range simply matches nothing.
    pub fn set_min_length(&mut self, v: usize) {
        self.min_length = v.clamp(MIN_WORD_LENGTH, MAX_WORD_LENGTH);
    }

    /// Set the maximum length, clamped to the configured bounds
    pub fn set_max_length(&mut self, v: usize) {
        self.max_length = v.clamp(MIN_WORD_LENGTH, MAX_WORD_LENGTH);
    }

    /// Current minimum length
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Current maximum length
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// The match predicate: does a word of the given length satisfy this state?
    ///
    /// This is the single source of truth for matching, used both by `filter`
    /// and by the post-selection re-validation in `select_word`. Rules:
    /// - length must fall within [min_length, max_length]
    /// - every character of the word (lowercased) must be in the allowed set,
    ///   i.e. the word's character set is a subset of the allowed letters
    /// - an empty allowed set matches nothing
    ///
    /// Accented characters (ñ, á, ...) are distinct symbols: they are never
    /// in the allowed set, so words containing them do not match.
    pub fn matches(&self, word: &str, length: usize) -> bool {
        if self.allowed_letters.is_empty() {
            return false;
        }
        if length < self.min_length || length > self.max_length {
            return false;
        }
        word.chars()
            .flat_map(|c| c.to_lowercase())
            .all(|c| self.allowed_letters.contains(&c))
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter the vocabulary down to entries matching the current state
///
/// Pure and deterministic: unchanged inputs yield the same subset, in store
/// order. The empty allowed set is an explicit early return rather than a
/// vacuous subset check.
pub fn filter<'a>(store: &'a VocabularyStore, state: &FilterState) -> Vec<&'a VocabularyEntry> {
    if state.allowed_letters.is_empty() {
        return Vec::new();
    }

    store
        .entries()
        .iter()
        .filter(|e| state.matches(&e.word, e.length))
        .collect()
}
