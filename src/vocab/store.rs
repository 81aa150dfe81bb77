//! Vocabulary table: entries, construction, and CSV persistence
//!
//! The store is built once per session, from the vocabulary CSV or from a
//! frequency pass, and never mutated afterwards. Regeneration replaces it
//! wholesale.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// One vocabulary word with its character count and corpus frequency
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// The word, lowercase
    #[serde(rename = "Word")]
    pub word: String,
    /// Corpus occurrences
    #[serde(rename = "Count")]
    pub frequency: u32,
    /// Character count of `word`
    #[serde(rename = "length")]
    pub length: usize,
}

impl VocabularyEntry {
    /// Create an entry, deriving the length from the word
    pub fn new(word: String, frequency: u32) -> Self {
        let length = word.chars().count();
        VocabularyEntry {
            word,
            frequency,
            length,
        }
    }
}

/// Immutable-per-session table of vocabulary entries
#[derive(Clone, Debug, Default)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    /// Build a store from entries, de-duplicating by word (last write wins)
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Self {
        let mut by_word: FxHashMap<String, usize> = FxHashMap::default();
        let mut deduped: Vec<VocabularyEntry> = Vec::with_capacity(entries.len());

        for entry in entries {
            match by_word.get(&entry.word) {
                Some(&idx) => deduped[idx] = entry,
                None => {
                    by_word.insert(entry.word.clone(), deduped.len());
                    deduped.push(entry);
                }
            }
        }

        VocabularyStore { entries: deduped }
    }

    /// Derive a vocabulary from a word-frequency tally
    ///
    /// Keeps words occurring strictly more than `min_frequency` times,
    /// ordered by descending frequency then word for deterministic output.
    pub fn from_frequencies(frequencies: &FxHashMap<String, u32>, min_frequency: u32) -> Self {
        let mut entries: Vec<VocabularyEntry> = frequencies
            .iter()
            .filter(|(_, &freq)| freq > min_frequency)
            .map(|(word, &freq)| VocabularyEntry::new(word.clone(), freq))
            .collect();

        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.word.cmp(&b.word)));

        VocabularyStore::from_entries(entries)
    }

    /// Load a store from a vocabulary CSV (columns: Word, Count, length)
    ///
    /// All-or-nothing: any malformed row fails the whole load, so callers
    /// never see a partially constructed store. Words are lowercased; a
    /// word carrying punctuation or digits, or a stored length disagreeing
    /// with the word's character count, is rejected as corrupt.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut entries = Vec::new();

        for record in reader.deserialize() {
            let mut entry: VocabularyEntry = record?;
            entry.word = entry.word.to_lowercase();
            if entry.word.is_empty() || !entry.word.chars().all(char::is_alphabetic) {
                return Err(format!(
                    "corrupt vocabulary row: '{}' is not an alphabetic word",
                    entry.word
                )
                .into());
            }
            if entry.length != entry.word.chars().count() {
                return Err(format!(
                    "corrupt vocabulary row: '{}' has stored length {} but {} characters",
                    entry.word,
                    entry.length,
                    entry.word.chars().count()
                )
                .into());
            }
            entries.push(entry);
        }

        Ok(VocabularyStore::from_entries(entries))
    }

    /// Save the store to a vocabulary CSV (columns: Word, Count, length)
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let mut writer = csv::Writer::from_path(path)?;
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// All entries, in store order
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Number of words in the vocabulary
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary holds no words
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summary statistics over the vocabulary
    pub fn stats(&self) -> Option<VocabularyStats> {
        if self.entries.is_empty() {
            return None;
        }

        let mut min_length = usize::MAX;
        let mut max_length = 0;
        let mut min_frequency = u32::MAX;
        let mut max_frequency = 0;

        for entry in &self.entries {
            min_length = min_length.min(entry.length);
            max_length = max_length.max(entry.length);
            min_frequency = min_frequency.min(entry.frequency);
            max_frequency = max_frequency.max(entry.frequency);
        }

        Some(VocabularyStats {
            total_words: self.entries.len(),
            min_length,
            max_length,
            min_frequency,
            max_frequency,
        })
    }
}

/// Vocabulary summary printed after generation and at viewer startup
#[derive(Clone, Copy, Debug)]
pub struct VocabularyStats {
    pub total_words: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub min_frequency: u32,
    pub max_frequency: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_length_derived_from_chars() {
        let entry = VocabularyEntry::new("añejo".to_string(), 5);
        assert_eq!(entry.length, 5);
    }

    #[test]
    fn test_dedup_last_write_wins() {
        let store = VocabularyStore::from_entries(vec![
            VocabularyEntry::new("casa".to_string(), 10),
            VocabularyEntry::new("gato".to_string(), 8),
            VocabularyEntry::new("casa".to_string(), 99),
        ]);

        assert_eq!(store.len(), 2);
        let casa = store.entries().iter().find(|e| e.word == "casa").unwrap();
        assert_eq!(casa.frequency, 99);
    }

    #[test]
    fn test_from_frequencies_threshold_is_strict() {
        let mut freqs = FxHashMap::default();
        freqs.insert("casa".to_string(), 4);
        freqs.insert("gato".to_string(), 3);
        freqs.insert("sol".to_string(), 2);

        let store = VocabularyStore::from_frequencies(&freqs, 3);
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].word, "casa");
    }

    #[test]
    fn test_from_frequencies_ordering_deterministic() {
        let mut freqs = FxHashMap::default();
        freqs.insert("gato".to_string(), 7);
        freqs.insert("casa".to_string(), 7);
        freqs.insert("perro".to_string(), 9);

        let store = VocabularyStore::from_frequencies(&freqs, 0);
        let words: Vec<&str> = store.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["perro", "casa", "gato"]);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.csv");

        let store = VocabularyStore::from_entries(vec![
            VocabularyEntry::new("casa".to_string(), 12),
            VocabularyEntry::new("perro".to_string(), 7),
        ]);
        store.save(&path).unwrap();

        let loaded = VocabularyStore::load(&path).unwrap();
        assert_eq!(loaded.entries(), store.entries());
    }

    #[test]
    fn test_load_rejects_corrupt_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.csv");
        std::fs::write(&path, "Word,Count,length\ncasa,12,9\n").unwrap();

        assert!(VocabularyStore::load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_non_alphabetic_word() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.csv");
        // Length column is consistent, but the word carries punctuation
        std::fs::write(&path, "Word,Count,length\nca-sa,5,5\n").unwrap();
        assert!(VocabularyStore::load(&path).is_err());

        std::fs::write(&path, "Word,Count,length\ncasa2,5,5\n").unwrap();
        assert!(VocabularyStore::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(VocabularyStore::load(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn test_stats() {
        let store = VocabularyStore::from_entries(vec![
            VocabularyEntry::new("casa".to_string(), 12),
            VocabularyEntry::new("trabajar".to_string(), 7),
        ]);

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_words, 2);
        assert_eq!(stats.min_length, 4);
        assert_eq!(stats.max_length, 8);
        assert_eq!(stats.min_frequency, 7);
        assert_eq!(stats.max_frequency, 12);

        assert!(VocabularyStore::default().stats().is_none());
    }
}
