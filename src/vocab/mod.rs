//! Vocabulary Store: the per-session word table
//!
//! # Components
//! - `store.rs`: VocabularyEntry/VocabularyStore, CSV load/save, stats

pub mod store;

pub use store::{VocabularyEntry, VocabularyStats, VocabularyStore};
