//! Corpus Processing: text ingestion and word-frequency counting
//!
//! # Components
//! - `tokenize.rs`: normalization and tokenization of raw Spanish text
//! - `processor.rs`: corpus walking, frequency tally, frequency table CSV

pub mod processor;
pub mod tokenize;

pub use processor::{
    load_frequencies, process_corpus_dir, process_file, save_frequencies, top_words,
};
