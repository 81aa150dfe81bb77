//! Corpus walking and word-frequency counting
//!
//! Features:
//! - Per-file frequency tally with encoding fallback
//! - Accumulation over every .txt file in a corpus directory
//! - Frequency table persistence (Word,Frequency CSV)

use crate::corpus::tokenize;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// One row of the persisted frequency table
#[derive(Debug, Serialize, Deserialize)]
struct FrequencyRow {
    #[serde(rename = "Word")]
    word: String,
    #[serde(rename = "Frequency")]
    frequency: u32,
}

/// Count word frequencies in a single text file
///
/// Files that are not valid UTF-8 are re-read as Latin-1, which covers the
/// older Spanish e-text encodings.
pub fn process_file(path: &Path) -> Result<FxHashMap<String, u32>, Box<dyn Error>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            let bytes = fs::read(path)?;
            bytes.iter().map(|&b| b as char).collect()
        }
        Err(e) => return Err(e.into()),
    };

    let mut counts: FxHashMap<String, u32> = FxHashMap::default();
    for token in tokenize::tokenize(&text) {
        *counts.entry(token).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Count word frequencies across every .txt file in a corpus directory
pub fn process_corpus_dir(dir: &Path) -> Result<FxHashMap<String, u32>, Box<dyn Error>> {
    if !dir.is_dir() {
        return Err(format!("corpus directory '{}' not found", dir.display()).into());
    }

    let mut totals: FxHashMap<String, u32> = FxHashMap::default();
    let mut processed_files = 0;

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "txt").unwrap_or(false))
        .collect();
    paths.sort();

    for path in paths {
        println!("Processing file: {}", path.display());
        let counts = process_file(&path)?;
        for (word, freq) in counts {
            *totals.entry(word).or_insert(0) += freq;
        }
        processed_files += 1;
    }

    println!(
        "Processed {} files with {} unique words.",
        processed_files,
        totals.len()
    );

    Ok(totals)
}

/// Save a frequency tally as a CSV sorted by descending frequency
pub fn save_frequencies(
    frequencies: &FxHashMap<String, u32>,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut rows: Vec<FrequencyRow> = frequencies
        .iter()
        .map(|(word, &frequency)| FrequencyRow {
            word: word.clone(),
            frequency,
        })
        .collect();
    rows.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.word.cmp(&b.word)));

    let mut writer = csv::Writer::from_path(path)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a frequency tally from a Word,Frequency CSV
pub fn load_frequencies(path: &Path) -> Result<FxHashMap<String, u32>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut frequencies = FxHashMap::default();

    for record in reader.deserialize() {
        let row: FrequencyRow = record?;
        frequencies.insert(row.word.to_lowercase(), row.frequency);
    }

    Ok(frequencies)
}

/// The n most frequent words, for the terminal report
pub fn top_words(frequencies: &FxHashMap<String, u32>, n: usize) -> Vec<(String, u32)> {
    let mut rows: Vec<(String, u32)> = frequencies
        .iter()
        .map(|(w, &f)| (w.clone(), f))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    rows.truncate(n);
    rows
}
