//! FlashVocab - Spanish vocabulary flashcards in the terminal
//!
//! Two subcommands: `generate` turns a corpus of Spanish text into a
//! frequency table and a vocabulary CSV; `run` loads the vocabulary and
//! drives an interactive single-word viewer with live letter/length
//! filtering, case transformation, and syllable hyphenation.

mod cli;
mod corpus;
mod engine;
mod vocab;

use clap::{Parser, Subcommand};
use cli::{format_word, CaseMode, Display, InputHandler, SpanishSyllabifier, ViewerEvent};
use engine::{filter, select_word, FilterState};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use vocab::VocabularyStore;

#[derive(Parser, Debug)]
#[command(name = "flashvocab")]
#[command(about = "Spanish vocabulary flashcards with live letter/length filtering")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process corpus files and generate vocabulary data
    Generate {
        /// Directory containing text files to process
        #[arg(long, default_value = "corpus")]
        corpus_dir: PathBuf,

        /// Directory for saving processed data
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Minimum word frequency for inclusion in the vocabulary
        #[arg(long, default_value_t = 3)]
        min_frequency: u32,

        /// Print the N most frequent words after processing
        #[arg(long)]
        top: Option<usize>,

        /// Force reprocessing even if data files exist
        #[arg(long)]
        force: bool,
    },

    /// Launch the flashcard viewer
    Run {
        /// Directory containing processed data
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Vocabulary file to use, relative to the data directory
        #[arg(long, default_value = "vocabulary.csv")]
        vocabulary: String,

        /// Corpus directory, used if the vocabulary must be regenerated
        #[arg(long, default_value = "corpus")]
        corpus_dir: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Command::Generate {
            corpus_dir,
            data_dir,
            min_frequency,
            top,
            force,
        } => command_generate(&corpus_dir, &data_dir, min_frequency, top, force),
        Command::Run {
            data_dir,
            vocabulary,
            corpus_dir,
        } => command_run(&data_dir, &vocabulary, &corpus_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Corpus → frequency table → vocabulary table
fn command_generate(
    corpus_dir: &Path,
    data_dir: &Path,
    min_frequency: u32,
    top: Option<usize>,
    force: bool,
) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(data_dir)?;

    let freq_path = data_dir.join("word_frequencies.csv");
    let vocab_path = data_dir.join("vocabulary.csv");

    if !force && freq_path.exists() && vocab_path.exists() {
        println!("Data files already exist. Use --force to regenerate.");
        let store = VocabularyStore::load(&vocab_path)?;
        print_stats(&store);
        if let Some(n) = top {
            let frequencies = corpus::load_frequencies(&freq_path)?;
            print_top_words(&frequencies, n);
        }
        return Ok(());
    }

    println!("Processing corpus files...");
    let frequencies = corpus::process_corpus_dir(corpus_dir)?;
    if frequencies.is_empty() {
        return Err("no words processed from corpus files".into());
    }

    corpus::save_frequencies(&frequencies, &freq_path)?;
    println!("✓ Word frequencies saved to {}", freq_path.display());

    let store = VocabularyStore::from_frequencies(&frequencies, min_frequency);
    if store.is_empty() {
        return Err(format!(
            "no vocabulary created (no word occurs more than {} times)",
            min_frequency
        )
        .into());
    }

    store.save(&vocab_path)?;
    println!("✓ Vocabulary saved to {}", vocab_path.display());

    print_stats(&store);
    if let Some(n) = top {
        print_top_words(&frequencies, n);
    }

    Ok(())
}

/// Load (or regenerate) the vocabulary and launch the viewer
fn command_run(data_dir: &Path, vocabulary: &str, corpus_dir: &Path) -> Result<(), Box<dyn Error>> {
    let vocab_path = data_dir.join(vocabulary);

    let store = if vocab_path.exists() {
        println!("Loading vocabulary from {}...", vocab_path.display());
        VocabularyStore::load(&vocab_path)?
    } else {
        println!("Vocabulary file not found. Generating new vocabulary...");
        fs::create_dir_all(data_dir)?;

        let freq_path = data_dir.join("word_frequencies.csv");
        let frequencies = match corpus::load_frequencies(&freq_path) {
            Ok(frequencies) => frequencies,
            Err(_) => {
                println!("Processing corpus files...");
                let frequencies = corpus::process_corpus_dir(corpus_dir)?;
                corpus::save_frequencies(&frequencies, &freq_path)?;
                frequencies
            }
        };

        let store = VocabularyStore::from_frequencies(&frequencies, 3);
        if store.is_empty() {
            return Err("could not create vocabulary from corpus".into());
        }
        store.save(&vocab_path)?;
        store
    };

    if store.is_empty() {
        return Err("no vocabulary words available, check your corpus and data files".into());
    }
    print_stats(&store);

    run_viewer(&store)
}

/// Interactive flashcard loop
///
/// Single-threaded: each key event mutates the filter state, re-runs
/// selection, and redraws before the next event is read.
fn run_viewer(store: &VocabularyStore) -> Result<(), Box<dyn Error>> {
    let mut state = FilterState::new();
    let mut case_mode = CaseMode::Lower;
    let mut hyphenate = false;
    let syllabifier = SpanishSyllabifier::new();
    let mut rng = rand::thread_rng();

    let display = Display::new()?;
    InputHandler::enable_raw_mode()?;
    let input = InputHandler::new();

    let mut current = select_word(store, &state, &mut rng);
    redraw(
        &display,
        store,
        &state,
        &current,
        case_mode,
        hyphenate,
        &syllabifier,
    )?;

    loop {
        let key = match input.read_key()? {
            Some(key) => key,
            None => continue,
        };
        let event = match InputHandler::translate(&key) {
            Some(event) => event,
            None => continue,
        };

        match event {
            ViewerEvent::Quit => break,
            ViewerEvent::ToggleLetter(c) => state.toggle_letter(c),
            ViewerEvent::DecreaseMin => {
                state.set_min_length(state.min_length().saturating_sub(1))
            }
            ViewerEvent::IncreaseMin => state.set_min_length(state.min_length() + 1),
            ViewerEvent::DecreaseMax => {
                state.set_max_length(state.max_length().saturating_sub(1))
            }
            ViewerEvent::IncreaseMax => state.set_max_length(state.max_length() + 1),
            ViewerEvent::CycleCase => case_mode = case_mode.next(),
            ViewerEvent::ToggleHyphenation => hyphenate = !hyphenate,
            ViewerEvent::NextWord => {}
        }

        // Filter changes and next-word re-run selection so the displayed
        // word always satisfies the filters in effect right now; case and
        // hyphenation events only reformat the current word
        if event.requests_selection() {
            current = select_word(store, &state, &mut rng);
        }
        redraw(
            &display,
            store,
            &state,
            &current,
            case_mode,
            hyphenate,
            &syllabifier,
        )?;
    }

    InputHandler::disable_raw_mode()?;
    display.shutdown()?;
    println!("\nFlashVocab session ended.");

    Ok(())
}

fn redraw(
    display: &Display,
    store: &VocabularyStore,
    state: &FilterState,
    current: &engine::MatchResult,
    case_mode: CaseMode,
    hyphenate: bool,
    syllabifier: &SpanishSyllabifier,
) -> Result<(), Box<dyn Error>> {
    let matching_words = filter(store, state).len();
    let text = format_word(current, case_mode, hyphenate, syllabifier);

    display.clear()?;
    display.show_word(&text)?;
    display.show_letters(state)?;
    display.show_status(state, case_mode, hyphenate, matching_words)?;
    display.show_help()?;
    Ok(())
}

fn print_stats(store: &VocabularyStore) {
    if let Some(stats) = store.stats() {
        println!("✓ Vocabulary: {} words", stats.total_words);
        println!(
            "  Length range: {}-{} letters | Frequency range: {}-{} occurrences",
            stats.min_length, stats.max_length, stats.min_frequency, stats.max_frequency
        );
    }
}

fn print_top_words(frequencies: &rustc_hash::FxHashMap<String, u32>, n: usize) {
    println!("Top {} words:", n);
    for (word, frequency) in corpus::top_words(frequencies, n) {
        println!("  {:<16} {}", word, frequency);
    }
}
