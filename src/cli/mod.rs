//! CLI Interface: user input, terminal rendering, and display formatting
//!
//! # Components
//! - `input.rs`: keystroke capture and viewer events, using crossterm
//! - `display.rs`: terminal rendering and UI
//! - `format.rs`: case transform + hyphenation of selection results
//! - `syllable.rs`: rule-based Spanish syllabifier behind a trait

pub mod display;
pub mod format;
pub mod input;
pub mod syllable;

pub use display::Display;
pub use format::{format_word, CaseMode};
pub use input::{InputHandler, ViewerEvent};
pub use syllable::{SpanishSyllabifier, Syllabify};
