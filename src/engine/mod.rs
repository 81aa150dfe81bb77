//! Filtering Engine: filter state, matching, and word selection
//!
//! # Components
//! - `filter.rs`: FilterState, the shared match predicate, and filter()
//! - `select.rs`: uniform selection with re-validation and bounded retry

pub mod filter;
pub mod select;

pub use filter::{filter, FilterState, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
pub use select::{select_word, MatchResult};
