//! Word selection with post-draw re-validation
//!
//! Draws uniformly from the filtered subset, then re-checks the candidate
//! against the current filter state before handing it to the display. The
//! double check keeps the contract honest if selection ever moves off the
//! event-handling thread.

use crate::engine::filter::{self, FilterState};
use crate::vocab::VocabularyStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Re-draw attempts before giving up on a validated word
const MAX_ATTEMPTS: usize = 10;

/// Outcome of a selection: a concrete word or an explicit no-match
///
/// No-match is a first-class result. It is never papered over by widening
/// the filter or falling back to the unfiltered vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// A word satisfying the filter state at selection time
    Word(String),
    /// The current filters match nothing
    NoMatch,
}

/// Select a word matching the current filter state
///
/// Algorithm:
/// 1. Filter the store down to the matching subset.
/// 2. Empty subset: return `NoMatch` immediately.
/// 3. Draw one entry uniformly at random.
/// 4. Re-validate the candidate against the state via the shared predicate.
/// 5. On validation failure, retry from step 1 up to `MAX_ATTEMPTS` times.
/// 6. All attempts exhausted: `NoMatch`.
pub fn select_word<R: Rng>(
    store: &VocabularyStore,
    state: &FilterState,
    rng: &mut R,
) -> MatchResult {
    for _ in 0..MAX_ATTEMPTS {
        let subset = filter::filter(store, state);
        if subset.is_empty() {
            return MatchResult::NoMatch;
        }

        // Uniform draw; frequency is tracked but never used as a weight
        let candidate = match subset.choose(rng) {
            Some(entry) => entry,
            None => return MatchResult::NoMatch,
        };

        if state.matches(&candidate.word, candidate.length) {
            return MatchResult::Word(candidate.word.clone());
        }
    }

    MatchResult::NoMatch
}
