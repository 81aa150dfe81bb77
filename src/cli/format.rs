//! Display formatting for selection results
//!
//! Turns a MatchResult plus the current display options into the string the
//! terminal renders. Hyphenation failures are recovered here: the plain
//! word is shown and a warning goes to stderr.

use crate::cli::syllable::Syllabify;
use crate::engine::MatchResult;

/// Rendered in place of a word when the filters match nothing
pub const NO_MATCH_PLACEHOLDER: &str = "no words";

/// Case transformation applied to the displayed word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseMode {
    Lower,
    Upper,
    Title,
}

impl CaseMode {
    /// The next mode in the cycle lower → UPPER → Title → lower
    pub fn next(self) -> Self {
        match self {
            CaseMode::Lower => CaseMode::Upper,
            CaseMode::Upper => CaseMode::Title,
            CaseMode::Title => CaseMode::Lower,
        }
    }

    /// Label shown in the status line
    pub fn label(self) -> &'static str {
        match self {
            CaseMode::Lower => "lower",
            CaseMode::Upper => "UPPER",
            CaseMode::Title => "Title",
        }
    }
}

/// Produce the display string for a selection result
///
/// No-match renders the fixed placeholder regardless of options. Otherwise
/// hyphenation runs first (falling back to the plain word on failure), then
/// the case transform is applied to the possibly hyphenated string.
pub fn format_word(
    result: &MatchResult,
    case_mode: CaseMode,
    hyphenate: bool,
    syllabifier: &dyn Syllabify,
) -> String {
    let word = match result {
        MatchResult::NoMatch => return NO_MATCH_PLACEHOLDER.to_string(),
        MatchResult::Word(word) => word,
    };

    let mut display = word.clone();
    if hyphenate {
        match syllabifier.syllabify(word) {
            Ok(syllables) => display = syllables.join("-"),
            Err(e) => eprintln!("⚠ Could not hyphenate word '{}': {}", word, e),
        }
    }

    match case_mode {
        CaseMode::Lower => display.to_lowercase(),
        CaseMode::Upper => display.to_uppercase(),
        CaseMode::Title => title_case(&display),
    }
}

/// Capitalize the first letter of every alphabetic run
///
/// "ca-sa" becomes "Ca-Sa", so each syllable of a hyphenated word gets its
/// own capital.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::syllable::SpanishSyllabifier;
    use std::error::Error;

    /// Syllabifier that always fails, for exercising the fallback path
    struct Broken;

    impl Syllabify for Broken {
        fn syllabify(&self, word: &str) -> Result<Vec<String>, Box<dyn Error>> {
            Err(format!("no syllables for '{}'", word).into())
        }
    }

    #[test]
    fn test_no_match_placeholder_ignores_options() {
        let syl = SpanishSyllabifier::new();
        for case in [CaseMode::Lower, CaseMode::Upper, CaseMode::Title] {
            for hyphenate in [false, true] {
                assert_eq!(
                    format_word(&MatchResult::NoMatch, case, hyphenate, &syl),
                    NO_MATCH_PLACEHOLDER
                );
            }
        }
    }

    #[test]
    fn test_case_modes() {
        let syl = SpanishSyllabifier::new();
        let result = MatchResult::Word("casa".to_string());

        assert_eq!(format_word(&result, CaseMode::Lower, false, &syl), "casa");
        assert_eq!(format_word(&result, CaseMode::Upper, false, &syl), "CASA");
        assert_eq!(format_word(&result, CaseMode::Title, false, &syl), "Casa");
    }

    #[test]
    fn test_hyphenation_before_case() {
        let syl = SpanishSyllabifier::new();
        let result = MatchResult::Word("casa".to_string());

        assert_eq!(format_word(&result, CaseMode::Lower, true, &syl), "ca-sa");
        assert_eq!(format_word(&result, CaseMode::Upper, true, &syl), "CA-SA");
        // Title capitalizes each syllable of the hyphenated string
        assert_eq!(format_word(&result, CaseMode::Title, true, &syl), "Ca-Sa");
    }

    #[test]
    fn test_hyphenation_failure_falls_back() {
        let result = MatchResult::Word("casa".to_string());
        assert_eq!(format_word(&result, CaseMode::Lower, true, &Broken), "casa");
    }

    #[test]
    fn test_case_mode_cycle() {
        assert_eq!(CaseMode::Lower.next(), CaseMode::Upper);
        assert_eq!(CaseMode::Upper.next(), CaseMode::Title);
        assert_eq!(CaseMode::Title.next(), CaseMode::Lower);
    }
}
