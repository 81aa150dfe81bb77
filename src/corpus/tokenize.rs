//! Corpus text normalization and tokenization
//!
//! Handles:
//! - Lowercasing and punctuation stripping
//! - Preserving Spanish letters (á é í ó ú ü ñ)
//! - Splitting into candidate words

/// Normalize raw corpus text: lowercase, keep letters, turn everything
/// else into separators
///
/// Digits, punctuation and symbols become spaces so that "casa,perro"
/// splits cleanly. Accented Spanish letters survive as-is. Lowercasing
/// keeps every character of multi-character expansions.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphabetic() {
            out.extend(c.to_lowercase());
        } else {
            out.push(' ');
        }
    }
    out
}

/// Tokenize normalized text into candidate words
///
/// Single-character tokens are dropped; they are almost always noise
/// (stray letters from stripped abbreviations and the like).
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_stripped() {
        let tokens = tokenize("¡Hola, mundo! ¿Qué tal?");
        assert_eq!(tokens, vec!["hola", "mundo", "qué", "tal"]);
    }

    #[test]
    fn test_accents_preserved() {
        let tokens = tokenize("El niño comió mañana");
        assert_eq!(tokens, vec!["el", "niño", "comió", "mañana"]);
    }

    #[test]
    fn test_single_letters_and_digits_dropped() {
        let tokens = tokenize("a 123 y casa 4x");
        assert_eq!(tokens, vec!["casa"]);
    }

    #[test]
    fn test_uppercase_lowered() {
        let tokens = tokenize("CASA Perro");
        assert_eq!(tokens, vec!["casa", "perro"]);
    }

    #[test]
    fn test_multichar_lowercase_preserved() {
        // Dotted capital I lowercases to two characters; both survive
        assert_eq!(normalize("İstanbul"), "i\u{307}stanbul");
    }
}
