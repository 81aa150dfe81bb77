//! Spanish syllable splitting
//!
//! Features:
//! - Rule-based syllabification (onset maximization, diphthong/hiato aware)
//! - Digraph handling (ch, ll, rr kept whole)
//! - Trait boundary so the display formatter can swap implementations

use std::error::Error;

/// Syllable-splitting service consumed by the display formatter
pub trait Syllabify {
    /// Split a word into syllables, left to right
    fn syllabify(&self, word: &str) -> Result<Vec<String>, Box<dyn Error>>;
}

/// Rule-based syllabifier for Spanish words
///
/// Good enough for display hyphenation; linguistic accuracy is not a goal.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpanishSyllabifier;

impl SpanishSyllabifier {
    pub fn new() -> Self {
        SpanishSyllabifier
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
    )
}

/// Vowels that break a vowel pair into two syllables (hiato). Accented
/// weak vowels (í, ú) count as open here.
fn is_open_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'o' | 'á' | 'é' | 'ó' | 'í' | 'ú')
}

/// Two adjacent vowels form separate nuclei only when both are open
fn is_hiato(a: char, b: char) -> bool {
    is_open_vowel(a) && is_open_vowel(b)
}

/// Consonant pairs that stay together as a syllable onset
fn is_inseparable(first: &str, second: &str) -> bool {
    let lead = match first {
        s if s.chars().count() == 1 => s.chars().next().unwrap_or(' '),
        _ => return false, // digraphs never lead a cluster
    };
    matches!(second, "l" | "r") && matches!(lead, 'b' | 'c' | 'd' | 'f' | 'g' | 'k' | 'p' | 't')
        && !(lead == 'd' && second == "l")
}

/// Split a lowercase word into consonant/vowel units, merging the
/// inseparable digraphs ch, ll and rr
fn segment(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut units = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let digraph = matches!(
            (c, next),
            ('c', Some('h')) | ('l', Some('l')) | ('r', Some('r'))
        );
        if digraph {
            units.push(chars[i..i + 2].iter().collect());
            i += 2;
        } else {
            units.push(c.to_string());
            i += 1;
        }
    }

    units
}

fn is_vowel_unit(unit: &str) -> bool {
    unit.chars().count() == 1 && unit.chars().next().map(is_vowel).unwrap_or(false)
}

impl Syllabify for SpanishSyllabifier {
    fn syllabify(&self, word: &str) -> Result<Vec<String>, Box<dyn Error>> {
        let lowered = word.to_lowercase();
        if lowered.is_empty() || !lowered.chars().all(char::is_alphabetic) {
            return Err(format!("cannot syllabify '{}': not an alphabetic word", word).into());
        }

        let units = segment(&lowered);
        if !units.iter().any(|u| is_vowel_unit(u)) {
            return Err(format!("cannot syllabify '{}': no vowel nucleus", word).into());
        }

        let mut syllables = Vec::new();
        let mut current = String::new();
        let mut i = 0;

        while i < units.len() {
            if !is_vowel_unit(&units[i]) {
                // Onset consonants accumulate until the next nucleus
                current.push_str(&units[i]);
                i += 1;
                continue;
            }

            // Consume the nucleus: adjacent vowels stay together unless
            // they form a hiato
            let mut prev = units[i].chars().next().unwrap_or(' ');
            current.push_str(&units[i]);
            i += 1;
            while i < units.len() && is_vowel_unit(&units[i]) {
                let v = units[i].chars().next().unwrap_or(' ');
                if is_hiato(prev, v) {
                    break;
                }
                current.push_str(&units[i]);
                prev = v;
                i += 1;
            }

            // Count the consonant run up to the next nucleus
            let mut j = i;
            while j < units.len() && !is_vowel_unit(&units[j]) {
                j += 1;
            }
            let run = j - i;

            if j == units.len() {
                // Word-final consonants close this syllable
                while i < units.len() {
                    current.push_str(&units[i]);
                    i += 1;
                }
            } else if run >= 1 {
                // Onset maximization: the last consonant (or inseparable
                // pair) opens the next syllable, the rest close this one
                let keep = if run >= 2 && is_inseparable(&units[j - 2], &units[j - 1]) {
                    run - 2
                } else {
                    run.saturating_sub(1)
                };
                for _ in 0..keep {
                    current.push_str(&units[i]);
                    i += 1;
                }
            }

            syllables.push(std::mem::take(&mut current));
        }

        if !current.is_empty() {
            syllables.push(current);
        }

        Ok(syllables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(word: &str) -> Vec<String> {
        SpanishSyllabifier::new().syllabify(word).unwrap()
    }

    #[test]
    fn test_simple_cv_pattern() {
        assert_eq!(syl("casa"), vec!["ca", "sa"]);
        assert_eq!(syl("mañana"), vec!["ma", "ña", "na"]);
    }

    #[test]
    fn test_digraphs_stay_whole() {
        assert_eq!(syl("perro"), vec!["pe", "rro"]);
        assert_eq!(syl("calle"), vec!["ca", "lle"]);
        assert_eq!(syl("noche"), vec!["no", "che"]);
    }

    #[test]
    fn test_inseparable_clusters() {
        assert_eq!(syl("trabajar"), vec!["tra", "ba", "jar"]);
        assert_eq!(syl("maestro"), vec!["ma", "es", "tro"]);
    }

    #[test]
    fn test_diphthong_and_hiato() {
        assert_eq!(syl("escuela"), vec!["es", "cue", "la"]);
        // a-e is a hiato, the vowels split
        assert_eq!(syl("caer"), vec!["ca", "er"]);
    }

    #[test]
    fn test_long_consonant_run() {
        assert_eq!(syl("construir"), vec!["cons", "truir"]);
    }

    #[test]
    fn test_rejects_vowelless_input() {
        assert!(SpanishSyllabifier::new().syllabify("pss").is_err());
        assert!(SpanishSyllabifier::new().syllabify("").is_err());
        assert!(SpanishSyllabifier::new().syllabify("ca-sa").is_err());
    }
}
