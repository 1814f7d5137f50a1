//! Pattern matching and candidate selection
//!
//! A pattern such as `"ко*"` accepts words of the same length that start
//! with the text before the placeholder, end with the text after it, and
//! hold a single alphabet letter in between. This is the anchored match
//! `^ко[а-я]$` without compiling a regex per pattern.

use crate::constants::PLACEHOLDER;
use crate::core::{Alphabet, MoveCandidate, Template};
use crate::dictionary::Vocabulary;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::borrow::Cow;

/// Predicate over words built from one template pattern
#[derive(Debug, Clone)]
pub struct PatternMatcher<'a> {
    prefix: String,
    suffix: String,
    len: usize,
    alphabet: &'a Alphabet,
}

impl<'a> PatternMatcher<'a> {
    /// Build a matcher from a pattern with exactly one placeholder
    ///
    /// Returns `None` for patterns with no placeholder or more than one.
    ///
    /// # Examples
    /// ```
    /// use balda_solver::core::Alphabet;
    /// use balda_solver::solver::PatternMatcher;
    ///
    /// let alphabet = Alphabet::russian();
    /// let matcher = PatternMatcher::new("ко*", &alphabet).unwrap();
    /// assert!(matcher.matches("кот"));
    /// assert!(!matcher.matches("кошка"));
    /// assert!(PatternMatcher::new("кот", &alphabet).is_none());
    /// ```
    #[must_use]
    pub fn new(pattern: &str, alphabet: &'a Alphabet) -> Option<Self> {
        let pattern = pattern.to_lowercase();
        let (prefix, suffix) = pattern.split_once(PLACEHOLDER)?;
        if suffix.contains(PLACEHOLDER) {
            return None;
        }

        Some(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            len: pattern.chars().count(),
            alphabet,
        })
    }

    /// Text before the placeholder
    #[inline]
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text after the placeholder
    #[inline]
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Pattern length in characters, placeholder included
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: a matcher covers at least the placeholder
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Case-insensitive full-word match
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let word: Cow<'_, str> = if word.chars().any(char::is_uppercase) {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        };

        if word.chars().count() != self.len {
            return false;
        }

        let slot = word
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_suffix(self.suffix.as_str()));

        let mut letters = slot.unwrap_or_default().chars();
        matches!(
            (letters.next(), letters.next()),
            (Some(letter), None) if self.alphabet.contains(letter)
        )
    }
}

/// Vocabulary words accepted by `matcher`, in sorted order
#[must_use]
pub fn matching_words<'v>(matcher: &PatternMatcher<'_>, vocabulary: &Vocabulary<'v>) -> Vec<&'v str> {
    vocabulary
        .with_prefix(matcher.prefix())
        .iter()
        .copied()
        .filter(|word| matcher.matches(word))
        .collect()
}

/// Pick a word for a pattern and a path to spell it on
///
/// The word is drawn uniformly from the matching vocabulary; the path is drawn
/// independently and uniformly from the templates sharing the pattern.
/// Returns `None` when no vocabulary word fits.
pub fn select_candidate<R: Rng + ?Sized>(
    templates: &[Template],
    matcher: &PatternMatcher<'_>,
    vocabulary: &Vocabulary<'_>,
    rng: &mut R,
) -> Option<MoveCandidate> {
    let words = matching_words(matcher, vocabulary);
    let word = words.choose(rng)?;
    let template = templates.choose(rng)?;

    Some(MoveCandidate::new(*word, template.coords().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
    use crate::dictionary::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn matcher<'a>(pattern: &str, alphabet: &'a Alphabet) -> PatternMatcher<'a> {
        PatternMatcher::new(pattern, alphabet).unwrap()
    }

    #[test]
    fn splits_pattern_on_placeholder() {
        let alphabet = Alphabet::russian();
        let m = matcher("к*т", &alphabet);
        assert_eq!(m.prefix(), "к");
        assert_eq!(m.suffix(), "т");
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn prefix_pattern_enforces_length() {
        let alphabet = Alphabet::russian();
        let m = matcher("пе*", &alphabet);
        let vocabulary = ["пес", "сир", "плов"];
        let accepted: Vec<&str> = vocabulary.into_iter().filter(|w| m.matches(w)).collect();
        assert_eq!(accepted, vec!["пес"]);

        // Two-letter pattern rejects every three- and four-letter word
        let short = matcher("п*", &alphabet);
        assert!(vocabulary.iter().all(|w| !short.matches(w)));
    }

    #[test]
    fn suffix_pattern() {
        let alphabet = Alphabet::russian();
        let m = matcher("*от", &alphabet);
        assert!(m.matches("кот"));
        assert!(m.matches("рот"));
        assert!(!m.matches("крот"));
        assert!(!m.matches("от"));
        assert!(!m.matches("кон"));
    }

    #[test]
    fn middle_placeholder() {
        let alphabet = Alphabet::russian();
        let m = matcher("к*т", &alphabet);
        assert!(m.matches("кот"));
        assert!(m.matches("кит"));
        assert!(!m.matches("кто"));
    }

    #[test]
    fn slot_must_be_alphabet_letter() {
        let alphabet = Alphabet::russian();
        let m = matcher("к*т", &alphabet);
        assert!(!m.matches("kzт"));
        assert!(!m.matches("к-т"));
        assert!(!m.matches("к*т"));
    }

    #[test]
    fn matching_ignores_case() {
        let alphabet = Alphabet::russian();
        assert!(matcher("К*Т", &alphabet).matches("кот"));
        assert!(matcher("к*т", &alphabet).matches("КОТ"));
    }

    #[test]
    fn malformed_patterns_rejected() {
        let alphabet = Alphabet::russian();
        assert!(PatternMatcher::new("кот", &alphabet).is_none());
        assert!(PatternMatcher::new("к**", &alphabet).is_none());
        assert!(PatternMatcher::new("*о*", &alphabet).is_none());
    }

    #[test]
    fn matching_words_uses_vocabulary() {
        let alphabet = Alphabet::russian();
        let dict = Dictionary::new(["кот", "кит", "кол", "рот"]);
        let vocab = dict.vocabulary(&["кит"]);

        let words = matching_words(&matcher("к*т", &alphabet), &vocab);
        assert_eq!(words, vec!["кот"]);

        let words = matching_words(&matcher("*от", &alphabet), &vocab);
        assert_eq!(words, vec!["кот", "рот"]);
    }

    #[test]
    fn select_candidate_combines_word_and_path() {
        let alphabet = Alphabet::russian();
        let dict = Dictionary::new(["кот", "кит", "рот"]);
        let vocab = dict.vocabulary::<&str>(&[]);
        let paths = [
            vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
            vec![Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
        ];
        let templates: Vec<Template> = paths
            .iter()
            .map(|path| {
                Template::new()
                    .extended(Some('к'), path[0])
                    .extended(None, path[1])
                    .extended(Some('т'), path[2])
            })
            .collect();
        let m = matcher("к*т", &alphabet);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let candidate = select_candidate(&templates, &m, &vocab, &mut rng).unwrap();
            assert!(["кот", "кит"].contains(&candidate.word()));
            assert!(paths.iter().any(|p| p.as_slice() == candidate.coords()));
        }
    }

    #[test]
    fn select_candidate_reaches_every_option() {
        let alphabet = Alphabet::russian();
        let dict = Dictionary::new(["кот", "кит"]);
        let vocab = dict.vocabulary::<&str>(&[]);
        let template = Template::new()
            .extended(Some('к'), Coord::new(0, 0))
            .extended(None, Coord::new(1, 0))
            .extended(Some('т'), Coord::new(2, 0));
        let m = matcher("к*т", &alphabet);

        let mut rng = StdRng::seed_from_u64(1);
        let words: std::collections::BTreeSet<String> = (0..64)
            .filter_map(|_| select_candidate(std::slice::from_ref(&template), &m, &vocab, &mut rng))
            .map(|c| c.word().to_string())
            .collect();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn select_candidate_none_without_matches() {
        let alphabet = Alphabet::russian();
        let dict = Dictionary::new(["сон"]);
        let vocab = dict.vocabulary::<&str>(&[]);
        let template = Template::new()
            .extended(Some('к'), Coord::new(0, 0))
            .extended(None, Coord::new(1, 0));
        let m = matcher("к*", &alphabet);

        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_candidate(&[template], &m, &vocab, &mut rng).is_none());
    }
}
