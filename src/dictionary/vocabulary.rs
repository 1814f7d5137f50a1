//! Playable vocabulary: the dictionary minus words already used this game

use super::{Dictionary, normalize, prefix_range};
use rustc_hash::FxHashSet;

/// Sorted view of the words still available for play
#[derive(Debug, Clone)]
pub struct Vocabulary<'a> {
    words: Vec<&'a str>,
}

impl<'a> Vocabulary<'a> {
    /// Build from a dictionary, dropping `excluded` words (compared in lower case)
    #[must_use]
    pub fn new<S: AsRef<str>>(dictionary: &'a Dictionary, excluded: &[S]) -> Self {
        let excluded: FxHashSet<String> = excluded
            .iter()
            .map(|w| normalize(w.as_ref()))
            .collect();

        let words = dictionary
            .iter()
            .filter(|w| !excluded.contains(*w))
            .collect();

        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search(&word).is_ok()
    }

    /// Words starting with `prefix`, in sorted order
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> &[&'a str] {
        prefix_range(&self.words, prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.words.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_words_removed() {
        let dict = Dictionary::new(["кот", "рот", "сон"]);
        let vocab = dict.vocabulary(&["КОТ", "слон"]);

        assert_eq!(vocab.len(), 2);
        assert!(!vocab.contains("кот"));
        assert!(vocab.contains("рот"));
        assert!(vocab.contains("сон"));
    }

    #[test]
    fn no_exclusions_keeps_everything() {
        let dict = Dictionary::new(["кот", "рот", "сон"]);
        let vocab = dict.vocabulary::<&str>(&[]);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["кот", "рот", "сон"]);
    }

    #[test]
    fn prefix_lookup_on_remaining_words() {
        let dict = Dictionary::new(["кот", "кол", "кит", "рот"]);
        let vocab = dict.vocabulary(&["кол"]);
        assert_eq!(vocab.with_prefix("ко"), &["кот"]);
        assert_eq!(vocab.with_prefix("к"), &["кит", "кот"]);
        assert!(vocab.with_prefix("я").is_empty());
    }
}
