//! Noun dictionary
//!
//! Words are normalized to lower case and kept sorted twice: forwards for
//! prefix queries and reversed for suffix queries. Both are answered with a
//! binary search instead of a scan.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{NOUNS, NOUNS_COUNT};
pub use vocabulary::Vocabulary;

use crate::core::Alphabet;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Read-only set of valid words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    reversed: Vec<String>,
    members: FxHashSet<String>,
}

/// Sub-slice of a sorted word list whose entries start with `prefix`
pub(crate) fn prefix_range<'a, S: AsRef<str>>(sorted: &'a [S], prefix: &str) -> &'a [S] {
    let start = sorted.partition_point(|w| w.as_ref() < prefix);
    let len = sorted[start..].partition_point(|w| w.as_ref().starts_with(prefix));
    &sorted[start..start + len]
}

/// Canonical form of a word: trimmed and lower-cased
///
/// Dictionary entries, exclusion lists and used-word lists all compare in
/// this form.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

impl Dictionary {
    /// Build a dictionary from raw words
    ///
    /// Entries are trimmed and lower-cased; blanks and duplicates are dropped.
    ///
    /// # Examples
    /// ```
    /// use balda_solver::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::new(["Кот", "сон", "кот", ""]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("КОТ"));
    /// assert!(dict.has_prefix("ко"));
    /// assert!(dict.has_suffix("он"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        let mut reversed: Vec<String> = words.iter().map(|w| reverse(w)).collect();
        reversed.sort_unstable();

        let members = words.iter().cloned().collect();

        Self {
            words,
            reversed,
            members,
        }
    }

    /// The embedded noun list, built on first use and shared for the process lifetime
    pub fn nouns() -> &'static Self {
        static NOUN_DICTIONARY: OnceLock<Dictionary> = OnceLock::new();
        NOUN_DICTIONARY.get_or_init(|| {
            let dictionary = Self::new(NOUNS);
            log::debug!("Loaded {} embedded nouns", dictionary.len());
            dictionary
        })
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

    /// Membership test, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(&word.to_lowercase())
    }

    /// Some word starts with `prefix` (an empty prefix matches any word)
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        !self.with_prefix(prefix).is_empty()
    }

    /// Some word ends with `suffix`
    #[must_use]
    pub fn has_suffix(&self, suffix: &str) -> bool {
        !prefix_range(&self.reversed, &reverse(suffix)).is_empty()
    }

    /// Some single word both starts with `prefix` and ends with `suffix`
    #[must_use]
    pub fn has_prefix_and_suffix(&self, prefix: &str, suffix: &str) -> bool {
        self.with_prefix(prefix)
            .iter()
            .any(|w| w.ends_with(suffix))
    }

    /// All words starting with `prefix`, in sorted order
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> &[String] {
        prefix_range(&self.words, prefix)
    }

    /// Iterate over every word in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Pick a random word with exactly `len` letters (used as the seed word of a round)
    pub fn random_word<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Option<&str> {
        let fitting: Vec<&str> = self.iter().filter(|w| w.chars().count() == len).collect();
        fitting.choose(rng).copied()
    }

    /// Every letter used by some word
    #[must_use]
    pub fn letters(&self) -> Alphabet {
        Alphabet::from_words(self.iter())
    }

    /// Dictionary minus the `excluded` words
    #[must_use]
    pub fn vocabulary<S: AsRef<str>>(&self, excluded: &[S]) -> Vocabulary<'_> {
        Vocabulary::new(self, excluded)
    }
}
