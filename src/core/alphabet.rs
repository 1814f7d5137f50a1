//! Board alphabet: the letters a player may enter into an empty cell

use crate::constants::{RUSSIAN_ALPHABET, UKRAINIAN_ALPHABET};
use rustc_hash::FxHashSet;

/// Set of lower-case letters allowed on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: FxHashSet<char>,
}

impl Alphabet {
    /// Build an alphabet from a string of letters (case-insensitive)
    #[must_use]
    pub fn new(letters: &str) -> Self {
        Self {
            letters: letters.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    #[must_use]
    pub fn russian() -> Self {
        Self::new(RUSSIAN_ALPHABET)
    }

    #[must_use]
    pub fn ukrainian() -> Self {
        Self::new(UKRAINIAN_ALPHABET)
    }

    /// Every letter used by `words`
    ///
    /// # Examples
    /// ```
    /// use balda_solver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::from_words(["кіт", "Сир"]);
    /// assert_eq!(alphabet.len(), 6);
    /// assert!(alphabet.contains('і'));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let letters = words
            .into_iter()
            .flat_map(|word| word.as_ref().chars().collect::<Vec<_>>())
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        Self { letters }
    }

    /// Letters of `other` missing from this alphabet, sorted
    #[must_use]
    pub fn missing_from(&self, other: &Self) -> Vec<char> {
        let mut missing: Vec<char> = other
            .letters
            .iter()
            .copied()
            .filter(|c| !self.letters.contains(c))
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Check membership, ignoring case
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        letter
            .to_lowercase()
            .all(|lower| self.letters.contains(&lower))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::russian()
    }
}
