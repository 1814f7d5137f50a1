//! Main move generation interface

use super::builder::TemplateBuilder;
use super::matcher::{PatternMatcher, select_candidate};
use crate::core::{Alphabet, Grid, MoveCandidate, Template};
use crate::dictionary::Dictionary;
use log::{debug, warn};
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

/// Move generator
///
/// Coordinates template search and pattern matching for one dictionary.
pub struct MoveGenerator<'a> {
    dictionary: &'a Dictionary,
    alphabet: Alphabet,
}

impl<'a> MoveGenerator<'a> {
    /// Create a generator over `dictionary` with the Russian board alphabet
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_alphabet(dictionary, Alphabet::default())
    }

    #[must_use]
    pub const fn with_alphabet(dictionary: &'a Dictionary, alphabet: Alphabet) -> Self {
        Self {
            dictionary,
            alphabet,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Letters a placeholder may take
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Dictionary letters outside the board alphabet
    ///
    /// A word needing one of these letters in its placeholder is never
    /// offered, so a non-empty result usually means the wrong alphabet.
    #[must_use]
    pub fn unplayable_letters(&self) -> Vec<char> {
        self.alphabet.missing_from(&self.dictionary.letters())
    }

    /// Templates on `grid` grouped by pattern, in pattern order
    #[must_use]
    pub fn templates_by_pattern(&self, grid: &Grid) -> BTreeMap<String, Vec<Template>> {
        let mut groups: BTreeMap<String, Vec<Template>> = BTreeMap::new();
        for template in TemplateBuilder::new(grid, self.dictionary).build() {
            groups
                .entry(template.letters().to_string())
                .or_default()
                .push(template);
        }
        groups
    }

    /// Distinct template patterns on `grid`
    ///
    /// Fixed for a given board and dictionary, unlike the randomly chosen
    /// words returned by [`MoveGenerator::available_words`].
    #[must_use]
    pub fn patterns(&self, grid: &Grid) -> BTreeSet<String> {
        self.templates_by_pattern(grid).into_keys().collect()
    }

    /// One playable move per pattern that some unused word fits
    ///
    /// `excluded` holds the words already played this game plus the seed word.
    /// Where several words fit a pattern, or several paths spell it, one of
    /// each is chosen at random from `rng`.
    pub fn available_words<S, R>(
        &self,
        grid: &Grid,
        excluded: &[S],
        rng: &mut R,
    ) -> Vec<MoveCandidate>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let groups = self.templates_by_pattern(grid);
        let vocabulary = self.dictionary.vocabulary(excluded);

        let candidates: Vec<MoveCandidate> = groups
            .iter()
            .filter_map(|(pattern, templates)| {
                let Some(matcher) = PatternMatcher::new(pattern, &self.alphabet) else {
                    warn!("Skipping malformed template pattern {pattern:?}");
                    return None;
                };
                select_candidate(templates, &matcher, &vocabulary, &mut *rng)
            })
            .collect();

        debug!(
            "{} patterns, {} vocabulary words, {} candidate moves",
            groups.len(),
            vocabulary.len(),
            candidates.len()
        );
        candidates
    }
}

/// Available moves on `grid` using the embedded noun dictionary and thread-local randomness
///
/// # Examples
/// ```
/// use balda_solver::core::Grid;
/// use balda_solver::solver::available_words;
///
/// let grid = Grid::with_initial_word(5, "балда").unwrap();
/// for candidate in available_words(&grid, &["балда"]) {
///     assert_ne!(candidate.word(), "балда");
/// }
/// ```
#[must_use]
pub fn available_words<S: AsRef<str>>(grid: &Grid, excluded: &[S]) -> Vec<MoveCandidate> {
    MoveGenerator::new(Dictionary::nouns()).available_words(grid, excluded, &mut rand::rng())
}
