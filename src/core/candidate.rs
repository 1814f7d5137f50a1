//! Concrete playable moves

use super::coord::Coord;
use super::grid::Grid;
use std::fmt;

/// A dictionary word paired with the board cells it would occupy
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    word: String,
    coords: Vec<Coord>,
}

impl MoveCandidate {
    #[must_use]
    pub fn new(word: impl Into<String>, coords: Vec<Coord>) -> Self {
        let word = word.into();
        debug_assert_eq!(word.chars().count(), coords.len());
        Self { word, coords }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The new letter this move writes onto `grid`, and where
    ///
    /// Returns `None` unless exactly one path cell is empty on `grid`.
    #[must_use]
    pub fn placement(&self, grid: &Grid) -> Option<(Coord, char)> {
        let mut empty = self
            .coords
            .iter()
            .zip(self.word.chars())
            .filter(|&(&coord, _)| matches!(grid.letter(coord), Ok(None)));

        let (&coord, letter) = empty.next()?;
        empty.next().is_none().then_some((coord, letter))
    }
}

impl fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)?;
        for (i, coord) in self.coords.iter().enumerate() {
            let sep = if i == 0 { " " } else { "→" };
            write!(f, "{sep}{coord}")?;
        }
        Ok(())
    }
}
