//! Checking a move entered by a human player
//!
//! The player has already written one new letter onto the board and selected
//! a chain of cells. The chain must spell an unused dictionary word through
//! that new letter.

use crate::core::{Coord, Grid, GridError, MoveCandidate};
use crate::dictionary::{Dictionary, normalize};
use std::fmt;

/// Reasons a human move is refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No new letter was entered, or the selection ends on an empty cell
    LetterNotEntered,
    NotAdjacent { from: Coord, to: Coord },
    CellRevisited(Coord),
    EmptyCell(Coord),
    /// The new letter is not part of the selected word
    EnteredLetterUnused(Coord),
    AlreadyUsed(String),
    UnknownWord(String),
    Grid(GridError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LetterNotEntered => write!(f, "Enter a letter and end the word on a filled cell"),
            Self::NotAdjacent { from, to } => {
                write!(f, "Cells {from} and {to} are not adjacent")
            }
            Self::CellRevisited(coord) => write!(f, "Cell {coord} is used twice"),
            Self::EmptyCell(coord) => write!(f, "Cell {coord} has no letter"),
            Self::EnteredLetterUnused(coord) => {
                write!(f, "The word must pass through the new letter at {coord}")
            }
            Self::AlreadyUsed(word) => write!(f, "'{word}' has already been played"),
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the dictionary"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for MoveError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Validate a human move and return it as a candidate
///
/// `entered` is the cell where the new letter was written; `path` is the
/// selected chain in reading order; `used_words` holds every word played so
/// far plus the seed word.
///
/// # Errors
/// Returns the first `MoveError` found, checking the entered letter first,
/// then the path shape, then whether the word was used, then the dictionary.
///
/// # Examples
/// ```
/// use balda_solver::core::{Coord, Grid};
/// use balda_solver::dictionary::Dictionary;
/// use balda_solver::solver::validate_move;
///
/// let grid = Grid::from_rows(&["...", "кот", "..."]).unwrap();
/// let dict = Dictionary::new(["кот", "ток"]);
/// let path = [Coord::new(2, 1), Coord::new(1, 1), Coord::new(0, 1)];
///
/// let played = validate_move(&grid, Some(Coord::new(0, 1)), &path, &dict, &["кот"]).unwrap();
/// assert_eq!(played.word(), "ток");
/// ```
pub fn validate_move<S: AsRef<str>>(
    grid: &Grid,
    entered: Option<Coord>,
    path: &[Coord],
    dictionary: &Dictionary,
    used_words: &[S],
) -> Result<MoveCandidate, MoveError> {
    let entered = entered.ok_or(MoveError::LetterNotEntered)?;
    let last = *path.last().ok_or(MoveError::LetterNotEntered)?;
    if grid.letter(entered)?.is_none() || grid.letter(last)?.is_none() {
        return Err(MoveError::LetterNotEntered);
    }

    let mut word = String::with_capacity(path.len() * 2);
    for (i, &coord) in path.iter().enumerate() {
        let letter = grid.letter(coord)?.ok_or(MoveError::EmptyCell(coord))?;

        if path[..i].contains(&coord) {
            return Err(MoveError::CellRevisited(coord));
        }
        if let Some(&prev) = i.checked_sub(1).map(|p| &path[p])
            && !prev.is_adjacent(coord)
        {
            return Err(MoveError::NotAdjacent {
                from: prev,
                to: coord,
            });
        }

        word.push(letter);
    }

    if !path.contains(&entered) {
        return Err(MoveError::EnteredLetterUnused(entered));
    }

    if used_words
        .iter()
        .any(|used| normalize(used.as_ref()) == word)
    {
        return Err(MoveError::AlreadyUsed(word));
    }

    if !dictionary.contains(&word) {
        return Err(MoveError::UnknownWord(word));
    }

    Ok(MoveCandidate::new(word, path.to_vec()))
}
