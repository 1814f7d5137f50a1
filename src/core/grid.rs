//! Square letter board
//!
//! The board is stored as a flat row-major vector of cells. Each cell keeps its
//! neighbor coordinates, resolved once when the board is created.

use super::alphabet::Alphabet;
use super::coord::{Coord, Direction};
use std::fmt;

/// Characters accepted as "no letter" when parsing a board from text
const EMPTY_MARKERS: [char; 4] = ['.', '-', '_', ' '];

/// A single board square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    letter: Option<char>,
    links: [Option<Coord>; 4],
}

impl Cell {
    fn new(coord: Coord, size: usize) -> Self {
        let links = Direction::ALL.map(|dir| coord.step(dir, size));
        Self {
            coord,
            letter: None,
            links,
        }
    }

    #[inline]
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Neighbor in `direction`, if it lies on the board
    #[inline]
    #[must_use]
    pub const fn neighbor(&self, direction: Direction) -> Option<Coord> {
        self.links[direction.index()]
    }

    /// All on-board neighbors
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> + '_ {
        self.links.iter().flatten().copied()
    }
}

/// Errors raised by board construction and lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidSize(usize),
    OutOfRange { coord: Coord, size: usize },
    RowLength { row: usize, expected: usize, found: usize },
    InvalidLetter(char),
    CellOccupied(Coord),
    WordLength { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => write!(f, "Board size must be positive, got {size}"),
            Self::OutOfRange { coord, size } => {
                write!(f, "Coordinate {coord} is outside the {size}x{size} board")
            }
            Self::RowLength {
                row,
                expected,
                found,
            } => write!(f, "Row {row} must have {expected} cells, got {found}"),
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not in the board alphabet"),
            Self::CellOccupied(coord) => write!(f, "Cell {coord} already holds a letter"),
            Self::WordLength { expected, found } => {
                write!(f, "Seed word must be {expected} letters, got {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An NxN board of cells
///
/// Only letters of the board alphabet may be written; the default alphabet is
/// Russian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    alphabet: Alphabet,
}

impl Grid {
    /// Create an empty board of side `size`
    ///
    /// # Errors
    /// Returns `GridError::InvalidSize` if `size` is zero.
    pub fn new(size: usize) -> Result<Self, GridError> {
        Self::with_alphabet(size, Alphabet::default())
    }

    /// Create an empty board of side `size` accepting letters of `alphabet`
    ///
    /// # Errors
    /// Returns `GridError::InvalidSize` if `size` is zero.
    pub fn with_alphabet(size: usize, alphabet: Alphabet) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }

        let cells = (0..size * size)
            .map(|i| Cell::new(Coord::new(i % size, i / size), size))
            .collect();

        Ok(Self {
            size,
            cells,
            alphabet,
        })
    }

    /// Parse a board from text rows
    ///
    /// Letters are lower-cased; `.`, `-`, `_` and space mark empty cells.
    ///
    /// # Errors
    /// Returns `GridError` if the rows do not form a square or contain
    /// characters that are neither alphabet letters nor empty markers.
    ///
    /// # Examples
    /// ```
    /// use balda_solver::core::{Coord, Grid};
    ///
    /// let grid = Grid::from_rows(&["...", "КОТ", "..."]).unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.letter(Coord::new(1, 1)).unwrap(), Some('о'));
    /// assert_eq!(grid.letter(Coord::new(0, 0)).unwrap(), None);
    /// assert!(grid.letter(Coord::new(3, 0)).is_err());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        Self::from_rows_in(rows, Alphabet::default())
    }

    /// Parse a board from text rows, accepting letters of `alphabet`
    ///
    /// # Errors
    /// Same as [`Grid::from_rows`].
    pub fn from_rows_in<S: AsRef<str>>(rows: &[S], alphabet: Alphabet) -> Result<Self, GridError> {
        let mut grid = Self::with_alphabet(rows.len(), alphabet)?;
        let size = grid.size;

        for (y, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.as_ref().chars().collect();
            if chars.len() != size {
                return Err(GridError::RowLength {
                    row: y,
                    expected: size,
                    found: chars.len(),
                });
            }

            for (x, ch) in chars.into_iter().enumerate() {
                if EMPTY_MARKERS.contains(&ch) {
                    continue;
                }
                grid.place(Coord::new(x, y), ch)?;
            }
        }

        Ok(grid)
    }

    /// Create a board with `word` written across the middle row
    ///
    /// # Errors
    /// Returns `GridError::WordLength` if the word does not span the board exactly.
    pub fn with_initial_word(size: usize, word: &str) -> Result<Self, GridError> {
        Self::with_initial_word_in(size, word, Alphabet::default())
    }

    /// Create a board with `word` across the middle row, accepting letters of `alphabet`
    ///
    /// # Errors
    /// Same as [`Grid::with_initial_word`], plus `GridError::InvalidLetter`
    /// for a seed letter outside `alphabet`.
    pub fn with_initial_word_in(
        size: usize,
        word: &str,
        alphabet: Alphabet,
    ) -> Result<Self, GridError> {
        let mut grid = Self::with_alphabet(size, alphabet)?;
        let letters: Vec<char> = word.chars().collect();
        if letters.len() != size {
            return Err(GridError::WordLength {
                expected: size,
                found: letters.len(),
            });
        }

        let row = size / 2;
        for (x, ch) in letters.into_iter().enumerate() {
            grid.place(Coord::new(x, row), ch)?;
        }

        Ok(grid)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Letters that may be written on this board
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// All cells in row-major order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major position of `coord` in [`Grid::cells`]
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` for coordinates off the board.
    pub fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if coord.in_bounds(self.size) {
            Ok(coord.y * self.size + coord.x)
        } else {
            Err(GridError::OutOfRange {
                coord,
                size: self.size,
            })
        }
    }

    /// Look up a cell
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` for coordinates off the board.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, GridError> {
        let index = self.index(coord)?;
        Ok(&self.cells[index])
    }

    /// Letter at `coord`; `Ok(None)` is a valid empty cell
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` for coordinates off the board.
    pub fn letter(&self, coord: Coord) -> Result<Option<char>, GridError> {
        self.cell(coord).map(Cell::letter)
    }

    /// On-board neighbors of `coord`
    ///
    /// # Errors
    /// Returns `GridError::OutOfRange` for coordinates off the board.
    pub fn neighbors(&self, coord: Coord) -> Result<impl Iterator<Item = Coord> + '_, GridError> {
        self.cell(coord).map(Cell::neighbors)
    }

    /// Write a letter into an empty cell
    ///
    /// # Errors
    /// Returns `GridError` if the coordinate is off the board, the cell is
    /// already filled, or `letter` is not in the board alphabet.
    pub fn place(&mut self, coord: Coord, letter: char) -> Result<(), GridError> {
        if !self.alphabet.contains(letter) {
            return Err(GridError::InvalidLetter(letter));
        }

        let index = self.index(coord)?;
        let cell = &mut self.cells[index];
        if cell.letter.is_some() {
            return Err(GridError::CellOccupied(coord));
        }

        cell.letter = letter.to_lowercase().next();
        Ok(())
    }

    /// True once every cell holds a letter (the game is over)
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells still without a letter
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Check that `path` is non-empty, stays on the board, moves between
    /// adjacent cells and never revisits a cell
    #[must_use]
    pub fn is_simple_path(&self, path: &[Coord]) -> bool {
        if path.is_empty() || path.iter().any(|c| !c.in_bounds(self.size)) {
            return false;
        }

        let connected = path.windows(2).all(|pair| pair[0].is_adjacent(pair[1]));
        let unique = path
            .iter()
            .enumerate()
            .all(|(i, coord)| !path[..i].contains(coord));

        connected && unique
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|c| c.letter.unwrap_or('.')).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
