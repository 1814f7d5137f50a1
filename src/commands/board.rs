//! Board and coordinate input parsing for the command line

use crate::core::{Alphabet, Coord, Grid};
use std::fs;
use std::path::Path;

/// Read a board file: one row per line, `.` or space for empty cells
///
/// Empty lines and `#` comments are ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the rows do not form a
/// valid square board of `alphabet` letters.
pub fn load_board<P: AsRef<Path>>(path: P, alphabet: &Alphabet) -> Result<Grid, String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read board {}: {e}", path.display()))?;
    parse_board(&content, alphabet)
}

/// Parse board text: one row per line, `.` or space for empty cells
///
/// Spaces are cells, so rows are taken as written; only empty lines and
/// `#` comments are skipped.
///
/// # Errors
///
/// Returns an error if the rows do not form a valid square board of
/// `alphabet` letters.
pub fn parse_board(content: &str, alphabet: &Alphabet) -> Result<Grid, String> {
    let rows: Vec<&str> = content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    Grid::from_rows_in(&rows, alphabet.clone()).map_err(|e| format!("Invalid board: {e}"))
}

/// Parse `"x,y"` into a coordinate
///
/// # Errors
///
/// Returns an error unless the text is two comma-separated non-negative integers.
///
/// # Examples
/// ```
/// use balda_solver::commands::parse_coord;
/// use balda_solver::core::Coord;
///
/// assert_eq!(parse_coord("2,1"), Ok(Coord::new(2, 1)));
/// assert!(parse_coord("2").is_err());
/// ```
pub fn parse_coord(text: &str) -> Result<Coord, String> {
    let (x, y) = text
        .trim()
        .split_once(',')
        .ok_or_else(|| format!("Expected x,y but got '{text}'"))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("Invalid coordinate '{text}': {e}"))
    };

    Ok(Coord::new(parse(x)?, parse(y)?))
}

/// Parse a whitespace-separated list of `x,y` coordinates
///
/// # Errors
///
/// Returns the first coordinate parse error.
pub fn parse_path(text: &str) -> Result<Vec<Coord>, String> {
    text.split_whitespace().map(parse_coord).collect()
}
