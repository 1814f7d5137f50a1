//! Formatting utilities for terminal output

use crate::core::{Coord, Grid};
use colored::Colorize;

/// Mark used for empty cells when printing a board
pub const EMPTY_MARK: char = '·';

/// Render `grid` with coordinate rulers
///
/// Cells on `path` are highlighted in order, and `entered` (the newly placed
/// letter, if any) is shown in a distinct color.
#[must_use]
pub fn render_board(grid: &Grid, path: &[Coord], entered: Option<Coord>) -> String {
    let size = grid.size();
    let mut out = String::new();

    out.push_str("    ");
    for x in 0..size {
        out.push_str(&format!("{x:<2}"));
    }
    out.push('\n');

    for y in 0..size {
        out.push_str(&format!("{:>2}  ", y.to_string().bright_black()));
        for x in 0..size {
            let coord = Coord::new(x, y);
            let letter = grid.letter(coord).ok().flatten();
            let text = letter.map_or(EMPTY_MARK, |c| c).to_string();

            let cell = if entered == Some(coord) {
                text.black().on_bright_yellow().bold()
            } else if path.contains(&coord) {
                text.bright_green().bold()
            } else if letter.is_some() {
                text.normal()
            } else {
                text.bright_black()
            };
            out.push_str(&format!("{cell} "));
        }
        out.push('\n');
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    // Cast is safe: clamped to [0, width]
    let filled = ((ratio * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `total`, zero when `total` is zero
#[must_use]
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Word with its length, e.g. `"балда (5)"`
#[must_use]
pub fn word_with_length(word: &str) -> String {
    format!("{word} ({})", word.chars().count())
}
