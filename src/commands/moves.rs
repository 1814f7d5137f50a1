//! Move listing command
//!
//! Lists the moves available on a board, longest words first.

use crate::core::{Grid, MoveCandidate};
use crate::solver::MoveGenerator;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of listing moves on a board
pub struct MovesResult {
    pub board: Grid,
    pub candidates: Vec<MoveCandidate>,
    pub patterns: usize,
    pub excluded: Vec<String>,
    pub duration: Duration,
}

/// Generate and rank the available moves on `board`
///
/// Candidates are sorted by word length (longest first), then alphabetically.
pub fn list_moves<R: Rng + ?Sized>(
    generator: &MoveGenerator<'_>,
    board: Grid,
    excluded: Vec<String>,
    rng: &mut R,
) -> MovesResult {
    let start = Instant::now();

    let patterns = generator.patterns(&board).len();
    let mut candidates = generator.available_words(&board, &excluded, rng);
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.word().cmp(b.word())));

    MovesResult {
        board,
        candidates,
        patterns,
        excluded,
        duration: start.elapsed(),
    }
}
