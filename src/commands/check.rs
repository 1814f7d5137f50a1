//! Move checking command
//!
//! Validates a move entered by a human player.

use crate::core::{Coord, Grid, MoveCandidate};
use crate::dictionary::Dictionary;
use crate::solver::{MoveError, validate_move};

/// Configuration for checking a move
pub struct CheckConfig {
    pub entered: Option<Coord>,
    pub path: Vec<Coord>,
    pub used_words: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(entered: Option<Coord>, path: Vec<Coord>) -> Self {
        Self {
            entered,
            path,
            used_words: Vec::new(),
        }
    }
}

/// Result of checking a move
pub struct CheckResult {
    pub board: Grid,
    /// Letters along the selected path, `.` for empty cells
    pub spelled: String,
    pub outcome: Result<MoveCandidate, MoveError>,
}

/// Check the move described by `config` on `board`
#[must_use]
pub fn check_move(dictionary: &Dictionary, board: Grid, config: &CheckConfig) -> CheckResult {
    let spelled: String = config
        .path
        .iter()
        .map(|&coord| board.letter(coord).ok().flatten().unwrap_or('.'))
        .collect();

    let outcome = validate_move(
        &board,
        config.entered,
        &config.path,
        dictionary,
        &config.used_words,
    );
    log::debug!("Checked {spelled:?}: {outcome:?}");

    CheckResult {
        board,
        spelled,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Grid {
        Grid::from_rows(&["...", "кот", "..т"]).unwrap()
    }

    #[test]
    fn rejected_moves() {
        let dict = Dictionary::new(["кот", "тот"]);
        let mut config = CheckConfig::new(
            Some(Coord::new(2, 2)),
            vec![Coord::new(2, 2), Coord::new(1, 1), Coord::new(2, 1)],
        );
        // (2,2) and (1,1) are diagonal: rejected
        let result = check_move(&dict, board(), &config);
        assert!(matches!(result.outcome, Err(MoveError::NotAdjacent { .. })));

        config.path = vec![Coord::new(2, 2), Coord::new(2, 1)];
        let result = check_move(&dict, board(), &config);
        assert_eq!(result.spelled, "тт");
        assert!(matches!(result.outcome, Err(MoveError::UnknownWord(_))));
    }

    #[test]
    fn used_words_respected() {
        let dict = Dictionary::new(["кот", "ток"]);
        let mut config = CheckConfig::new(
            Some(Coord::new(2, 1)),
            vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
        );

        let result = check_move(&dict, board(), &config);
        assert_eq!(result.outcome.as_ref().map(MoveCandidate::word), Ok("кот"));

        config.used_words.push("кот".to_string());
        let result = check_move(&dict, board(), &config);
        assert_eq!(result.outcome, Err(MoveError::AlreadyUsed("кот".to_string())));
    }

    #[test]
    fn spelled_marks_empty_cells() {
        let dict = Dictionary::new(["кот"]);
        let config = CheckConfig::new(None, vec![Coord::new(0, 0), Coord::new(0, 1)]);

        let result = check_move(&dict, board(), &config);
        assert_eq!(result.spelled, ".к");
        assert_eq!(result.outcome, Err(MoveError::LetterNotEntered));
    }
}
