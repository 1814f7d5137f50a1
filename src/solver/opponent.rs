//! Automated opponents
//!
//! Defines the Opponent trait and concrete implementations.

use crate::core::MoveCandidate;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A policy for choosing which available move to play
pub trait Opponent {
    /// Select a move from the available candidates
    ///
    /// Returns `None` if there is nothing to play.
    fn select_move<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [MoveCandidate],
        rng: &mut R,
    ) -> Option<&'a MoveCandidate>;
}

/// Enum wrapper for all opponent types
///
/// Allows runtime selection of the opponent while maintaining static dispatch.
pub enum OpponentType {
    /// Plays the longest word available (default)
    Longest(LongestWord),
    /// Plays any available word
    Random(RandomMove),
}

impl Opponent for OpponentType {
    fn select_move<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [MoveCandidate],
        rng: &mut R,
    ) -> Option<&'a MoveCandidate> {
        match self {
            Self::Longest(o) => o.select_move(candidates, rng),
            Self::Random(o) => o.select_move(candidates, rng),
        }
    }
}

impl OpponentType {
    /// Create opponent from name string
    ///
    /// Supported names: "longest", "greedy", "random".
    /// Defaults to longest if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomMove),
            _ => Self::Longest(LongestWord),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Longest(_) => "longest",
            Self::Random(_) => "random",
        }
    }
}

/// Greedy opponent: a longer word scores more letters
///
/// Ties between equally long words are broken at random.
pub struct LongestWord;

impl Opponent for LongestWord {
    fn select_move<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [MoveCandidate],
        rng: &mut R,
    ) -> Option<&'a MoveCandidate> {
        let longest = candidates.iter().map(MoveCandidate::len).max()?;
        let best: Vec<&MoveCandidate> = candidates.iter().filter(|c| c.len() == longest).collect();
        best.choose(rng).copied()
    }
}

/// Uniformly random opponent
pub struct RandomMove;

impl Opponent for RandomMove {
    fn select_move<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [MoveCandidate],
        rng: &mut R,
    ) -> Option<&'a MoveCandidate> {
        candidates.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn candidate(word: &str) -> MoveCandidate {
        let coords = (0..word.chars().count()).map(|x| Coord::new(x, 0)).collect();
        MoveCandidate::new(word, coords)
    }

    fn setup_candidates() -> Vec<MoveCandidate> {
        vec![candidate("кот"), candidate("крот"), candidate("сон"), candidate("торт")]
    }

    #[test]
    fn longest_picks_a_longest_word() {
        let candidates = setup_candidates();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10 {
            let choice = LongestWord.select_move(&candidates, &mut rng).unwrap();
            assert_eq!(choice.len(), 4);
        }
    }

    #[test]
    fn random_picks_from_candidates() {
        let candidates = setup_candidates();
        let mut rng = StdRng::seed_from_u64(3);

        let choice = RandomMove.select_move(&candidates, &mut rng).unwrap();
        assert!(candidates.contains(choice));
    }

    #[test]
    fn opponents_pass_on_empty_list() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(LongestWord.select_move(&[], &mut rng).is_none());
        assert!(RandomMove.select_move(&[], &mut rng).is_none());
    }

    #[test]
    fn from_name_defaults_to_longest() {
        assert_eq!(OpponentType::from_name("random").name(), "random");
        assert_eq!(OpponentType::from_name("longest").name(), "longest");
        assert_eq!(OpponentType::from_name("greedy").name(), "longest");
        assert_eq!(OpponentType::from_name("???").name(), "longest");
    }

    #[test]
    fn wrapper_dispatches() {
        let candidates = setup_candidates();
        let mut rng = StdRng::seed_from_u64(11);

        let choice = OpponentType::from_name("longest")
            .select_move(&candidates, &mut rng)
            .unwrap();
        assert!(choice.word() == "крот" || choice.word() == "торт");
    }
}
