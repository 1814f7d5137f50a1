//! Self-play command
//!
//! Two automated opponents play full games from random seed words. Used to
//! exercise the move generator on realistic boards and measure its speed.

use crate::constants::FIELD_SIZE;
use crate::core::Grid;
use crate::solver::{MoveGenerator, Opponent, OpponentType};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::Rng;
use std::time::{Duration, Instant};

/// Consecutive passes (one per player) that end a game early
const PASSES_TO_END: usize = 2;

/// Configuration for a self-play run
pub struct SelfPlayConfig {
    pub games: usize,
    pub size: usize,
    pub show_progress: bool,
}

impl SelfPlayConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            size: FIELD_SIZE,
            show_progress: false,
        }
    }
}

/// Outcome of a single game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub seed_word: String,
    pub words: Vec<String>,
    /// Letters scored by each player (one point per letter of a played word)
    pub letters: [usize; 2],
    pub filled: bool,
    pub board: Grid,
}

impl GameRecord {
    /// Index of the winning player, or `None` on a draw
    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        match self.letters[0].cmp(&self.letters[1]) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Aggregate result of a self-play run
pub struct SelfPlayResult {
    pub games: Vec<GameRecord>,
    pub wins: [usize; 2],
    pub draws: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub generator_calls: usize,
    pub duration: Duration,
    pub calls_per_second: f64,
}

/// Play one game between `players`, first player moving first
///
/// # Errors
///
/// Returns an error if the dictionary has no seed word of the board size or
/// a generated move cannot be applied to the board.
pub fn play_game<R: Rng + ?Sized>(
    generator: &MoveGenerator<'_>,
    players: &[OpponentType; 2],
    size: usize,
    rng: &mut R,
) -> Result<(GameRecord, usize), String> {
    let seed_word = generator
        .dictionary()
        .random_word(size, rng)
        .ok_or_else(|| format!("Dictionary has no {size}-letter seed word"))?
        .to_string();
    let mut board = Grid::with_initial_word_in(size, &seed_word, generator.alphabet().clone())
        .map_err(|e| e.to_string())?;

    let mut used = vec![seed_word.clone()];
    let mut letters = [0usize; 2];
    let mut passes = 0;
    let mut calls = 0;
    let mut turn = 0;

    while !board.is_filled() && passes < PASSES_TO_END {
        let player = turn % 2;
        let candidates = generator.available_words(&board, &used, rng);
        calls += 1;

        match players[player].select_move(&candidates, rng) {
            Some(chosen) => {
                let (coord, letter) = chosen
                    .placement(&board)
                    .ok_or_else(|| format!("Move {chosen} does not add exactly one letter"))?;
                board.place(coord, letter).map_err(|e| e.to_string())?;

                debug!("Player {} plays {chosen}", player + 1);
                letters[player] += chosen.len();
                used.push(chosen.word().to_string());
                passes = 0;
            }
            None => {
                debug!("Player {} passes", player + 1);
                passes += 1;
            }
        }
        turn += 1;
    }

    let record = GameRecord {
        seed_word,
        words: used.split_off(1),
        letters,
        filled: board.is_filled(),
        board,
    };
    Ok((record, calls))
}

/// Run `config.games` games between `players`
///
/// # Errors
///
/// Returns the first error raised by [`play_game`].
pub fn run_selfplay<R: Rng + ?Sized>(
    generator: &MoveGenerator<'_>,
    players: &[OpponentType; 2],
    config: &SelfPlayConfig,
    rng: &mut R,
) -> Result<SelfPlayResult, String> {
    info!(
        "Self-play: {} games on {}x{} boards, {} vs {}",
        config.games,
        config.size,
        config.size,
        players[0].name(),
        players[1].name()
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut games = Vec::with_capacity(config.games);
    let mut generator_calls = 0;

    for _ in 0..config.games {
        let (record, calls) = play_game(generator, players, config.size, rng)?;
        generator_calls += calls;
        pb.set_message(format!("{} ({} words)", record.seed_word, record.words.len()));
        pb.inc(1);
        games.push(record);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let mut wins = [0usize; 2];
    let mut draws = 0;
    for game in &games {
        match game.winner() {
            Some(player) => wins[player] += 1,
            None => draws += 1,
        }
    }

    let total_words: usize = games.iter().map(|g| g.words.len()).sum();
    let average_words = if games.is_empty() {
        0.0
    } else {
        total_words as f64 / games.len() as f64
    };

    Ok(SelfPlayResult {
        games,
        wins,
        draws,
        total_words,
        average_words,
        generator_calls,
        duration,
        calls_per_second: generator_calls as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
