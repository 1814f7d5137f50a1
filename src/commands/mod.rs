//! Command implementations

pub mod board;
pub mod check;
pub mod moves;
pub mod selfplay;

pub use board::{load_board, parse_board, parse_coord, parse_path};
pub use check::{CheckConfig, CheckResult, check_move};
pub use moves::{MovesResult, list_moves};
pub use selfplay::{GameRecord, SelfPlayConfig, SelfPlayResult, play_game, run_selfplay};
