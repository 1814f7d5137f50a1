//! Balda move generation
//!
//! Template search, pattern matching and the move generator that combines
//! them, plus the consumers of its output: automated opponents and human
//! move validation.

pub mod builder;
mod engine;
pub mod matcher;
pub mod opponent;
mod validate;

pub use builder::{SearchOutcome, TemplateBuilder, build_templates, is_plausible};
pub use engine::{MoveGenerator, available_words};
pub use matcher::{PatternMatcher, matching_words, select_candidate};
pub use opponent::{LongestWord, Opponent, OpponentType, RandomMove};
pub use validate::{MoveError, validate_move};
