//! Balda Solver
//!
//! Move generation for the Balda word game: on a square board of letters,
//! find every word that can be spelled along an orthogonal chain of cells
//! after writing exactly one new letter.
//!
//! # Quick Start
//!
//! ```rust
//! use balda_solver::core::Grid;
//! use balda_solver::dictionary::Dictionary;
//! use balda_solver::solver::MoveGenerator;
//!
//! let dictionary = Dictionary::new(["кот", "ток"]);
//! let generator = MoveGenerator::new(&dictionary);
//!
//! let grid = Grid::from_rows(&["...", "ко.", "..."]).unwrap();
//! let moves = generator.available_words(&grid, &["ток"], &mut rand::rng());
//!
//! assert_eq!(moves.len(), 1);
//! assert_eq!(moves[0].word(), "кот");
//! ```

// Game-wide constants
pub mod constants;

// Core domain types
pub mod core;

// Move generation
pub mod solver;

// Noun dictionary
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
