//! Core domain types for the Balda board
//!
//! Board geometry, templates and move candidates. Everything here is plain
//! data with no knowledge of the dictionary.

mod alphabet;
mod candidate;
mod coord;
mod grid;
mod template;

pub use alphabet::Alphabet;
pub use candidate::MoveCandidate;
pub use coord::{Coord, Direction};
pub use grid::{Cell, Grid, GridError};
pub use template::Template;
