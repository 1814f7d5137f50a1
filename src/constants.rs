//! Game-wide constants

/// Default board side length (5x5 board, seed word of 5 letters)
pub const FIELD_SIZE: usize = 5;

/// Marker for the single unfilled cell inside a template
pub const PLACEHOLDER: char = '*';

/// Letters a player may enter on the board
pub const RUSSIAN_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Ukrainian letters, for boards played with a Ukrainian word list
pub const UKRAINIAN_ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";
