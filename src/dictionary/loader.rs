//! Word list loading utilities
//!
//! Reads alternative noun lists from disk. The result feeds [`Dictionary::new`].
//!
//! [`Dictionary::new`]: super::Dictionary::new

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and `#` comments are skipped; entries are trimmed and lower-cased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use balda_solver::dictionary::{Dictionary, loader::load_from_file};
///
/// let words = load_from_file("data/nouns.txt").unwrap();
/// let dictionary = Dictionary::new(&words);
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Split text into normalized words, one per line
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
