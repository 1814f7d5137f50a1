//! Move templates
//!
//! A template is a chain of board letters with at most one placeholder: the
//! empty cell where a player would enter a new letter. Templates are shapes,
//! not words; the matcher turns them into real dictionary entries.

use super::coord::Coord;
use crate::constants::PLACEHOLDER;

/// A letter pattern tied to the board path that spells it
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Template {
    letters: String,
    coords: Vec<Coord>,
}

impl Template {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern string, e.g. `"ко*"`
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Board path, one coordinate per pattern character
    #[inline]
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn has_placeholder(&self) -> bool {
        self.letters.contains(PLACEHOLDER)
    }

    /// A copy of this template with one more cell appended
    ///
    /// `None` appends the placeholder.
    #[must_use]
    pub fn extended(&self, letter: Option<char>, coord: Coord) -> Self {
        let mut next = self.clone();
        next.letters.push(letter.unwrap_or(PLACEHOLDER));
        next.coords.push(coord);
        next
    }

    /// Text before and after the placeholder
    ///
    /// Without a placeholder the whole pattern is the prefix and the suffix is `None`.
    ///
    /// # Examples
    /// ```
    /// use balda_solver::core::{Coord, Template};
    ///
    /// let t = Template::new()
    ///     .extended(Some('к'), Coord::new(0, 0))
    ///     .extended(None, Coord::new(1, 0))
    ///     .extended(Some('т'), Coord::new(2, 0));
    /// assert_eq!(t.slices(), ("к", Some("т")));
    /// ```
    #[must_use]
    pub fn slices(&self) -> (&str, Option<&str>) {
        match self.letters.split_once(PLACEHOLDER) {
            Some((prefix, suffix)) => (prefix, Some(suffix)),
            None => (self.letters.as_str(), None),
        }
    }

    /// At least two cells and exactly one placeholder
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.len() >= 2 && self.letters.matches(PLACEHOLDER).count() == 1
    }

    /// Coordinate of the placeholder cell
    #[must_use]
    pub fn placeholder_coord(&self) -> Option<Coord> {
        self.letters
            .chars()
            .position(|ch| ch == PLACEHOLDER)
            .map(|i| self.coords[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(cells: &[(Option<char>, (usize, usize))]) -> Template {
        cells.iter().fold(Template::new(), |t, &(letter, (x, y))| {
            t.extended(letter, Coord::new(x, y))
        })
    }

    #[test]
    fn extended_keeps_letters_and_coords_parallel() {
        let t = chain(&[(Some('с'), (0, 0)), (Some('о'), (1, 0)), (None, (2, 0))]);
        assert_eq!(t.letters(), "со*");
        assert_eq!(t.len(), 3);
        assert_eq!(t.letters().chars().count(), t.coords().len());
    }

    #[test]
    fn slices_prefix_only() {
        let t = chain(&[(Some('п'), (0, 0)), (None, (0, 1))]);
        assert_eq!(t.slices(), ("п", Some("")));
    }

    #[test]
    fn slices_suffix_only() {
        let t = chain(&[(None, (0, 0)), (Some('о'), (0, 1))]);
        assert_eq!(t.slices(), ("", Some("о")));
    }

    #[test]
    fn slices_without_placeholder() {
        let t = chain(&[(Some('о'), (0, 0)), (Some('к'), (0, 1))]);
        assert_eq!(t.slices(), ("ок", None));
        assert!(!t.has_placeholder());
        assert!(!t.is_playable());
    }

    #[test]
    fn playable_requires_two_cells() {
        let single = chain(&[(None, (0, 0))]);
        assert!(!single.is_playable());

        let pair = chain(&[(None, (0, 0)), (Some('я'), (1, 0))]);
        assert!(pair.is_playable());
    }

    #[test]
    fn placeholder_coord_found() {
        let t = chain(&[(Some('к'), (0, 1)), (None, (1, 1)), (Some('т'), (2, 1))]);
        assert_eq!(t.placeholder_coord(), Some(Coord::new(1, 1)));
        assert_eq!(Template::new().placeholder_coord(), None);
    }
}
