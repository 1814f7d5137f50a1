//! Template discovery
//!
//! Depth-first search over the board from every cell. A chain collects board
//! letters and at most one placeholder (the empty cell a player would fill).
//! Branches are cut as soon as no dictionary word could contain the chain
//! around its placeholder, which keeps the search far from exponential.

use crate::core::{Coord, Grid, Template};
use crate::dictionary::Dictionary;
use log::{debug, trace};
use rayon::prelude::*;
use std::borrow::Cow;

/// Templates found from one starting cell, with the number of cells visited
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub templates: Vec<Template>,
    pub steps: usize,
}

/// Check whether some dictionary word could still match `template`
///
/// - text on both sides of the placeholder: a word must start with the first part
///   and end with the second
/// - no placeholder, or nothing after it: a word must start with the text
/// - nothing before the placeholder: a word must end with the text after it
///
/// Letters are compared in lower case. Word length is not checked here; the
/// matcher enforces it.
///
/// # Examples
/// ```
/// use balda_solver::core::{Coord, Template};
/// use balda_solver::dictionary::Dictionary;
/// use balda_solver::solver::is_plausible;
///
/// let dict = Dictionary::new(["пес", "сир", "плов"]);
/// let t = Template::new()
///     .extended(Some('п'), Coord::new(0, 0))
///     .extended(None, Coord::new(1, 0));
/// assert!(is_plausible(&t, &dict));
/// ```
#[must_use]
pub fn is_plausible(template: &Template, dictionary: &Dictionary) -> bool {
    let (prefix, suffix) = template.slices();
    let prefix = lowered(prefix);
    let suffix = suffix.map(lowered);

    match (&*prefix, suffix.as_deref()) {
        (prefix, None | Some("")) => dictionary.has_prefix(prefix),
        ("", Some(suffix)) => dictionary.has_suffix(suffix),
        (prefix, Some(suffix)) => dictionary.has_prefix_and_suffix(prefix, suffix),
    }
}

fn lowered(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_uppercase) {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

/// Searches a board snapshot for templates
pub struct TemplateBuilder<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
}

/// Mutable state of one depth-first search
struct Walk {
    visited: Vec<bool>,
    found: Vec<Template>,
    steps: usize,
}

impl<'a> TemplateBuilder<'a> {
    #[must_use]
    pub const fn new(grid: &'a Grid, dictionary: &'a Dictionary) -> Self {
        Self { grid, dictionary }
    }

    /// All templates reachable from every cell
    ///
    /// Starting cells are searched in parallel; output keeps row-major start
    /// order. The same pattern may appear many times with different paths.
    #[must_use]
    pub fn build(&self) -> Vec<Template> {
        let outcomes: Vec<SearchOutcome> = self
            .grid
            .cells()
            .par_iter()
            .map(|cell| self.search_from(cell.coord()))
            .collect();

        let steps: usize = outcomes.iter().map(|o| o.steps).sum();
        let templates: Vec<Template> = outcomes.into_iter().flat_map(|o| o.templates).collect();

        debug!(
            "Template search: {} templates in {steps} steps over {} cells",
            templates.len(),
            self.grid.cells().len()
        );
        templates
    }

    /// Templates whose chain starts at `start`
    ///
    /// An off-board `start` yields nothing.
    #[must_use]
    pub fn search_from(&self, start: Coord) -> SearchOutcome {
        let mut walk = Walk {
            visited: vec![false; self.grid.cells().len()],
            found: Vec::new(),
            steps: 0,
        };
        self.visit(start, &Template::new(), &mut walk);

        SearchOutcome {
            templates: walk.found,
            steps: walk.steps,
        }
    }

    fn visit(&self, coord: Coord, chain: &Template, walk: &mut Walk) {
        let (Ok(cell), Ok(index)) = (self.grid.cell(coord), self.grid.index(coord)) else {
            return;
        };

        // One placeholder per template
        if cell.is_empty() && chain.has_placeholder() {
            return;
        }

        walk.steps += 1;
        let template = chain.extended(cell.letter(), coord);

        if !is_plausible(&template, self.dictionary) {
            trace!("Pruned {:?} at {coord}", template.letters());
            return;
        }

        if template.is_playable() {
            walk.found.push(template.clone());
        }

        walk.visited[index] = true;
        for next in cell.neighbors() {
            let seen = self.grid.index(next).is_ok_and(|i| walk.visited[i]);
            if !seen {
                self.visit(next, &template, walk);
            }
        }
        walk.visited[index] = false;
    }
}

/// Collect every template on `grid`, pruned against `dictionary`
///
/// # Examples
/// ```
/// use balda_solver::core::Grid;
/// use balda_solver::dictionary::Dictionary;
/// use balda_solver::solver::build_templates;
///
/// let grid = Grid::from_rows(&["...", "ко.", "..."]).unwrap();
/// let dict = Dictionary::new(["кот"]);
///
/// let templates = build_templates(&grid, &dict);
/// assert!(templates.iter().any(|t| t.letters() == "ко*"));
/// ```
#[must_use]
pub fn build_templates(grid: &Grid, dictionary: &Dictionary) -> Vec<Template> {
    TemplateBuilder::new(grid, dictionary).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLACEHOLDER;
    use std::collections::BTreeSet;

    fn patterns(templates: &[Template]) -> BTreeSet<&str> {
        templates.iter().map(Template::letters).collect()
    }

    fn template(cells: &[(Option<char>, (usize, usize))]) -> Template {
        cells.iter().fold(Template::new(), |t, &(letter, (x, y))| {
            t.extended(letter, Coord::new(x, y))
        })
    }

    #[test]
    fn templates_keep_shape_invariants() {
        let grid = Grid::from_rows(&[".....", ".....", "балда", ".....", "....."]).unwrap();
        let templates = build_templates(&grid, Dictionary::nouns());

        assert!(!templates.is_empty());
        for t in &templates {
            assert_eq!(t.letters().chars().count(), t.coords().len());
            assert_eq!(t.letters().matches(PLACEHOLDER).count(), 1);
            assert!(t.len() >= 2);
            assert!(grid.is_simple_path(t.coords()));
        }
    }

    #[test]
    fn placeholder_sits_on_empty_cell() {
        let grid = Grid::from_rows(&["...", "кот", "..."]).unwrap();
        let dict = Dictionary::new(["кот", "рот", "крот", "коты"]);

        for t in build_templates(&grid, &dict) {
            let coord = t.placeholder_coord().unwrap();
            assert_eq!(grid.letter(coord).unwrap(), None);
        }
    }

    #[test]
    fn prefix_and_suffix_templates_found() {
        let grid = Grid::from_rows(&["...", "ко.", "..."]).unwrap();
        let dict = Dictionary::new(["кот", "сок"]);
        let templates = build_templates(&grid, &dict);
        let found = patterns(&templates);

        assert!(found.contains("ко*")); // кот
        assert!(found.contains("*к")); // сок ends with "к"
        assert!(!found.contains("*ко")); // no word ends with "ко"
        assert!(!found.contains("ок*")); // no word starts with "о"
    }

    #[test]
    fn chain_continues_past_placeholder() {
        let grid = Grid::from_rows(&["...", "к.т", "..."]).unwrap();
        let dict = Dictionary::new(["кот"]);
        let found: Vec<Template> = build_templates(&grid, &dict);

        let middle = found.iter().find(|t| t.letters() == "к*т").unwrap();
        assert_eq!(
            middle.coords(),
            &[Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)]
        );
    }

    #[test]
    fn no_match_prunes_immediately() {
        let grid = Grid::from_rows(&["...", "кот", "..."]).unwrap();
        let dict = Dictionary::new(["плащ"]);
        let builder = TemplateBuilder::new(&grid, &dict);

        // A filled start cell whose letter begins no word: one step, nothing found
        let outcome = builder.search_from(Coord::new(0, 1));
        assert_eq!(outcome.steps, 1);
        assert!(outcome.templates.is_empty());

        assert!(builder.build().is_empty());
    }

    #[test]
    fn pruning_stops_deeper_chains() {
        let grid = Grid::from_rows(&["....", "кото", "....", "...."]).unwrap();
        let unrestricted = Dictionary::new(["котоы", "отк", "кото"]);
        let narrow = Dictionary::new(["кы"]);

        let wide = TemplateBuilder::new(&grid, &unrestricted).search_from(Coord::new(0, 1));
        let cut = TemplateBuilder::new(&grid, &narrow).search_from(Coord::new(0, 1));

        assert!(cut.steps < wide.steps);
        assert!(!wide.templates.is_empty());
        assert_eq!(patterns(&cut.templates), BTreeSet::from(["к*"]));
    }

    #[test]
    fn empty_board_has_no_templates() {
        let grid = Grid::new(4).unwrap();
        assert!(build_templates(&grid, Dictionary::nouns()).is_empty());
    }

    #[test]
    fn full_board_has_no_templates() {
        let grid = Grid::from_rows(&["ко", "то"]).unwrap();
        let dict = Dictionary::new(["кот", "ток"]);
        assert!(build_templates(&grid, &dict).is_empty());
    }

    #[test]
    fn off_board_start_yields_nothing() {
        let grid = Grid::from_rows(&["к.", ".."]).unwrap();
        let dict = Dictionary::new(["кот"]);
        let outcome = TemplateBuilder::new(&grid, &dict).search_from(Coord::new(5, 5));
        assert_eq!(outcome.steps, 0);
        assert!(outcome.templates.is_empty());
    }

    #[test]
    fn plausible_both_slices() {
        let dict = Dictionary::new(["кот", "сон"]);
        let kt = template(&[(Some('к'), (0, 0)), (None, (1, 0)), (Some('т'), (2, 0))]);
        let kn = template(&[(Some('к'), (0, 0)), (None, (1, 0)), (Some('н'), (2, 0))]);
        assert!(is_plausible(&kt, &dict));
        assert!(!is_plausible(&kn, &dict));
    }

    #[test]
    fn plausible_prefix_only() {
        let dict = Dictionary::new(["пес", "сир", "плов"]);
        let p = template(&[(Some('п'), (0, 0)), (None, (1, 0))]);
        let s = template(&[(Some('я'), (0, 0)), (None, (1, 0))]);
        assert!(is_plausible(&p, &dict));
        assert!(!is_plausible(&s, &dict));

        // Exactly the words the prefix check admits
        let admitted: Vec<&str> = ["пес", "сир", "плов"]
            .into_iter()
            .filter(|w| is_plausible(&p, &Dictionary::new([*w])))
            .collect();
        assert_eq!(admitted, vec!["пес", "плов"]);
    }

    #[test]
    fn plausible_suffix_only() {
        let dict = Dictionary::new(["кот", "сон"]);
        let ot = template(&[(None, (0, 0)), (Some('о'), (1, 0)), (Some('т'), (2, 0))]);
        let ok = template(&[(None, (0, 0)), (Some('о'), (1, 0)), (Some('к'), (2, 0))]);
        assert!(is_plausible(&ot, &dict));
        assert!(!is_plausible(&ok, &dict));
    }

    #[test]
    fn plausible_without_placeholder() {
        let dict = Dictionary::new(["кот"]);
        let ko = template(&[(Some('к'), (0, 0)), (Some('о'), (1, 0))]);
        let ok = template(&[(Some('о'), (0, 0)), (Some('к'), (1, 0))]);
        assert!(is_plausible(&ko, &dict));
        assert!(!is_plausible(&ok, &dict));
    }

    #[test]
    fn plausible_ignores_case() {
        let dict = Dictionary::new(["кот"]);
        let upper = template(&[(Some('К'), (0, 0)), (None, (1, 0)), (Some('Т'), (2, 0))]);
        let prefix = template(&[(Some('К'), (0, 0)), (Some('О'), (1, 0))]);
        let suffix = template(&[(None, (0, 0)), (Some('Т'), (1, 0))]);

        assert!(is_plausible(&upper, &dict));
        assert!(is_plausible(&prefix, &dict));
        assert!(is_plausible(&suffix, &dict));
    }

    #[test]
    fn lone_placeholder_is_plausible_for_non_empty_dictionary() {
        let lone = template(&[(None, (0, 0))]);
        assert!(is_plausible(&lone, &Dictionary::new(["кот"])));
        assert!(!is_plausible(&lone, &Dictionary::default()));
    }
}
