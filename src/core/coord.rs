//! Board coordinates and neighbor directions

use std::fmt;

/// A cell position on the board: column `x`, row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check whether the coordinate lies on a board of side `size`
    #[inline]
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Step one cell in `direction`, or `None` if that leaves a board of side `size`
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let next = Self::new(x, y);
        next.in_bounds(size).then_some(next)
    }

    /// Check whether two coordinates share an edge
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Neighbor directions: letters connect through shared edges only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, in link order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Column and row offset of one step
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Position of this direction inside [`Direction::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_inside_board() {
        let c = Coord::new(1, 1);
        assert_eq!(c.step(Direction::Up, 3), Some(Coord::new(1, 0)));
        assert_eq!(c.step(Direction::Right, 3), Some(Coord::new(2, 1)));
        assert_eq!(c.step(Direction::Down, 3), Some(Coord::new(1, 2)));
        assert_eq!(c.step(Direction::Left, 3), Some(Coord::new(0, 1)));
    }

    #[test]
    fn step_off_board_edges() {
        assert_eq!(Coord::new(0, 0).step(Direction::Up, 3), None);
        assert_eq!(Coord::new(0, 0).step(Direction::Left, 3), None);
        assert_eq!(Coord::new(2, 2).step(Direction::Right, 3), None);
        assert_eq!(Coord::new(2, 2).step(Direction::Down, 3), None);
    }

    #[test]
    fn opposite_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(1, 0)));
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(!c.is_adjacent(Coord::new(0, 0))); // Diagonal
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(1, 3)));
    }

    #[test]
    fn coord_equality_is_structural() {
        assert_eq!(Coord::new(2, 3), Coord { x: 2, y: 3 });
        assert_ne!(Coord::new(2, 3), Coord::new(3, 2));
    }
}
