//! Grid cells, rook directions, and the inline path buffer type.

use smallvec::SmallVec;
use std::fmt;

/// A cell coordinate on the puzzle grid.
///
/// `x` grows eastwards and `y` grows southwards. Coordinates are signed so
/// that positions just outside the grid can be represented before bounds
/// resolution; whether a cell is in bounds is decided by the grid that
/// owns it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether `other` is exactly one rook move away.
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// Direction of the single rook step from `self` to `other`, if they are
    /// adjacent.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        match (other.x - self.x, other.y - self.y) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    /// Rook walk from `self` towards `to`, excluding `self` and including
    /// `to`. Moves along x first, then along y.
    ///
    /// Returns an empty path when `self == to`.
    pub fn walk_to(self, to: Cell) -> CellPath {
        let mut out = CellPath::new();
        let mut cur = self;
        while cur.x != to.x {
            cur.x += (to.x - cur.x).signum();
            out.push(cur);
        }
        while cur.y != to.y {
            cur.y += (to.y - cur.y).signum();
            out.push(cur);
        }
        out
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four rook directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `y`.
    North,
    /// Towards larger `y`.
    South,
    /// Towards larger `x`.
    East,
    /// Towards smaller `x`.
    West,
}

impl Direction {
    /// All four directions in N, S, E, W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit `(dx, dy)` offset.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// An owned sequence of cells that stays inline for short paths.
///
/// Used wherever a path has to outlive the arena block it came from
/// (discarded paths, history entries) and for interpolation walks.
pub type CellPath = SmallVec<[Cell; 16]>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn direction_to_adjacent_cells() {
        let c = Cell::new(4, 4);
        for dir in Direction::ALL {
            assert_eq!(c.direction_to(c.step(dir)), Some(dir));
            assert!(c.is_adjacent(c.step(dir)));
        }
    }

    #[test]
    fn diagonal_is_not_adjacent() {
        let c = Cell::new(1, 1);
        assert!(!c.is_adjacent(Cell::new(2, 2)));
        assert_eq!(c.direction_to(Cell::new(2, 2)), None);
        assert_eq!(c.direction_to(c), None);
    }

    #[test]
    fn walk_goes_x_then_y() {
        let path = Cell::new(1, 1).walk_to(Cell::new(3, 2));
        assert_eq!(
            path.as_slice(),
            &[Cell::new(2, 1), Cell::new(3, 1), Cell::new(3, 2)]
        );
    }

    #[test]
    fn walk_to_self_is_empty() {
        assert!(Cell::new(5, 5).walk_to(Cell::new(5, 5)).is_empty());
    }

    #[test]
    fn reverse_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.reverse().reverse(), dir);
            assert_ne!(dir.reverse(), dir);
        }
    }

    proptest! {
        #[test]
        fn walk_is_a_rook_polyline(
            ax in -5i32..15, ay in -5i32..15, bx in -5i32..15, by in -5i32..15,
        ) {
            let a = Cell::new(ax, ay);
            let b = Cell::new(bx, by);
            let walk = a.walk_to(b);
            let expected = ((ax - bx).abs() + (ay - by).abs()) as usize;
            prop_assert_eq!(walk.len(), expected);
            let mut prev = a;
            for &c in &walk {
                prop_assert!(prev.is_adjacent(c));
                prev = c;
            }
            prop_assert_eq!(prev, b);
        }
    }
}
