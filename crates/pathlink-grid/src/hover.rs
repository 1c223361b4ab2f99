//! World-space pointer position to grid cell.

use pathlink_core::Cell;

use crate::edge::EdgeBehavior;

/// Resolves pointer positions to cells on a square grid of `size` cells of
/// `cell_size` world units each, with the grid's top-left corner at the
/// origin.
///
/// # Examples
///
/// ```
/// use pathlink_core::Cell;
/// use pathlink_grid::{EdgeBehavior, HoverResolver};
///
/// let hover = HoverResolver::new(10, 32.0, 1, EdgeBehavior::Clamp);
/// assert_eq!(hover.resolve(40.0, 70.0), Some(Cell::new(1, 2)));
/// assert_eq!(hover.resolve(-5.0, 10.0), Some(Cell::new(0, 0)));
/// assert_eq!(hover.resolve(-40.0, 10.0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverResolver {
    size: u32,
    cell_size: f32,
    margin: u32,
    edge: EdgeBehavior,
}

impl HoverResolver {
    /// Create a resolver. `margin` only matters under [`EdgeBehavior::Clamp`].
    pub fn new(size: u32, cell_size: f32, margin: u32, edge: EdgeBehavior) -> Self {
        Self {
            size,
            cell_size,
            margin,
            edge,
        }
    }

    /// Grid side length in cells.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Cell side length in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// The configured edge behavior.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// The cell under `(x, y)`, or `None` when the position is out of bounds
    /// (or not a number).
    pub fn resolve(&self, x: f32, y: f32) -> Option<Cell> {
        let cx = self.axis(x)?;
        let cy = self.axis(y)?;
        Some(Cell::new(cx, cy))
    }

    fn axis(&self, v: f32) -> Option<i32> {
        if !v.is_finite() || self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return None;
        }
        let raw = (v / self.cell_size).floor();
        let n = self.size as i64;
        // f32 -> i64 saturates, so huge positions stay out of range.
        let c = raw as i64;
        if (0..n).contains(&c) {
            return Some(c as i32);
        }
        match self.edge {
            EdgeBehavior::Absorb => None,
            EdgeBehavior::Clamp => {
                let m = self.margin as i64;
                if c >= -m && c < n + m {
                    Some(c.clamp(0, n - 1) as i32)
                } else {
                    None
                }
            }
        }
    }
}
