//! Error types for grid construction and endpoint placement.

use pathlink_core::Cell;
use std::fmt;

/// Errors arising from grid construction or endpoint writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A cell is outside the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid side length.
        size: u32,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// Side length exceeds the largest supported grid.
    DimensionTooLarge {
        /// The requested side length.
        value: u32,
        /// The largest accepted side length.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, size } => {
                write!(f, "cell {cell} out of bounds: [0, {size}) x [0, {size})")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid size {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
