//! The two-layer occupancy grid.

use pathlink_core::{Cell, ConnectionId};

use crate::error::GridError;

/// Square board holding the endpoint layer and the filled layer.
///
/// Cells are addressed row-major: `index = y * size + x`.
///
/// # Examples
///
/// ```
/// use pathlink_core::{Cell, ConnectionId};
/// use pathlink_grid::OccupancyGrid;
///
/// let mut grid = OccupancyGrid::new(10).unwrap();
/// grid.set_endpoint(Cell::new(1, 9), ConnectionId(1)).unwrap();
/// assert_eq!(grid.endpoint_at(Cell::new(1, 9)), Some(ConnectionId(1)));
/// assert!(grid.is_free_for(Cell::new(1, 9), ConnectionId(1)));
/// assert!(!grid.is_free_for(Cell::new(1, 9), ConnectionId(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    size: u32,
    /// Raw connection IDs, `0` where there is no endpoint.
    endpoints: Vec<u32>,
    filled: Vec<bool>,
}

impl OccupancyGrid {
    /// Largest accepted side length.
    pub const MAX_SIZE: u32 = 4096;

    /// Create an empty `size × size` grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for `size == 0` and
    /// `Err(GridError::DimensionTooLarge)` above [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(size: u32) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::DimensionTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        let n = (size as usize) * (size as usize);
        Ok(Self {
            size,
            endpoints: vec![ConnectionId::NONE_RAW; n],
            filled: vec![false; n],
        })
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.filled.len()
    }

    /// Whether `cell` lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        let n = self.size as i32;
        cell.x >= 0 && cell.x < n && cell.y >= 0 && cell.y < n
    }

    /// Row-major index of `cell`, or `None` if out of bounds.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| (cell.y as usize) * (self.size as usize) + (cell.x as usize))
    }

    /// The cell at a row-major index, or `None` past the end.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.cell_count() {
            return None;
        }
        let n = self.size as usize;
        Some(Cell::new((index % n) as i32, (index / n) as i32))
    }

    /// Check that `cell` is on the grid and return its index.
    pub fn check_bounds(&self, cell: Cell) -> Result<usize, GridError> {
        self.index_of(cell).ok_or(GridError::CellOutOfBounds {
            cell,
            size: self.size,
        })
    }

    // ── Endpoint layer ──────────────────────────────────────────

    /// Record `id` as the endpoint owner of `cell`.
    pub fn set_endpoint(&mut self, cell: Cell, id: ConnectionId) -> Result<(), GridError> {
        let i = self.check_bounds(cell)?;
        self.endpoints[i] = id.0;
        Ok(())
    }

    /// The connection whose endpoint sits on `cell`, if any.
    pub fn endpoint_at(&self, cell: Cell) -> Option<ConnectionId> {
        self.index_of(cell)
            .and_then(|i| ConnectionId::from_raw(self.endpoints[i]))
    }

    /// Raw endpoint layer, row-major, `0` for empty cells.
    pub fn endpoints(&self) -> &[u32] {
        &self.endpoints
    }

    /// Wipe the endpoint layer.
    pub fn clear_endpoints(&mut self) {
        self.endpoints.fill(ConnectionId::NONE_RAW);
    }

    // ── Filled layer ────────────────────────────────────────────

    /// Whether `cell` is occupied by a committed path. `false` off-grid.
    pub fn is_filled(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|i| self.filled[i])
    }

    /// Set or clear the filled bit of `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds. Path points are always in bounds,
    /// so the engine never hits this.
    pub fn set_filled(&mut self, cell: Cell, filled: bool) {
        let i = self
            .index_of(cell)
            .unwrap_or_else(|| panic!("set_filled on off-grid cell {cell}"));
        self.filled[i] = filled;
    }

    /// Raw filled layer, row-major.
    pub fn filled(&self) -> &[bool] {
        &self.filled
    }

    /// Wipe the filled layer.
    pub fn clear_filled(&mut self) {
        self.filled.fill(false);
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.filled.iter().filter(|&&f| f).count()
    }

    /// Fraction of cells that are filled, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        self.filled_count() as f64 / self.cell_count() as f64
    }

    /// Wipe both layers.
    pub fn clear(&mut self) {
        self.clear_endpoints();
        self.clear_filled();
    }

    /// Whether the connection `id` may extend its path onto `cell`: the cell
    /// is on the grid, not filled, and holds either no endpoint or one of
    /// `id`'s own endpoints.
    pub fn is_free_for(&self, cell: Cell, id: ConnectionId) -> bool {
        match self.index_of(cell) {
            Some(i) => {
                !self.filled[i]
                    && (self.endpoints[i] == ConnectionId::NONE_RAW || self.endpoints[i] == id.0)
            }
            None => false,
        }
    }
}
