//! Level progression.

use std::fmt;

use log::info;

use pathlink_core::{LevelDef, LevelError, LevelSource, StepError};
use pathlink_grid::OccupancyGrid;

use crate::registry::ConnectionRegistry;

/// Owns the level list and the index of the level in play.
///
/// Loading a level clears both grid layers, rebuilds the registry, and
/// writes every connection's ID at its two endpoints. Later connections
/// win where two share a cell.
pub struct LevelSequencer {
    levels: Box<dyn LevelSource + Send>,
    current: usize,
}

impl LevelSequencer {
    /// Wrap a level source. Nothing is loaded yet; the current index is 0.
    pub fn new(levels: Box<dyn LevelSource + Send>) -> Self {
        Self { levels, current: 0 }
    }

    /// Index of the level in play.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of levels.
    pub fn level_count(&self) -> usize {
        self.levels.level_count()
    }

    /// Whether the level in play is the last one.
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.level_count()
    }

    /// Definition of the level at `index`.
    pub fn level(&self, index: usize) -> Option<&LevelDef> {
        self.levels.level(index)
    }

    /// Load level `index` into `grid` and `registry`.
    ///
    /// An out-of-range index leaves everything untouched.
    pub fn load(
        &mut self,
        index: usize,
        grid: &mut OccupancyGrid,
        registry: &mut ConnectionRegistry,
    ) -> Result<(), LevelError> {
        let count = self.levels.level_count();
        let def = self
            .levels
            .level(index)
            .ok_or(LevelError::LevelIndexOutOfRange {
                requested: index,
                count,
            })?;

        grid.clear();
        registry
            .reload(def)
            .map_err(|e| LevelError::Storage(StepError::from(e)))?;
        for c in &def.connections {
            for cell in [c.start, c.end] {
                grid.set_endpoint(cell, c.id)
                    .map_err(|_| LevelError::EndpointOutOfBounds { id: c.id, cell })?;
            }
        }
        self.current = index;
        info!(
            "level {} loaded: {} connections on a {}x{} grid",
            index,
            def.len(),
            grid.size(),
            grid.size()
        );
        Ok(())
    }

    /// Load the level after the current one.
    ///
    /// Past the last level this returns
    /// [`LevelError::LevelIndexOutOfRange`] and changes nothing.
    pub fn advance(
        &mut self,
        grid: &mut OccupancyGrid,
        registry: &mut ConnectionRegistry,
    ) -> Result<(), LevelError> {
        let next = self.current + 1;
        self.load(next, grid, registry)?;
        info!("advanced to level {next}");
        Ok(())
    }

    /// Reload the current level from scratch.
    pub fn restart(
        &mut self,
        grid: &mut OccupancyGrid,
        registry: &mut ConnectionRegistry,
    ) -> Result<(), LevelError> {
        self.load(self.current, grid, registry)
    }
}

impl fmt::Debug for LevelSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelSequencer")
            .field("current", &self.current)
            .field("level_count", &self.levels.level_count())
            .finish()
    }
}
