//! The level's connections and the arena backing their paths.

use indexmap::IndexMap;
use log::debug;

use pathlink_arena::{ArenaConfig, ArenaError, ArenaStats, GrowingArena};
use pathlink_core::{Cell, CellPath, ConnectionId, LevelDef};
use pathlink_grid::OccupancyGrid;

use crate::connection::Connection;

/// Insertion-ordered map of the current level's connections.
///
/// Definition order is preserved so that grabbing scans connections in
/// the order the level lists them. Every path is allocated from one
/// level-scoped [`GrowingArena`], reset on each [`reload`](Self::reload).
#[derive(Debug)]
pub struct ConnectionRegistry {
    connections: IndexMap<ConnectionId, Connection>,
    arena: GrowingArena<Cell>,
}

impl ConnectionRegistry {
    /// Build a registry for `def` with a fresh arena.
    pub fn load(def: &LevelDef, arena_config: ArenaConfig) -> Result<Self, ArenaError> {
        let mut registry = Self {
            connections: IndexMap::with_capacity(def.len()),
            arena: GrowingArena::new(arena_config),
        };
        registry.reload(def)?;
        Ok(registry)
    }

    /// Discard every connection and rebuild from `def`, reusing the arena's
    /// memory.
    pub fn reload(&mut self, def: &LevelDef) -> Result<(), ArenaError> {
        self.arena.reset();
        self.connections.clear();
        for c in &def.connections {
            let conn = Connection::from_def(c, &mut self.arena)?;
            self.connections.insert(c.id, conn);
        }
        debug!(
            "registry loaded {} connections ({} arena bytes)",
            self.connections.len(),
            self.arena.stats().total_bytes
        );
        Ok(())
    }

    /// Number of connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Whether the level has no connections.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Connection at definition-order `index`.
    pub fn get(&self, index: usize) -> Option<&Connection> {
        self.connections.get_index(index).map(|(_, c)| c)
    }

    /// Connection with `id`.
    pub fn get_by_id(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    /// Definition-order index of `id`.
    pub fn index_of(&self, id: ConnectionId) -> Option<usize> {
        self.connections.get_index_of(&id)
    }

    /// Connections in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.values()
    }

    /// The path of the connection at `index`; empty if there is none.
    pub fn path(&self, index: usize) -> &[Cell] {
        match self.get(index) {
            Some(c) => c.points(&self.arena),
            None => &[],
        }
    }

    /// The endpoint opposite the first point of connection `index`'s path.
    pub fn target(&self, index: usize) -> Option<Cell> {
        self.get(index).map(|c| c.target(&self.arena))
    }

    /// The connection a press on `cell` grabs: the first, in definition
    /// order, with an endpoint on `cell` whose ID is the one the endpoint
    /// map holds there.
    pub fn find_grabbable(&self, cell: Cell, grid: &OccupancyGrid) -> Option<usize> {
        let owner = grid.endpoint_at(cell)?;
        self.connections
            .values()
            .position(|c| c.touches(cell) && c.id() == owner)
    }

    /// Whether every connection is committed.
    pub fn all_done(&self) -> bool {
        self.connections.values().all(Connection::is_done)
    }

    /// Number of committed connections.
    pub fn done_count(&self) -> usize {
        self.connections.values().filter(|c| c.is_done()).count()
    }

    /// Arena bookkeeping.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    // ── Mutation (crate-internal) ───────────────────────────────

    pub(crate) fn push_point(&mut self, index: usize, cell: Cell) -> Result<(), ArenaError> {
        let Some((_, conn)) = self.connections.get_index_mut(index) else {
            return Ok(());
        };
        conn.push(&mut self.arena, cell)
    }

    pub(crate) fn pop_point(&mut self, index: usize) -> Result<Cell, ArenaError> {
        match self.connections.get_index_mut(index) {
            Some((_, conn)) => conn.pop(&self.arena),
            None => Err(ArenaError::Underflow),
        }
    }

    /// Copy out and clear the path of connection `index`.
    pub(crate) fn take_path(&mut self, index: usize) -> CellPath {
        let path = CellPath::from_slice(self.path(index));
        if let Some((_, conn)) = self.connections.get_index_mut(index) {
            conn.clear();
        }
        path
    }

    /// Replace the path of connection `index` with `cells`.
    pub(crate) fn set_path(&mut self, index: usize, cells: &[Cell]) -> Result<(), ArenaError> {
        let Some((_, conn)) = self.connections.get_index_mut(index) else {
            return Ok(());
        };
        conn.clear();
        for &cell in cells {
            conn.push(&mut self.arena, cell)?;
        }
        Ok(())
    }

    pub(crate) fn set_done(&mut self, index: usize, done: bool) {
        if let Some((_, conn)) = self.connections.get_index_mut(index) {
            conn.set_done(done);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlink_core::{Color, ConnectionDef};

    fn level() -> LevelDef {
        LevelDef::new(vec![
            ConnectionDef::new(1, (0, 0), (3, 0), Color::RED),
            ConnectionDef::new(2, (0, 1), (3, 1), Color::BLUE),
        ])
    }

    fn grid_for(def: &LevelDef) -> OccupancyGrid {
        let mut grid = OccupancyGrid::new(4).unwrap();
        for c in &def.connections {
            grid.set_endpoint(c.start, c.id).unwrap();
            grid.set_endpoint(c.end, c.id).unwrap();
        }
        grid
    }

    #[test]
    fn load_preserves_definition_order() {
        let reg = ConnectionRegistry::load(&level(), ArenaConfig::default()).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(0).unwrap().id(), ConnectionId(1));
        assert_eq!(reg.index_of(ConnectionId(2)), Some(1));
        assert!(reg.get_by_id(ConnectionId(3)).is_none());
        assert!(!reg.all_done());
    }

    #[test]
    fn find_grabbable_requires_matching_endpoint_id() {
        let def = level();
        let mut grid = grid_for(&def);
        let reg = ConnectionRegistry::load(&def, ArenaConfig::default()).unwrap();
        assert_eq!(reg.find_grabbable(Cell::new(3, 1), &grid), Some(1));
        assert_eq!(reg.find_grabbable(Cell::new(1, 1), &grid), None);

        // Endpoint map overwritten by another id: connection 1 no longer
        // grabbable from its own start.
        grid.set_endpoint(Cell::new(0, 0), ConnectionId(2)).unwrap();
        assert_eq!(reg.find_grabbable(Cell::new(0, 0), &grid), None);
    }

    #[test]
    fn take_and_set_path() {
        let mut reg = ConnectionRegistry::load(&level(), ArenaConfig::default()).unwrap();
        let cells = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)];
        reg.set_path(0, &cells).unwrap();
        assert_eq!(reg.path(0), &cells);
        assert_eq!(reg.target(0), Some(Cell::new(3, 0)));
        let taken = reg.take_path(0);
        assert_eq!(taken.as_slice(), &cells);
        assert!(reg.path(0).is_empty());
    }

    #[test]
    fn reload_resets_state() {
        let mut reg = ConnectionRegistry::load(&level(), ArenaConfig::default()).unwrap();
        reg.push_point(0, Cell::new(0, 0)).unwrap();
        reg.set_done(0, true);
        assert_eq!(reg.done_count(), 1);
        reg.reload(&level()).unwrap();
        assert_eq!(reg.done_count(), 0);
        assert!(reg.path(0).is_empty());
        assert_eq!(reg.arena_stats().region_count, 1);
    }

    #[test]
    fn pop_on_empty_underflows() {
        let mut reg = ConnectionRegistry::load(&level(), ArenaConfig::default()).unwrap();
        assert_eq!(reg.pop_point(0), Err(ArenaError::Underflow));
    }
}
