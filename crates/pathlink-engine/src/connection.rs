//! A single connection: two endpoints and the path drawn between them.

use pathlink_arena::{ArenaError, ArenaVec, GrowingArena};
use pathlink_core::{Cell, Color, ConnectionDef, ConnectionId};

/// Runtime state of one connection in the current level.
///
/// The path storage lives in the registry's arena; every accessor that
/// reads points takes that arena.
#[derive(Debug)]
pub struct Connection {
    id: ConnectionId,
    start: Cell,
    end: Cell,
    color: Color,
    points: ArenaVec<Cell>,
    done: bool,
}

impl Connection {
    /// Build an undrawn connection from its definition.
    pub(crate) fn from_def(
        def: &ConnectionDef,
        arena: &mut GrowingArena<Cell>,
    ) -> Result<Self, ArenaError> {
        Ok(Self {
            id: def.id,
            start: def.start,
            end: def.end,
            color: def.color,
            points: ArenaVec::new(arena)?,
            done: false,
        })
    }

    /// Connection ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// First endpoint.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Second endpoint.
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Display colour.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the path is committed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no path is drawn.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The drawn path.
    pub fn points<'a>(&self, arena: &'a GrowingArena<Cell>) -> &'a [Cell] {
        self.points.as_slice(arena)
    }

    /// The endpoint opposite the first point of the path. With no path,
    /// the path is assumed to start at `start`.
    pub fn target(&self, arena: &GrowingArena<Cell>) -> Cell {
        match self.points.first(arena) {
            Some(first) if first == self.end => self.start,
            _ => self.end,
        }
    }

    /// Whether `cell` is one of the two endpoints.
    pub fn touches(&self, cell: Cell) -> bool {
        self.start == cell || self.end == cell
    }

    pub(crate) fn push(
        &mut self,
        arena: &mut GrowingArena<Cell>,
        cell: Cell,
    ) -> Result<(), ArenaError> {
        self.points.push(arena, cell)
    }

    pub(crate) fn pop(&mut self, arena: &GrowingArena<Cell>) -> Result<Cell, ArenaError> {
        self.points.pop(arena)
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}
