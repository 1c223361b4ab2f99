//! Static level definitions supplied by the level data provider.

use crate::cell::Cell;
use crate::color::Color;
use crate::id::ConnectionId;

/// Static description of one connection: two endpoints sharing an ID.
///
/// # Examples
///
/// ```
/// use pathlink_core::{Cell, Color, ConnectionDef, ConnectionId};
///
/// let def = ConnectionDef::new(1, (1, 9), (9, 7), Color::RED);
/// assert_eq!(def.id, ConnectionId(1));
/// assert_eq!(def.end, Cell::new(9, 7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionDef {
    /// Connection ID, written into the endpoint map at both endpoints.
    pub id: ConnectionId,
    /// First endpoint.
    pub start: Cell,
    /// Second endpoint.
    pub end: Cell,
    /// Display colour.
    pub color: Color,
}

impl ConnectionDef {
    /// Convenience constructor taking raw tuples.
    pub fn new(id: u32, start: (i32, i32), end: (i32, i32), color: Color) -> Self {
        Self {
            id: ConnectionId(id),
            start: start.into(),
            end: end.into(),
            color,
        }
    }
}

/// An ordered set of connections making up one puzzle.
///
/// Order matters: when the player presses on a cell, the first connection
/// in definition order whose endpoint matches is grabbed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelDef {
    /// Connections in definition order.
    pub connections: Vec<ConnectionDef>,
}

impl LevelDef {
    /// Build a level from its connections.
    pub fn new(connections: Vec<ConnectionDef>) -> Self {
        Self { connections }
    }

    /// Number of connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Whether the level has no connections.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl FromIterator<ConnectionDef> for LevelDef {
    fn from_iter<I: IntoIterator<Item = ConnectionDef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
