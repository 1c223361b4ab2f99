//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a connection within a level.
///
/// IDs are positive: the endpoint map stores `0` for cells that hold
/// no endpoint, so `ConnectionId(0)` is never a valid connection.
/// Level validation rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u32);

impl ConnectionId {
    /// Raw value stored in the endpoint map for "no endpoint".
    pub const NONE_RAW: u32 = 0;

    /// Build an ID from a raw endpoint-map value, returning `None` for `0`.
    pub fn from_raw(raw: u32) -> Option<Self> {
        (raw != Self::NONE_RAW).then_some(Self(raw))
    }

    /// Whether this ID is usable as a connection ID (non-zero).
    pub fn is_valid(self) -> bool {
        self.0 != Self::NONE_RAW
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ConnectionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the session consumes one frame of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
