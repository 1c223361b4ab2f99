//! Error types shared across the Pathlink workspace.
//!
//! Illegal moves are deliberately absent: an attempt to draw into an
//! occupied or foreign cell is an abort transition, not an error.

use std::error::Error;
use std::fmt;

use crate::cell::Cell;
use crate::id::ConnectionId;

/// Errors from a session tick.
///
/// Only the storage layer can fail during a tick; both variants are
/// fatal for the session and are not retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The system allocator could not provide a new arena region.
    AllocationFailed {
        /// Size of the failed request in bytes.
        requested: usize,
    },
    /// A path was popped while empty. Indicates an engine bug.
    PathUnderflow,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "path allocation of {requested} bytes failed")
            }
            Self::PathUnderflow => write!(f, "popped an empty path"),
        }
    }
}

impl Error for StepError {}

/// Errors from the level sequencer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelError {
    /// Requested a level index past the last defined level.
    LevelIndexOutOfRange {
        /// The index that was requested.
        requested: usize,
        /// Number of defined levels.
        count: usize,
    },
    /// A connection endpoint lies outside the grid.
    EndpointOutOfBounds {
        /// The connection owning the endpoint.
        id: ConnectionId,
        /// The offending endpoint.
        cell: Cell,
    },
    /// Path storage for the level could not be allocated.
    Storage(StepError),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelIndexOutOfRange { requested, count } => {
                write!(f, "level {requested} out of range ({count} levels)")
            }
            Self::EndpointOutOfBounds { id, cell } => {
                write!(f, "connection {id} has endpoint {cell} outside the grid")
            }
            Self::Storage(e) => write!(f, "level storage: {e}"),
        }
    }
}

impl Error for LevelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StepError> for LevelError {
    fn from(e: StepError) -> Self {
        Self::Storage(e)
    }
}
