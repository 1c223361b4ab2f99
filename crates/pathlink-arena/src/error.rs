//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use pathlink_core::StepError;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The system allocator refused a new region.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
    },
    /// Popped an empty [`ArenaVec`](crate::ArenaVec).
    Underflow,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: requested {requested} bytes")
            }
            Self::Underflow => write!(f, "pop on empty sequence"),
        }
    }
}

impl Error for ArenaError {}

impl From<ArenaError> for StepError {
    fn from(e: ArenaError) -> Self {
        match e {
            ArenaError::OutOfMemory { requested } => StepError::AllocationFailed { requested },
            ArenaError::Underflow => StepError::PathUnderflow,
        }
    }
}
