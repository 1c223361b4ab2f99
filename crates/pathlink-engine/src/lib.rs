//! Path-drawing engine and play session for Pathlink.
//!
//! [`PlaySession`] is the user-facing API. Each call to
//! [`step()`](PlaySession::step) feeds one tick of pointer input through
//! the [`PathMachine`], which grabs, extends, retracts, commits, or aborts
//! the active connection's path against the shared
//! [`OccupancyGrid`](pathlink_grid::OccupancyGrid). The
//! [`LevelSequencer`] owns the level list and rebuilds the grid and the
//! [`ConnectionRegistry`] on every load; [`MoveHistory`] records commits
//! and discards so they can be undone.
//!
//! ```text
//!  PointerInput ──► PathMachine ──► OccupancyGrid (filled layer)
//!                       │
//!                       ├──► ConnectionRegistry ──► GrowingArena<Cell>
//!                       └──► EffectSink (fire and forget)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod connection;
pub mod effects;
pub mod history;
pub mod machine;
pub mod metrics;
pub mod registry;
pub mod sequencer;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use connection::Connection;
pub use effects::{channel_sink, ChannelSink};
pub use history::{HistoryEntry, MoveHistory};
pub use machine::{AbortReason, DragState, PathMachine, PathSampling, Transition};
pub use metrics::StepMetrics;
pub use registry::ConnectionRegistry;
pub use sequencer::LevelSequencer;
pub use session::{ConnectionView, PlaySession, SessionView, StepResult};
