//! Per-tick metrics for the play session.
//!
//! [`StepMetrics`] captures timing, board, and memory data for a single
//! tick. Hosts can surface these in a debug overlay.

/// Timing and memory metrics collected during a single tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the tick, in microseconds.
    pub total_us: u64,
    /// Length of the active path after the tick (0 when idle).
    pub active_path_len: usize,
    /// Filled cells after the tick.
    pub filled_cells: usize,
    /// Committed connections after the tick.
    pub done_connections: usize,
    /// Effects emitted during the tick.
    pub effects_emitted: u32,
    /// Bytes handed out by the path arena since the level was loaded.
    pub arena_used_bytes: usize,
    /// Bytes of backing storage held by the path arena.
    pub arena_total_bytes: usize,
    /// Bytes abandoned in arena regions left behind for a new one.
    pub arena_wasted_bytes: usize,
}
