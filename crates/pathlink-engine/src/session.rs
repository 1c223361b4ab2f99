//! The play session.
//!
//! [`PlaySession`] is the primary user-facing API. Each call to
//! [`step()`](PlaySession::step) consumes one tick of pointer input, runs
//! the [`PathMachine`], records undoable edits, and returns a
//! [`StepResult`].
//!
//! # Ownership model
//!
//! `PlaySession` is [`Send`] but every mutating method takes `&mut self`,
//! and [`view()`](PlaySession::view) returns a [`SessionView`] that
//! borrows from `self`. A renderer holding a view cannot observe a
//! half-applied tick; the borrow checker rules it out.

use std::fmt;
use std::time::Instant;

use log::debug;

use pathlink_core::{
    Cell, Color, ConnectionId, EffectSink, LevelDef, LevelError, PathEffect, PointerButtons,
    PointerInput, StepError, TickId,
};
use pathlink_grid::{HoverResolver, OccupancyGrid};

use crate::config::{ConfigError, SessionConfig};
use crate::history::{HistoryEntry, MoveHistory};
use crate::machine::{DragState, PathMachine, Transition};
use crate::metrics::StepMetrics;
use crate::registry::ConnectionRegistry;
use crate::sequencer::LevelSequencer;

// Compile-time assertion: PlaySession is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<PlaySession>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`PlaySession::step()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    /// The tick that was just executed.
    pub tick: TickId,
    /// What the tick did.
    pub transition: Transition,
    /// Metrics for this tick.
    pub metrics: StepMetrics,
}

// ── Views ───────────────────────────────────────────────────────

/// Read-only view of one connection for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionView<'a> {
    /// Connection ID.
    pub id: ConnectionId,
    /// First endpoint.
    pub start: Cell,
    /// Second endpoint.
    pub end: Cell,
    /// Display colour.
    pub color: Color,
    /// Whether the path is committed.
    pub done: bool,
    /// Whether this is the connection being dragged.
    pub active: bool,
    /// The drawn path.
    pub points: &'a [Cell],
}

/// Read-only view of the whole board, borrowed from a [`PlaySession`].
#[derive(Clone, Copy, Debug)]
pub struct SessionView<'a> {
    grid: &'a OccupancyGrid,
    registry: &'a ConnectionRegistry,
    active: Option<usize>,
    level: usize,
}

impl<'a> SessionView<'a> {
    /// The occupancy grid.
    pub fn grid(&self) -> &'a OccupancyGrid {
        self.grid
    }

    /// Every connection in definition order.
    pub fn connections(&self) -> impl Iterator<Item = ConnectionView<'a>> + 'a {
        let registry = self.registry;
        let active = self.active;
        (0..registry.len()).filter_map(move |i| {
            let c = registry.get(i)?;
            Some(ConnectionView {
                id: c.id(),
                start: c.start(),
                end: c.end(),
                color: c.color(),
                done: c.is_done(),
                active: active == Some(i),
                points: registry.path(i),
            })
        })
    }

    /// The connection being dragged.
    pub fn active(&self) -> Option<ConnectionId> {
        self.active
            .and_then(|i| self.registry.get(i))
            .map(|c| c.id())
    }

    /// Index of the level in play.
    pub fn level_index(&self) -> usize {
        self.level
    }

    /// Fraction of cells filled.
    pub fn fill_ratio(&self) -> f64 {
        self.grid.fill_ratio()
    }

    /// Whether every connection is committed.
    pub fn is_complete(&self) -> bool {
        self.registry.all_done()
    }
}

// ── PlaySession ─────────────────────────────────────────────────

/// One player's game: the board, the level list, and the drag state.
///
/// # Example
///
/// ```
/// use pathlink_core::{Cell, Color, ConnectionDef, LevelDef, PointerInput};
/// use pathlink_engine::{PlaySession, SessionConfig, Transition};
///
/// let level = LevelDef::new(vec![ConnectionDef::new(1, (0, 0), (2, 0), Color::RED)]);
/// let mut session = PlaySession::new(SessionConfig::new(vec![level])).unwrap();
///
/// session.step(PointerInput::press(Cell::new(0, 0))).unwrap();
/// session.step(PointerInput::hold(Cell::new(1, 0))).unwrap();
/// let result = session.step(PointerInput::hold(Cell::new(2, 0))).unwrap();
/// assert!(matches!(result.transition, Transition::Committed { .. }));
/// assert!(session.is_level_complete());
/// ```
pub struct PlaySession {
    grid: OccupancyGrid,
    registry: ConnectionRegistry,
    machine: PathMachine,
    sequencer: LevelSequencer,
    history: MoveHistory,
    hover: HoverResolver,
    effects: Box<dyn EffectSink + Send>,
    tick: TickId,
    last_metrics: StepMetrics,
}

impl PlaySession {
    /// Validate `config` and load the first level.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = OccupancyGrid::new(config.grid_size)?;
        let mut registry = ConnectionRegistry::load(&LevelDef::default(), config.arena.clone())
            .map_err(|e| ConfigError::Level(LevelError::Storage(e.into())))?;
        let mut sequencer = LevelSequencer::new(config.levels);
        sequencer.load(0, &mut grid, &mut registry)?;
        let hover = HoverResolver::new(
            config.grid_size,
            config.cell_size,
            config.hover_margin,
            config.edge,
        );
        Ok(Self {
            grid,
            registry,
            machine: PathMachine::new(config.sampling),
            sequencer,
            history: MoveHistory::default(),
            hover,
            effects: config.effects,
            tick: TickId::default(),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Execute one tick.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] only when path storage fails. The session is
    /// not usable afterwards.
    pub fn step(&mut self, input: PointerInput) -> Result<StepResult, StepError> {
        let start = Instant::now();
        self.tick = TickId(self.tick.0 + 1);

        let mut sink = CountingSink {
            inner: &mut *self.effects,
            emitted: 0,
        };
        let transition =
            self.machine
                .step(&input, &mut self.grid, &mut self.registry, &mut sink)?;
        let effects_emitted = sink.emitted;

        match &transition {
            Transition::Grabbed {
                id,
                discarded: Some(path),
            } => self.history.record(HistoryEntry::Discarded {
                id: *id,
                path: path.clone(),
            }),
            Transition::Committed { id } => {
                if let Some(index) = self.registry.index_of(*id) {
                    self.history.record(HistoryEntry::Committed {
                        id: *id,
                        path: self.registry.path(index).into(),
                    });
                }
            }
            _ => {}
        }

        let arena = self.registry.arena_stats();
        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            active_path_len: self
                .machine
                .active()
                .map_or(0, |i| self.registry.path(i).len()),
            filled_cells: self.grid.filled_count(),
            done_connections: self.registry.done_count(),
            effects_emitted,
            arena_used_bytes: arena.used_bytes,
            arena_total_bytes: arena.total_bytes,
            arena_wasted_bytes: arena.wasted_bytes,
        };
        self.last_metrics = metrics.clone();
        Ok(StepResult {
            tick: self.tick,
            transition,
            metrics,
        })
    }

    /// Resolve a world-space pointer position and execute one tick.
    pub fn step_pointer(
        &mut self,
        x: f32,
        y: f32,
        buttons: PointerButtons,
    ) -> Result<StepResult, StepError> {
        let hovered = self.hover.resolve(x, y);
        self.step(PointerInput::new(hovered, buttons))
    }

    /// Load the next level. Past the last level nothing changes and
    /// [`LevelError::LevelIndexOutOfRange`] is returned.
    pub fn advance_level(&mut self) -> Result<(), LevelError> {
        self.sequencer.advance(&mut self.grid, &mut self.registry)?;
        self.after_load();
        Ok(())
    }

    /// Reload the current level from scratch.
    pub fn restart_level(&mut self) -> Result<(), LevelError> {
        self.sequencer.restart(&mut self.grid, &mut self.registry)?;
        self.after_load();
        Ok(())
    }

    fn after_load(&mut self) {
        self.machine.reset();
        self.history.clear();
    }

    /// Revert the most recent commit or discard.
    ///
    /// Returns `Ok(false)` while a drag is in progress or when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Result<bool, StepError> {
        if self.machine.active().is_some() {
            return Ok(false);
        }
        let Some(entry) = self.history.peek_undo().cloned() else {
            return Ok(false);
        };
        let applied = match &entry {
            HistoryEntry::Committed { id, path } => self.uncommit(*id, path),
            HistoryEntry::Discarded { id, path } => self.recommit(*id, path)?,
        };
        if applied {
            self.history.step_back();
            debug!("undo: connection {}", entry.id());
        }
        Ok(applied)
    }

    /// Re-apply the most recently undone edit.
    ///
    /// Returns `Ok(false)` while a drag is in progress or when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> Result<bool, StepError> {
        if self.machine.active().is_some() {
            return Ok(false);
        }
        let Some(entry) = self.history.peek_redo().cloned() else {
            return Ok(false);
        };
        let applied = match &entry {
            HistoryEntry::Committed { id, path } => self.recommit(*id, path)?,
            HistoryEntry::Discarded { id, path } => self.uncommit(*id, path),
        };
        if applied {
            self.history.step_forward();
            debug!("redo: connection {}", entry.id());
        }
        Ok(applied)
    }

    /// Remove the committed path `path` of connection `id`.
    fn uncommit(&mut self, id: ConnectionId, path: &[Cell]) -> bool {
        let Some(index) = self.registry.index_of(id) else {
            return false;
        };
        let done = self.registry.get(index).is_some_and(|c| c.is_done());
        if !done || self.registry.path(index) != path {
            return false;
        }
        for &p in path {
            self.grid.set_filled(p, false);
        }
        self.registry.take_path(index);
        self.registry.set_done(index, false);
        true
    }

    /// Commit `path` for connection `id`, which must be undrawn and whose
    /// cells must all be free.
    fn recommit(&mut self, id: ConnectionId, path: &[Cell]) -> Result<bool, StepError> {
        let Some(index) = self.registry.index_of(id) else {
            return Ok(false);
        };
        let undrawn = self
            .registry
            .get(index)
            .is_some_and(|c| !c.is_done() && c.is_empty());
        let free = path
            .iter()
            .all(|&p| self.grid.contains(p) && !self.grid.is_filled(p));
        if !undrawn || !free {
            return Ok(false);
        }
        self.registry.set_path(index, path)?;
        for &p in path {
            self.grid.set_filled(p, true);
        }
        self.registry.set_done(index, true);
        Ok(true)
    }

    // ── Read side ───────────────────────────────────────────────

    /// Borrow a read-only view of the board.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            grid: &self.grid,
            registry: &self.registry,
            active: self.machine.active(),
            level: self.sequencer.current(),
        }
    }

    /// Whether every connection in the level is committed.
    pub fn is_level_complete(&self) -> bool {
        self.registry.all_done()
    }

    /// Fraction of cells filled by committed paths.
    pub fn fill_ratio(&self) -> f64 {
        self.grid.fill_ratio()
    }

    /// ID of the connection being dragged.
    pub fn active_connection(&self) -> Option<ConnectionId> {
        self.view().active()
    }

    /// Drag state of the machine.
    pub fn drag_state(&self) -> DragState {
        self.machine.state()
    }

    /// Ticks executed so far.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Index of the level in play.
    pub fn level_index(&self) -> usize {
        self.sequencer.current()
    }

    /// Number of levels.
    pub fn level_count(&self) -> usize {
        self.sequencer.level_count()
    }

    /// Whether the level in play is the last one.
    pub fn is_last_level(&self) -> bool {
        self.sequencer.is_last()
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The occupancy grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The connection registry.
    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    /// The undo history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The pointer resolver used by [`step_pointer`](Self::step_pointer).
    pub fn hover_resolver(&self) -> &HoverResolver {
        &self.hover
    }
}

impl fmt::Debug for PlaySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaySession")
            .field("tick", &self.tick)
            .field("level", &self.sequencer.current())
            .field("state", &self.machine.state())
            .field("done", &self.registry.done_count())
            .field("connections", &self.registry.len())
            .finish()
    }
}

/// Forwards to the session's sink and counts what passed through.
struct CountingSink<'a> {
    inner: &'a mut dyn EffectSink,
    emitted: u32,
}

impl EffectSink for CountingSink<'_> {
    fn emit(&mut self, effect: PathEffect) {
        self.emitted += 1;
        self.inner.emit(effect);
    }
}
