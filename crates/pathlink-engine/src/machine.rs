//! The path-drawing state machine.
//!
//! One [`PathMachine::step`] per tick turns a [`PointerInput`] into at most
//! one [`Transition`]:
//!
//! - **Idle, pressed** on a grabbable endpoint: grab it. A previously drawn
//!   path is unfilled and discarded, then the path is seeded with the
//!   grabbed endpoint.
//! - **Dragging, released**: commit when the release cell is the target
//!   endpoint and the path ends on it or right next to it, abort otherwise
//!   (including out of bounds).
//! - **Dragging, held** over a new cell: extend onto a free cell, retract
//!   when the cell is the second-to-last point, commit on reaching the
//!   target endpoint, abort on an occupied or foreign cell.
//!
//! Filled bits are only ever set by a commit. An in-progress path never
//! touches the filled layer, so an abort only has to drop the path.

use log::{debug, trace};

use pathlink_core::{
    Cell, CellPath, ConnectionId, EffectSink, PathEffect, PointerInput, StepError,
};
use pathlink_grid::OccupancyGrid;

use crate::registry::ConnectionRegistry;

/// How hovered cells become path points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathSampling {
    /// Record whatever cell is hovered this tick. A fast pointer can skip
    /// cells, leaving non-adjacent consecutive points.
    #[default]
    Hovered,
    /// Expand a jump into the rook walk (x first, then y) from the last
    /// point, validating each intermediate cell.
    Interpolated,
}

/// Machine state between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No connection is being drawn.
    #[default]
    Idle,
    /// The connection at registry index `active` is being drawn.
    Dragging {
        /// Definition-order index of the active connection.
        active: usize,
    },
}

/// Why a drag was aborted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// The pointer moved onto a filled cell or another connection's endpoint.
    Blocked {
        /// The refused cell.
        cell: Cell,
    },
    /// The button was released anywhere but next to (or on) the target
    /// endpoint.
    ReleasedOffTarget {
        /// The release cell.
        cell: Cell,
    },
    /// The button was released outside the grid.
    ReleasedOutOfBounds,
}

/// What a tick did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    #[default]
    None,
    /// A connection was grabbed.
    Grabbed {
        /// The grabbed connection.
        id: ConnectionId,
        /// Its previously committed path, if it had one.
        discarded: Option<CellPath>,
    },
    /// A point was appended to the active path.
    Extended {
        /// The active connection.
        id: ConnectionId,
        /// The last cell appended this tick.
        cell: Cell,
    },
    /// The last point of the active path was removed.
    Retracted {
        /// The active connection.
        id: ConnectionId,
        /// The removed cell.
        cell: Cell,
    },
    /// The active path was committed.
    Committed {
        /// The committed connection.
        id: ConnectionId,
    },
    /// The active path was dropped.
    Aborted {
        /// The aborted connection.
        id: ConnectionId,
        /// What triggered the abort.
        reason: AbortReason,
    },
}

impl Transition {
    /// Whether the tick ended a drag (commit or abort).
    pub fn ends_drag(&self) -> bool {
        matches!(self, Self::Committed { .. } | Self::Aborted { .. })
    }
}

/// The drag state machine.
///
/// Holds only the drag state and the previous tick's hovered cell; the
/// grid and registry are passed to every [`step`](Self::step).
#[derive(Clone, Debug, Default)]
pub struct PathMachine {
    state: DragState,
    last_hover: Option<Cell>,
    sampling: PathSampling,
}

impl PathMachine {
    /// Create an idle machine.
    pub fn new(sampling: PathSampling) -> Self {
        Self {
            state: DragState::Idle,
            last_hover: None,
            sampling,
        }
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Registry index of the active connection, if dragging.
    pub fn active(&self) -> Option<usize> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { active } => Some(active),
        }
    }

    /// Configured sampling mode.
    pub fn sampling(&self) -> PathSampling {
        self.sampling
    }

    /// Drop any drag and forget the last hover. Called on level load.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
        self.last_hover = None;
    }

    /// Run one tick.
    ///
    /// # Errors
    ///
    /// Only path storage can fail: [`StepError::AllocationFailed`] when the
    /// arena cannot grow, [`StepError::PathUnderflow`] on an internal
    /// retract of an empty path.
    pub fn step(
        &mut self,
        input: &PointerInput,
        grid: &mut OccupancyGrid,
        registry: &mut ConnectionRegistry,
        effects: &mut dyn EffectSink,
    ) -> Result<Transition, StepError> {
        let buttons = input.buttons;
        let transition = match self.state {
            DragState::Idle => match input.hovered {
                Some(cell) if buttons.pressed => self.grab(cell, grid, registry)?,
                _ => Transition::None,
            },
            DragState::Dragging { active } => {
                if buttons.released {
                    self.release(active, input.hovered, grid, registry, effects)?
                } else {
                    match input.hovered {
                        Some(cell) if buttons.down && Some(cell) != self.last_hover => {
                            self.drag_to(active, cell, grid, registry, effects)?
                        }
                        _ => Transition::None,
                    }
                }
            }
        };
        if input.hovered.is_some() {
            self.last_hover = input.hovered;
        }
        Ok(transition)
    }

    fn grab(
        &mut self,
        cell: Cell,
        grid: &mut OccupancyGrid,
        registry: &mut ConnectionRegistry,
    ) -> Result<Transition, StepError> {
        let Some(index) = registry.find_grabbable(cell, grid) else {
            return Ok(Transition::None);
        };
        let Some(id) = registry.get(index).map(|c| c.id()) else {
            return Ok(Transition::None);
        };

        let discarded = if registry.path(index).is_empty() {
            None
        } else {
            let path = registry.take_path(index);
            for &p in &path {
                grid.set_filled(p, false);
            }
            registry.set_done(index, false);
            debug!("connection {id}: discarded {} cells", path.len());
            Some(path)
        };

        registry.push_point(index, cell)?;
        self.state = DragState::Dragging { active: index };
        debug!("connection {id}: grabbed at {cell}");
        Ok(Transition::Grabbed { id, discarded })
    }

    fn release(
        &mut self,
        active: usize,
        hovered: Option<Cell>,
        grid: &mut OccupancyGrid,
        registry: &mut ConnectionRegistry,
        effects: &mut dyn EffectSink,
    ) -> Result<Transition, StepError> {
        let Some(id) = registry.get(active).map(|c| c.id()) else {
            self.state = DragState::Idle;
            return Ok(Transition::None);
        };
        match hovered {
            Some(cell) if self.completes(active, id, cell, grid, registry) => {
                if registry.path(active).last() != Some(&cell) {
                    registry.push_point(active, cell)?;
                }
                Ok(self.commit(active, id, grid, registry, effects))
            }
            Some(cell) => Ok(self.abort(
                active,
                id,
                AbortReason::ReleasedOffTarget { cell },
                registry,
                effects,
            )),
            None => Ok(self.abort(
                active,
                id,
                AbortReason::ReleasedOutOfBounds,
                registry,
                effects,
            )),
        }
    }

    /// Whether releasing over `cell` finishes the active path: `cell` is the
    /// target endpoint and the path already ends on it or next to it.
    fn completes(
        &self,
        active: usize,
        id: ConnectionId,
        cell: Cell,
        grid: &OccupancyGrid,
        registry: &ConnectionRegistry,
    ) -> bool {
        grid.endpoint_at(cell) == Some(id)
            && registry.target(active) == Some(cell)
            && registry
                .path(active)
                .last()
                .is_some_and(|&last| last == cell || last.is_adjacent(cell))
    }

    fn drag_to(
        &mut self,
        active: usize,
        cell: Cell,
        grid: &mut OccupancyGrid,
        registry: &mut ConnectionRegistry,
        effects: &mut dyn EffectSink,
    ) -> Result<Transition, StepError> {
        let last = registry.path(active).last().copied();
        let walk: CellPath = match (self.sampling, last) {
            (PathSampling::Interpolated, Some(last)) if !last.is_adjacent(cell) => {
                last.walk_to(cell)
            }
            _ => CellPath::from_slice(&[cell]),
        };

        let mut transition = Transition::None;
        for c in walk {
            transition = self.apply_cell(active, c, grid, registry, effects)?;
            if transition.ends_drag() {
                break;
            }
        }
        Ok(transition)
    }

    /// Apply one hovered cell to the active path.
    fn apply_cell(
        &mut self,
        active: usize,
        cell: Cell,
        grid: &mut OccupancyGrid,
        registry: &mut ConnectionRegistry,
        effects: &mut dyn EffectSink,
    ) -> Result<Transition, StepError> {
        let Some(conn) = registry.get(active) else {
            return Ok(Transition::None);
        };
        let (id, color) = (conn.id(), conn.color());
        let path = registry.path(active);
        let last = path.last().copied();
        let before_last = path.len().checked_sub(2).map(|i| path[i]);
        if last == Some(cell) {
            return Ok(Transition::None);
        }

        if !grid.is_free_for(cell, id) {
            return Ok(self.abort(
                active,
                id,
                AbortReason::Blocked { cell },
                registry,
                effects,
            ));
        }

        let is_target = registry.target(active) == Some(cell);
        if is_target && grid.endpoint_at(cell) == Some(id) {
            registry.push_point(active, cell)?;
            return Ok(self.commit(active, id, grid, registry, effects));
        }

        if before_last == Some(cell) {
            let removed = registry.pop_point(active)?;
            trace!("connection {id}: retract {removed}");
            return Ok(Transition::Retracted { id, cell: removed });
        }

        registry.push_point(active, cell)?;
        trace!("connection {id}: extend {cell}");
        effects.emit(PathEffect::PointAdded {
            connection: id,
            cell,
            direction: last.and_then(|l| l.direction_to(cell)),
            color,
        });
        Ok(Transition::Extended { id, cell })
    }

    fn commit(
        &mut self,
        active: usize,
        id: ConnectionId,
        grid: &mut OccupancyGrid,
        registry: &mut ConnectionRegistry,
        effects: &mut dyn EffectSink,
    ) -> Transition {
        let path = registry.path(active);
        for &p in path {
            grid.set_filled(p, true);
        }
        let cells = path.len();
        let color = registry.get(active).map(|c| c.color()).unwrap_or_default();
        registry.set_done(active, true);
        self.state = DragState::Idle;
        debug!("connection {id}: committed {cells} cells");
        effects.emit(PathEffect::PathCommitted {
            connection: id,
            cells,
            color,
        });
        Transition::Committed { id }
    }

    fn abort(
        &mut self,
        active: usize,
        id: ConnectionId,
        reason: AbortReason,
        registry: &mut ConnectionRegistry,
        effects: &mut dyn EffectSink,
    ) -> Transition {
        registry.take_path(active);
        self.state = DragState::Idle;
        debug!("connection {id}: aborted ({reason:?})");
        effects.emit(PathEffect::PathAborted { connection: id });
        Transition::Aborted { id, reason }
    }
}
