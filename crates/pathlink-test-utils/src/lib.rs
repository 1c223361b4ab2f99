//! Test utilities and fixtures for Pathlink development.
//!
//! Provides level fixtures, a [`RecordingSink`] whose captured events can
//! be inspected after the session takes ownership of it, and a
//! [`DragScript`] builder for per-tick pointer input.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    classic_level_one, classic_level_two, classic_levels, corridor_level,
    single_connection_level,
};

use std::sync::{Arc, Mutex};

use pathlink_core::{Cell, EffectSink, PathEffect, PointerButtons, PointerInput};

/// Effect sink that records into shared storage.
///
/// Clone it before handing it to a session; the clone kept by the test
/// sees every event the session emits.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<PathEffect>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<PathEffect> {
        self.events.lock().expect("recording sink poisoned").clone()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.lock().expect("recording sink poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.lock().expect("recording sink poisoned").clear();
    }
}

impl EffectSink for RecordingSink {
    fn emit(&mut self, effect: PathEffect) {
        self.events
            .lock()
            .expect("recording sink poisoned")
            .push(effect);
    }
}

/// Builder for a sequence of per-tick pointer inputs.
///
/// ```
/// use pathlink_core::Cell;
/// use pathlink_test_utils::DragScript;
///
/// let ticks = DragScript::new()
///     .press((0, 0))
///     .drag(&[(1, 0), (2, 0)])
///     .release((2, 0))
///     .build();
/// assert_eq!(ticks.len(), 4);
/// assert_eq!(ticks[3].hovered, Some(Cell::new(2, 0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DragScript {
    ticks: Vec<PointerInput>,
}

impl DragScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press over `cell`.
    pub fn press(mut self, cell: impl Into<Cell>) -> Self {
        self.ticks.push(PointerInput::press(cell.into()));
        self
    }

    /// Hold over `cell`.
    pub fn hold(mut self, cell: impl Into<Cell>) -> Self {
        self.ticks.push(PointerInput::hold(cell.into()));
        self
    }

    /// One held tick per cell.
    pub fn drag(mut self, cells: &[(i32, i32)]) -> Self {
        for &c in cells {
            self.ticks.push(PointerInput::hold(c.into()));
        }
        self
    }

    /// Release over `cell`.
    pub fn release(mut self, cell: impl Into<Cell>) -> Self {
        self.ticks.push(PointerInput::release(cell.into()));
        self
    }

    /// Hold with the pointer outside the grid.
    pub fn hold_outside(mut self) -> Self {
        self.ticks
            .push(PointerInput::new(None, PointerButtons::HOLD));
        self
    }

    /// Release with the pointer outside the grid.
    pub fn release_outside(mut self) -> Self {
        self.ticks
            .push(PointerInput::new(None, PointerButtons::RELEASE));
        self
    }

    /// An idle tick over `cell`.
    pub fn idle(mut self, cell: impl Into<Cell>) -> Self {
        self.ticks.push(PointerInput::hover(cell.into()));
        self
    }

    /// The scripted ticks.
    pub fn build(self) -> Vec<PointerInput> {
        self.ticks
    }
}
