//! Fire-and-forget cosmetic events emitted by the path-drawing engine.
//!
//! Particle and audio collaborators subscribe through an [`EffectSink`].
//! The engine never depends on what a sink does with an event.

use crate::cell::{Cell, Direction};
use crate::color::Color;
use crate::id::ConnectionId;

/// A cosmetic event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathEffect {
    /// A path was extended forward onto `cell`.
    PointAdded {
        /// Connection being drawn.
        connection: ConnectionId,
        /// The new cell.
        cell: Cell,
        /// Step direction from the previous point, if it was adjacent.
        direction: Option<Direction>,
        /// Connection colour.
        color: Color,
    },
    /// A path reached its target and was committed.
    PathCommitted {
        /// The committed connection.
        connection: ConnectionId,
        /// Number of cells it now occupies.
        cells: usize,
        /// Connection colour.
        color: Color,
    },
    /// An in-progress path snapped back.
    PathAborted {
        /// The aborted connection.
        connection: ConnectionId,
    },
}

/// Consumer of [`PathEffect`]s.
pub trait EffectSink {
    /// Deliver one event. Must not fail; sinks drop what they cannot take.
    fn emit(&mut self, effect: PathEffect);
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EffectSink for NullSink {
    fn emit(&mut self, _effect: PathEffect) {}
}

impl EffectSink for Vec<PathEffect> {
    fn emit(&mut self, effect: PathEffect) {
        self.push(effect);
    }
}

impl<S: EffectSink + ?Sized> EffectSink for Box<S> {
    fn emit(&mut self, effect: PathEffect) {
        (**self).emit(effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<PathEffect> = Vec::new();
        sink.emit(PathEffect::PathAborted {
            connection: ConnectionId(1),
        });
        sink.emit(PathEffect::PathAborted {
            connection: ConnectionId(2),
        });
        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink[1],
            PathEffect::PathAborted {
                connection: ConnectionId(2)
            }
        );
    }

    #[test]
    fn boxed_sink_forwards() {
        let mut boxed: Box<dyn EffectSink> = Box::new(NullSink);
        boxed.emit(PathEffect::PathAborted {
            connection: ConnectionId(1),
        });
    }
}
