//! Pathlink: the path-drawing and grid-occupancy engine of a
//! connect-the-endpoints puzzle.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Pathlink sub-crates. Rendering, audio, and particles stay outside:
//! the host feeds one [`prelude::PointerInput`] per frame and reads the
//! board back through [`prelude::SessionView`].
//!
//! # Quick start
//!
//! ```rust
//! use pathlink::prelude::*;
//!
//! let level = LevelDef::new(vec![
//!     ConnectionDef::new(1, (0, 0), (3, 0), Color::RED),
//!     ConnectionDef::new(2, (0, 2), (3, 2), Color::BLUE),
//! ]);
//! let mut config = SessionConfig::new(vec![level]);
//! config.grid_size = 4;
//! let mut session = PlaySession::new(config).unwrap();
//!
//! session.step(PointerInput::press(Cell::new(0, 0))).unwrap();
//! session.step(PointerInput::hold(Cell::new(1, 0))).unwrap();
//! session.step(PointerInput::hold(Cell::new(2, 0))).unwrap();
//! let result = session.step(PointerInput::hold(Cell::new(3, 0))).unwrap();
//! assert_eq!(result.transition, Transition::Committed { id: ConnectionId(1) });
//! assert_eq!(session.grid().filled_count(), 4);
//! assert!(!session.is_level_complete());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pathlink-core` | Cells, ids, colours, level definitions, pointer input, effects |
//! | [`arena`] | `pathlink-arena` | Region arena backing path storage |
//! | [`grid`] | `pathlink-grid` | Occupancy grid and hover resolution |
//! | [`engine`] | `pathlink-engine` | Drag state machine, registry, sequencer, session |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`pathlink-core`).
pub use pathlink_core as types;

/// Path storage (`pathlink-arena`).
///
/// Most users never touch this directly; [`arena::ArenaConfig`] is the
/// only knob exposed through the session configuration.
pub use pathlink_arena as arena;

/// Occupancy grid and pointer-to-cell resolution (`pathlink-grid`).
pub use pathlink_grid as grid;

/// Drag state machine and play session (`pathlink-engine`).
///
/// [`engine::PlaySession`] is the entry point; [`engine::PathMachine`] and
/// [`engine::ConnectionRegistry`] are available for hosts that drive the
/// pieces themselves.
pub use pathlink_engine as engine;

/// Common imports for typical Pathlink usage.
///
/// ```rust
/// use pathlink::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use pathlink_core::{
        Cell, Color, ConnectionDef, ConnectionId, Direction, EffectSink, LevelDef, LevelSource,
        NullSink, PathEffect, PointerButtons, PointerInput, TickId,
    };

    // Errors
    pub use pathlink_core::{LevelError, StepError};
    pub use pathlink_engine::ConfigError;

    // Grid
    pub use pathlink_grid::{EdgeBehavior, OccupancyGrid};

    // Engine
    pub use pathlink_engine::{
        channel_sink, AbortReason, DragState, PathSampling, PlaySession, SessionConfig,
        SessionView, StepMetrics, StepResult, Transition,
    };
}
