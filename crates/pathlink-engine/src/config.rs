//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] is the builder input for [`PlaySession`](crate::PlaySession).
//! [`validate()`](SessionConfig::validate) checks every level against the
//! grid once, at construction, so that level loads during play cannot fail
//! on bad data.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use log::warn;

use pathlink_arena::ArenaConfig;
use pathlink_core::{EffectSink, LevelError, LevelSource, NullSink};
use pathlink_grid::{EdgeBehavior, GridError, OccupancyGrid};

use crate::machine::PathSampling;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a session.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid size is zero or too large.
    Grid(GridError),
    /// The first level failed to load.
    Level(LevelError),
    /// The level source is empty.
    NoLevels,
    /// A level definition is malformed.
    InvalidLevel {
        /// Index of the offending level.
        index: usize,
        /// Description of the problem.
        reason: String,
    },
    /// A level has more connections than `max_connections`.
    TooManyConnections {
        /// Index of the offending level.
        index: usize,
        /// Connections in the level.
        count: usize,
        /// Configured limit.
        max: usize,
    },
    /// `cell_size` is NaN, infinite, zero, or negative.
    InvalidCellSize {
        /// The invalid value.
        value: f32,
    },
    /// An arena size is zero.
    InvalidArena,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Level(e) => write!(f, "level: {e}"),
            Self::NoLevels => write!(f, "no levels defined"),
            Self::InvalidLevel { index, reason } => {
                write!(f, "level {index} is invalid: {reason}")
            }
            Self::TooManyConnections { index, count, max } => {
                write!(f, "level {index} has {count} connections, maximum is {max}")
            }
            Self::InvalidCellSize { value } => {
                write!(f, "cell_size must be finite and positive, got {value}")
            }
            Self::InvalidArena => write!(f, "arena region and sequence sizes must be non-zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Level(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<LevelError> for ConfigError {
    fn from(e: LevelError) -> Self {
        Self::Level(e)
    }
}

// ── SessionConfig ──────────────────────────────────────────────────

/// Complete configuration for a [`PlaySession`](crate::PlaySession).
pub struct SessionConfig {
    /// Ordered level list.
    pub levels: Box<dyn LevelSource + Send>,
    /// Grid side length in cells. Default: 10.
    pub grid_size: u32,
    /// Path arena sizing.
    pub arena: ArenaConfig,
    /// How pointer positions outside the grid resolve. Default: clamp.
    pub edge: EdgeBehavior,
    /// Cells outside the grid that still clamp onto the border under
    /// [`EdgeBehavior::Clamp`]. Default: 1.
    pub hover_margin: u32,
    /// Cell side length in world units for
    /// [`step_pointer`](crate::PlaySession::step_pointer). Default: 32.0.
    pub cell_size: f32,
    /// How hovered cells become path points. Default: hovered.
    pub sampling: PathSampling,
    /// Largest number of connections a level may define. Default: 12.
    pub max_connections: usize,
    /// Where cosmetic events go. Default: discarded.
    pub effects: Box<dyn EffectSink + Send>,
}

impl SessionConfig {
    /// Default grid side length.
    pub const DEFAULT_GRID_SIZE: u32 = 10;
    /// Default cell size in world units.
    pub const DEFAULT_CELL_SIZE: f32 = 32.0;
    /// Default hover margin in cells.
    pub const DEFAULT_HOVER_MARGIN: u32 = 1;
    /// Default connection limit per level.
    pub const DEFAULT_MAX_CONNECTIONS: usize = 12;

    /// Configuration with every default and the given levels.
    pub fn new(levels: impl LevelSource + Send + 'static) -> Self {
        Self {
            levels: Box::new(levels),
            grid_size: Self::DEFAULT_GRID_SIZE,
            arena: ArenaConfig::default(),
            edge: EdgeBehavior::default(),
            hover_margin: Self::DEFAULT_HOVER_MARGIN,
            cell_size: Self::DEFAULT_CELL_SIZE,
            sampling: PathSampling::default(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            effects: Box::new(NullSink),
        }
    }

    /// Replace the effect sink.
    pub fn with_effects(mut self, effects: impl EffectSink + Send + 'static) -> Self {
        self.effects = Box::new(effects);
        self
    }

    /// Replace the sampling mode.
    pub fn with_sampling(mut self, sampling: PathSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid dimensions.
        OccupancyGrid::new(self.grid_size)?;
        // 2. Arena sizes.
        if !self.arena.is_valid() {
            return Err(ConfigError::InvalidArena);
        }
        // 3. Pointer resolution.
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize {
                value: self.cell_size,
            });
        }
        // 4. At least one level.
        let count = self.levels.level_count();
        if count == 0 {
            return Err(ConfigError::NoLevels);
        }
        // 5. Every level.
        for index in 0..count {
            let Some(level) = self.levels.level(index) else {
                return Err(ConfigError::InvalidLevel {
                    index,
                    reason: "level source returned nothing".to_string(),
                });
            };
            if level.is_empty() {
                return Err(ConfigError::InvalidLevel {
                    index,
                    reason: "no connections".to_string(),
                });
            }
            if level.len() > self.max_connections {
                return Err(ConfigError::TooManyConnections {
                    index,
                    count: level.len(),
                    max: self.max_connections,
                });
            }
            let n = self.grid_size as i32;
            let in_bounds = |x: i32, y: i32| (0..n).contains(&x) && (0..n).contains(&y);
            let mut ids = HashSet::with_capacity(level.len());
            let mut cells = HashSet::with_capacity(level.len() * 2);
            for c in &level.connections {
                if !c.id.is_valid() {
                    return Err(ConfigError::InvalidLevel {
                        index,
                        reason: "connection id 0 is reserved".to_string(),
                    });
                }
                if !ids.insert(c.id) {
                    return Err(ConfigError::InvalidLevel {
                        index,
                        reason: format!("duplicate connection id {}", c.id),
                    });
                }
                if c.start == c.end {
                    return Err(ConfigError::InvalidLevel {
                        index,
                        reason: format!("connection {} starts and ends at {}", c.id, c.start),
                    });
                }
                for cell in [c.start, c.end] {
                    if !in_bounds(cell.x, cell.y) {
                        return Err(ConfigError::InvalidLevel {
                            index,
                            reason: format!(
                                "connection {} endpoint {} outside {}x{} grid",
                                c.id, cell, n, n
                            ),
                        });
                    }
                    if !cells.insert(cell) {
                        warn!(
                            "level {index}: endpoint {cell} is shared; connection {} owns it",
                            c.id
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("levels", &self.levels.level_count())
            .field("grid_size", &self.grid_size)
            .field("arena", &self.arena)
            .field("edge", &self.edge)
            .field("hover_margin", &self.hover_margin)
            .field("cell_size", &self.cell_size)
            .field("sampling", &self.sampling)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
