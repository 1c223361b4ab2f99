//! Core types and traits for the Pathlink puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: grid
//! cells and directions, connection IDs, pointer input, static level
//! definitions, cosmetic effect events, error types, and the traits
//! through which excluded collaborators (level data, effect consumers)
//! plug into the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod color;
pub mod effect;
pub mod error;
pub mod id;
pub mod input;
pub mod level;
pub mod traits;

pub use cell::{Cell, CellPath, Direction};
pub use color::Color;
pub use effect::{EffectSink, NullSink, PathEffect};
pub use error::{LevelError, StepError};
pub use id::{ConnectionId, TickId};
pub use input::{PointerButtons, PointerInput};
pub use level::{ConnectionDef, LevelDef};
pub use traits::LevelSource;
