//! Growing bump arena and arena-backed sequences for Pathlink.
//!
//! Paths are stored in level-scoped arenas: every allocation is a bump
//! in the current region, nothing is freed individually, and the whole
//! arena is rewound when a level is (re)loaded.
//!
//! # Architecture
//!
//! ```text
//! GrowingArena<T>
//! └── Region<T>[]  (bump-allocated Vec<T>, default 4KB each)
//!     ▲
//!     └── Block { region, offset, len }  (handle held by ArenaVec<T>)
//! ```
//!
//! An [`ArenaVec`] owns a [`Block`] and a length. When it fills up it asks
//! the arena for a block twice as large and copies itself across; the old
//! block stays allocated until the next [`reset`](GrowingArena::reset).
//!
//! All allocations are zero-initialised `Vec<T>` slots. No `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod region;
pub mod vec;

pub use arena::{ArenaStats, Block, GrowingArena};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use vec::ArenaVec;
