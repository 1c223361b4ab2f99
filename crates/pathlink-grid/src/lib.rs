//! Occupancy grid and pointer-to-cell resolution for Pathlink.
//!
//! The [`OccupancyGrid`] is the shared board every connection draws on.
//! It carries two layers over the same `N×N` cells:
//!
//! - the **endpoint layer**, written once per level load with the ID of
//!   the connection whose start or end sits on each cell, and
//! - the **filled layer**, the dynamic exclusivity bitmap set by commits
//!   and cleared by aborts.
//!
//! [`HoverResolver`] turns a world-space pointer position into the cell
//! the engine should see, applying the configured [`EdgeBehavior`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid;
pub mod hover;

pub use edge::EdgeBehavior;
pub use error::GridError;
pub use grid::OccupancyGrid;
pub use hover::HoverResolver;
