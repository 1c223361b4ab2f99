//! Edge behavior for pointer positions just outside the grid.

/// How a pointer position outside the grid resolves.
///
/// - **Absorb**: any position outside the grid is out of bounds.
/// - **Clamp**: positions within the resolver's margin clamp onto the
///   nearest border cell; positions further out are out of bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeBehavior {
    /// Outside is out of bounds.
    Absorb,
    /// Snap onto the border within a margin.
    #[default]
    Clamp,
}
