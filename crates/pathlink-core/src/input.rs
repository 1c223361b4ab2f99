//! Per-tick pointer input consumed by the path-drawing state machine.

use crate::cell::Cell;

/// State of the single primary action button for one tick.
///
/// `pressed` and `released` are edge-triggered (true only on the tick the
/// transition happened); `down` is level-triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerButtons {
    /// Button went down this tick.
    pub pressed: bool,
    /// Button is currently held.
    pub down: bool,
    /// Button went up this tick.
    pub released: bool,
}

impl PointerButtons {
    /// No button activity.
    pub const IDLE: Self = Self {
        pressed: false,
        down: false,
        released: false,
    };

    /// The tick the button goes down.
    pub const PRESS: Self = Self {
        pressed: true,
        down: true,
        released: false,
    };

    /// A tick with the button held.
    pub const HOLD: Self = Self {
        pressed: false,
        down: true,
        released: false,
    };

    /// The tick the button goes up.
    pub const RELEASE: Self = Self {
        pressed: false,
        down: false,
        released: true,
    };
}

/// Input for one simulation tick.
///
/// `hovered` is the grid cell under the pointer, already resolved against
/// the grid bounds by the caller (see `HoverResolver` in `pathlink-grid`).
/// `None` means the pointer is out of bounds.
///
/// # Examples
///
/// ```
/// use pathlink_core::{Cell, PointerInput};
///
/// let input = PointerInput::press(Cell::new(1, 9));
/// assert!(input.buttons.pressed);
/// assert_eq!(input.hovered, Some(Cell::new(1, 9)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerInput {
    /// Hovered in-bounds cell, or `None` when out of bounds.
    pub hovered: Option<Cell>,
    /// Button state for this tick.
    pub buttons: PointerButtons,
}

impl PointerInput {
    /// Build an input from its parts.
    pub fn new(hovered: Option<Cell>, buttons: PointerButtons) -> Self {
        Self { hovered, buttons }
    }

    /// Press over `cell`.
    pub fn press(cell: Cell) -> Self {
        Self::new(Some(cell), PointerButtons::PRESS)
    }

    /// Hold while hovering `cell`.
    pub fn hold(cell: Cell) -> Self {
        Self::new(Some(cell), PointerButtons::HOLD)
    }

    /// Release over `cell`.
    pub fn release(cell: Cell) -> Self {
        Self::new(Some(cell), PointerButtons::RELEASE)
    }

    /// Hover `cell` with no button activity.
    pub fn hover(cell: Cell) -> Self {
        Self::new(Some(cell), PointerButtons::IDLE)
    }
}
