//! Opaque display colour attached to each connection.

/// RGBA colour. The engine never interprets it; it is carried through to
/// the renderer and to cosmetic effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Red.
    pub const RED: Color = Color::rgb(230, 41, 55);
    /// Green.
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    /// Blue.
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    /// Orange.
    pub const ORANGE: Color = Color::rgb(255, 161, 0);
    /// Purple.
    pub const PURPLE: Color = Color::rgb(200, 122, 255);
    /// Brown.
    pub const BROWN: Color = Color::rgb(127, 106, 79);
}
