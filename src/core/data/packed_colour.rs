/// One display pixel packed as `0x00RRGGBB`, the layout the surface
/// backend consumes directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PackedColour(u32);

impl PackedColour {
    /// Colour assigned to points that never escape the iteration limit.
    pub const BLACK: Self = Self(0);

    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((b as u32) | ((g as u32) << 8) | ((r as u32) << 16))
    }

    #[must_use]
    pub const fn from_packed(value: u32) -> Self {
        // High byte is unused and kept zero so equality is exact
        Self(value & 0x00FF_FFFF)
    }

    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}
