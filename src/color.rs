//! Packed RGB565 colors
//!
//! The core treats colors as opaque 16-bit values; the only operation it
//! performs on them is brightness scaling for fades.

use serde::{Deserialize, Serialize};

/// A 16-bit color with 5:6:5 red/green/blue channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const ORANGE: Color = Color(0xFD20);
    pub const INDIGO: Color = Color(0x4810);
    pub const VIOLET: Color = Color(0x8010);

    /// Goal celebration palette, in display order
    pub const RAINBOW: [Color; 7] = [
        Color::RED,
        Color::ORANGE,
        Color::YELLOW,
        Color::GREEN,
        Color::BLUE,
        Color::INDIGO,
        Color::VIOLET,
    ];

    #[inline]
    pub fn raw(self) -> u16 {
        self.0
    }

    /// Red (0..=31), green (0..=63), blue (0..=31)
    #[inline]
    pub fn channels(self) -> (u16, u16, u16) {
        ((self.0 >> 11) & 0x1F, (self.0 >> 5) & 0x3F, self.0 & 0x1F)
    }

    /// Scale every channel by `factor` (clamped to 0..=1), truncating
    pub fn scale(self, factor: f32) -> Color {
        let factor = factor.clamp(0.0, 1.0);
        let (r, g, b) = self.channels();
        let r = (r as f32 * factor) as u16;
        let g = (g as f32 * factor) as u16;
        let b = (b as f32 * factor) as u16;
        Color((r << 11) | (g << 5) | b)
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}
