//! Colours and the path gradient.

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Colour every tile kind is drawn with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub empty: Color,
    pub obstacle: Color,
    pub start: Color,
    pub goal: Color,
    pub frontier: Color,
    pub finalized: Color,
    /// First colour of the path gradient.
    pub path_start: Color,
    /// Last colour of the path gradient.
    pub path_end: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: Color(0x0066FF),
            obstacle: Color(0x0C4DA2),
            start: Color(0xFFDD00),
            goal: Color(0xEB0A1E),
            frontier: Color(0xFBAAB1),
            finalized: Color(0xFDD0D4),
            path_start: Color::from_rgb(255, 221, 0),
            path_end: Color::from_rgb(235, 10, 30),
        }
    }
}

/// Linear interpolation between two colours, truncating each channel.
///
/// `factor` 0.0 gives `from`, 1.0 gives `to`.
pub fn gradient(from: Color, to: Color, factor: f64) -> Color {
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * factor) as u8;
    Color::from_rgb(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}

/// One gradient colour per path step, from `palette.path_start` at the start
/// to `palette.path_end` at the goal. A one-cell path gets the start colour.
pub fn path_colors(palette: &Palette, len: usize) -> Vec<Color> {
    if len <= 1 {
        return vec![palette.path_start; len];
    }
    let last = (len - 1) as f64;
    (0..len)
        .map(|step| gradient(palette.path_start, palette.path_end, step as f64 / last))
        .collect()
}
