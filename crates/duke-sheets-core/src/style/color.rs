//! Color representation and built-in palettes.
//!
//! Lotus 1-2-3 and Multiplan both address color through a small, fixed,
//! version-dependent palette rather than arbitrary RGB triples: early WK1
//! files choose among 8 colors, WK3/WK4/.123 among 16, and some Mac variants
//! carry a full 256-entry table. [`Color::Indexed`] keeps the raw index and
//! records which [`PaletteSize`] it was read against so it can be resolved
//! to RGB on demand.

use std::fmt;

/// Which built-in palette an indexed color is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteSize {
    /// 8-color palette (early WK1).
    Eight,
    /// 16-color palette (WK3/WK4/.123, most Multiplan variants).
    Sixteen,
    /// 256-color palette (Mac Lotus, extended Multiplan).
    TwoFiftySix,
}

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/default color (usually black for text, none for fill).
    #[default]
    Auto,

    /// Direct RGB color (no alpha channel in these formats).
    Rgb { r: u8, g: u8, b: u8 },

    /// Index into one of the fixed built-in palettes.
    Indexed { index: u16, palette: PaletteSize },
}

impl Color {
    /// Create an RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an indexed color against a specific built-in palette.
    pub const fn indexed(index: u16, palette: PaletteSize) -> Self {
        Color::Indexed { index, palette }
    }

    /// Whether this color is the automatic/default color.
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }

    /// Resolve to an RGB triple, consulting the appropriate built-in
    /// palette for indexed colors.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Auto => (0, 0, 0),
            Color::Rgb { r, g, b } => (*r, *g, *b),
            Color::Indexed { index, palette } => match palette {
                PaletteSize::Eight => PALETTE_8[(*index as usize) % PALETTE_8.len()],
                PaletteSize::Sixteen => PALETTE_16[(*index as usize) % PALETTE_16.len()],
                PaletteSize::TwoFiftySix => {
                    PALETTE_256[(*index as usize) % PALETTE_256.len()]
                }
            },
        }
    }

    /// Render as a `#RRGGBB` hex string.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color::Rgb { r: 0, g: 0, b: 255 };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { .. } => write!(f, "{}", self.to_hex()),
            Color::Indexed { index, .. } => write!(f, "indexed({})", index),
        }
    }
}

/// The 8-color palette used by early (WK1) Lotus files: black, the six
/// additive/subtractive primaries, and white.
pub const PALETTE_8: [(u8, u8, u8); 8] = [
    (0, 0, 0),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// The 16-color EGA-style palette used by WK3/WK4/.123 and Multiplan.
pub const PALETTE_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// A 256-entry palette, built by repeating the 16-color table across 16
/// intensity bands. Mac Lotus and extended Multiplan files reference this
/// when they store a full byte-sized color index.
pub const PALETTE_256: [(u8, u8, u8); 256] = build_palette_256();

const fn build_palette_256() -> [(u8, u8, u8); 256] {
    let mut table = [(0u8, 0u8, 0u8); 256];
    let mut i = 0;
    while i < 256 {
        let base = PALETTE_16[i % 16];
        let band = (i / 16) as u32;
        let scale = 255 - (band * 255 / 16);
        table[i] = (
            ((base.0 as u32 * scale) / 255) as u8,
            ((base.1 as u32 * scale) / 255) as u8,
            ((base.2 as u32 * scale) / 255) as u8,
        );
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_resolves_against_its_palette() {
        let c = Color::indexed(1, PaletteSize::Eight);
        assert_eq!(c.to_rgb(), (255, 0, 0));

        let c = Color::indexed(1, PaletteSize::Sixteen);
        assert_eq!(c.to_rgb(), (128, 0, 0));
    }

    #[test]
    fn palette_256_wraps_16_color_base() {
        assert_eq!(PALETTE_256[0], PALETTE_16[0]);
        assert_eq!(PALETTE_256[9], PALETTE_16[9]);
    }

    #[test]
    fn rgb_roundtrips_through_hex() {
        assert_eq!(Color::RED.to_hex(), "#FF0000");
    }

    #[test]
    fn auto_is_distinguishable() {
        assert!(Color::Auto.is_auto());
        assert!(!Color::RED.is_auto());
    }
}
