//! Fill pattern table entries.
//!
//! Lotus and Multiplan both fill cell backgrounds from a fixed table of
//! monochrome 8x8 bitmaps (48 entries in most Lotus variants, 64 in
//! Multiplan and some Mac Lotus files) rather than arbitrary gradients: a
//! pattern id selects a bitmap, which is then painted in `foreground` over
//! `background`.

use super::Color;

/// A fill-pattern table entry: which built-in 8x8 bitmap to use, and the
/// two colors to paint it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternStyle {
    /// Index into the built-in pattern table (0 = no fill).
    pub pattern_id: u16,
    /// Foreground (bitmap "on" pixels) color.
    pub foreground: Color,
    /// Background (bitmap "off" pixels) color.
    pub background: Color,
}

impl Default for PatternStyle {
    fn default() -> Self {
        Self {
            pattern_id: 0,
            foreground: Color::Auto,
            background: Color::Auto,
        }
    }
}

impl PatternStyle {
    /// No fill.
    pub fn none() -> Self {
        Self::default()
    }

    /// A solid fill: pattern 1 ("100% foreground") painted with `color`.
    pub fn solid(color: Color) -> Self {
        Self {
            pattern_id: 1,
            foreground: color,
            background: color,
        }
    }

    /// Whether this entry paints anything at all.
    pub fn is_none(&self) -> bool {
        self.pattern_id == 0
    }

    /// Resolve the pattern to a single representative color by averaging
    /// the foreground/background colors in proportion to the bitmap's
    /// fill density. Used by consumers that can't render a true bitmap
    /// fill and need one flat color instead.
    pub fn compose(&self) -> Color {
        if self.is_none() {
            return Color::Auto;
        }

        let density = pattern_density(self.pattern_id);
        let (fr, fg, fb) = self.foreground.to_rgb();
        let (br, bg, bb) = self.background.to_rgb();

        let mix = |f: u8, b: u8| -> u8 {
            let f = f as f64;
            let b = b as f64;
            (f * density + b * (1.0 - density)).round().clamp(0.0, 255.0) as u8
        };

        Color::rgb(mix(fr, br), mix(fg, bg), mix(fb, bb))
    }
}

/// Fraction of "on" bits in a built-in pattern bitmap (0.0-1.0).
///
/// Index 0 is "no fill" (treated as fully transparent/background); index 1
/// is solid foreground. The rest interpolate between the two as the patterns
/// get visually lighter, matching how the original applications order their
/// built-in pattern tables (solid, then progressively sparser hatches).
fn pattern_density(pattern_id: u16) -> f64 {
    match pattern_id {
        0 => 0.0,
        1 => 1.0,
        id => {
            let table_len = BUILTIN_PATTERN_COUNT as f64;
            let position = (id as f64).min(table_len - 1.0);
            (1.0 - (position - 1.0) / (table_len - 2.0)).clamp(0.0, 1.0)
        }
    }
}

/// Number of entries in the larger (Multiplan/Mac Lotus) built-in pattern
/// table. DOS Lotus variants use only the first 48.
pub const BUILTIN_PATTERN_COUNT: u16 = 64;

/// Number of entries in the DOS Lotus built-in pattern table.
pub const BUILTIN_PATTERN_COUNT_DOS: u16 = 48;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fill_composes_to_auto() {
        assert_eq!(PatternStyle::none().compose(), Color::Auto);
    }

    #[test]
    fn solid_fill_composes_to_its_color() {
        let style = PatternStyle::solid(Color::RED);
        assert_eq!(style.compose(), Color::RED);
    }

    #[test]
    fn sparse_pattern_leans_toward_background() {
        let style = PatternStyle {
            pattern_id: 48,
            foreground: Color::BLACK,
            background: Color::WHITE,
        };
        let (r, _, _) = style.compose().to_rgb();
        assert!(r > 0);
    }
}
