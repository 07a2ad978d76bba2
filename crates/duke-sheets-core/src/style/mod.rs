//! Style table types.
//!
//! This module contains the per-family style tables and the composed
//! per-cell [`Style`] ("cell-format") that references into them:
//! - [`FontStyle`] - font table entries
//! - [`Color`] / [`PaletteSize`] - built-in color palettes
//! - [`PatternStyle`] - fill-pattern table entries
//! - [`Line`] - standalone line style entries (chart/graphic use)
//! - [`Border`] / [`BorderSet`] - cell border edges
//! - [`GraphicStyle`] - drawn-object (chart wall/floor/plot area) style
//! - [`NumberFormat`] - numeric display format
//! - [`Alignment`] - text alignment
//! - [`Style`] - a complete cell format

mod alignment;
mod border;
mod color;
mod font;
mod graphic;
mod line;
mod number_format;
mod pattern;
mod pool;

pub use alignment::{Alignment, HorizontalAlignment, ReadingOrder, VerticalAlignment};
pub use border::{Border, BorderLineKind, BorderSet};
pub use color::{Color, PaletteSize, PALETTE_16, PALETTE_256, PALETTE_8};
pub use font::{FontStyle, FontVerticalAlign, Underline};
pub use graphic::GraphicStyle;
pub use line::Line;
pub use number_format::{NumberFormat, NumberFormatKind};
pub use pattern::PatternStyle;
pub use pool::StylePool;

/// A complete cell format: a font-table reference plus the per-cell
/// attributes Lotus/Multiplan store inline (borders, fill, numeric format,
/// prefix/suffix label characters, alignment, protection).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Id into the document's font table.
    pub font_id: u32,
    /// The four border edges.
    pub borders: BorderSet,
    /// Background fill.
    pub fill: PatternStyle,
    /// Numeric display format.
    pub number_format: NumberFormat,
    /// Leading label-prefix character stored with text cells in some Lotus
    /// versions (e.g. `'`, `"`, `^` for left/right/center alignment); kept
    /// on the style so cells that share a format share the prefix too.
    pub prefix: Option<char>,
    /// Trailing suffix string (Multiplan "format" suffix, e.g. a unit).
    pub suffix: Option<String>,
    /// Text alignment (horizontal/vertical/wrap/rotation/indent).
    pub alignment: Alignment,
    /// Cell protection.
    pub protection: Protection,
}

impl Style {
    /// A new default style (font id 0, no borders/fill, General format).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font table reference.
    pub fn with_font_id(mut self, font_id: u32) -> Self {
        self.font_id = font_id;
        self
    }

    /// Set the fill.
    pub fn with_fill(mut self, fill: PatternStyle) -> Self {
        self.fill = fill;
        self
    }

    /// Set the numeric format.
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Set horizontal alignment.
    pub fn with_horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    /// Enable text wrapping.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = wrap;
        self
    }
}

/// Cell protection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Protection {
    /// Cell is locked (protected when the sheet is protected).
    pub locked: bool,
    /// Formula is hidden when the sheet is protected.
    pub hidden: bool,
}

impl Protection {
    /// Default protection: locked, not hidden.
    pub fn new() -> Self {
        Self {
            locked: true,
            hidden: false,
        }
    }

    /// Unlocked protection.
    pub fn unlocked() -> Self {
        Self {
            locked: false,
            hidden: false,
        }
    }
}

impl std::hash::Hash for Style {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.font_id.hash(state);
        self.borders.hash(state);
        self.fill.hash(state);
        self.number_format.hash(state);
        self.prefix.hash(state);
        self.suffix.hash(state);
        self.alignment.hash(state);
        self.protection.locked.hash(state);
        self.protection.hidden.hash(state);
    }
}

impl Eq for Style {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_has_no_font_or_borders() {
        let style = Style::new();
        assert_eq!(style.font_id, 0);
        assert!(style.borders.is_empty());
        assert!(style.fill.is_none());
    }

    #[test]
    fn builder_methods_compose() {
        let style = Style::new()
            .with_font_id(3)
            .with_fill(PatternStyle::solid(Color::RED))
            .with_wrap(true);

        assert_eq!(style.font_id, 3);
        assert!(!style.fill.is_none());
        assert!(style.alignment.wrap_text);
    }
}
