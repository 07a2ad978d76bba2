//! Font style table entries.

use super::Color;

/// A font table entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FontStyle {
    /// Font family name (e.g., "Helv", "Tms Rmn").
    pub name: String,
    /// Font size in points.
    pub size: f64,
    /// Font color.
    pub color: Color,
    /// Bold.
    pub bold: bool,
    /// Italic.
    pub italic: bool,
    /// Underline style.
    pub underline: Underline,
    /// Strikethrough.
    pub strikeout: bool,
    /// Outline (hollow) text.
    pub outline: bool,
    /// Drop-shadow text.
    pub shadow: bool,
    /// Superscript/subscript.
    pub vertical_align: FontVerticalAlign,
    /// Hidden from display (protection attribute, not a rendering hint).
    pub hidden: bool,
    /// Windows/Mac script/language id the font was recorded under, if any.
    pub language: Option<u16>,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: "Helv".to_string(),
            size: 10.0,
            color: Color::Auto,
            bold: false,
            italic: false,
            underline: Underline::None,
            strikeout: false,
            outline: false,
            shadow: false,
            vertical_align: FontVerticalAlign::Baseline,
            hidden: false,
            language: None,
        }
    }
}

impl FontStyle {
    /// A new default font entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the font size, in points.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline.
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    /// Set the font color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Whether the underline is the "double" variant.
    pub fn is_double_underline(&self) -> bool {
        matches!(self.underline, Underline::Double | Underline::DoubleAccounting)
    }
}

impl std::hash::Hash for FontStyle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.color.hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.strikeout.hash(state);
        self.outline.hash(state);
        self.shadow.hash(state);
        self.vertical_align.hash(state);
        self.hidden.hash(state);
        self.language.hash(state);
    }
}

impl Eq for FontStyle {}

/// Underline attribute. Lotus/Multiplan distinguish single/double and, for
/// Lotus, an "accounting" variant that extends under trailing whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    /// No underline.
    #[default]
    None,
    /// Single underline.
    Single,
    /// Double underline.
    Double,
    /// Single accounting underline (extends to cell width).
    SingleAccounting,
    /// Double accounting underline.
    DoubleAccounting,
}

/// Superscript/subscript attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontVerticalAlign {
    /// Normal baseline.
    #[default]
    Baseline,
    /// Superscript.
    Superscript,
    /// Subscript.
    Subscript,
}
