//! Graphic-object style table entries (chart walls, floors, plot areas).

use super::Color;

/// Style for a drawn graphic object: its outline, fill, and shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicStyle {
    /// Id of the [`super::Line`] table entry used for the outline, if any.
    pub line_id: Option<u32>,
    /// Ids of the color table entries used to compose the surface fill
    /// (a single solid fill uses one entry; patterned fills use two, as
    /// foreground/background, mirroring [`super::PatternStyle`]).
    pub surface_color_ids: Vec<u32>,
    /// Id of the [`super::PatternStyle`] table entry painted over the
    /// surface colors, if any.
    pub pattern_id: Option<u16>,
    /// Shadow color, if the object casts a drop shadow.
    pub shadow_color: Option<Color>,
}

impl Default for GraphicStyle {
    fn default() -> Self {
        Self {
            line_id: None,
            surface_color_ids: Vec::new(),
            pattern_id: None,
            shadow_color: None,
        }
    }
}

impl GraphicStyle {
    /// A style with no outline, fill, or shadow.
    pub fn none() -> Self {
        Self::default()
    }
}
