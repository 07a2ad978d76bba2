//! Chart legend.
//!
//! Grounded on `WKSChart::Legend`: shown or not, either automatically
//! positioned relative to the plot area or pinned to an explicit point
//! position.

/// Where an automatically-positioned legend sits relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
pub struct Legend {
    pub show: bool,
    pub auto_position: bool,
    pub relative_position: Option<LegendPosition>,
    /// Explicit position in points, used when `auto_position` is false.
    pub position: (f32, f32),
    pub style: duke_sheets_core::GraphicStyle,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            show: false,
            auto_position: true,
            relative_position: Some(LegendPosition::Right),
            position: (0.0, 0.0),
            style: duke_sheets_core::GraphicStyle::default(),
        }
    }
}

impl Legend {
    pub fn shown_at(relative_position: LegendPosition) -> Self {
        Self {
            show: true,
            relative_position: Some(relative_position),
            ..Default::default()
        }
    }
}
