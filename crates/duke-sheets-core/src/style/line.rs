//! Line style table entries.
//!
//! Distinct from [`super::border::Border`]: a `Line` is a standalone style
//! table entry referenced by graphic/chart styles (axis lines, gridlines,
//! series lines), not an edge of a cell's border box.

use super::Color;

/// A line style table entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Line width, in points.
    pub width: f64,
    /// Line color.
    pub color: Color,
    /// Index into the built-in dash-pattern table (0 = solid).
    pub dash_id: u16,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::Auto,
            dash_id: 0,
        }
    }
}

impl Line {
    /// A solid line of the given width and color.
    pub fn solid(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            dash_id: 0,
        }
    }

    /// Whether this line uses a solid (non-dashed) pattern.
    pub fn is_solid(&self) -> bool {
        self.dash_id == 0
    }
}

impl std::hash::Hash for Line {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.color.hash(state);
        self.dash_id.hash(state);
    }
}

impl Eq for Line {}
