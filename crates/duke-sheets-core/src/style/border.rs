//! Border style table entries.

use super::Color;

/// The shape a border edge is drawn in.
///
/// This is the closed set Lotus/Multiplan actually distinguish - nothing
/// like Excel's thirteen-way thin/medium/thick x dash/dot cross product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineKind {
    /// No border.
    #[default]
    None,
    /// A single line.
    Simple,
    /// Two parallel lines.
    Double,
    /// Three parallel lines.
    Triple,
    /// A dotted line.
    Dot,
    /// A dotted line with larger, more widely spaced dots.
    LargeDot,
    /// A dashed line.
    Dash,
}

/// A single border edge: shape, overall width, and color.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    /// Line shape.
    pub kind: BorderLineKind,
    /// Overall width, in points.
    pub width: f64,
    /// Line color.
    pub color: Color,
    /// For [`BorderLineKind::Double`]/[`BorderLineKind::Triple`], the
    /// relative width of each parallel line (as a fraction of `width`),
    /// outermost first. `None` means "evenly split".
    pub relative_widths: Option<Vec<f64>>,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            kind: BorderLineKind::None,
            width: 0.0,
            color: Color::Auto,
            relative_widths: None,
        }
    }
}

impl Border {
    /// No border.
    pub fn none() -> Self {
        Self::default()
    }

    /// A simple line of the given width and color.
    pub fn simple(width: f64, color: Color) -> Self {
        Self {
            kind: BorderLineKind::Simple,
            width,
            color,
            relative_widths: None,
        }
    }

    /// Whether this edge draws anything.
    pub fn is_none(&self) -> bool {
        matches!(self.kind, BorderLineKind::None)
    }
}

impl std::hash::Hash for Border {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.width.to_bits().hash(state);
        self.color.hash(state);
        if let Some(rel) = &self.relative_widths {
            for w in rel {
                w.to_bits().hash(state);
            }
        }
    }
}

impl Eq for Border {}

/// The four edges of a cell-format's border box.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderSet {
    /// Top edge.
    pub top: Border,
    /// Left edge.
    pub left: Border,
    /// Bottom edge.
    pub bottom: Border,
    /// Right edge.
    pub right: Border,
}

impl BorderSet {
    /// No borders on any edge.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same border on all four edges.
    pub fn all(border: Border) -> Self {
        Self {
            top: border.clone(),
            left: border.clone(),
            bottom: border.clone(),
            right: border,
        }
    }

    /// Whether every edge is empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.left.is_none() && self.bottom.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_border_set_is_empty() {
        assert!(BorderSet::new().is_empty());
    }

    #[test]
    fn all_applies_to_every_edge() {
        let set = BorderSet::all(Border::simple(1.0, Color::BLACK));
        assert!(!set.is_empty());
        assert_eq!(set.top.kind, BorderLineKind::Simple);
        assert_eq!(set.right.kind, BorderLineKind::Simple);
    }
}
