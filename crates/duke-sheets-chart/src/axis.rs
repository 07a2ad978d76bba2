//! Chart axes.
//!
//! A chart has four fixed axis slots (grounded on `WKSChart::m_axis`: X, Y,
//! a secondary Y, and Z for 3-D charts) rather than an open collection -
//! [`AxisPosition`] selects one of them.

/// Which of a chart's four fixed axis slots an [`Axis`] occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPosition {
    X,
    Y,
    YSecondary,
    Z,
}

/// How an axis' values are laid out, per `WKSChart::Axis::Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisKind {
    #[default]
    None,
    Numeric,
    Logarithmic,
    Sequence,
    SequenceSkipEmpty,
}

/// A chart axis.
#[derive(Debug, Clone, Default)]
pub struct Axis {
    pub kind: AxisKind,
    pub automatic_scaling: bool,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub show_grid: bool,
    pub show_label: bool,
    pub show_title: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub style: duke_sheets_core::GraphicStyle,
}

impl Axis {
    pub fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            automatic_scaling: true,
            ..Default::default()
        }
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.automatic_scaling = false;
        self.minimum = Some(min);
        self.maximum = Some(max);
        self
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.show_title = true;
        self.title = Some(title.into());
        self
    }
}
