//! Chart series.
//!
//! Grounded on `WKSChart::Serie`: a series carries a fixed type, a value
//! range (and an optional category range), an optional legend label, and a
//! point marker for line/scatter-style series.

use duke_sheets_core::CellRange;

/// A series' chart type. Fixed enum per the chart model: a chart's series
/// are not free-form, they're drawn from this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesType {
    Area,
    Bar,
    Bubble,
    Circle,
    Column,
    Gantt,
    Line,
    Radar,
    Ring,
    Scatter,
    Stock,
    Surface,
}

/// Point marker drawn at each data point of a line/scatter/radar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointMarker {
    #[default]
    None,
    Auto,
    Square,
    Diamond,
    ArrowUp,
    ArrowDown,
    ArrowRight,
    ArrowLeft,
    BowTie,
    Hourglass,
    Circle,
    Star,
    X,
    Plus,
    Asterisk,
    BarHorizontal,
    BarVertical,
}

/// A cell range a series (or a legend/title) draws data or text from. The
/// sheet name is carried alongside the range since a chart's data source
/// need not live on the same sheet the chart is anchored to.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRange {
    pub sheet: Option<String>,
    pub range: CellRange,
}

impl DataRange {
    pub fn new(range: CellRange) -> Self {
        Self { sheet: None, range }
    }

    pub fn on_sheet<S: Into<String>>(mut self, sheet: S) -> Self {
        self.sheet = Some(sheet.into());
        self
    }
}

/// One series within a chart.
#[derive(Debug, Clone)]
pub struct Series {
    pub kind: SeriesType,
    pub values: DataRange,
    pub categories: Option<DataRange>,
    /// Whether this series plots against the secondary Y axis.
    pub secondary_axis: bool,
    pub legend_range: Option<DataRange>,
    pub legend_text: Option<String>,
    pub point_marker: PointMarker,
    pub style: duke_sheets_core::GraphicStyle,
}

impl Series {
    pub fn new(kind: SeriesType, values: DataRange) -> Self {
        Self {
            kind,
            values,
            categories: None,
            secondary_axis: false,
            legend_range: None,
            legend_text: None,
            point_marker: PointMarker::default(),
            style: duke_sheets_core::GraphicStyle::default(),
        }
    }

    pub fn with_categories(mut self, categories: DataRange) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_legend_text<S: Into<String>>(mut self, text: S) -> Self {
        self.legend_text = Some(text.into());
        self
    }

    /// A series plotted 1-dimensionally (a line, not a filled shape) per
    /// `Serie::is1DStyle`: lines and radar series always, scatter series
    /// only when they have no point marker.
    pub fn is_one_dimensional(&self) -> bool {
        matches!(self.kind, SeriesType::Line | SeriesType::Radar)
            || (self.kind == SeriesType::Scatter && self.point_marker == PointMarker::None)
    }
}
