//! Prelude module - common imports for duke-sheets users
//!
//! ```rust
//! use duke_sheets::prelude::*;
//! ```

pub use crate::{
    // Dispatch
    open_path,
    open_reader,
    Error,
    Family,
    Options,
    Result,

    // Formula decoding
    formula_lotus,
    formula_multiplan,
    BinaryOperator,
    ExternalRef,
    FormulaError,
    FormulaExpr,
    FormulaResult,
    UnaryOperator,

    // Document structure
    CellAddress,
    CellComment,
    CellContent,
    CellData,
    CellErrorCode,
    CellRange,
    ColumnFormat,
    Diagnostic,
    Diagnostics,
    Document,
    DocumentSettings,
    EncryptionState,
    FileFormat,
    LinkEntry,
    LinkPool,
    NameEntry,
    NamePool,
    NameTarget,
    Range,
    RangeCell,
    RangeRow,
    RowData,
    RowFormat,
    SharedDataPool,
    SharedValue,
    Sheet,

    // Style types
    Alignment,
    Border,
    BorderLineKind,
    BorderSet,
    Color,
    FontStyle,
    GraphicStyle,
    HorizontalAlignment,
    Line,
    NumberFormat,
    NumberFormatKind,
    PaletteSize,
    PatternStyle,
    Style,
    StylePool,
    VerticalAlignment,

    // Chart types
    Axis,
    AxisKind,
    AxisPosition,
    Chart,
    ChartAnchor,
    DataRange,
    Legend,
    LegendPosition,
    PointMarker,
    Series,
    SeriesType,
    TextZone,
    TextZoneContent,
    TextZoneKind,
};
