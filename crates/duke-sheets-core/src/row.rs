//! Row formatting.

use crate::cell::CellData;

/// Per-row formatting. Row-level *style* (the font/border/fill a whole row
/// falls back to) is not carried here: it lives in the sheet's row-style
/// pool, since Lotus sheets let a row's style reference a parent row's style
/// by id rather than embedding it inline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowFormat {
    /// Row height, in the source format's native unit (None = sheet default).
    pub height: Option<f64>,
    /// Whether `height` was computed by "minimal height" auto-fit rather
    /// than set explicitly by the user.
    pub is_minimal: bool,
    /// Whether this is a Multiplan frozen header row; meaningless for Lotus.
    pub is_header: bool,
}

impl RowFormat {
    /// A row with the sheet default height.
    pub fn new() -> Self {
        Self::default()
    }

    /// A row with an explicit height.
    pub fn with_height(height: f64) -> Self {
        Self {
            height: Some(height),
            is_minimal: false,
            is_header: false,
        }
    }
}

/// A row's cells, gathered for sequential emission.
#[derive(Debug)]
pub struct RowData<'a> {
    /// Row index.
    pub index: u32,
    /// Cells in this row, in column order.
    pub cells: Vec<(u16, &'a CellData)>,
}

impl<'a> RowData<'a> {
    /// Build row data from a list of (column, cell) pairs.
    pub fn new(index: u32, cells: Vec<(u16, &'a CellData)>) -> Self {
        Self { index, cells }
    }

    /// Look up a cell by column index.
    pub fn cell(&self, col: u16) -> Option<&CellData> {
        self.cells
            .iter()
            .find(|(c, _)| *c == col)
            .map(|(_, data)| *data)
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells in the row.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
