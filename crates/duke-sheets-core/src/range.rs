//! Read-only range view over a [`crate::Sheet`].
//!
//! A `Document` is build-once by a parser, so unlike the teacher's
//! `RangeMut` there is no mutable counterpart here: emitters read cells
//! through a `Range`, they never write through one.

use crate::cell::{CellAddress, CellContent, CellData, CellRange};
use crate::sheet::Sheet;

/// A view over a rectangular region of a sheet's cells.
pub struct Range<'a> {
    sheet: &'a Sheet,
    range: CellRange,
}

impl<'a> Range<'a> {
    pub fn new(sheet: &'a Sheet, range: CellRange) -> Self {
        Self { sheet, range }
    }

    pub fn range(&self) -> &CellRange {
        &self.range
    }

    pub fn start(&self) -> CellAddress {
        self.range.start
    }

    pub fn end(&self) -> CellAddress {
        self.range.end
    }

    pub fn row_count(&self) -> u32 {
        self.range.row_count()
    }

    pub fn col_count(&self) -> u16 {
        self.range.col_count()
    }

    pub fn cell_count(&self) -> u64 {
        self.range.cell_count()
    }

    /// Look up a cell by position relative to the range's start.
    pub fn cell(&self, row: u32, col: u16) -> Option<&CellData> {
        let abs_row = self.range.start.row + row;
        let abs_col = self.range.start.col + col;
        self.sheet.cell_at(abs_row, abs_col)
    }

    /// Iterate over every cell in the range, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = RangeCell<'a>> + '_ {
        let sheet = self.sheet;
        self.range.cells().map(move |addr| RangeCell {
            address: addr,
            data: sheet.cell_at(addr.row, addr.col),
        })
    }

    /// Iterate over the rows of the range.
    pub fn rows(&self) -> impl Iterator<Item = RangeRow<'a>> + '_ {
        let sheet = self.sheet;
        let start_col = self.range.start.col;
        let end_col = self.range.end.col;
        (self.range.start.row..=self.range.end.row).map(move |row| RangeRow {
            sheet,
            row,
            start_col,
            end_col,
        })
    }

    pub fn address(&self) -> String {
        self.range.to_a1_string()
    }
}

/// A single cell encountered while iterating a [`Range`].
pub struct RangeCell<'a> {
    pub address: CellAddress,
    pub data: Option<&'a CellData>,
}

impl<'a> RangeCell<'a> {
    pub fn content(&self) -> &CellContent {
        self.data.map(|d| &d.content).unwrap_or(&CellContent::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.data.map(|d| d.content.is_empty()).unwrap_or(true)
    }

    pub fn row(&self) -> u32 {
        self.address.row
    }

    pub fn col(&self) -> u16 {
        self.address.col
    }
}

/// A single row encountered while iterating a [`Range`].
pub struct RangeRow<'a> {
    sheet: &'a Sheet,
    row: u32,
    start_col: u16,
    end_col: u16,
}

impl<'a> RangeRow<'a> {
    pub fn index(&self) -> u32 {
        self.row
    }

    pub fn cells(&self) -> impl Iterator<Item = RangeCell<'a>> + '_ {
        let sheet = self.sheet;
        let row = self.row;
        (self.start_col..=self.end_col).map(move |col| RangeCell {
            address: CellAddress::new(row, col),
            data: sheet.cell_at(row, col),
        })
    }

    pub fn cell(&self, col_offset: u16) -> Option<&CellData> {
        let col = self.start_col + col_offset;
        if col <= self.end_col {
            self.sheet.cell_at(self.row, col)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellData;

    #[test]
    fn iterates_cells_in_range() {
        let mut sheet = Sheet::new("Data");
        sheet
            .set_cell_content(0, 0, CellContent::Number(1.0))
            .unwrap();
        sheet
            .set_cell_content(0, 1, CellContent::Number(2.0))
            .unwrap();

        let range = CellRange::new(CellAddress::new(0, 0), CellAddress::new(0, 1));
        let view = Range::new(&sheet, range);

        let values: Vec<_> = view.cells().map(|c| c.content().as_number()).collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn row_iteration_respects_column_bounds() {
        let mut sheet = Sheet::new("Data");
        sheet
            .set_cell_content(1, 2, CellContent::text("x"))
            .unwrap();

        let range = CellRange::new(CellAddress::new(0, 0), CellAddress::new(2, 2));
        let view = Range::new(&sheet, range);

        let row = view.rows().nth(1).unwrap();
        assert_eq!(row.index(), 1);
        assert!(row.cell(2).is_some());
        assert!(row.cell(0).is_none());
        let _: Option<&CellData> = row.cell(0);
    }
}
