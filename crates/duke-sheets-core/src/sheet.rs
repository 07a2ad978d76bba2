//! Sheet type: one tab of a [`crate::Document`].

use std::collections::{BTreeMap, HashMap};

use crate::cell::{CellAddress, CellContent, CellData, CellRange, CellStorage};
use crate::column::ColumnFormat;
use crate::comment::CellComment;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{Error, Result};
use crate::row::RowFormat;
use crate::{MAX_COLUMNS, MAX_ROWS};

/// Default column width in characters, used for any column with no explicit
/// [`ColumnFormat`].
const DEFAULT_COLUMN_WIDTH: f64 = 9.0;

/// Default row height in points, used for any row with no explicit
/// [`RowFormat`].
const DEFAULT_ROW_HEIGHT: f64 = 14.0;

/// How a row's style id was recorded before the parent-chain fix-up pass
/// (§4.E) resolves it to a concrete id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowStyleLink {
    /// The row carries its own style id directly.
    Own(u32),
    /// The row has no style of its own and inherits from another row.
    Parent(u32),
}

/// One tab of a [`crate::Document`]: cell storage, column/row formatting,
/// the row-style parent chain, and comments.
#[derive(Debug)]
pub struct Sheet {
    name: String,
    cells: CellStorage,
    columns: BTreeMap<u16, ColumnFormat>,
    rows: BTreeMap<u32, RowFormat>,
    row_styles: BTreeMap<u32, RowStyleLink>,
    resolved_row_styles: BTreeMap<u32, u32>,
    comments: HashMap<(u32, u16), CellComment>,
    visible: bool,
    default_style_id: u32,
}

impl Sheet {
    /// A new, empty sheet.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            columns: BTreeMap::new(),
            rows: BTreeMap::new(),
            row_styles: BTreeMap::new(),
            resolved_row_styles: BTreeMap::new(),
            comments: HashMap::new(),
            visible: true,
            default_style_id: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn default_style_id(&self) -> u32 {
        self.default_style_id
    }

    pub fn set_default_style_id(&mut self, style_id: u32) {
        self.default_style_id = style_id;
    }

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLUMNS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLUMNS - 1));
        }
        Ok(())
    }

    // === Cell access ===

    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    pub fn cell_at_mut(&mut self, row: u32, col: u16) -> Option<&mut CellData> {
        self.cells.get_mut(row, col)
    }

    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    pub fn content_at(&self, row: u32, col: u16) -> &CellContent {
        self.cells
            .get(row, col)
            .map(|c| &c.content)
            .unwrap_or(&CellContent::Empty)
    }

    pub fn set_cell_content(&mut self, row: u32, col: u16, content: CellContent) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set_content(row, col, content);
        Ok(())
    }

    pub fn set_cell_style(&mut self, row: u32, col: u16, style_id: u32) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set_style(row, col, style_id);
        Ok(())
    }

    pub fn clear_cell(&mut self, row: u32, col: u16) {
        self.cells.remove(row, col);
    }

    /// The style id that applies to a cell: its own explicit id if nonzero,
    /// else the row's resolved style, else the sheet default.
    pub fn effective_style_id(&self, row: u32, col: u16) -> u32 {
        if let Some(cell) = self.cells.get(row, col) {
            if cell.style_id != 0 {
                return cell.style_id;
            }
        }
        if let Some(&style_id) = self.resolved_row_styles.get(&row) {
            return style_id;
        }
        self.default_style_id
    }

    pub fn used_range(&self) -> Option<CellRange> {
        self.cells
            .used_bounds()
            .map(|(min_row, min_col, max_row, max_col)| {
                CellRange::new(
                    CellAddress::new(min_row, min_col),
                    CellAddress::new(max_row, max_col),
                )
            })
    }

    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.cells.iter()
    }

    // === Merged cells ===

    pub fn merged_regions(&self) -> &[CellRange] {
        self.cells.merged_regions()
    }

    pub fn merge_cells(&mut self, range: CellRange) -> Result<()> {
        for existing in self.cells.merged_regions() {
            if range.overlaps(existing) {
                return Err(Error::MergedCellConflict(range.to_a1_string()));
            }
        }
        self.cells.add_merged_region(range);
        Ok(())
    }

    // === Column formatting ===

    /// The format for `col`, falling back to a single-width default.
    pub fn column_format(&self, col: u16) -> ColumnFormat {
        self.columns
            .get(&col)
            .copied()
            .unwrap_or_else(|| ColumnFormat::with_width(DEFAULT_COLUMN_WIDTH, 1))
    }

    pub fn set_column_format(&mut self, col: u16, format: ColumnFormat) -> Result<()> {
        if col >= MAX_COLUMNS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLUMNS - 1));
        }
        self.columns.insert(col, format);
        Ok(())
    }

    pub fn column_width(&self, col: u16) -> f64 {
        self.column_format(col).width
    }

    // === Row formatting ===

    pub fn row_format(&self, row: u32) -> RowFormat {
        self.rows.get(&row).copied().unwrap_or_default()
    }

    pub fn set_row_format(&mut self, row: u32, format: RowFormat) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        self.rows.insert(row, format);
        Ok(())
    }

    pub fn row_height(&self, row: u32) -> f64 {
        self.row_format(row).height.unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    // === Row style parent chain (§4.E) ===

    /// Record that `row` carries its own style id.
    pub fn set_row_style_own(&mut self, row: u32, style_id: u32) {
        self.row_styles.insert(row, RowStyleLink::Own(style_id));
    }

    /// Record that `row` inherits its style from `parent_row`.
    pub fn set_row_style_parent(&mut self, row: u32, parent_row: u32) {
        self.row_styles.insert(row, RowStyleLink::Parent(parent_row));
    }

    /// Resolve every row's style id, walking parent links until an explicit
    /// style id is found. Implemented as an explicit stack-based walk with a
    /// per-row visited set, so a cyclic parent chain breaks instead of
    /// recursing forever; each break is recorded into `diagnostics`.
    pub fn resolve_row_styles(&mut self, diagnostics: &mut Diagnostics) {
        self.resolved_row_styles.clear();

        let rows: Vec<u32> = self.row_styles.keys().copied().collect();
        for start_row in rows {
            if self.resolved_row_styles.contains_key(&start_row) {
                continue;
            }

            let mut path = Vec::new();
            let mut visited = std::collections::HashSet::new();
            let mut current = start_row;
            let resolved = loop {
                if !visited.insert(current) {
                    diagnostics.push(Diagnostic::CycleBroken { at_row: current });
                    break None;
                }
                if let Some(&style_id) = self.resolved_row_styles.get(&current) {
                    break Some(style_id);
                }
                match self.row_styles.get(&current) {
                    Some(RowStyleLink::Own(style_id)) => break Some(*style_id),
                    Some(RowStyleLink::Parent(parent_row)) => {
                        path.push(current);
                        current = *parent_row;
                    }
                    None => break None,
                }
            };

            if let Some(style_id) = resolved {
                for row in path {
                    self.resolved_row_styles.insert(row, style_id);
                }
                self.resolved_row_styles.insert(start_row, style_id);
            }
        }
    }

    /// The resolved style id for a row, if the fix-up pass has run and found
    /// one.
    pub fn row_style_id(&self, row: u32) -> Option<u32> {
        self.resolved_row_styles.get(&row).copied()
    }

    // === Absolute position (§4.F) ===

    /// The top-left corner of `(col, row)` in points, summing column widths
    /// and row heights up to that point. Widths are in characters and
    /// converted at a fixed 7pt-per-character approximation, matching the
    /// legacy formats' own column-width unit.
    pub fn absolute_position(&self, col: u16, row: u32) -> (f64, f64) {
        const POINTS_PER_CHAR: f64 = 7.0;
        let x: f64 = (0..col).map(|c| self.column_width(c) * POINTS_PER_CHAR).sum();
        let y: f64 = (0..row).map(|r| self.row_height(r)).sum();
        (x, y)
    }

    // === Comments ===

    pub fn set_comment_at(&mut self, row: u32, col: u16, comment: CellComment) {
        self.comments.insert((row, col), comment);
    }

    pub fn comment_at(&self, row: u32, col: u16) -> Option<&CellComment> {
        self.comments.get(&(row, col))
    }

    pub fn remove_comment_at(&mut self, row: u32, col: u16) -> Option<CellComment> {
        self.comments.remove(&(row, col))
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn comments(&self) -> impl Iterator<Item = ((u32, u16), &CellComment)> {
        self.comments.iter().map(|(&k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sheet_is_empty() {
        let sheet = Sheet::new("Budget");
        assert_eq!(sheet.name(), "Budget");
        assert!(sheet.is_empty());
        assert!(sheet.used_range().is_none());
    }

    #[test]
    fn cell_style_falls_back_to_row_then_sheet_default() {
        let mut sheet = Sheet::new("Data");
        sheet.set_default_style_id(1);
        sheet.set_row_style_own(5, 2);

        let mut diagnostics = Diagnostics::new();
        sheet.resolve_row_styles(&mut diagnostics);

        assert_eq!(sheet.effective_style_id(5, 0), 2);
        assert_eq!(sheet.effective_style_id(6, 0), 1);

        sheet.set_cell_style(5, 0, 9).unwrap();
        assert_eq!(sheet.effective_style_id(5, 0), 9);
    }

    #[test]
    fn row_style_parent_chain_resolves_through_ancestors() {
        let mut sheet = Sheet::new("Data");
        sheet.set_row_style_own(0, 7);
        sheet.set_row_style_parent(1, 0);
        sheet.set_row_style_parent(2, 1);

        let mut diagnostics = Diagnostics::new();
        sheet.resolve_row_styles(&mut diagnostics);

        assert_eq!(sheet.row_style_id(2), Some(7));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn row_style_cycle_is_broken_and_reported() {
        let mut sheet = Sheet::new("Data");
        sheet.set_row_style_parent(0, 1);
        sheet.set_row_style_parent(1, 0);

        let mut diagnostics = Diagnostics::new();
        sheet.resolve_row_styles(&mut diagnostics);

        assert_eq!(sheet.row_style_id(0), None);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn merge_rejects_overlap() {
        let mut sheet = Sheet::new("Data");
        let range = CellRange::new(CellAddress::new(0, 0), CellAddress::new(2, 2));
        sheet.merge_cells(range).unwrap();

        let overlapping = CellRange::new(CellAddress::new(1, 1), CellAddress::new(3, 3));
        assert!(sheet.merge_cells(overlapping).is_err());
    }

    #[test]
    fn absolute_position_sums_preceding_widths_and_heights() {
        let mut sheet = Sheet::new("Data");
        sheet.set_column_format(0, ColumnFormat::with_width(10.0, 1)).unwrap();
        sheet.set_row_format(0, RowFormat::with_height(20.0)).unwrap();

        let (x, y) = sheet.absolute_position(1, 1);
        assert!((x - 70.0).abs() < 0.001);
        assert!((y - 20.0).abs() < 0.001);
    }

    #[test]
    fn comment_lifecycle() {
        let mut sheet = Sheet::new("Data");
        assert_eq!(sheet.comment_count(), 0);

        sheet.set_comment_at(0, 0, CellComment::new("Ada", "check this"));
        assert_eq!(sheet.comment_count(), 1);
        assert_eq!(sheet.comment_at(0, 0).unwrap().author, "Ada");

        let removed = sheet.remove_comment_at(0, 0);
        assert!(removed.is_some());
        assert_eq!(sheet.comment_count(), 0);
    }
}
