//! Sparse cell storage.
//!
//! Only non-empty cells are stored, keyed first by row then by column, so
//! large, mostly-empty Lotus/Multiplan sheets don't cost memory proportional
//! to their nominal row/column extent.

use std::collections::BTreeMap;

use super::CellContent;
use crate::CellRange;

/// Complete data for a single cell.
#[derive(Debug, Clone, Default)]
pub struct CellData {
    /// The cell's content.
    pub content: CellContent,
    /// Id into the document's style pool (0 = default style).
    pub style_id: u32,
}

impl CellData {
    /// Create a new cell with content and the default style.
    pub fn new(content: CellContent) -> Self {
        Self {
            content,
            style_id: 0,
        }
    }

    /// Create a new cell with content and an explicit style id.
    pub fn with_style(content: CellContent, style_id: u32) -> Self {
        Self { content, style_id }
    }

    /// An empty cell with the default style.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this cell is effectively empty (no content, default style).
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.style_id == 0
    }
}

/// Sparse row-major storage for sheet cells.
///
/// Structure: `BTreeMap<row, BTreeMap<col, CellData>>`. `BTreeMap` keeps rows
/// and, within a row, columns in ascending order, which record-stream
/// emitters rely on when they walk cells in file order.
#[derive(Debug, Default)]
pub struct CellStorage {
    rows: BTreeMap<u32, BTreeMap<u16, CellData>>,
    merged_regions: Vec<CellRange>,
    cached_bounds: Option<CachedBounds>,
}

#[derive(Debug, Clone, Copy)]
struct CachedBounds {
    min_row: u32,
    max_row: u32,
    min_col: u16,
    max_col: u16,
}

impl CellStorage {
    /// Create new, empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell's data.
    pub fn get(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Get a cell's data mutably.
    pub fn get_mut(&mut self, row: u32, col: u16) -> Option<&mut CellData> {
        self.rows.get_mut(&row).and_then(|r| r.get_mut(&col))
    }

    /// Set a cell's data. Storing an effectively-empty cell removes it.
    pub fn set(&mut self, row: u32, col: u16, data: CellData) {
        self.invalidate_bounds();

        if data.is_empty() {
            if let Some(row_map) = self.rows.get_mut(&row) {
                row_map.remove(&col);
                if row_map.is_empty() {
                    self.rows.remove(&row);
                }
            }
        } else {
            self.rows.entry(row).or_default().insert(col, data);
        }
    }

    /// Set just a cell's content, preserving its style id.
    pub fn set_content(&mut self, row: u32, col: u16, content: CellContent) {
        self.invalidate_bounds();

        if let Some(cell) = self.get_mut(row, col) {
            cell.content = content;
            if cell.is_empty() {
                self.set(row, col, CellData::empty());
            }
        } else if !content.is_empty() {
            self.set(row, col, CellData::new(content));
        }
    }

    /// Set just a cell's style id, preserving its content.
    pub fn set_style(&mut self, row: u32, col: u16, style_id: u32) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.style_id = style_id;
        } else if style_id != 0 {
            self.set(row, col, CellData::with_style(CellContent::Empty, style_id));
        }
    }

    /// Remove a cell, returning its prior data if any.
    pub fn remove(&mut self, row: u32, col: u16) -> Option<CellData> {
        self.invalidate_bounds();

        let result = self.rows.get_mut(&row).and_then(|r| r.remove(&col));

        if let Some(row_map) = self.rows.get(&row) {
            if row_map.is_empty() {
                self.rows.remove(&row);
            }
        }

        result
    }

    /// Remove every cell and merged region.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.merged_regions.clear();
        self.invalidate_bounds();
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Whether there are no non-empty cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bounds of used cells as `(min_row, min_col, max_row, max_col)`.
    pub fn used_bounds(&self) -> Option<(u32, u16, u32, u16)> {
        if self.rows.is_empty() {
            return None;
        }

        if let Some(bounds) = self.cached_bounds {
            return Some((
                bounds.min_row,
                bounds.min_col,
                bounds.max_row,
                bounds.max_col,
            ));
        }

        let min_row = *self.rows.keys().next()?;
        let max_row = *self.rows.keys().next_back()?;

        let mut min_col = u16::MAX;
        let mut max_col = 0u16;

        for row_data in self.rows.values() {
            if let Some(&col) = row_data.keys().next() {
                min_col = min_col.min(col);
            }
            if let Some(&col) = row_data.keys().next_back() {
                max_col = max_col.max(col);
            }
        }

        Some((min_row, min_col, max_row, max_col))
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, data)| (row, col, data)))
    }

    /// Iterate over the cells of a single row, in column order.
    pub fn iter_row(&self, row: u32) -> impl Iterator<Item = (u16, &CellData)> {
        self.rows
            .get(&row)
            .into_iter()
            .flat_map(|cols| cols.iter().map(|(&col, data)| (col, data)))
    }

    /// Iterate over row indices that hold at least one cell.
    pub fn row_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }

    /// Merged-cell regions.
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// Register a merged-cell region.
    pub fn add_merged_region(&mut self, range: CellRange) {
        self.merged_regions.push(range);
    }

    /// Whether a cell falls inside any merged region.
    pub fn is_merged(&self, row: u32, col: u16) -> bool {
        let addr = crate::CellAddress::new(row, col);
        self.merged_regions.iter().any(|r| r.contains(&addr))
    }

    fn invalidate_bounds(&mut self) {
        self.cached_bounds = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_get_set() {
        let mut storage = CellStorage::new();

        storage.set(0, 0, CellData::new(CellContent::Number(42.0)));
        let cell = storage.get(0, 0).unwrap();
        assert_eq!(cell.content.as_number(), Some(42.0));

        assert!(storage.get(1, 1).is_none());
    }

    #[test]
    fn empty_cells_are_not_stored() {
        let mut storage = CellStorage::new();

        storage.set(0, 0, CellData::new(CellContent::Number(42.0)));
        assert_eq!(storage.cell_count(), 1);

        storage.set(0, 0, CellData::empty());
        assert_eq!(storage.cell_count(), 0);
        assert!(storage.get(0, 0).is_none());
    }

    #[test]
    fn used_bounds_tracks_extremes() {
        let mut storage = CellStorage::new();

        assert!(storage.used_bounds().is_none());

        storage.set(5, 3, CellData::new(CellContent::Number(1.0)));
        storage.set(10, 7, CellData::new(CellContent::Number(2.0)));
        storage.set(2, 1, CellData::new(CellContent::Number(3.0)));

        let (min_row, min_col, max_row, max_col) = storage.used_bounds().unwrap();
        assert_eq!(min_row, 2);
        assert_eq!(min_col, 1);
        assert_eq!(max_row, 10);
        assert_eq!(max_col, 7);
    }

    #[test]
    fn iteration_is_row_major() {
        let mut storage = CellStorage::new();

        storage.set(0, 0, CellData::new(CellContent::Number(1.0)));
        storage.set(0, 1, CellData::new(CellContent::Number(2.0)));
        storage.set(1, 0, CellData::new(CellContent::Number(3.0)));

        let cells: Vec<_> = storage.iter().collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].0, 0);
        assert_eq!(cells[1].0, 0);
        assert_eq!(cells[2].0, 1);
    }

    #[test]
    fn style_only_cell_survives_empty_content() {
        let mut storage = CellStorage::new();
        storage.set_style(2, 2, 5);
        assert_eq!(storage.cell_count(), 1);
        assert_eq!(storage.get(2, 2).unwrap().style_id, 5);
    }
}
