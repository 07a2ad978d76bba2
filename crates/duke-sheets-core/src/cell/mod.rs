//! Cell-related types and utilities.
//!
//! This module contains:
//! - [`CellContent`] - the value (or formula) stored in a cell
//! - [`CellAddress`] - a cell's location (e.g., "A1")
//! - [`CellRange`] - a range of cells (e.g., "A1:B10")
//! - [`CellData`] - complete cell data: content plus style id

mod address;
mod storage;
mod value;

pub use address::{CellAddress, CellRange};
pub use storage::{CellData, CellStorage};
pub use value::{CellContent, CellErrorCode, FormulaPayload, SharedString, StringPool};
