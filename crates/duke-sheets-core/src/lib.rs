//! # duke-sheets-core
//!
//! Core data structures shared by every legacy spreadsheet family this
//! library reads (Lotus 1-2-3 WK1/WK3/WK4/.123, Microsoft Multiplan):
//! - [`CellContent`] - the value (or raw formula bytes) stored in a cell
//! - [`CellAddress`] and [`CellRange`] - cell addressing and ranges
//! - [`Style`] - cell formatting (font/border/fill/number-format reference)
//! - [`Document`], [`Sheet`] - the parsed document structure
//! - [`NamePool`], [`LinkPool`] - document-wide name and external-link tables
//! - [`Diagnostics`] - non-fatal warnings collected during a parse
//! - [`EncryptionState`] - password/cipher state carried on every document
//!
//! This crate only models data: decoding the on-disk byte streams into
//! these types is `duke-sheets-lotus`'s and `duke-sheets-multiplan`'s job,
//! and decoding a cell's raw formula bytes into an expression tree is
//! `duke-sheets-formula`'s job, so that neither creates a dependency cycle
//! back onto this crate.
//!
//! ## Example
//!
//! ```rust
//! use duke_sheets_core::{Document, FileFormat, Sheet, CellContent};
//!
//! let mut doc = Document::new(FileFormat::Wk1);
//! let mut sheet = Sheet::new("Sheet1");
//! sheet.set_cell_content(0, 0, CellContent::text("Hello")).unwrap();
//! sheet.set_cell_content(0, 1, CellContent::Number(42.0)).unwrap();
//! doc.push_sheet(sheet).unwrap();
//!
//! assert_eq!(doc.sheet(0).unwrap().content_at(0, 1).as_number(), Some(42.0));
//! ```

pub mod cell;
pub mod column;
pub mod comment;
pub mod diagnostics;
pub mod document;
pub mod encryption;
pub mod error;
pub mod link;
pub mod name_pool;
pub mod range;
pub mod row;
pub mod shared;
pub mod sheet;
pub mod style;

pub use cell::{CellAddress, CellContent, CellData, CellErrorCode, CellRange};
pub use column::ColumnFormat;
pub use comment::CellComment;
pub use diagnostics::{Diagnostic, Diagnostics, ReferenceKind};
pub use document::{Document, DocumentSettings, FileFormat};
pub use encryption::EncryptionState;
pub use error::{Error, Result};
pub use link::{LinkEntry, LinkPool};
pub use name_pool::{NameEntry, NamePool, NameTarget};
pub use range::{Range, RangeCell, RangeRow};
pub use row::{RowData, RowFormat};
pub use shared::{SharedDataPool, SharedValue};
pub use sheet::Sheet;

pub use style::{
    Alignment, Border, BorderLineKind, BorderSet, Color, FontStyle, GraphicStyle,
    HorizontalAlignment, Line, NumberFormat, NumberFormatKind, PaletteSize, PatternStyle, Style,
    StylePool, VerticalAlignment,
};

/// Maximum row index, one past the highest row Lotus/Multiplan sheets in
/// this family ever address (WK1/WK3/WK4/.123 all fit within 8K rows).
pub const MAX_ROWS: u32 = 8_192;

/// Maximum column index, one past the highest column these formats address
/// (column letters run `A..IT`, 255 columns).
pub const MAX_COLUMNS: u16 = 255;

/// Maximum length of a sheet name.
pub const MAX_SHEET_NAME_LEN: usize = 31;
