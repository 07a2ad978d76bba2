//! # duke-sheets
//!
//! A Rust library for reading legacy spreadsheet files: Lotus 1-2-3
//! (WK1/WK3/WK4/.123, DOS and Mac) and Microsoft Multiplan (v1-v3).
//!
//! This crate is a thin front door over [`duke_sheets_lotus`] and
//! [`duke_sheets_multiplan`]: [`open_path`] and [`open_reader`] sniff the
//! input's signature and dispatch to whichever family parser matches. This
//! is the only place that dispatch happens - neither family crate knows
//! the other exists.
//!
//! ## Example
//!
//! ```rust,no_run
//! use duke_sheets::{open_path, Options};
//!
//! let doc = open_path("budget.wk1", &Options::default()).unwrap();
//! println!("{} sheet(s)", doc.sheet_count());
//! ```

pub mod prelude;

pub use duke_sheets_core::{
    Alignment, Border, BorderLineKind, BorderSet, CellAddress, CellComment, CellContent,
    CellData, CellErrorCode, CellRange, Color, ColumnFormat, Diagnostic, Diagnostics, Document,
    DocumentSettings, EncryptionState, FileFormat, FontStyle, GraphicStyle, HorizontalAlignment,
    Line, LinkEntry, LinkPool, NameEntry, NamePool, NameTarget, NumberFormat, NumberFormatKind,
    PaletteSize, PatternStyle, Range, RangeCell, RangeRow, RowData, RowFormat, SharedDataPool,
    SharedValue, Sheet, Style, StylePool, VerticalAlignment,
};

pub use duke_sheets_formula::{
    lotus as formula_lotus, multiplan as formula_multiplan, BinaryOperator, ExternalRef,
    FormulaError, FormulaExpr, FormulaResult, UnaryOperator,
};

pub use duke_sheets_chart::{
    Axis, AxisKind, AxisPosition, Chart, ChartAnchor, DataRange, Legend, LegendPosition,
    PointMarker, Series, SeriesType, TextZone, TextZoneContent, TextZoneKind,
};

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the facade itself can raise, on top of whatever the dispatched
/// family parser returns.
#[derive(Debug, Error)]
pub enum Error {
    /// The input's header did not match any supported family signature.
    #[error("file signature did not match any supported Lotus or Multiplan variant")]
    BadSignature,

    #[error(transparent)]
    Lotus(#[from] duke_sheets_lotus::Error),

    #[error(transparent)]
    Multiplan(#[from] duke_sheets_multiplan::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Options controlling how a file is parsed, regardless of which family it
/// turns out to be.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Password to try if the file reports itself as protected.
    pub password: Option<String>,
}

impl Options {
    fn lotus(&self) -> duke_sheets_lotus::Options {
        duke_sheets_lotus::Options {
            password: self.password.clone(),
        }
    }

    fn multiplan(&self) -> duke_sheets_multiplan::Options {
        duke_sheets_multiplan::Options {
            password: self.password.clone(),
        }
    }
}

/// Which on-disk family (and variant) a file's signature identified it as.
///
/// This is finer-grained than "Lotus vs. Multiplan": each Lotus variant has
/// its own entry point in `duke-sheets-lotus`, so the sniff has to resolve
/// all the way down to the variant in order to pick the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Wk1,
    Wk3,
    Wk4,
    Wk123,
    MacWk,
    MultiplanV1,
    MultiplanV2,
    MultiplanV3,
}

/// The 4-byte prefix every Lotus stream opens with, per
/// `duke_sheets_lotus`'s signature check.
const LOTUS_SIGNATURE: [u8; 4] = [0x00, 0x00, 0x1a, 0x00];

const MULTIPLAN_V1: u16 = 0xe708;
const MULTIPLAN_V2: u16 = 0xec0c;
const MULTIPLAN_V3: u16 = 0xed0c;

fn sniff(header: &[u8; 8]) -> Option<Family> {
    if header[0..4] == LOTUS_SIGNATURE {
        let version_word = u16::from_le_bytes([header[4], header[5]]);
        return match version_word {
            0x1000 => Some(Family::Wk1),
            0x1001 => Some(Family::Wk123),
            0x1002 => Some(Family::Wk3),
            0x1003 => Some(Family::Wk4),
            0x1004..=0x1005 => Some(Family::MacWk),
            _ => None,
        };
    }
    match u16::from_le_bytes([header[0], header[1]]) {
        MULTIPLAN_V1 => Some(Family::MultiplanV1),
        MULTIPLAN_V2 => Some(Family::MultiplanV2),
        MULTIPLAN_V3 => Some(Family::MultiplanV3),
        _ => None,
    }
}

fn peek_header<R: Read + Seek>(reader: &mut R) -> Result<[u8; 8]> {
    let mut header = [0u8; 8];
    let mut filled = 0;
    while filled < header.len() {
        let n = reader.read(&mut header[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    reader.seek(SeekFrom::Start(0))?;
    Ok(header)
}

/// Sniff `reader`'s signature and parse it with whichever family parser
/// matches, leaving `reader` positioned wherever that parser left it.
pub fn open_reader<R: Read + Seek>(mut reader: R, options: &Options) -> Result<Document> {
    let header = peek_header(&mut reader)?;
    let family = sniff(&header).ok_or(Error::BadSignature)?;
    let document = match family {
        Family::Wk1 => duke_sheets_lotus::parse_wk1(reader, &options.lotus())?,
        Family::Wk3 => duke_sheets_lotus::parse_wk3(reader, &options.lotus())?,
        Family::Wk4 => duke_sheets_lotus::parse_wk4(reader, &options.lotus())?,
        Family::Wk123 => duke_sheets_lotus::parse_123(reader, &options.lotus())?,
        Family::MacWk => duke_sheets_lotus::parse_mac_wk(reader, &options.lotus())?,
        Family::MultiplanV1 | Family::MultiplanV2 | Family::MultiplanV3 => {
            duke_sheets_multiplan::parse(reader, &options.multiplan())?
        }
    };
    Ok(document)
}

/// Open and parse the file at `path`, sniffing its family from its header.
pub fn open_path<P: AsRef<Path>>(path: P, options: &Options) -> Result<Document> {
    let file = std::fs::File::open(path)?;
    open_reader(file, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lotus_header(version_word: u16) -> [u8; 8] {
        let mut header = [0u8; 8];
        header[0..4].copy_from_slice(&LOTUS_SIGNATURE);
        header[4..6].copy_from_slice(&version_word.to_le_bytes());
        header
    }

    #[test]
    fn sniffs_wk1() {
        assert_eq!(sniff(&lotus_header(0x1000)), Some(Family::Wk1));
    }

    #[test]
    fn sniffs_wk4() {
        assert_eq!(sniff(&lotus_header(0x1003)), Some(Family::Wk4));
    }

    #[test]
    fn sniffs_multiplan_v2() {
        let mut header = [0u8; 8];
        header[0..2].copy_from_slice(&MULTIPLAN_V2.to_le_bytes());
        assert_eq!(sniff(&header), Some(Family::MultiplanV2));
    }

    #[test]
    fn unrecognized_header_does_not_sniff() {
        assert_eq!(sniff(&[1, 2, 3, 4, 5, 6, 7, 8]), None);
    }

    #[test]
    fn open_reader_rejects_bad_signature() {
        let bytes = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let err = open_reader(std::io::Cursor::new(bytes), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::BadSignature));
    }

    #[test]
    fn open_reader_dispatches_to_lotus() {
        let mut bytes = lotus_header(0x1000).to_vec();
        // BOF zone (id 0, kind 0, 26-byte payload) then EOF zone (id 1, kind 0).
        bytes.extend([0u8, 0, 26, 0]);
        bytes.extend([0u8; 26]);
        bytes.extend([1u8, 0, 0, 0]);
        let doc = open_reader(std::io::Cursor::new(bytes), &Options::default()).unwrap();
        assert_eq!(doc.format(), FileFormat::Wk1);
    }
}
