//! Per-cell record decoding.
//!
//! Grounded on `LotusSpreadsheet::readCell` (the cell-content overload): a
//! cell record's payload always opens with `row:u16, sheet_id:u8, col:u8`
//! before the type-specific value. The zone's combined `(id | kind << 8)`
//! header value (see [`crate::envelope::ZoneHeader::combined`]) selects one
//! of nine shapes: three text variants (`0x16` plain text, `0x1a` text that
//! may coexist with a cached formula result, `0x26` a cell comment), four
//! bare numeric encodings (`0x17` extended-precision, `0x18`/`0x25` the
//! compact inverse-exponent integers, `0x27` packed IEEE double), and two
//! number-plus-formula variants (`0x19`, `0x28`) whose trailing bytes are
//! handed to [`duke_sheets_formula::lotus::decode`].

use duke_sheets_core::{CellContent, NamePool};

use crate::byte_reader::ByteReader;
use crate::error::{Error, Result};
use crate::numeric;

pub const TEXT: u16 = 0x16;
pub const DOUBLE10: u16 = 0x17;
pub const UINT16: u16 = 0x18;
pub const DOUBLE10_FORMULA: u16 = 0x19;
pub const TEXT_FORMULA: u16 = 0x1a;
pub const UINT32: u16 = 0x25;
pub const COMMENT: u16 = 0x26;
pub const DOUBLE8: u16 = 0x27;
pub const DOUBLE8_FORMULA: u16 = 0x28;

/// All combined zone-type values this module recognizes as per-cell content.
pub const CELL_TYPES: &[u16] = &[
    TEXT, DOUBLE10, UINT16, DOUBLE10_FORMULA, TEXT_FORMULA, UINT32, COMMENT, DOUBLE8, DOUBLE8_FORMULA,
];

/// A decoded cell record: its sheet-relative address plus what it carries.
pub struct CellRecord {
    pub row: u32,
    pub col: u16,
    pub sheet_id: u8,
    pub outcome: Outcome,
}

pub enum Outcome {
    Content(CellContent),
    Comment(String),
}

fn read_label_text(reader: &mut ByteReader<'_>, remaining: usize) -> Result<(String, Option<char>)> {
    let bytes = reader.read(remaining)?;
    let mut prefix = None;
    let mut start = 0;
    if let Some(&first) = bytes.first() {
        prefix = match first as char {
            '\'' => Some('\''),
            '\\' => Some('\\'),
            '^' => Some('^'),
            '"' => Some('"'),
            _ => None,
        };
        if prefix.is_some() {
            start = 1;
        }
    }
    let end = bytes[start..].iter().position(|&b| b == 0).map(|p| start + p).unwrap_or(bytes.len());
    let text = String::from_utf8_lossy(&bytes[start..end]).into_owned();
    Ok((text, prefix))
}

/// Decode one cell record. `reader` must be positioned immediately after the
/// zone's 4-byte envelope header; `payload_len` is that header's `size`
/// field (the number of bytes, including the leading `row/sheet_id/col`
/// triple, making up this record).
pub fn decode_cell(
    reader: &mut ByteReader<'_>,
    combined_type: u16,
    payload_len: usize,
    names: &NamePool,
) -> Result<(CellRecord, Option<char>)> {
    if payload_len < 4 {
        return Err(Error::BadPayload {
            zone_type: combined_type,
            reason: "cell record shorter than its row/sheet/col header".into(),
        });
    }
    let row = reader.u16()? as u32;
    let sheet_id = reader.u8()?;
    let col = reader.u8()? as u16;
    let remaining = payload_len - 4;

    let mut prefix = None;
    let outcome = match combined_type {
        TEXT | TEXT_FORMULA | COMMENT => {
            let (text, p) = read_label_text(reader, remaining)?;
            prefix = p;
            if combined_type == COMMENT {
                Outcome::Comment(text)
            } else {
                Outcome::Content(CellContent::text(text))
            }
        }
        DOUBLE10 => Outcome::Content(CellContent::Number(numeric::read_f10(reader)?)),
        UINT16 => Outcome::Content(CellContent::Number(numeric::read_inverse_exponent_16(reader)?)),
        UINT32 => Outcome::Content(CellContent::Number(numeric::read_inverse_exponent_32(reader)?)),
        DOUBLE8 => Outcome::Content(CellContent::Number(numeric::read_f8(reader)?)),
        DOUBLE10_FORMULA | DOUBLE8_FORMULA => {
            let (value, literal_len) = if combined_type == DOUBLE10_FORMULA {
                (numeric::read_f10(reader)?, 10)
            } else {
                (numeric::read_f8(reader)?, 8)
            };
            let formula_len = remaining.saturating_sub(literal_len);
            let formula_bytes = reader.read(formula_len)?.to_vec();
            let new_encoding = combined_type == DOUBLE8_FORMULA;
            let expr = duke_sheets_formula::lotus::decode(&formula_bytes, sheet_id, |_| None, names, new_encoding);
            let _ = expr;
            Outcome::Content(CellContent::formula(formula_bytes, Some(value)))
        }
        _ => {
            return Err(Error::BadPayload {
                zone_type: combined_type,
                reason: "not a recognized cell content type".into(),
            });
        }
    };

    Ok((
        CellRecord {
            row,
            col,
            sheet_id,
            outcome,
        },
        prefix,
    ))
}
