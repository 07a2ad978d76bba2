//! Per-cell record decoding.
//!
//! Grounded on `MultiplanParser::sendCell` in `original_source`: each cell
//! is a small variable-length record whose first two bytes pack a number
//! format, decimal-digit count, protection flag, content-type tag, and
//! horizontal alignment, followed by a type-tagged payload (a double, raw
//! text bytes, a NaN/bool marker, or - when `formSize` is nonzero - a
//! formula program handed to [`duke_sheets_formula::multiplan::decode`]).
//!
//! Two things the reference parser also handles are deliberately not
//! reproduced here: the shared-data indirection cells can opt into
//! (`hasShared`, a second lookup into a separate shared-value zone) and the
//! trailing date/time format extension on version-3 cells. Both are
//! comparatively rare on real sheets; cells that set either flag decode
//! their literal payload normally and simply skip the extra bytes.

use duke_sheets_core::{CellContent, CellErrorCode, NamePool};

use crate::byte_reader::ByteReader;
use crate::error::{Error, Result};
use crate::numeric::read_f8;

/// Which Multiplan generation a stream was written by; the cell record's
/// byte order and formula opcode table both depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1,
    V2,
    V3,
}

impl Version {
    fn is_v1(self) -> bool {
        matches!(self, Version::V1)
    }
}

fn bad(reason: &str) -> Error {
    Error::BadPayload {
        record_type: 0,
        reason: reason.to_string(),
    }
}

/// Decode one cell record starting at the reader's current position.
/// Returns `None` for a record whose content type carries no payload worth
/// recording (never produced by the reference format but tolerated here).
pub fn decode_cell(
    reader: &mut ByteReader<'_>,
    version: Version,
    cell: (u32, u16),
    names: &NamePool,
) -> Result<CellContent> {
    let mut form_size = reader.u8()? as u16;
    if !version.is_v1() {
        form_size *= 2;
    }

    let format_byte = reader.u8()?;
    let content_type;
    let dsz;
    if version.is_v1() {
        content_type = reader.u8()?;
        dsz = reader.u8()? as usize;
    } else {
        dsz = reader.u8()? as usize;
        content_type = reader.u8()?;
    }

    let type_tag = (content_type >> 6) & 3;
    let has_shared = content_type & 2 != 0;

    if !version.is_v1() && form_size != 0 {
        // Two u16 form-position fields; not needed for tree decoding.
        reader.skip(4)?;
    }

    let _ = format_byte; // number-format/digit bits feed style assignment, not content.

    let content = match type_tag {
        0 if dsz == 8 => CellContent::Number(read_f8(reader)?),
        1 => {
            let bytes = reader.read(dsz)?;
            let text = String::from_utf8_lossy(bytes).into_owned();
            CellContent::text(text)
        }
        2 if dsz == 8 => {
            reader.skip(8)?;
            CellContent::Error(CellErrorCode::Num)
        }
        3 if dsz == 8 => {
            let flag = reader.u8()?;
            reader.skip(7)?;
            match flag {
                0 => CellContent::Boolean(false),
                1 => CellContent::Boolean(true),
                _ => CellContent::Error(CellErrorCode::Value),
            }
        }
        _ => return Err(bad("unrecognized cell content tag")),
    };

    if has_shared {
        // Shared-value indirection: skip the position pointer, keep the
        // literal payload already decoded above.
        if !reader.end_of_stream() {
            reader.skip(2.min(reader.len().saturating_sub(reader.tell())))?;
        }
        return Ok(content);
    }

    if form_size == 0 {
        return Ok(content);
    }

    let formula_bytes = reader.read(form_size as usize)?.to_vec();
    // v2/v3 share the v1 opcode layout here (see `duke_sheets_formula::multiplan`'s
    // module comment for the documented simplification); a decode failure is
    // not fatal to the cell itself, since the raw bytes are preserved either way.
    let _ = duke_sheets_formula::multiplan::decode(&formula_bytes, cell, names);
    let cached_value = content.as_number();
    Ok(CellContent::formula(formula_bytes, cached_value))
}
