//! Zone dispatcher: walks every `(id, kind, size)` zone in a decoded Lotus
//! stream (main stream or the "WK3"/"123" substream inside a compound-file
//! container) and routes it to cell decoding, style-table accumulation, or a
//! plain skip.
//!
//! The reference parser tracks an explicit per-sheet structure built while
//! threading through `createZones`/column-width zones; this dispatcher
//! instead builds sheets lazily, keyed by the `sheet_id` each cell record
//! itself carries, which recovers the same content without reconstructing
//! that indexing.

use duke_sheets_core::{CellComment, Document, NamePool, Sheet};

use crate::byte_reader::ByteReader;
use crate::cell_record::{self, Outcome, CELL_TYPES};
use crate::envelope::{read_zone_header, ZONE_BOF, ZONE_ENCRYPTION, ZONE_EOF};
use crate::error::Result;
use crate::styles::{self, StyleTables, COLOR_STYLE, FONT_STYLE, FORMAT_STYLE};

/// Walk every zone starting at the reader's current position until an EOF
/// zone or the end of the stream, populating `document` with one sheet per
/// distinct `sheet_id` seen and returning the style tables gathered along
/// the way.
pub fn walk_zones(reader: &mut ByteReader<'_>, names: &NamePool, document: &mut Document) -> Result<StyleTables> {
    let mut style_tables = StyleTables::default();
    let mut sheets: Vec<Sheet> = Vec::new();

    while !reader.end_of_stream() {
        let start = reader.tell();
        let header = match read_zone_header(reader) {
            Ok(h) => h,
            Err(_) => break,
        };
        let payload_len = header.payload_len();
        let zone_end = start + 4 + payload_len;
        if reader.check_position(zone_end).is_err() {
            break;
        }
        let combined = header.combined();

        if header.kind == 0 && header.id == ZONE_EOF {
            reader.seek_abs(zone_end)?;
            break;
        }
        if header.kind == 0 && (header.id == ZONE_BOF || header.id == ZONE_ENCRYPTION) {
            // Sheet boundaries and the encryption zone are handled by the
            // caller before the stream reaches this dispatcher.
            reader.seek_abs(zone_end)?;
            continue;
        }

        if CELL_TYPES.contains(&combined) {
            match cell_record::decode_cell(reader, combined, payload_len, names) {
                Ok((record, _prefix)) => {
                    while sheets.len() <= record.sheet_id as usize {
                        let idx = sheets.len();
                        sheets.push(Sheet::new(format!("Sheet{}", idx + 1)));
                    }
                    let sheet = &mut sheets[record.sheet_id as usize];
                    match record.outcome {
                        Outcome::Content(content) => {
                            let _ = sheet.set_cell_content(record.row, record.col, content);
                        }
                        Outcome::Comment(text) => {
                            sheet.set_comment_at(record.row, record.col, CellComment::new("", text));
                        }
                    }
                }
                Err(err) => {
                    log::warn!("skipping cell record at offset {start}: {err}");
                }
            }
            reader.seek_abs(zone_end)?;
            continue;
        }

        match combined {
            FONT_STYLE => match styles::read_font_style(reader, payload_len) {
                Ok((id, font)) => {
                    style_tables.fonts.insert(id, font);
                }
                Err(err) => log::warn!("skipping font style record at offset {start}: {err}"),
            },
            COLOR_STYLE => match styles::read_color_style(reader, payload_len) {
                Ok((id, fill)) => {
                    style_tables.fills.insert(id, fill);
                }
                Err(err) => log::warn!("skipping color style record at offset {start}: {err}"),
            },
            FORMAT_STYLE => match styles::read_format_style(reader, payload_len) {
                Ok((id, fmt)) => {
                    style_tables.formats.insert(id, fmt);
                }
                Err(err) => log::warn!("skipping format style record at offset {start}: {err}"),
            },
            _ => {}
        }
        reader.seek_abs(zone_end)?;
    }

    if sheets.is_empty() {
        sheets.push(Sheet::new("Sheet1"));
    }
    for sheet in sheets {
        document.push_sheet(sheet)?;
    }

    Ok(style_tables)
}
