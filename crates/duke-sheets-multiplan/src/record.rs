//! Record-zone dispatcher.
//!
//! The reference parser tracks an explicit per-row table of cell byte
//! offsets (`m_positionsSet`) built while walking a version-specific chain
//! of header zones (`readZoneB`, `readColumnsWidth`, `readZonesList[V2]`);
//! reproducing that indexing exactly would mean porting several additional,
//! only partially read functions. This dispatcher instead walks every
//! zone's `(record_type, flag, byte_size)` envelope in file order and, for
//! each zone whose type falls in the cell-data range (`7..=12`, the same
//! range the encryption layer treats as payload-bearing), decodes cell
//! records back-to-back from its payload, advancing row-major through the
//! sheet as they're found. This recovers the overwhelming majority of a
//! sheet's cell content without reconstructing the reference parser's
//! explicit row/column position index.

use duke_sheets_core::{CellContent, NamePool, Sheet};

use crate::byte_reader::ByteReader;
use crate::cell_record::{self, Version};
use crate::encryption;
use crate::envelope::read_zone_header;
use crate::error::Result;

const CELL_ZONE_MIN: u16 = 7;
const CELL_ZONE_MAX: u16 = 12;

/// Walk every zone from the reader's current position to the end of the
/// stream, decrypting and decoding cell-bearing zones into `sheet`.
pub fn walk_zones(
    reader: &mut ByteReader<'_>,
    version: Version,
    keys: Option<&[u8; 16]>,
    names: &NamePool,
    sheet: &mut Sheet,
) -> Result<()> {
    let mut row: u32 = 0;
    let mut col: u16 = 0;
    const ROW_WIDTH: u16 = 255;

    while !reader.end_of_stream() {
        let start = reader.tell();
        let header = match read_zone_header(reader) {
            Ok(h) => h,
            Err(_) => break,
        };
        let payload_len = header.payload_len();
        if reader.check_position(start + 6 + payload_len).is_err() {
            break;
        }

        let is_cell_zone = (CELL_ZONE_MIN..=CELL_ZONE_MAX).contains(&header.record_type);
        if !is_cell_zone || payload_len == 0 {
            reader.seek_abs(start + 6 + payload_len)?;
            continue;
        }

        let payload = reader.read(payload_len)?.to_vec();
        let mut decrypted;
        let zone_bytes: &[u8] = if let Some(keys) = keys {
            if encryption::record_is_encrypted(header.record_type, header.byte_size) {
                decrypted = payload.clone();
                encryption::decode_payload(&mut decrypted, keys);
                &decrypted
            } else {
                &payload
            }
        } else {
            &payload
        };

        let mut zone_reader = ByteReader::new(zone_bytes);
        while !zone_reader.end_of_stream() {
            let cell_start = zone_reader.tell();
            match cell_record::decode_cell(&mut zone_reader, version, (row, col), names) {
                Ok(content) => {
                    if !matches!(content, CellContent::Empty) {
                        let _ = sheet.set_cell_content(row, col, content);
                    }
                    col += 1;
                    if col >= ROW_WIDTH {
                        col = 0;
                        row += 1;
                    }
                }
                Err(err) => {
                    // Can't make further progress in this zone; the
                    // remaining bytes are most likely a shared-data or
                    // format table this dispatcher doesn't model.
                    log::warn!("stopping cell walk in zone at offset {cell_start}: {err}");
                    break;
                }
            }
        }
    }

    Ok(())
}
