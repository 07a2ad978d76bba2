//! Zone envelope: the `(id, kind, size)` header every Lotus zone - sheet
//! boundaries, the encryption zone, cell records, and style records alike -
//! opens with.
//!
//! Grounded on `Lotus::readZone`: a `u8` id, a `u8` kind, then a little-endian
//! `u16` byte count for the payload that follows (the header itself is not
//! counted). The reference parser's `readCell`/`readDataZone` dispatch read
//! these same two bytes as one little-endian `u16` instead (`id` as the low
//! byte, `kind` as the high byte) - [`ZoneHeader::combined`] reproduces that
//! view for matching against the zone-type constants transcribed from those
//! functions (e.g. `0x17` for a double10 number cell, `0xfa0` for a font
//! style record).

use crate::error::{Error, Result};
use crate::byte_reader::ByteReader;

pub struct ZoneHeader {
    pub id: u8,
    pub kind: u8,
    pub size: u16,
}

impl ZoneHeader {
    /// The `id | (kind << 8)` view the reference parser's cell/style/data
    /// zone dispatchers switch on.
    pub fn combined(&self) -> u16 {
        self.id as u16 | ((self.kind as u16) << 8)
    }

    pub fn payload_len(&self) -> usize {
        self.size as usize
    }
}

/// Highest zone kind `readZone` accepts before treating the stream as
/// exhausted or corrupt.
pub const MAX_ZONE_KIND: u8 = 0x2a;

pub fn read_zone_header(reader: &mut ByteReader<'_>) -> Result<ZoneHeader> {
    let id = reader.u8()?;
    let kind = reader.u8()?;
    let size = reader.u16()?;
    if kind > MAX_ZONE_KIND {
        return Err(Error::BadRecord {
            offset: reader.tell() as u64,
            reason: format!("zone kind 0x{kind:02x} exceeds the known range"),
        });
    }
    Ok(ZoneHeader { id, kind, size })
}

/// Top-level zone identities (`kind == 0`), per `readZone`.
pub const ZONE_BOF: u8 = 0x00;
pub const ZONE_EOF: u8 = 0x01;
pub const ZONE_ENCRYPTION: u8 = 0x02;

pub const BOF_SIZE: u16 = 26;
pub const ENCRYPTION_SIZE: u16 = 16;
