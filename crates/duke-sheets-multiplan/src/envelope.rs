//! Zone envelope: the `(record_type, flag, byte_size)` header every
//! Multiplan zone and row/cell-data block is wrapped in.
//!
//! Grounded on the record reads threaded through `readZonesList`/
//! `readZonesListV2`/`decodeStream` in `original_source`: every zone opens
//! with a little-endian `u16` type, a `u16` flag word, and a `u16` byte
//! count that includes the 6-byte header itself.

use crate::byte_reader::ByteReader;
use crate::error::{Error, Result};

pub struct ZoneHeader {
    pub record_type: u16,
    pub flag: u16,
    pub byte_size: u16,
}

impl ZoneHeader {
    /// Size of this zone's payload, excluding the 6-byte header.
    pub fn payload_len(&self) -> usize {
        self.byte_size.saturating_sub(6) as usize
    }
}

pub fn read_zone_header(reader: &mut ByteReader<'_>) -> Result<ZoneHeader> {
    let record_type = reader.u16()?;
    let flag = reader.u16()?;
    let byte_size = reader.u16()?;
    if byte_size < 6 {
        return Err(Error::BadRecord {
            offset: reader.tell() as u64,
            reason: format!("zone byte_size {byte_size} smaller than the 6-byte header"),
        });
    }
    Ok(ZoneHeader {
        record_type,
        flag,
        byte_size,
    })
}
