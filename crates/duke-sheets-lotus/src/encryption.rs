//! Lotus password/encryption handling.
//!
//! Grounded on `libwps_internal.cpp`'s `encodeLotusPassword` (key derivation)
//! and `Lotus.cpp`'s `decodeStream` (the running-feedback cipher applied to
//! the decoded zone bytes once a password has been verified).

use duke_sheets_core::EncryptionState;

use crate::byte_reader::ByteReader;
use crate::envelope::read_zone_header;
use crate::error::Result;

/// Fixed suffix bytes padding a short password out to 16 keys.
const DEFAULT_VALUES: [u8; 16] = [
    0xb9, 0x5f, 0xd7, 0x31, 0xdb, 0x75, 0x09, 0x72, 0x5d, 0x85, 0x32, 0x11, 0x05, 0x11, 0x58, 0x00,
];

/// Derive the 16 file-comparison/decode keys for `password`.
pub fn derive_keys(password: &str) -> [u8; 16] {
    let mut key: u16 = 0xFFFF;
    let mut val: u16 = 0;
    for &c in password.as_bytes().iter().take(16) {
        if c == 0 {
            break;
        }
        key ^= c as u16;
        val = (val & 0xFF) | (key << 8);
        val = ((val << 4) & 0xFFF0) | (val >> 12);
        key ^= val;
        val = (val << 8) | (val >> 8);
        val = (val << 1) | (val >> 15);
        val = (val << 8) | (val >> 8);
        key = (key << 8) | (key >> 8);
        key ^= val;
        val = (((val >> 4) & 0xfff) | (val << 12)) & 0xe0ff;
        key ^= val;
        val = (val >> 1) | (val << 15);
        key ^= val >> 8;
    }

    let mut keys = [0u8; 16];
    let pw_bytes = password.as_bytes();
    let take = pw_bytes.iter().take(16).take_while(|&&c| c != 0).count();
    keys[..take].copy_from_slice(&pw_bytes[..take]);
    keys[take..].copy_from_slice(&DEFAULT_VALUES[take..]);

    for (i, k) in keys.iter_mut().enumerate() {
        let shift = if i % 2 == 0 { 8 } else { 0 };
        *k ^= ((key >> shift) & 0xFF) as u8;
    }
    keys
}

/// Minimum number of matching key bytes (out of 16) accepted as a password
/// match, per the reference parser's zone-0x02 handler.
const MATCH_THRESHOLD: usize = 14;

/// Verify `password` against the 16 key bytes stored in the file's
/// encryption zone; returns the derived keys if accepted.
pub fn verify_password(password: &str, file_keys: &[u8; 16]) -> Option<[u8; 16]> {
    if password.is_empty() {
        return None;
    }
    let keys = derive_keys(password);
    let matches = keys.iter().zip(file_keys.iter()).filter(|(a, b)| a == b).count();
    if matches >= MATCH_THRESHOLD {
        Some(keys)
    } else {
        None
    }
}

pub fn state_for(file_keys: [u8; 16], keys: Option<[u8; 16]>) -> EncryptionState {
    let hash = u16::from_le_bytes([file_keys[0], file_keys[1]]);
    let checksum = u16::from_le_bytes([file_keys[14], file_keys[15]]);
    match keys {
        Some(keys) => EncryptionState {
            hash,
            checksum,
            keys,
            decoded: true,
        },
        None => EncryptionState {
            hash,
            checksum,
            keys: [0u8; 16],
            decoded: false,
        },
    }
}

/// Zone kinds `decodeStream` never transforms even while a password is in
/// effect (column-width and related structural zones); id range is
/// `0x04`/`0x05` at kind `0x01`.
fn is_always_plain(header_id: u8, header_kind: u8) -> bool {
    header_kind == 0x01 && (header_id == 0x04 || header_id == 0x05)
}

/// Style-table zone markers (kind `0x01`) that bracket a run of zones
/// `decodeStream` treats as already-plaintext.
const STYLE_OPEN: (u8, u8) = (0x0e, 0x01);
const STYLE_CLOSE: (u8, u8) = (0x0f, 0x01);

/// Decrypt `data` in place, starting at the reader's current position,
/// reproducing `decodeStream`'s running-feedback cipher: each record's
/// payload is XORed against `keys[d7 & 0xf]`, where `d7` carries forward a
/// running byte derived from the previous record's own transformed size and
/// two key-table-seeded counters.
///
/// Zone headers themselves are never transformed, matching the reference
/// implementation (it reads `type`/`sSz` directly off the still-encrypted
/// stream before deciding whether to transform the body).
pub fn decode_stream(data: &mut [u8], start: usize, keys: &[u8; 16]) -> Result<()> {
    let mut d7: u8 = 0;
    let mut transform = true;
    let mut pos = start;

    while pos + 4 <= data.len() {
        let mut reader = ByteReader::new(&data[pos..]);
        let header = read_zone_header(&mut reader)?;
        let body_len = header.payload_len();
        if pos + 4 + body_len > data.len() {
            break;
        }

        if (header.id, header.kind) == STYLE_OPEN {
            transform = false;
        } else if (header.id, header.kind) == STYLE_CLOSE {
            transform = true;
        }

        if is_always_plain(header.id, header.kind) || !transform {
            pos += 4 + body_len;
            continue;
        }

        let mut d4 = body_len as u8;
        let mut d5 = keys[13];
        for i in 0..body_len {
            let idx = pos + 4 + i;
            let c = data[idx];
            data[idx] = c ^ keys[(d7 & 0xF) as usize];
            d7 = c.wrapping_add(d4);
            d4 = d4.wrapping_add(d5);
            d5 = d5.wrapping_add(1);
        }

        pos += 4 + body_len;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_never_verifies() {
        let file_keys = [0u8; 16];
        assert!(verify_password("", &file_keys).is_none());
    }

    #[test]
    fn derived_keys_verify_against_themselves() {
        let keys = derive_keys("hunter2");
        assert!(verify_password("hunter2", &keys).is_some());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let keys = derive_keys("hunter2");
        assert!(verify_password("wrong-password", &keys).is_none());
    }

    #[test]
    fn decode_stream_skips_style_bracketed_zones() {
        // id=0x0e,kind=0x01 (style open) with a 2-byte body, followed by a
        // plain cell-range zone id=0x17,kind=0x00 with a 2-byte body; only
        // the second should be transformed.
        let keys = derive_keys("pw");
        let mut data = vec![0x0e, 0x01, 2, 0, 0xAA, 0xBB, 0x17, 0x00, 2, 0, 0x11, 0x22];
        let before_open = data[4..6].to_vec();
        decode_stream(&mut data, 0, &keys).unwrap();
        assert_eq!(&data[4..6], before_open.as_slice());
    }
}
