//! # duke-sheets-lotus
//!
//! Reader for Lotus 1-2-3 spreadsheet files: DOS WK1/WK3/WK4/.123 and the
//! Mac WK variant.
//!
//! Every Lotus file (and the OLE1/CFB "WK3"/"123" substream a version-3+
//! file wraps its data in) opens with a fixed 4-byte signature followed by
//! a version word, then a flat sequence of zones wrapped in a `(id, kind,
//! size)` envelope (see [`envelope`]) - sheet boundaries, an optional
//! password-protection zone, per-cell content records, and style-table
//! records. Formula cells hold a small RPN program over Lotus's private
//! opcode table, decoded by [`duke_sheets_formula::lotus`] rather than by
//! this crate.

pub mod byte_reader;
pub mod cell_record;
pub mod encryption;
pub mod envelope;
pub mod error;
pub mod numeric;
pub mod record;
pub mod styles;

pub use error::{Error, Result};
pub use styles::StyleTables;

use duke_sheets_core::{Document, FileFormat, NamePool};
use std::io::Read as _;

use byte_reader::ByteReader;
use envelope::{read_zone_header, ZONE_BOF, ZONE_ENCRYPTION, ZONE_EOF};

/// Options controlling how a Lotus file is parsed.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Password to try if the file reports itself as protected.
    pub password: Option<String>,
}

/// The 4-byte prefix every Lotus stream (main stream, and the format
/// substream it may chain to) opens with, per `checkHeader`.
const SIGNATURE: [u8; 4] = [0x00, 0x00, 0x1a, 0x00];

fn detect_version(bytes: &[u8]) -> Result<(u8, FileFormat, usize)> {
    if bytes.len() < 6 || bytes[0..4] != SIGNATURE {
        return Err(Error::BadSignature);
    }
    let version_word = u16::from_le_bytes([bytes[4], bytes[5]]);
    if !(0x1000..=0x1005).contains(&version_word) {
        return Err(Error::BadSignature);
    }
    let version = (version_word - 0x1000 + 1) as u8;
    let format = match version {
        1 => FileFormat::Wk1,
        2 => FileFormat::Wk123,
        3 => FileFormat::Wk3,
        4 => FileFormat::Wk4,
        _ => FileFormat::MacWk,
    };
    Ok((version, format, 6))
}

/// Extract the bytes of the sheet-data substream: for version 1/2 this is
/// just the rest of the main stream (after the 6-byte header); for version
/// 3+ the real content lives in a named stream inside an OLE1/CFB
/// container wrapping the whole file.
fn sheet_data_bytes(bytes: &[u8], version: u8, header_len: usize) -> Result<Vec<u8>> {
    if version < 3 {
        return Ok(bytes[header_len..].to_vec());
    }
    let stream_name = if version == 3 { "/WK3" } else { "/123" };
    let cursor = std::io::Cursor::new(bytes);
    let mut container = cfb::CompoundFile::open(cursor)?;
    if !container.exists(stream_name) {
        return Err(Error::Cfb(format!("no {stream_name} stream found in compound file")));
    }
    let mut data = Vec::new();
    {
        let mut stream = container.open_stream(stream_name)?;
        stream.read_to_end(&mut data)?;
    }
    Ok(data)
}

/// Look for the BOF/encryption zones at the front of `data`, verifying the
/// password and decoding the remainder of the buffer in place if the file
/// reports itself as protected. Returns the resulting encryption state and
/// the offset the cell/style zone walk should resume from.
fn handle_encryption(data: &mut Vec<u8>, options: &Options) -> Result<(duke_sheets_core::EncryptionState, usize)> {
    let mut pos = 0usize;
    loop {
        if pos + 4 > data.len() {
            return Ok((duke_sheets_core::EncryptionState::none(), pos));
        }
        let mut reader = ByteReader::new(&data[pos..]);
        let header = match read_zone_header(&mut reader) {
            Ok(h) => h,
            Err(_) => return Ok((duke_sheets_core::EncryptionState::none(), pos)),
        };
        let payload_len = header.payload_len();
        let zone_end = pos + 4 + payload_len;
        if zone_end > data.len() {
            return Ok((duke_sheets_core::EncryptionState::none(), pos));
        }

        if header.kind == 0 && header.id == ZONE_BOF {
            pos = zone_end;
            continue;
        }
        if header.kind == 0 && header.id == ZONE_ENCRYPTION {
            if payload_len != envelope::ENCRYPTION_SIZE as usize {
                return Err(Error::BadRecord {
                    offset: pos as u64,
                    reason: "encryption zone has an unexpected size".into(),
                });
            }
            let mut file_keys = [0u8; 16];
            file_keys.copy_from_slice(&data[pos + 4..zone_end]);

            let keys = match &options.password {
                Some(password) => encryption::verify_password(password, &file_keys),
                None => None,
            };
            let keys = keys.ok_or(Error::PasswordRequired)?;
            let state = encryption::state_for(file_keys, Some(keys));
            encryption::decode_stream(data, zone_end, &keys)?;
            return Ok((state, zone_end));
        }
        if header.kind == 0 && header.id == ZONE_EOF {
            return Ok((duke_sheets_core::EncryptionState::none(), pos));
        }
        // Any other zone before an encryption marker means the file is
        // unprotected; stop scanning and let the real dispatcher take over.
        return Ok((duke_sheets_core::EncryptionState::none(), pos));
    }
}

fn parse_bytes(bytes: &[u8], options: &Options) -> Result<Document> {
    let (version, format, header_len) = detect_version(bytes)?;
    let mut data = sheet_data_bytes(bytes, version, header_len)?;

    let (encryption_state, resume_at) = handle_encryption(&mut data, options)?;

    let mut document = Document::new(format);
    document.set_encryption(encryption_state);

    let names = NamePool::new();
    let mut reader = ByteReader::new(&data);
    reader.seek_abs(resume_at)?;
    record::walk_zones(&mut reader, &names, &mut document)?;

    Ok(document)
}

/// Parse `reader` as the given `expected` variant, rejecting any other
/// variant the signature sniff turns up with [`Error::UnsupportedFormatVariant`].
fn parse_expecting<R: std::io::Read + std::io::Seek>(
    mut reader: R,
    options: &Options,
    expected: FileFormat,
) -> Result<Document> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let document = parse_bytes(&bytes, options)?;
    if document.format() != expected {
        return Err(Error::UnsupportedFormatVariant(format!(
            "expected {expected:?}, found {:?}",
            document.format()
        )));
    }
    Ok(document)
}

/// Parse a DOS WK1 file (Lotus 1-2-3 release 1/1a).
pub fn parse_wk1<R: std::io::Read + std::io::Seek>(reader: R, options: &Options) -> Result<Document> {
    parse_expecting(reader, options, FileFormat::Wk1)
}

/// Parse a WK3 file (Lotus 1-2-3 release 3, CFB/OLE1-contained).
pub fn parse_wk3<R: std::io::Read + std::io::Seek>(reader: R, options: &Options) -> Result<Document> {
    parse_expecting(reader, options, FileFormat::Wk3)
}

/// Parse a WK4 file (Lotus 1-2-3 release 4/5, CFB/OLE1-contained).
pub fn parse_wk4<R: std::io::Read + std::io::Seek>(reader: R, options: &Options) -> Result<Document> {
    parse_expecting(reader, options, FileFormat::Wk4)
}

/// Parse a `.123` file (Lotus 1-2-3 release 97 and later, CFB/OLE1-contained).
pub fn parse_123<R: std::io::Read + std::io::Seek>(reader: R, options: &Options) -> Result<Document> {
    parse_expecting(reader, options, FileFormat::Wk123)
}

/// Parse a Macintosh Lotus 1-2-3 file.
pub fn parse_mac_wk<R: std::io::Read + std::io::Seek>(reader: R, options: &Options) -> Result<Document> {
    parse_expecting(reader, options, FileFormat::MacWk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(version_word: u16) -> Vec<u8> {
        let mut bytes = SIGNATURE.to_vec();
        bytes.extend_from_slice(&version_word.to_le_bytes());
        bytes
    }

    fn zone(id: u8, kind: u8, payload: &[u8]) -> Vec<u8> {
        let mut bytes = vec![id, kind];
        bytes.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn rejects_wrong_signature() {
        let bytes = vec![1, 2, 3, 4, 5, 6];
        let cursor = std::io::Cursor::new(bytes);
        assert!(matches!(parse_wk1(cursor, &Options::default()), Err(Error::BadSignature)));
    }

    #[test]
    fn unprotected_wk1_file_parses_to_one_sheet() {
        let mut bytes = header(0x1000);
        bytes.extend(zone(0, 0, &[0u8; 26]));
        bytes.extend(zone(1, 0, &[]));
        let doc = parse_wk1(std::io::Cursor::new(bytes), &Options::default()).unwrap();
        assert_eq!(doc.format(), FileFormat::Wk1);
        assert_eq!(doc.sheet_count(), 1);
        assert!(!doc.encryption().is_encrypted());
    }

    #[test]
    fn wrong_variant_entry_point_is_rejected() {
        let mut bytes = header(0x1000);
        bytes.extend(zone(0, 0, &[0u8; 26]));
        bytes.extend(zone(1, 0, &[]));
        let err = parse_wk4(std::io::Cursor::new(bytes), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormatVariant(_)));
    }

    #[test]
    fn protected_file_without_password_errors() {
        let mut bytes = header(0x1000);
        bytes.extend(zone(0, 0, &[0u8; 26]));
        bytes.extend(zone(2, 0, &[0u8; 16]));
        let err = parse_wk1(std::io::Cursor::new(bytes), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::PasswordRequired));
    }
}
