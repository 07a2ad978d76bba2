//! # duke-sheets-multiplan
//!
//! Reader for Microsoft Multiplan spreadsheet files (versions 1 through 3).
//!
//! Multiplan files open with a two-byte signature identifying the
//! generation (`0xe708`/`0xec0c`/`0xed0c` for v1/v2/v3), optionally declare
//! a password-protected checksum in the v3 header, and store their cells as
//! a sequence of small zones wrapped in a `(record_type, flag, byte_size)`
//! envelope (see [`envelope`]). Formula cells hold a small RPN program over
//! Multiplan's private opcode table, decoded by
//! [`duke_sheets_formula::multiplan`] rather than by this crate.

pub mod byte_reader;
pub mod cell_record;
pub mod encryption;
pub mod envelope;
pub mod error;
pub mod numeric;
pub mod record;

pub use error::{Error, Result};

use duke_sheets_core::{Document, FileFormat, NamePool};
use std::io::Read as _;

use byte_reader::ByteReader;
use cell_record::Version;

/// Options controlling how a Multiplan file is parsed.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Password to try if the file reports itself as protected.
    pub password: Option<String>,
}

const SIGNATURE_V1: u16 = 0xe708;
const SIGNATURE_V2: u16 = 0xec0c;
const SIGNATURE_V3: u16 = 0xed0c;

fn detect_version(signature: u16) -> Option<(Version, FileFormat)> {
    match signature {
        SIGNATURE_V1 => Some((Version::V1, FileFormat::MultiplanV1)),
        SIGNATURE_V2 => Some((Version::V2, FileFormat::MultiplanV2)),
        SIGNATURE_V3 => Some((Version::V3, FileFormat::MultiplanV3)),
        _ => None,
    }
}

/// Parse a Multiplan file from `reader` into a [`Document`].
pub fn parse<R: std::io::Read + std::io::Seek>(mut source: R, options: &Options) -> Result<Document> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    let mut reader = ByteReader::new(&bytes);
    let signature = reader.u16()?;
    let (version, format) = detect_version(signature).ok_or(Error::BadSignature)?;

    let mut hash: u16 = 0;
    let mut checksum: u16 = 0;
    if matches!(version, Version::V3) {
        reader.seek_abs(22)?;
        hash = reader.u16()?;
        checksum = reader.u16()?;
    }

    let protected = hash != 0 || checksum != 0;
    let keys = if protected {
        match &options.password {
            Some(password) => match encryption::verify_password(password, hash, checksum) {
                Some(keys) => Some(keys),
                None => return Err(Error::PasswordRequired),
            },
            None => return Err(Error::PasswordRequired),
        }
    } else {
        None
    };

    let mut document = Document::new(format);
    document.set_encryption(encryption::state_for(hash, checksum, keys));

    let data_start: usize = match version {
        Version::V1 => 0x2,
        Version::V2 | Version::V3 => 0x1a,
    };
    reader.seek_abs(data_start)?;

    let mut sheet = duke_sheets_core::Sheet::new("Sheet1");
    let names = NamePool::new();
    record::walk_zones(&mut reader, version, keys.as_ref(), &names, &mut sheet)?;
    document.push_sheet(sheet)?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(signature: u16) -> Vec<u8> {
        let mut bytes = vec![0u8; 0x1a];
        bytes[0..2].copy_from_slice(&signature.to_le_bytes());
        bytes
    }

    #[test]
    fn unknown_signature_is_rejected() {
        let bytes = header_bytes(0xFFFF);
        let err = parse(std::io::Cursor::new(bytes), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::BadSignature));
    }

    #[test]
    fn unprotected_v1_file_parses_to_one_sheet() {
        let bytes = header_bytes(SIGNATURE_V1);
        let doc = parse(std::io::Cursor::new(bytes), &Options::default()).unwrap();
        assert_eq!(doc.format(), FileFormat::MultiplanV1);
        assert_eq!(doc.sheet_count(), 1);
        assert!(!doc.encryption().is_encrypted());
    }

    #[test]
    fn protected_v3_file_without_password_errors() {
        let mut bytes = vec![0u8; 0x1a];
        bytes[0..2].copy_from_slice(&SIGNATURE_V3.to_le_bytes());
        bytes[22..24].copy_from_slice(&0x1234u16.to_le_bytes());
        bytes[24..26].copy_from_slice(&0x5678u16.to_le_bytes());
        let err = parse(std::io::Cursor::new(bytes), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::PasswordRequired));
    }
}
