//! Multiplan decode error taxonomy.

use thiserror::Error;

/// Result type for Multiplan parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of stream at offset {offset}")]
    UnexpectedEof { offset: u64 },

    #[error("file signature did not match any known Multiplan version")]
    BadSignature,

    #[error("malformed record at offset {offset}: {reason}")]
    BadRecord { offset: u64, reason: String },

    #[error("malformed payload in record type 0x{record_type:04x}: {reason}")]
    BadPayload { record_type: u16, reason: String },

    #[error("a password is required to open this file")]
    PasswordRequired,

    #[error("unsupported Multiplan format variant: {0}")]
    UnsupportedFormatVariant(String),

    #[error(transparent)]
    Core(#[from] duke_sheets_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
