//! Lotus decode error taxonomy.

use thiserror::Error;

/// Result type for Lotus parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of stream at offset {offset}")]
    UnexpectedEof { offset: u64 },

    #[error("file signature did not match any known Lotus 1-2-3 version")]
    BadSignature,

    #[error("malformed zone at offset {offset}: {reason}")]
    BadRecord { offset: u64, reason: String },

    #[error("malformed payload in zone 0x{zone_type:04x}: {reason}")]
    BadPayload { zone_type: u16, reason: String },

    #[error("a password is required to open this file")]
    PasswordRequired,

    #[error("unsupported Lotus format variant: {0}")]
    UnsupportedFormatVariant(String),

    #[error("compound file error: {0}")]
    Cfb(String),

    #[error(transparent)]
    Core(#[from] duke_sheets_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
