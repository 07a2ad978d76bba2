//! Numeric cell-value codecs.
//!
//! Multiplan's on-disk number cell is a plain IEEE-754 `f64`; the more
//! exotic encodings (BCD, inverse-exponent shorts) belong to the Lotus
//! family and live in `duke-sheets-lotus` instead.

use crate::byte_reader::ByteReader;
use crate::error::Result;

pub fn read_f8(reader: &mut ByteReader<'_>) -> Result<f64> {
    reader.f64()
}
