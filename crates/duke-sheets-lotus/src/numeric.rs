//! Numeric cell-value codecs.
//!
//! Lotus stores numbers in four different on-disk shapes depending on the
//! cell's record type, each transcribed verbatim from
//! `libwps_internal.cpp`'s `readDouble{8,10,2Inv,4Inv}`:
//! - [`read_f8`] - an 8-byte packed float (same bit layout as IEEE-754
//!   double precision, just built up byte by byte in the reference code).
//! - [`read_f10`] - a 10-byte extended-precision float with an explicit
//!   8-byte fractional mantissa (big-endian within the field) and a 16-bit
//!   signed-magnitude biased exponent.
//! - [`read_inverse_exponent_16`] / [`read_inverse_exponent_32`] - compact
//!   16-/32-bit packed numbers used for small integers and simple decimals.

use crate::byte_reader::ByteReader;
use crate::error::Result;

pub fn read_f8(reader: &mut ByteReader<'_>) -> Result<f64> {
    reader.f64()
}

/// 10-byte extended-precision float: an 8-byte mantissa (read byte by byte,
/// most-significant-first, into the `[0, 2)` range) and a 16-bit exponent
/// biased by `0x3fff`, whose top bit is the sign.
pub fn read_f10(reader: &mut ByteReader<'_>) -> Result<f64> {
    let mut mantissa = 0.0f64;
    for _ in 0..8 {
        let byte = reader.u8()? as f64;
        mantissa = mantissa / 256.0 + byte / 128.0;
    }
    let raw_exp = reader.u16()?;
    let sign = if raw_exp & 0x8000 != 0 { -1.0 } else { 1.0 };
    let exp = (raw_exp & 0x7fff) as i32;

    if exp == 0 {
        return Ok(0.0);
    }
    if exp == 0x7fff {
        return Ok(f64::NAN);
    }
    Ok(sign * mantissa * 2f64.powi(exp - 0x3fff))
}

/// 16-bit packed number: either a plain signed 15-bit integer (shifted left
/// one bit, low bit clear) or - when the low bit is set - a 12-bit signed
/// mantissa scaled by one of eight fixed factors selected by the next 3
/// exponent bits.
pub fn read_inverse_exponent_16(reader: &mut ByteReader<'_>) -> Result<f64> {
    let val = reader.u16()? as i32;
    let exp = val & 0xf;
    if exp & 1 == 1 {
        let mut mantissa = val >> 4;
        if mantissa & 0x800 != 0 {
            mantissa -= 0x1000;
        }
        const FACTORS: [f64; 8] = [5000.0, 500.0, 0.05, 0.005, 0.0005, 0.00005, 1.0 / 16.0, 1.0 / 64.0];
        Ok(mantissa as f64 * FACTORS[(exp / 2) as usize])
    } else {
        let signed = val as i16 as i32;
        Ok((signed >> 1) as f64)
    }
}

/// 32-bit packed number: a 26-bit signed mantissa, a sign bit, and a 4-bit
/// decimal exponent applied as either a multiplier or a divisor.
pub fn read_inverse_exponent_32(reader: &mut ByteReader<'_>) -> Result<f64> {
    let val = reader.u32()?;
    let exp = (val & 0xf) as i32;
    let mut mantissa = (val >> 6) as i64;
    if val & 0x20 != 0 {
        mantissa = -mantissa;
    }
    if exp == 0 {
        return Ok(mantissa as f64);
    }
    if val & 0x10 != 0 {
        Ok(mantissa as f64 / 10f64.powi(exp))
    } else {
        Ok(mantissa as f64 * 10f64.powi(exp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_exponent_16_plain_integer() {
        let bytes = (4i16 << 1).to_le_bytes();
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(read_inverse_exponent_16(&mut reader).unwrap(), 4.0);
    }

    #[test]
    fn f10_zero_exponent_is_zero() {
        let bytes = [0u8; 10];
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(read_f10(&mut reader).unwrap(), 0.0);
    }
}
