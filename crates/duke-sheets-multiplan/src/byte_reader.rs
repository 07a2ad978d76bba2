//! Little-endian byte cursor over an in-memory Multiplan stream.
//!
//! Multiplan files are read whole into memory before parsing (they are
//! small relative to modern heap budgets), so this is a plain slice cursor
//! rather than a `Read + Seek` adapter; the `tell`/`seek_abs`/`skip` names
//! follow spec §4.A's byte-reader component.

use crate::error::{Error, Result};

pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn tell(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn end_of_stream(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn seek_abs(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(Error::UnexpectedEof { offset: pos as u64 });
        }
        self.pos = pos;
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.seek_abs(self.pos + n)
    }

    pub fn check_position(&self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            Err(Error::UnexpectedEof { offset: pos as u64 })
        } else {
            Ok(())
        }
    }

    pub fn peek(&self, n: usize) -> Result<&'a [u8]> {
        self.check_position(self.pos + n)?;
        Ok(&self.data[self.pos..self.pos + n])
    }

    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        let slice = self.peek(n)?;
        self.pos += n;
        Ok(slice)
    }

    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.read(1)?[0])
    }

    pub fn i8(&mut self) -> Result<i8> {
        Ok(self.u8()? as i8)
    }

    pub fn u16(&mut self) -> Result<u16> {
        let b = self.read(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn i16(&mut self) -> Result<i16> {
        Ok(self.u16()? as i16)
    }

    pub fn u32(&mut self) -> Result<u32> {
        let b = self.read(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn i32(&mut self) -> Result<i32> {
        Ok(self.u32()? as i32)
    }

    pub fn f64(&mut self) -> Result<f64> {
        let b = self.read(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(b);
        Ok(f64::from_le_bytes(buf))
    }
}
