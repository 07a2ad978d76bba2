//! Style-table records: font, color, and number-format entries.
//!
//! Grounded on `LotusStyleManager::{readFontStyleA0, readColorStyle,
//! readFormatStyle}`. Lotus also defines a handful of richer per-cell-format
//! records (`0xfd2`/`0xfe6`, 200+ lines apiece in the reference parser) that
//! assemble a complete [`duke_sheets_core::Style`] directly; this module
//! only reproduces the three simpler tables that feed the font/fill/
//! prefix-suffix fields of [`duke_sheets_core::Style`] - a record keyed by
//! one of those richer ids is skipped rather than decoded.

use std::collections::HashMap;

use duke_sheets_core::style::Underline;
use duke_sheets_core::{Color, FontStyle, PaletteSize, PatternStyle};

use crate::byte_reader::ByteReader;
use crate::error::{Error, Result};

pub const FONT_STYLE: u16 = 0xfa0;
pub const COLOR_STYLE: u16 = 0xfb4;
pub const FORMAT_STYLE: u16 = 0xfbe;

/// A format-style table entry: the prefix/suffix label characters Lotus
/// attaches to some number formats (e.g. a currency symbol or unit suffix).
#[derive(Debug, Clone, Default)]
pub struct FormatEntry {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// The style tables accumulated while walking a sheet's zones.
#[derive(Debug, Default)]
pub struct StyleTables {
    pub fonts: HashMap<u8, FontStyle>,
    pub formats: HashMap<u8, FormatEntry>,
    pub fills: HashMap<u8, PatternStyle>,
}

fn color256(index: u8) -> Color {
    if index == 0xEF {
        Color::Auto
    } else {
        Color::indexed(index as u16, PaletteSize::TwoFiftySix)
    }
}

/// `readFontStyleA0`: a fixed 12-byte record (id, reserved flag, two
/// reserved bytes, a marker byte, font-table id, size in 32nds of a point,
/// foreground/background color indices, an attribute bitmask, a trailing
/// reserved byte).
pub fn read_font_style(reader: &mut ByteReader<'_>, payload_len: usize) -> Result<(u8, FontStyle)> {
    if payload_len != 12 {
        return Err(Error::BadPayload {
            zone_type: FONT_STYLE,
            reason: format!("font style record length {payload_len} != 12"),
        });
    }
    let id = reader.u8()?;
    reader.skip(4)?; // reserved flag + two reserved bytes + marker byte
    let _font_table_id = reader.u8()?;
    let size_32nds = reader.u16()?;
    let fg = reader.u8()?;
    let _bg = reader.u8()?;
    let attrs = reader.u8()?;
    reader.skip(1)?; // trailing reserved byte

    let mut font = FontStyle::default();
    if size_32nds != 0 {
        font.size = size_32nds as f64 / 32.0;
    }
    font.color = color256(fg);
    font.bold = attrs & 0x01 != 0;
    font.italic = attrs & 0x02 != 0;
    if attrs & 0x04 != 0 {
        font.underline = Underline::Single;
    }
    font.outline = attrs & 0x08 != 0;
    font.shadow = attrs & 0x10 != 0;

    Ok((id, font))
}

/// `readColorStyle`: one or two bytes per color index (`colorSz`), four
/// color-table indices (foreground/background/text/fill-stop, per
/// `ColorStyle::m_colors`) plus a fill-pattern id. The record is 7 bytes
/// wide when colors are 1-byte indices, 11 bytes when they are 2-byte
/// indices.
pub fn read_color_style(reader: &mut ByteReader<'_>, payload_len: usize) -> Result<(u8, PatternStyle)> {
    let color_width = match payload_len {
        7 => 1,
        11 => 2,
        other => {
            return Err(Error::BadPayload {
                zone_type: COLOR_STYLE,
                reason: format!("color style record length {other} is neither 7 nor 11"),
            })
        }
    };
    let id = reader.u8()?;
    reader.skip(1)?; // flag, always 0x20

    let mut colors = [Color::Auto; 4];
    for slot in colors.iter_mut() {
        let idx = if color_width == 1 {
            reader.u8()? as u16
        } else {
            reader.u16()?
        };
        *slot = if idx == 0xEF {
            Color::Auto
        } else {
            Color::indexed(idx, PaletteSize::TwoFiftySix)
        };
    }
    let pattern_id = reader.u8()?;

    Ok((
        id,
        PatternStyle {
            pattern_id: pattern_id as u16,
            foreground: colors[0],
            background: colors[1],
        },
    ))
}

/// `readFormatStyle`: an id, a flag byte, ten reserved `u16`s, then an
/// optional length-prefixed prefix string and an optional length-prefixed
/// suffix string (each guarded by a `0xf`-means-absent / `0x3c`-means-present
/// tag byte).
pub fn read_format_style(reader: &mut ByteReader<'_>, payload_len: usize) -> Result<(u8, FormatEntry)> {
    if payload_len < 23 {
        return Err(Error::BadPayload {
            zone_type: FORMAT_STYLE,
            reason: format!("format style record length {payload_len} < 23"),
        });
    }
    let id = reader.u8()?;
    reader.skip(1)?; // flag, always 0x30
    reader.skip(20)?; // ten reserved u16 fields

    let mut entry = FormatEntry::default();
    for slot in 0..2 {
        let tag = reader.u8()?;
        if tag == 0xf {
            continue;
        }
        if tag != 0x3c {
            break;
        }
        let len = reader.u8()? as usize;
        let text = String::from_utf8_lossy(reader.read(len)?).into_owned();
        if slot == 0 {
            entry.prefix = Some(text);
        } else {
            entry.suffix = Some(text);
        }
    }

    Ok((id, entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_style_rejects_wrong_length() {
        let bytes = [0u8; 10];
        let mut reader = ByteReader::new(&bytes);
        assert!(read_font_style(&mut reader, 10).is_err());
    }

    #[test]
    fn color_style_reads_single_byte_indices() {
        let bytes = [3u8, 0x20, 0xEF, 0xEF, 0xEF, 0xEF, 0];
        let mut reader = ByteReader::new(&bytes);
        let (id, fill) = read_color_style(&mut reader, 7).unwrap();
        assert_eq!(id, 3);
        assert!(fill.is_none());
    }
}
