//! Binary layout of the filter-table assets.
//!
//! All fields are little-endian:
//!
//! | field      | type          |
//! |------------|---------------|
//! | magic      | `b"KSRF"`     |
//! | version    | `u32` = 1     |
//! | rolloff    | `f64`         |
//! | precision  | `u32`         |
//! | tap count  | `u32`         |
//! | taps       | `f64` × count |

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::{FilterLoadError, FilterTable, FilterType};

const MAGIC: &[u8; 4] = b"KSRF";
const VERSION: u32 = 1;
const HEADER_LEN: usize = 4 + 4 + 8 + 4 + 4;

pub(crate) const FAST: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/kaiser_fast.bin"));
pub(crate) const BEST: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/kaiser_best.bin"));

/// The embedded asset for a preset.
pub(crate) fn embedded(preset: FilterType) -> &'static [u8] {
    match preset {
        FilterType::Fast => FAST,
        FilterType::Best => BEST,
    }
}

pub(crate) fn decode(preset: FilterType, bytes: &[u8]) -> Result<FilterTable, FilterLoadError> {
    let fail = |reason: String| FilterLoadError { preset, reason };

    if bytes.len() < HEADER_LEN {
        return Err(fail(format!(
            "asset is {} bytes, shorter than the {HEADER_LEN} byte header",
            bytes.len()
        )));
    }

    let mut cursor = Cursor::new(bytes);
    let mut magic = [0u8; 4];
    cursor
        .read_exact(&mut magic)
        .map_err(|e| fail(e.to_string()))?;
    if &magic != MAGIC {
        return Err(fail(format!("bad magic {magic:?}")));
    }

    let version = read_u32(&mut cursor).map_err(&fail)?;
    if version != VERSION {
        return Err(fail(format!("unsupported asset version {version}")));
    }

    let rolloff = cursor
        .read_f64::<LittleEndian>()
        .map_err(|e| fail(e.to_string()))?;
    let precision = read_u32(&mut cursor).map_err(&fail)?;
    let count = read_u32(&mut cursor).map_err(&fail)? as usize;

    if rolloff != preset.rolloff() {
        return Err(fail(format!(
            "rolloff {rolloff} does not match preset rolloff {}",
            preset.rolloff()
        )));
    }
    if precision != preset.precision() {
        return Err(fail(format!(
            "precision {precision} does not match preset precision {}",
            preset.precision()
        )));
    }
    if count != preset.table_len() {
        return Err(fail(format!(
            "{count} taps, expected {} for this preset",
            preset.table_len()
        )));
    }

    let body = bytes.len() - HEADER_LEN;
    if body != count * 8 {
        return Err(fail(format!(
            "{body} bytes of taps, expected {}",
            count * 8
        )));
    }

    let mut half_window = vec![0.0; count];
    cursor
        .read_f64_into::<LittleEndian>(&mut half_window)
        .map_err(|e| fail(e.to_string()))?;

    if let Some(pos) = half_window.iter().position(|tap| !tap.is_finite()) {
        return Err(fail(format!("tap {pos} is not finite")));
    }

    Ok(FilterTable {
        half_window,
        rolloff,
        precision,
    })
}

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32, String> {
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|e| e.to_string())
}

/// Serializes a table in the asset layout.
pub(crate) fn encode(table: &FilterTable) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + table.half_window.len() * 8);
    out.extend_from_slice(MAGIC);
    // Writing into a Vec cannot fail.
    let _ = out.write_u32::<LittleEndian>(VERSION);
    let _ = out.write_f64::<LittleEndian>(table.rolloff);
    let _ = out.write_u32::<LittleEndian>(table.precision);
    let _ = out.write_u32::<LittleEndian>(table.half_window.len() as u32);
    for &tap in &table.half_window {
        let _ = out.write_f64::<LittleEndian>(tap);
    }
    out
}
