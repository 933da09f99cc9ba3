//! Fixed-offset header reader.
//!
//! Header layout (only the fields read here):
//!
//! ```text
//! offset  size  field
//!      0     2  "BM" signature          (not checked)
//!     18     4  width,  little-endian
//!     22     4  height, little-endian
//!     54        pixel data starts
//! ```
//!
//! Both fields are read as full 32-bit little-endian values. Reading only
//! the low byte at each offset would cap images at 255 pixels per side;
//! for images within that limit the two readings agree.

use super::BitmapError;
use crate::config::ArrayConfig;
use crate::types::Dimensions;

pub const HEADER_LEN: usize = 54;
pub const WIDTH_OFFSET: usize = 18;
pub const HEIGHT_OFFSET: usize = 22;

/// Read width and height from the first [`HEADER_LEN`] bytes of a bitmap.
pub fn read_dimensions(header: &[u8]) -> Result<Dimensions, BitmapError> {
    if header.len() < HEADER_LEN {
        return Err(BitmapError::MalformedHeader { len: header.len() });
    }
    Ok(Dimensions {
        width: read_u32_le(header, WIDTH_OFFSET),
        height: read_u32_le(header, HEIGHT_OFFSET),
    })
}

/// Read the header and store its dimensions in `config`.
pub fn apply_header(header: &[u8], config: &mut ArrayConfig) -> Result<Dimensions, BitmapError> {
    let dims = read_dimensions(header)?;
    log::debug!("bitmap header: {dims}");
    config.set_dimensions(dims);
    Ok(dims)
}

/// Caller guarantees `offset + 4 <= data.len()`.
fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
