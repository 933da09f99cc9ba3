//! Bitmap input handling.
//!
//! | Step | Function |
//! |---|---|
//! | **Dimensions** | [`read_dimensions`] / [`apply_header`] (fixed 54-byte header) |
//! | **Pixels** | [`transcode`] (packed RGB → RGBA with a transparency key) |
//!
//! Only the layout this tool targets is understood: a 54-byte header
//! followed directly by tightly packed 3-byte pixels. Bit depth,
//! compression, palettes, row padding and row order are not interpreted.
//! Rows are treated as one contiguous stream.

mod header;
mod transcode;

pub use header::{HEADER_LEN, HEIGHT_OFFSET, WIDTH_OFFSET, apply_header, read_dimensions};
pub use transcode::{INPUT_BYTES_PER_PIXEL, OUTPUT_BYTES_PER_PIXEL, transcode};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BitmapError {
    #[error("Malformed header: expected {expected} bytes, found {len}", expected = HEADER_LEN)]
    MalformedHeader { len: usize },
    #[error("Truncated pixel data: expected {expected} bytes, found {actual}")]
    TruncatedInput { expected: usize, actual: usize },
    #[error("Image dimensions {width}x{height} are too large to address")]
    DimensionsOverflow { width: u32, height: u32 },
    #[error("Out of memory allocating {bytes} bytes for pixel data")]
    OutOfMemory { bytes: usize },
}

/// Split a whole bitmap file into its header and pixel regions.
///
/// Fails with [`BitmapError::MalformedHeader`] if the file is shorter than
/// the header.
pub fn split_file(bytes: &[u8]) -> Result<(&[u8], &[u8]), BitmapError> {
    if bytes.len() < HEADER_LEN {
        return Err(BitmapError::MalformedHeader { len: bytes.len() });
    }
    Ok(bytes.split_at(HEADER_LEN))
}
