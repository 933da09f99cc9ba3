//! RGB → RGBA pixel transcoding.
//!
//! Every 3-byte input pixel becomes a 4-byte output pixel. The color bytes
//! are copied unchanged and an alpha byte is appended: `0` when transparency
//! is enabled and the pixel equals the transparency key, `255` otherwise.
//! Pixel order is preserved.

use super::BitmapError;
use crate::config::ArrayConfig;

pub const INPUT_BYTES_PER_PIXEL: usize = 3;
pub const OUTPUT_BYTES_PER_PIXEL: usize = 4;

/// Expand `width * height` packed RGB pixels from `raw` into RGBA.
///
/// `raw` must hold at least `width * height * 3` bytes. Anything past that
/// is ignored.
pub fn transcode(config: &ArrayConfig, raw: &[u8]) -> Result<Vec<u8>, BitmapError> {
    let dims = config.dimensions();
    let overflow = || BitmapError::DimensionsOverflow {
        width: dims.width,
        height: dims.height,
    };
    let expected = dims.byte_len(INPUT_BYTES_PER_PIXEL).ok_or_else(overflow)?;
    let output_len = dims.byte_len(OUTPUT_BYTES_PER_PIXEL).ok_or_else(overflow)?;

    if raw.len() < expected {
        return Err(BitmapError::TruncatedInput {
            expected,
            actual: raw.len(),
        });
    }

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(output_len)
        .map_err(|_| BitmapError::OutOfMemory { bytes: output_len })?;

    for triple in raw[..expected].chunks_exact(INPUT_BYTES_PER_PIXEL) {
        pixels.extend_from_slice(triple);
        pixels.push(config.alpha_for(triple));
    }

    log::debug!(
        "transcoded {} pixels ({} → {} bytes)",
        expected / INPUT_BYTES_PER_PIXEL,
        expected,
        pixels.len()
    );
    Ok(pixels)
}
