//! Shared test utilities for the bmp2array test suite.
//!
//! Builds synthetic bitmap files in memory and writes `.bmp`/`.info`
//! fixture pairs to temp directories.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let file = bitmap_file(2, 1, &[10, 20, 30, 155, 155, 155]);
//! let tmp = TempDir::new().unwrap();
//! let base = write_fixture(tmp.path(), "ship", &file, "transparency = true\n");
//! ```

use crate::bitmap::{HEADER_LEN, HEIGHT_OFFSET, WIDTH_OFFSET};
use std::path::{Path, PathBuf};

// =========================================================================
// In-memory bitmaps
// =========================================================================

/// A 54-byte header with a `BM` signature and the given dimensions.
///
/// The remaining fields are filled in the way a 24-bit uncompressed
/// encoder would write them, so the bytes look like a real file header.
pub fn bitmap_header(width: u32, height: u32) -> Vec<u8> {
    let pixel_bytes = width.wrapping_mul(height).wrapping_mul(3);
    let mut header = vec![0u8; HEADER_LEN];
    header[0..2].copy_from_slice(b"BM");
    header[2..6].copy_from_slice(&(HEADER_LEN as u32).wrapping_add(pixel_bytes).to_le_bytes());
    header[10..14].copy_from_slice(&(HEADER_LEN as u32).to_le_bytes());
    header[14..18].copy_from_slice(&40u32.to_le_bytes());
    header[WIDTH_OFFSET..WIDTH_OFFSET + 4].copy_from_slice(&width.to_le_bytes());
    header[HEIGHT_OFFSET..HEIGHT_OFFSET + 4].copy_from_slice(&height.to_le_bytes());
    header[26..28].copy_from_slice(&1u16.to_le_bytes());
    header[28..30].copy_from_slice(&24u16.to_le_bytes());
    header[34..38].copy_from_slice(&pixel_bytes.to_le_bytes());
    header
}

/// Header followed by `pixels`, which is not checked against the dimensions.
pub fn bitmap_file(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut file = bitmap_header(width, height);
    file.extend_from_slice(pixels);
    file
}

// =========================================================================
// Fixture files
// =========================================================================

/// Write `<dir>/<stem>.bmp` and `<dir>/<stem>.info`, returning the base path.
pub fn write_fixture(dir: &Path, stem: &str, bitmap: &[u8], info: &str) -> PathBuf {
    let base = dir.join(stem);
    std::fs::write(dir.join(format!("{stem}.bmp")), bitmap).unwrap();
    std::fs::write(dir.join(format!("{stem}.info")), info).unwrap();
    base
}
