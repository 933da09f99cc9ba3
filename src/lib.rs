//! # bmp2array
//!
//! Turns a 24-bit bitmap plus a small `.info` metadata file into a C-style
//! byte array literal with an alpha channel, ready to paste into firmware,
//! games or anything else that embeds images as source.
//!
//! # Architecture: Three Stages and a Formatter
//!
//! ```text
//! 1. Header     BASE.bmp[0..54]   →  width, height        (bitmap::apply_header)
//! 2. Metadata   BASE.info         →  ArrayConfig           (metadata::parse_info)
//! 3. Transcode  BASE.bmp[54..]    →  RGBA buffer           (bitmap::transcode)
//! 4. Format     ArrayConfig + RGBA →  array literal text   (output::write_array)
//! ```
//!
//! All stages are plain functions over an explicitly owned [`ArrayConfig`],
//! so each one can be tested without touching the filesystem.
//! [`convert::convert_bytes`] runs the first three on in-memory inputs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | [`ArrayConfig`] record and its defaults |
//! | [`metadata`] | Tolerant `key = value` parser with decimal/hex/binary numbers |
//! | [`bitmap`] | Fixed-offset header reader and RGB → RGBA transcoder |
//! | [`output`] | Array literal rendering (string or streaming) |
//! | [`convert`] | Input path resolution, stage orchestration, exit codes |
//! | [`types`] | Small shared value types (`Dimensions`, `Rgb`, `BytesPerLine`) |
//!
//! # Design Decisions
//!
//! ## Metadata never fails
//!
//! A metadata file is hand-written and often copied between assets. Unknown
//! keys, typos and malformed lines are skipped (and logged at `trace`), never
//! reported as errors. Only structural problems with the bitmap itself are
//! fatal.
//!
//! ## Full 32-bit dimensions
//!
//! Width and height are read as full little-endian fields at offsets 18 and
//! 22. For images up to 255 pixels per side this agrees with readers that
//! only look at the low byte.
//!
//! ## No format interpretation
//!
//! Pixel data is taken as one contiguous stream of RGB triples right after
//! the 54-byte header. Row padding, row order and channel order are not
//! interpreted: what is in the file is what ends up in the array.

pub mod bitmap;
pub mod config;
pub mod convert;
pub mod metadata;
pub mod output;
pub mod types;

pub use config::ArrayConfig;

#[cfg(test)]
pub(crate) mod test_helpers;
