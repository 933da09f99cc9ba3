//! Array literal rendering.
//!
//! # Output Format
//!
//! ```text
//! unsigned char array[8] = {
//!     0x0a, 0x14, 0x1e, 0xff, 0x9b, 0x9b, 0x9b, 0x00
//! };
//! ```
//!
//! - The declaration uses the configured element type and array name, and
//!   the element count is the pixel buffer length.
//! - Bytes are `0x` plus two lowercase hex digits, separated by `", "`.
//! - After every `bytes_per_line`-th byte (except the last) the separator is
//!   followed by a line break and the indent, so wrapped lines keep their
//!   trailing `", "`.
//!
//! # Architecture
//!
//! [`ArrayLiteral`] implements `Display` and is the single renderer.
//! [`format_array`] collects it into a `String` (pure, for tests) and
//! [`write_array`] streams it into any `io::Write` without building the full
//! text first. Both produce identical bytes.

use crate::config::ArrayConfig;
use std::fmt;
use std::io::{self, Write};

/// A pixel buffer paired with the configuration that names and wraps it.
pub struct ArrayLiteral<'a> {
    config: &'a ArrayConfig,
    pixels: &'a [u8],
}

impl<'a> ArrayLiteral<'a> {
    pub fn new(config: &'a ArrayConfig, pixels: &'a [u8]) -> Self {
        Self { config, pixels }
    }
}

impl fmt::Display for ArrayLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let per_line = config.bytes_per_line.get();

        writeln!(
            f,
            "{} {}[{}] = {{",
            config.element_type,
            config.array_name,
            self.pixels.len()
        )?;
        f.write_str(&config.indent)?;

        let last = self.pixels.len().saturating_sub(1);
        for (i, byte) in self.pixels.iter().enumerate() {
            write!(f, "0x{byte:02x}")?;
            if i < last {
                f.write_str(", ")?;
                if (i + 1) % per_line == 0 {
                    f.write_str("\n")?;
                    f.write_str(&config.indent)?;
                }
            }
        }

        f.write_str("\n};\n")
    }
}

/// Render the array literal as a string.
pub fn format_array(config: &ArrayConfig, pixels: &[u8]) -> String {
    ArrayLiteral::new(config, pixels).to_string()
}

/// Stream the array literal into `out`.
pub fn write_array<W: Write>(config: &ArrayConfig, pixels: &[u8], out: &mut W) -> io::Result<()> {
    write!(out, "{}", ArrayLiteral::new(config, pixels))?;
    out.flush()
}
