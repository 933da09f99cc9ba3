//! Array generation configuration.
//!
//! A single [`ArrayConfig`] record carries everything the later stages need.
//! It is built up in layers, each one overriding the previous:
//!
//! ```text
//! ArrayConfig::default()     stock defaults
//!   → BASE.info              metadata file, last key wins (metadata::parse_info)
//!   → BASE.bmp header        width / height (bitmap::apply_header)
//! ```
//!
//! After the header stage the record is only read, never mutated.
//!
//! ## Defaults
//!
//! ```text
//! transparency       = false
//! transparency_red   = 0
//! transparency_green = 0
//! transparency_blue  = 0
//! type               = unsigned char
//! name               = array
//! tab                = "    "      (four spaces)
//! bytes_per_line     = 16
//! ```

use crate::types::{BytesPerLine, Dimensions, Rgb};

/// Configuration for one bitmap → array conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Image width in pixels, set by the header stage.
    pub width: u32,
    /// Image height in pixels, set by the header stage.
    pub height: u32,
    /// Whether pixels matching [`transparency_key`](Self::transparency_key)
    /// get alpha 0.
    pub transparency_enabled: bool,
    pub transparency_key: Rgb,
    /// Prefix written at the start of every line of array contents.
    pub indent: String,
    /// Element type used in the emitted declaration.
    pub element_type: String,
    /// Identifier used in the emitted declaration.
    pub array_name: String,
    pub bytes_per_line: BytesPerLine,
}

pub const DEFAULT_INDENT: &str = "    ";
pub const DEFAULT_ELEMENT_TYPE: &str = "unsigned char";
pub const DEFAULT_ARRAY_NAME: &str = "array";

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            transparency_enabled: false,
            transparency_key: Rgb::default(),
            indent: DEFAULT_INDENT.to_string(),
            element_type: DEFAULT_ELEMENT_TYPE.to_string(),
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            bytes_per_line: BytesPerLine::default(),
        }
    }
}

impl ArrayConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    pub fn set_dimensions(&mut self, dims: Dimensions) {
        self.width = dims.width;
        self.height = dims.height;
    }

    /// Alpha byte for an input `[r, g, b]` triple under the current key rule.
    pub fn alpha_for(&self, triple: &[u8]) -> u8 {
        if self.transparency_enabled && self.transparency_key.matches(triple) {
            0
        } else {
            255
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ArrayConfig::default();
        assert_eq!(config.width, 0);
        assert_eq!(config.height, 0);
        assert!(!config.transparency_enabled);
        assert_eq!(config.transparency_key, Rgb::new(0, 0, 0));
        assert_eq!(config.indent, "    ");
        assert_eq!(config.element_type, "unsigned char");
        assert_eq!(config.array_name, "array");
        assert_eq!(config.bytes_per_line.get(), 16);
    }

    #[test]
    fn set_dimensions_roundtrips() {
        let mut config = ArrayConfig::default();
        let dims = Dimensions {
            width: 40,
            height: 30,
        };
        config.set_dimensions(dims);
        assert_eq!(config.dimensions(), dims);
    }

    #[test]
    fn alpha_opaque_when_transparency_disabled() {
        let config = ArrayConfig::default();
        // Default key is black, but the flag is off.
        assert_eq!(config.alpha_for(&[0, 0, 0]), 255);
    }

    #[test]
    fn alpha_zero_only_for_key_when_enabled() {
        let config = ArrayConfig {
            transparency_enabled: true,
            transparency_key: Rgb::new(255, 0, 255),
            ..ArrayConfig::default()
        };
        assert_eq!(config.alpha_for(&[255, 0, 255]), 0);
        assert_eq!(config.alpha_for(&[255, 0, 254]), 255);
        assert_eq!(config.alpha_for(&[0, 0, 0]), 255);
    }
}
