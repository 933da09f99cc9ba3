//! Shared value types used across all pipeline stages.
//!
//! These are small `Copy` types that carry their own invariants, so the
//! stages that consume them never have to re-check ranges.

use std::fmt;

/// Image dimensions in pixels, as read from the bitmap header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Number of pixels, or `None` if it does not fit in `usize`.
    pub fn pixel_count(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Byte length of a buffer holding `bytes_per_pixel` bytes per pixel.
    pub fn byte_len(self, bytes_per_pixel: usize) -> Option<usize> {
        self.pixel_count()?.checked_mul(bytes_per_pixel)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An 8-bit RGB triple, used as the transparency key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Component-wise comparison against a raw `[r, g, b]` triple.
    pub fn matches(self, triple: &[u8]) -> bool {
        triple == [self.red, self.green, self.blue]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Output wrap width in bytes (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytesPerLine(usize);

impl BytesPerLine {
    /// Build from any signed value, clamping everything below 1 up to 1.
    pub fn new(value: i64) -> Self {
        Self(usize::try_from(value.max(1)).unwrap_or(usize::MAX))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BytesPerLine {
    fn default() -> Self {
        Self(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_per_line_clamps_to_one() {
        assert_eq!(BytesPerLine::new(0).get(), 1);
        assert_eq!(BytesPerLine::new(-3).get(), 1);
        assert_eq!(BytesPerLine::new(i64::MIN).get(), 1);
        assert_eq!(BytesPerLine::new(12).get(), 12);
    }

    #[test]
    fn bytes_per_line_default_is_16() {
        assert_eq!(BytesPerLine::default().get(), 16);
    }

    #[test]
    fn rgb_matches_exact_triple_only() {
        let key = Rgb::new(155, 155, 155);
        assert!(key.matches(&[155, 155, 155]));
        assert!(!key.matches(&[155, 155, 154]));
        assert!(!key.matches(&[154, 155, 155]));
    }

    #[test]
    fn dimensions_byte_len() {
        let dims = Dimensions {
            width: 2,
            height: 3,
        };
        assert_eq!(dims.pixel_count(), Some(6));
        assert_eq!(dims.byte_len(3), Some(18));
        assert_eq!(dims.byte_len(4), Some(24));
    }

    #[test]
    fn dimensions_display() {
        let dims = Dimensions {
            width: 16,
            height: 9,
        };
        assert_eq!(dims.to_string(), "16x9");
    }
}
