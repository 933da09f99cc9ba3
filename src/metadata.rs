//! `.info` metadata parsing.
//!
//! The metadata file sits next to the bitmap (`ship.bmp` + `ship.info`) and
//! holds one `key = value` assertion per line:
//!
//! ```text
//! transparency       = true
//! transparency_red   = 0xFF
//! transparency_green = 0b00000000
//! transparency_blue  = 255
//! type               = const uint8_t
//! name               = ship_rgba
//! tab                = "\t\t"
//! bytes_per_line     = 12
//! ```
//!
//! ## Tolerance
//!
//! The parser never fails. Lines without `=`, lines with an empty key or
//! value, and unknown keys are skipped. Keys are matched case-insensitively
//! and surrounding whitespace is ignored. Later lines override earlier ones.
//!
//! ## Numbers
//!
//! Numbers are read leniently, C style: an optional sign followed by the
//! longest run of digits valid for the radix. Trailing text is ignored
//! (`"12px"` reads as 12) and text with no digits reads as 0. The
//! `transparency_*` channels also accept `0x`/`0X` hexadecimal and `0b`/`0B`
//! binary through [`parse_flexible_int`]. Hex digits must follow the prefix
//! directly: `0x-1` and `0x 1F` read as 0. Binary digits may be preceded by
//! whitespace and a sign, so `0b-1` reads as -1.
//!
//! ## Encoding
//!
//! Metadata files are decoded as UTF-8, lossily. A byte that is not valid
//! UTF-8 becomes U+FFFD, and that replacement character is what ends up in a
//! `name`, `type` or `tab` value. Keys and numbers are plain ASCII, so they
//! are unaffected.
//!
//! ## `tab`
//!
//! The `tab` value is expected to be wrapped in a pair of delimiters so that
//! whitespace survives trimming: `tab = "  "`, `tab = [  ]` and
//! `tab = '  '` all set a two-space indent. Exactly one character is dropped
//! from each end, whatever it is.

use crate::config::ArrayConfig;
use crate::types::BytesPerLine;
use std::io;
use std::path::Path;

/// Read a metadata file into a string.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected, so a stray
/// byte only spoils the value it appears in.
pub fn read_info_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Apply every line of `text` to `config`, in order.
///
/// Returns the number of lines with a recognized key.
pub fn parse_info(text: &str, config: &mut ArrayConfig) -> usize {
    let mut recognized = 0;
    for (index, line) in text.lines().enumerate() {
        if parse_info_line(line, config) {
            recognized += 1;
        } else {
            log::trace!("info line {}: ignored {:?}", index + 1, line);
        }
    }
    recognized
}

/// Apply a single `key = value` line to `config`.
///
/// Returns `false` if the line was skipped (malformed or unknown key).
pub fn parse_info_line(line: &str, config: &mut ArrayConfig) -> bool {
    let Some((key, value)) = line.split_once('=') else {
        return false;
    };
    let key = key.trim().to_ascii_lowercase();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return false;
    }

    match key.as_str() {
        "transparency" => {
            if value.eq_ignore_ascii_case("true") || parse_decimal(value) != 0 {
                config.transparency_enabled = true;
                log::debug!("transparency enabled");
            }
        }
        channel if channel.starts_with("transparency_") => {
            // Truncation to the low 8 bits is intended.
            let byte = parse_flexible_int(value) as u8;
            let rgb = &mut config.transparency_key;
            match channel {
                "transparency_red" => rgb.red = byte,
                "transparency_green" => rgb.green = byte,
                "transparency_blue" => rgb.blue = byte,
                _ => {
                    log::trace!("{channel}: not a color channel, accepted without effect");
                    return true;
                }
            }
            log::debug!("{channel} = {byte}");
        }
        "type" | "array_type" => {
            config.element_type = value.to_string();
            log::debug!("element type = {value:?}");
        }
        "name" | "array_name" => {
            config.array_name = value.to_string();
            log::debug!("array name = {value:?}");
        }
        "bytes" | "bytes_per_line" => {
            config.bytes_per_line = BytesPerLine::new(parse_decimal(value));
            log::debug!("bytes per line = {}", config.bytes_per_line.get());
        }
        "tab" => {
            config.indent = strip_wrapping(value).to_string();
            log::debug!("indent = {:?}", config.indent);
        }
        _ => return false,
    }
    true
}

/// Parse an integer written in decimal, `0x` hexadecimal or `0b` binary.
///
/// ```
/// # use bmp2array::metadata::parse_flexible_int;
/// assert_eq!(parse_flexible_int("0x9B"), 155);
/// assert_eq!(parse_flexible_int("0b10011011"), 155);
/// assert_eq!(parse_flexible_int("155"), 155);
/// assert_eq!(parse_flexible_int("teal"), 0);
/// ```
pub fn parse_flexible_int(text: &str) -> i64 {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        parse_digits(hex, 16)
    } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        parse_prefix(bin, 2)
    } else {
        parse_decimal(text)
    }
}

/// Lenient decimal parse; non-numeric text yields 0.
pub fn parse_decimal(text: &str) -> i64 {
    parse_prefix(text, 10)
}

/// Parse an optional sign and the longest run of `radix` digits.
///
/// Saturates instead of wrapping on overflow.
fn parse_prefix(text: &str, radix: u32) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = parse_digits(digits, radix);
    if negative { value.saturating_neg() } else { value }
}

/// The run of `radix` digits at the very start of `text`, no sign or
/// whitespace allowed. Saturates on overflow.
fn parse_digits(text: &str, radix: u32) -> i64 {
    text.chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0i64, |value, digit| {
            value
                .saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit))
        })
}

/// Drop the first and last character. Shorter inputs become empty.
fn strip_wrapping(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// A documented `.info` file listing every key with its default value.
pub fn stock_info_file() -> &'static str {
    STOCK_INFO
}

const STOCK_INFO: &str = "\
# bmp2array metadata file
#
# One assignment per line. Keys are case-insensitive, unknown keys and
# malformed lines are ignored, and later lines override earlier ones.

# Mark pixels matching the key color as fully transparent (alpha 0).
# `true` or any nonzero number enables it.
transparency = false

# Key color channels: decimal, 0x hexadecimal or 0b binary, truncated to 8 bits.
transparency_red = 0
transparency_green = 0
transparency_blue = 0

# Element type and identifier of the emitted declaration (aliases: array_type, array_name).
type = unsigned char
name = array

# Indent for array lines. The first and last character are stripped, so wrap
# the whitespace in quotes or brackets.
tab = \"    \"

# Bytes per output line (alias: bytes). Values below 1 become 1.
bytes_per_line = 16
";
