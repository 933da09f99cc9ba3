//! End-to-end conversion: base path → array literal.
//!
//! ```text
//! BASE.bmp  → split_file → apply_header ─┐
//! BASE.info → parse_info ────────────────┴→ ArrayConfig
//! pixel region + ArrayConfig → transcode → RGBA buffer → output::write_array
//! ```
//!
//! [`convert_bytes`] is the pure core and works on in-memory inputs.
//! [`resolve_inputs`] and [`convert_files`] add the filesystem around it.

use crate::bitmap::{self, BitmapError};
use crate::config::ArrayConfig;
use crate::metadata;
use crate::output;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EXIT_USAGE: u8 = 1;
pub const EXIT_MISSING_FILE: u8 = 2;
pub const EXIT_OUT_OF_MEMORY: u8 = 3;
pub const EXIT_INVALID_BITMAP: u8 = 4;
pub const EXIT_IO: u8 = 5;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unable to locate file '{}'", .0.display())]
    MissingFile(PathBuf),
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to create '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
    #[error("Invalid bitmap: {0}")]
    Bitmap(#[from] BitmapError),
}

impl ConvertError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::MissingFile(_) => EXIT_MISSING_FILE,
            ConvertError::Bitmap(BitmapError::OutOfMemory { .. }) => EXIT_OUT_OF_MEMORY,
            ConvertError::Bitmap(_) => EXIT_INVALID_BITMAP,
            ConvertError::Read { .. } | ConvertError::Create { .. } | ConvertError::Write(_) => {
                EXIT_IO
            }
        }
    }
}

/// The two input files derived from a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub bitmap: PathBuf,
    pub info: PathBuf,
}

impl InputPaths {
    /// Derive `BASE.bmp` and `BASE.info` without checking that they exist.
    ///
    /// The extension is appended to the text of `base`, so any dots already
    /// in the file name are kept (`ship.v2` → `ship.v2.bmp`).
    pub fn from_base(base: &Path) -> Self {
        Self {
            bitmap: with_suffix(base, ".bmp"),
            info: with_suffix(base, ".info"),
        }
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// Derive the input paths and check that both files exist, bitmap first.
pub fn resolve_inputs(base: &Path) -> Result<InputPaths, ConvertError> {
    let paths = InputPaths::from_base(base);
    for path in [&paths.bitmap, &paths.info] {
        if !path.is_file() {
            return Err(ConvertError::MissingFile(path.clone()));
        }
    }
    Ok(paths)
}

/// Result of a conversion: the final configuration and the RGBA buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub config: ArrayConfig,
    pub pixels: Vec<u8>,
}

impl Conversion {
    pub fn render(&self) -> String {
        output::format_array(&self.config, &self.pixels)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), ConvertError> {
        output::write_array(&self.config, &self.pixels, out).map_err(ConvertError::Write)
    }
}

/// Run the header, metadata and transcode stages on in-memory inputs.
pub fn convert_bytes(bitmap_file: &[u8], info_text: &str) -> Result<Conversion, BitmapError> {
    let mut config = ArrayConfig::default();

    let (header, pixel_data) = bitmap::split_file(bitmap_file)?;
    bitmap::apply_header(header, &mut config)?;

    let recognized = metadata::parse_info(info_text, &mut config);
    log::debug!("metadata: {recognized} recognized lines");

    let pixels = bitmap::transcode(&config, pixel_data)?;
    Ok(Conversion { config, pixels })
}

/// Read both input files and convert them.
pub fn convert_files(paths: &InputPaths) -> Result<Conversion, ConvertError> {
    let bitmap_file = read_bitmap_file(&paths.bitmap)?;
    let info_text = metadata::read_info_file(&paths.info).map_err(|source| ConvertError::Read {
        path: paths.info.clone(),
        source,
    })?;
    log::debug!(
        "read {} ({} bytes) and {}",
        paths.bitmap.display(),
        bitmap_file.len(),
        paths.info.display()
    );

    Ok(convert_bytes(&bitmap_file, &info_text)?)
}

/// Read a whole bitmap file into a buffer reserved up front.
///
/// A buffer that cannot be allocated is reported as
/// [`BitmapError::OutOfMemory`] instead of aborting the process.
pub fn read_bitmap_file(path: &Path) -> Result<Vec<u8>, ConvertError> {
    let read_error = |source: io::Error| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(read_error)?;
    let len = file.metadata().map_err(read_error)?.len();
    let bytes = usize::try_from(len).unwrap_or(usize::MAX);

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(bytes)
        .map_err(|_| BitmapError::OutOfMemory { bytes })?;
    file.read_to_end(&mut buffer).map_err(read_error)?;
    Ok(buffer)
}
