//! Source images and filename size inference.
//!
//! Image bytes are never decoded. The nominal size of each image comes from
//! its filename: the stem is split on the first `x` and the leading token is
//! read as a base-10 integer, so `32x32.png` and `256x256@2x.png` give 32 and
//! 256.

use crate::error::{ErrorExt, PackError, Result};
use std::path::{Path, PathBuf};

/// One image to embed in the icon container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// Source file, kept for diagnostics only.
    pub path: PathBuf,

    /// Nominal square dimension in pixels.
    pub size: u32,

    /// Raw file contents, stored verbatim in the output.
    pub data: Vec<u8>,
}

impl IconImage {
    /// Build an entry from bytes that are already in memory.
    pub fn new(path: impl Into<PathBuf>, size: u32, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            size,
            data,
        }
    }

    /// Reads an image file and infers its size from the filename.
    ///
    /// The file is read first, so a missing file is reported as an I/O
    /// error even when its name would not parse either.
    ///
    /// # Errors
    ///
    /// * [`PackError::Fs`] if the file cannot be read
    /// * [`PackError::Format`] if the filename has no usable size prefix
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).fs_context("reading input image", path)?;
        let size = size_from_path(path)?;

        log::debug!(
            "Loaded {}x{} image ({} bytes) from {}",
            size,
            size,
            data.len(),
            path.display()
        );

        Ok(Self::new(path, size, data))
    }

    /// Byte length of the embedded blob.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the blob is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Parses the nominal size from a filename such as `48x48.png`.
///
/// Surrounding whitespace and a leading `+` are accepted on the token. Zero,
/// negative, and out-of-range values are rejected, as is a stem that is
/// missing or not valid UTF-8.
pub fn size_from_path(path: &Path) -> Result<u32> {
    let format_error = |reason: String| PackError::Format {
        path: path.to_path_buf(),
        reason,
    };

    let stem = path
        .file_stem()
        .ok_or_else(|| format_error("filename has no stem".to_string()))?
        .to_str()
        .ok_or_else(|| format_error("filename is not valid UTF-8".to_string()))?;

    let token = stem.split_once('x').map_or(stem, |(head, _)| head).trim();

    let size: u32 = token
        .parse()
        .map_err(|e| format_error(format!("'{}' is not a size: {}", token, e)))?;

    if size == 0 {
        return Err(format_error("size must be positive".to_string()));
    }

    Ok(size)
}
