//! Packing a set of PNG files into one ICO file.

use crate::error::{ErrorExt, Result};
use crate::icon::encoder::{self, IconDirEntry};
use crate::icon::image::IconImage;
use std::path::{Path, PathBuf};

/// Outcome of a successful pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    /// File that was written.
    pub output: PathBuf,
    /// Total bytes written.
    pub bytes_written: usize,
    /// Directory entries in the order they were written.
    pub entries: Vec<IconDirEntry>,
}

/// Builds an ICO file from PNG images named by size (`16x16.png`, ...).
///
/// # Example
/// ```no_run
/// use pack_ico::IconPacker;
///
/// let report = IconPacker::new("app.ico")
///     .input("icons/16x16.png")
///     .input("icons/32x32.png")
///     .pack()?;
/// println!("Wrote {}", report.output.display());
/// # Ok::<(), pack_ico::PackError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IconPacker {
    output: PathBuf,
    inputs: Vec<PathBuf>,
}

impl IconPacker {
    /// Create a packer writing to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            inputs: Vec::new(),
        }
    }

    /// Add one input image.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Add several input images, keeping their order.
    pub fn inputs<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.inputs.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Reads every input, sorts by size, and writes the container.
    ///
    /// Nothing is written unless every input was read and the layout fits
    /// the format. The whole file is assembled in memory and written with a
    /// single call.
    pub fn pack(&self) -> Result<PackReport> {
        let images = load_sorted(&self.inputs)?;
        let (bytes, entries) = encoder::encode(&images)?;

        for (entry, image) in entries.iter().zip(&images) {
            log::debug!(
                "Placed {}x{} from {} at offset {} ({} bytes)",
                entry.size,
                entry.size,
                image.path.display(),
                entry.data_offset,
                entry.data_size
            );
        }

        std::fs::write(&self.output, &bytes).fs_context("writing ICO output file", &self.output)?;

        log::info!(
            "Created ICO file: {} ({} images, {} bytes)",
            self.output.display(),
            entries.len(),
            bytes.len()
        );

        Ok(PackReport {
            output: self.output.clone(),
            bytes_written: bytes.len(),
            entries,
        })
    }
}

/// Loads `paths` in order, then stable-sorts them by nominal size.
///
/// Images of equal size keep their input order.
pub fn load_sorted(paths: &[PathBuf]) -> Result<Vec<IconImage>> {
    let mut images = paths
        .iter()
        .map(|path| IconImage::load(path))
        .collect::<Result<Vec<_>>>()?;

    images.sort_by_key(|image| image.size);

    let mut sizes = images.iter().map(|image| image.size).peekable();
    while let Some(size) = sizes.next() {
        if sizes.peek() == Some(&size) {
            log::warn!("More than one {}x{} image; keeping input order", size, size);
        }
    }

    Ok(images)
}
