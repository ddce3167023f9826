//! Error types for icon packing.
//!
//! Every failure is fatal for the current invocation: nothing is retried and
//! no partial output is written. Errors carry the offending path so the CLI
//! can report it directly.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for pack_ico operations
pub type Result<T> = std::result::Result<T, PackError>;

/// Main error type for all pack_ico operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PackError {
    /// Command line arguments were missing or invalid.
    #[error("{0}")]
    Usage(String),

    /// The size token could not be read from an input filename.
    #[error("could not infer size from filename: {path}")]
    Format {
        /// Input path whose stem has no usable size prefix
        path: PathBuf,
        /// What was wrong with the stem
        reason: String,
    },

    /// File system error with path context.
    ///
    /// Created by [`ErrorExt::fs_context`].
    #[error("{context} {path}: {error}")]
    Fs {
        /// Operation that failed (e.g., "reading input image")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// The images do not fit the ICO container's fixed-width fields.
    #[error("cannot lay out icon: {0}")]
    Layout(String),
}

impl PackError {
    /// Short hints shown under a fatal error.
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PackError::Usage(_) => vec![
                "Usage: pack_ico <output.ico> <png16> <png32> [...]".to_string(),
                "Run with --help for all options".to_string(),
            ],
            PackError::Format { reason, .. } => vec![
                format!("Size token rejected: {}", reason),
                "Name input files by size, e.g. 16x16.png or 256x256@1x.png".to_string(),
            ],
            PackError::Fs { error, path, .. } => match error.kind() {
                io::ErrorKind::NotFound => {
                    vec![format!("Check that {} exists", path.display())]
                }
                io::ErrorKind::PermissionDenied => {
                    vec![format!("Check permissions on {}", path.display())]
                }
                _ => Vec::new(),
            },
            PackError::Layout(_) => vec![
                "Pack fewer or smaller images; ICO offsets are limited to 32 bits".to_string(),
            ],
        }
    }
}

/// Extension for attaching file system context to I/O results.
pub trait ErrorExt<T> {
    /// Wrap an I/O error with the operation and the path it touched.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| PackError::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}
