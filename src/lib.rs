//! # pack_ico
//!
//! Assembles a Windows icon container (`.ico`) from pre-rendered PNG images.
//!
//! Each image's square size is read from its filename (`16x16.png`,
//! `256x256.png`), the images are sorted smallest first, and the PNG bytes
//! are embedded verbatim behind a 6-byte header and one 16-byte directory
//! entry per image.
//!
//! ## Usage
//!
//! ```bash
//! pack_ico app.ico icons/16x16.png icons/32x32.png icons/256x256.png
//! ```
//!
//! ```no_run
//! let report = pack_ico::IconPacker::new("app.ico")
//!     .inputs(["icons/16x16.png", "icons/32x32.png"])
//!     .pack()?;
//! assert_eq!(report.entries.len(), 2);
//! # Ok::<(), pack_ico::PackError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod error;
pub mod icon;

pub use cli::Args;
pub use error::{ErrorExt, PackError, Result};
pub use icon::{IconDirEntry, IconImage, IconPacker, PackReport};
