//! Windows ICO container assembly from pre-rendered PNG images.
//!
//! PNG payloads are embedded verbatim (Windows Vista and later read PNG
//! entries directly), so nothing here decodes or resizes pixels.

pub mod encoder;
pub mod image;
pub mod packer;

pub use encoder::{IconDirEntry, encode, layout};
pub use image::{IconImage, size_from_path};
pub use packer::{IconPacker, PackReport, load_sorted};
