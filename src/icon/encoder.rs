//! ICO container encoding.
//!
//! The container is a 6-byte header, one 16-byte directory entry per image,
//! then the image blobs back to back. All integers are little-endian.
//!
//! | Offset   | Size  | Field                     |
//! |----------|-------|---------------------------|
//! | 0        | 2     | reserved, 0               |
//! | 2        | 2     | type, 1 (icon)            |
//! | 4        | 2     | entry count N             |
//! | 6        | 16×N  | directory entries         |
//! | 6 + 16N  | rest  | image blobs               |

use crate::error::{PackError, Result};
use crate::icon::image::IconImage;

/// Length of the file header in bytes.
pub const HEADER_LEN: usize = 6;

/// Length of one directory entry in bytes.
pub const DIR_ENTRY_LEN: usize = 16;

/// Resource type stored in the header (1 = icon, 2 = cursor).
pub const ICON_TYPE: u16 = 1;

/// Color planes stored in every entry.
pub const COLOR_PLANES: u16 = 1;

/// Bit depth stored in every entry.
pub const BITS_PER_PIXEL: u16 = 32;

/// One directory record: where an image lives in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDirEntry {
    /// Nominal square size of the image.
    pub size: u32,
    /// Length of the image blob in bytes.
    pub data_size: u32,
    /// Absolute offset of the blob from the start of the file.
    pub data_offset: u32,
}

impl IconDirEntry {
    /// Width/height byte for this entry. A single byte cannot hold 256, so
    /// 256 and above are stored as 0.
    pub fn dimension(&self) -> u8 {
        if self.size >= 256 { 0 } else { self.size as u8 }
    }

    /// Append the 16-byte record to `buf`.
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        let dim = self.dimension();
        buf.push(dim); // width
        buf.push(dim); // height
        buf.push(0); // palette colors
        buf.push(0); // reserved
        buf.extend_from_slice(&COLOR_PLANES.to_le_bytes());
        buf.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        buf.extend_from_slice(&self.data_size.to_le_bytes());
        buf.extend_from_slice(&self.data_offset.to_le_bytes());
    }
}

/// Computes directory entries for `images`, in the order given.
///
/// The first blob starts right after the directory; each following blob
/// starts where the previous one ends.
///
/// # Errors
///
/// Returns [`PackError::Layout`] when `images` is empty, holds more than
/// `u16::MAX` entries, or when a blob length or offset does not fit in 32
/// bits.
pub fn layout(images: &[IconImage]) -> Result<Vec<IconDirEntry>> {
    if images.is_empty() {
        return Err(PackError::Layout("no images to pack".to_string()));
    }
    if u16::try_from(images.len()).is_err() {
        return Err(PackError::Layout(format!(
            "{} images exceed the {} entry limit",
            images.len(),
            u16::MAX
        )));
    }

    let mut offset = (HEADER_LEN + DIR_ENTRY_LEN * images.len()) as u64;
    let mut entries = Vec::with_capacity(images.len());

    for image in images {
        let data_size = u32::try_from(image.len()).map_err(|_| {
            PackError::Layout(format!(
                "{} is {} bytes, over the 4 GiB entry limit",
                image.path.display(),
                image.len()
            ))
        })?;
        let data_offset = u32::try_from(offset).map_err(|_| {
            PackError::Layout(format!(
                "{} would start at byte {}, past the 4 GiB offset limit",
                image.path.display(),
                offset
            ))
        })?;

        entries.push(IconDirEntry {
            size: image.size,
            data_size,
            data_offset,
        });
        offset += u64::from(data_size);
    }

    Ok(entries)
}

/// Encodes `images` into a complete ICO file, in the order given.
///
/// Callers wanting the conventional smallest-first order sort before
/// calling; see [`crate::icon::IconPacker`].
pub fn encode(images: &[IconImage]) -> Result<(Vec<u8>, Vec<IconDirEntry>)> {
    let entries = layout(images)?;

    let total = HEADER_LEN
        + DIR_ENTRY_LEN * entries.len()
        + images.iter().map(IconImage::len).sum::<usize>();
    let mut buf = Vec::with_capacity(total);

    // Header
    buf.extend_from_slice(&0u16.to_le_bytes());
    buf.extend_from_slice(&ICON_TYPE.to_le_bytes());
    buf.extend_from_slice(&(entries.len() as u16).to_le_bytes());

    for entry in &entries {
        entry.write_to(&mut buf);
    }
    for image in images {
        buf.extend_from_slice(&image.data);
    }

    debug_assert_eq!(buf.len(), total);
    Ok((buf, entries))
}
