//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Minimal PNG prefix: signature plus an IHDR chunk for a `size`×`size` RGBA image.
pub fn png_bytes(size: u32, filler: &[u8]) -> Vec<u8> {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&size.to_be_bytes());
    data.extend_from_slice(&size.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(filler);
    data
}

/// Write a fake PNG named `<size>x<size>.png` into `dir`.
pub fn write_icon_png(dir: &Path, size: u32, filler: &[u8]) -> PathBuf {
    let path = dir.join(format!("{size}x{size}.png"));
    std::fs::write(&path, png_bytes(size, filler)).unwrap();
    path
}

pub fn u32_at(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}
