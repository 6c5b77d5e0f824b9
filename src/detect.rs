//! Input format detection and validation.
//!
//! Xournal++ saves `.xopp` files as gzip-compressed XML, so all we can
//! check without decompressing is the gzip header.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Gzip magic bytes at the start of every .xopp file.
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// Detected input format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XoppFormat {
    /// Gzip compression method byte (8 = deflate, the only one in practice).
    pub compression_method: u8,
}

impl std::fmt::Display for XoppFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gzip (method {})", self.compression_method)
    }
}

/// Detect the input format from a file path.
///
/// # Returns
/// * `Ok(XoppFormat)` if the file starts with a gzip header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<XoppFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader.read_exact(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the input format from bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first 3 bytes of the file
pub fn detect_format_from_bytes(data: &[u8]) -> Result<XoppFormat> {
    if data.len() < GZIP_MAGIC.len() + 1 {
        return Err(Error::UnknownFormat);
    }

    if !data.starts_with(GZIP_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    Ok(XoppFormat {
        compression_method: data[2],
    })
}

/// Check if a file looks like a gzip-compressed .xopp document.
pub fn is_xopp<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a gzip-compressed .xopp document.
pub fn is_xopp_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
