//! Encoding detection and text decoding for input files.
//!
//! Input files are usually UTF-8, but READMEs are often drafted from older
//! sources. This module handles:
//! - BOM detection (UTF-8, UTF-16 LE/BE)
//! - UTF-8 fast-path with strict validation
//! - Fallback encoding detection using chardetng
//! - Lossy decoding with replacement characters as the last resort

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::io;
use std::path::Path;

const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Detect the encoding of a byte buffer.
///
/// Strategy:
/// 1. Check for BOM markers first (most reliable)
/// 2. Try strict UTF-8 decoding of the sample
/// 3. Fall back to chardetng for everything else
///
/// # Returns
/// The detected encoding and the length of its BOM (0 when absent)
pub fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, bom_len);
    }

    if std::str::from_utf8(bytes).is_ok() {
        return (encoding_rs::UTF_8, 0);
    }

    let sample = &bytes[..bytes.len().min(DEFAULT_SAMPLE_SIZE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == bytes.len());
    (detector.guess(None, true), 0)
}

/// Decode raw bytes into text.
///
/// # Returns
/// A tuple `(content, encoding_used)` where the encoding label is lowercase
/// (e.g. "utf-8", "utf-16le", "windows-1252")
pub fn decode_text(bytes: &[u8]) -> (String, String) {
    // Fast path: valid UTF-8 without a BOM needs no transcoding.
    if !bytes.starts_with(&[0xef, 0xbb, 0xbf]) {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return (text.to_string(), "utf-8".to_string());
        }
    }

    let (encoding, bom_len) = detect_encoding(bytes);
    let (decoded, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    (decoded.into_owned(), encoding.name().to_lowercase())
}

/// Read a file fully and decode it into text.
///
/// I/O errors (missing file, permission denied, directory) are returned
/// unchanged so the caller can attach the offending path.
///
/// # Returns
/// A tuple `(content, encoding_used)`
pub fn read_file_safe(path: &Path) -> io::Result<(String, String)> {
    let bytes = std::fs::read(path)?;
    let (content, encoding) = decode_text(&bytes);
    if encoding != "utf-8" {
        tracing::debug!("Decoded {} as {}", path.display(), encoding);
    }
    Ok((content, encoding))
}
