//! rust_msi - MSI (Modified Plessey) barcode scanning and rendering
//!
//! A pure Rust implementation of the MSI one-dimensional symbology:
//! scanline decoding with optional check digit verification, and rendering
//! of digit strings back into bar patterns.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Scanline decoding modules (sentinel search, run classification, check digit)
pub mod decoder;
/// Bar pattern rendering modules
pub mod encoder;
/// Decoding and encoding error types
pub mod errors;
/// Core data structures (BitRow, MsiCode, Point)
pub mod models;
/// Width tables and pattern codes shared by decoder and encoder
pub mod patterns;

pub use decoder::MsiDecoder;
pub use decoder::checksum::check_digit;
pub use encoder::MsiEncoder;
pub use errors::{DecodeError, EncodeError};
pub use models::{BitRow, MsiCode, Point};

/// Decode one scanline without check digit verification
///
/// # Arguments
/// * `row_index` - Vertical position recorded in the result points
/// * `row` - Black/white samples of the scanline
///
/// # Returns
/// The decoded symbol, or `Err(DecodeError::NotFound)` when the row holds
/// no recognizable symbol
pub fn decode_row(row_index: usize, row: &BitRow) -> Result<Option<MsiCode>, DecodeError> {
    MsiDecoder::new().decode_row(row_index, row)
}

/// Render `contents` as a bar pattern, one `bool` per module, `true` for bar
pub fn encode(contents: &str) -> Result<Vec<bool>, EncodeError> {
    MsiEncoder::encode(contents)
}
