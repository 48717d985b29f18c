//! MSI barcode decoding modules
//!
//! Everything for reading a symbol back out of a scanline:
//! - Sentinel search and adaptive run classification
//! - Modulo-10 check digit verification

/// Modulo-10 double-and-cross-sum check digit
pub mod checksum;
/// Main scanline decoder
pub mod msi_decoder;

pub use msi_decoder::MsiDecoder;
