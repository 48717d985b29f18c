//! Error types for row decoding and symbol encoding.

use thiserror::Error;

/// Errors produced when decoding a scanline.
///
/// A check digit mismatch is deliberately *not* an error: the decoder
/// reports it as an absent result (`Ok(None)`), meaning "this row holds no
/// valid symbol", so callers can tell it apart from a row with no
/// recognizable barcode structure at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No start sentinel, no end sentinel, or no digits between them.
    #[error("no MSI barcode found in row")]
    NotFound,
}

/// Errors produced when encoding a digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The contents contain a character outside `'0'..='9'`.
    #[error("contents contain a character that cannot be encoded: {0:?}")]
    InvalidCharacter(char),
}
