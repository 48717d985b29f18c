//! MSI symbol tables shared by the decoder and the encoder.
//!
//! MSI encodes each digit as its 4-bit binary value, one bar/space pair per
//! bit: a `1` bit is a wide bar followed by a narrow space, a `0` bit a
//! narrow bar followed by a wide space. Narrow runs span one module, wide
//! runs two. A symbol is framed by a start sentinel (wide bar, narrow space)
//! and an end sentinel (narrow bar, wide space, narrow bar).

/// Digits encodable by the MSI symbology, in table order.
pub const ALPHABET: &[u8; 10] = b"0123456789";

/// Start sentinel module widths.
pub const START_WIDTHS: [u32; 2] = [2, 1];

/// End sentinel module widths.
pub const END_WIDTHS: [u32; 3] = [1, 2, 1];

/// Module widths per digit: four bar/space pairs, narrow = 1, wide = 2.
/// Row index matches [`ALPHABET`].
pub const DIGIT_WIDTHS: [[u32; 8]; 10] = [
    [1, 2, 1, 2, 1, 2, 1, 2], // 0
    [1, 2, 1, 2, 1, 2, 2, 1], // 1
    [1, 2, 1, 2, 2, 1, 1, 2], // 2
    [1, 2, 1, 2, 2, 1, 2, 1], // 3
    [1, 2, 2, 1, 1, 2, 1, 2], // 4
    [1, 2, 2, 1, 1, 2, 2, 1], // 5
    [1, 2, 2, 1, 2, 1, 1, 2], // 6
    [1, 2, 2, 1, 2, 1, 2, 1], // 7
    [2, 1, 1, 2, 1, 2, 1, 2], // 8
    [2, 1, 1, 2, 1, 2, 2, 1], // 9
];

// Pattern codes for classified run groups, derived mechanically from the
// width rows above: a narrow run contributes one bit, a wide run two, with
// the bit polarity toggling per run position (1/11 on even positions, 0/00
// on odd). The decoder rebuilds codes with the same rule and looks them up
// here.
/// Pattern codes per digit. Index matches [`ALPHABET`].
pub const DIGIT_PATTERNS: [u32; 10] = [
    0x924, 0x926, 0x934, 0x936, 0x9A4, 0x9A6, 0x9B4, 0x9B6, 0xD24, 0xD26,
];

/// Pattern code of the start sentinel.
pub const START_PATTERN: u32 = 0x06;

/// Pattern code of the end sentinel.
pub const END_PATTERN: u32 = 0x09;

/// Look up the module widths for an encodable character.
/// Returns `None` when `c` is not one of `'0'..='9'`.
pub fn digit_widths(c: char) -> Option<&'static [u32; 8]> {
    let index = ALPHABET.iter().position(|&d| d as char == c)?;
    Some(&DIGIT_WIDTHS[index])
}

/// Look up the digit for a classified pattern code.
/// Returns `None` when the code matches no digit.
pub fn pattern_to_digit(pattern: u32) -> Option<char> {
    let index = DIGIT_PATTERNS.iter().position(|&p| p == pattern)?;
    Some(ALPHABET[index] as char)
}
