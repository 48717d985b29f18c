use super::Point;

/// Decoded MSI barcode from one scanline
#[derive(Debug, Clone, PartialEq)]
pub struct MsiCode {
    /// Decoded digit string, including any trailing check digit
    pub text: String,
    /// Reference points: the midpoint of the start sentinel span and the
    /// midpoint of the end sentinel span. `y` carries the row index.
    pub points: [Point; 2],
}

impl MsiCode {
    /// Create a decode result from its text and reference points
    pub fn new(text: String, left: Point, right: Point) -> Self {
        Self {
            text,
            points: [left, right],
        }
    }
}
