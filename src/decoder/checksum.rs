//! Modulo-10 check digit for MSI symbols.

// Doubling a digit and cross-summing the decimal digits of the product
// collapses to one table lookup: 2*5 = 10 -> 1+0 = 1, 2*6 = 12 -> 3, ...
const DOUBLE_AND_CROSS_SUM: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Compute the check digit for a payload of ASCII digits.
///
/// Walking from the rightmost payload digit, digits at offsets 0, 2, 4, ...
/// are doubled and cross-summed, the rest added directly; the check digit
/// brings the total to a multiple of ten. Returns `None` when the payload
/// contains a non-digit character.
///
/// The encoder never appends this digit itself: callers wanting a checked
/// symbol compute it here and append it before encoding.
pub fn check_digit(digits: &str) -> Option<char> {
    let mut total = 0;
    for (offset, c) in digits.chars().rev().enumerate() {
        let value = c.to_digit(10)?;
        total += if offset % 2 == 0 {
            DOUBLE_AND_CROSS_SUM[value as usize]
        } else {
            value
        };
    }
    char::from_digit((10 - total % 10) % 10, 10)
}
