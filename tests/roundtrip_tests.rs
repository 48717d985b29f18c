//! Integration tests for MSI encode/decode round trips
//!
//! These tests drive the public API end to end: rendered patterns, padded
//! with quiet zones the way a scanline cut from a real image would be, must
//! come back out of the decoder unchanged, with and without check digit
//! verification.

use proptest::prelude::*;
use rust_msi::{BitRow, DecodeError, MsiDecoder, MsiEncoder, check_digit};

/// Render `contents` into a scanline at `scale` samples per module with
/// `quiet` white samples on each side.
fn synthesize_row(contents: &str, scale: usize, quiet: usize) -> BitRow {
    let pattern = MsiEncoder::encode(contents).expect("encodable contents");
    let mut samples = vec![false; quiet];
    for &bit in &pattern {
        samples.extend(std::iter::repeat_n(bit, scale));
    }
    samples.extend(std::iter::repeat_n(false, quiet));
    BitRow::from_bools(&samples)
}

/// Test that rendered symbols decode back to their contents
#[test]
fn test_roundtrip_known_contents() {
    let decoder = MsiDecoder::new();
    for contents in ["0", "47", "1234567", "8052", "0123456789", "9999"] {
        let row = synthesize_row(contents, 2, 10);
        let code = decoder
            .decode_row(0, &row)
            .expect("symbol should be found")
            .expect("symbol should be valid");
        assert_eq!(code.text, contents, "round trip of '{}'", contents);
        assert!(
            code.points[0].x < code.points[1].x,
            "reference points should bracket the symbol left to right"
        );
    }
}

/// Test every digit as a one-symbol round trip
#[test]
fn test_roundtrip_single_digits() {
    let decoder = MsiDecoder::new();
    for digit in '0'..='9' {
        let contents = digit.to_string();
        let row = synthesize_row(&contents, 2, 10);
        let code = decoder.decode_row(0, &row).unwrap().unwrap();
        assert_eq!(code.text, contents, "digit '{}'", digit);
    }
}

/// Test that module width does not affect decoding
#[test]
fn test_roundtrip_at_all_scales() {
    let decoder = MsiDecoder::new();
    for scale in 1..=5 {
        let row = synthesize_row("472", scale, 12);
        let code = decoder.decode_row(0, &row).unwrap().unwrap();
        assert_eq!(code.text, "472", "scale {} samples per module", scale);
    }
}

/// Test the check digit path end to end: compute, append, render, verify
#[test]
fn test_checked_roundtrip() {
    let decoder = MsiDecoder::with_check_digit();
    for contents in ["1234567", "8052", "00", "7777777777"] {
        let digit = check_digit(contents).expect("digit contents");
        let symbol = format!("{}{}", contents, digit);
        let row = synthesize_row(&symbol, 2, 10);
        let code = decoder.decode_row(0, &row).unwrap().unwrap();
        assert_eq!(code.text, symbol);
    }
}

/// Test that a tampered check digit downgrades the decode to "no symbol"
#[test]
fn test_tampered_check_digit_reads_as_no_symbol() {
    let decoder = MsiDecoder::with_check_digit();
    let digit = check_digit("1234567").unwrap();
    let wrong = if digit == '9' { '0' } else { '9' };
    assert_ne!(digit, wrong);

    let row = synthesize_row(&format!("1234567{}", wrong), 2, 10);
    assert_eq!(decoder.decode_row(0, &row), Ok(None));
}

/// Test that a reversed scanline does not decode
///
/// MSI sentinels are direction-asymmetric, so a row scanned right to left
/// has no recognizable start sentinel.
#[test]
fn test_reversed_row_not_found() {
    let decoder = MsiDecoder::new();

    let mut row = synthesize_row("000", 2, 8);
    assert_eq!(
        decoder.decode_row(0, &row).unwrap().unwrap().text,
        "000",
        "forward row should decode before reversal"
    );

    row.reverse();
    assert_eq!(decoder.decode_row(0, &row), Err(DecodeError::NotFound));
}

/// Test that one decoder can serve many threads at once
#[test]
fn test_parallel_scanning_matches_serial() {
    use rayon::prelude::*;

    let contents: Vec<String> = (0..64).map(|i| format!("{:06}", i * 991)).collect();
    let rows: Vec<BitRow> = contents
        .iter()
        .map(|c| synthesize_row(c, 2, 10))
        .collect();

    let decoder = MsiDecoder::new();
    let serial: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| decoder.decode_row(i, row).unwrap().unwrap().text)
        .collect();
    let parallel: Vec<String> = rows
        .par_iter()
        .enumerate()
        .map(|(i, row)| decoder.decode_row(i, row).unwrap().unwrap().text)
        .collect();

    assert_eq!(serial, contents);
    assert_eq!(parallel, contents);
}

/// Test that the row index flows through to the reference points
#[test]
fn test_row_index_annotates_points() {
    let decoder = MsiDecoder::new();
    let row = synthesize_row("31", 3, 10);
    for row_index in [0usize, 17, 480] {
        let code = decoder.decode_row(row_index, &row).unwrap().unwrap();
        assert_eq!(code.points[0].y, row_index as f32);
        assert_eq!(code.points[1].y, row_index as f32);
    }
}

proptest! {
    /// Any digit string survives an encode/decode round trip
    #[test]
    fn prop_roundtrip(contents in "[0-9]{1,40}") {
        let row = synthesize_row(&contents, 2, 10);
        let code = MsiDecoder::new().decode_row(0, &row).unwrap().unwrap();
        prop_assert_eq!(code.text, contents);
    }

    /// The check digit is always a single decimal digit
    #[test]
    fn prop_check_digit_is_single_digit(contents in "[0-9]{0,40}") {
        let digit = check_digit(&contents).unwrap();
        prop_assert!(digit.is_ascii_digit());
    }

    /// A symbol carrying its own computed check digit always verifies
    #[test]
    fn prop_checked_roundtrip(contents in "[0-9]{1,20}") {
        let digit = check_digit(&contents).unwrap();
        let symbol = format!("{}{}", contents, digit);
        let row = synthesize_row(&symbol, 2, 10);
        let code = MsiDecoder::with_check_digit().decode_row(0, &row).unwrap().unwrap();
        prop_assert_eq!(code.text, symbol);
    }

    /// Pattern length follows directly from the width tables
    #[test]
    fn prop_pattern_length(contents in "[0-9]{0,40}") {
        let pattern = MsiEncoder::encode(&contents).unwrap();
        prop_assert_eq!(pattern.len(), 3 + contents.len() * 12 + 4);
    }
}
