use crate::decoder::checksum;
use crate::errors::DecodeError;
use crate::models::{BitRow, MsiCode, Point};
use crate::patterns;

/// Runs in one digit group: four bar/space pairs.
const DIGIT_RUNS: usize = 8;
/// Fractional bits of the fixed-point run-width scale.
const FRACTIONAL_BITS: u32 = 8;

/// Decodes MSI barcodes from single scanlines.
///
/// The decoder holds configuration only; decoding borrows the row, keeps all
/// scratch on the stack, and leaves nothing behind, so one decoder can serve
/// many threads scanning different rows.
pub struct MsiDecoder {
    check_digit: bool,
}

impl MsiDecoder {
    /// Create a decoder that treats every decoded character as data
    pub fn new() -> Self {
        Self { check_digit: false }
    }

    /// Create a decoder that treats the final character as a check digit
    /// and verifies it against the rest of the symbol
    pub fn with_check_digit() -> Self {
        Self { check_digit: true }
    }

    /// Decode one scanline.
    ///
    /// `row_index` only annotates the reference points of the result; the
    /// decoder never interprets it.
    ///
    /// Returns `Ok(Some(code))` on success, `Err(DecodeError::NotFound)`
    /// when the row holds no recognizable symbol structure, and `Ok(None)`
    /// when a symbol was read but its check digit does not verify: a row
    /// without a valid symbol, not a hard failure.
    pub fn decode_row(
        &self,
        row_index: usize,
        row: &BitRow,
    ) -> Result<Option<MsiCode>, DecodeError> {
        self.decode_row_with_callback(row_index, row, |_| {})
    }

    /// Decode one scanline, reporting the two reference points through
    /// `on_point` as well as in the result. The callback fires only on a
    /// fully validated decode.
    pub fn decode_row_with_callback<F: FnMut(Point)>(
        &self,
        row_index: usize,
        row: &BitRow,
        mut on_point: F,
    ) -> Result<Option<MsiCode>, DecodeError> {
        let (start_begin, start_end) = find_start_pattern(row)?;

        // Read off the whitespace between the start sentinel and the first digit
        let mut next_start = row.next_set(start_end);

        let mut text = String::new();
        let last_start;

        // Digit groups end only when a group fails to read as a digit and
        // the same position turns out to hold the end sentinel instead, so
        // the sentinel bounds are the loop's sole way out.
        loop {
            match read_group(row, next_start)? {
                Group::Digit(c, width) => {
                    text.push(c);
                    next_start = row.next_set(next_start + width as usize);
                }
                Group::End(begin, end) => {
                    last_start = begin;
                    next_start = end;
                    break;
                }
            }
        }

        if text.is_empty() {
            return Err(DecodeError::NotFound);
        }

        if self.check_digit {
            if text.len() < 2 {
                return Err(DecodeError::NotFound);
            }
            let (payload, check) = text.split_at(text.len() - 1);
            if checksum::check_digit(payload) != check.chars().next() {
                // Failed verification means "no symbol in this row"
                return Ok(None);
            }
        }

        let left = Point::new((start_begin + start_end) as f32 / 2.0, row_index as f32);
        let right = Point::new((last_start + next_start) as f32 / 2.0, row_index as f32);
        on_point(left);
        on_point(right);

        Ok(Some(MsiCode::new(text, left, right)))
    }
}

impl Default for MsiDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// One symbol group read at a row position.
enum Group {
    /// A digit group: the decoded character and its total sample width.
    Digit(char, u32),
    /// The end sentinel: its sample bounds.
    End(usize, usize),
}

/// Read the group starting at `position`: first as an eight-run digit, and
/// when that yields too few runs or an unknown code, as the end sentinel at
/// the same position.
fn read_group(row: &BitRow, position: usize) -> Result<Group, DecodeError> {
    let mut counters = [0u32; DIGIT_RUNS];
    if record_pattern(row, position, &mut counters).is_ok() {
        let average = average_counter_width(&counters);
        if let Some(c) = patterns::pattern_to_digit(to_pattern(&counters, average)) {
            return Ok(Group::Digit(c, counters.iter().sum()));
        }
    }
    let (begin, end) = find_end_pattern(row, position)?;
    Ok(Group::End(begin, end))
}

/// Slide a two-run window along the row until it classifies as the start
/// sentinel. Returns the sample bounds of the matched runs.
fn find_start_pattern(row: &BitRow) -> Result<(usize, usize), DecodeError> {
    let width = row.len();
    let row_offset = row.next_set(0);

    let mut counters = [0u32; 2];
    let mut counter_position = 0;
    let mut pattern_start = row_offset;
    let mut is_white = false;

    for i in row_offset..width {
        if row.get(i) != is_white {
            counters[counter_position] += 1;
        } else {
            if counter_position == counters.len() - 1 {
                let average = average_counter_width(&counters);
                if to_pattern(&counters, average) == patterns::START_PATTERN {
                    // Demand whitespace before the sentinel of at least half
                    // its width, rejecting matches inside unrelated marks
                    let half_window = (i - pattern_start) >> 1;
                    let quiet_start = pattern_start.saturating_sub(half_window);
                    if row.is_range(quiet_start, pattern_start, false) {
                        return Ok((pattern_start, i));
                    }
                }
                // Slide one bar/space pair so the window stays bar-aligned
                pattern_start += (counters[0] + counters[1]) as usize;
                counters[0] = 0;
                counters[1] = 0;
                counter_position -= 1;
            } else {
                counter_position += 1;
            }
            counters[counter_position] = 1;
            is_white = !is_white;
        }
    }
    Err(DecodeError::NotFound)
}

/// Match the end sentinel at exactly `row_offset`. The window does not
/// slide; the caller has already fixed the position. Requires trailing
/// whitespace of at least half the sentinel width, clipped to the row.
fn find_end_pattern(row: &BitRow, row_offset: usize) -> Result<(usize, usize), DecodeError> {
    let width = row.len();

    let mut counters = [0u32; 3];
    let mut counter_position = 0;
    let mut is_white = false;

    for i in row_offset..width {
        if row.get(i) != is_white {
            counters[counter_position] += 1;
        } else {
            if counter_position == counters.len() - 1 {
                let average = average_counter_width(&counters);
                if to_pattern(&counters, average) == patterns::END_PATTERN {
                    let half_window = (i - row_offset) >> 1;
                    let quiet_end = (i + half_window).min(width - 1);
                    if row.is_range(i, quiet_end, false) {
                        return Ok((row_offset, i));
                    }
                }
                return Err(DecodeError::NotFound);
            }
            counter_position += 1;
            counters[counter_position] = 1;
            is_white = !is_white;
        }
    }
    Err(DecodeError::NotFound)
}

/// Record the lengths of `counters.len()` alternating runs starting at
/// `start`, which must sit on a bar. The final run may be cut short by the
/// row end; running out of row any earlier fails.
fn record_pattern(row: &BitRow, start: usize, counters: &mut [u32]) -> Result<(), DecodeError> {
    counters.fill(0);
    let end = row.len();
    if start >= end {
        return Err(DecodeError::NotFound);
    }

    let mut is_white = !row.get(start);
    let mut counter_position = 0;
    let mut i = start;
    while i < end {
        if row.get(i) != is_white {
            counters[counter_position] += 1;
        } else {
            counter_position += 1;
            if counter_position == counters.len() {
                break;
            }
            counters[counter_position] = 1;
            is_white = !is_white;
        }
        i += 1;
    }

    if counter_position == counters.len() || (counter_position == counters.len() - 1 && i == end) {
        Ok(())
    } else {
        Err(DecodeError::NotFound)
    }
}

/// Midpoint of the narrowest and widest run in a group, in fixed point.
///
/// MSI runs come in exactly two sizes, so the midpoint splits them; taking
/// it per group keeps the classifier tolerant of gradual module-width drift
/// across the symbol. The value is never carried from one group to another.
fn average_counter_width(counters: &[u32]) -> u32 {
    let mut min_counter = u32::MAX;
    let mut max_counter = 0;
    for &counter in counters {
        min_counter = min_counter.min(counter);
        max_counter = max_counter.max(counter);
    }
    ((max_counter << FRACTIONAL_BITS) + (min_counter << FRACTIONAL_BITS)) / 2
}

/// Classify a run group into its pattern code: a narrow run shifts in one
/// bit, a wide run two, with polarity toggling per position. Narrow means
/// strictly below the group average; ties classify wide.
fn to_pattern(counters: &[u32], average: u32) -> u32 {
    let mut pattern = 0;
    let mut bit = 1;
    let mut double_bit = 3;
    for &counter in counters {
        if (counter << FRACTIONAL_BITS) < average {
            pattern = (pattern << 1) | bit;
        } else {
            pattern = (pattern << 2) | double_bit;
        }
        bit ^= 1;
        double_bit ^= 3;
    }
    pattern
}
