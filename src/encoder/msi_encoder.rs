use crate::errors::EncodeError;
use crate::patterns;

/// Renders digit strings as MSI bar patterns.
pub struct MsiEncoder;

impl MsiEncoder {
    /// Encode `contents` as a flat sample sequence, one `bool` per module,
    /// `true` for a bar module. The sequence runs from the first bar of the
    /// start sentinel to the last bar of the end sentinel; quiet zones are
    /// the caller's concern.
    ///
    /// The whole input is validated before any output is produced, so an
    /// invalid character never yields a partial pattern.
    pub fn encode(contents: &str) -> Result<Vec<bool>, EncodeError> {
        let mut digit_widths = Vec::with_capacity(contents.len());
        for c in contents.chars() {
            match patterns::digit_widths(c) {
                Some(widths) => digit_widths.push(widths),
                None => return Err(EncodeError::InvalidCharacter(c)),
            }
        }

        let modules = patterns::START_WIDTHS.iter().sum::<u32>()
            + digit_widths
                .iter()
                .map(|widths| widths.iter().sum::<u32>())
                .sum::<u32>()
            + patterns::END_WIDTHS.iter().sum::<u32>();

        let mut result = Vec::with_capacity(modules as usize);
        append_pattern(&mut result, &patterns::START_WIDTHS);
        for widths in digit_widths {
            append_pattern(&mut result, widths);
        }
        append_pattern(&mut result, &patterns::END_WIDTHS);
        Ok(result)
    }
}

/// Append alternating bar/space runs, starting at a bar, one sample per
/// module.
fn append_pattern(target: &mut Vec<bool>, widths: &[u32]) {
    let mut bar = true;
    for &width in widths {
        for _ in 0..width {
            target.push(bar);
        }
        bar = !bar;
    }
}
