/// Compact bit buffer for one scanline of black/white samples
///
/// `true` = mark (bar), `false` = space. The decoder only reads rows; they
/// are built by the caller's binarization stage or by the encoder.
#[derive(Debug, Clone)]
pub struct BitRow {
    len: usize,
    data: Vec<u8>,
}

impl BitRow {
    /// Create a row of `len` samples, all space
    pub fn new(len: usize) -> Self {
        let bytes_needed = len.div_ceil(8);
        Self {
            len,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a row from a mark/space sample slice
    pub fn from_bools(bits: &[bool]) -> Self {
        let mut row = Self::new(bits.len());
        for (i, &bit) in bits.iter().enumerate() {
            if bit {
                row.set(i, true);
            }
        }
        row
    }

    /// Number of samples in the row
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the row holds no samples
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the sample at `index`; out-of-range reads are space
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set the sample at `index`; out-of-range writes are ignored
    pub fn set(&mut self, index: usize, value: bool) {
        if index >= self.len {
            return;
        }
        if value {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Index of the first mark sample at or after `from`, or `len()` when
    /// the rest of the row is space. Returning `len()` instead of an option
    /// lets run-scanning loops treat "no more bars" as a spent position.
    pub fn next_set(&self, from: usize) -> usize {
        (from..self.len).find(|&i| self.get(i)).unwrap_or(self.len)
    }

    /// Index of the first space sample at or after `from`, or `len()`
    pub fn next_unset(&self, from: usize) -> usize {
        (from..self.len).find(|&i| !self.get(i)).unwrap_or(self.len)
    }

    /// Whether every sample in `[start, end)` equals `value`. The range is
    /// clipped to the row; an empty range holds trivially.
    pub fn is_range(&self, start: usize, end: usize, value: bool) -> bool {
        let end = end.min(self.len);
        if start >= end {
            return true;
        }
        (start..end).all(|i| self.get(i) == value)
    }

    /// Reverse the sample order in place (for scanning a row right-to-left)
    pub fn reverse(&mut self) {
        let mut reversed = BitRow::new(self.len);
        for i in 0..self.len {
            if self.get(i) {
                reversed.set(self.len - 1 - i, true);
            }
        }
        *self = reversed;
    }
}

impl Default for BitRow {
    fn default() -> Self {
        Self::new(0)
    }
}
