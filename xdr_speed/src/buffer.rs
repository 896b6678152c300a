use std::ops::Deref;

use log::debug;

use crate::{BUFFER_LEN, FILLED_CELLS, PATTERN, ProbeError, WORD_LEN};

/// Exclusively owned, zero-initialised byte buffer the probe reads from.
pub struct PatternBuffer {
    bytes: Vec<u8>,
}

impl Deref for PatternBuffer {
    type Target = [u8];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl AsRef<[u8]> for PatternBuffer {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.deref()
    }
}

impl PatternBuffer {
    pub fn allocate() -> Result<Self, ProbeError> {
        Self::try_with_len(BUFFER_LEN)
    }

    /// Reserve exactly `len` zeroed bytes, failing instead of aborting when the
    /// allocator refuses.
    pub fn try_with_len(len: usize) -> Result<Self, ProbeError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|source| ProbeError::Allocation {
                requested: len,
                source,
            })?;
        bytes.resize(len, 0);
        debug!("Allocated {} byte buffer", len);
        Ok(PatternBuffer { bytes })
    }

    /// Write [`PATTERN`] into the first `min(FILLED_CELLS, len / 4)` cells.
    ///
    /// For a full size buffer this leaves the last word untouched.
    pub fn fill_pattern(&mut self) -> usize {
        let cells = FILLED_CELLS.min(self.bytes.len() / WORD_LEN);
        for cell in self.bytes.chunks_exact_mut(WORD_LEN).take(cells) {
            cell.copy_from_slice(&PATTERN);
        }
        debug!("Filled {} pattern cells", cells);
        cells
    }

    /// Decoded word at a byte offset, `None` if the word runs past the end.
    #[cfg(test)]
    fn word_at(&self, offset: usize) -> Option<u32> {
        use crate::decode_word;

        let end = offset.checked_add(WORD_LEN)?;
        let chunk: [u8; WORD_LEN] = self.bytes.get(offset..end)?.try_into().ok()?;
        Some(decode_word(chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_buffer_is_zeroed() {
        let b = PatternBuffer::try_with_len(64).unwrap();
        assert_eq!(b.len(), 64);
        assert!(b.iter().all(|&x| x == 0));
    }

    #[test]
    fn fill_stops_one_word_short() {
        let mut b = PatternBuffer::allocate().unwrap();
        assert_eq!(b.len(), BUFFER_LEN);
        assert_eq!(b.fill_pattern(), FILLED_CELLS);

        let last = BUFFER_LEN - WORD_LEN;
        assert_eq!(&b[last - WORD_LEN..last], &PATTERN);
        assert_eq!(&b[last..], &[0, 0, 0, 0]);
        assert_eq!(b.word_at(last), Some(0));
        assert_eq!(b.word_at(0), Some(u32::from_ne_bytes(PATTERN)));
    }

    #[test]
    fn fill_covers_small_buffers_entirely() {
        let mut b = PatternBuffer::try_with_len(10).unwrap();
        assert_eq!(b.fill_pattern(), 2);
        assert_eq!(&b[..8], &[0x10, 0x11, 0x12, 0x13, 0x10, 0x11, 0x12, 0x13]);
        assert_eq!(&b[8..], &[0, 0]);
    }

    #[test]
    fn word_at_rejects_out_of_range() {
        let b = PatternBuffer::try_with_len(8).unwrap();
        assert_eq!(b.word_at(4), Some(0));
        assert_eq!(b.word_at(5), None);
        assert_eq!(b.word_at(usize::MAX), None);
    }
}
