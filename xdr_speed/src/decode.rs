use crate::WORD_LEN;

/// Compose 4 bytes into a `u32` in the host's native byte order.
///
/// This is what a raw `*(unsigned int *)` load produces on the host, without
/// depending on the alignment of the source bytes.
#[inline]
pub fn decode_word(bytes: [u8; WORD_LEN]) -> u32 {
    u32::from_ne_bytes(bytes)
}

/// Sink for the words produced by [`read_pass`].
pub trait Accumulate {
    fn accumulate(&mut self, word: u32);
}

/// Signed 32-bit running sum with modular overflow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WrappingSum(i32);

impl WrappingSum {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Accumulate for WrappingSum {
    #[inline]
    fn accumulate(&mut self, word: u32) {
        self.0 = self.0.wrapping_add(word as i32);
    }
}

/// Decode every whole word of `bytes` in order and feed it to `acc`.
///
/// Returns the number of words visited. Trailing bytes that do not make up a
/// whole word are skipped.
pub fn read_pass<A: Accumulate>(bytes: &[u8], acc: &mut A) -> usize {
    let mut chunks = 0;
    for bs in bytes.chunks_exact(WORD_LEN) {
        let bs = [bs[0], bs[1], bs[2], bs[3]];
        acc.accumulate(decode_word(bs));
        chunks += 1;
    }
    chunks
}
