//! Raw memory read throughput probe.
//!
//! Fills a large buffer with a fixed 4-byte pattern and times a sequential
//! pass that decodes every 4-byte chunk as a native-endian `u32` and folds it
//! into a wrapping `i32` sum. The numbers it prints are the baseline an XDR
//! int32 decoder gets compared against.

pub mod buffer;
pub mod decode;
pub mod report;

use std::collections::TryReserveError;
use std::fmt::Display;
use std::time::Instant;

use log::info;

pub use buffer::PatternBuffer;
pub use decode::{Accumulate, WrappingSum, decode_word, read_pass};
pub use report::ProbeReport;

/// Size of the probed buffer in bytes.
pub const BUFFER_LEN: usize = 40_000_000;

/// Bytes of one decoded word.
pub const WORD_LEN: usize = 4;

/// Words visited by a full read pass.
pub const CHUNK_COUNT: usize = BUFFER_LEN / WORD_LEN;

/// Cells written by the fill. One short of [`CHUNK_COUNT`], so the final word
/// of the buffer keeps its allocation-time value.
pub const FILLED_CELLS: usize = 9_999_999;

/// Byte pattern written into every filled cell, lowest address first.
pub const PATTERN: [u8; WORD_LEN] = [0x10, 0x11, 0x12, 0x13];

#[derive(Debug, Clone)]
pub enum ProbeError {
    Allocation {
        requested: usize,
        source: TryReserveError,
    },
}

impl Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::Allocation { requested, source } => {
                write!(f, "unable to allocate {} byte buffer: {}", requested, source)
            }
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Allocation { source, .. } => Some(source),
        }
    }
}

/// Allocate, fill and time one read pass over a [`BUFFER_LEN`] buffer.
pub fn probe() -> Result<ProbeReport, ProbeError> {
    let mut buffer = PatternBuffer::allocate()?;
    buffer.fill_pattern();
    Ok(time_read_pass(&buffer))
}

/// Time a single read pass over an already filled buffer.
pub fn time_read_pass(buffer: &PatternBuffer) -> ProbeReport {
    let bytes = std::hint::black_box(buffer.as_ref());
    let mut sum = WrappingSum::default();

    let start = Instant::now();
    let chunks = read_pass(bytes, &mut sum);
    let stop = Instant::now();

    let report = ProbeReport {
        sum: sum.value(),
        chunks,
        elapsed: stop - start,
    };
    info!(
        "Read {} words in {:?}, sum {}",
        report.chunks, report.elapsed, report.sum
    );
    report
}
