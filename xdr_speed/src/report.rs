use std::fmt::Display;
use std::time::Duration;

/// Outcome of one timed read pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    pub sum: i32,
    pub chunks: usize,
    pub elapsed: Duration,
}

impl ProbeReport {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl Display for ProbeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sum: {}", self.sum)?;
        write!(f, "Time: {:.6}", self.seconds())
    }
}
