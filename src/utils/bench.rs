//! Shared benchmark utilities.
//!
//! Measurement helpers, a small seeded PRNG for reproducible input data and
//! the tolerance used to compare floating-point reductions.

use std::time::{Duration, Instant};

/// Absolute tolerance for comparing reduction results
pub const TOLERANCE: f64 = 1e-9;

/// Measurement value type
pub type Measurement = Duration;

/// Read current measurement
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Calculate elapsed measurement
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Convert measurement to nanoseconds for display
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Format a measurement for table output
pub fn format_measurement(m: Measurement) -> String {
    format!("{:?}", m)
}

/// Time a single expression, returning `(elapsed, value)`.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = std::hint::black_box($e);
        ($crate::utils::bench::elapsed(start), value)
    }};
}

/// True if `a` and `b` differ by less than `tolerance`
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Simple fast random shuffle using Fisher-Yates algorithm
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    shuffle_with_rng(slice, &mut rng);
}

/// Shuffle using an existing RNG (allows sequential shuffles with state preserved)
pub fn shuffle_with_rng<T>(slice: &mut [T], rng: &mut SeededRng) {
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() >> 33) as usize % (i + 1);
        slice.swap(i, j);
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Simple seeded PRNG for reproducible benchmarks
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    /// Generate f64 in range [-1.0, 1.0)
    pub fn next_f64_range(&mut self) -> f64 {
        let n = self.next_u64();
        (n >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    }

    /// Fill a fresh vector of `len` values in [-1.0, 1.0)
    pub fn vec_f64(&mut self, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.next_f64_range()).collect()
    }
}
